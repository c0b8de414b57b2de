use std::io::{self, BufRead, Write};

use cgnat_common::config::Config;
use cgnat_core::check::{CgnatReport, CheckError, Checker};

use crate::terminal::print;

/// Failures are reported on stdout like a report; the process still exits normally.
pub async fn check(cfg: &Config) -> anyhow::Result<()> {
    let outcome = Checker::from_config(cfg).check().await;

    let mut out = io::stdout().lock();
    let mut input = io::stdin().lock();
    finish(&outcome, cfg.wait_for_enter, &mut input, &mut out)?;

    Ok(())
}

/// Prints the outcome; only a completed report waits for Enter.
fn finish<R: BufRead, W: Write>(
    outcome: &Result<CgnatReport, CheckError>,
    wait_for_enter: bool,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    print::outcome(out, outcome)?;

    if outcome.is_ok() && wait_for_enter {
        print::press_enter_to_exit(input, out)?;
    }

    Ok(())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
