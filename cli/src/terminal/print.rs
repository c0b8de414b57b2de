use std::io::{self, BufRead, Write};

use cgnat_core::check::{CgnatReport, CheckError, write_outcome};

pub const PROMPT: &str = "Press Enter to exit...";

/// The report goes to `out` untouched so stdout can be piped; decoration stays on stderr.
pub fn outcome<W: Write>(out: &mut W, outcome: &Result<CgnatReport, CheckError>) -> io::Result<()> {
    write_outcome(out, outcome)?;
    out.flush()
}

/// Prints the prompt and consumes exactly one line of `input`.
pub fn press_enter_to_exit<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{PROMPT}")?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(())
}
