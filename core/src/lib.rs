//! # CGNAT checker core
//!
//! * [`resolver`]: where the two addresses come from (UDP probe, HTTP echo service).
//! * [`check`]: runs both resolvers in order and classifies the external address.
//! * [`error`]: the network failures either resolver can report.

pub mod check;
pub mod error;
pub mod resolver;
