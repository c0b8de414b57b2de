//! Integration tests for the checker, run against a throwaway HTTP server on
//! loopback so no test needs internet access.

pub mod support;

#[cfg(test)]
mod external;
