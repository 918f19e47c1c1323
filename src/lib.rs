//! Admin Table Viewer (admintable)
//!
//! TUI application for browsing exported admin tables: click-to-sort
//! columns, numbered pagination, debounced live search with a no-results
//! banner, flash alerts, animated stat counters and a persisted light/dark
//! theme.
//!
//! Follows a Pure Core / Impure Shell architecture: everything under
//! [`state`] is deterministic and takes time as an argument, while
//! [`view`] owns the terminal and the clock.

pub mod config;
pub mod logging;
pub mod model;
pub mod parser;
pub mod source;
pub mod state;
pub mod view;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
