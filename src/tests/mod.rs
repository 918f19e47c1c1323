//! Internal test modules - whitebox tests with crate access
//!
//! Tests here drive the real TuiApp through the acceptance harness, or
//! render individual widgets into a buffer.

mod acceptance_search;
