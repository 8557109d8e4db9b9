//! Per-station uptime computation
//!
//! Consumes the parser's validated output and produces an integer uptime
//! percentage for every declared station. Pure data-in/data-out: the
//! calculator has no failure modes because its inputs are pre-validated.

pub mod calculator;
pub mod interval;

#[cfg(test)]
pub mod tests;

// Re-export the calculation entry points
pub use calculator::compute_uptime;
pub use interval::{Interval, merge_intervals, total_covered};
