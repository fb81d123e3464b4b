//! # Steward Report
//!
//! Stress-test report generation.
//!
//! A [`ReportDocument`] bundles one scenario's inputs and outputs (the
//! scenario, the engine configuration, the metrics, and the derived
//! insights) with a title and timestamp. Rendering consumes the document
//! without recomputing anything, so a report is exactly reproducible from
//! the same evaluation.
//!
//! The shipped renderer produces plain text. The filename convention is
//! `{OrgPrefix}_StressTest_{YYYY-MM-DD}_{HH-MM}.{ext}` regardless of the
//! back end.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod document;
pub mod render;

pub use document::{ReportBuilder, ReportDocument};
pub use render::{format_pct, format_sgd, render_bytes, render_text};

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_crate_compiles() {
        // Basic smoke test
        assert_eq!(format_sgd(dec!(1_000)), "S$1,000");
    }
}
