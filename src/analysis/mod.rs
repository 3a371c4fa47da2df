//! Method dispatch over raw tabular columns.
//!
//! A caller picks an [`AnalysisMethod`] by its selector string, hands over
//! the raw cells of an independent and a dependent column, and gets back an
//! [`Analysis`] record whose [`AnalysisOutcome`] variant is fixed by the
//! method. [`AnalysisHistory`] keeps the most recent runs.
//!
//! ```
//! use serde_json::json;
//! use statr::analysis::{run_analysis, AnalysisMethod, AnalysisOutcome};
//! use statr::stats::StatsEngine;
//!
//! let engine = StatsEngine::default();
//! let method: AnalysisMethod = "scatter".parse().unwrap();
//! let x = [json!(1), json!("2"), json!(3), json!(4)];
//! let y = [json!(2.0), json!(4.1), json!(6.2), json!(7.9)];
//!
//! let analysis = run_analysis(&engine, method, "dose", "response", &x, &y).unwrap();
//! assert!(matches!(analysis.outcome, AnalysisOutcome::Correlation(_)));
//! ```

mod dispatch;
mod history;
mod method;
mod outcome;

pub use dispatch::{Analysis, column, group_by_key, run_analysis, run_analysis_on_rows};
pub use history::{AnalysisHistory, HISTORY_LIMIT, HistoryEntry};
pub use method::AnalysisMethod;
pub use outcome::AnalysisOutcome;
