//! statr - Statistics engine for tabular data analysis
//!
//! statr computes descriptive statistics, correlation, regression, parametric
//! and non-parametric hypothesis tests and simple time series summaries over
//! numeric samples, and dispatches named analyses over raw data columns.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                      analysis                            │
//! │   (method selectors, raw column coercion, history)      │
//! └──────────────────────────┬──────────────────────────────┘
//!                            │ uses
//! ┌──────────────────────────▼──────────────────────────────┐
//! │                        stats                             │
//! │  (algorithm traits, StatsEngine, distributions, math)   │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`stats`] - Algorithm traits, the [`StatsEngine`] client, result records,
//!   continuous distributions and scalar math utilities
//! - [`analysis`] - Method dispatcher, tagged outcomes and analysis history
//!
//! # Logging
//!
//! Entry points emit `tracing` events (`debug` on entry, `warn` for non-fatal
//! conditions such as low expected counts). statr never installs a
//! subscriber.
//!
//! # Example
//!
//! ```
//! use statr::{HypothesisTestingAlgorithms, StatsConfig, StatsEngine};
//!
//! let engine = StatsEngine::new(StatsConfig::strict()).unwrap();
//! let control = [5.1, 4.9, 5.3, 5.0, 5.2];
//! let treated = [6.0, 6.2, 5.9, 6.1, 6.3];
//!
//! let result = engine.independent_ttest(&control, &treated).unwrap();
//! assert!(result.significant);
//! println!("{}", result.summary());
//! ```

pub mod analysis;
pub mod stats;

// Re-export main types for convenience
pub use analysis::{Analysis, AnalysisHistory, AnalysisMethod, AnalysisOutcome, run_analysis};
pub use stats::{
    // Algorithm traits
    CorrelationAlgorithms,
    DescriptiveStatisticsAlgorithms,
    HypothesisTestingAlgorithms,
    NonParametricAlgorithms,
    RegressionAlgorithms,
    // Errors
    StatsError,
    StatsResult,
    // Engine and configuration
    StatsConfig,
    StatsEngine,
    TimeSeriesAlgorithms,
};
