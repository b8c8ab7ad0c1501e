//! Technical-analysis engine: raw price samples in, one immutable
//! [`MarketSnapshot`] out.
//!
//! Everything in this crate is a pure function of its inputs. There is no
//! shared state, no I/O and no logging, so the pipeline can run concurrently
//! once per request without synchronization.

pub mod classify;
pub mod directory;
pub mod indicators;
pub mod labels;
pub mod normalize;
pub mod recommend;
pub mod score;
pub mod settings;
pub mod snapshot;

#[cfg(test)]
pub(crate) mod fixtures;

pub use classify::classify;
pub use directory::SymbolDirectory;
pub use indicators::IndicatorSnapshot;
pub use normalize::{normalize, CandleWindow};
pub use recommend::{compose, Recommendation};
pub use score::{confidence, risk_score};
pub use settings::{AnalysisSettings, LevelPolicy};
pub use snapshot::{build_snapshot, MarketSnapshot};
