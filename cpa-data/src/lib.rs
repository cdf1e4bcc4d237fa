//! Recommendation algorithms for crop suitability and planting windows.
//!
//! Two independent pipelines run per request:
//!
//! - crop ranking: classifier probabilities are turned into a short,
//!   confidence-filtered list ([`ranking`]);
//! - planting windows: a multi-year daily rainfall history is averaged by
//!   day-of-year ([`aggregation`]), scored with trailing rolling sums and
//!   reduced to a few well-separated windows ([`windows`]), then mapped onto
//!   upcoming calendar dates ([`projection`]).
//!
//! [`pipeline`] wires them together, either on already-fetched inputs or
//! through the collaborator traits in `cpa_core::sources`.

pub mod aggregation;
pub mod pipeline;
pub mod projection;
pub mod ranking;
pub mod windows;

pub use pipeline::{
    rank_crops, recommend_crops, recommend_planting_times, recommend_planting_windows,
    recommend_planting_windows_with,
};
pub use ranking::RankingConfig;
pub use windows::WindowConfig;
