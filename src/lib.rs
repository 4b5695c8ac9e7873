//! Statistical game generation for fixed-format lottery games: per-number
//! frequency/delay aggregation, strategy-weighted scoring, and constrained
//! weighted sampling of playable combinations.

pub mod draw_history;
pub mod generator;
pub mod lottery;
pub mod number_stats;
pub mod sampler;
pub mod scoring;
