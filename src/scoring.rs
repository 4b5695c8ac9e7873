use std::collections::HashMap;

use serde::Serialize;

// Blend weights are tuned policy, not fitted values. The dominant signal
// gets 0.8 under the single-signal strategies.
const PRIMARY_WEIGHT: f64 = 0.8;
const SECONDARY_WEIGHT: f64 = 0.2;
const BALANCED_WEIGHT: f64 = 0.5;

/// Weighting policy that combines the frequency and delay signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Frequency,
    Delay,
    #[default]
    Balanced,
}

impl Strategy {
    /// Unrecognized or absent input falls back to the balanced blend.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "frequency" => Self::Frequency,
            "delay" => Self::Delay,
            _ => Self::Balanced,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Frequency => "frequency",
            Self::Delay => "delay",
            Self::Balanced => "balanced",
        }
    }
}

/// One number of the universe with its blended score in `[0, 1]`.
#[derive(Debug, Clone, Copy)]
pub struct CandidateScore {
    pub number: u8,
    pub score: f64,
}

/// Normalize both tables against their maxima and blend them per strategy,
/// producing one candidate per number in `1..=total_numbers`. The maxima
/// are floored at 1 so an empty or uniform history yields neutral scores
/// instead of dividing by zero.
pub fn score_candidates(
    frequency: &HashMap<u8, u32>,
    delay: &HashMap<u8, u32>,
    total_numbers: u8,
    strategy: Strategy,
) -> Vec<CandidateScore> {
    let max_freq = frequency.values().copied().max().unwrap_or(0).max(1) as f64;
    let max_delay = delay.values().copied().max().unwrap_or(0).max(1) as f64;

    (1..=total_numbers)
        .map(|number| {
            let norm_freq = f64::from(frequency.get(&number).copied().unwrap_or(0)) / max_freq;
            let norm_delay = f64::from(delay.get(&number).copied().unwrap_or(0)) / max_delay;
            let score = match strategy {
                Strategy::Frequency => {
                    PRIMARY_WEIGHT * norm_freq + SECONDARY_WEIGHT * norm_delay
                }
                Strategy::Delay => PRIMARY_WEIGHT * norm_delay + SECONDARY_WEIGHT * norm_freq,
                Strategy::Balanced => {
                    BALANCED_WEIGHT * norm_freq + BALANCED_WEIGHT * norm_delay
                }
            };
            CandidateScore { number, score }
        })
        .collect()
}
