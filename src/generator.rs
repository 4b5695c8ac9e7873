use anyhow::Result;
use rand::Rng;
use serde::Serialize;

use crate::draw_history::DrawRecord;
use crate::lottery::{UnknownLottery, find_lottery};
use crate::number_stats::{delay_table, frequency_table};
use crate::sampler::sample_game;
use crate::scoring::{Strategy, score_candidates};

#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub lottery_slug: String,
    pub strategy: Strategy,
    /// The caller is expected to clamp this to a sane bound; zero yields an
    /// empty result.
    pub number_of_games: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedGame {
    pub numbers: Vec<u8>,
    pub constraints_satisfied: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerationResult {
    pub strategy: Strategy,
    pub based_on: String,
    pub games: Vec<GeneratedGame>,
}

/// Run the full pipeline: resolve the format, aggregate the supplied history
/// into frequency and delay tables, score every number once, then sample the
/// requested count of games from that single score table. Games are drawn
/// independently and may overlap or repeat.
///
/// The history snapshot and the random source are injected by the caller;
/// the engine holds no state across calls. The only hard failure is an
/// unresolvable slug, surfaced as [`UnknownLottery`] before any table is
/// computed; an empty history degrades to neutral scores instead of failing.
pub fn generate(
    request: &GenerationRequest,
    history: &[DrawRecord],
    rng: &mut impl Rng,
) -> Result<GenerationResult> {
    let lottery = find_lottery(&request.lottery_slug)
        .ok_or_else(|| UnknownLottery(request.lottery_slug.clone()))?;

    let frequency = frequency_table(history, lottery.total_numbers);
    let delay = delay_table(history, lottery.total_numbers);
    let candidates = score_candidates(&frequency, &delay, lottery.total_numbers, request.strategy);

    let constraints = lottery.constraints();
    let games = (0..request.number_of_games)
        .map(|_| {
            let sampled = sample_game(&candidates, lottery.game_numbers, &constraints, rng);
            GeneratedGame {
                numbers: sampled.numbers,
                constraints_satisfied: sampled.constraints_satisfied,
            }
        })
        .collect();

    Ok(GenerationResult {
        strategy: request.strategy,
        based_on: format!(
            "{} past contests analyzed with statistical pattern filters",
            history.len()
        ),
        games,
    })
}
