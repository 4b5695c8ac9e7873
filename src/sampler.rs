use std::cmp::Ordering;

use rand::Rng;

use crate::lottery::GameConstraints;
use crate::scoring::CandidateScore;

// Bounded so overly strict filters cannot spin forever.
pub const MAX_ATTEMPTS_PER_GAME: usize = 50;

// Share of the pool eligible for each weighted pick, floored so the draw
// never turns fully deterministic even with a strongly skewed score table.
const TOP_POOL_FRACTION: f64 = 0.3;
const TOP_POOL_MIN: usize = 5;

/// One sampled combination. `constraints_satisfied` is false when the
/// attempt bound ran out and the last attempted combination was kept.
#[derive(Debug, Clone)]
pub struct SampledGame {
    pub numbers: Vec<u8>,
    pub constraints_satisfied: bool,
}

/// Draw one combination of `game_numbers` distinct numbers by score-weighted
/// rejection sampling.
///
/// Each attempt repeatedly picks a uniformly random candidate out of the
/// top-scoring slice of a shrinking pool, so high scores are favored without
/// ever fixing the outcome, then checks the sorted result against the shape
/// constraints. Attempts are bounded; when the bound runs out the last
/// attempted combination is returned with the flag cleared so callers can
/// tell the two outcomes apart.
pub fn sample_game(
    candidates: &[CandidateScore],
    game_numbers: usize,
    constraints: &GameConstraints,
    rng: &mut impl Rng,
) -> SampledGame {
    let mut numbers = Vec::new();
    for _ in 0..MAX_ATTEMPTS_PER_GAME {
        numbers = sample_attempt(candidates, game_numbers, rng);
        if satisfies_constraints(&numbers, constraints) {
            return SampledGame {
                numbers,
                constraints_satisfied: true,
            };
        }
    }
    SampledGame {
        numbers,
        constraints_satisfied: false,
    }
}

fn sample_attempt(
    candidates: &[CandidateScore],
    game_numbers: usize,
    rng: &mut impl Rng,
) -> Vec<u8> {
    let mut pool = candidates.to_vec();
    let mut numbers = Vec::with_capacity(game_numbers);

    while numbers.len() < game_numbers && !pool.is_empty() {
        // Stable sort keeps ascending-number order between equal scores, so
        // a neutral all-zero score table degrades to an unweighted slice.
        pool.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        let top_n = ((pool.len() as f64 * TOP_POOL_FRACTION).floor() as usize)
            .max(TOP_POOL_MIN)
            .min(pool.len());
        let index = rng.gen_range(0..top_n);
        numbers.push(pool.remove(index).number);
    }

    numbers.sort_unstable();
    numbers
}

fn satisfies_constraints(numbers: &[u8], constraints: &GameConstraints) -> bool {
    let odd = numbers.iter().filter(|&&n| n % 2 == 1).count();
    if odd < constraints.odd_min || odd > constraints.odd_max {
        return false;
    }

    let sum: u32 = numbers.iter().map(|&n| u32::from(n)).sum();
    if sum < constraints.sum_min || sum > constraints.sum_max {
        return false;
    }

    if occupied_quadrants(numbers, constraints) < constraints.min_quadrants {
        return false;
    }

    longest_run(numbers) <= constraints.max_run
}

/// Quadrant of a number on the fixed grid layout: rows of `grid_columns`
/// numbers, split after `grid_row_split` rows and `grid_col_split` columns.
fn quadrant(number: u8, constraints: &GameConstraints) -> usize {
    let columns = u32::from(constraints.grid_columns);
    let row = (u32::from(number) + columns - 1) / columns;
    let col = (u32::from(number) - 1) % columns + 1;
    match (
        row <= u32::from(constraints.grid_row_split),
        col <= u32::from(constraints.grid_col_split),
    ) {
        (true, true) => 0,
        (true, false) => 1,
        (false, true) => 2,
        (false, false) => 3,
    }
}

fn occupied_quadrants(numbers: &[u8], constraints: &GameConstraints) -> usize {
    let mut seen = [false; 4];
    for &number in numbers {
        seen[quadrant(number, constraints)] = true;
    }
    seen.iter().filter(|&&occupied| occupied).count()
}

/// Longest run of consecutive integers in an ascending sequence.
fn longest_run(numbers: &[u8]) -> usize {
    if numbers.is_empty() {
        return 0;
    }
    let mut longest = 1;
    let mut current = 1;
    for pair in numbers.windows(2) {
        if pair[1] == pair[0] + 1 {
            current += 1;
        } else {
            current = 1;
        }
        longest = longest.max(current);
    }
    longest
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::{longest_run, occupied_quadrants, quadrant, sample_game, satisfies_constraints};
    use crate::lottery::GameConstraints;
    use crate::scoring::CandidateScore;

    fn neutral_candidates(total_numbers: u8) -> Vec<CandidateScore> {
        (1..=total_numbers)
            .map(|number| CandidateScore { number, score: 0.0 })
            .collect()
    }

    #[test]
    fn quadrants_split_the_grid_at_the_expected_boundaries() {
        let constraints = GameConstraints::default();
        assert_eq!(quadrant(1, &constraints), 0);
        assert_eq!(quadrant(25, &constraints), 0);
        assert_eq!(quadrant(6, &constraints), 1);
        assert_eq!(quadrant(30, &constraints), 1);
        assert_eq!(quadrant(31, &constraints), 2);
        assert_eq!(quadrant(55, &constraints), 2);
        assert_eq!(quadrant(36, &constraints), 3);
        assert_eq!(quadrant(60, &constraints), 3);
    }

    #[test]
    fn spread_counts_distinct_quadrants() {
        let constraints = GameConstraints::default();
        assert_eq!(occupied_quadrants(&[1, 2, 3], &constraints), 1);
        assert_eq!(occupied_quadrants(&[1, 8, 33, 58], &constraints), 4);
    }

    #[test]
    fn longest_run_finds_consecutive_stretches() {
        assert_eq!(longest_run(&[]), 0);
        assert_eq!(longest_run(&[4, 9, 23]), 1);
        assert_eq!(longest_run(&[4, 5, 9, 23]), 2);
        assert_eq!(longest_run(&[4, 5, 6, 9]), 3);
        assert_eq!(longest_run(&[1, 3, 4, 5, 9]), 3);
    }

    #[test]
    fn constraint_check_accepts_a_well_shaped_game() {
        let constraints = GameConstraints::default();
        // 4 odd, sum 160, three quadrants occupied, no run of three.
        assert!(satisfies_constraints(&[5, 9, 28, 33, 41, 44], &constraints));
    }

    #[test]
    fn constraint_check_rejects_each_violation() {
        let constraints = GameConstraints::default();
        // All even.
        assert!(!satisfies_constraints(&[8, 22, 28, 34, 42, 56], &constraints));
        // Sum below range, spread and parity fine.
        assert!(!satisfies_constraints(&[2, 5, 9, 18, 26, 31], &constraints));
        // Every number in one quadrant, sum and parity fine.
        assert!(!satisfies_constraints(&[10, 17, 19, 26, 28, 30], &constraints));
        // Run of three consecutive numbers, everything else fine.
        assert!(!satisfies_constraints(&[4, 17, 18, 19, 34, 48], &constraints));
    }

    #[test]
    fn sampled_game_has_the_requested_shape() {
        let candidates = neutral_candidates(60);
        let constraints = GameConstraints::default();
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..20 {
            let game = sample_game(&candidates, 6, &constraints, &mut rng);
            assert_eq!(game.numbers.len(), 6);
            assert!(game.numbers.iter().all(|&n| (1..=60).contains(&n)));
            assert!(game.numbers.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }

    #[test]
    fn skewed_scores_keep_the_draw_stochastic() {
        // One dominant candidate must not freeze the rest of the game.
        let mut candidates = neutral_candidates(60);
        candidates[41].score = 1.0;
        let constraints = GameConstraints::default();
        let mut rng = StdRng::seed_from_u64(5);

        let games: Vec<Vec<u8>> = (0..5)
            .map(|_| sample_game(&candidates, 6, &constraints, &mut rng).numbers)
            .collect();
        assert!(games.iter().any(|game| *game != games[0]));
    }

    #[test]
    fn exhausted_attempts_return_the_last_combination_flagged() {
        let candidates = neutral_candidates(60);
        let impossible = GameConstraints {
            sum_min: 10_000,
            ..GameConstraints::default()
        };
        let mut rng = StdRng::seed_from_u64(3);

        let game = sample_game(&candidates, 6, &impossible, &mut rng);
        assert!(!game.constraints_satisfied);
        assert_eq!(game.numbers.len(), 6);
    }

    #[test]
    fn tiny_universe_drains_the_pool_without_panicking() {
        let candidates = neutral_candidates(4);
        let constraints = GameConstraints::default();
        let mut rng = StdRng::seed_from_u64(8);

        let game = sample_game(&candidates, 4, &constraints, &mut rng);
        assert_eq!(game.numbers, vec![1, 2, 3, 4]);
        assert!(!game.constraints_satisfied);
    }
}
