use std::fmt;

/// One playable lottery format: the size of the number universe and how many
/// distinct numbers make up a single game.
#[derive(Debug, Clone)]
pub struct Lottery {
    pub slug: String,
    pub name: String,
    pub total_numbers: u8,
    pub game_numbers: usize,
}

impl Lottery {
    /// Shape constraints applied to combinations sampled for this format.
    ///
    /// Every format currently shares the Mega-Sena tuning (see
    /// `GameConstraints::default`). The literals are policy, not fitted
    /// values, and are almost certainly off for formats like 15-of-25;
    /// recalibrating them per format needs product input first.
    pub fn constraints(&self) -> GameConstraints {
        GameConstraints::default()
    }
}

/// Shape constraints a sampled combination must satisfy: parity balance,
/// sum range, quadrant spread on a fixed grid, and a cap on consecutive
/// runs.
#[derive(Debug, Clone, Copy)]
pub struct GameConstraints {
    pub odd_min: usize,
    pub odd_max: usize,
    pub sum_min: u32,
    pub sum_max: u32,
    pub min_quadrants: usize,
    pub grid_columns: u8,
    pub grid_row_split: u8,
    pub grid_col_split: u8,
    pub max_run: usize,
}

impl Default for GameConstraints {
    fn default() -> Self {
        Self {
            odd_min: 2,
            odd_max: 4,
            // Approximate range of common winning sums for 6-of-60 games.
            sum_min: 130,
            sum_max: 240,
            min_quadrants: 3,
            grid_columns: 10,
            grid_row_split: 3,
            grid_col_split: 5,
            max_run: 2,
        }
    }
}

/// Raised when a slug does not resolve to any registered lottery. Carried
/// inside `anyhow::Error` so callers can `downcast_ref` and treat it as a
/// not-found condition rather than a generic failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLottery(pub String);

impl fmt::Display for UnknownLottery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown lottery slug: {}", self.0)
    }
}

impl std::error::Error for UnknownLottery {}

/// Resolve a slug to its built-in format. The registry covers the four
/// mainline games; anything else resolves to `None`.
pub fn find_lottery(slug: &str) -> Option<Lottery> {
    let (name, total_numbers, game_numbers) = match slug {
        "megasena" | "mega-sena" => ("Mega-Sena", 60, 6),
        "lotofacil" => ("Lotofácil", 25, 15),
        "lotomania" => ("Lotomania", 100, 20),
        "quina" => ("Quina", 80, 5),
        _ => return None,
    };
    Some(Lottery {
        slug: slug.to_string(),
        name: name.to_string(),
        total_numbers,
        game_numbers,
    })
}
