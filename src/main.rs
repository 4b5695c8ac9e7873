use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

use palpite::draw_history::{self, DrawRecord};
use palpite::generator::{GenerationRequest, GenerationResult, generate};
use palpite::scoring::Strategy;

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    let mut args = std::env::args().skip(1);
    let slug = args
        .next()
        .context("usage: palpite <lottery-slug> [history.json]")?;
    let history_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("history.json"));

    let strategy = std::env::var("STRATEGY")
        .map(|raw| Strategy::parse(&raw))
        .unwrap_or_default();
    let number_of_games = std::env::var("NUM_GAMES")
        .ok()
        .and_then(|val| val.parse::<usize>().ok())
        .unwrap_or(3);

    let history = load_history(&history_path)?;

    let mut rng = match std::env::var("SEED").ok().and_then(|v| v.parse::<u64>().ok()) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let request = GenerationRequest {
        lottery_slug: slug,
        strategy,
        number_of_games,
    };
    let result = generate(&request, &history, &mut rng)?;

    if std::env::var("OUTPUT_JSON").is_ok_and(|v| v == "1") {
        print_json(&result)?;
    } else {
        print_report(&request.lottery_slug, &result);
    }
    Ok(())
}

fn load_history(path: &Path) -> Result<Vec<DrawRecord>> {
    let mut history = draw_history::load_history_file(path)?;
    if let Ok(raw) = std::env::var("HISTORY_LIMIT")
        && let Ok(limit) = raw.parse::<usize>()
    {
        draw_history::most_recent(&mut history, limit);
        eprintln!("[INFO] history limited to the {} most recent contests", history.len());
    }
    Ok(history)
}

fn print_report(slug: &str, result: &GenerationResult) {
    println!("Lottery:  {slug}");
    println!("Strategy: {}", result.strategy.label());
    println!("Based on: {}", result.based_on);
    println!();
    for (idx, game) in result.games.iter().enumerate() {
        let numbers = game
            .numbers
            .iter()
            .map(|n| format!("{n:02}"))
            .collect::<Vec<_>>()
            .join(" ");
        println!("Game {:>2}: {numbers}", idx + 1);
        if !game.constraints_satisfied {
            eprintln!(
                "[WARN] game {} kept after exhausting pattern filter attempts",
                idx + 1
            );
        }
    }
}

fn print_json(result: &GenerationResult) -> Result<()> {
    #[derive(Serialize)]
    struct Export<'a> {
        generated_at: String,
        #[serde(flatten)]
        result: &'a GenerationResult,
    }

    let export = Export {
        generated_at: chrono::Utc::now().to_rfc3339(),
        result,
    };
    let json = serde_json::to_string_pretty(&export).context("serialize generation result")?;
    println!("{json}");
    Ok(())
}
