use std::path::PathBuf;

use anyhow::{Context, Result};

use palpite::draw_history;
use palpite::lottery::{UnknownLottery, find_lottery};
use palpite::number_stats::{delay_table, frequency_table, latest_contest_number};

const REPORT_ROWS: usize = 10;

// This binary is intentionally simple: it loads one snapshot and prints the
// per-number tables the generator scores from, for quick manual inspection.
fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let slug = args
        .next()
        .context("usage: stats_report <lottery-slug> [history.json]")?;
    let path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("history.json"));

    let lottery = find_lottery(&slug).ok_or_else(|| UnknownLottery(slug.clone()))?;
    let history = draw_history::load_history_file(&path)?;

    let frequency = frequency_table(&history, lottery.total_numbers);
    let delay = delay_table(&history, lottery.total_numbers);

    println!(
        "{} ({} numbers, pick {})",
        lottery.name, lottery.total_numbers, lottery.game_numbers
    );
    println!(
        "Contests analyzed: {} (latest {})",
        history.len(),
        latest_contest_number(&history)
    );
    println!();

    let mut hot: Vec<(u8, u32)> = frequency.into_iter().collect();
    hot.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    println!("Hot numbers (most drawn):");
    for (number, count) in hot.iter().take(REPORT_ROWS) {
        println!("  {number:>3}  drawn {count} times");
    }
    println!();

    let mut overdue: Vec<(u8, u32)> = delay.into_iter().collect();
    overdue.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    println!("Overdue numbers (longest without a draw):");
    for (number, gap) in overdue.iter().take(REPORT_ROWS) {
        println!("  {number:>3}  {gap} contests since last drawn");
    }

    Ok(())
}
