use std::collections::HashMap;

use crate::draw_history::DrawRecord;

/// Count of historical draws containing each number in `1..=total_numbers`.
/// Every supplied record counts equally (no decay, no windowing; the caller
/// decides how much history to pass in), and never-drawn numbers are present
/// with a zero count.
pub fn frequency_table(history: &[DrawRecord], total_numbers: u8) -> HashMap<u8, u32> {
    let mut frequency: HashMap<u8, u32> = HashMap::new();
    for number in 1..=total_numbers {
        frequency.insert(number, 0);
    }
    for record in history {
        for number in &record.numbers {
            if let Some(count) = frequency.get_mut(number) {
                *count += 1;
            }
        }
    }
    frequency
}

/// Contests elapsed since each number last appeared. A number that never
/// appears is treated as overdue since the first known contest, so its delay
/// equals the latest contest number. Empty history yields all zeros.
pub fn delay_table(history: &[DrawRecord], total_numbers: u8) -> HashMap<u8, u32> {
    let latest = latest_contest_number(history);

    let mut last_seen: HashMap<u8, u32> = HashMap::new();
    for record in history {
        for &number in &record.numbers {
            let seen = last_seen.entry(number).or_insert(record.contest_number);
            if record.contest_number > *seen {
                *seen = record.contest_number;
            }
        }
    }

    let mut delays = HashMap::new();
    for number in 1..=total_numbers {
        let delay = match last_seen.get(&number) {
            Some(&contest) => latest - contest,
            None => latest,
        };
        delays.insert(number, delay);
    }
    delays
}

/// Highest contest number in the snapshot, 0 when the history is empty.
pub fn latest_contest_number(history: &[DrawRecord]) -> u32 {
    history.iter().map(|r| r.contest_number).max().unwrap_or(0)
}
