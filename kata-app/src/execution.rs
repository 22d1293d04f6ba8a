//! Turns parsed commands into records by calling the kata algorithms.

use crate::{config::Command, demo, error::AppError, output::Record};
use kata_core::{
    check_brackets, coins::CounterStrategy, count_islands_with, find_covering_window, KataError,
    LandGrid, Topology,
};
use log::info;
use std::collections::{BTreeSet, HashSet};

// Helper function to parse rows like "110" into 0/1 cells
fn parse_rows(rows: &[String]) -> Result<Vec<Vec<u8>>, AppError> {
    rows.iter()
        .enumerate()
        .map(|(y, row)| {
            row.chars()
                .map(|c| {
                    c.to_digit(10)
                        .and_then(|d| u8::try_from(d).ok())
                        .ok_or_else(|| {
                            AppError::Config(format!(
                                "Invalid cell '{c}' in row {y} ('{row}'). Expected digits 0 or 1."
                            ))
                        })
                })
                .collect::<Result<Vec<u8>, AppError>>()
        })
        .collect()
}

/// Renders a character set in sorted order so output is deterministic.
pub(crate) fn render_set(chars: &HashSet<char>) -> String {
    let sorted: BTreeSet<char> = chars.iter().copied().collect();
    let items: Vec<String> = sorted.into_iter().map(String::from).collect();
    format!("{{{}}}", items.join(", "))
}

pub(crate) fn render_rows(rows: &[Vec<u8>]) -> String {
    format!("{rows:?}")
}

/// Counts coin combinations with the chosen strategy.
pub fn run_coins(amount: i64, coins: &[u32], strategy: CounterStrategy) -> Result<Record, AppError> {
    let counter = strategy.counter();
    info!("Counting combinations of {coins:?} for {amount} ({})", counter.name());
    let ways = counter
        .count(amount, coins)
        .map_err(KataError::from)?;
    Ok(Record::new("coins", format!("{amount}, {coins:?}"), ways))
}

/// Checks bracket balance; a violation is logged but still a normal answer.
pub fn run_brackets(expression: &str) -> Record {
    info!("Checking brackets in {expression:?}");
    let balanced = match check_brackets(expression) {
        Ok(()) => true,
        Err(violation) => {
            info!("Unbalanced: {violation}");
            false
        }
    };
    Record::new("brackets", format!("{expression:?}"), balanced)
}

/// Counts islands in the grid described by `rows`.
pub fn run_islands(rows: &[Vec<u8>], topology: Topology) -> Result<Record, AppError> {
    let grid = LandGrid::from_rows(rows).map_err(KataError::from)?;
    info!(
        "Counting islands in {}x{} grid ({topology:?})",
        grid.width, grid.height
    );
    let islands = count_islands_with(&grid, topology);
    Ok(Record::new("islands", render_rows(rows), islands))
}

/// Finds the shortest window of `text` covering `required`.
pub fn run_window(text: &str, required: &HashSet<char>) -> Record {
    info!("Searching {text:?} for a window covering {}", render_set(required));
    let window = find_covering_window(text, required);
    match window.and_then(|w| w.slice(text).map(|s| (w, s))) {
        Some((w, slice)) => info!("Shortest window {slice:?} at offset {}", w.start),
        None => info!("No covering window"),
    }
    Record::new(
        "window",
        format!("{text:?}, {}", render_set(required)),
        window.map_or(0, |w| w.len),
    )
}

/// Executes a command and returns the records to print.
///
/// # Errors
///
/// Returns `AppError::Config` for unparsable grid rows and `AppError::Kata`
/// when an algorithm rejects its input.
pub fn run_command(command: &Command) -> Result<Vec<Record>, AppError> {
    match command {
        Command::Coins {
            amount,
            coins,
            strategy,
        } => Ok(vec![run_coins(*amount, coins, *strategy)?]),
        Command::Brackets { expression } => Ok(vec![run_brackets(expression)]),
        Command::Islands { rows, topology } => {
            let rows = parse_rows(rows)?;
            Ok(vec![run_islands(&rows, *topology)?])
        }
        Command::Window { text, chars } => {
            let required: HashSet<char> = chars.chars().collect();
            Ok(vec![run_window(text, &required)])
        }
        Command::Demo => demo::demo_records(),
    }
}
