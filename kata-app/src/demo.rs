//! Reference inputs for every drill, paired with their known answers.

use crate::error::AppError;
use crate::execution::{run_brackets, run_coins, run_islands, run_window};
use crate::output::Record;
use kata_core::coins::CounterStrategy;
use kata_core::Topology;
use std::collections::HashSet;

const COIN_CASES: &[(i64, &[u32], u64)] = &[
    (15, &[1, 5], 4),
    (0, &[1, 5], 1),
    (10, &[], 0),
    (100, &[1, 5, 10, 25, 50], 292),
    (-5, &[1], 0),
];

const BRACKET_CASES: &[(&str, bool)] = &[
    ("(3+9{12+4})(25)", true),
    ("3+9{12+4})(25)", false),
    ("{3*[1+5(6+8)]}", true),
    ("{3*[1+5(6+8])}", false),
    ("{3*[1+5(6+8)]", false),
    ("", true),
];

const WINDOW_CASES: &[(&str, &str, usize)] = &[
    ("adddddbcbba", "abc", 4),
    ("abc", "abc", 3),
    ("abdddddcbeba", "abc", 5),
    ("abweweffawefcaaaaboiwuroqiwuroiueeeb", "abc", 6),
    ("abcdefg", "", 0),
    ("", "abc", 0),
];

fn island_cases() -> Vec<(Vec<Vec<u8>>, usize)> {
    vec![
        (vec![vec![1, 1, 1], vec![1, 0, 0], vec![0, 1, 0]], 2),
        (vec![vec![1, 0, 0], vec![0, 1, 0], vec![0, 0, 1]], 3),
        (vec![vec![1, 1, 1], vec![1, 0, 1], vec![0, 1, 1]], 1),
        (vec![], 0),
    ]
}

/// Runs every reference case and returns one record per case.
///
/// The records are returned even when some answers are wrong; use
/// [`check_records`] to turn mismatches into an error.
pub fn demo_records() -> Result<Vec<Record>, AppError> {
    let mut records = Vec::new();

    for &(amount, coins, expected) in COIN_CASES {
        records.push(run_coins(amount, coins, CounterStrategy::Memoized)?.expecting(expected));
    }
    for &(expression, expected) in BRACKET_CASES {
        records.push(run_brackets(expression).expecting(expected));
    }
    for (rows, expected) in island_cases() {
        records.push(run_islands(&rows, Topology::Bounded)?.expecting(expected));
    }
    for &(text, chars, expected) in WINDOW_CASES {
        let required: HashSet<char> = chars.chars().collect();
        records.push(run_window(text, &required).expecting(expected));
    }

    Ok(records)
}

/// Fails with `AppError::DemoFailed` if any record missed its expected answer.
pub fn check_records(records: &[Record]) -> Result<(), AppError> {
    let failed = records.iter().filter(|r| !r.passed()).count();
    if failed > 0 {
        log::error!("{failed} of {} demo cases failed", records.len());
        return Err(AppError::DemoFailed(failed, records.len()));
    }
    log::info!("All {} demo cases passed", records.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_demo_cases_pass() {
        let records = demo_records().unwrap();
        assert_eq!(records.len(), 21);
        for record in &records {
            assert!(record.passed(), "{record:?}");
        }
        assert!(check_records(&records).is_ok());
    }

    #[test]
    fn test_check_records_counts_failures() {
        let records = vec![
            Record::new("coins", String::new(), 1).expecting(1),
            Record::new("coins", String::new(), 1).expecting(2),
        ];
        assert!(matches!(
            check_records(&records),
            Err(AppError::DemoFailed(1, 2))
        ));
    }
}
