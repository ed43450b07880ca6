// Reactor report safety checks

use super::{parse_field, ParseError};
use log::debug;

const MIN_STEP: i128 = 1;
const MAX_STEP: i128 = 3;

/// Parse one report per line. A blank line is an empty report.
pub fn parse_reports(text: &str) -> Result<Vec<Vec<i64>>, ParseError> {
    let reports = text
        .lines()
        .enumerate()
        .map(|(index, line)| {
            line.split_whitespace()
                .map(|field| parse_field(field, index + 1))
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!("parsed {} reports", reports.len());
    Ok(reports)
}

/// A report is safe when its levels are strictly monotonic and every
/// adjacent step is between 1 and 3. Fewer than two levels is always safe.
pub fn is_report_safe(levels: &[i64]) -> bool {
    if levels.len() < 2 {
        return true;
    }

    let steps: Vec<i128> = levels
        .windows(2)
        .map(|pair| pair[1] as i128 - pair[0] as i128)
        .collect();

    let increasing = steps.iter().all(|step| (MIN_STEP..=MAX_STEP).contains(step));
    let decreasing = steps
        .iter()
        .all(|step| (-MAX_STEP..=-MIN_STEP).contains(step));

    increasing || decreasing
}

/// Safe as is, or safe after removing any single level
pub fn is_report_safe_with_dampener(levels: &[i64]) -> bool {
    if is_report_safe(levels) {
        return true;
    }

    (0..levels.len()).any(|skip| {
        let dampened: Vec<i64> = levels
            .iter()
            .enumerate()
            .filter(|(index, _)| *index != skip)
            .map(|(_, level)| *level)
            .collect();
        is_report_safe(&dampened)
    })
}

pub fn count_safe_reports(reports: &[Vec<i64>]) -> usize {
    reports.iter().filter(|report| is_report_safe(report)).count()
}

pub fn count_safe_reports_with_dampener(reports: &[Vec<i64>]) -> usize {
    reports
        .iter()
        .filter(|report| is_report_safe_with_dampener(report))
        .count()
}
