// Location list comparison

use super::{parse_field, ParseError};
use log::debug;
use rustc_hash::FxHashMap;

/// The two columns of a location list file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationLists {
    pub left: Vec<i64>,
    pub right: Vec<i64>,
}

/// Parse a two-column file.
///
/// Lines that do not hold exactly two fields are skipped.
pub fn parse_location_lists(text: &str) -> Result<LocationLists, ParseError> {
    let mut lists = LocationLists::default();

    for (index, line) in text.lines().enumerate() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if let [left, right] = fields.as_slice() {
            lists.left.push(parse_field(left, index + 1)?);
            lists.right.push(parse_field(right, index + 1)?);
        }
    }

    debug!("parsed {} location pairs", lists.left.len());
    Ok(lists)
}

/// Sum of distances between the columns paired smallest to smallest.
///
/// If the columns differ in length the extra values are ignored.
pub fn total_distance(left: &[i64], right: &[i64]) -> i128 {
    let mut left = left.to_vec();
    let mut right = right.to_vec();
    left.sort_unstable();
    right.sort_unstable();

    left.iter()
        .zip(right.iter())
        .map(|(&l, &r)| (l as i128 - r as i128).abs())
        .sum()
}

/// Each left value multiplied by how often it appears on the right, summed
pub fn similarity_score(left: &[i64], right: &[i64]) -> i128 {
    let mut counts: FxHashMap<i64, i128> = FxHashMap::default();
    for &value in right {
        *counts.entry(value).or_insert(0) += 1;
    }

    left.iter()
        .map(|value| *value as i128 * counts.get(value).copied().unwrap_or(0))
        .sum()
}
