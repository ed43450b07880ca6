// Location lists: total distance and similarity score

use historian::cli;
use historian::puzzles::lists::{parse_location_lists, similarity_score, total_distance};
use std::process::ExitCode;

fn main() -> ExitCode {
    cli::run("lists", |text| {
        let lists = parse_location_lists(text)?;

        Ok(vec![
            format!("Total distance: {}", total_distance(&lists.left, &lists.right)),
            format!(
                "Similarity score: {}",
                similarity_score(&lists.left, &lists.right)
            ),
        ])
    })
}
