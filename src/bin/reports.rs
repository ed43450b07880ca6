// Reactor reports: safe counts with and without the Problem Dampener

use historian::cli;
use historian::puzzles::reports::{
    count_safe_reports, count_safe_reports_with_dampener, parse_reports,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    cli::run("reports", |text| {
        let reports = parse_reports(text)?;

        Ok(vec![
            format!("Number of safe reports: {}", count_safe_reports(&reports)),
            format!(
                "Number of safe reports (with Dampener): {}",
                count_safe_reports_with_dampener(&reports)
            ),
        ])
    })
}
