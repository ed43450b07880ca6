// Corrupted memory: sums of all and of enabled multiplications

use historian::cli;
use historian::{extract_multiply_results_conditional, extract_multiply_results_unconditional};
use std::process::ExitCode;

fn main() -> ExitCode {
    cli::run("memory", |text| {
        let all = extract_multiply_results_unconditional(text);
        let enabled = extract_multiply_results_conditional(text);

        Ok(vec![
            format!("The sum of all valid multiplications is: {}", all),
            format!("The sum of enabled multiplications is: {}", enabled),
        ])
    })
}
