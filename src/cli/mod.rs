//! Shared command-line harness
//!
//! Every tool takes exactly one positional argument, a file path, and prints
//! either all of its result lines or a single error line on standard output.
//!
//! | Failure                    | Output                                  | Exit |
//! |----------------------------|-----------------------------------------|------|
//! | wrong argument count       | `Usage: <program> <file_path>`          | 1    |
//! | file not found             | `Error: File '<path>' not found.`       | 0    |
//! | invalid data               | `Error: File contains invalid data.`    | 0    |
//! | anything else              | `An unexpected error occurred: <cause>` | 0    |

pub mod errors;

pub use errors::{ErrorClass, HistorianError};

use log::{debug, info};
use std::fs;
use std::io;
use std::path::Path;
use std::process::ExitCode;

/// Lines to print and the status to exit with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub lines: Vec<String>,
    pub exit_code: u8,
}

impl Outcome {
    fn failure(err: &HistorianError) -> Self {
        let exit_code = match err.class() {
            ErrorClass::Usage => 1,
            ErrorClass::NotFound | ErrorClass::InvalidData | ErrorClass::Unexpected => 0,
        };

        Outcome {
            lines: vec![err.user_message()],
            exit_code,
        }
    }
}

/// Initialise logging to stderr. Silent unless `RUST_LOG` is set.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off"))
        .format_timestamp(None)
        .try_init();
}

/// Name the program was invoked as, for usage messages
pub fn program_name(args: &[String], fallback: &str) -> String {
    args.first()
        .and_then(|arg| Path::new(arg).file_name())
        .and_then(|name| name.to_str())
        .unwrap_or(fallback)
        .to_string()
}

/// Extract the single file path from `args` (program name included)
pub fn input_path<'a>(args: &'a [String], fallback: &str) -> Result<&'a str, HistorianError> {
    match args {
        [_, path] => Ok(path.as_str()),
        _ => Err(HistorianError::Usage {
            program: program_name(args, fallback),
        }),
    }
}

/// Read the whole input file into memory
pub fn load_input(path: &str) -> Result<String, HistorianError> {
    match fs::read_to_string(path) {
        Ok(text) => {
            debug!("read {} bytes from {}", text.len(), path);
            Ok(text)
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => Err(HistorianError::NotFound {
            path: path.to_string(),
        }),
        Err(source) => Err(HistorianError::Io {
            path: path.to_string(),
            source,
        }),
    }
}

/// Check arguments, load the input and run `solve` on it.
///
/// `solve` returns every result line up front, so a failure never leaves a
/// partial result on standard output.
pub fn execute<F>(args: &[String], fallback: &str, solve: F) -> Outcome
where
    F: FnOnce(&str) -> Result<Vec<String>, HistorianError>,
{
    let result = input_path(args, fallback).and_then(|path| {
        info!("{}: solving {}", fallback, path);
        let text = load_input(path)?;
        solve(&text)
    });

    match result {
        Ok(lines) => Outcome {
            lines,
            exit_code: 0,
        },
        Err(err) => {
            debug!("{}: {:?}", fallback, err);
            Outcome::failure(&err)
        }
    }
}

/// Entry point shared by the line-printing tools
pub fn run<F>(fallback: &str, solve: F) -> ExitCode
where
    F: FnOnce(&str) -> Result<Vec<String>, HistorianError>,
{
    init_logging();

    let args: Vec<String> = std::env::args().collect();
    let outcome = execute(&args, fallback, solve);

    for line in &outcome.lines {
        println!("{}", line);
    }

    ExitCode::from(outcome.exit_code)
}

/// Report a failure the same way [`run`] does
pub fn report_failure(err: &HistorianError) -> ExitCode {
    let outcome = Outcome::failure(err);
    for line in &outcome.lines {
        println!("{}", line);
    }
    ExitCode::from(outcome.exit_code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::errors::ScanError;
    use crate::puzzles::ParseError;
    use std::path::PathBuf;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("historian-{}-{}", std::process::id(), name));
        fs::write(&path, contents).expect("Failed to write temp file");
        path
    }

    #[test]
    fn test_usage() {
        let outcome = execute(&args(&["/usr/bin/memory"]), "memory", |_| Ok(vec![]));
        assert_eq!(outcome.exit_code, 1);
        assert_eq!(outcome.lines, vec!["Usage: memory <file_path>"]);

        let outcome = execute(&args(&["memory", "a", "b"]), "memory", |_| Ok(vec![]));
        assert_eq!(outcome.exit_code, 1);

        let outcome = execute(&[], "memory", |_| Ok(vec![]));
        assert_eq!(outcome.lines, vec!["Usage: memory <file_path>"]);
    }

    #[test]
    fn test_not_found() {
        let outcome = execute(
            &args(&["memory", "/definitely/not/here.txt"]),
            "memory",
            |_| Ok(vec!["unreachable".to_string()]),
        );

        assert_eq!(outcome.exit_code, 0);
        assert_eq!(
            outcome.lines,
            vec!["Error: File '/definitely/not/here.txt' not found."]
        );
    }

    #[test]
    fn test_success_passes_contents() {
        let path = temp_file("ok.txt", "hello");
        let outcome = execute(
            &args(&["lists", path.to_str().unwrap()]),
            "lists",
            |text| Ok(vec![format!("len {}", text.len())]),
        );

        assert_eq!(outcome, Outcome { lines: vec!["len 5".to_string()], exit_code: 0 });
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_invalid_data() {
        let path = temp_file("bad.txt", "1 x");
        let outcome = execute(&args(&["lists", path.to_str().unwrap()]), "lists", |_| {
            Err(ParseError {
                line: 1,
                message: "Invalid integer: x".to_string(),
            }
            .into())
        });

        assert_eq!(outcome.exit_code, 0);
        assert_eq!(outcome.lines, vec!["Error: File contains invalid data."]);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_unexpected_includes_cause() {
        let err = HistorianError::Scan(ScanError::SnapshotLimitExceeded {
            current: 10,
            limit: 10,
        });
        assert_eq!(err.class(), ErrorClass::Unexpected);
        assert!(err
            .user_message()
            .starts_with("An unexpected error occurred: Snapshot memory limit exceeded"));
    }

    #[test]
    fn test_non_utf8_is_invalid_data() {
        let path = std::env::temp_dir().join(format!("historian-{}-bin", std::process::id()));
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        let err = load_input(path.to_str().unwrap()).unwrap_err();
        assert_eq!(err.class(), ErrorClass::InvalidData);
        let _ = fs::remove_file(path);
    }
}
