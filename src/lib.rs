//! uniqint: unique, sorted, range-bounded integers from a text file.
//!
//! Each input line may contribute at most one integer. A line is accepted
//! only if it holds exactly one whitespace-separated token and at most one
//! `-`; the token must match `-?[0-9]+`. Accepted values within
//! `[-1023, 1023]` are deduplicated, sorted ascending and written one per
//! line.
//!
//! # Example
//!
//! ```rust,no_run
//! use uniqint::{config::OutputLayout, UniqueIntCommand};
//!
//! let layout = OutputLayout::new("sample_results");
//! std::fs::create_dir_all(&layout.output_dir).unwrap();
//!
//! let outcome = UniqueIntCommand::new()
//!     .run_to_dir("numbers.txt", &layout)
//!     .unwrap();
//! println!("{}: {}", outcome.output_path.display(), outcome.stats);
//! ```

pub mod collector;
pub mod command;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod line;
pub mod output;
pub mod scan;

// Re-export commonly used types
pub use collector::{Offer, UniqueSortedCollector, ValueRange, MAX_VALUE, MIN_VALUE};
pub use command::{ProcessOutcome, UniqueIntCommand, UniqueIntStats};
pub use error::{Result, UniqueIntError};
pub use line::{classify, extract_integer, parse_line, validate, LineVerdict};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    #[test]
    fn test_basic_workflow() {
        use crate::collector::UniqueSortedCollector;
        use crate::line::parse_line;

        let content = "10\n-5\n10\nabc\n2000\n-1024\n3 4\n-1023\n";
        let collector: UniqueSortedCollector =
            content.lines().filter_map(parse_line).collect();

        assert_eq!(collector.sorted_result(), vec![-1023, -5, 10]);
    }

    #[test]
    fn test_command_workflow() {
        use crate::command::UniqueIntCommand;

        let mut output = Vec::new();
        UniqueIntCommand::new()
            .run_reader("007\n\n4-4\n--4\n5 \n".as_bytes(), &mut output)
            .unwrap();

        assert_eq!(output, b"5\n7\n");
    }
}
