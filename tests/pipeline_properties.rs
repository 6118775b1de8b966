//! Property tests for the parse → collect → sort pipeline.

use proptest::prelude::*;
use uniqint::{parse_line, UniqueIntCommand, UniqueSortedCollector, MAX_VALUE, MIN_VALUE};

/// Lines mixing valid integers, near-miss tokens and noise.
fn line_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        (-3000i64..3000).prop_map(|v| v.to_string()),
        (-3000i64..3000).prop_map(|v| format!("  {}\t", v)),
        (0i64..100).prop_map(|v| format!("00{}", v)),
        (-50i64..50, -50i64..50).prop_map(|(a, b)| format!("{} {}", a, b)),
        (0i64..50).prop_map(|v| format!("--{}", v)),
        (0i64..50).prop_map(|v| format!("+{}", v)),
        "[a-z0-9 .-]{0,6}",
        Just(String::new()),
    ]
}

fn run(lines: &[String]) -> Vec<u8> {
    let content = lines.join("\n");
    let mut output = Vec::new();
    UniqueIntCommand::new()
        .run_reader(content.as_bytes(), &mut output)
        .unwrap();
    output
}

fn values(output: &[u8]) -> Vec<i64> {
    std::str::from_utf8(output)
        .unwrap()
        .lines()
        .map(|l| l.parse().unwrap())
        .collect()
}

proptest! {
    #[test]
    fn output_strictly_ascending_and_in_range(lines in prop::collection::vec(line_strategy(), 0..200)) {
        let vals = values(&run(&lines));
        prop_assert!(vals.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(vals.iter().all(|&v| (MIN_VALUE..=MAX_VALUE).contains(&v)));
    }

    #[test]
    fn output_matches_accepted_lines(lines in prop::collection::vec(line_strategy(), 0..200)) {
        let mut expected: Vec<i64> = lines
            .iter()
            .filter_map(|l| parse_line(l))
            .filter(|v| (MIN_VALUE..=MAX_VALUE).contains(v))
            .collect();
        expected.sort_unstable();
        expected.dedup();
        prop_assert_eq!(values(&run(&lines)), expected);
    }

    #[test]
    fn output_independent_of_line_order(lines in prop::collection::vec(line_strategy(), 0..100)) {
        let mut reversed = lines.clone();
        reversed.reverse();
        prop_assert_eq!(run(&lines), run(&reversed));
    }

    #[test]
    fn collector_sorted_result_is_sorted_dedup(values in prop::collection::vec(any::<i64>(), 0..300)) {
        let collector: UniqueSortedCollector = values.iter().copied().collect();
        let mut expected: Vec<i64> = values
            .into_iter()
            .filter(|v| (MIN_VALUE..=MAX_VALUE).contains(v))
            .collect();
        expected.sort_unstable();
        expected.dedup();
        prop_assert_eq!(collector.sorted_result(), expected);
    }
}
