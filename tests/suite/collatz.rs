//! Collatz printer tests

use parlour_core::collatz::{self, NOT_VALID, PROMPT};
use parlour_core::{CollatzError, ConsoleError};

use crate::common::{scripted, transcript};

#[test]
fn prints_each_step_after_the_prompt() {
    let mut console = scripted("6\n");
    collatz::run(&mut console).unwrap();
    assert_eq!(
        transcript(console),
        "Enter an integer: 3\n10\n5\n16\n8\n4\n2\n1\n"
    );
}

#[test]
fn one_prints_nothing() {
    let mut console = scripted("1\n");
    collatz::run(&mut console).unwrap();
    assert_eq!(transcript(console), PROMPT);
}

#[test]
fn invalid_input_is_reported_once_then_recovered() {
    let mut console = scripted("abc\n4\n");
    collatz::run(&mut console).unwrap();
    let output = transcript(console);

    assert_eq!(output.matches(NOT_VALID).count(), 1);
    assert_eq!(
        output,
        "Enter an integer: Not valid! Please enter an integer: \nEnter an integer: 2\n1\n"
    );
}

#[test]
fn retries_are_unbounded() {
    let input = format!("{}3\n", "nope\n".repeat(50));
    let mut console = scripted(&input);
    collatz::run(&mut console).unwrap();
    let output = transcript(console);

    assert_eq!(output.matches(NOT_VALID).count(), 50);
    assert!(output.ends_with("\n1\n"));
}

#[test]
fn last_printed_value_is_always_one() {
    for start in [2_i64, 7, 27, 97, 871, 77_031] {
        let input = format!("{start}\n");
        let mut console = scripted(&input);
        collatz::run(&mut console).unwrap();
        let output = transcript(console);
        assert_eq!(output.lines().last(), Some("1"), "start {start}");
    }
}

#[test]
fn closed_input_ends_the_retry_loop() {
    let mut console = scripted("still not a number\n");
    let err = collatz::run(&mut console).unwrap_err();
    assert!(matches!(err, CollatzError::Console(ConsoleError::Closed)));
}

#[test]
fn start_wider_than_64_bits_is_accepted() {
    let mut console = scripted("99999999999999999999\n");
    collatz::run(&mut console).unwrap();
    let output = transcript(console);

    assert!(!output.contains(NOT_VALID));
    assert!(output.starts_with("Enter an integer: 299999999999999999998\n"));
    assert!(output.ends_with("\n1\n"));
}

#[test]
fn steps_past_i64_max_keep_going() {
    let mut console = scripted("3074457345618258603\n");
    collatz::run(&mut console).unwrap();
    let output = transcript(console);

    assert!(output.starts_with("Enter an integer: 9223372036854775810\n"));
    assert!(output.ends_with("\n1\n"));
}
