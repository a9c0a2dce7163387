//! End-to-end tests against the built binaries

use crate::common::{run_binary, stdout_of};

#[test]
fn collatz_binary_recovers_from_bad_input() {
    let output = run_binary(env!("CARGO_BIN_EXE_collatz"), "ten\n10\n", None);
    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        "Enter an integer: Not valid! Please enter an integer: \nEnter an integer: 5\n16\n8\n4\n2\n1\n"
    );
}

#[test]
fn guess_binary_wins_with_a_pinned_secret() {
    let config = "[guess]\nlow = 5\nhigh = 5\n";
    let output = run_binary(env!("CARGO_BIN_EXE_guess"), "5\n", Some(config));
    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        "I'm thinking of a number between 5 and 5\n\
         Take a guess.\n\
         Good job! You guessed my number in 1 guesses!\n"
    );
}

#[test]
fn guess_binary_exits_non_zero_on_malformed_guess() {
    let output = run_binary(env!("CARGO_BIN_EXE_guess"), "seven\n", None);
    assert!(!output.status.success());
    assert!(stdout_of(&output).ends_with("Take a guess.\n"));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("guess is not an integer"));
}

#[test]
fn guess_binary_ignores_a_broken_config() {
    let broken = "[guess]\nlow = 9\nhigh = 1\n";
    let output = run_binary(env!("CARGO_BIN_EXE_guess"), "1\n", Some(broken));
    assert!(stdout_of(&output).starts_with("I'm thinking of a number between 1 and 20\n"));
}

#[test]
fn magic8ball_binary_exits_zero_when_declined() {
    let config = "[magic8ball]\ndelay_ms = 0\n";
    let output = run_binary(env!("CARGO_BIN_EXE_magic8ball"), "hello?\nno\n", Some(config));
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.starts_with("I am the Magic 8 Ball!\n"));
    assert!(stdout.ends_with("Ok, bye bye.\n"));
}

#[test]
fn magic8ball_binary_fails_when_input_runs_out() {
    let config = "[magic8ball]\ndelay_ms = 0\n";
    let output = run_binary(env!("CARGO_BIN_EXE_magic8ball"), "hello?\n", Some(config));
    assert!(!output.status.success());
}
