use crate::Command;

use googletest::assert_that;
use googletest::prelude::{eq, none};

#[test]
fn given_default_command_line_when_parsed_then_executable_and_args_split() {
    // When
    let command = Command::parse("go run main.go").unwrap();

    // Then
    assert_eq!(command.executable(), "go");
    assert_eq!(command.args(), ["run".to_string(), "main.go".to_string()]);
}

#[test]
fn given_extra_whitespace_when_parsed_then_empty_tokens_dropped() {
    // When
    let command = Command::parse("  cargo   run  --bin  api ").unwrap();

    // Then
    assert_eq!(command.executable(), "cargo");
    assert_that!(command.args().len(), eq(3));
    assert_that!(command.to_string(), eq("cargo run --bin api"));
}

#[test]
fn given_blank_line_when_parsed_then_none() {
    assert_that!(Command::parse("   "), none());
}

#[test]
fn given_executable_only_when_parsed_then_no_args() {
    // When
    let command = Command::parse("./server").unwrap();

    // Then
    assert!(command.args().is_empty());
    assert_eq!(command, Command::new("./server", vec![]));
}
