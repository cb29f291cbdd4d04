use crate::cli::import::PromptConfirm;
use crate::import::Confirm;
use std::io::Cursor;

fn answer(input: &str) -> (bool, String) {
    let mut output = Vec::new();
    let decision = PromptConfirm::new(Cursor::new(input.as_bytes()), &mut output, false).confirm(42);
    (decision, String::from_utf8(output).unwrap())
}

#[test]
fn yes_answers_accept() {
    for input in ["y\n", "Y\n", "yes\n", " YES \n"] {
        assert!(answer(input).0, "input {input:?}");
    }
}

#[test]
fn anything_else_declines() {
    for input in ["\n", "n\n", "no\n", "sure\n", ""] {
        assert!(!answer(input).0, "input {input:?}");
    }
}

#[test]
fn prompt_names_the_total() {
    let (_, prompt) = answer("n\n");

    assert_eq!(prompt, "Import 42 log lines? [y/N] ");
}

#[test]
fn assume_yes_never_prompts() {
    // Arrange
    let mut output = Vec::new();

    // Act
    let decision = PromptConfirm::new(Cursor::new(&b""[..]), &mut output, true).confirm(42);

    // Assert
    assert!(decision);
    assert!(output.is_empty());
}
