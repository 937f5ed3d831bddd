use assert_cmd::Command;
use predicates::boolean::PredicateBooleanExt;
use predicates::str::contains;

const BINARY_NAME: &str = "draughts";

#[test]
fn startup() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).expect("Binary should be built");

    drop(
        cmd.write_stdin("quit\n")
            .assert()
            .success()
            .stdout(
                contains("Checkers engine")
                    .and(contains("  A B C D E F G H"))
                    .and(contains("Player 1's turn"))
                    .and(contains("Enter move (e.g., 'A2 B3'): ")),
            ),
    );
}

#[test]
fn plays_until_end_of_input() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).expect("Binary should be built");

    drop(
        cmd.write_stdin("B3 C4\nC6 C5\nc6 d5\nC4 E6\n")
            .assert()
            .success()
            .stdout(
                contains("Move successful!")
                    .and(contains("Invalid move, try again."))
                    .and(contains("Player 2's turn")),
            ),
    );
}
