//! Integration tests for the proving-grounds binary.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

fn pg() -> Command {
    let mut cmd = Command::cargo_bin("proving-grounds").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

fn stdin(lines: &[&str]) -> String {
    let mut input = lines.join("\n");
    input.push('\n');
    input
}

// ---------------------------------------------------------------------------
// full sessions
// ---------------------------------------------------------------------------

#[test]
fn warrior_attack_then_skip() {
    let output = pg()
        .write_stdin(stdin(&["Rogan", "warrior", "y", "attack", "skip"]))
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Hello, Rogan")
                .and(predicate::str::contains(
                    "Your stamina is 80, attack 5 and defense 10.",
                ))
                .and(predicate::str::contains("Rogan, you are a Warrior"))
                .and(predicate::str::ends_with("Training is over.\n")),
        )
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    let damage: i32 = stdout
        .split("Rogan dealt ")
        .nth(1)
        .and_then(|rest| rest.split(' ').next())
        .and_then(|n| n.parse().ok())
        .unwrap();
    assert!((8..=10).contains(&damage));
}

#[test]
fn every_class_can_train() {
    for (token, special) in [
        ("warrior", "`Stamina 105`"),
        ("mage", "`Attack 45`"),
        ("healer", "`Defense 40`"),
    ] {
        pg().write_stdin(stdin(&["Ilsa", token, "y", "defense", "special", "skip"]))
            .assert()
            .success()
            .stdout(
                predicate::str::contains("Ilsa blocked ")
                    .and(predicate::str::contains(special)),
            );
    }
}

#[test]
fn seeded_runs_are_reproducible() {
    let input = stdin(&["Rogan", "mage", "y", "attack", "defense", "attack", "skip"]);
    let first = pg()
        .args(["--seed", "7"])
        .write_stdin(input.clone())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let second = pg()
        .args(["--seed", "7"])
        .write_stdin(input)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(first, second);
}

// ---------------------------------------------------------------------------
// recoverable mistakes
// ---------------------------------------------------------------------------

#[test]
fn unknown_class_and_command_reprompt() {
    pg().write_stdin(stdin(&[
        "Rogan", "bard", "mage", "no", "healer", "Y", "dance", "skip",
    ]))
    .assert()
    .success()
    .stdout(
        predicate::str::contains("Unknown character class. Try again.")
            .and(predicate::str::contains(
                "Unknown command. Try: attack, defense, special or skip",
            ))
            .and(predicate::str::contains("Rogan, you are a Healer")),
    );
}

// ---------------------------------------------------------------------------
// fatal errors
// ---------------------------------------------------------------------------

#[test]
fn empty_name_exits_with_error() {
    pg().write_stdin(stdin(&["   "]))
        .assert()
        .failure()
        .code(1)
        .stdout(
            predicate::str::contains("Enter your class")
                .not()
                .and(predicate::str::ends_with(
                    "...tell me your name: Game error: character creation failed: name cannot be empty\n",
                )),
        )
        .stderr(predicate::str::contains("Game error").not());
}

#[test]
fn closed_stdin_exits_with_error() {
    pg().write_stdin("")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains(
            "Game error: character creation failed: input stream closed",
        ));
}

#[test]
fn closed_stdin_during_training_exits_with_error() {
    pg().write_stdin(stdin(&["Rogan", "warrior", "y", "attack"]))
        .assert()
        .failure()
        .code(1)
        .stdout(
            predicate::str::contains("Rogan dealt ")
                .and(predicate::str::ends_with("Game error: input stream closed\n")),
        );
}

#[test]
fn rejects_bad_seed() {
    pg().args(["--seed", "lots"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
