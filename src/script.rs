//! Scripted driving of a session, for headless runs.
//!
//! A script is a string of one-character steps:
//!
//! | char | step |
//! |------|------|
//! | `t` | gravity tick |
//! | `l` | shift left |
//! | `r` | shift right |
//! | `d` | soft drop |
//! | `c` | rotate clockwise |
//! | `x` | rotate counter-clockwise |
//!
//! Whitespace and `.` are ignored so long scripts can be grouped.

use anyhow::{bail, Result};

use crate::core::{Session, StepOutcome};
use crate::types::Input;

/// One scripted event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Tick,
    Input(Input),
}

/// Parse a script into steps.
pub fn parse(script: &str) -> Result<Vec<Step>> {
    let mut steps = Vec::with_capacity(script.len());
    for (pos, ch) in script.chars().enumerate() {
        let step = match ch.to_ascii_lowercase() {
            't' => Step::Tick,
            'l' => Step::Input(Input::Left),
            'r' => Step::Input(Input::Right),
            'd' => Step::Input(Input::SoftDrop),
            'c' => Step::Input(Input::RotateCw),
            'x' => Step::Input(Input::RotateCcw),
            '.' => continue,
            c if c.is_whitespace() => continue,
            other => bail!("unknown script step {other:?} at position {pos}"),
        };
        steps.push(step);
    }
    Ok(steps)
}

/// Apply steps in order and return every outcome.
///
/// Steps after the game ends are still applied; they come back as
/// [`StepOutcome::Ignored`].
pub fn run(session: &mut Session, steps: &[Step]) -> Vec<StepOutcome> {
    steps
        .iter()
        .map(|step| match *step {
            Step::Tick => session.tick(),
            Step::Input(input) => session.handle_input(input),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_step_kind() {
        let steps = parse("tlr dcx.T").unwrap();
        assert_eq!(
            steps,
            vec![
                Step::Tick,
                Step::Input(Input::Left),
                Step::Input(Input::Right),
                Step::Input(Input::SoftDrop),
                Step::Input(Input::RotateCw),
                Step::Input(Input::RotateCcw),
                Step::Tick,
            ]
        );
    }

    #[test]
    fn rejects_unknown_steps() {
        let err = parse("tt?").unwrap_err();
        assert!(err.to_string().contains("position 2"));
    }
}
