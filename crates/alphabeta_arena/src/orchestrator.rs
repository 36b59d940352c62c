//! Game orchestration between contestants.

use crate::players::Contestant;
use alphabeta_tictactoe::{Player, State};
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// How a single match ended, from the seating order's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// The contestant who moved first won.
    FirstWins,
    /// The contestant who moved second won.
    SecondWins,
    /// Nobody completed a line.
    Tie,
}

impl MatchOutcome {
    /// Outcome for a finished state.
    pub fn from_winner(winner: Option<Player>) -> Self {
        match winner {
            Some(Player::X) => MatchOutcome::FirstWins,
            Some(Player::O) => MatchOutcome::SecondWins,
            None => MatchOutcome::Tie,
        }
    }
}

/// Announcement printed before each move, e.g. `Alice's move.` or `Chris' move.`
pub fn announce_turn(name: &str) -> String {
    if name.ends_with(['s', 'S']) {
        format!("{name}' move.")
    } else {
        format!("{name}'s move.")
    }
}

/// Drives matches over a line-based input and a text output.
pub struct Orchestrator<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Orchestrator<R, W> {
    /// Creates a new orchestrator.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Output sink, for callers printing around matches.
    pub fn output_mut(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consumes the orchestrator, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Plays one match; `first` plays X.
    ///
    /// Rejected moves are reported and the same contestant is asked again.
    /// Errors come only from I/O or from a contestant failing to produce a move.
    #[instrument(
        skip_all,
        fields(
            first = %first.name(),
            first_is_ai = first.is_ai(),
            second = %second.name(),
            second_is_ai = second.is_ai(),
        )
    )]
    pub fn play_match(
        &mut self,
        first: &mut dyn Contestant,
        second: &mut dyn Contestant,
    ) -> Result<MatchOutcome> {
        info!("Starting match");

        let mut state = State::new();
        writeln!(self.output, "{state}")?;

        while !state.is_terminal() {
            let contestant: &mut dyn Contestant = match state.mover() {
                Player::X => &mut *first,
                Player::O => &mut *second,
            };

            writeln!(self.output, "{}", announce_turn(contestant.name()))?;
            let index = contestant.choose_move(&state, &mut self.input, &mut self.output)?;

            match state.derive(index) {
                Ok(next) => {
                    debug!(player = %contestant.name(), position = index, "Move accepted");
                    state = next;
                    writeln!(self.output, "{state}")?;
                }
                Err(err) => {
                    debug!(player = %contestant.name(), position = index, %err, "Move rejected");
                    writeln!(self.output, "{err}")?;
                }
            }
        }

        let outcome = MatchOutcome::from_winner(state.winner());
        info!(?outcome, "Match finished");
        Ok(outcome)
    }
}
