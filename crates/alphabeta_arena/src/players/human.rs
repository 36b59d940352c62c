//! Human player that types moves.

use super::Contestant;
use alphabeta_tictactoe::{MoveIndex, State};
use anyhow::{Context, Result, bail};
use std::io::{BufRead, Write};
use tracing::debug;

/// Human player reading 1-based square numbers, one per line.
#[derive(Debug, Clone)]
pub struct HumanPlayer {
    name: String,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Contestant for HumanPlayer {
    fn choose_move(
        &mut self,
        _state: &State,
        input: &mut dyn BufRead,
        output: &mut dyn Write,
    ) -> Result<MoveIndex> {
        loop {
            write!(output, "Enter move: ")?;
            output.flush()?;

            let mut buf = Vec::new();
            let read = input
                .read_until(b'\n', &mut buf)
                .context("Failed to read move from input")?;
            if read == 0 {
                bail!("Input closed while waiting for {}'s move", self.name);
            }
            // Undecodable bytes fail to parse below and get the hint.
            let line = String::from_utf8_lossy(&buf);

            match line.trim().parse::<usize>() {
                Ok(square) if square >= 1 => return Ok(square - 1),
                _ => {
                    debug!(player = %self.name, input = %line.trim(), "Unparsable move");
                    writeln!(
                        output,
                        "You must enter a number corresponding to the square in which you wish to play. Please try again."
                    )?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_ai(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reads_one_based_square() {
        let mut player = HumanPlayer::new("Alice");
        let mut input = Cursor::new("5\n");
        let mut output: Vec<u8> = Vec::new();
        let index = player
            .choose_move(&State::new(), &mut input, &mut output)
            .unwrap();
        assert_eq!(index, 4);
    }

    #[test]
    fn test_reprompts_until_number() {
        let mut player = HumanPlayer::new("Alice");
        let mut input = Cursor::new("center\n0\n  9 \n");
        let mut output: Vec<u8> = Vec::new();
        let index = player
            .choose_move(&State::new(), &mut input, &mut output)
            .unwrap();
        assert_eq!(index, 8);

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches("Enter move: ").count(), 3);
        assert_eq!(text.matches("Please try again.").count(), 2);
    }

    #[test]
    fn test_reprompts_after_invalid_utf8() {
        let mut player = HumanPlayer::new("Alice");
        let mut input = Cursor::new(b"\xff\xfe\n5\n".to_vec());
        let mut output: Vec<u8> = Vec::new();
        let index = player
            .choose_move(&State::new(), &mut input, &mut output)
            .unwrap();
        assert_eq!(index, 4);

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches("Please try again.").count(), 1);
    }

    #[test]
    fn test_out_of_range_passes_through() {
        let mut player = HumanPlayer::new("Alice");
        let mut input = Cursor::new("42\n");
        let mut output: Vec<u8> = Vec::new();
        let index = player
            .choose_move(&State::new(), &mut input, &mut output)
            .unwrap();
        assert_eq!(index, 41);
    }

    #[test]
    fn test_end_of_input_is_error() {
        let mut player = HumanPlayer::new("Alice");
        let mut input = Cursor::new("");
        let mut output: Vec<u8> = Vec::new();
        assert!(
            player
                .choose_move(&State::new(), &mut input, &mut output)
                .is_err()
        );
    }
}
