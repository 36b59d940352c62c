//! Multi-round tournaments with a running scoreboard.

use crate::config::TournamentConfig;
use crate::orchestrator::{MatchOutcome, Orchestrator};
use crate::players::{Contestant, contestant_from_name};
use anyhow::Result;
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::io::{BufRead, Write};
use tracing::{info, instrument};

/// Width of the banner rules printed around rounds.
const CONSOLE_WIDTH: usize = 80;

/// Wins recorded for one contestant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new, Getters)]
pub struct PlayerRecord {
    /// Contestant name.
    name: String,
    /// Rounds won.
    #[new(default)]
    wins: u32,
}

/// Final standings of a tournament.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct TournamentSummary {
    /// Rounds played.
    matches: u32,
    /// Record of the first-named contestant.
    player1: PlayerRecord,
    /// Record of the second-named contestant.
    player2: PlayerRecord,
    /// Rounds nobody won.
    ties: u32,
    /// Name of the overall winner, `None` when wins are level.
    champion: Option<String>,
}

/// A series of matches between two contestants.
///
/// Player 1 moves first in odd rounds, player 2 in even rounds.
pub struct Tournament {
    player1: Box<dyn Contestant>,
    player2: Box<dyn Contestant>,
    matches: u32,
}

impl Tournament {
    /// Creates a tournament of `matches` rounds.
    pub fn new(player1: Box<dyn Contestant>, player2: Box<dyn Contestant>, matches: u32) -> Self {
        Self {
            player1,
            player2,
            matches,
        }
    }

    /// Creates a tournament from a validated configuration.
    #[instrument(skip(config), fields(player1 = %config.player1(), player2 = %config.player2()))]
    pub fn from_config(config: &TournamentConfig) -> Self {
        Self::new(
            contestant_from_name(config.player1()),
            contestant_from_name(config.player2()),
            *config.matches(),
        )
    }

    /// Plays every round, printing banners, board states and scores.
    #[instrument(skip_all, fields(matches = self.matches))]
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: W) -> Result<TournamentSummary> {
        let mut orchestrator = Orchestrator::new(input, output);
        let mut record1 = PlayerRecord::new(self.player1.name().to_string());
        let mut record2 = PlayerRecord::new(self.player2.name().to_string());
        let mut ties = 0;

        for round in 1..=self.matches {
            let out = orchestrator.output_mut();
            write!(out, "{}", rule('#'))?;
            writeln!(out, "ROUND {round} ... Fight!")?;
            write!(out, "{}", rule('#'))?;

            let player1_first = round % 2 == 1;
            let outcome = if player1_first {
                orchestrator.play_match(self.player1.as_mut(), self.player2.as_mut())?
            } else {
                orchestrator.play_match(self.player2.as_mut(), self.player1.as_mut())?
            };

            let winner = match (outcome, player1_first) {
                (MatchOutcome::Tie, _) => None,
                (MatchOutcome::FirstWins, true) | (MatchOutcome::SecondWins, false) => {
                    Some(&mut record1)
                }
                (MatchOutcome::FirstWins, false) | (MatchOutcome::SecondWins, true) => {
                    Some(&mut record2)
                }
            };

            let out = orchestrator.output_mut();
            match winner {
                Some(record) => {
                    record.wins += 1;
                    info!(round, winner = %record.name, "Round won");
                    writeln!(out, "{} wins ROUND {round}!", record.name)?;
                }
                None => {
                    ties += 1;
                    info!(round, "Round tied");
                    writeln!(out, "TIED ROUND {round}.")?;
                }
            }
            write!(out, "{}", rule('='))?;
            write_scores(&mut *out, &record1, &record2, ties)?;

            if round == self.matches {
                writeln!(out, "{}", verdict(&record1, &record2))?;
            }
        }

        let champion = champion(&record1, &record2).map(|record| record.name.clone());
        Ok(TournamentSummary {
            matches: self.matches,
            player1: record1,
            player2: record2,
            ties,
            champion,
        })
    }
}

fn rule(ch: char) -> String {
    let mut line = ch.to_string().repeat(CONSOLE_WIDTH + 1);
    line.push('\n');
    line
}

fn write_scores(
    out: &mut impl Write,
    record1: &PlayerRecord,
    record2: &PlayerRecord,
    ties: u32,
) -> Result<()> {
    writeln!(out, "PLAYER1 {}: {}", record1.name, record1.wins)?;
    writeln!(out, "PLAYER2 {}: {}", record2.name, record2.wins)?;
    if ties == 1 {
        writeln!(out, "(1 tie)")?;
    } else {
        writeln!(out, "({ties} ties)")?;
    }
    Ok(())
}

fn champion<'a>(record1: &'a PlayerRecord, record2: &'a PlayerRecord) -> Option<&'a PlayerRecord> {
    match record1.wins.cmp(&record2.wins) {
        Ordering::Greater => Some(record1),
        Ordering::Less => Some(record2),
        Ordering::Equal => None,
    }
}

fn verdict(record1: &PlayerRecord, record2: &PlayerRecord) -> String {
    match record1.wins.cmp(&record2.wins) {
        Ordering::Greater => format!("PLAYER1 {} WINS THE TOURNAMENT!", record1.name),
        Ordering::Less => format!("PLAYER2 {} WINS THE TOURNAMENT!", record2.name),
        Ordering::Equal => "TOURNAMENT IS A DRAW!".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_width() {
        let line = rule('#');
        assert_eq!(line.len(), CONSOLE_WIDTH + 2);
        assert!(line.ends_with('\n'));
    }

    #[test]
    fn test_score_lines() {
        let mut record1 = PlayerRecord::new("Alice".to_string());
        let record2 = PlayerRecord::new("Bob".to_string());
        record1.wins = 2;

        let mut out: Vec<u8> = Vec::new();
        write_scores(&mut out, &record1, &record2, 1).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "PLAYER1 Alice: 2\nPLAYER2 Bob: 0\n(1 tie)\n"
        );
    }

    #[test]
    fn test_verdicts() {
        let mut record1 = PlayerRecord::new("Alice".to_string());
        let mut record2 = PlayerRecord::new("Bob".to_string());
        assert_eq!(verdict(&record1, &record2), "TOURNAMENT IS A DRAW!");

        record1.wins = 1;
        assert_eq!(verdict(&record1, &record2), "PLAYER1 Alice WINS THE TOURNAMENT!");

        record2.wins = 2;
        assert_eq!(verdict(&record1, &record2), "PLAYER2 Bob WINS THE TOURNAMENT!");
    }

    #[test]
    fn test_verdict_with_same_names() {
        let mut record1 = PlayerRecord::new("AI-9".to_string());
        let record2 = PlayerRecord::new("AI-9".to_string());
        record1.wins = 1;
        assert_eq!(verdict(&record1, &record2), "PLAYER1 AI-9 WINS THE TOURNAMENT!");
    }
}
