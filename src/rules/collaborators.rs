//! Boundary traits between a round and the outside world.
//!
//! The engine never reads a console or draws a screen. It asks a
//! [`GuessSource`] for guesses and reports progress to a [`DisplaySink`].

use std::collections::VecDeque;

use super::engine::{RoundResult, TurnRecord};
use crate::board::Board;
use crate::core::PlayerMap;
use crate::stats::PlayerRecord;

/// Supplies one guess per request.
///
/// Empty and repeated guesses are legitimate answers; the board rejects them
/// and the player spins again. Returning `None` means no more input will
/// come, which aborts the round in progress.
pub trait GuessSource {
    fn next_guess(&mut self, player: &PlayerRecord, board: &Board) -> Option<String>;
}

impl<F> GuessSource for F
where
    F: FnMut(&PlayerRecord, &Board) -> Option<String>,
{
    fn next_guess(&mut self, player: &PlayerRecord, board: &Board) -> Option<String> {
        self(player, board)
    }
}

/// Guesses replayed from a fixed list, in order, regardless of who asks.
#[derive(Clone, Debug, Default)]
pub struct ScriptedGuesses {
    queue: VecDeque<String>,
}

impl ScriptedGuesses {
    pub fn new<I, S>(guesses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            queue: guesses.into_iter().map(Into::into).collect(),
        }
    }

    /// Guesses not yet handed out.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl GuessSource for ScriptedGuesses {
    fn next_guess(&mut self, _player: &PlayerRecord, _board: &Board) -> Option<String> {
        self.queue.pop_front()
    }
}

/// Receives printable state after each change.
///
/// Both hooks default to doing nothing; `()` is the silent sink.
pub trait DisplaySink {
    /// Called after every resolved spin or guess.
    fn on_turn(&mut self, _record: &TurnRecord, _board: &Board, _seats: &PlayerMap<PlayerRecord>) {}

    /// Called once, when the round ends. Seats already hold settled lifetime totals.
    fn on_round_over(&mut self, _result: &RoundResult, _seats: &PlayerMap<PlayerRecord>) {}
}

impl DisplaySink for () {}

/// Sink that keeps every printable line, for logs and tests.
#[derive(Clone, Debug, Default)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl std::fmt::Display for Transcript {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl DisplaySink for Transcript {
    fn on_turn(&mut self, record: &TurnRecord, board: &Board, _seats: &PlayerMap<PlayerRecord>) {
        self.lines.push(record.to_string());
        self.lines.push(board.to_string());
    }

    fn on_round_over(&mut self, result: &RoundResult, seats: &PlayerMap<PlayerRecord>) {
        self.lines.push(result.to_string());
        self.lines.extend(seats.iter().map(|(_, player)| player.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_guesses_in_order() {
        let board = Board::new("ABC");
        let player = PlayerRecord::new("Ed");
        let mut source = ScriptedGuesses::new(["a", "b"]);

        assert_eq!(source.remaining(), 2);
        assert_eq!(source.next_guess(&player, &board).as_deref(), Some("a"));
        assert_eq!(source.next_guess(&player, &board).as_deref(), Some("b"));
        assert_eq!(source.next_guess(&player, &board), None);
    }

    #[test]
    fn test_closure_source_sees_board() {
        let mut board = Board::new("AB");
        board.guess("a");
        let player = PlayerRecord::new("Ed");

        // Guess the first hidden letter
        let mut source = |_: &PlayerRecord, b: &Board| {
            b.phrase()
                .chars()
                .find(|c| !b.has_guessed(&c.to_string()))
                .map(String::from)
        };

        assert_eq!(source.next_guess(&player, &board).as_deref(), Some("B"));
    }
}
