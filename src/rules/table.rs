//! Multi-round session.
//!
//! A `GameTable` is what lives across rounds: the phrase corpus, each
//! player's lifetime record and the root RNG. Every round draws its own
//! forked RNG stream, so a table replays identically from the same seed.

use tracing::{info, instrument};

use super::collaborators::{DisplaySink, GuessSource};
use super::engine::{RoundEngine, RoundResult};
use crate::board::PhraseCorpus;
use crate::core::{GameConfig, GameError, GameRng};
use crate::stats::PlayerRecord;
use crate::wheel::Wheel;

/// Players and phrases shared by a sequence of rounds.
#[derive(Clone, Debug)]
pub struct GameTable {
    config: GameConfig,
    corpus: PhraseCorpus,
    players: Vec<PlayerRecord>,
    rng: GameRng,
    rounds_played: u32,
}

impl GameTable {
    /// An empty table. Seat players before starting a round.
    #[must_use]
    pub fn new(config: GameConfig, corpus: PhraseCorpus) -> Self {
        let rng = GameRng::new(config.seed);
        Self {
            config,
            corpus,
            players: Vec::new(),
            rng,
            rounds_played: 0,
        }
    }

    /// Add a fresh record for each name. Returns the number of players seated.
    pub fn seat_players<I, S>(&mut self, names: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            let record = PlayerRecord::new(name);
            info!(player = %record.name(), "Welcome to the table");
            self.players.push(record);
        }
        self.players.len()
    }

    /// Seat a player who already has a record.
    pub fn add_player(&mut self, record: PlayerRecord) {
        self.players.push(record);
    }

    #[must_use]
    pub fn players(&self) -> &[PlayerRecord] {
        &self.players
    }

    /// Look a player up by name.
    #[must_use]
    pub fn player(&self, name: &str) -> Option<&PlayerRecord> {
        self.players.iter().find(|p| p.name() == name)
    }

    #[must_use]
    pub fn corpus(&self) -> &PhraseCorpus {
        &self.corpus
    }

    /// See [`PhraseCorpus::add_phrase`].
    pub fn add_phrase(&mut self, text: &str) -> &[String] {
        self.corpus.add_phrase(text)
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Start a round with the seated players.
    ///
    /// The table keeps its own copy of the records until
    /// [`GameTable::finish_round`], so an abandoned round leaves no trace.
    pub fn start_round(&mut self) -> Result<RoundEngine, GameError> {
        let rng = self.rng.fork();
        RoundEngine::with_rng(rng, &self.config, &self.corpus, self.players.clone())
    }

    /// Bank the settled records of a finished round.
    ///
    /// An unfinished round is rejected and left untouched, so the caller can
    /// keep playing it and bank it later.
    pub fn finish_round(&mut self, engine: &RoundEngine) -> Result<RoundResult, GameError> {
        let Some(result) = engine.result() else {
            return Err(GameError::WrongPhase {
                expected: "RoundOver",
                actual: engine.phase().name(),
            });
        };

        self.players = engine.seats().as_slice().to_vec();
        self.rounds_played += 1;
        info!(round = self.rounds_played, winner = %result.winner_name, "Round banked");
        Ok(result)
    }

    /// Play a whole round and bank it.
    #[instrument(skip_all, fields(round = self.rounds_played + 1))]
    pub fn play_round<W, G, D>(
        &mut self,
        wheel: &mut W,
        guesses: &mut G,
        sink: &mut D,
    ) -> Result<RoundResult, GameError>
    where
        W: Wheel + ?Sized,
        G: GuessSource + ?Sized,
        D: DisplaySink + ?Sized,
    {
        let mut engine = self.start_round()?;
        engine.play_round(wheel, guesses, sink)?;
        self.finish_round(&engine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::ScriptedGuesses;
    use crate::wheel::ScriptedWheel;

    fn table() -> GameTable {
        let corpus = PhraseCorpus::new(["E. E. E."]).unwrap();
        GameTable::new(GameConfig::default(), corpus)
    }

    #[test]
    fn test_seat_players() {
        let mut table = table();
        assert_eq!(table.seat_players(["Ed", "Dennis"]), 2);
        assert!(table.player("Ed").is_some());
        assert!(table.player("Nobody").is_none());
    }

    #[test]
    fn test_empty_table_cannot_start() {
        let mut table = table();
        assert_eq!(table.start_round().unwrap_err(), GameError::NoPlayers);
    }

    #[test]
    fn test_unfinished_round_not_banked() {
        let mut table = table();
        table.seat_players(["Ed"]);
        let engine = table.start_round().unwrap();

        assert_eq!(
            table.finish_round(&engine).unwrap_err(),
            GameError::WrongPhase { expected: "RoundOver", actual: "AwaitingSpin" }
        );
        assert_eq!(table.rounds_played(), 0);
        assert_eq!(table.player("Ed").unwrap().games_played(), 0);
    }

    #[test]
    fn test_rejected_round_can_resume_and_bank() {
        let mut table = table();
        table.seat_players(["Ed"]);
        let mut engine = table.start_round().unwrap();
        let mut wheel = ScriptedWheel::always(3);

        // The guess source closes mid-turn
        let err = engine
            .play_turn(&mut wheel, &mut ScriptedGuesses::default(), &mut ())
            .unwrap_err();
        assert_eq!(err, GameError::GuessSourceClosed { player: "Ed".into() });
        assert!(table.finish_round(&engine).is_err());

        engine
            .play_round(&mut wheel, &mut ScriptedGuesses::new(["e"]), &mut ())
            .unwrap();
        let result = table.finish_round(&engine).unwrap();

        assert_eq!(result.winning_score, 9);
        assert_eq!(table.rounds_played(), 1);
        let ed = table.player("Ed").unwrap();
        assert_eq!(ed.games_won(), 1);
        assert_eq!(ed.total_winnings(), 9);
    }

    #[test]
    fn test_add_phrase_through_table() {
        let mut table = table();
        assert_eq!(table.add_phrase("e. e. e.").len(), 1);
        assert_eq!(table.add_phrase("new one").len(), 2);
        assert_eq!(table.corpus().len(), 2);
    }

    #[test]
    fn test_rounds_accumulate_lifetime_stats() {
        let mut table = table();
        table.seat_players(["Solo"]);

        for round in 1..=3 {
            let result = table
                .play_round(
                    &mut ScriptedWheel::always(2),
                    &mut ScriptedGuesses::new(["e"]),
                    &mut (),
                )
                .unwrap();
            assert_eq!(result.winning_score, 6);
            assert_eq!(table.rounds_played(), round);
        }

        let solo = table.player("Solo").unwrap();
        assert_eq!(solo.games_played(), 3);
        assert_eq!(solo.games_won(), 3);
        assert_eq!(solo.total_winnings(), 18);
        assert_eq!(solo.total_guesses(), 3);
    }
}
