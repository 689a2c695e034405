//! Round engine: the turn state machine for one round.
//!
//! ## Phases
//!
//! ```text
//! AwaitingSpin --spin 0--------------------------> AwaitingSpin (next seat)
//! AwaitingSpin --spin m>0--> AwaitingGuess
//! AwaitingGuess --invalid guess------------------> AwaitingSpin (same seat)
//! AwaitingGuess --letter found-------------------> AwaitingSpin (same seat)
//! AwaitingGuess --miss / wrong solve-------------> AwaitingSpin (next seat)
//! AwaitingGuess --last letter / exact solve------> RoundOver
//! ```
//!
//! The acting seat is never stored: it is `turn_counter % seat_count`, and
//! advancing a turn only ever increments the counter.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use super::collaborators::{DisplaySink, GuessSource};
use crate::board::{Board, GuessOutcome, PhraseCorpus};
use crate::core::{GameConfig, GameError, GameRng, PlayerId, PlayerMap};
use crate::stats::PlayerRecord;
use crate::wheel::{Multiplier, Wheel};

/// Where the round is in its turn cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    /// The current seat must spin.
    AwaitingSpin,
    /// The current seat spun `multiplier` and must guess.
    AwaitingGuess { multiplier: Multiplier },
    /// Terminal: `winner` finished the board.
    RoundOver { winner: PlayerId },
}

impl TurnPhase {
    /// Phase name without its payload.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            TurnPhase::AwaitingSpin => "AwaitingSpin",
            TurnPhase::AwaitingGuess { .. } => "AwaitingGuess",
            TurnPhase::RoundOver { .. } => "RoundOver",
        }
    }
}

/// What happened to the turn after a spin or guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnResolution {
    /// Spun zero; the next seat acts.
    LostTurn,
    /// Empty or repeated guess; the same seat spins again, nothing counted.
    Retry,
    /// Letter found; the same seat spins again.
    Continue,
    /// Missed letter or wrong solve; the next seat acts.
    Pass,
    /// The board is finished.
    RoundOver { winner: PlayerId },
}

/// One resolved spin or guess, kept in the round history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Turn counter when this happened (0-based).
    pub turn: u64,
    pub player: PlayerId,
    pub player_name: String,
    pub multiplier: Multiplier,
    /// `None` when the spin lost the turn.
    pub guess: Option<String>,
    pub outcome: Option<GuessOutcome>,
    /// Points added to the round score.
    pub points: u32,
    pub resolution: TurnResolution,
}

impl std::fmt::Display for TurnRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.guess, self.outcome) {
            (Some(guess), Some(outcome)) => write!(
                f,
                "Turn {}: {} spun {} and guessed \"{}\": {} (+{})",
                self.turn + 1,
                self.player_name,
                self.multiplier,
                guess,
                outcome,
                self.points
            ),
            _ => write!(
                f,
                "Turn {}: {} spun {} and lost the turn",
                self.turn + 1,
                self.player_name,
                self.multiplier
            ),
        }
    }
}

/// Summary of a finished round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub winner: PlayerId,
    pub winner_name: String,
    pub phrase: String,
    /// Turns the round took (counting the winning one).
    pub turns: u64,
    /// The winner's round score, banked into lifetime winnings.
    pub winning_score: u32,
}

impl std::fmt::Display for RoundResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} solved \"{}\" and won {} points. The game took {} turns.",
            self.winner_name, self.phrase, self.winning_score, self.turns
        )
    }
}

/// Runs a single round.
///
/// Owns the board, the seat table and the round RNG. Lifetime statistics are
/// settled once, on entering [`TurnPhase::RoundOver`]; take the records back
/// with [`RoundEngine::into_players`] to carry them into the next round.
#[derive(Clone, Debug)]
pub struct RoundEngine {
    board: Board,
    seats: PlayerMap<PlayerRecord>,
    turn_counter: u64,
    phase: TurnPhase,
    rng: GameRng,
    history: Vector<TurnRecord>,
}

impl RoundEngine {
    /// Start a round: shuffle seating, zero round counters, pick a phrase.
    pub fn new(
        config: &GameConfig,
        corpus: &PhraseCorpus,
        players: Vec<PlayerRecord>,
    ) -> Result<Self, GameError> {
        Self::with_rng(GameRng::new(config.seed), config, corpus, players)
    }

    /// Start a round drawing from an existing RNG stream.
    #[instrument(skip_all, fields(seed = rng.seed(), players = players.len()))]
    pub fn with_rng(
        mut rng: GameRng,
        config: &GameConfig,
        corpus: &PhraseCorpus,
        mut players: Vec<PlayerRecord>,
    ) -> Result<Self, GameError> {
        rng.shuffle(&mut players);
        let mut seats = PlayerMap::from_vec(players)?;
        for (_, player) in seats.iter_mut() {
            player.reset_round();
        }

        let board = Board::new(corpus.choose(&mut rng)).with_mask(config.mask);

        info!(
            order = ?seats.iter().map(|(_, p)| p.name()).collect::<Vec<_>>(),
            masked = %board.masked_phrase(),
            "Round started"
        );

        Ok(Self {
            board,
            seats,
            turn_counter: 0,
            phase: TurnPhase::AwaitingSpin,
            rng,
            history: Vector::new(),
        })
    }

    // === Accessors ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Seats in turn order.
    #[must_use]
    pub fn seats(&self) -> &PlayerMap<PlayerRecord> {
        &self.seats
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.seats.player_count()
    }

    /// Turns advanced so far (0 on the first turn).
    #[must_use]
    pub fn turn_counter(&self) -> u64 {
        self.turn_counter
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self.phase, TurnPhase::RoundOver { .. })
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self.phase {
            TurnPhase::RoundOver { winner } => Some(winner),
            _ => None,
        }
    }

    /// The seat whose turn it is.
    #[must_use]
    pub fn current_seat(&self) -> PlayerId {
        PlayerId::for_turn(self.turn_counter, self.seats.player_count())
    }

    #[must_use]
    pub fn current_player(&self) -> &PlayerRecord {
        &self.seats[self.current_seat()]
    }

    /// Every resolved spin and guess, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnRecord> {
        &self.history
    }

    /// The round summary, once the round is over.
    #[must_use]
    pub fn result(&self) -> Option<RoundResult> {
        let winner = self.winner()?;
        let record = &self.seats[winner];
        Some(RoundResult {
            winner,
            winner_name: record.name().to_string(),
            phrase: self.board.phrase().to_string(),
            turns: self.turn_counter + 1,
            winning_score: record.score(),
        })
    }

    /// Consume the engine, returning the records in seat order.
    #[must_use]
    pub fn into_players(self) -> Vec<PlayerRecord> {
        self.seats.into_vec()
    }

    // === State machine ===

    /// Spin for the current seat.
    ///
    /// A zero counts as a guess for the seat and passes the turn without
    /// asking for a guess. Anything else moves to `AwaitingGuess`.
    pub fn spin<W: Wheel + ?Sized>(&mut self, wheel: &mut W) -> Result<Multiplier, GameError> {
        match self.phase {
            TurnPhase::AwaitingSpin => {}
            TurnPhase::RoundOver { .. } => return Err(GameError::RoundFinished),
            other => {
                return Err(GameError::WrongPhase {
                    expected: "AwaitingSpin",
                    actual: other.name(),
                })
            }
        }

        let multiplier = wheel.spin(&mut self.rng);
        let seat = self.current_seat();

        if multiplier.is_lose_turn() {
            self.seats[seat].record_guess();
            self.record(seat, multiplier, None, None, 0, TurnResolution::LostTurn);
            debug!(player = %self.seats[seat].name(), "Spun zero, turn lost");
            self.advance_turn();
        } else {
            debug!(player = %self.seats[seat].name(), %multiplier, "Spun");
            self.phase = TurnPhase::AwaitingGuess { multiplier };
        }

        Ok(multiplier)
    }

    /// Resolve the current seat's guess.
    pub fn submit_guess(&mut self, guess: &str) -> Result<TurnResolution, GameError> {
        let multiplier = match self.phase {
            TurnPhase::AwaitingGuess { multiplier } => multiplier,
            TurnPhase::RoundOver { .. } => return Err(GameError::RoundFinished),
            other => {
                return Err(GameError::WrongPhase {
                    expected: "AwaitingGuess",
                    actual: other.name(),
                })
            }
        };

        let seat = self.current_seat();
        let outcome = self.board.guess(guess);

        if outcome.is_invalid() {
            debug!(player = %self.seats[seat].name(), guess, "Invalid guess, spin again");
            self.record(seat, multiplier, Some(guess), Some(outcome), 0, TurnResolution::Retry);
            self.phase = TurnPhase::AwaitingSpin;
            return Ok(TurnResolution::Retry);
        }

        let found = outcome.letters_revealed();
        let points = multiplier.points_for(found);
        let player = &mut self.seats[seat];
        player.record_guess();
        if found > 0 || outcome.round_over() {
            player.record_correct_guess();
            player.add_score(points);
        }

        let resolution = if outcome.round_over() {
            TurnResolution::RoundOver { winner: seat }
        } else if found > 0 {
            TurnResolution::Continue
        } else {
            TurnResolution::Pass
        };

        self.record(seat, multiplier, Some(guess), Some(outcome), points, resolution);

        match resolution {
            TurnResolution::RoundOver { winner } => self.finish(winner),
            TurnResolution::Pass => self.advance_turn(),
            _ => self.phase = TurnPhase::AwaitingSpin,
        }

        Ok(resolution)
    }

    /// Play one spin (and guess, if the spin allows one) through the collaborators.
    ///
    /// If a previous call left the seat holding a spin (the guess source
    /// closed), this resumes at the guess instead of spinning again.
    pub fn play_turn<W, G, D>(
        &mut self,
        wheel: &mut W,
        guesses: &mut G,
        sink: &mut D,
    ) -> Result<TurnResolution, GameError>
    where
        W: Wheel + ?Sized,
        G: GuessSource + ?Sized,
        D: DisplaySink + ?Sized,
    {
        if self.is_over() {
            return Err(GameError::RoundFinished);
        }

        if let TurnPhase::AwaitingSpin = self.phase {
            if self.spin(wheel)?.is_lose_turn() {
                self.notify(sink);
                return Ok(TurnResolution::LostTurn);
            }
        }

        let resolution = {
            let player = self.current_player();
            let Some(guess) = guesses.next_guess(player, &self.board) else {
                return Err(GameError::GuessSourceClosed {
                    player: player.name().to_string(),
                });
            };
            self.submit_guess(&guess)?
        };

        self.notify(sink);
        Ok(resolution)
    }

    /// Play turns until the board is finished.
    #[instrument(skip_all, fields(phrase_len = self.board.phrase().len()))]
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
        loop {
            if let Some(result) = self.result() {
                return Ok(result);
            }
            self.play_turn(wheel, guesses, sink)?;
        }
    }

    // === Internals ===

    fn advance_turn(&mut self) {
        self.turn_counter += 1;
        self.phase = TurnPhase::AwaitingSpin;
    }

    fn finish(&mut self, winner: PlayerId) {
        self.phase = TurnPhase::RoundOver { winner };
        for (seat, player) in self.seats.iter_mut() {
            player.fold_round_into_lifetime(seat == winner);
        }
        info!(
            winner = %self.seats[winner].name(),
            score = self.seats[winner].score(),
            turns = self.turn_counter + 1,
            "Round over"
        );
    }

    fn record(
        &mut self,
        seat: PlayerId,
        multiplier: Multiplier,
        guess: Option<&str>,
        outcome: Option<GuessOutcome>,
        points: u32,
        resolution: TurnResolution,
    ) {
        self.history.push_back(TurnRecord {
            turn: self.turn_counter,
            player: seat,
            player_name: self.seats[seat].name().to_string(),
            multiplier,
            guess: guess.map(str::to_uppercase),
            outcome,
            points,
            resolution,
        });
    }

    fn notify<D: DisplaySink + ?Sized>(&self, sink: &mut D) {
        if let Some(record) = self.history.last() {
            sink.on_turn(record, &self.board, &self.seats);
        }
        if let Some(result) = self.result() {
            sink.on_round_over(&result, &self.seats);
        }
    }
}

impl std::fmt::Display for RoundEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "** Game **")?;
        writeln!(
            f,
            "There are {} players. We are on turn {}, and here's a description of the current player:",
            self.player_count(),
            self.turn_counter + 1
        )?;
        writeln!(f, "{}", self.current_player())?;
        writeln!(f)?;
        writeln!(f, "** Players **")?;
        for (_, player) in self.seats.iter() {
            writeln!(f, "{}", player)?;
        }
        writeln!(f)?;
        writeln!(f, "** Board **")?;
        write!(f, "{}", self.board)
    }
}
