//! # Quiz Session State Machine
//!
//! Cycles through a question set in shuffled order, one countdown per
//! question, revealing the answer when the countdown reaches the threshold.
//!
//! ## States
//!
//! ```text
//! Empty ──load──▶ Loaded ──start──▶ Running ◀──start── Paused
//!                   ▲                  │                  ▲
//!                   │                  └───────stop───────┘
//!                   └──────── reset (from Loaded, Running, Paused)
//! ```
//!
//! ## Rounds
//!
//! A round is one pass over a permutation of all question indices, so no
//! question repeats within a round. When the position wraps to zero a fresh,
//! independent permutation is drawn; the last question of one round may
//! therefore open the next.
//!
//! ## Timing
//!
//! Remaining time is held as a [`Duration`], so repeated ticks of the same
//! size sum exactly: 600 ticks of 100 ms bring a 60 s countdown to zero on
//! the 600th tick, never the 601st. Reaching zero advances exactly once.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use trivia_core::{Question, TriviaError, QUESTION_DURATION_SECS, REVEAL_THRESHOLD_SECS};

use crate::shuffle::permutation;

/// Time each question stays on screen.
pub const QUESTION_DURATION: Duration = Duration::from_secs(QUESTION_DURATION_SECS);

/// Remaining time at which the answer is revealed.
pub const REVEAL_THRESHOLD: Duration = Duration::from_secs(REVEAL_THRESHOLD_SECS);

// ─── Session State ───────────────────────────────────────────────────

/// Lifecycle state, derived from the session's fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// No questions loaded.
    Empty,
    /// Questions loaded, timer not started since the last load or reset.
    Loaded,
    /// Timer ticking.
    Running,
    /// Timer halted after having run; position and countdown retained.
    Paused,
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Empty => "EMPTY",
            Self::Loaded => "LOADED",
            Self::Running => "RUNNING",
            Self::Paused => "PAUSED",
        };
        f.write_str(s)
    }
}

// ─── Errors ──────────────────────────────────────────────────────────

/// Errors from session operations. Loading an empty set is the only one;
/// once loaded, the session cannot fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("cannot load a session with no questions")]
    EmptyInput,
}

impl From<SessionError> for TriviaError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::EmptyInput => TriviaError::EmptyInput,
        }
    }
}

// ─── Tick Outcome ────────────────────────────────────────────────────

/// What a single [`QuizSession::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TickOutcome {
    /// Session not running; nothing changed.
    Idle,
    /// Countdown decreased.
    Counted,
    /// Countdown decreased and crossed the reveal threshold.
    Revealed,
    /// Countdown reached zero and the session moved to the next question.
    Advanced {
        /// Whether the advance wrapped into a new round.
        new_round: bool,
    },
}

// ─── Snapshot ────────────────────────────────────────────────────────

/// Point-in-time view for display layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub state: SessionState,
    pub question: Option<Question>,
    pub file_name: Option<String>,
    /// Position within the current round.
    pub position: usize,
    /// Questions per round.
    pub round_len: usize,
    /// Completed rounds since load.
    pub rounds_completed: u64,
    pub time_remaining_secs: f64,
    /// Fraction of the countdown left, for the progress bar.
    pub progress: f64,
    pub answer_revealed: bool,
}

// ─── Quiz Session ────────────────────────────────────────────────────

/// Quiz session over an owned question set.
///
/// Calls must be serialized by the host; the session is not shared between
/// display surfaces.
#[derive(Debug, Clone)]
pub struct QuizSession<R = StdRng> {
    questions: Vec<Question>,
    order: Vec<usize>,
    position: usize,
    remaining: Duration,
    answer_revealed: bool,
    running: bool,
    started: bool,
    rounds_completed: u64,
    file_name: Option<String>,
    rng: R,
}

impl QuizSession<StdRng> {
    /// Empty session seeded from OS entropy.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Empty session with a deterministic shuffle sequence.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for QuizSession<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> QuizSession<R> {
    /// Empty session drawing permutations from `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self {
            questions: Vec::new(),
            order: Vec::new(),
            position: 0,
            remaining: QUESTION_DURATION,
            answer_revealed: false,
            running: false,
            started: false,
            rounds_completed: 0,
            file_name: None,
            rng,
        }
    }

    /// Replace the question set and start a fresh round, stopped.
    ///
    /// # Errors
    ///
    /// `SessionError::EmptyInput` if `questions` is empty. The session is
    /// left exactly as it was.
    pub fn load(
        &mut self,
        questions: Vec<Question>,
        file_name: Option<String>,
    ) -> Result<(), SessionError> {
        if questions.is_empty() {
            tracing::warn!("refusing to load an empty question set");
            return Err(SessionError::EmptyInput);
        }
        self.order = permutation(questions.len(), &mut self.rng);
        self.questions = questions;
        self.file_name = file_name;
        self.position = 0;
        self.rounds_completed = 0;
        self.running = false;
        self.started = false;
        self.reset_countdown();
        tracing::info!(
            questions = self.questions.len(),
            file = self.file_name.as_deref().unwrap_or(""),
            "session loaded"
        );
        Ok(())
    }

    /// Start the countdown. Resets the countdown and hides the answer.
    /// No-op when already running or when nothing is loaded.
    pub fn start(&mut self) {
        if self.running || self.questions.is_empty() {
            return;
        }
        self.running = true;
        self.started = true;
        self.reset_countdown();
        tracing::debug!(position = self.position, "session started");
    }

    /// Halt the countdown, keeping position and remaining time. Idempotent.
    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        tracing::debug!(
            position = self.position,
            remaining_ms = self.remaining.as_millis() as u64,
            "session stopped"
        );
    }

    /// Stop, draw a fresh permutation and return to the first position with
    /// a full countdown.
    pub fn reset(&mut self) {
        self.stop();
        self.started = false;
        if self.questions.is_empty() {
            return;
        }
        self.order = permutation(self.questions.len(), &mut self.rng);
        self.position = 0;
        self.reset_countdown();
        tracing::debug!("session reset");
    }

    /// Move to the next question, reshuffling when the round wraps.
    /// Returns whether a new round began. No-op when nothing is loaded.
    pub fn advance(&mut self) -> bool {
        if self.order.is_empty() {
            return false;
        }
        self.position = (self.position + 1) % self.order.len();
        let new_round = self.position == 0;
        if new_round {
            self.order = permutation(self.questions.len(), &mut self.rng);
            self.rounds_completed += 1;
            tracing::debug!(rounds = self.rounds_completed, "new round");
        }
        self.reset_countdown();
        new_round
    }

    /// Decrease the countdown by `delta`. Reveals the answer once the
    /// countdown is at or below the threshold and advances when it reaches
    /// zero. Ignored unless running.
    pub fn tick(&mut self, delta: Duration) -> TickOutcome {
        if !self.running {
            return TickOutcome::Idle;
        }
        self.remaining = self.remaining.saturating_sub(delta);

        if self.remaining.is_zero() {
            let new_round = self.advance();
            return TickOutcome::Advanced { new_round };
        }
        if !self.answer_revealed && self.remaining <= REVEAL_THRESHOLD {
            self.answer_revealed = true;
            return TickOutcome::Revealed;
        }
        TickOutcome::Counted
    }

    /// [`tick`](Self::tick) with the delta in seconds. Negative or
    /// non-finite deltas are treated as zero.
    pub fn tick_secs(&mut self, delta_secs: f64) -> TickOutcome {
        let delta = Duration::try_from_secs_f64(delta_secs).unwrap_or(Duration::ZERO);
        self.tick(delta)
    }

    fn reset_countdown(&mut self) {
        self.remaining = QUESTION_DURATION;
        self.answer_revealed = false;
    }

    // ── Getters ──────────────────────────────────────────────────────

    /// Question on screen, or `None` when nothing is loaded.
    pub fn current_question(&self) -> Option<&Question> {
        self.order
            .get(self.position)
            .and_then(|&i| self.questions.get(i))
    }

    pub fn state(&self) -> SessionState {
        if self.questions.is_empty() {
            SessionState::Empty
        } else if self.running {
            SessionState::Running
        } else if self.started {
            SessionState::Paused
        } else {
            SessionState::Loaded
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Current permutation of question indices.
    pub fn shuffled_indices(&self) -> &[usize] {
        &self.order
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn rounds_completed(&self) -> u64 {
        self.rounds_completed
    }

    pub fn time_remaining(&self) -> Duration {
        self.remaining
    }

    pub fn time_remaining_secs(&self) -> f64 {
        self.remaining.as_secs_f64()
    }

    /// Fraction of the countdown remaining, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        (self.remaining.as_secs_f64() / QUESTION_DURATION.as_secs_f64()).clamp(0.0, 1.0)
    }

    pub fn answer_revealed(&self) -> bool {
        self.answer_revealed
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            state: self.state(),
            question: self.current_question().cloned(),
            file_name: self.file_name.clone(),
            position: self.position,
            round_len: self.order.len(),
            rounds_completed: self.rounds_completed,
            time_remaining_secs: self.time_remaining_secs(),
            progress: self.progress(),
            answer_revealed: self.answer_revealed,
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
