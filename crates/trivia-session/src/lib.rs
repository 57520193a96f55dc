//! # trivia-session — Quiz Session
//!
//! The presenter's playback engine: a question set cycled in no-repeat
//! shuffled rounds with a per-question countdown and answer reveal.
//!
//! ## Session (`session`)
//!
//! [`QuizSession`] is a plain state machine. It never reads a clock; the
//! host feeds it elapsed time through [`QuizSession::tick`].
//!
//! ## Driver (`driver`)
//!
//! [`SessionDriver`] runs a session on a tokio task with a 100 ms interval
//! and serializes commands and ticks through one queue.
//!
//! ## Shuffle (`shuffle`)
//!
//! Index permutations drawn with `SliceRandom::shuffle` from any
//! `rand::Rng`, so tests can seed them.

pub mod driver;
pub mod session;
pub mod shuffle;

pub use driver::{DriverError, SessionDriver, TICK_INTERVAL};
pub use session::{
    QuizSession, SessionError, SessionSnapshot, SessionState, TickOutcome, QUESTION_DURATION,
    REVEAL_THRESHOLD,
};
pub use shuffle::permutation;
