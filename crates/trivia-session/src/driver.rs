//! # Tick Driver
//!
//! Owns a [`QuizSession`] inside a tokio task and is the single event queue
//! through which every mutation flows: commands arrive on an `mpsc` channel,
//! ticks come from a 100 ms `interval` that is only polled while the session
//! is running. Because one task applies both, calls are never reentrant.
//!
//! Each command is acknowledged with the resulting snapshot. Every processed
//! event also publishes a snapshot on a `watch` channel for display layers.

use std::time::Duration;

use rand::Rng;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

use trivia_core::{Question, TICK_INTERVAL_MS};

use crate::session::{QuizSession, SessionError, SessionSnapshot, TickOutcome};

/// Interval between ticks while the session is running.
pub const TICK_INTERVAL: Duration = Duration::from_millis(TICK_INTERVAL_MS);

const COMMAND_BUFFER: usize = 16;

/// Errors returned by [`SessionDriver`] handles.
#[derive(Error, Debug)]
pub enum DriverError {
    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("session driver has shut down")]
    Closed,

    #[error("session driver task failed: {0}")]
    Task(String),
}

#[derive(Debug)]
enum Op {
    Load {
        questions: Vec<Question>,
        file_name: Option<String>,
    },
    Start,
    Stop,
    Reset,
    Advance,
}

struct Command {
    op: Op,
    reply: oneshot::Sender<Result<SessionSnapshot, SessionError>>,
}

/// Handle to a session running on its own task.
#[derive(Debug)]
pub struct SessionDriver {
    commands: mpsc::Sender<Command>,
    snapshots: watch::Receiver<SessionSnapshot>,
    task: JoinHandle<()>,
}

impl SessionDriver {
    /// Move `session` onto a new task. Must be called inside a tokio runtime.
    pub fn spawn<R>(session: QuizSession<R>) -> Self
    where
        R: Rng + Send + 'static,
    {
        let (commands, rx) = mpsc::channel(COMMAND_BUFFER);
        let (tx, snapshots) = watch::channel(session.snapshot());
        let task = tokio::spawn(run(session, rx, tx));
        Self {
            commands,
            snapshots,
            task,
        }
    }

    async fn send(&self, op: Op) -> Result<SessionSnapshot, DriverError> {
        let (reply, response) = oneshot::channel();
        self.commands
            .send(Command { op, reply })
            .await
            .map_err(|_| DriverError::Closed)?;
        let result = response.await.map_err(|_| DriverError::Closed)?;
        Ok(result?)
    }

    /// See [`QuizSession::load`].
    pub async fn load(
        &self,
        questions: Vec<Question>,
        file_name: Option<String>,
    ) -> Result<SessionSnapshot, DriverError> {
        self.send(Op::Load {
            questions,
            file_name,
        })
        .await
    }

    /// See [`QuizSession::start`]. Ticks begin one interval later.
    pub async fn start(&self) -> Result<SessionSnapshot, DriverError> {
        self.send(Op::Start).await
    }

    /// See [`QuizSession::stop`]. No tick is applied after this returns.
    pub async fn stop(&self) -> Result<SessionSnapshot, DriverError> {
        self.send(Op::Stop).await
    }

    /// See [`QuizSession::reset`].
    pub async fn reset(&self) -> Result<SessionSnapshot, DriverError> {
        self.send(Op::Reset).await
    }

    /// See [`QuizSession::advance`].
    pub async fn advance(&self) -> Result<SessionSnapshot, DriverError> {
        self.send(Op::Advance).await
    }

    /// Latest published snapshot.
    pub fn snapshot(&self) -> SessionSnapshot {
        self.snapshots.borrow().clone()
    }

    /// Receiver notified after every processed command or tick.
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.snapshots.clone()
    }

    /// Close the command channel and wait for the task to finish.
    pub async fn shutdown(self) -> Result<(), DriverError> {
        let Self { commands, task, .. } = self;
        drop(commands);
        task.await.map_err(|e| DriverError::Task(e.to_string()))
    }
}

async fn run<R: Rng>(
    mut session: QuizSession<R>,
    mut commands: mpsc::Receiver<Command>,
    snapshots: watch::Sender<SessionSnapshot>,
) {
    let mut ticker = time::interval(TICK_INTERVAL);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        let was_running = session.is_running();
        tokio::select! {
            command = commands.recv() => {
                let Some(Command { op, reply }) = command else {
                    break;
                };
                let result = apply(&mut session, op);
                // The caller may have given up waiting; the state change stands.
                let _ = reply.send(result);
            }
            _ = ticker.tick(), if was_running => {
                if let TickOutcome::Advanced { new_round } = session.tick(TICK_INTERVAL) {
                    tracing::debug!(position = session.position(), new_round, "countdown elapsed");
                }
            }
        }

        if !was_running && session.is_running() {
            ticker.reset();
        }
        snapshots.send_replace(session.snapshot());
    }

    session.stop();
    tracing::debug!("session driver stopped");
}

fn apply<R: Rng>(session: &mut QuizSession<R>, op: Op) -> Result<SessionSnapshot, SessionError> {
    match op {
        Op::Load {
            questions,
            file_name,
        } => session.load(questions, file_name)?,
        Op::Start => session.start(),
        Op::Stop => session.stop(),
        Op::Reset => session.reset(),
        Op::Advance => {
            session.advance();
        }
    }
    Ok(session.snapshot())
}
