//! # Run Subcommand
//!
//! Presents a quiz in the terminal. The session runs on the tick driver;
//! this module only watches snapshots and prints each question when it
//! appears and its answer when it is revealed.
//!
//! Stops after the requested number of rounds or on Ctrl-C.

use std::future::Future;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use trivia_catalog::ThemeState;
use trivia_core::{HostConfig, TriviaError};
use trivia_schema::{load_trivia_file, SchemaValidator};
use trivia_session::{QuizSession, SessionDriver, SessionSnapshot};

use crate::{resolve_trivia_path, EXIT_INVALID, EXIT_OK};

/// Arguments for the `trivia run` subcommand.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Trivia file, or the name of a file in the trivia directory.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Theme id (file stem in the themes directory).
    #[arg(long)]
    pub theme: Option<String>,

    /// Full rounds to present before exiting.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    pub rounds: u64,

    /// Seed the shuffle for a reproducible order.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// How a presentation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Finish {
    RoundsCompleted,
    Interrupted,
}

/// Execute the run subcommand.
pub fn run_quiz(args: &RunArgs, config: &HostConfig) -> Result<u8> {
    let validator = SchemaValidator::new().context("failed to compile embedded schemas")?;
    let path = resolve_trivia_path(&args.path, &config.trivia_dir);

    let loaded = match load_trivia_file(&validator, &path) {
        Ok(loaded) => loaded,
        Err(e @ TriviaError::Io { .. }) => return Err(e.into()),
        Err(e) => {
            println!("FAIL: {}\n{e}", path.display());
            return Ok(EXIT_INVALID);
        }
    };

    let mut themes = ThemeState::new();
    themes.load_all(&config.themes_dir, &validator)?;
    if let Some(id) = &args.theme {
        if let Err(e) = themes.select_id(id, &validator) {
            tracing::warn!(theme = %id, error = %e, "theme not applied");
        }
    }
    if let Some(theme) = themes.current() {
        println!(
            "Theme: {} ({} speed, {} ms transitions, text {})",
            theme.name,
            themes.animation_speed(),
            themes.transition_duration_ms(),
            themes.text_color()
        );
    }

    let mut session = match args.seed {
        Some(seed) => QuizSession::with_seed(seed),
        None => QuizSession::new(),
    };
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned());
    session.load(loaded.document.questions, file_name)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    let finish = runtime.block_on(present(
        session,
        args.rounds,
        std::io::stdout(),
        async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "cannot listen for Ctrl-C");
                std::future::pending::<()>().await;
            }
        },
    ))?;
    tracing::info!(?finish, "presentation ended");
    Ok(EXIT_OK)
}

/// Drive a loaded session until `rounds` rounds complete or `interrupt`
/// resolves, writing the presentation to `out`.
pub async fn present<W, F>(
    session: QuizSession,
    rounds: u64,
    mut out: W,
    interrupt: F,
) -> Result<Finish>
where
    W: Write,
    F: Future<Output = ()>,
{
    let driver = SessionDriver::spawn(session);
    let mut updates = driver.subscribe();
    let mut last = driver.start().await?;
    if let Some(name) = &last.file_name {
        writeln!(out, "== {name} ==")?;
    }
    write_question(&mut out, &last)?;

    tokio::pin!(interrupt);
    let finish = loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    break Finish::Interrupted;
                }
                let snap = updates.borrow_and_update().clone();
                let moved = (snap.rounds_completed, snap.position) != (last.rounds_completed, last.position);
                if moved {
                    if !last.answer_revealed {
                        write_answer(&mut out, &last)?;
                    }
                    if snap.rounds_completed >= rounds {
                        break Finish::RoundsCompleted;
                    }
                    write_question(&mut out, &snap)?;
                } else if snap.answer_revealed && !last.answer_revealed {
                    write_answer(&mut out, &snap)?;
                }
                last = snap;
            }
            () = &mut interrupt => {
                writeln!(out)?;
                break Finish::Interrupted;
            }
        }
    };

    driver.stop().await?;
    driver.shutdown().await?;
    out.flush()?;
    Ok(finish)
}

fn write_question<W: Write>(out: &mut W, snap: &SessionSnapshot) -> std::io::Result<()> {
    let Some(q) = &snap.question else {
        return Ok(());
    };
    writeln!(
        out,
        "\n[round {} · {}/{}] {} > {} > {}",
        snap.rounds_completed + 1,
        snap.position + 1,
        snap.round_len,
        q.category.main,
        q.category.sub,
        q.category.subsub
    )?;
    writeln!(out, "Q: {}", q.question)?;
    out.flush()
}

fn write_answer<W: Write>(out: &mut W, snap: &SessionSnapshot) -> std::io::Result<()> {
    if let Some(q) = &snap.question {
        writeln!(out, "A: {}", q.answer)?;
    }
    out.flush()
}
