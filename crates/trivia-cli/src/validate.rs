//! # Validate Subcommand
//!
//! Checks trivia and theme files against their schemas and prints every
//! violation, so a file author can fix a document in one pass.
//!
//! ```text
//! OK: themes/aurora.json
//! FAIL: trivia_configs/broken.json
//!   /questions/0/category/subsub: missing required property: "subsub" is a required property
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use serde_json::Value;

use trivia_catalog::list_files;
use trivia_core::{DocumentKind, HostConfig, TriviaError};
use trivia_schema::{load_theme, load_trivia, read_text_file, SchemaValidator};

use crate::{EXIT_INVALID, EXIT_OK};

/// Arguments for the `trivia validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Schema to check against. Inferred from the document when omitted.
    #[arg(long, value_enum)]
    pub kind: Option<KindArg>,

    /// Validate every file in the configured trivia and theme directories.
    #[arg(long)]
    pub all: bool,

    /// Files to validate.
    #[arg(value_name = "PATH", required_unless_present = "all")]
    pub paths: Vec<PathBuf>,
}

/// Document kind as spelled on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum KindArg {
    Trivia,
    Theme,
}

impl From<KindArg> for DocumentKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Trivia => DocumentKind::Trivia,
            KindArg::Theme => DocumentKind::Theme,
        }
    }
}

/// Outcome for one file.
#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub kind: DocumentKind,
    pub result: Result<(), TriviaError>,
}

impl FileReport {
    pub fn passed(&self) -> bool {
        self.result.is_ok()
    }

    /// `OK: path`, or `FAIL: path` followed by one line per problem.
    pub fn render(&self) -> String {
        match &self.result {
            Ok(()) => format!("OK: {}", self.path.display()),
            Err(TriviaError::Schema { violations, .. }) => {
                let mut out = format!("FAIL: {}", self.path.display());
                for v in violations {
                    out.push('\n');
                    out.push_str(&v.to_string());
                }
                out
            }
            Err(e) => format!("FAIL: {}\n  {e}", self.path.display()),
        }
    }
}

/// Execute the validate subcommand.
///
/// Returns exit code: 0 when every file passed, 1 when any failed.
pub fn run_validate(args: &ValidateArgs, config: &HostConfig) -> Result<u8> {
    let validator = SchemaValidator::new().context("failed to compile embedded schemas")?;
    let mut reports = Vec::new();

    if args.all {
        for path in list_files(&config.trivia_dir, ".json")? {
            reports.push(validate_file(&validator, &path, Some(DocumentKind::Trivia)));
        }
        for path in list_files(&config.themes_dir, ".json")? {
            reports.push(validate_file(&validator, &path, Some(DocumentKind::Theme)));
        }
    }

    let kind = args.kind.map(DocumentKind::from);
    for path in &args.paths {
        reports.push(validate_file(&validator, path, kind));
    }

    for report in &reports {
        println!("{}", report.render());
    }

    let failed = reports.iter().filter(|r| !r.passed()).count();
    if reports.len() > 1 {
        println!("\n{}/{} passed", reports.len() - failed, reports.len());
    }
    tracing::info!(total = reports.len(), failed, "validation finished");

    Ok(if failed == 0 { EXIT_OK } else { EXIT_INVALID })
}

/// Validate one file. Never fails: every problem lands in the report.
pub fn validate_file(
    validator: &SchemaValidator,
    path: &Path,
    kind: Option<DocumentKind>,
) -> FileReport {
    let (kind, result) = match read_text_file(path) {
        Ok(bytes) => {
            let kind = kind.unwrap_or_else(|| infer_kind(&bytes));
            let result = match kind {
                DocumentKind::Trivia => load_trivia(validator, &bytes).map(|_| ()),
                DocumentKind::Theme => load_theme(validator, &bytes).map(|_| ()),
            };
            (kind, result)
        }
        Err(e) => (kind.unwrap_or(DocumentKind::Trivia), Err(e)),
    };
    FileReport {
        path: path.to_path_buf(),
        kind,
        result,
    }
}

/// Objects without a top-level `questions` property are themes. Everything
/// else, malformed JSON included, is checked as trivia.
fn infer_kind(bytes: &[u8]) -> DocumentKind {
    match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Object(map)) if !map.contains_key("questions") => DocumentKind::Theme,
        _ => DocumentKind::Trivia,
    }
}
