//! Content check binary - validates a content file and optionally previews a page
//!
//! Usage:
//!   cargo run --bin content-check                          # Check CONTENT_PATH or the bundled content
//!   cargo run --bin content-check -- data/content.json     # Check a specific file
//!   cargo run --bin content-check -- data/content.json /teachers bn
//!                                                          # Also print the resolved page as JSON
//!
//! Exits with a non-zero status when the content does not match the site schema
//! or has validation errors.

use anyhow::{bail, Context, Result};
use school_site::content::ContentStore;
use school_site::directory::SearchState;
use school_site::i18n::Language;
use school_site::pages;
use school_site::routes::Route;
use serde_json::Value;
use std::path::PathBuf;
use tracing::info;

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("content_check=info".parse()?)
                .add_directive("school_site=info".parse()?),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let path = args
        .first()
        .cloned()
        .or_else(|| std::env::var("CONTENT_PATH").ok())
        .filter(|path| !path.trim().is_empty())
        .map(PathBuf::from);

    let raw: Value = match &path {
        Some(path) => {
            info!("Checking {}", path.display());
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            serde_json::from_str(&json).with_context(|| format!("Invalid JSON in {}", path.display()))?
        }
        None => {
            info!("Checking bundled content");
            serde_json::from_str(school_site::content::BUNDLED_CONTENT)?
        }
    };

    let report = ContentStore::check(&raw)?;
    for warning in &report.warnings {
        println!("warning: {}", warning);
    }
    for error in &report.errors {
        println!("error: {}", error);
    }
    if report.has_errors() {
        bail!("{} content error(s)", report.errors.len());
    }
    println!("Content OK ({} warning(s))", report.warnings.len());

    if let Some(page_path) = args.get(1) {
        let lang = match args.get(2) {
            Some(code) => Language::from_code(code)?,
            None => Language::canonical(),
        };
        let store = ContentStore::from_value(raw)?;
        let view = pages::render(&store, Route::from_path(page_path), lang, &SearchState::default())?;
        println!("{}", serde_json::to_string_pretty(&view)?);
    }

    Ok(())
}
