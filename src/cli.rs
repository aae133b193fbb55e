//! Command-line interface.
//!
//! Without a subcommand the binary starts the TUI. Each subcommand makes a
//! single backend call and prints the result.

use crate::api::{StudyApi, UploadFile};
use crate::config::{Config, UploadConfig};
use crate::constants::CLEAR_CONFIRMATION_MESSAGE;
use crate::ui::components::validate_upload_path;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Study Assistant - upload study material and ask questions about it.
#[derive(Parser, Debug)]
#[command(name = "study-assistant")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Backend base URL for this run (overrides the environment and config file).
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Configuration file to load instead of the default search path.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Upload a PDF or PPTX file to be indexed.
    Upload {
        /// Path of the file to upload.
        file: PathBuf,
    },

    /// Ask a single question about the uploaded documents.
    Ask {
        /// The question to ask.
        query: String,
    },

    /// Show how many document chunks are indexed.
    Status,

    /// Check that the backend is up.
    Health,

    /// Delete every indexed document.
    Clear {
        /// Skip the confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },

    /// Write a default configuration file.
    GenerateConfig {
        /// Destination (defaults to the user config directory).
        path: Option<PathBuf>,
    },
}

impl Cli {
    /// Load the configuration selected by `--config`, or the default search path
    pub fn load_config(&self) -> Result<Config> {
        match &self.config {
            Some(path) => Config::load_from_file(path),
            None => Config::load(),
        }
    }
}

/// Run a backend subcommand, writing human-readable output to `out`.
///
/// `input` is read only by `clear` when confirmation is required.
pub async fn run_command<W: Write, R: BufRead>(
    command: Commands,
    api: &dyn StudyApi,
    upload_config: &UploadConfig,
    out: &mut W,
    input: &mut R,
) -> Result<()> {
    match command {
        Commands::Upload { file } => {
            let path = validate_upload_path(&file.to_string_lossy(), upload_config).map_err(anyhow::Error::msg)?;
            let upload = UploadFile::from_path(&path).await?;
            let response = api.upload_file(upload).await.context("Upload failed")?;
            writeln!(out, "{}", response.message)?;
            writeln!(out, "{}: {} chunks added", response.filename, response.chunks_added)?;
        }
        Commands::Ask { query } => {
            let response = api.chat(&query, None).await.context("Chat request failed")?;
            writeln!(out, "{}", response.answer)?;
            if !response.sources.is_empty() {
                writeln!(out)?;
                writeln!(out, "Sources: {}", response.sources.join(", "))?;
            }
        }
        Commands::Status => {
            let status = api.get_status().await.context("Status request failed")?;
            writeln!(out, "{}", status.message)?;
            writeln!(out, "{} document chunks indexed", status.document_count)?;
        }
        Commands::Health => {
            let health = api.health_check().await.context("Health check failed")?;
            writeln!(
                out,
                "{} ({}): {} documents indexed",
                api.base_url(),
                health.status,
                health.documents_indexed
            )?;
        }
        Commands::Clear { yes } => {
            if !yes && !confirm(out, input)? {
                writeln!(out, "Aborted")?;
                return Ok(());
            }
            let response = api.clear_documents().await.context("Clear request failed")?;
            writeln!(out, "{}", response.message)?;
        }
        Commands::GenerateConfig { .. } => {
            anyhow::bail!("generate-config does not talk to the backend");
        }
    }

    Ok(())
}

fn confirm<W: Write, R: BufRead>(out: &mut W, input: &mut R) -> Result<bool> {
    write!(out, "{} [y/N] ", CLEAR_CONFIRMATION_MESSAGE)?;
    out.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}
