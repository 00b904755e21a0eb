//! CLI module for assessa
//!
//! Provides the command-line interface using clap.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::documents::DocumentKind;

/// Assessa - Candidate assessment wizard: identity, video uploads, evaluation and result
#[derive(Parser, Debug)]
#[command(name = "assessa")]
#[command(version)]
#[command(about = "Replay and inspect candidate assessment wizard sessions")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress info-level output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Config file (defaults to ./assessa.json when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replay a scripted session and print every event outcome
    Run {
        /// Path to the script JSON
        script: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Write the final session snapshot to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Skip the evaluation delays
        #[arg(long)]
        instant: bool,

        /// Use this overall score instead of a random one
        #[arg(long)]
        score: Option<u32>,
    },

    /// Show gate decisions and step badges for a saved profile
    Check {
        /// Path to the profile JSON
        profile: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render the certificate or report for a saved snapshot
    Document {
        /// Path to the snapshot JSON written by `run --output`
        snapshot: PathBuf,

        /// Which document to render
        #[arg(long, value_enum)]
        kind: DocumentKind,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Directory with custom certificate.txt / report.md templates
        #[arg(long)]
        templates: Option<PathBuf>,
    },

    /// Replay a scripted session in a live terminal view
    Watch {
        /// Path to the script JSON
        script: PathBuf,

        /// Use this overall score instead of a random one
        #[arg(long)]
        score: Option<u32>,
    },
}
