use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracer_common::types::{LabelId, TracerId};

#[derive(Parser, Debug)]
#[clap(
    name = "tracer",
    about = "Command line client for the tracer API",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// TOML config file; ./tracer.toml is used when present and this is not given
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    /// host:port of the tracer API, overriding the config file and TRACER_SERVER
    #[clap(long, global = true)]
    pub server: Option<String>,

    /// Write logs to this file instead of stderr
    #[clap(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Log every request stage
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Read and submit tracers
    #[clap(subcommand)]
    Tracers(TracerCommands),

    /// Submit tracer events
    #[clap(subcommand)]
    Events(EventCommands),

    /// Read and submit labels
    #[clap(subcommand)]
    Labels(LabelCommands),
}

#[derive(Subcommand, Debug, Clone)]
pub enum TracerCommands {
    /// List every tracer known to the server
    List,

    /// Submit a request bundle read from a JSON file
    Add { file: PathBuf },
}

#[derive(Subcommand, Debug, Clone)]
pub enum EventCommands {
    /// Submit one event read from a JSON file
    Add { tracer_id: TracerId, file: PathBuf },

    /// Submit events from a JSON object keyed by tracer id
    AddMany { file: PathBuf },
}

#[derive(Subcommand, Debug, Clone)]
pub enum LabelCommands {
    /// List every label
    List,

    /// Show a single label
    Get { id: LabelId },

    /// Submit a label read from a JSON file
    Add { file: PathBuf },
}
