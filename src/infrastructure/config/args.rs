use super::app_config::{LogLevel, OutputFormat};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "chatcell",
    version,
    about = "Describe how chat messages are presented in a message list",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Output format.
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Timestamp format string (chrono format).
    #[arg(long)]
    pub timestamp_format: Option<String>,

    /// Render status separators.
    #[arg(long)]
    pub show_statuses: Option<bool>,

    /// Default for channels without configuration: allow replies.
    #[arg(long)]
    pub replies_enabled: Option<bool>,

    /// Default for channels without configuration: allow reactions.
    #[arg(long)]
    pub reactions_enabled: Option<bool>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render every item of a channel snapshot.
    Render {
        /// Snapshot file; defaults to the last one used.
        snapshot: Option<PathBuf>,
    },
    /// Tap an attachment, or one of its action buttons.
    Tap {
        /// Snapshot file; defaults to the last one used.
        snapshot: Option<PathBuf>,

        /// Message id.
        #[arg(short, long)]
        message: String,

        /// Attachment index within the message.
        #[arg(short, long, default_value_t = 0)]
        attachment: usize,

        /// Action button index of an ephemeral attachment.
        #[arg(long)]
        action: Option<usize>,

        /// Open web view routes in the system browser.
        #[arg(long)]
        open: bool,
    },
    /// Deliver a gesture to a message bubble.
    Gesture {
        /// Snapshot file; defaults to the last one used.
        snapshot: Option<PathBuf>,

        /// Message id.
        #[arg(short, long)]
        message: String,

        /// Gesture kind.
        #[arg(short, long, value_enum, default_value_t = GestureArg::Tap)]
        kind: GestureArg,
    },
    /// Open the reply thread of a message and render it.
    Replies {
        /// Snapshot file; defaults to the last one used.
        snapshot: Option<PathBuf>,

        /// Parent message id.
        #[arg(short, long)]
        message: String,
    },
}

impl Command {
    /// Snapshot path given on the command line.
    #[must_use]
    pub fn snapshot(&self) -> Option<&PathBuf> {
        match self {
            Self::Render { snapshot }
            | Self::Tap { snapshot, .. }
            | Self::Gesture { snapshot, .. }
            | Self::Replies { snapshot, .. } => snapshot.as_ref(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GestureArg {
    Tap,
    LongPress,
}
