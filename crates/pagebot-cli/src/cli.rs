//! Command-line definitions for the `pagebot` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use pagebot_observe::tracing_setup::TracingOptions;

/// Talk to the profile assistant from a terminal.
#[derive(Parser)]
#[command(name = "pagebot", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Widget config file (defaults to ~/.pagebot/pagebot.toml).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Seed for the simulated latency, for reproducible timing.
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Skip the simulated latency entirely.
    #[arg(long, global = true)]
    pub instant: bool,

    /// Keep the typing indicator on until the reply lands.
    #[arg(long, global = true)]
    pub sequential: bool,

    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Write logs to stderr as JSON lines.
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Export spans to stdout via OpenTelemetry.
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the widget and chat interactively (default).
    Chat,

    /// Ask a single question and print the reply.
    Ask {
        /// The question to ask.
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },

    /// Show which topic a question would be routed to.
    Classify {
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

impl Cli {
    /// Log filter derived from -v / --quiet. `RUST_LOG` still overrides it.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 if self.quiet => "error",
            0 => "warn",
            1 => "info,pagebot_core=debug",
            _ => "trace",
        }
    }

    pub fn tracing_options(&self) -> TracingOptions {
        TracingOptions {
            json: self.log_json,
            otel: self.otel,
            ..TracingOptions::new(self.log_filter())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_none() {
        let cli = Cli::parse_from(["pagebot"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.log_filter(), "warn");
    }

    #[test]
    fn test_ask_collects_words() {
        let cli = Cli::parse_from(["pagebot", "--seed", "7", "ask", "what", "skills?"]);
        assert_eq!(cli.seed, Some(7));
        match cli.command {
            Some(Commands::Ask { question }) => assert_eq!(question.join(" "), "what skills?"),
            _ => panic!("expected ask"),
        }
    }

    #[test]
    fn test_completions_shell() {
        let cli = Cli::parse_from(["pagebot", "completions", "bash"]);
        assert!(matches!(cli.command, Some(Commands::Completions { shell: Shell::Bash })));
    }

    #[test]
    fn test_verbosity_filters() {
        assert_eq!(Cli::parse_from(["pagebot", "-v"]).log_filter(), "info,pagebot_core=debug");
        assert_eq!(Cli::parse_from(["pagebot", "-vv"]).log_filter(), "trace");
        assert_eq!(Cli::parse_from(["pagebot", "--quiet"]).log_filter(), "error");
    }

    #[test]
    fn test_tracing_options_follow_flags() {
        let options = Cli::parse_from(["pagebot", "--log-json", "--otel", "-v"]).tracing_options();
        assert!(options.json);
        assert!(options.otel);
        assert_eq!(options.default_filter, "info,pagebot_core=debug");
    }
}
