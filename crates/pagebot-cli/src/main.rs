//! Pagebot terminal host.
//!
//! Binary name: `pagebot`
//!
//! Parses CLI arguments, loads the widget config, builds a `ChatWidget`
//! and dispatches to the interactive loop or a one-shot command.

mod chat;
mod cli;

use std::path::PathBuf;

use clap::Parser;
use clap_complete::generate;
use console::style;
use pagebot_core::config::load_widget_config;
use pagebot_core::conversation::ConversationController;
use pagebot_core::intent::classify;
use pagebot_core::latency::FixedLatency;
use pagebot_core::widget::ChatWidget;
use pagebot_observe::attrs::SPAN_SESSION;
use pagebot_observe::tracing_setup::{init_tracing, shutdown_tracing, TracingOptions};
use pagebot_types::config::{TimingMode, WidgetConfig};
use pagebot_types::event::ConversationEvent;
use tracing::{info_span, Instrument};

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Shell completions don't need a widget or logging
    if let Some(Commands::Completions { shell }) = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "pagebot", &mut std::io::stdout());
        return Ok(());
    }

    init_tracing(&cli.tracing_options())
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;

    let result = run(cli).await;
    shutdown_tracing();
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => load_widget_config(path).await,
        None => match default_config_path() {
            Some(path) => load_widget_config(&path).await,
            None => WidgetConfig::default(),
        },
    };
    if cli.sequential {
        config.timing_mode = TimingMode::Sequential;
    }

    match cli.command.unwrap_or(Commands::Chat) {
        Commands::Chat => {
            let widget = build_widget(&config, cli.seed, cli.instant)?;
            chat::banner::print_welcome_banner(config.timing_mode, cli.instant);
            chat::loop_runner::run_chat_loop(widget, cli.json)
                .instrument(info_span!(SPAN_SESSION))
                .await?;
        }

        Commands::Ask { question } => {
            let question = question.join(" ");
            let mut widget = build_widget(&config, cli.seed, cli.instant)?;
            widget.open();
            let mut events = widget.subscribe();

            widget.submit(question.clone()).await?;
            let reply = chat::renderer::wait_for_reply(&widget)
                .await
                .ok_or_else(|| anyhow::anyhow!("conversation stopped before replying"))?;

            let mut intent = None;
            while let Ok(event) = events.try_recv() {
                if let ConversationEvent::TurnCompleted { intent: i, .. } = event {
                    intent = Some(i);
                }
            }

            if cli.json {
                let out = serde_json::json!({
                    "question": question,
                    "intent": intent,
                    "reply": reply,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                chat::renderer::print_message(&reply);
                println!();
            }
            widget.shutdown().await;
        }

        Commands::Classify { question } => {
            let question = question.join(" ");
            let intent = classify(&question);
            if cli.json {
                let out = serde_json::json!({ "question": question, "intent": intent });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("  {} {}", style("Intent:").bold(), style(intent).cyan());
            }
        }

        Commands::Completions { .. } => {}
    }

    Ok(())
}

fn build_widget(
    config: &WidgetConfig,
    seed: Option<u64>,
    instant: bool,
) -> anyhow::Result<ChatWidget> {
    let widget = if instant {
        ChatWidget::new(ConversationController::from_config_with_delays(
            config,
            FixedLatency::instant(),
        )?)
    } else {
        ChatWidget::from_config(config, seed)?
    };
    Ok(widget)
}

/// `~/.pagebot/pagebot.toml`, if a home directory exists.
fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".pagebot").join("pagebot.toml"))
}
