//! Main chat loop.
//!
//! Opens the widget, reads lines, routes slash commands to the widget chrome
//! and everything else to the conversation, then waits out the simulated
//! typing before reading the next line.

use console::style;
use pagebot_core::widget::ChatWidget;
use pagebot_observe::attrs::SPAN_TURN;
use pagebot_types::error::SubmitError;
use pagebot_types::widget::WidgetVisibility;
use tracing::{info_span, warn, Instrument};

use super::commands::{self, ChatCommand};
use super::input::{ChatInput, InputEvent};
use super::renderer;

fn prompt_for(visibility: WidgetVisibility) -> String {
    match visibility {
        WidgetVisibility::Open => format!("  {} ", style("You >").green().bold()),
        WidgetVisibility::Minimized => format!("  {} ", style("[minimized] >").dim()),
        WidgetVisibility::Closed => format!("  {} ", style("[closed] >").dim()),
    }
}

/// Run the interactive loop until EOF or `/exit`, then unmount the widget.
///
/// With `json`, the final transcript is printed as JSON on exit.
pub async fn run_chat_loop(mut widget: ChatWidget, json: bool) -> anyhow::Result<()> {
    widget.open();
    renderer::print_panel_state(widget.visibility());
    renderer::print_history(&widget.snapshot().messages);

    let (mut chat_input, _writer) = ChatInput::new(prompt_for(widget.visibility()))
        .map_err(|e| anyhow::anyhow!("Failed to initialize input: {e}"))?;

    loop {
        match chat_input.read_line().await {
            InputEvent::Eof => {
                println!("\n  {}", style("Session ended.").dim());
                break;
            }
            InputEvent::Interrupted => {
                println!("\n  {}", style("Press Ctrl+D to exit, or keep chatting.").dim());
            }
            InputEvent::Line(text) => {
                if let Some(cmd) = commands::parse(&text) {
                    let keep_going = handle_command(cmd, &mut widget, &mut chat_input);
                    chat_input.update_prompt(&prompt_for(widget.visibility()));
                    if !keep_going {
                        break;
                    }
                    continue;
                }

                if !widget.visibility().shows_messages() {
                    println!(
                        "\n  {} The panel is {}. Type /open to keep chatting.\n",
                        style("!").yellow().bold(),
                        widget.visibility()
                    );
                    continue;
                }

                let turn = async {
                    match widget.submit(text).await {
                        Ok(_) => {
                            if let Some(reply) = renderer::wait_for_reply(&widget).await {
                                renderer::print_message(&reply);
                                println!();
                            }
                        }
                        Err(SubmitError::EmptyMessage) => {}
                        Err(err) => {
                            warn!(error = %err, "submission rejected");
                            println!("\n  {} {err}\n", style("!").yellow().bold());
                        }
                    }
                };
                turn.instrument(info_span!(SPAN_TURN)).await;
            }
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&widget.snapshot())?);
    }
    widget.shutdown().await;
    Ok(())
}

/// Apply a slash command. Returns `false` when the loop should end.
fn handle_command(cmd: ChatCommand, widget: &mut ChatWidget, chat_input: &mut ChatInput) -> bool {
    match cmd {
        ChatCommand::Help => commands::print_help(),
        ChatCommand::Open => {
            let before = widget.visibility();
            // The expand button on a minimized panel is the minimize toggle.
            let after = if before == WidgetVisibility::Minimized {
                widget.toggle_minimize()
            } else {
                widget.open()
            };
            renderer::print_panel_state(after);
            if before == WidgetVisibility::Closed && after == WidgetVisibility::Open {
                renderer::print_history(&widget.snapshot().messages);
            }
        }
        ChatCommand::Minimize => {
            let after = widget.toggle_minimize();
            renderer::print_panel_state(after);
        }
        ChatCommand::Close => {
            let after = widget.close();
            renderer::print_panel_state(after);
        }
        ChatCommand::History => {
            if widget.visibility().shows_messages() {
                renderer::print_history(&widget.snapshot().messages);
            } else {
                renderer::print_panel_state(widget.visibility());
            }
        }
        ChatCommand::Clear => chat_input.clear(),
        ChatCommand::Exit => {
            println!("\n  {}", style("Session ended.").dim());
            return false;
        }
        ChatCommand::Unknown(name) => {
            println!(
                "\n  {} Unknown command: {}. Type /help for available commands.\n",
                style("?").yellow().bold(),
                style(name).dim()
            );
        }
    }
    true
}
