//! Terminal rendering of the widget: message bubbles, the typing indicator
//! and the panel header.

use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use pagebot_core::widget::ChatWidget;
use pagebot_types::message::{ChatMessage, Sender};
use pagebot_types::widget::WidgetVisibility;

/// Print one message with its sender label and `HH:MM` time.
pub fn print_message(message: &ChatMessage) {
    let label = match message.sender {
        Sender::User => style("You").green().bold(),
        Sender::Bot => style("Assistant").cyan().bold(),
    };
    println!();
    println!("  {} {}", label, style(message.display_time()).dim());
    for line in message.content.lines() {
        println!("    {line}");
    }
}

pub fn print_history(messages: &[ChatMessage]) {
    for message in messages {
        print_message(message);
    }
    println!();
}

/// Header line shown whenever the panel changes state.
pub fn print_panel_state(visibility: WidgetVisibility) {
    let text = match visibility {
        WidgetVisibility::Open => "AI Assistant \u{00B7} Online",
        WidgetVisibility::Minimized => "AI Assistant (minimized, /minimize to expand)",
        WidgetVisibility::Closed => "Assistant closed (/open to bring it back)",
    };
    println!("\n  {}", style(text).magenta().bold());
}

fn typing_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(spinner_style) =
        ProgressStyle::default_spinner().template("  {spinner:.cyan} {msg}")
    {
        spinner.set_style(spinner_style);
    }
    spinner.set_message("typing...");
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// Follow the conversation until the outstanding turn completes.
///
/// Shows a spinner exactly while the typing flag is set and returns the
/// bot reply, or `None` if the conversation stopped first.
pub async fn wait_for_reply(widget: &ChatWidget) -> Option<ChatMessage> {
    let mut watch = widget.conversation().watch();
    let mut spinner: Option<ProgressBar> = None;

    loop {
        let (typing, composing, last) = {
            let snap = watch.borrow_and_update();
            (snap.typing, snap.composing, snap.last_message().cloned())
        };

        match (typing, spinner.take()) {
            (true, None) => spinner = Some(typing_spinner()),
            (true, Some(active)) => spinner = Some(active),
            (false, Some(active)) => active.finish_and_clear(),
            (false, None) => {}
        }

        if !composing {
            if let Some(active) = spinner.take() {
                active.finish_and_clear();
            }
            return last.filter(|m| m.sender == Sender::Bot);
        }

        if watch.changed().await.is_err() {
            if let Some(active) = spinner.take() {
                active.finish_and_clear();
            }
            return None;
        }
    }
}
