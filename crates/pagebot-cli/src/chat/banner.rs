//! Welcome banner for the terminal host.

use console::style;
use pagebot_types::config::TimingMode;

pub fn print_welcome_banner(timing: TimingMode, instant: bool) {
    let pacing = if instant {
        "instant".to_string()
    } else {
        format!("simulated ({timing:?})").to_lowercase()
    };

    println!();
    println!("  \u{1F9E0} {}", style("Pagebot").cyan().bold());
    println!("  {}", style("Ask me about projects, skills, or experience.").dim());
    println!();
    println!("  {}  {}", style("Typing:").bold(), style(pacing).dim());
    println!();
    println!("  {}", style("Type /help for commands, Ctrl+D to exit").dim());
    println!("  {}", style("---").dim());
}
