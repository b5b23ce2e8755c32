use teloxide::utils::command::BotCommands;

pub mod forms;
pub mod help;
pub mod questions;
pub mod start;

/// Top-level commands, registered with Telegram at startup.
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(
    rename_rule = "lowercase",
    description = "These commands are supported:"
)]
pub enum Command {
    #[command(description = "open the main menu.")]
    Start,
    #[command(description = "display this text.")]
    Help,
}

impl Command {
    /// Matches the whole text literally: no arguments, no `@bot` suffix.
    pub fn from_text(text: &str) -> Option<Self> {
        match text {
            "/start" => Some(Command::Start),
            "/help" => Some(Command::Help),
            _ => None,
        }
    }
}
