use async_trait::async_trait;
use teloxide::{prelude::*, types::ParseMode};

use crate::{
    error::BotError,
    keyboards::{render_menu, Menu},
};

/// Outbound side of the bot: plain messages and button menus.
#[async_trait]
pub trait MessageSender: Send + Sync {
    async fn send_message(&self, text: &str, user_id: ChatId) -> Result<(), BotError>;
    async fn show_menu(&self, text: &str, menu: &Menu, user_id: ChatId) -> Result<(), BotError>;
}

pub struct TelegramSender {
    bot: Bot,
}

impl TelegramSender {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl MessageSender for TelegramSender {
    async fn send_message(&self, text: &str, user_id: ChatId) -> Result<(), BotError> {
        self.bot
            .send_message(user_id, text)
            .parse_mode(ParseMode::Html)
            .await
            .map_err(|e| BotError::Send(e.to_string()))?;
        Ok(())
    }

    async fn show_menu(&self, text: &str, menu: &Menu, user_id: ChatId) -> Result<(), BotError> {
        self.bot
            .send_message(user_id, text)
            .parse_mode(ParseMode::Html)
            .reply_markup(render_menu(menu))
            .await
            .map_err(|e| BotError::Send(e.to_string()))?;
        Ok(())
    }
}
