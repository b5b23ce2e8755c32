use teloxide::types::ChatId;

use crate::{
    error::BotError,
    sender::MessageSender,
    texts::{Template, Texts},
};

pub async fn show_help(
    sender: &dyn MessageSender,
    texts: &Texts,
    chat_id: ChatId,
) -> Result<(), BotError> {
    sender
        .send_message(&texts.render(Template::Help)?, chat_id)
        .await?;
    Ok(())
}

pub async fn unknown_command(
    sender: &dyn MessageSender,
    texts: &Texts,
    chat_id: ChatId,
) -> Result<(), BotError> {
    sender
        .send_message(&texts.render(Template::UnknownCommand)?, chat_id)
        .await?;
    Ok(())
}
