use teloxide::types::ChatId;

use crate::{
    error::BotError,
    sender::MessageSender,
    texts::{Template, Texts},
};

pub async fn ask_for_question(
    sender: &dyn MessageSender,
    texts: &Texts,
    chat_id: ChatId,
) -> Result<(), BotError> {
    sender
        .send_message(&texts.render(Template::QuestionAsk)?, chat_id)
        .await?;
    Ok(())
}

// Answering is not wired yet: the question is only acknowledged.
pub async fn accept_question(
    sender: &dyn MessageSender,
    texts: &Texts,
    chat_id: ChatId,
) -> Result<(), BotError> {
    sender
        .send_message(&texts.render(Template::QuestionAsked)?, chat_id)
        .await?;
    Ok(())
}
