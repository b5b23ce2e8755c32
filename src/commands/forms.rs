use teloxide::types::ChatId;

use crate::{
    error::BotError,
    sender::MessageSender,
    storage::FormStorage,
    texts::{Template, Texts},
    types::IncomingEvent,
};

pub async fn ask_for_form(
    sender: &dyn MessageSender,
    texts: &Texts,
    chat_id: ChatId,
) -> Result<(), BotError> {
    sender
        .send_message(&texts.render(Template::FormAdd)?, chat_id)
        .await?;
    Ok(())
}

pub async fn ask_for_form_update(
    sender: &dyn MessageSender,
    texts: &Texts,
    chat_id: ChatId,
) -> Result<(), BotError> {
    sender
        .send_message(&texts.render(Template::FormUpdate)?, chat_id)
        .await?;
    Ok(())
}

/// Takes the event text as the new form.
pub async fn accept_form(
    sender: &dyn MessageSender,
    storage: Option<&dyn FormStorage>,
    texts: &Texts,
    event: &IncomingEvent,
) -> Result<(), BotError> {
    if let Some(storage) = storage {
        storage
            .insert_form(event.user_id, &event.user_name, &event.text)
            .await?;
    }

    sender
        .send_message(&texts.render(Template::FormAdded)?, event.user_id)
        .await?;
    Ok(())
}

pub async fn accept_form_update(
    sender: &dyn MessageSender,
    storage: Option<&dyn FormStorage>,
    texts: &Texts,
    event: &IncomingEvent,
) -> Result<(), BotError> {
    if let Some(storage) = storage {
        storage
            .update_form(event.user_id, &event.user_name, &event.text)
            .await?;
    }

    sender
        .send_message(&texts.render(Template::FormUpdated)?, event.user_id)
        .await?;
    Ok(())
}
