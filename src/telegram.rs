use std::sync::Arc;

use teloxide::{prelude::*, types::User};

use crate::{middleware::EventHandler, types::IncomingEvent};

fn chat_id_of(user: &User) -> ChatId {
    ChatId(user.id.0 as i64)
}

pub fn event_from_message(message: &Message) -> Option<IncomingEvent> {
    let user = message.from()?;
    Some(
        IncomingEvent::message(chat_id_of(user), message.text().unwrap_or_default())
            .with_user(user.username.clone().unwrap_or_default(), user.full_name()),
    )
}

pub fn event_from_callback(query: &CallbackQuery) -> IncomingEvent {
    let mut event = IncomingEvent::callback(
        chat_id_of(&query.from),
        query.data.clone().unwrap_or_default(),
    )
    .with_user(
        query.from.username.clone().unwrap_or_default(),
        query.from.full_name(),
    );
    event.callback_message_id = query.message.as_ref().map(|message| message.id);
    event
}

async fn deliver(handler: &dyn EventHandler, event: &IncomingEvent) {
    // Failures are logged and reported by the handler middleware.
    let _ = handler.handle(event).await;
}

async fn handle_message(message: Message, handler: Arc<dyn EventHandler>) -> ResponseResult<()> {
    match event_from_message(&message) {
        Some(event) => deliver(handler.as_ref(), &event).await,
        None => log::warn!("Skipping message {:?} without a sender", message.id),
    }
    respond(())
}

/// Acknowledges the press and strips the buttons from the source message.
async fn acknowledge_callback(bot: &Bot, query: &CallbackQuery) {
    if let Err(err) = bot.answer_callback_query(query.id.clone()).await {
        log::error!("Can't answer callback query: {:?}", err);
    }
    if let Some(message) = &query.message {
        if let Err(err) = bot.edit_message_reply_markup(message.chat.id, message.id).await {
            log::error!("Can't remove inline buttons: {:?}", err);
        }
    }
}

async fn handle_callback(
    bot: Bot,
    query: CallbackQuery,
    handler: Arc<dyn EventHandler>,
) -> ResponseResult<()> {
    acknowledge_callback(&bot, &query).await;
    deliver(handler.as_ref(), &event_from_callback(&query)).await;
    respond(())
}

/// Feeds Telegram updates into the handler until the process is interrupted.
pub async fn listen(bot: Bot, handler: Arc<dyn EventHandler>) {
    let tree = dptree::entry()
        .branch(Update::filter_message().endpoint(handle_message))
        .branch(Update::filter_callback_query().endpoint(handle_callback));

    log::info!("Started listening...");
    Dispatcher::builder(bot, tree)
        .dependencies(dptree::deps![handler])
        .default_handler(|update| async move {
            log::warn!("Unhandled update: {:?}", update);
        })
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
}
