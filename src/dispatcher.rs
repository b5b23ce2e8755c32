use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    commands::{forms, help, questions, start},
    error::{BotError, DispatchError},
    middleware::EventHandler,
    routing::Route,
    sender::MessageSender,
    state::ConversationStateStore,
    storage::FormStorage,
    texts::Texts,
    types::{IncomingEvent, PendingCommand, Reply},
};

/// Routes each event to exactly one rule handler and keeps the users' pending commands.
pub struct Dispatcher {
    sender: Arc<dyn MessageSender>,
    storage: Option<Arc<dyn FormStorage>>,
    texts: Texts,
    state: ConversationStateStore,
}

impl Dispatcher {
    pub fn new(sender: Arc<dyn MessageSender>, texts: Texts) -> Self {
        Self {
            sender,
            storage: None,
            texts,
            state: ConversationStateStore::new(),
        }
    }

    pub fn with_storage(mut self, storage: Arc<dyn FormStorage>) -> Self {
        self.storage = Some(storage);
        self
    }

    pub fn state(&self) -> &ConversationStateStore {
        &self.state
    }

    pub async fn dispatch(&self, event: &IncomingEvent) -> Result<Reply, DispatchError> {
        // Held until the handler finishes, so one user's events never interleave.
        let mut slot = self.state.lock(event.user_id).await;
        let pending = slot.take();
        let route = Route::select(pending, event);
        log::debug!(
            "[{}] pending {:?}, routed to {}",
            event.user_id.0,
            pending,
            route.name()
        );

        // Armed even if the prompt below fails to send; there is no rollback.
        if let Some(command) = route.arms() {
            slot.arm(command);
        }

        self.run(route, event)
            .await
            .map_err(|source| DispatchError::new(route.name(), source))?;

        Ok(route.reply())
    }

    async fn run(&self, route: Route, event: &IncomingEvent) -> Result<(), BotError> {
        let sender = self.sender.as_ref();
        let storage = self.storage.as_deref();
        let texts = &self.texts;
        let chat_id = event.user_id;

        match route {
            Route::AcceptForm => forms::accept_form(sender, storage, texts, event).await,
            Route::AcceptFormUpdate => forms::accept_form_update(sender, storage, texts, event).await,
            Route::AcceptQuestion => questions::accept_question(sender, texts, chat_id).await,
            Route::Choose(PendingCommand::AddForm) => forms::ask_for_form(sender, texts, chat_id).await,
            Route::Choose(PendingCommand::UpdateForm) => {
                forms::ask_for_form_update(sender, texts, chat_id).await
            }
            Route::Choose(PendingCommand::AskQuestion) => {
                questions::ask_for_question(sender, texts, chat_id).await
            }
            Route::Start => start::show_start_info(sender, texts, chat_id, event.addressee()).await,
            Route::Help => help::show_help(sender, texts, chat_id).await,
            Route::Unknown => help::unknown_command(sender, texts, chat_id).await,
        }
    }
}

#[async_trait]
impl EventHandler for Dispatcher {
    async fn handle(&self, event: &IncomingEvent) -> Result<Reply, DispatchError> {
        self.dispatch(event).await
    }
}
