//! Choice of the rule handler for one event.
//!
//! Priority, highest first:
//! 1. a pending command consumes the event whatever its text is,
//! 2. a menu button press arms a new pending command,
//! 3. the top-level commands `/start` and `/help`,
//! 4. the unknown command fallback.
//!
//! A pending command therefore swallows a following `/start` or `/help`.

use crate::{
    commands::Command,
    types::{IncomingEvent, PendingCommand, Reply},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    AcceptForm,
    AcceptFormUpdate,
    AcceptQuestion,
    Choose(PendingCommand),
    Start,
    Help,
    Unknown,
}

impl Route {
    pub fn select(pending: Option<PendingCommand>, event: &IncomingEvent) -> Self {
        match pending {
            Some(PendingCommand::AddForm) => return Route::AcceptForm,
            Some(PendingCommand::UpdateForm) => return Route::AcceptFormUpdate,
            Some(PendingCommand::AskQuestion) => return Route::AcceptQuestion,
            None => {}
        }

        if event.is_callback {
            if let Some(command) = PendingCommand::from_callback(&event.text) {
                return Route::Choose(command);
            }
        }

        match Command::from_text(&event.text) {
            Some(Command::Start) => Route::Start,
            Some(Command::Help) => Route::Help,
            None => Route::Unknown,
        }
    }

    /// Handler name, used as error context.
    pub fn name(self) -> &'static str {
        match self {
            Route::AcceptForm => "accept_form",
            Route::AcceptFormUpdate => "accept_form_update",
            Route::AcceptQuestion => "accept_question",
            Route::Choose(PendingCommand::AddForm) => "ask_for_form",
            Route::Choose(PendingCommand::UpdateForm) => "ask_for_form_update",
            Route::Choose(PendingCommand::AskQuestion) => "ask_for_question",
            Route::Start => "show_start_info",
            Route::Help => "show_help",
            Route::Unknown => "unknown_command",
        }
    }

    /// Command armed for the next turn. Armed before the prompt goes out.
    pub fn arms(self) -> Option<PendingCommand> {
        match self {
            Route::Choose(command) => Some(command),
            _ => None,
        }
    }

    pub fn reply(self) -> Reply {
        match self {
            Route::Start => Reply::Menu,
            _ => Reply::Message,
        }
    }
}
