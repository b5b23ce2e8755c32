use teloxide::types::{ChatId, MessageId};

/// The intent remembered between two turns of one user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PendingCommand {
    AddForm,
    UpdateForm,
    AskQuestion,
}

impl PendingCommand {
    pub const ALL: [PendingCommand; 3] = [
        PendingCommand::AddForm,
        PendingCommand::UpdateForm,
        PendingCommand::AskQuestion,
    ];

    /// Callback payload carried by the menu button for this command.
    pub fn token(self) -> &'static str {
        match self {
            PendingCommand::AddForm => "/add_form",
            PendingCommand::UpdateForm => "/update_form",
            PendingCommand::AskQuestion => "/ask_question",
        }
    }

    /// First command whose token is contained in the callback payload.
    pub fn from_callback(payload: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|command| payload.contains(command.token()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingEvent {
    /// Message text, or the callback payload for button presses.
    pub text: String,
    pub user_id: ChatId,
    pub user_name: String,
    pub display_name: String,
    pub is_callback: bool,
    pub callback_message_id: Option<MessageId>,
}

impl IncomingEvent {
    pub fn message(user_id: ChatId, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            user_id,
            user_name: String::new(),
            display_name: String::new(),
            is_callback: false,
            callback_message_id: None,
        }
    }

    pub fn callback(user_id: ChatId, data: impl Into<String>) -> Self {
        Self {
            is_callback: true,
            ..Self::message(user_id, data)
        }
    }

    pub fn with_user(mut self, user_name: impl Into<String>, display_name: impl Into<String>) -> Self {
        self.user_name = user_name.into();
        self.display_name = display_name.into();
        self
    }

    /// Name used to greet the user: the display name, or the user name when it is empty.
    pub fn addressee(&self) -> &str {
        if self.display_name.is_empty() {
            &self.user_name
        } else {
            &self.display_name
        }
    }
}

/// Kind of the single outbound action performed for an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    Message,
    Menu,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn callback_tokens_are_matched_by_containment() {
        assert_eq!(
            PendingCommand::from_callback("/add_form"),
            Some(PendingCommand::AddForm)
        );
        assert_eq!(
            PendingCommand::from_callback("menu:/update_form"),
            Some(PendingCommand::UpdateForm)
        );
        assert_eq!(
            PendingCommand::from_callback("/ask_question?x=1"),
            Some(PendingCommand::AskQuestion)
        );
        assert_eq!(PendingCommand::from_callback("/start"), None);
        assert_eq!(PendingCommand::from_callback(""), None);
    }

    #[test]
    fn addressee_falls_back_to_user_name() {
        let event = IncomingEvent::message(ChatId(1), "/start").with_user("anna_k", "");
        assert_eq!(event.addressee(), "anna_k");

        let event = IncomingEvent::message(ChatId(1), "/start").with_user("anna_k", "Anna K");
        assert_eq!(event.addressee(), "Anna K");
    }
}
