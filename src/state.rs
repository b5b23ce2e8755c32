//! Per-user conversation state.
//!
//! Each user owns one slot holding at most one [`PendingCommand`]. A slot is
//! guarded by its own async mutex, so events of one user are processed one
//! after another while different users never wait on each other.

use std::sync::Arc;

use dashmap::DashMap;
use teloxide::types::ChatId;
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::types::PendingCommand;

type Slot = Arc<Mutex<Option<PendingCommand>>>;

#[derive(Default)]
pub struct ConversationStateStore {
    slots: DashMap<ChatId, Slot>,
}

/// Exclusive access to one user's pending command until dropped.
pub struct UserSlot {
    guard: OwnedMutexGuard<Option<PendingCommand>>,
}

impl UserSlot {
    /// Reads and clears the pending command.
    pub fn take(&mut self) -> Option<PendingCommand> {
        self.guard.take()
    }

    pub fn arm(&mut self, command: PendingCommand) {
        *self.guard = Some(command);
    }
}

impl ConversationStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, user_id: ChatId) -> Slot {
        let slot = self.slots.entry(user_id).or_default();
        Arc::clone(slot.value())
    }

    pub async fn lock(&self, user_id: ChatId) -> UserSlot {
        UserSlot {
            guard: self.slot(user_id).lock_owned().await,
        }
    }

    /// Consumes the pending command of the user.
    pub async fn get(&self, user_id: ChatId) -> Option<PendingCommand> {
        self.lock(user_id).await.take()
    }

    pub async fn set(&self, user_id: ChatId, command: PendingCommand) {
        self.lock(user_id).await.arm(command);
    }

    /// Reads the pending command without consuming it.
    pub async fn peek(&self, user_id: ChatId) -> Option<PendingCommand> {
        *self.slot(user_id).lock().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn get_clears_the_slot() {
        let store = ConversationStateStore::new();
        store.set(ChatId(1), PendingCommand::AddForm).await;

        assert_eq!(store.get(ChatId(1)).await, Some(PendingCommand::AddForm));
        assert_eq!(store.get(ChatId(1)).await, None);
    }

    #[tokio::test]
    async fn unknown_user_has_nothing_pending() {
        let store = ConversationStateStore::new();
        assert_eq!(store.get(ChatId(42)).await, None);
    }

    #[tokio::test]
    async fn last_write_wins() {
        let store = ConversationStateStore::new();
        store.set(ChatId(1), PendingCommand::AddForm).await;
        assert_eq!(store.get(ChatId(1)).await, Some(PendingCommand::AddForm));

        store.set(ChatId(1), PendingCommand::AskQuestion).await;
        store.set(ChatId(1), PendingCommand::UpdateForm).await;
        assert_eq!(store.get(ChatId(1)).await, Some(PendingCommand::UpdateForm));
    }

    #[tokio::test]
    async fn users_are_isolated() {
        let store = ConversationStateStore::new();
        store.set(ChatId(1), PendingCommand::AskQuestion).await;

        assert_eq!(store.peek(ChatId(2)).await, None);
        assert_eq!(store.peek(ChatId(1)).await, Some(PendingCommand::AskQuestion));
    }

    #[tokio::test]
    async fn peek_does_not_consume() {
        let store = ConversationStateStore::new();
        store.set(ChatId(7), PendingCommand::UpdateForm).await;

        assert_eq!(store.peek(ChatId(7)).await, Some(PendingCommand::UpdateForm));
        assert_eq!(store.get(ChatId(7)).await, Some(PendingCommand::UpdateForm));
    }

    #[tokio::test]
    async fn held_slot_blocks_same_user_only() {
        let store = Arc::new(ConversationStateStore::new());
        let mut held = store.lock(ChatId(1)).await;

        // Another user is not blocked by the held slot.
        store.set(ChatId(2), PendingCommand::AddForm).await;

        let waiter = {
            let store = Arc::clone(&store);
            tokio::spawn(async move { store.get(ChatId(1)).await })
        };
        held.arm(PendingCommand::AskQuestion);
        drop(held);

        assert_eq!(waiter.await.unwrap(), Some(PendingCommand::AskQuestion));
        assert_eq!(store.peek(ChatId(2)).await, Some(PendingCommand::AddForm));
    }
}
