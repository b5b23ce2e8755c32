use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use sea_orm::{prelude::*, ActiveValue, QueryOrder};
use teloxide::types::ChatId;

use crate::{entity::user_forms, error::BotError};

/// Storage for the forms users send to the bot.
#[async_trait]
pub trait FormStorage: Send + Sync {
    async fn insert_form(&self, user_id: ChatId, user_name: &str, form: &str) -> Result<(), BotError>;

    /// Replaces the user's form text, storing a new record if the user has none.
    async fn update_form(&self, user_id: ChatId, user_name: &str, form: &str) -> Result<(), BotError>;

    /// Forms created at or after `since`, oldest first.
    async fn query_forms(&self, user_id: ChatId, since: NaiveDateTime) -> Result<Vec<String>, BotError>;
}

pub struct SeaOrmFormStorage {
    connection: DatabaseConnection,
}

impl SeaOrmFormStorage {
    pub fn new(connection: DatabaseConnection) -> Self {
        Self { connection }
    }
}

#[async_trait]
impl FormStorage for SeaOrmFormStorage {
    async fn insert_form(&self, user_id: ChatId, user_name: &str, form: &str) -> Result<(), BotError> {
        let now = Utc::now().naive_utc();
        user_forms::Entity::insert(user_forms::ActiveModel {
            chat_id: ActiveValue::Set(user_id.0),
            user_name: ActiveValue::Set(user_name.to_string()),
            form: ActiveValue::Set(form.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_without_returning(&self.connection)
        .await?;

        Ok(())
    }

    async fn update_form(&self, user_id: ChatId, user_name: &str, form: &str) -> Result<(), BotError> {
        let updated = user_forms::Entity::update_many()
            .set(user_forms::ActiveModel {
                user_name: ActiveValue::Set(user_name.to_string()),
                form: ActiveValue::Set(form.to_string()),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .filter(user_forms::Column::ChatId.eq(user_id.0))
            .exec(&self.connection)
            .await?;

        if updated.rows_affected == 0 {
            log::info!("No form stored for {}, inserting a new one", user_id.0);
            return self.insert_form(user_id, user_name, form).await;
        }

        Ok(())
    }

    async fn query_forms(&self, user_id: ChatId, since: NaiveDateTime) -> Result<Vec<String>, BotError> {
        let forms = user_forms::Entity::find()
            .filter(user_forms::Column::ChatId.eq(user_id.0))
            .filter(user_forms::Column::CreatedAt.gte(since))
            .order_by_asc(user_forms::Column::CreatedAt)
            .all(&self.connection)
            .await?;

        Ok(forms.into_iter().map(|x| x.form).collect())
    }
}
