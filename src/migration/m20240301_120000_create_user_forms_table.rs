use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserForms::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserForms::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(UserForms::ChatId).big_integer().not_null())
                    .col(ColumnDef::new(UserForms::UserName).string().not_null())
                    .col(ColumnDef::new(UserForms::Form).text().not_null())
                    .col(ColumnDef::new(UserForms::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(UserForms::UpdatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_user_forms_chat_id")
                    .table(UserForms::Table)
                    .col(UserForms::ChatId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserForms::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum UserForms {
    Table,
    Id,
    ChatId,
    UserName,
    Form,
    CreatedAt,
    UpdatedAt,
}
