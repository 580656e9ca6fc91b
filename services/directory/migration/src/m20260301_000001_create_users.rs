use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Users::RefId).string().not_null().unique_key())
                    .col(text_col(Users::Firstname))
                    .col(text_col(Users::Lastname))
                    .col(text_col(Users::Email))
                    .col(text_col(Users::Initials))
                    .col(
                        ColumnDef::new(Users::Global)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(text_col(Users::Password))
                    .col(text_col(Users::Salt))
                    .col(text_col(Users::Reset))
                    .col(
                        ColumnDef::new(Users::Created)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Users::Revised)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Users::Table)
                    .col(Users::Email)
                    .name("idx_users_email")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

fn text_col(col: Users) -> ColumnDef {
    ColumnDef::new(col).string().not_null().default("").to_owned()
}

#[derive(Iden, Clone, Copy)]
enum Users {
    Table,
    Id,
    RefId,
    Firstname,
    Lastname,
    Email,
    Initials,
    Global,
    Password,
    Salt,
    Reset,
    Created,
    Revised,
}
