use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LabelRoles::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(LabelRoles::OrgId).string().not_null())
                    .col(ColumnDef::new(LabelRoles::LabelId).string().not_null())
                    .col(ColumnDef::new(LabelRoles::UserId).string().not_null())
                    .primary_key(
                        Index::create()
                            .col(LabelRoles::OrgId)
                            .col(LabelRoles::LabelId)
                            .col(LabelRoles::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(LabelRoles::Table, LabelRoles::OrgId)
                            .to(Organizations::Table, Organizations::RefId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(LabelRoles::Table, LabelRoles::UserId)
                            .to(Users::Table, Users::RefId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LabelRoles::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum LabelRoles {
    Table,
    OrgId,
    LabelId,
    UserId,
}

#[derive(Iden)]
enum Users {
    Table,
    RefId,
}

#[derive(Iden)]
enum Organizations {
    Table,
    RefId,
}
