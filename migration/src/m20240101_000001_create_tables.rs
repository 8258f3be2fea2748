use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Upper bound for name, email and password columns.
const IDENTITY_FIELD_MAX_LEN: u32 = 255;

fn bounded(column: &str) -> String {
    format!("CHECK (length({column}) <= {IDENTITY_FIELD_MAX_LEN})")
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create owners table
        manager
            .create_table(
                Table::create()
                    .table(Owner::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Owner::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Owner::FirstName)
                            .string_len(IDENTITY_FIELD_MAX_LEN)
                            .not_null()
                            .extra(bounded("first_name")),
                    )
                    .col(
                        ColumnDef::new(Owner::LastName)
                            .string_len(IDENTITY_FIELD_MAX_LEN)
                            .not_null()
                            .extra(bounded("last_name")),
                    )
                    .col(
                        ColumnDef::new(Owner::Email)
                            .string_len(IDENTITY_FIELD_MAX_LEN)
                            .not_null()
                            .extra(bounded("email")),
                    )
                    .col(
                        ColumnDef::new(Owner::Password)
                            .string_len(IDENTITY_FIELD_MAX_LEN)
                            .not_null()
                            .extra(bounded("password")),
                    )
                    .col(
                        ColumnDef::new(Owner::King)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Owner::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Owner::UpdatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        // Create artists table. `owner_id` is nullable: an artist may stand alone.
        manager
            .create_table(
                Table::create()
                    .table(Artist::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Artist::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Artist::FirstName)
                            .string_len(IDENTITY_FIELD_MAX_LEN)
                            .not_null()
                            .extra(bounded("first_name")),
                    )
                    .col(
                        ColumnDef::new(Artist::LastName)
                            .string_len(IDENTITY_FIELD_MAX_LEN)
                            .not_null()
                            .extra(bounded("last_name")),
                    )
                    .col(
                        ColumnDef::new(Artist::Email)
                            .string_len(IDENTITY_FIELD_MAX_LEN)
                            .not_null()
                            .extra(bounded("email")),
                    )
                    .col(
                        ColumnDef::new(Artist::Password)
                            .string_len(IDENTITY_FIELD_MAX_LEN)
                            .not_null()
                            .extra(bounded("password")),
                    )
                    .col(
                        ColumnDef::new(Artist::AdminArtist)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Artist::OwnerId).integer())
                    .col(ColumnDef::new(Artist::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Artist::UpdatedAt).timestamp().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_artists_owner_id")
                            .from(Artist::Table, Artist::OwnerId)
                            .to(Owner::Table, Owner::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Artist::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Owner::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Owner {
    #[sea_orm(iden = "owners")]
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    Password,
    King,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub(crate) enum Artist {
    #[sea_orm(iden = "artists")]
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    Password,
    AdminArtist,
    OwnerId,
    CreatedAt,
    UpdatedAt,
}
