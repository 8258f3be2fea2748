use sea_orm_migration::prelude::*;

use crate::m20240101_000001_create_tables::Artist;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Content rows are removed together with their artist.
        manager
            .create_table(
                Table::create()
                    .table(ArtistContent::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ArtistContent::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ArtistContent::CoverImage)
                            .string_len(500)
                            .not_null()
                            .extra("CHECK (length(cover_image) <= 500)"),
                    )
                    .col(
                        ColumnDef::new(ArtistContent::ArtistName)
                            .string_len(64)
                            .not_null()
                            .extra("CHECK (length(artist_name) <= 64)"),
                    )
                    .col(
                        ColumnDef::new(ArtistContent::Bio)
                            .string_len(666)
                            .not_null()
                            .extra("CHECK (length(bio) <= 666)"),
                    )
                    .col(ColumnDef::new(ArtistContent::ArtistId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_artist_contents_artist_id")
                            .from(ArtistContent::Table, ArtistContent::ArtistId)
                            .to(Artist::Table, Artist::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_artist_contents_artist_id")
                    .table(ArtistContent::Table)
                    .col(ArtistContent::ArtistId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ArtistContent::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum ArtistContent {
    #[sea_orm(iden = "artist_contents")]
    Table,
    Id,
    CoverImage,
    ArtistName,
    Bio,
    ArtistId,
}
