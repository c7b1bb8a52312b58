use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PortfolioContent::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PortfolioContent::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PortfolioContent::Key)
                            .string_len(191)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(PortfolioContent::Type).string_len(50).not_null())
                    .col(ColumnDef::new(PortfolioContent::Category).string_len(100))
                    .col(ColumnDef::new(PortfolioContent::TitleEn).string_len(255))
                    .col(ColumnDef::new(PortfolioContent::TitleAr).string_len(255))
                    .col(ColumnDef::new(PortfolioContent::SubtitleEn).string_len(255))
                    .col(ColumnDef::new(PortfolioContent::SubtitleAr).string_len(255))
                    .col(ColumnDef::new(PortfolioContent::DescriptionEn).text())
                    .col(ColumnDef::new(PortfolioContent::DescriptionAr).text())
                    .col(ColumnDef::new(PortfolioContent::ContentEn).text())
                    .col(ColumnDef::new(PortfolioContent::ContentAr).text())
                    .col(ColumnDef::new(PortfolioContent::MetadataEn).json_binary())
                    .col(ColumnDef::new(PortfolioContent::MetadataAr).json_binary())
                    .col(
                        ColumnDef::new(PortfolioContent::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(PortfolioContent::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(PortfolioContent::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(PortfolioContent::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_portfolio_content_active_sort
                ON portfolio_content (is_active, sort_order);

                CREATE INDEX IF NOT EXISTS idx_portfolio_content_type_active
                ON portfolio_content (type, is_active);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_portfolio_content_updated_at
                BEFORE UPDATE ON portfolio_content
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                "DROP TRIGGER IF EXISTS update_portfolio_content_updated_at ON portfolio_content",
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PortfolioContent::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PortfolioContent {
    Table,
    Id,
    Key,
    Type,
    Category,
    TitleEn,
    TitleAr,
    SubtitleEn,
    SubtitleAr,
    DescriptionEn,
    DescriptionAr,
    ContentEn,
    ContentAr,
    MetadataEn,
    MetadataAr,
    IsActive,
    SortOrder,
    CreatedAt,
    UpdatedAt,
}
