use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Statistics::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Statistics::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Statistics::Key)
                            .string_len(100)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Statistics::Type)
                            .string_len(20)
                            .not_null()
                            .default("number"),
                    )
                    .col(
                        ColumnDef::new(Statistics::Value)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Statistics::LabelEn).string_len(255).not_null())
                    .col(ColumnDef::new(Statistics::LabelAr).string_len(255))
                    .col(ColumnDef::new(Statistics::DescriptionEn).text())
                    .col(ColumnDef::new(Statistics::DescriptionAr).text())
                    .col(ColumnDef::new(Statistics::Prefix).string_len(20))
                    .col(ColumnDef::new(Statistics::Suffix).string_len(20))
                    .col(ColumnDef::new(Statistics::Icon).string_len(50))
                    .col(ColumnDef::new(Statistics::Color).string_len(20))
                    .col(ColumnDef::new(Statistics::Metadata).json_binary())
                    .col(
                        ColumnDef::new(Statistics::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Statistics::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Statistics::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Statistics::UpdatedAt)
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
                CREATE INDEX IF NOT EXISTS idx_statistics_active_sort
                ON statistics (is_active, sort_order);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_statistics_updated_at
                BEFORE UPDATE ON statistics
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
            .execute_unprepared("DROP TRIGGER IF EXISTS update_statistics_updated_at ON statistics")
            .await?;

        manager
            .drop_table(Table::drop().table(Statistics::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Statistics {
    Table,
    Id,
    Key,
    Type,
    Value,
    LabelEn,
    LabelAr,
    DescriptionEn,
    DescriptionAr,
    Prefix,
    Suffix,
    Icon,
    Color,
    Metadata,
    IsActive,
    SortOrder,
    CreatedAt,
    UpdatedAt,
}
