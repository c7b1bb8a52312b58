use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create projects table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Projects::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Projects::Slug)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Projects::Category).string_len(50).not_null())
                    .col(
                        ColumnDef::new(Projects::IsFeatured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Projects::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Projects::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Projects::CompletedAt).date())
                    .col(ColumnDef::new(Projects::TitleEn).string_len(255).not_null())
                    .col(ColumnDef::new(Projects::TitleAr).string_len(255))
                    .col(ColumnDef::new(Projects::DescriptionEn).text().not_null())
                    .col(ColumnDef::new(Projects::DescriptionAr).text())
                    .col(ColumnDef::new(Projects::ContentEn).text())
                    .col(ColumnDef::new(Projects::ContentAr).text())
                    .col(
                        ColumnDef::new(Projects::TechnologiesEn)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(ColumnDef::new(Projects::TechnologiesAr).json_binary())
                    .col(ColumnDef::new(Projects::ChallengesEn).json_binary())
                    .col(ColumnDef::new(Projects::ChallengesAr).json_binary())
                    .col(ColumnDef::new(Projects::SolutionsEn).json_binary())
                    .col(ColumnDef::new(Projects::SolutionsAr).json_binary())
                    .col(ColumnDef::new(Projects::GithubUrl).string_len(500))
                    .col(ColumnDef::new(Projects::LiveUrl).string_len(500))
                    .col(ColumnDef::new(Projects::DemoUrl).string_len(500))
                    .col(
                        ColumnDef::new(Projects::Images)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(ColumnDef::new(Projects::ThumbnailUrl).string_len(500))
                    .col(
                        ColumnDef::new(Projects::Tags)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(Projects::Metadata)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'{}'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(Projects::IsDeleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Projects::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Projects::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_projects_active_sort
                ON projects (is_active, sort_order)
                WHERE is_deleted = false;

                CREATE INDEX IF NOT EXISTS idx_projects_featured_active
                ON projects (is_featured, is_active);

                CREATE INDEX IF NOT EXISTS idx_projects_category
                ON projects (category);
                "#,
            )
            .await?;

        // =====================================================
        // updated_at trigger
        // =====================================================
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_projects_updated_at
                BEFORE UPDATE ON projects
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
            .execute_unprepared("DROP TRIGGER IF EXISTS update_projects_updated_at ON projects")
            .await?;

        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
    Slug,
    Category,
    IsFeatured,
    IsActive,
    SortOrder,
    CompletedAt,
    TitleEn,
    TitleAr,
    DescriptionEn,
    DescriptionAr,
    ContentEn,
    ContentAr,
    TechnologiesEn,
    TechnologiesAr,
    ChallengesEn,
    ChallengesAr,
    SolutionsEn,
    SolutionsAr,
    GithubUrl,
    LiveUrl,
    DemoUrl,
    Images,
    ThumbnailUrl,
    Tags,
    Metadata,
    IsDeleted,
    CreatedAt,
    UpdatedAt,
}
