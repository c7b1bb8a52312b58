use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Skills::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Skills::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Skills::Slug)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Skills::Category).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Skills::ProficiencyLevel)
                            .integer()
                            .not_null()
                            .default(0)
                            .check(Expr::col(Skills::ProficiencyLevel).between(0, 100)),
                    )
                    .col(
                        ColumnDef::new(Skills::YearsExperience)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Skills::NameEn).string_len(255).not_null())
                    .col(ColumnDef::new(Skills::NameAr).string_len(255))
                    .col(ColumnDef::new(Skills::DescriptionEn).text())
                    .col(ColumnDef::new(Skills::DescriptionAr).text())
                    .col(ColumnDef::new(Skills::KeywordsEn).json_binary())
                    .col(ColumnDef::new(Skills::KeywordsAr).json_binary())
                    .col(ColumnDef::new(Skills::CertificationsEn).json_binary())
                    .col(ColumnDef::new(Skills::CertificationsAr).json_binary())
                    .col(ColumnDef::new(Skills::Icon).string_len(50))
                    .col(ColumnDef::new(Skills::Color).string_len(20))
                    .col(
                        ColumnDef::new(Skills::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Skills::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Skills::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Skills::UpdatedAt)
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
                CREATE INDEX IF NOT EXISTS idx_skills_active_sort
                ON skills (is_active, sort_order);

                CREATE INDEX IF NOT EXISTS idx_skills_category
                ON skills (category);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_skills_updated_at
                BEFORE UPDATE ON skills
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
            .execute_unprepared("DROP TRIGGER IF EXISTS update_skills_updated_at ON skills")
            .await?;

        manager
            .drop_table(Table::drop().table(Skills::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Skills {
    Table,
    Id,
    Slug,
    Category,
    ProficiencyLevel,
    YearsExperience,
    NameEn,
    NameAr,
    DescriptionEn,
    DescriptionAr,
    KeywordsEn,
    KeywordsAr,
    CertificationsEn,
    CertificationsAr,
    Icon,
    Color,
    IsActive,
    SortOrder,
    CreatedAt,
    UpdatedAt,
}
