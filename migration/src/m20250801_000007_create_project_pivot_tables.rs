use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // project_service join table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(ProjectService::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(ProjectService::ProjectId).integer().not_null())
                    .col(ColumnDef::new(ProjectService::ServiceId).integer().not_null())
                    .col(
                        ColumnDef::new(ProjectService::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .col(ProjectService::ProjectId)
                            .col(ProjectService::ServiceId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_service_project_id")
                            .from(ProjectService::Table, ProjectService::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_service_service_id")
                            .from(ProjectService::Table, ProjectService::ServiceId)
                            .to(Services::Table, Services::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // project_skill join table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(ProjectSkill::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(ProjectSkill::ProjectId).integer().not_null())
                    .col(ColumnDef::new(ProjectSkill::SkillId).integer().not_null())
                    .col(
                        ColumnDef::new(ProjectSkill::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .col(ProjectSkill::ProjectId)
                            .col(ProjectSkill::SkillId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_skill_project_id")
                            .from(ProjectSkill::Table, ProjectSkill::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_skill_skill_id")
                            .from(ProjectSkill::Table, ProjectSkill::SkillId)
                            .to(Skills::Table, Skills::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Reverse lookups: projects for a service / skill
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_project_service_service_id
                ON project_service (service_id);

                CREATE INDEX IF NOT EXISTS idx_project_skill_skill_id
                ON project_skill (skill_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProjectSkill::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(ProjectService::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ProjectService {
    Table,
    ProjectId,
    ServiceId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum ProjectSkill {
    Table,
    ProjectId,
    SkillId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Services {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Skills {
    Table,
    Id,
}
