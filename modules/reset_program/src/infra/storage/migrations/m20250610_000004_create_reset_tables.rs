use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ResetPlans::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ResetPlans::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ResetPlans::UserId)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(ResetPlans::StartDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ResetPlans::Streak).integer().not_null())
                    .col(ColumnDef::new(ResetPlans::LastCompletedDate).date())
                    .col(
                        ColumnDef::new(ResetPlans::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ResetCompletedTasks::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(ResetCompletedTasks::PlanId).uuid().not_null())
                    .col(
                        ColumnDef::new(ResetCompletedTasks::TaskId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ResetCompletedTasks::CompletedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(ResetCompletedTasks::PlanId)
                            .col(ResetCompletedTasks::TaskId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ResetReflections::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ResetReflections::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ResetReflections::PlanId).uuid().not_null())
                    .col(ColumnDef::new(ResetReflections::Week).integer().not_null())
                    .col(ColumnDef::new(ResetReflections::Wins).text().not_null())
                    .col(
                        ColumnDef::new(ResetReflections::Challenges)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ResetReflections::NextSteps).text().not_null())
                    .col(
                        ColumnDef::new(ResetReflections::CompletedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reset_reflections_plan_id")
                    .table(ResetReflections::Table)
                    .col(ResetReflections::PlanId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ResetReflections::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ResetCompletedTasks::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ResetPlans::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ResetPlans {
    Table,
    Id,
    UserId,
    StartDate,
    Streak,
    LastCompletedDate,
    CreatedAt,
}

#[derive(DeriveIden)]
enum ResetCompletedTasks {
    Table,
    PlanId,
    TaskId,
    CompletedAt,
}

#[derive(DeriveIden)]
enum ResetReflections {
    Table,
    Id,
    PlanId,
    Week,
    Wins,
    Challenges,
    NextSteps,
    CompletedAt,
}
