use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PrayerGoals::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PrayerGoals::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PrayerGoals::UserId).uuid().not_null())
                    .col(ColumnDef::new(PrayerGoals::Month).integer().not_null())
                    .col(ColumnDef::new(PrayerGoals::Year).integer().not_null())
                    .col(ColumnDef::new(PrayerGoals::Title).string().not_null())
                    .col(ColumnDef::new(PrayerGoals::Notes).string())
                    .col(ColumnDef::new(PrayerGoals::Completed).boolean().not_null())
                    .col(
                        ColumnDef::new(PrayerGoals::LinkedToFinance)
                            .boolean()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PrayerGoals::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_prayer_goals_owner_month")
                    .table(PrayerGoals::Table)
                    .col(PrayerGoals::UserId)
                    .col(PrayerGoals::Month)
                    .col(PrayerGoals::Year)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PrayerEntries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PrayerEntries::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PrayerEntries::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(PrayerEntries::Date)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(PrayerEntries::Content).text().not_null())
                    .col(
                        ColumnDef::new(PrayerEntries::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_prayer_entries_owner_date")
                    .table(PrayerEntries::Table)
                    .col(PrayerEntries::UserId)
                    .col(PrayerEntries::Date)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PrayerEntries::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PrayerGoals::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PrayerGoals {
    Table,
    Id,
    UserId,
    Month,
    Year,
    Title,
    Notes,
    Completed,
    LinkedToFinance,
    CreatedAt,
}

#[derive(DeriveIden)]
enum PrayerEntries {
    Table,
    Id,
    UserId,
    Date,
    Content,
    CreatedAt,
}
