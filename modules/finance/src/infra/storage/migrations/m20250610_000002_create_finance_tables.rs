use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BudgetMonths::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BudgetMonths::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(BudgetMonths::UserId).uuid().not_null())
                    .col(ColumnDef::new(BudgetMonths::Month).integer().not_null())
                    .col(ColumnDef::new(BudgetMonths::Year).integer().not_null())
                    .col(ColumnDef::new(BudgetMonths::Incomes).json().not_null())
                    .col(ColumnDef::new(BudgetMonths::Categories).json().not_null())
                    .col(
                        ColumnDef::new(BudgetMonths::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(BudgetMonths::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // One budget document per owner per calendar month.
        manager
            .create_index(
                Index::create()
                    .name("idx_budget_months_owner_month")
                    .table(BudgetMonths::Table)
                    .col(BudgetMonths::UserId)
                    .col(BudgetMonths::Month)
                    .col(BudgetMonths::Year)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Transactions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Transactions::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Transactions::UserId).uuid().not_null())
                    .col(ColumnDef::new(Transactions::Kind).string().not_null())
                    .col(ColumnDef::new(Transactions::Amount).double().not_null())
                    .col(ColumnDef::new(Transactions::Currency).string().not_null())
                    .col(ColumnDef::new(Transactions::CategoryName).string())
                    .col(
                        ColumnDef::new(Transactions::Date)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Transactions::Note).string())
                    .col(
                        ColumnDef::new(Transactions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_transactions_owner_date")
                    .table(Transactions::Table)
                    .col(Transactions::UserId)
                    .col(Transactions::Date)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(GivingEntries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GivingEntries::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(GivingEntries::UserId).uuid().not_null())
                    .col(ColumnDef::new(GivingEntries::Amount).double().not_null())
                    .col(ColumnDef::new(GivingEntries::Currency).string().not_null())
                    .col(
                        ColumnDef::new(GivingEntries::Date)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(GivingEntries::GivingType).string().not_null())
                    .col(ColumnDef::new(GivingEntries::Note).string())
                    .col(
                        ColumnDef::new(GivingEntries::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_giving_entries_owner_date")
                    .table(GivingEntries::Table)
                    .col(GivingEntries::UserId)
                    .col(GivingEntries::Date)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GivingEntries::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Transactions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(BudgetMonths::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum BudgetMonths {
    Table,
    Id,
    UserId,
    Month,
    Year,
    Incomes,
    Categories,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Transactions {
    Table,
    Id,
    UserId,
    Kind,
    Amount,
    Currency,
    CategoryName,
    Date,
    Note,
    CreatedAt,
}

#[derive(DeriveIden)]
enum GivingEntries {
    Table,
    Id,
    UserId,
    Amount,
    Currency,
    Date,
    GivingType,
    Note,
    CreatedAt,
}
