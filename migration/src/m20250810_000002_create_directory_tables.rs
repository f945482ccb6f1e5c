//! # Directory Tables Migration
//!
//! `pincodes` maps each six-digit postal code to exactly one sector, together
//! with its human-readable area name and the list of service pools available
//! there. `sectors` is the aggregate view the seeder derives from the pincode
//! rows: member codes plus the de-duplicated union of their pools.
//!
//! Both tables are wiped and re-filled by the directory seeder, so the lists
//! live in JSONB columns rather than join tables.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pincodes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Pincodes::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(Pincodes::Code)
                            .string_len(6)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Pincodes::Sector).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Pincodes::AreaName)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Pincodes::Pools)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(Pincodes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Pincodes::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Sectors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Sectors::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(Sectors::Name)
                            .string_len(100)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Sectors::Pincodes)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(Sectors::Pools)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(ColumnDef::new(Sectors::Description).string_len(255))
                    .col(
                        ColumnDef::new(Sectors::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Sectors::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Sector-scoped pincode listing
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_pincodes_sector
                ON pincodes (sector);
                "#,
            )
            .await?;

        if !cfg!(feature = "no_db_triggers") {
            manager
                .get_connection()
                .execute_unprepared(
                    r#"
                    CREATE TRIGGER update_pincodes_updated_at
                    BEFORE UPDATE ON pincodes
                    FOR EACH ROW
                    EXECUTE FUNCTION update_updated_at_column();
                    "#,
                )
                .await?;

            manager
                .get_connection()
                .execute_unprepared(
                    r#"
                    CREATE TRIGGER update_sectors_updated_at
                    BEFORE UPDATE ON sectors
                    FOR EACH ROW
                    EXECUTE FUNCTION update_updated_at_column();
                    "#,
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP TRIGGER IF EXISTS update_pincodes_updated_at ON pincodes;
                DROP TRIGGER IF EXISTS update_sectors_updated_at ON sectors;
                DROP INDEX IF EXISTS idx_pincodes_sector;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Sectors::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Pincodes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Pincodes {
    Table,
    Id,
    Code,
    Sector,
    AreaName,
    Pools,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Sectors {
    Table,
    Id,
    Name,
    Pincodes,
    Pools,
    Description,
    CreatedAt,
    UpdatedAt,
}
