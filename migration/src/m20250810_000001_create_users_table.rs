use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Enum type for the preferred UI language
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DO $$
                BEGIN
                    IF NOT EXISTS (SELECT 1 FROM pg_type WHERE typname = 'user_language') THEN
                        CREATE TYPE user_language AS ENUM ('en', 'hi', 'kn', 'ta', 'te', 'ml');
                    END IF;
                END$$;
                "#,
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Users::Id).uuid().not_null().primary_key())
                    // National ID number, exactly 12 digits
                    .col(
                        ColumnDef::new(Users::IdNumber)
                            .string_len(12)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Users::MobileNumber)
                            .string_len(10)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Users::PasswordHash)
                            .string_len(255)
                            .not_null(),
                    )
                    // Citizen-facing identifier: 4 ID digits + 8 random chars
                    .col(
                        ColumnDef::new(Users::Uid)
                            .string_len(12)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::Pincode).string_len(6).not_null())
                    .col(ColumnDef::new(Users::Sector).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Users::Language)
                            .custom(Alias::new("user_language"))
                            .not_null()
                            .default(Expr::cust("'en'::user_language")),
                    )
                    .col(
                        ColumnDef::new(Users::IsVerified)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Users::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Users::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // ============================================
        // PERFORMANCE INDEXES
        // ============================================

        // 1. Sector listing (GET /api/users/sector/{sector})
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_users_sector
                ON users (sector);
                "#,
            )
            .await?;

        // 2. Directory-style queries by pincode
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_users_pincode
                ON users (pincode);
                "#,
            )
            .await?;

        // 3. Index on created_at for sorting/pagination
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_users_created_at
                ON users (created_at DESC);
                "#,
            )
            .await?;

        // ============================================
        // TRIGGER FOR updated_at
        // ============================================

        if !cfg!(feature = "no_db_triggers") {
            manager
                .get_connection()
                .execute_unprepared(
                    r#"
                    CREATE OR REPLACE FUNCTION update_updated_at_column()
                    RETURNS TRIGGER AS $$
                    BEGIN
                        NEW.updated_at = CURRENT_TIMESTAMP;
                        RETURN NEW;
                    END;
                    $$ language 'plpgsql';
                    "#,
                )
                .await?;

            manager
                .get_connection()
                .execute_unprepared(
                    r#"
                    CREATE TRIGGER update_users_updated_at
                    BEFORE UPDATE ON users
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
            .execute_unprepared("DROP TRIGGER IF EXISTS update_users_updated_at ON users")
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_users_sector;
                DROP INDEX IF EXISTS idx_users_pincode;
                DROP INDEX IF EXISTS idx_users_created_at;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;

        manager
            .get_connection()
            .execute_unprepared("DROP TYPE IF EXISTS user_language")
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    IdNumber,
    MobileNumber,
    PasswordHash,
    Uid,
    Pincode,
    Sector,
    Language,
    IsVerified,
    CreatedAt,
    UpdatedAt,
}
