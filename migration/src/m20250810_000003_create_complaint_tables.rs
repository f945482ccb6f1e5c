//! # Complaint Tables Migration
//!
//! ## Purpose
//! Three tables back the complaint workflow:
//!
//! - `complaints`: one row per ticket, owned by a user. The public handle is
//!   `ticket_id` (`COMP` + year + zero-padded sequence); the UUID stays
//!   internal.
//! - `complaint_images`: attachment metadata, one row per stored file. The
//!   bytes live on disk under the upload directory; `filename` is the
//!   generated on-disk name and is globally unique so it can be used as a
//!   lookup key on its own.
//! - `ticket_counters`: a single row per counter name holding the last
//!   issued sequence value. Ticket numbers are drawn with an
//!   `INSERT ... ON CONFLICT ... DO UPDATE ... RETURNING` upsert, so two
//!   concurrent creations can never read the same value.
//!
//! ## Key Columns Explained
//! - `complaints.status` / `priority` / `category`: Postgres enum types, kept
//!   in sync with the `DeriveActiveEnum` definitions in the entity layer.
//! - `complaint_images.path`: storage-relative path, never an absolute one,
//!   so the upload directory can move between environments.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Enum types for complaints
        // =====================================================
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DO $$
                BEGIN
                    IF NOT EXISTS (SELECT 1 FROM pg_type WHERE typname = 'complaint_category') THEN
                        CREATE TYPE complaint_category AS ENUM
                            ('data_issue', 'verification', 'accessibility', 'service', 'technical', 'other');
                    END IF;
                    IF NOT EXISTS (SELECT 1 FROM pg_type WHERE typname = 'complaint_priority') THEN
                        CREATE TYPE complaint_priority AS ENUM ('low', 'medium', 'high', 'urgent');
                    END IF;
                    IF NOT EXISTS (SELECT 1 FROM pg_type WHERE typname = 'complaint_status') THEN
                        CREATE TYPE complaint_status AS ENUM ('pending', 'in_progress', 'resolved', 'rejected');
                    END IF;
                END$$;
                "#,
            )
            .await?;

        // =====================================================
        // Create complaints table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Complaints::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Complaints::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    // Public ticket handle, assigned once at creation
                    .col(
                        ColumnDef::new(Complaints::TicketId)
                            .string_len(20)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Complaints::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(Complaints::Category)
                            .custom(Alias::new("complaint_category"))
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Complaints::Priority)
                            .custom(Alias::new("complaint_priority"))
                            .not_null()
                            .default(Expr::cust("'medium'::complaint_priority")),
                    )
                    .col(
                        ColumnDef::new(Complaints::Status)
                            .custom(Alias::new("complaint_status"))
                            .not_null()
                            .default(Expr::cust("'pending'::complaint_status")),
                    )
                    .col(ColumnDef::new(Complaints::Title).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Complaints::Description)
                            .string_len(1000)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Complaints::Location).string_len(100))
                    .col(ColumnDef::new(Complaints::AdminNotes).string_len(500))
                    .col(
                        ColumnDef::new(Complaints::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Complaints::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_complaints_user_id")
                            .from(Complaints::Table, Complaints::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Create complaint_images table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(ComplaintImages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ComplaintImages::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(ComplaintImages::ComplaintId)
                            .uuid()
                            .not_null(),
                    )
                    // Generated on-disk name, unique across all complaints
                    .col(
                        ColumnDef::new(ComplaintImages::Filename)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(ComplaintImages::OriginalName)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ComplaintImages::Path)
                            .string_len(512)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ComplaintImages::Size)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ComplaintImages::UploadedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_complaint_images_complaint_id")
                            .from(ComplaintImages::Table, ComplaintImages::ComplaintId)
                            .to(Complaints::Table, Complaints::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Create ticket_counters table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(TicketCounters::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TicketCounters::Id)
                            .string_len(32)
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TicketCounters::LastValue)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // Owner-scoped listing, newest first
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_complaints_user_created
                ON complaints (user_id, created_at DESC);
                "#,
            )
            .await?;

        // Attachment lookups per complaint, in upload order
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_complaint_images_complaint
                ON complaint_images (complaint_id, uploaded_at);
                "#,
            )
            .await?;

        if !cfg!(feature = "no_db_triggers") {
            manager
                .get_connection()
                .execute_unprepared(
                    r#"
                    CREATE TRIGGER update_complaints_updated_at
                    BEFORE UPDATE ON complaints
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
                DROP TRIGGER IF EXISTS update_complaints_updated_at ON complaints;
                DROP INDEX IF EXISTS idx_complaints_user_created;
                DROP INDEX IF EXISTS idx_complaint_images_complaint;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TicketCounters::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(ComplaintImages::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Complaints::Table).to_owned())
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP TYPE IF EXISTS complaint_status;
                DROP TYPE IF EXISTS complaint_priority;
                DROP TYPE IF EXISTS complaint_category;
                "#,
            )
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Complaints {
    Table,
    Id,
    TicketId,
    UserId,
    Category,
    Priority,
    Status,
    Title,
    Description,
    Location,
    AdminNotes,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ComplaintImages {
    Table,
    Id,
    ComplaintId,
    Filename,
    OriginalName,
    Path,
    Size,
    UploadedAt,
}

#[derive(DeriveIden)]
enum TicketCounters {
    Table,
    Id,
    LastValue,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
