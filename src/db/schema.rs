//! DDL bootstrap for the catalog tables.
//!
//! The server runs against a pre-provisioned Postgres in production but can
//! also bring up its own schema, which is what the integration tests rely on
//! with `sqlite::memory:`. Only the
//! primary-key and timestamp clauses differ per backend.

use sea_orm::{ConnectionTrait, DatabaseBackend, DbErr};

fn pk_clause(backend: DatabaseBackend) -> &'static str {
    match backend {
        DatabaseBackend::Sqlite => "INTEGER PRIMARY KEY AUTOINCREMENT",
        _ => "BIGSERIAL PRIMARY KEY",
    }
}

fn ts_clause(backend: DatabaseBackend) -> &'static str {
    match backend {
        DatabaseBackend::Sqlite => "TIMESTAMP",
        _ => "TIMESTAMPTZ",
    }
}

/// Creates every table the catalog needs, if it does not exist yet.
pub async fn init_schema<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    let pk = pk_clause(db.get_database_backend());
    let ts = ts_clause(db.get_database_backend());

    let statements = [
        format!(
            r#"CREATE TABLE IF NOT EXISTS agents (
                id {pk},
                name TEXT NOT NULL,
                hostname TEXT,
                ip_address TEXT,
                agent_version TEXT,
                status TEXT
            )"#
        ),
        format!(
            r#"CREATE TABLE IF NOT EXISTS http_monitors (
                id {pk},
                name TEXT NOT NULL,
                method TEXT NOT NULL,
                monitor_type TEXT NOT NULL,
                url TEXT,
                interval_seconds INTEGER NOT NULL,
                timeout_seconds INTEGER NOT NULL,
                retry_count INTEGER NOT NULL,
                retry_delay_seconds INTEGER NOT NULL
            )"#
        ),
        format!(
            r#"CREATE TABLE IF NOT EXISTS agent_monitors (
                id {pk},
                active BOOLEAN NOT NULL,
                created_by TEXT NOT NULL,
                created_date {ts} NOT NULL,
                last_modified_by TEXT NOT NULL,
                last_modified_date {ts} NOT NULL,
                agent_id BIGINT NOT NULL REFERENCES agents(id) ON DELETE CASCADE,
                monitor_id BIGINT NOT NULL REFERENCES http_monitors(id) ON DELETE CASCADE
            )"#
        ),
        format!(
            r#"CREATE TABLE IF NOT EXISTS instances (
                id {pk},
                name TEXT NOT NULL,
                hostname TEXT NOT NULL,
                description TEXT,
                instance_type TEXT NOT NULL,
                monitoring_type TEXT NOT NULL
            )"#
        ),
        format!(
            r#"CREATE TABLE IF NOT EXISTS monitored_services (
                id {pk},
                name TEXT NOT NULL,
                description TEXT,
                service_type TEXT NOT NULL,
                environment TEXT NOT NULL,
                interval_seconds INTEGER NOT NULL,
                timeout_ms INTEGER NOT NULL,
                retry_count INTEGER NOT NULL,
                is_active BOOLEAN
            )"#
        ),
        format!(
            r#"CREATE TABLE IF NOT EXISTS service_instances (
                id {pk},
                port INTEGER NOT NULL,
                is_active BOOLEAN,
                created_at {ts} NOT NULL,
                updated_at {ts} NOT NULL,
                instance_id BIGINT NOT NULL REFERENCES instances(id) ON DELETE CASCADE,
                monitored_service_id BIGINT NOT NULL REFERENCES monitored_services(id) ON DELETE CASCADE
            )"#
        ),
        format!(
            r#"CREATE TABLE IF NOT EXISTS status_pages (
                id {pk},
                name TEXT NOT NULL,
                slug TEXT NOT NULL UNIQUE,
                description TEXT,
                is_public BOOLEAN NOT NULL,
                is_active BOOLEAN,
                created_at {ts} NOT NULL,
                updated_at {ts} NOT NULL
            )"#
        ),
        format!(
            r#"CREATE TABLE IF NOT EXISTS status_page_items (
                id {pk},
                item_type TEXT NOT NULL,
                item_id BIGINT NOT NULL,
                display_order INTEGER,
                created_at {ts} NOT NULL,
                status_page_id BIGINT NOT NULL REFERENCES status_pages(id) ON DELETE CASCADE
            )"#
        ),
    ];

    for statement in &statements {
        db.execute_unprepared(statement).await?;
    }

    Ok(())
}
