//! The SQLite-backed store.
//!
//! `rusqlite` is synchronous, so every operation runs the connection work
//! on the blocking thread pool. Counter increments are single `UPDATE ...
//! SET x = x + 1` statements, which gives the at-least-once atomic
//! increment the boundary promises.

use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension};

use formforge_core::{FormForgeError, FormForgeResult};

use crate::records::{validate_form_name, FormRecord, FormStats, SubmissionRecord};
use crate::FormStore;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS forms (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    owner_id    TEXT NOT NULL,
    name        TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    content     TEXT NOT NULL DEFAULT '[]',
    published   INTEGER NOT NULL DEFAULT 0,
    share_url   TEXT NOT NULL UNIQUE,
    visits      INTEGER NOT NULL DEFAULT 0,
    submissions INTEGER NOT NULL DEFAULT 0,
    created_at  TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_forms_owner ON forms(owner_id);

CREATE TABLE IF NOT EXISTS form_submissions (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    form_id    INTEGER NOT NULL REFERENCES forms(id),
    content    TEXT NOT NULL,
    created_at TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_submissions_form ON form_submissions(form_id);
";

const FORM_COLUMNS: &str =
    "id, owner_id, name, description, content, published, share_url, visits, submissions, created_at";

/// A [`FormStore`] backed by a SQLite database file.
pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
}

fn db(e: rusqlite::Error) -> FormForgeError {
    FormForgeError::DatabaseError(e.to_string())
}

fn parse_timestamp(raw: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
        })
}

fn row_to_form(row: &rusqlite::Row<'_>) -> rusqlite::Result<FormRecord> {
    Ok(FormRecord {
        id: row.get(0)?,
        owner_id: row.get(1)?,
        name: row.get(2)?,
        description: row.get(3)?,
        content: row.get(4)?,
        published: row.get::<_, i64>(5)? != 0,
        share_url: row.get(6)?,
        visits: row.get(7)?,
        submissions: row.get(8)?,
        created_at: parse_timestamp(&row.get::<_, String>(9)?)?,
    })
}

fn row_to_submission(row: &rusqlite::Row<'_>) -> rusqlite::Result<SubmissionRecord> {
    Ok(SubmissionRecord {
        id: row.get(0)?,
        form_id: row.get(1)?,
        content: row.get(2)?,
        created_at: parse_timestamp(&row.get::<_, String>(3)?)?,
    })
}

impl SqliteStore {
    /// Opens (creating if needed) a database file and ensures the schema.
    pub fn open(path: impl AsRef<Path>) -> FormForgeResult<Self> {
        Self::from_connection(Connection::open(path).map_err(db)?)
    }

    /// Opens a private in-memory database. Each call gets a fresh one.
    pub fn open_in_memory() -> FormForgeResult<Self> {
        Self::from_connection(Connection::open_in_memory().map_err(db)?)
    }

    fn from_connection(conn: Connection) -> FormForgeResult<Self> {
        conn.execute_batch(SCHEMA).map_err(db)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Runs a closure against the connection on the blocking pool.
    async fn with_conn<T, F>(&self, f: F) -> FormForgeResult<T>
    where
        F: FnOnce(&mut Connection) -> FormForgeResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let mut guard = conn.lock().map_err(|_| {
                FormForgeError::DatabaseError("connection lock poisoned".to_string())
            })?;
            f(&mut guard)
        })
        .await
        .map_err(|e| FormForgeError::DatabaseError(e.to_string()))?
    }
}

#[async_trait]
impl FormStore for SqliteStore {
    async fn create_form(
        &self,
        owner_id: &str,
        name: &str,
        description: &str,
    ) -> FormForgeResult<FormRecord> {
        validate_form_name(name)?;
        let owner_id = owner_id.to_string();
        let name = name.to_string();
        let description = description.to_string();
        self.with_conn(move |conn| {
            let share_url = uuid::Uuid::new_v4().to_string();
            let created_at = Utc::now();
            conn.execute(
                "INSERT INTO forms (owner_id, name, description, content, published, share_url, visits, submissions, created_at)
                 VALUES (?1, ?2, ?3, '[]', 0, ?4, 0, 0, ?5)",
                rusqlite::params![owner_id, name, description, share_url, created_at.to_rfc3339()],
            )
            .map_err(db)?;
            let id = conn.last_insert_rowid();
            tracing::debug!(form_id = id, owner = %owner_id, "created form");
            Ok(FormRecord {
                id,
                owner_id,
                name,
                description,
                content: "[]".to_string(),
                published: false,
                share_url,
                visits: 0,
                submissions: 0,
                created_at,
            })
        })
        .await
    }

    async fn list_forms(&self, owner_id: &str) -> FormForgeResult<Vec<FormRecord>> {
        let owner_id = owner_id.to_string();
        self.with_conn(move |conn| {
            let mut stmt = conn
                .prepare(&format!(
                    "SELECT {FORM_COLUMNS} FROM forms WHERE owner_id = ?1
                     ORDER BY created_at DESC, id DESC"
                ))
                .map_err(db)?;
            let forms = stmt
                .query_map([&owner_id], row_to_form)
                .map_err(db)?
                .collect::<rusqlite::Result<Vec<_>>>()
                .map_err(db)?;
            Ok(forms)
        })
        .await
    }

    async fn get_form(&self, owner_id: &str, form_id: i64) -> FormForgeResult<FormRecord> {
        let owner_id = owner_id.to_string();
        self.with_conn(move |conn| {
            conn.query_row(
                &format!("SELECT {FORM_COLUMNS} FROM forms WHERE id = ?1 AND owner_id = ?2"),
                rusqlite::params![form_id, owner_id],
                row_to_form,
            )
            .optional()
            .map_err(db)?
            .ok_or_else(|| FormForgeError::NotFound(format!("form {form_id}")))
        })
        .await
    }

    async fn update_content(
        &self,
        owner_id: &str,
        form_id: i64,
        content: &str,
    ) -> FormForgeResult<()> {
        let owner_id = owner_id.to_string();
        let content = content.to_string();
        self.with_conn(move |conn| {
            let published: Option<i64> = conn
                .query_row(
                    "SELECT published FROM forms WHERE id = ?1 AND owner_id = ?2",
                    rusqlite::params![form_id, owner_id],
                    |row| row.get(0),
                )
                .optional()
                .map_err(db)?;
            match published {
                None => Err(FormForgeError::NotFound(format!("form {form_id}"))),
                Some(p) if p != 0 => Err(FormForgeError::PublishedImmutable),
                Some(_) => {
                    conn.execute(
                        "UPDATE forms SET content = ?1 WHERE id = ?2 AND owner_id = ?3",
                        rusqlite::params![content, form_id, owner_id],
                    )
                    .map_err(db)?;
                    Ok(())
                }
            }
        })
        .await
    }

    async fn publish(&self, owner_id: &str, form_id: i64) -> FormForgeResult<()> {
        let owner_id = owner_id.to_string();
        self.with_conn(move |conn| {
            let changed = conn
                .execute(
                    "UPDATE forms SET published = 1 WHERE id = ?1 AND owner_id = ?2",
                    rusqlite::params![form_id, owner_id],
                )
                .map_err(db)?;
            if changed == 0 {
                return Err(FormForgeError::NotFound(format!("form {form_id}")));
            }
            Ok(())
        })
        .await
    }

    async fn content_by_share_url(&self, share_url: &str) -> FormForgeResult<String> {
        let share_url = share_url.to_string();
        self.with_conn(move |conn| {
            let changed = conn
                .execute(
                    "UPDATE forms SET visits = visits + 1 WHERE share_url = ?1",
                    [&share_url],
                )
                .map_err(db)?;
            if changed == 0 {
                return Err(FormForgeError::NotFound("form for share url".to_string()));
            }
            conn.query_row(
                "SELECT content FROM forms WHERE share_url = ?1",
                [&share_url],
                |row| row.get(0),
            )
            .map_err(db)
        })
        .await
    }

    async fn published_content(&self, share_url: &str) -> FormForgeResult<String> {
        let share_url = share_url.to_string();
        self.with_conn(move |conn| {
            conn.query_row(
                "SELECT content FROM forms WHERE share_url = ?1 AND published = 1",
                [&share_url],
                |row| row.get(0),
            )
            .optional()
            .map_err(db)?
            .ok_or_else(|| {
                FormForgeError::NotFound("published form for share url".to_string())
            })
        })
        .await
    }

    async fn record_submission(&self, share_url: &str, content: &str) -> FormForgeResult<()> {
        let share_url = share_url.to_string();
        let content = content.to_string();
        self.with_conn(move |conn| {
            let tx = conn.transaction().map_err(db)?;
            let form_id: Option<i64> = tx
                .query_row(
                    "SELECT id FROM forms WHERE share_url = ?1 AND published = 1",
                    [&share_url],
                    |row| row.get(0),
                )
                .optional()
                .map_err(db)?;
            let Some(form_id) = form_id else {
                return Err(FormForgeError::NotFound(
                    "published form for share url".to_string(),
                ));
            };
            tx.execute(
                "UPDATE forms SET submissions = submissions + 1 WHERE id = ?1",
                [form_id],
            )
            .map_err(db)?;
            tx.execute(
                "INSERT INTO form_submissions (form_id, content, created_at) VALUES (?1, ?2, ?3)",
                rusqlite::params![form_id, content, Utc::now().to_rfc3339()],
            )
            .map_err(db)?;
            tx.commit().map_err(db)
        })
        .await
    }

    async fn form_with_submissions(
        &self,
        owner_id: &str,
        form_id: i64,
    ) -> FormForgeResult<(FormRecord, Vec<SubmissionRecord>)> {
        let owner_id = owner_id.to_string();
        self.with_conn(move |conn| {
            let form = conn
                .query_row(
                    &format!("SELECT {FORM_COLUMNS} FROM forms WHERE id = ?1 AND owner_id = ?2"),
                    rusqlite::params![form_id, owner_id],
                    row_to_form,
                )
                .optional()
                .map_err(db)?
                .ok_or_else(|| FormForgeError::NotFound(format!("form {form_id}")))?;
            let mut stmt = conn
                .prepare(
                    "SELECT id, form_id, content, created_at FROM form_submissions
                     WHERE form_id = ?1 ORDER BY id ASC",
                )
                .map_err(db)?;
            let submissions = stmt
                .query_map([form_id], row_to_submission)
                .map_err(db)?
                .collect::<rusqlite::Result<Vec<_>>>()
                .map_err(db)?;
            Ok((form, submissions))
        })
        .await
    }

    async fn stats(&self, owner_id: &str) -> FormForgeResult<FormStats> {
        let owner_id = owner_id.to_string();
        self.with_conn(move |conn| {
            let (visits, submissions) = conn
                .query_row(
                    "SELECT COALESCE(SUM(visits), 0), COALESCE(SUM(submissions), 0)
                     FROM forms WHERE owner_id = ?1",
                    [&owner_id],
                    |row| Ok((row.get::<_, i64>(0)?, row.get::<_, i64>(1)?)),
                )
                .map_err(db)?;
            Ok(FormStats::from_totals(visits, submissions))
        })
        .await
    }
}
