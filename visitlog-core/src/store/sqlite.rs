use crate::model::{IgnoreConfig, UserAgentStat, Visit, Visitor};
use crate::store::{StoreError, VisitorStore};
use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension, Row, params};
use std::path::Path;

const MIGRATION: &str = r#"
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS visitor (
    ip          TEXT PRIMARY KEY,
    visits      INTEGER NOT NULL DEFAULT 0 CHECK (visits >= 0),
    ignorables  TEXT NOT NULL DEFAULT '{}',
    created_at  TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS visits (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    ip          TEXT NOT NULL REFERENCES visitor(ip),
    request     TEXT NOT NULL,
    referer     TEXT,
    user_agent  TEXT NOT NULL,
    created_at  TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS visits_ip ON visits(ip);

CREATE TABLE IF NOT EXISTS visitor_agent (
    agent   TEXT PRIMARY KEY,
    count   INTEGER NOT NULL DEFAULT 0
);
"#;

const LINE_SAVEPOINT: &str = "visitlog_line";

/// [`VisitorStore`] backed by a single SQLite connection.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path).map_err(|source| StoreError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(MIGRATION)?;
        Ok(Self { conn })
    }

    /// Raw access for maintenance and test fixtures.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    //-------------------------------------------------------------------------
    // Read side
    //-------------------------------------------------------------------------

    pub fn visitor_total(&self) -> Result<u64, StoreError> {
        count(&self.conn, "SELECT COUNT(*) FROM visitor")
    }

    pub fn visit_total(&self) -> Result<u64, StoreError> {
        count(&self.conn, "SELECT COUNT(*) FROM visits")
    }

    /// Visits for one address in insertion order.
    pub fn visits_for(&self, ip: &str) -> Result<Vec<Visit>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT ip, request, referer, user_agent, created_at
             FROM visits WHERE ip = ?1 ORDER BY id",
        )?;
        let rows = stmt.query_map([ip], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, Option<String>>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
            ))
        })?;

        let mut visits = Vec::new();
        for row in rows {
            let (ip, request, referer, user_agent, created_at) = row?;
            let created_at = DateTime::parse_from_rfc3339(&created_at).map_err(|_| {
                StoreError::Timestamp {
                    ip: ip.clone(),
                    value: created_at.clone(),
                }
            })?;
            visits.push(Visit {
                ip,
                request,
                referer,
                user_agent,
                created_at,
            });
        }
        Ok(visits)
    }

    /// Agents by descending count, ties broken alphabetically.
    pub fn user_agent_stats(&self) -> Result<Vec<UserAgentStat>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT agent, count FROM visitor_agent ORDER BY count DESC, agent")?;
        let rows = stmt.query_map([], |row| {
            Ok(UserAgentStat {
                agent: row.get(0)?,
                count: non_negative(row.get(1)?),
            })
        })?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }
}

impl VisitorStore for SqliteStore {
    fn begin(&self) -> Result<(), StoreError> {
        self.conn.execute_batch("BEGIN")?;
        Ok(())
    }

    fn commit(&self) -> Result<(), StoreError> {
        self.conn.execute_batch("COMMIT")?;
        Ok(())
    }

    fn rollback(&self) -> Result<(), StoreError> {
        self.conn.execute_batch("ROLLBACK")?;
        Ok(())
    }

    fn savepoint(&self) -> Result<(), StoreError> {
        self.conn
            .execute_batch(&format!("SAVEPOINT {LINE_SAVEPOINT}"))?;
        Ok(())
    }

    fn release_savepoint(&self) -> Result<(), StoreError> {
        self.conn
            .execute_batch(&format!("RELEASE {LINE_SAVEPOINT}"))?;
        Ok(())
    }

    fn rollback_to_savepoint(&self) -> Result<(), StoreError> {
        // ROLLBACK TO keeps the savepoint on the stack.
        self.conn.execute_batch(&format!(
            "ROLLBACK TO {LINE_SAVEPOINT}; RELEASE {LINE_SAVEPOINT}"
        ))?;
        Ok(())
    }

    fn find_visitor(&self, ip: &str) -> Result<Option<Visitor>, StoreError> {
        let row = self
            .conn
            .query_row(
                "SELECT ip, visits, ignorables, created_at FROM visitor WHERE ip = ?1",
                [ip],
                raw_visitor,
            )
            .optional()?;

        row.map(RawVisitor::into_visitor).transpose()
    }

    fn create_visitor(&self, ip: &str, created_at: DateTime<Utc>) -> Result<Visitor, StoreError> {
        let ignorables = serde_json::to_string(&IgnoreConfig::default()).map_err(|source| {
            StoreError::Ignorables {
                ip: ip.to_string(),
                source,
            }
        })?;

        self.conn.execute(
            "INSERT INTO visitor (ip, visits, ignorables, created_at) VALUES (?1, 0, ?2, ?3)",
            params![ip, ignorables, created_at.to_rfc3339()],
        )?;

        self.find_visitor(ip)?.ok_or_else(|| StoreError::MissingVisitor {
            ip: ip.to_string(),
        })
    }

    fn increment_visit_count(&self, ip: &str) -> Result<(), StoreError> {
        let changed = self
            .conn
            .execute("UPDATE visitor SET visits = visits + 1 WHERE ip = ?1", [ip])?;
        expect_one(changed, ip)
    }

    fn set_ignorables(&self, ip: &str, ignorables: &IgnoreConfig) -> Result<(), StoreError> {
        let json = serde_json::to_string(ignorables).map_err(|source| StoreError::Ignorables {
            ip: ip.to_string(),
            source,
        })?;
        let changed = self.conn.execute(
            "UPDATE visitor SET ignorables = ?2 WHERE ip = ?1",
            params![ip, json],
        )?;
        expect_one(changed, ip)
    }

    fn insert_visit(&self, visit: &Visit) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT INTO visits (ip, request, referer, user_agent, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                visit.ip,
                visit.request,
                visit.referer,
                visit.user_agent,
                visit.created_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    fn increment_user_agent(&self, agent: &str) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT INTO visitor_agent (agent, count) VALUES (?1, 1)
             ON CONFLICT(agent) DO UPDATE SET count = count + 1",
            [agent],
        )?;
        Ok(())
    }
}

//-----------------------------------------------------------------------------
// Row mapping
//-----------------------------------------------------------------------------

struct RawVisitor {
    ip: String,
    visits: i64,
    ignorables: String,
    created_at: String,
}

fn raw_visitor(row: &Row<'_>) -> rusqlite::Result<RawVisitor> {
    Ok(RawVisitor {
        ip: row.get(0)?,
        visits: row.get(1)?,
        ignorables: row.get(2)?,
        created_at: row.get(3)?,
    })
}

impl RawVisitor {
    fn into_visitor(self) -> Result<Visitor, StoreError> {
        let ignorables: IgnoreConfig =
            serde_json::from_str(&self.ignorables).map_err(|source| StoreError::Ignorables {
                ip: self.ip.clone(),
                source,
            })?;
        let created_at = DateTime::parse_from_rfc3339(&self.created_at)
            .map_err(|_| StoreError::Timestamp {
                ip: self.ip.clone(),
                value: self.created_at.clone(),
            })?
            .with_timezone(&Utc);

        Ok(Visitor {
            ip: self.ip,
            visits: non_negative(self.visits),
            ignorables,
            created_at,
        })
    }
}

fn count(conn: &Connection, sql: &str) -> Result<u64, StoreError> {
    let n: i64 = conn.query_row(sql, [], |row| row.get(0))?;
    Ok(non_negative(n))
}

fn non_negative(n: i64) -> u64 {
    u64::try_from(n).unwrap_or(0)
}

fn expect_one(changed: usize, ip: &str) -> Result<(), StoreError> {
    if changed == 0 {
        return Err(StoreError::MissingVisitor { ip: ip.to_string() });
    }
    Ok(())
}
