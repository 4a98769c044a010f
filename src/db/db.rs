use crate::libs::messages::Message;
use crate::{msg_debug, msg_error_anyhow};
use anyhow::{Context, Result};
use rusqlite::Connection;
use std::path::Path;

/// Tables the handlers read and write. Created if missing; there is no
/// versioning beyond that.
const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS department (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS role (
    id INTEGER PRIMARY KEY,
    title TEXT NOT NULL,
    salary REAL NOT NULL,
    department_id INTEGER NOT NULL,
    FOREIGN KEY (department_id) REFERENCES department(id)
);
CREATE TABLE IF NOT EXISTS employee (
    id INTEGER PRIMARY KEY,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    role_id INTEGER NOT NULL,
    manager_id INTEGER,
    FOREIGN KEY (role_id) REFERENCES role(id),
    FOREIGN KEY (manager_id) REFERENCES employee(id) ON DELETE SET NULL
);";

/// The single store connection for a session.
///
/// Handlers borrow it; dropping it releases the connection on any exit path.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens (or creates) the database at `path` and makes sure the tables exist.
    pub fn open(path: &Path) -> Result<Db> {
        let conn = Connection::open(path).with_context(|| format!("{} ({})", Message::DbConnectionFailed, path.display()))?;
        let db = Self::init(conn)?;
        msg_debug!(Message::DatabaseOpened(path.display().to_string()));
        Ok(db)
    }

    /// Opens a private in-memory database.
    pub fn open_in_memory() -> Result<Db> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Db> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        conn.execute_batch(SCHEMA)?;
        Ok(Db { conn })
    }

    /// Closes the connection, surfacing any error the drop would swallow.
    pub fn close(self) -> Result<()> {
        self.conn
            .close()
            .map_err(|(_, e)| msg_error_anyhow!(format!("{}: {}", Message::DbCloseFailed, e)))
    }
}
