use crate::db::db::Db;
use rusqlite::{params, Connection, Result};

const INSERT_ROLE: &str = "INSERT INTO role (title, salary, department_id) VALUES (?1, ?2, ?3)";
const SELECT_ALL_ROLES: &str = "SELECT id, title, salary, department_id FROM role";

#[derive(Debug, Clone, PartialEq)]
pub struct Role {
    pub id: Option<i64>,
    pub title: String,
    pub salary: f64,
    pub department_id: i64,
}

impl Role {
    pub fn new(title: &str, salary: f64, department_id: i64) -> Self {
        Self {
            id: None,
            title: title.to_string(),
            salary,
            department_id,
        }
    }
}

pub struct Roles<'a> {
    conn: &'a Connection,
}

impl<'a> Roles<'a> {
    pub fn new(db: &'a Db) -> Self {
        Self { conn: &db.conn }
    }

    /// Inserts a role and returns its new id. Fails if the department does not exist.
    pub fn insert(&self, role: &Role) -> Result<i64> {
        self.conn.execute(INSERT_ROLE, params![role.title, role.salary, role.department_id])?;
        let id = self.conn.last_insert_rowid();
        tracing::debug!(id, title = %role.title, department_id = role.department_id, "role inserted");
        Ok(id)
    }

    pub fn list(&self) -> Result<Vec<Role>> {
        let mut stmt = self.conn.prepare(SELECT_ALL_ROLES)?;
        let role_iter = stmt.query_map([], |row| {
            Ok(Role {
                id: row.get(0)?,
                title: row.get(1)?,
                salary: row.get(2)?,
                department_id: row.get(3)?,
            })
        })?;

        let mut roles = Vec::new();
        for role in role_iter {
            roles.push(role?);
        }
        Ok(roles)
    }
}
