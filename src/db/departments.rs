use crate::db::db::Db;
use rusqlite::{params, Connection, Result};

const INSERT_DEPARTMENT: &str = "INSERT INTO department (name) VALUES (?1)";
const SELECT_ALL_DEPARTMENTS: &str = "SELECT id, name FROM department";

#[derive(Debug, Clone, PartialEq)]
pub struct Department {
    pub id: Option<i64>,
    pub name: String,
}

impl Department {
    pub fn new(name: &str) -> Self {
        Self {
            id: None,
            name: name.to_string(),
        }
    }
}

pub struct Departments<'a> {
    conn: &'a Connection,
}

impl<'a> Departments<'a> {
    pub fn new(db: &'a Db) -> Self {
        Self { conn: &db.conn }
    }

    /// Inserts a department and returns its new id. Names are not unique.
    pub fn insert(&self, department: &Department) -> Result<i64> {
        self.conn.execute(INSERT_DEPARTMENT, params![department.name])?;
        let id = self.conn.last_insert_rowid();
        tracing::debug!(id, name = %department.name, "department inserted");
        Ok(id)
    }

    /// All departments in store order.
    pub fn list(&self) -> Result<Vec<Department>> {
        let mut stmt = self.conn.prepare(SELECT_ALL_DEPARTMENTS)?;
        let department_iter = stmt.query_map([], |row| {
            Ok(Department {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        })?;

        let mut departments = Vec::new();
        for department in department_iter {
            departments.push(department?);
        }
        Ok(departments)
    }
}
