use crate::db::db::Db;
use rusqlite::{params, Connection, Result};

const INSERT_EMPLOYEE: &str = "INSERT INTO employee (first_name, last_name, role_id, manager_id) VALUES (?1, ?2, ?3, ?4)";
const UPDATE_EMPLOYEE_ROLE: &str = "UPDATE employee SET role_id = ?1 WHERE id = ?2";
const SELECT_ALL_EMPLOYEES: &str = "SELECT id, first_name, last_name, role_id, manager_id FROM employee";
const SELECT_EMPLOYEE_DETAILS: &str = "
    SELECT employee.id, employee.first_name, employee.last_name, role.title, department.name, role.salary,
           manager.first_name || ' ' || manager.last_name
    FROM employee
    LEFT JOIN role ON employee.role_id = role.id
    LEFT JOIN department ON role.department_id = department.id
    LEFT JOIN employee AS manager ON employee.manager_id = manager.id
";

#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub role_id: i64,
    pub manager_id: Option<i64>,
}

impl Employee {
    pub fn new(first_name: &str, last_name: &str, role_id: i64, manager_id: Option<i64>) -> Self {
        Self {
            id: None,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            role_id,
            manager_id,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// One row of the employee listing, with role, department, and manager resolved.
///
/// The joins are outer joins, so every resolved column may be missing.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeDetail {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub title: Option<String>,
    pub department: Option<String>,
    pub salary: Option<f64>,
    pub manager: Option<String>,
}

pub struct Employees<'a> {
    conn: &'a Connection,
}

impl<'a> Employees<'a> {
    pub fn new(db: &'a Db) -> Self {
        Self { conn: &db.conn }
    }

    /// Inserts an employee and returns the new id.
    pub fn insert(&self, employee: &Employee) -> Result<i64> {
        self.conn.execute(
            INSERT_EMPLOYEE,
            params![employee.first_name, employee.last_name, employee.role_id, employee.manager_id],
        )?;
        let id = self.conn.last_insert_rowid();
        tracing::debug!(id, role_id = employee.role_id, manager_id = ?employee.manager_id, "employee inserted");
        Ok(id)
    }

    /// Points an employee at a new role and returns the number of rows touched.
    ///
    /// Assigning the current role again is allowed and changes nothing.
    pub fn update_role(&self, employee_id: i64, role_id: i64) -> Result<usize> {
        let affected = self.conn.execute(UPDATE_EMPLOYEE_ROLE, params![role_id, employee_id])?;
        tracing::debug!(employee_id, role_id, affected, "employee role updated");
        Ok(affected)
    }

    pub fn list(&self) -> Result<Vec<Employee>> {
        let mut stmt = self.conn.prepare(SELECT_ALL_EMPLOYEES)?;
        let employee_iter = stmt.query_map([], |row| {
            Ok(Employee {
                id: row.get(0)?,
                first_name: row.get(1)?,
                last_name: row.get(2)?,
                role_id: row.get(3)?,
                manager_id: row.get(4)?,
            })
        })?;

        let mut employees = Vec::new();
        for employee in employee_iter {
            employees.push(employee?);
        }
        Ok(employees)
    }

    pub fn details(&self) -> Result<Vec<EmployeeDetail>> {
        let mut stmt = self.conn.prepare(SELECT_EMPLOYEE_DETAILS)?;
        let detail_iter = stmt.query_map([], |row| {
            Ok(EmployeeDetail {
                id: row.get(0)?,
                first_name: row.get(1)?,
                last_name: row.get(2)?,
                title: row.get(3)?,
                department: row.get(4)?,
                salary: row.get(5)?,
                manager: row.get(6)?,
            })
        })?;

        detail_iter.collect()
    }
}
