use crate::db::{departments::Department, employees::EmployeeDetail, roles::Role};
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn departments_table(departments: &[Department]) -> Table {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME"]);
        for department in departments {
            table.add_row(row![department.id.unwrap_or(0), department.name]);
        }

        table
    }

    pub fn roles_table(roles: &[Role]) -> Table {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "SALARY", "DEPARTMENT ID"]);
        for role in roles {
            table.add_row(row![role.id.unwrap_or(0), role.title, role.salary, role.department_id]);
        }

        table
    }

    pub fn employees_table(employees: &[EmployeeDetail]) -> Table {
        let mut table = Table::new();

        table.add_row(row!["ID", "FIRST NAME", "LAST NAME", "TITLE", "DEPARTMENT", "SALARY", "MANAGER"]);
        for employee in employees {
            table.add_row(row![
                employee.id,
                employee.first_name,
                employee.last_name,
                employee.title.as_deref().unwrap_or_default(),
                employee.department.as_deref().unwrap_or_default(),
                employee.salary.map(|salary| salary.to_string()).unwrap_or_default(),
                employee.manager.as_deref().unwrap_or_default()
            ]);
        }

        table
    }

    pub fn departments(departments: &[Department]) {
        Self::departments_table(departments).printstd();
    }

    pub fn roles(roles: &[Role]) {
        Self::roles_table(roles).printstd();
    }

    pub fn employees(employees: &[EmployeeDetail]) {
        Self::employees_table(employees).printstd();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(table: &Table, row: usize, column: usize) -> String {
        table.get_row(row).and_then(|r| r.get_cell(column)).map(|c| c.get_content()).unwrap_or_default()
    }

    #[test]
    fn role_salary_renders_without_fraction() {
        let role = Role {
            id: Some(1),
            title: "Engineer".to_string(),
            salary: 75000.0,
            department_id: 1,
        };
        let table = View::roles_table(&[role]);
        assert_eq!(table.len(), 2);
        assert_eq!(cell(&table, 1, 2), "75000");
    }

    #[test]
    fn missing_manager_renders_empty() {
        let employee = EmployeeDetail {
            id: 1,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            title: Some("Engineer".to_string()),
            department: Some("Engineering".to_string()),
            salary: Some(75000.0),
            manager: None,
        };
        let table = View::employees_table(&[employee]);
        assert_eq!(cell(&table, 1, 3), "Engineer");
        assert_eq!(cell(&table, 1, 6), "");
    }
}
