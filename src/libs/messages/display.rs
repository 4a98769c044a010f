//! Display implementation for emptrack messages.
//!
//! Keeps the wording of every prompt, notice, and error context in one match
//! so handlers stay free of string literals.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === SESSION MESSAGES ===
            Message::Welcome => "Welcome to the Employee Tracker!".to_string(),
            Message::SelectOption => "Please select an option:".to_string(),
            Message::PromptMenuAction => "What would you like to do?".to_string(),
            Message::Goodbye => "Goodbye!".to_string(),
            Message::DatabaseOpened(path) => format!("Using database at {}", path),
            Message::InvalidInput => "Input cannot be empty".to_string(),
            Message::NothingToChoose(prompt) => format!("Nothing to choose from for \"{}\"", prompt),

            // === DEPARTMENT MESSAGES ===
            Message::PromptDepartmentName => "Enter the name of the department".to_string(),
            Message::DepartmentAdded(name) => format!("Department {} added successfully!", name),
            Message::NoDepartmentsFound => "No departments found.".to_string(),
            Message::NoDepartmentsForRole => "No departments found. Add a department before adding a role.".to_string(),
            Message::FetchDepartmentsFailed => "Error fetching departments".to_string(),
            Message::AddDepartmentFailed => "Error adding department".to_string(),

            // === ROLE MESSAGES ===
            Message::PromptRoleTitle => "Enter the title of the role".to_string(),
            Message::PromptRoleSalary => "Enter the salary of the role".to_string(),
            Message::PromptRoleDepartment => "Select the department for this role".to_string(),
            Message::RoleAdded(title) => format!("Role {} added successfully!", title),
            Message::InvalidSalary => "Salary must be a non-negative number".to_string(),
            Message::NoRolesFound => "No roles found.".to_string(),
            Message::NoRolesForEmployee => "No roles found. Add a role before adding an employee.".to_string(),
            Message::NoRolesToAssign => "No roles found. Add a role before updating an employee.".to_string(),
            Message::FetchRolesFailed => "Error fetching roles".to_string(),
            Message::AddRoleFailed => "Error adding role".to_string(),

            // === EMPLOYEE MESSAGES ===
            Message::PromptEmployeeFirstName => "Enter the first name of the employee".to_string(),
            Message::PromptEmployeeLastName => "Enter the last name of the employee".to_string(),
            Message::PromptEmployeeRole => "Select the role for this employee".to_string(),
            Message::PromptEmployeeManager => "Select the manager for this employee".to_string(),
            Message::PromptEmployeeToUpdate => "Select the employee to update".to_string(),
            Message::PromptEmployeeNewRole => "Select the new role for this employee".to_string(),
            Message::NoManager => "None".to_string(),
            Message::EmployeeAdded(first_name, last_name) => format!("Employee {} {} added successfully!", first_name, last_name),
            Message::EmployeeRoleUpdated => "Employee role updated successfully!".to_string(),
            Message::NoEmployeesFound => "No employees found.".to_string(),
            Message::NoEmployeesToUpdate => "No employees found. Add an employee before updating roles.".to_string(),
            Message::FetchEmployeesFailed => "Error fetching employees".to_string(),
            Message::AddEmployeeFailed => "Error adding employee".to_string(),
            Message::UpdateEmployeeRoleFailed => "Error updating employee role".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigParseFailed(path) => format!("Failed to parse configuration file {}", path),
            Message::TracingInitFailed(error) => format!("Failed to initialize logging: {}", error),

            // === DATABASE MESSAGES ===
            Message::DbConnectionFailed => "Failed to connect to database".to_string(),
            Message::DbCloseFailed => "Failed to close database connection".to_string(),
        };

        write!(f, "{}", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_messages_interpolate_names() {
        assert_eq!(Message::DepartmentAdded("Engineering".into()).to_string(), "Department Engineering added successfully!");
        assert_eq!(Message::RoleAdded("Engineer".into()).to_string(), "Role Engineer added successfully!");
        assert_eq!(
            Message::EmployeeAdded("Ada".into(), "Lovelace".into()).to_string(),
            "Employee Ada Lovelace added successfully!"
        );
    }

    #[test]
    fn no_manager_label() {
        assert_eq!(Message::NoManager.to_string(), "None");
    }
}
