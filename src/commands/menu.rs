//! The main menu loop.
//!
//! Shows the fixed action list, runs the chosen handler, and comes back to
//! the menu afterwards whether the handler succeeded or not. Only "Exit" and a
//! failing terminal leave the loop.

use super::{departments, employees, roles};
use crate::{
    db::db::Db,
    libs::{error::TrackerError, messages::Message, prompt::Prompt},
    msg_error, msg_warning,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    ViewDepartments,
    ViewRoles,
    ViewEmployees,
    AddDepartment,
    AddRole,
    AddEmployee,
    UpdateEmployeeRole,
    Exit,
}

impl MenuAction {
    /// Menu entries in display order.
    pub const ALL: [MenuAction; 8] = [
        MenuAction::ViewDepartments,
        MenuAction::ViewRoles,
        MenuAction::ViewEmployees,
        MenuAction::AddDepartment,
        MenuAction::AddRole,
        MenuAction::AddEmployee,
        MenuAction::UpdateEmployeeRole,
        MenuAction::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuAction::ViewDepartments => "View all departments",
            MenuAction::ViewRoles => "View all roles",
            MenuAction::ViewEmployees => "View all employees",
            MenuAction::AddDepartment => "Add a department",
            MenuAction::AddRole => "Add a role",
            MenuAction::AddEmployee => "Add an employee",
            MenuAction::UpdateEmployeeRole => "Update an employee role",
            MenuAction::Exit => "Exit",
        }
    }

    fn labels() -> Vec<String> {
        Self::ALL.iter().map(|action| action.label().to_string()).collect()
    }

    /// Runs the handler behind this entry. `Exit` does nothing here.
    pub fn dispatch(self, db: &Db, prompt: &mut dyn Prompt) -> Result<(), TrackerError> {
        match self {
            MenuAction::ViewDepartments => departments::view(db),
            MenuAction::ViewRoles => roles::view(db),
            MenuAction::ViewEmployees => employees::view(db),
            MenuAction::AddDepartment => departments::add(db, prompt),
            MenuAction::AddRole => roles::add(db, prompt),
            MenuAction::AddEmployee => employees::add(db, prompt),
            MenuAction::UpdateEmployeeRole => employees::update_role(db, prompt),
            MenuAction::Exit => Ok(()),
        }
    }
}

/// Runs menu rounds until the user picks "Exit".
///
/// Store failures and empty selection lists are reported and the menu is shown
/// again. A prompt failure is returned, since nothing more can be read.
pub fn run(db: &Db, prompt: &mut dyn Prompt) -> Result<(), TrackerError> {
    let labels = MenuAction::labels();

    loop {
        let index = prompt.select(&Message::PromptMenuAction, &labels)?;
        let action = MenuAction::ALL.get(index).copied().unwrap_or(MenuAction::Exit);
        tracing::debug!(action = action.label(), "menu selection");

        if action == MenuAction::Exit {
            return Ok(());
        }

        match action.dispatch(db, prompt) {
            Ok(()) => {}
            Err(TrackerError::Prompt(e)) => return Err(TrackerError::Prompt(e)),
            Err(TrackerError::Unavailable(message)) => msg_warning!(message),
            Err(e @ TrackerError::Store { .. }) => msg_error!(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_is_last_of_eight_entries() {
        assert_eq!(MenuAction::ALL.len(), 8);
        assert_eq!(MenuAction::ALL.last(), Some(&MenuAction::Exit));
        assert_eq!(MenuAction::labels()[0], "View all departments");
        assert_eq!(MenuAction::labels()[6], "Update an employee role");
    }
}
