use crate::{
    db::{
        db::Db,
        employees::{Employee, Employees},
        roles::Roles,
    },
    libs::{
        error::{StoreContext, TrackerError},
        messages::Message,
        prompt::Prompt,
        selection::SelectionList,
        view::View,
    },
    msg_info, msg_success,
};

pub fn view(db: &Db) -> Result<(), TrackerError> {
    let employees = Employees::new(db).details().store_context(Message::FetchEmployeesFailed)?;

    if employees.is_empty() {
        msg_info!(Message::NoEmployeesFound);
        return Ok(());
    }

    View::employees(&employees);
    Ok(())
}

pub fn add(db: &Db, prompt: &mut dyn Prompt) -> Result<(), TrackerError> {
    let roles = role_choices(db)?;
    if roles.is_empty() {
        return Err(TrackerError::Unavailable(Message::NoRolesForEmployee));
    }

    // Every existing employee can manage the new one, plus "None" at the end.
    let mut managers: SelectionList<Option<i64>> = employee_choices(db)?
        .into_iter()
        .map(|(label, id)| (label, Some(id)))
        .collect();
    managers.push(Message::NoManager.to_string(), None);

    let first_name = prompt.text(&Message::PromptEmployeeFirstName)?;
    let last_name = prompt.text(&Message::PromptEmployeeLastName)?;
    let (_, role_id) = roles.pick(prompt, &Message::PromptEmployeeRole)?;
    let (_, manager_id) = managers.pick(prompt, &Message::PromptEmployeeManager)?;

    Employees::new(db)
        .insert(&Employee::new(&first_name, &last_name, role_id, manager_id))
        .store_context(Message::AddEmployeeFailed)?;

    msg_success!(Message::EmployeeAdded(first_name, last_name));
    Ok(())
}

pub fn update_role(db: &Db, prompt: &mut dyn Prompt) -> Result<(), TrackerError> {
    let employees = employee_choices(db)?;
    if employees.is_empty() {
        return Err(TrackerError::Unavailable(Message::NoEmployeesToUpdate));
    }

    let roles = role_choices(db)?;
    if roles.is_empty() {
        return Err(TrackerError::Unavailable(Message::NoRolesToAssign));
    }

    let (_, employee_id) = employees.pick(prompt, &Message::PromptEmployeeToUpdate)?;
    let (_, role_id) = roles.pick(prompt, &Message::PromptEmployeeNewRole)?;

    Employees::new(db)
        .update_role(employee_id, role_id)
        .store_context(Message::UpdateEmployeeRoleFailed)?;

    msg_success!(Message::EmployeeRoleUpdated);
    Ok(())
}

fn role_choices(db: &Db) -> Result<SelectionList<i64>, TrackerError> {
    Ok(Roles::new(db)
        .list()
        .store_context(Message::FetchRolesFailed)?
        .into_iter()
        .filter_map(|role| role.id.map(|id| (role.title, id)))
        .collect())
}

fn employee_choices(db: &Db) -> Result<SelectionList<i64>, TrackerError> {
    Ok(Employees::new(db)
        .list()
        .store_context(Message::FetchEmployeesFailed)?
        .into_iter()
        .filter_map(|employee| employee.id.map(|id| (employee.full_name(), id)))
        .collect())
}
