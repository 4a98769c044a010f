use crate::{
    db::{
        db::Db,
        departments::Departments,
        roles::{Role, Roles},
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
    let roles = Roles::new(db).list().store_context(Message::FetchRolesFailed)?;

    if roles.is_empty() {
        msg_info!(Message::NoRolesFound);
        return Ok(());
    }

    View::roles(&roles);
    Ok(())
}

/// Adds a role under an existing department.
///
/// Refuses before prompting when there is no department to choose.
pub fn add(db: &Db, prompt: &mut dyn Prompt) -> Result<(), TrackerError> {
    let departments: SelectionList<i64> = Departments::new(db)
        .list()
        .store_context(Message::FetchDepartmentsFailed)?
        .into_iter()
        .filter_map(|department| department.id.map(|id| (department.name, id)))
        .collect();

    if departments.is_empty() {
        return Err(TrackerError::Unavailable(Message::NoDepartmentsForRole));
    }

    let title = prompt.text(&Message::PromptRoleTitle)?;
    let salary = prompt.salary(&Message::PromptRoleSalary)?;
    let (_, department_id) = departments.pick(prompt, &Message::PromptRoleDepartment)?;

    Roles::new(db)
        .insert(&Role::new(&title, salary, department_id))
        .store_context(Message::AddRoleFailed)?;

    msg_success!(Message::RoleAdded(title));
    Ok(())
}
