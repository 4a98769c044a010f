use crate::{
    db::{
        db::Db,
        departments::{Department, Departments},
    },
    libs::{
        error::{StoreContext, TrackerError},
        messages::Message,
        prompt::Prompt,
        view::View,
    },
    msg_info, msg_success,
};

pub fn view(db: &Db) -> Result<(), TrackerError> {
    let departments = Departments::new(db).list().store_context(Message::FetchDepartmentsFailed)?;

    if departments.is_empty() {
        msg_info!(Message::NoDepartmentsFound);
        return Ok(());
    }

    View::departments(&departments);
    Ok(())
}

pub fn add(db: &Db, prompt: &mut dyn Prompt) -> Result<(), TrackerError> {
    let name = prompt.text(&Message::PromptDepartmentName)?;

    Departments::new(db)
        .insert(&Department::new(&name))
        .store_context(Message::AddDepartmentFailed)?;

    msg_success!(Message::DepartmentAdded(name));
    Ok(())
}
