mod common;

#[cfg(test)]
mod tests {
    use crate::common::{Answer, ScriptedPrompt, StoreTestContext};
    use emptrack::commands::menu;
    use emptrack::db::departments::Departments;
    use emptrack::db::employees::Employees;
    use emptrack::db::roles::Roles;
    use emptrack::libs::error::TrackerError;
    use emptrack::libs::messages::Message;
    use test_context::test_context;

    #[test_context(StoreTestContext)]
    #[test]
    fn test_exit_immediately(ctx: &mut StoreTestContext) {
        let mut prompt = ScriptedPrompt::new(vec![Answer::Pick("Exit")]);

        menu::run(&ctx.db, &mut prompt).unwrap();

        assert_eq!(prompt.asked, vec![Message::PromptMenuAction]);
        assert_eq!(prompt.offered[0].len(), 8);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_full_session(ctx: &mut StoreTestContext) {
        let mut prompt = ScriptedPrompt::new(vec![
            Answer::Pick("Add a department"),
            Answer::Text("Engineering"),
            Answer::Pick("Add a role"),
            Answer::Text("Engineer"),
            Answer::Salary(75000.0),
            Answer::Pick("Engineering"),
            Answer::Pick("Add a role"),
            Answer::Text("Senior Engineer"),
            Answer::Salary(95000.0),
            Answer::Pick("Engineering"),
            Answer::Pick("Add an employee"),
            Answer::Text("Ada"),
            Answer::Text("Lovelace"),
            Answer::Pick("Engineer"),
            Answer::Pick("None"),
            Answer::Pick("View all employees"),
            Answer::Pick("Update an employee role"),
            Answer::Pick("Ada Lovelace"),
            Answer::Pick("Senior Engineer"),
            Answer::Pick("View all departments"),
            Answer::Pick("View all roles"),
            Answer::Pick("View all employees"),
            Answer::Pick("Exit"),
        ]);

        menu::run(&ctx.db, &mut prompt).unwrap();
        assert_eq!(prompt.remaining(), 0);

        let departments = Departments::new(&ctx.db).list().unwrap();
        assert_eq!(departments.len(), 1);
        assert_eq!(departments[0].name, "Engineering");

        let roles = Roles::new(&ctx.db).list().unwrap();
        assert_eq!(roles.len(), 2);
        assert!(roles.iter().all(|role| Some(role.department_id) == departments[0].id));

        let details = Employees::new(&ctx.db).details().unwrap();
        assert_eq!(details.len(), 1);
        assert_eq!(details[0].first_name, "Ada");
        assert_eq!(details[0].last_name, "Lovelace");
        assert_eq!(details[0].title.as_deref(), Some("Senior Engineer"));
        assert_eq!(details[0].department.as_deref(), Some("Engineering"));
        assert_eq!(details[0].manager, None);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_rejection_returns_to_menu(ctx: &mut StoreTestContext) {
        let mut prompt = ScriptedPrompt::new(vec![
            Answer::Pick("Add a role"),
            Answer::Pick("Add an employee"),
            Answer::Pick("Update an employee role"),
            Answer::Pick("Exit"),
        ]);

        menu::run(&ctx.db, &mut prompt).unwrap();

        assert_eq!(prompt.asked, vec![Message::PromptMenuAction; 4]);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_store_failure_returns_to_menu(ctx: &mut StoreTestContext) {
        ctx.db.conn.execute_batch("DROP TABLE employee; DROP TABLE role;").unwrap();
        let mut prompt = ScriptedPrompt::new(vec![
            Answer::Pick("View all roles"),
            Answer::Pick("View all employees"),
            Answer::Pick("Add a department"),
            Answer::Text("Engineering"),
            Answer::Pick("Exit"),
        ]);

        menu::run(&ctx.db, &mut prompt).unwrap();

        assert_eq!(prompt.remaining(), 0);
        assert_eq!(Departments::new(&ctx.db).list().unwrap().len(), 1);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_write_failures_return_to_menu(ctx: &mut StoreTestContext) {
        ctx.reject_writes("department");
        let mut prompt = ScriptedPrompt::new(vec![
            Answer::Pick("Add a department"),
            Answer::Text("Engineering"),
            Answer::Pick("View all departments"),
            Answer::Pick("Add a department"),
            Answer::Text("Sales"),
            Answer::Pick("Exit"),
        ]);

        menu::run(&ctx.db, &mut prompt).unwrap();

        assert_eq!(prompt.remaining(), 0);
        assert_eq!(
            prompt.asked,
            vec![
                Message::PromptMenuAction,
                Message::PromptDepartmentName,
                Message::PromptMenuAction,
                Message::PromptMenuAction,
                Message::PromptDepartmentName,
                Message::PromptMenuAction,
            ]
        );
        assert!(Departments::new(&ctx.db).list().unwrap().is_empty());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_prompt_failure_ends_session(ctx: &mut StoreTestContext) {
        let mut prompt = ScriptedPrompt::new(vec![Answer::Pick("Add a department")]);

        let result = menu::run(&ctx.db, &mut prompt);

        assert!(matches!(result, Err(TrackerError::Prompt(_))));
        assert!(Departments::new(&ctx.db).list().unwrap().is_empty());
    }
}
