/// Every user-facing string in emptrack, grouped by the handler that emits it.
///
/// The text lives in the `Display` impl in `display.rs`; call sites only ever
/// name a variant.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // === SESSION MESSAGES ===
    Welcome,
    SelectOption,
    PromptMenuAction,
    Goodbye,
    DatabaseOpened(String), // path
    InvalidInput,
    NothingToChoose(String), // prompt text

    // === DEPARTMENT MESSAGES ===
    PromptDepartmentName,
    DepartmentAdded(String), // name
    NoDepartmentsFound,
    NoDepartmentsForRole,
    FetchDepartmentsFailed,
    AddDepartmentFailed,

    // === ROLE MESSAGES ===
    PromptRoleTitle,
    PromptRoleSalary,
    PromptRoleDepartment,
    RoleAdded(String), // title
    InvalidSalary,
    NoRolesFound,
    NoRolesForEmployee,
    NoRolesToAssign,
    FetchRolesFailed,
    AddRoleFailed,

    // === EMPLOYEE MESSAGES ===
    PromptEmployeeFirstName,
    PromptEmployeeLastName,
    PromptEmployeeRole,
    PromptEmployeeManager,
    PromptEmployeeToUpdate,
    PromptEmployeeNewRole,
    NoManager,
    EmployeeAdded(String, String), // first name, last name
    EmployeeRoleUpdated,
    NoEmployeesFound,
    NoEmployeesToUpdate,
    FetchEmployeesFailed,
    AddEmployeeFailed,
    UpdateEmployeeRoleFailed,

    // === CONFIGURATION MESSAGES ===
    ConfigParseFailed(String), // path
    TracingInitFailed(String), // error

    // === DATABASE MESSAGES ===
    DbConnectionFailed,
    DbCloseFailed,
}
