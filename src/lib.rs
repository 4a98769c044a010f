//! # Emptrack - Employee Tracker
//!
//! An interactive command-line tool for keeping departments, roles, and
//! employees in a local SQLite database.
//!
//! ## Features
//!
//! - **Views**: Tabular listings of departments, roles, and employees with
//!   their role, department, salary, and manager resolved
//! - **Additions**: Guided prompts for new departments, roles, and employees,
//!   with references chosen from lists instead of typed ids
//! - **Reassignment**: Move an employee to a different role
//!
//! ## Usage
//!
//! ```rust,no_run
//! use emptrack::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
