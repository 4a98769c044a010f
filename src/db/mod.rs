//! Store layer for emptrack.
//!
//! One SQLite connection, owned by [`db::Db`], shared by three repositories
//! that each own the SQL for one table.
//!
//! ```rust,no_run
//! use emptrack::db::{db::Db, departments::{Department, Departments}};
//!
//! let db = Db::open_in_memory()?;
//! let id = Departments::new(&db).insert(&Department::new("Engineering"))?;
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Connection setup and table bootstrap.
pub mod db;

/// Department rows.
pub mod departments;

/// Employee rows, role reassignment, and the joined listing.
pub mod employees;

/// Role rows.
pub mod roles;
