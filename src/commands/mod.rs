//! Command-line entry point and the interactive menu.

pub mod departments;
pub mod employees;
pub mod menu;
pub mod roles;

use crate::{
    db::db::Db,
    libs::{config::Config, messages::Message, prompt::Terminal},
    msg_print,
};
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Database file to use instead of the configured one
    #[arg(short, long, value_name = "PATH")]
    database: Option<PathBuf>,
}

impl Cli {
    /// Parses arguments, opens the store, and runs the menu until "Exit".
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        let path = Config::database_path(cli.database)?;
        let db = Db::open(&path)?;

        msg_print!(Message::Welcome);
        msg_print!(Message::SelectOption);

        // On error `db` is dropped here, which closes the connection.
        menu::run(&db, &mut Terminal::new())?;

        db.close()?;
        msg_print!(Message::Goodbye);
        Ok(())
    }
}
