#![allow(dead_code)]

use emptrack::db::db::Db;
use emptrack::libs::messages::Message;
use emptrack::libs::prompt::Prompt;
use std::collections::VecDeque;
use std::io;
use tempfile::TempDir;
use test_context::TestContext;

/// A fresh database file in its own temporary directory.
pub struct StoreTestContext {
    pub db: Db,
    _temp_dir: TempDir,
}

impl TestContext for StoreTestContext {
    fn setup() -> Self {
        let temp_dir = tempfile::tempdir().unwrap();
        let db = Db::open(&temp_dir.path().join("emptrack.db")).unwrap();
        StoreTestContext { db, _temp_dir: temp_dir }
    }
}

impl StoreTestContext {
    /// Makes every INSERT and UPDATE on `table` abort, leaving reads untouched.
    pub fn reject_writes(&self, table: &str) {
        self.db
            .conn
            .execute_batch(&format!(
                "CREATE TRIGGER reject_{table}_insert BEFORE INSERT ON {table} BEGIN SELECT RAISE(ABORT, 'writes rejected'); END;
                 CREATE TRIGGER reject_{table}_update BEFORE UPDATE ON {table} BEGIN SELECT RAISE(ABORT, 'writes rejected'); END;"
            ))
            .unwrap();
    }
}

/// One scripted reply to a prompt.
#[derive(Debug, Clone)]
pub enum Answer {
    /// Choose the item with this label.
    Pick(&'static str),
    Text(&'static str),
    Salary(f64),
}

/// Replays answers in order and records every prompt it was shown.
pub struct ScriptedPrompt {
    answers: VecDeque<Answer>,
    pub asked: Vec<Message>,
    pub offered: Vec<Vec<String>>,
}

impl ScriptedPrompt {
    pub fn new(answers: Vec<Answer>) -> Self {
        Self {
            answers: answers.into(),
            asked: Vec::new(),
            offered: Vec::new(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next(&mut self, prompt: &Message) -> dialoguer::Result<Answer> {
        self.asked.push(prompt.clone());
        self.answers.pop_front().ok_or_else(|| failure(format!("script exhausted at '{}'", prompt)))
    }
}

fn failure(reason: String) -> dialoguer::Error {
    dialoguer::Error::IO(io::Error::new(io::ErrorKind::UnexpectedEof, reason))
}

impl Prompt for ScriptedPrompt {
    fn select(&mut self, prompt: &Message, items: &[String]) -> dialoguer::Result<usize> {
        self.offered.push(items.to_vec());
        match self.next(prompt)? {
            Answer::Pick(label) => items
                .iter()
                .position(|item| item == label)
                .ok_or_else(|| failure(format!("'{}' not offered in {:?}", label, items))),
            other => Err(failure(format!("expected a pick for '{}', got {:?}", prompt, other))),
        }
    }

    fn text(&mut self, prompt: &Message) -> dialoguer::Result<String> {
        match self.next(prompt)? {
            Answer::Text(text) => Ok(text.to_string()),
            other => Err(failure(format!("expected text for '{}', got {:?}", prompt, other))),
        }
    }

    fn salary(&mut self, prompt: &Message) -> dialoguer::Result<f64> {
        match self.next(prompt)? {
            Answer::Salary(salary) => Ok(salary),
            other => Err(failure(format!("expected a salary for '{}', got {:?}", prompt, other))),
        }
    }
}
