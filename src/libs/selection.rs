use crate::libs::error::TrackerError;
use crate::libs::messages::Message;
use crate::libs::prompt::Prompt;
use std::io;

/// Labelled choices built from a reference query, in the order they were added.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionList<T> {
    choices: Vec<(String, T)>,
}

impl<T: Clone> SelectionList<T> {
    pub fn new() -> Self {
        Self { choices: Vec::new() }
    }

    pub fn push(&mut self, label: impl Into<String>, value: T) {
        self.choices.push((label.into(), value));
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    pub fn labels(&self) -> Vec<String> {
        self.choices.iter().map(|(label, _)| label.clone()).collect()
    }

    /// Shows the list and returns the label and value of the chosen entry.
    ///
    /// An empty list is `Unavailable` and the prompt is never shown.
    pub fn pick(&self, prompt: &mut dyn Prompt, message: &Message) -> Result<(String, T), TrackerError> {
        if self.is_empty() {
            return Err(TrackerError::Unavailable(Message::NothingToChoose(message.to_string())));
        }
        let index = prompt.select(message, &self.labels())?;
        self.choices.get(index).cloned().ok_or_else(|| {
            TrackerError::Prompt(dialoguer::Error::IO(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("selection {} out of range", index),
            )))
        })
    }
}

impl<T: Clone> Default for SelectionList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> FromIterator<(String, T)> for SelectionList<T> {
    fn from_iter<I: IntoIterator<Item = (String, T)>>(iter: I) -> Self {
        Self {
            choices: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for SelectionList<T> {
    type Item = (String, T);
    type IntoIter = std::vec::IntoIter<(String, T)>;

    fn into_iter(self) -> Self::IntoIter {
        self.choices.into_iter()
    }
}
