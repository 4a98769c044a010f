//! Interactive input used by the menu and its handlers.
//!
//! Handlers talk to a [`Prompt`] rather than to dialoguer directly, so a
//! session can be replayed from a script.

use crate::libs::messages::Message;
use dialoguer::{theme::ColorfulTheme, Input, Select};

pub trait Prompt {
    /// Asks the user to pick one of `items` and returns its index.
    fn select(&mut self, prompt: &Message, items: &[String]) -> dialoguer::Result<usize>;

    /// Asks for a non-empty line of text.
    fn text(&mut self, prompt: &Message) -> dialoguer::Result<String>;

    /// Asks for a salary, re-asking until the input is a finite non-negative number.
    fn salary(&mut self, prompt: &Message) -> dialoguer::Result<f64>;
}

/// Prompts rendered on the controlling terminal.
pub struct Terminal {
    theme: ColorfulTheme,
}

impl Terminal {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompt for Terminal {
    fn select(&mut self, prompt: &Message, items: &[String]) -> dialoguer::Result<usize> {
        Select::with_theme(&self.theme)
            .with_prompt(prompt.to_string())
            .items(items)
            .default(0)
            .interact()
    }

    fn text(&mut self, prompt: &Message) -> dialoguer::Result<String> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt.to_string())
            .validate_with(|input: &String| -> Result<(), String> {
                if input.trim().is_empty() {
                    Err(Message::InvalidInput.to_string())
                } else {
                    Ok(())
                }
            })
            .interact_text()
            .map(|input| input.trim().to_string())
    }

    fn salary(&mut self, prompt: &Message) -> dialoguer::Result<f64> {
        Input::<f64>::with_theme(&self.theme)
            .with_prompt(prompt.to_string())
            .validate_with(|salary: &f64| -> Result<(), String> {
                if is_valid_salary(*salary) {
                    Ok(())
                } else {
                    Err(Message::InvalidSalary.to_string())
                }
            })
            .interact_text()
    }
}

/// `f64` parsing accepts "inf" and "NaN", so this check runs after it.
pub fn is_valid_salary(salary: f64) -> bool {
    salary.is_finite() && salary >= 0.0
}
