//! Text capture requested from the presentation layer.
//!
//! The core describes what it needs (title, label, initial value), the
//! presentation layer shows it, and only a confirmed non-blank value flows
//! back into a mutation. Cancelling yields nothing.

use crate::config::TaskFlowConfig;
use crate::domain::{parse_due_date, parse_labels, Card, CardUpdate};
use crate::error::Result;

/// A single-field text prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRequest {
    pub title: String,
    pub label: String,
    pub placeholder: String,
    pub initial_value: String,
    pub button_text: String,
}

impl InputRequest {
    fn new(title: &str, label: &str, placeholder: &str, button_text: &str) -> Self {
        Self {
            title: title.to_string(),
            label: label.to_string(),
            placeholder: placeholder.to_string(),
            initial_value: String::new(),
            button_text: button_text.to_string(),
        }
    }

    fn with_initial(mut self, initial_value: &str) -> Self {
        self.initial_value = initial_value.to_string();
        self
    }

    pub fn create_board() -> Self {
        Self::new(
            "Create New Board",
            "Board Name",
            "e.g., Project Phoenix",
            "Create Board",
        )
    }

    pub fn rename_board(current: &str) -> Self {
        Self::new(
            "Edit Board Name",
            "New Board Name",
            "e.g., Project Phoenix v2",
            "Save Changes",
        )
        .with_initial(current)
    }

    pub fn add_list() -> Self {
        Self::new("Add New List", "List Name", "e.g., To Do", "Add List")
    }

    pub fn rename_list(current: &str) -> Self {
        Self::new(
            "Edit List Name",
            "New List Name",
            "e.g., In Progress",
            "Save Changes",
        )
        .with_initial(current)
    }

    pub fn add_card() -> Self {
        Self::new(
            "Add New Card",
            "Card Title",
            "e.g., Design the homepage mockup",
            "Add Card",
        )
    }

    /// The trimmed value, or `None` when it is blank
    pub fn confirm(&self, raw: &str) -> Option<String> {
        let value = raw.trim();
        (!value.is_empty()).then(|| value.to_string())
    }
}

/// The multi-field card editor, holding raw text as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardForm {
    pub title: String,
    pub description: String,
    /// `YYYY-MM-DD`, or empty for no due date
    pub due_date: String,
    /// Comma-separated label texts
    pub labels: String,
}

impl CardForm {
    /// Prefills the form from a card
    pub fn from_card(card: &Card) -> Self {
        Self {
            title: card.title.clone(),
            description: card.description.clone(),
            due_date: card
                .due_date
                .map(|date| date.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            labels: card
                .labels
                .iter()
                .map(|label| label.text.as_str())
                .collect::<Vec<_>>()
                .join(","),
        }
    }

    /// Converts the submitted form into a full card update.
    ///
    /// Fails only when the due date text cannot be read as a date.
    pub fn into_update(self, config: &TaskFlowConfig) -> Result<CardUpdate> {
        let due_date = parse_due_date(&self.due_date)?;
        Ok(CardUpdate::new()
            .title(self.title.trim())
            .description(self.description.trim())
            .due_date(due_date)
            .labels(parse_labels(&self.labels, &config.default_label_color)))
    }
}

/// Prompts implemented by the presentation layer; `None` means cancelled
pub trait Dialog {
    fn prompt(&mut self, request: &InputRequest) -> Option<String>;

    fn edit_card(&mut self, form: CardForm) -> Option<CardForm>;
}
