use crate::domain::id::CardId;
use crate::error::{Result, TaskFlowError};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Color given to labels parsed from free text
pub const DEFAULT_LABEL_COLOR: &str = "#7289da";

/// A colored tag attached to a card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub text: String,
    pub color: String,
}

impl Label {
    pub fn new(text: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: color.into(),
        }
    }
}

/// Splits comma-separated label text into labels of the given color.
///
/// Pieces are trimmed and empty pieces are dropped, so `"Urgent, ,Work,"`
/// yields two labels.
pub fn parse_labels(text: &str, color: &str) -> Vec<Label> {
    text.split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(|piece| Label::new(piece, color))
        .collect()
}

/// Parses a due date typed by the user.
///
/// Accepts an empty string (no due date), a plain `YYYY-MM-DD` date, or a full
/// date-time of which only the date part is kept.
pub fn parse_due_date(text: &str) -> Result<Option<NaiveDate>> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Ok(Some(date));
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(Some(dt.date_naive()));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(Some(dt.date()));
    }
    Err(TaskFlowError::InvalidDate(text.to_string()))
}

mod due_date_format {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<NaiveDate>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        value
            .map(|date| date.format("%Y-%m-%d").to_string())
            .serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDate>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(text) => super::parse_due_date(&text).map_err(de::Error::custom),
        }
    }
}

/// A task unit within a list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default, with = "due_date_format")]
    pub due_date: Option<NaiveDate>,
}

impl Card {
    /// Creates a card with no description, labels or due date
    pub fn new(id: CardId, title: String) -> Self {
        Self {
            id,
            title,
            description: String::new(),
            labels: Vec::new(),
            due_date: None,
        }
    }

    /// Applies a partial update.
    ///
    /// A title that trims to empty is ignored and the prior title is kept.
    pub fn apply(&mut self, update: CardUpdate) {
        if let Some(title) = update.title {
            let title = title.trim();
            if !title.is_empty() {
                self.title = title.to_string();
            }
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(due_date) = update.due_date {
            self.due_date = due_date;
        }
        if let Some(labels) = update.labels {
            self.labels = labels;
        }
    }
}

fn present_or_null<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<Option<NaiveDate>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    due_date_format::deserialize(deserializer).map(Some)
}

/// Partial update of a card's editable fields; `None` leaves a field untouched
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardUpdate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// `Some(None)` clears the due date; JSON `null` maps to that
    #[serde(default, deserialize_with = "present_or_null")]
    pub due_date: Option<Option<NaiveDate>>,
    #[serde(default)]
    pub labels: Option<Vec<Label>>,
}

impl CardUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn due_date(mut self, due_date: Option<NaiveDate>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn labels(mut self, labels: Vec<Label>) -> Self {
        self.labels = Some(labels);
        self
    }

    /// Replaces the labels with those parsed from comma-separated text
    pub fn label_text(self, text: &str, color: &str) -> Self {
        self.labels(parse_labels(text, color))
    }
}
