//! Task entity and related types.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{TasksError, TasksResult};

/// Wire and input format of a deadline
pub const DEADLINE_FORMAT: &str = "%Y-%m-%d";

/// Format used when a deadline is shown to a person
pub const DEADLINE_DISPLAY_FORMAT: &str = "%d.%m.%Y";

/// Uppercase the first character and lowercase the rest.
///
/// The first character is uppercased, not titlecased, so digraphs such as
/// `ǆ` become `Ǆ` rather than `ǅ`.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Parse an ISO 8601 `YYYY-MM-DD` deadline.
///
/// Only the exact zero-padded ten-character shape is accepted.
pub fn parse_deadline(value: &str) -> TasksResult<NaiveDate> {
    let invalid = || TasksError::InvalidDeadline {
        value: value.to_string(),
    };
    if !is_iso_date_shape(value) {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(value, DEADLINE_FORMAT).map_err(|_| invalid())
}

fn is_iso_date_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(idx, byte)| match idx {
            4 | 7 => *byte == b'-',
            _ => byte.is_ascii_digit(),
        })
}

fn allowed_values(values: impl IntoIterator<Item = &'static str>) -> String {
    values.into_iter().collect::<Vec<_>>().join(", ")
}

/// Task priority levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Self; 3] = [Self::High, Self::Medium, Self::Low];

    /// Display value, also used in the persisted record
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "Высокий",
            Self::Medium => "Средний",
            Self::Low => "Низкий",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = TasksError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = capitalize(s);
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == normalized)
            .ok_or_else(|| TasksError::InvalidPriority {
                priority: s.to_string(),
                allowed: allowed_values(Self::ALL.map(Self::as_str)),
            })
    }
}

impl TryFrom<String> for Priority {
    type Error = TasksError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Priority> for String {
    fn from(priority: Priority) -> Self {
        priority.as_str().to_string()
    }
}

/// Task status values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "String", into = "String")]
pub enum Status {
    Done,
    #[default]
    InWork,
}

impl Status {
    pub const ALL: [Self; 2] = [Self::Done, Self::InWork];

    /// Display value, also used in the persisted record
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Done => "Выполнена",
            Self::InWork => "Не выполнена",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = TasksError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = capitalize(s);
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| TasksError::InvalidStatus {
                status: s.to_string(),
                allowed: allowed_values(Self::ALL.map(Self::as_str)),
            })
    }
}

impl TryFrom<String> for Status {
    type Error = TasksError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Status> for String {
    fn from(status: Status) -> Self {
        status.as_str().to_string()
    }
}

mod deadline_serde {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    use super::{parse_deadline, DEADLINE_FORMAT};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(DEADLINE_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_deadline(&raw).map_err(de::Error::custom)
    }
}

/// A single unit of tracked work.
///
/// The serde shape of this struct is the persisted record:
/// `id, title, description, category, deadline, priority, status`.
/// Fields are crate-visible so that only the manager can mutate them;
/// `id`, `category` and `deadline` never change after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Task {
    pub(crate) id: u64,
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) category: String,
    #[serde(with = "deadline_serde")]
    pub(crate) deadline: NaiveDate,
    pub(crate) priority: Priority,
    pub(crate) status: Status,
}

impl Task {
    /// Create an in-work task from already validated values
    pub fn new(
        id: u64,
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        deadline: NaiveDate,
        priority: Priority,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            category: category.into(),
            deadline,
            priority,
            status: Status::default(),
        }
    }

    /// Replace the status
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn deadline(&self) -> NaiveDate {
        self.deadline
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// True if any keyword occurs in the title or description, ignoring case
    pub fn matches_keywords<S: AsRef<str>>(&self, keywords: &[S]) -> bool {
        let title = self.title.to_lowercase();
        let description = self.description.to_lowercase();
        keywords.iter().any(|keyword| {
            let keyword = keyword.as_ref().to_lowercase();
            title.contains(&keyword) || description.contains(&keyword)
        })
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "/*")?;
        writeln!(f, " * Title:       {}", self.title)?;
        writeln!(f, " * ID:          {}", self.id)?;
        writeln!(f, " * Description: {}", self.description)?;
        writeln!(f, " * Category:    {}", self.category)?;
        writeln!(
            f,
            " * Deadline:    {}",
            self.deadline.format(DEADLINE_DISPLAY_FORMAT)
        )?;
        writeln!(f, " * Priority:    {}", self.priority)?;
        writeln!(f, " * Status:      {}", self.status)?;
        write!(f, " */")
    }
}
