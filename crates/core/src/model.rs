//! Status table and the submission record shape.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Review status of a homework submission.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum HomeworkStatus {
    /// Reviewed and accepted.
    Approved,
    /// Taken for review.
    Reviewing,
    /// Reviewed, with remarks to address.
    Rejected,
}

impl HomeworkStatus {
    /// Every known status, in table order.
    pub const ALL: [HomeworkStatus; 3] = [Self::Approved, Self::Reviewing, Self::Rejected];

    /// Parses the wire value used by the review API.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "approved" => Some(Self::Approved),
            "reviewing" => Some(Self::Reviewing),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Wire value used by the review API.
    pub fn code(self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Reviewing => "reviewing",
            Self::Rejected => "rejected",
        }
    }

    /// Human-readable verdict sent to the chat.
    pub fn verdict(self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

/// One submission as returned by the review API.
///
/// Kept as the raw JSON object: the API contract is external, so field
/// presence is checked when the record is turned into a message.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionRecord(Map<String, Value>);

impl SubmissionRecord {
    /// Wraps a JSON object.
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Raw field lookup.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Underlying JSON object.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}
