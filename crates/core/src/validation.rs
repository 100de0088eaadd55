//! Defensive checks on review API payloads.
//!
//! Every way a payload can be malformed has its own variant so callers and
//! tests can tell which precondition failed.

use serde_json::Value;
use thiserror::Error;

use crate::message;
use crate::model::{HomeworkStatus, SubmissionRecord};
use crate::EpochSecs;

/// Key holding the submissions list.
pub const HOMEWORKS_KEY: &str = "homeworks";
/// Key holding the server time to use as the next cursor.
pub const CURRENT_DATE_KEY: &str = "current_date";
/// Submission name field.
pub const NAME_KEY: &str = "homework_name";
/// Submission status field.
pub const STATUS_KEY: &str = "status";

/// Shape errors of the API response as a whole.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResponseError {
    /// The payload is not a JSON object.
    #[error("response is not a JSON object")]
    NotAnObject,
    /// The `homeworks` key is absent.
    #[error("response has no `homeworks` key")]
    MissingKey,
    /// `homeworks` is present but null.
    #[error("`homeworks` is null")]
    NullField,
    /// `homeworks` is not an array.
    #[error("`homeworks` is not a list")]
    WrongType,
    /// No submissions since the cursor.
    #[error("`homeworks` list is empty")]
    Empty,
    /// The first entry of `homeworks` is not an object.
    #[error("latest submission is not a JSON object")]
    RecordNotAnObject,
}

/// Shape errors of a single submission record.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StatusError {
    /// `homework_name` is absent.
    #[error("submission has no `homework_name` field")]
    MissingName,
    /// `status` is absent.
    #[error("submission has no `status` field")]
    MissingStatus,
    /// `status` is not in the verdict table; carries the raw value.
    #[error("unknown submission status: {0}")]
    UnknownStatus(String),
}

/// Returns the most recent submission (index 0, the API lists newest first).
pub fn extract_latest_submission(response: &Value) -> Result<SubmissionRecord, ResponseError> {
    let Value::Object(fields) = response else {
        return Err(ResponseError::NotAnObject);
    };
    let homeworks = match fields.get(HOMEWORKS_KEY) {
        None => return Err(ResponseError::MissingKey),
        Some(Value::Null) => return Err(ResponseError::NullField),
        Some(Value::Array(items)) => items,
        Some(_) => return Err(ResponseError::WrongType),
    };
    match homeworks.first() {
        None => Err(ResponseError::Empty),
        Some(Value::Object(record)) => Ok(SubmissionRecord::new(record.clone())),
        Some(_) => Err(ResponseError::RecordNotAnObject),
    }
}

/// Builds the status update text for a submission.
pub fn parse_status(record: &SubmissionRecord) -> Result<String, StatusError> {
    let name = record.get(NAME_KEY).ok_or(StatusError::MissingName)?;
    let status = record.get(STATUS_KEY).ok_or(StatusError::MissingStatus)?;

    let status = status
        .as_str()
        .and_then(HomeworkStatus::from_code)
        .ok_or_else(|| StatusError::UnknownStatus(display_value(status)))?;

    Ok(message::status_changed(&display_value(name), status))
}

/// Server time reported alongside the submissions, if it is an integer.
pub fn current_date(response: &Value) -> Option<EpochSecs> {
    response.get(CURRENT_DATE_KEY).and_then(Value::as_i64)
}

// Strings without their JSON quotes, anything else as compact JSON.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn current_date_requires_integer() {
        assert_eq!(current_date(&json!({"current_date": 1000})), Some(1000));
        assert_eq!(current_date(&json!({"current_date": "1000"})), None);
        assert_eq!(current_date(&json!({"homeworks": []})), None);
        assert_eq!(current_date(&json!([1, 2])), None);
    }

    #[test]
    fn non_string_status_is_unknown() {
        let Value::Object(fields) = json!({"homework_name": "hw", "status": 3}) else {
            unreachable!()
        };
        let err = parse_status(&SubmissionRecord::new(fields)).unwrap_err();
        assert_eq!(err, StatusError::UnknownStatus("3".into()));
    }
}
