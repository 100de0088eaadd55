//! Texts delivered to the chat.

use std::fmt::Display;

use crate::model::HomeworkStatus;

/// Prefix distinguishing failure notifications from status updates.
pub const FAILURE_PREFIX: &str = "Сбой в работе программы: ";

/// Status update: `Изменился статус проверки работы "<name>". <verdict>`.
pub fn status_changed(homework_name: &str, status: HomeworkStatus) -> String {
    format!(
        "Изменился статус проверки работы \"{homework_name}\". {}",
        status.verdict()
    )
}

/// Failure notification sent when a cycle aborts.
pub fn program_failure(error: impl Display) -> String {
    format!("{FAILURE_PREFIX}{error}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_text_is_prefixed() {
        assert_eq!(
            program_failure("boom"),
            "Сбой в работе программы: boom"
        );
    }

    #[test]
    fn status_text_quotes_name() {
        let text = status_changed("hw", HomeworkStatus::Reviewing);
        assert_eq!(
            text,
            "Изменился статус проверки работы \"hw\". Работа взята на проверку ревьюером."
        );
    }
}
