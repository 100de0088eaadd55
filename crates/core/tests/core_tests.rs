//! Integration tests for the core crate.

use homework_core::message::status_changed;
use homework_core::model::HomeworkStatus;

#[test]
fn test_homework_status_serde() {
    let approved = HomeworkStatus::Approved;
    let serialized = serde_json::to_string(&approved).unwrap();
    assert_eq!(serialized, r#""approved""#);
    let deserialized: HomeworkStatus = serde_json::from_str(&serialized).unwrap();
    assert_eq!(deserialized, approved);

    assert!(serde_json::from_str::<HomeworkStatus>(r#""archived""#).is_err());
}

#[test]
fn test_codes_round_trip_through_table() {
    for status in HomeworkStatus::ALL {
        assert_eq!(HomeworkStatus::from_code(status.code()), Some(status));
        let wire = serde_json::to_string(&status).unwrap();
        assert_eq!(wire, format!("\"{}\"", status.code()));
    }
    assert_eq!(HomeworkStatus::from_code("Approved"), None);
    assert_eq!(HomeworkStatus::from_code(""), None);
}

#[test]
fn test_verdicts() {
    assert_eq!(
        status_changed("hw1", HomeworkStatus::Approved),
        "Изменился статус проверки работы \"hw1\". Работа проверена: ревьюеру всё понравилось. Ура!"
    );
    assert_eq!(
        status_changed("hw1", HomeworkStatus::Rejected),
        "Изменился статус проверки работы \"hw1\". Работа проверена: у ревьюера есть замечания."
    );
}
