use serde_json::json;
use skilltrack_core::{
    decode_goals, decode_goals_str, decode_skills, decode_skills_str, parse_timestamp,
    BatchError, RecordError, RecordId,
};

#[test]
fn skills_decode_with_string_and_integer_ids() {
    let payload = json!([
        { "id": "65a1", "name": "Rust", "category": "Backend", "level": 2,
          "lastUpdated": "2025-01-02T10:00:00.000Z" },
        { "id": 7, "name": "Sketching", "category": null, "level": 1 }
    ]);

    let decoded = decode_skills(&payload).unwrap();

    assert!(decoded.rejected.is_empty());
    assert_eq!(decoded.items[0].id, RecordId::Text("65a1".to_string()));
    assert_eq!(
        decoded.items[0].last_updated,
        Some(parse_timestamp("2025-01-02T10:00:00Z").unwrap())
    );
    assert_eq!(decoded.items[1].id, RecordId::Int(7));
    assert_eq!(decoded.items[1].category, "");
    assert_eq!(decoded.items[1].last_updated, None);
}

#[test]
fn unknown_skill_level_is_kept_for_the_caller_to_flag() {
    let decoded = decode_skills(&json!([
        { "id": 1, "name": "Go", "category": "backend", "level": 9 }
    ]))
    .unwrap();

    assert_eq!(decoded.items.len(), 1);
    assert_eq!(decoded.items[0].level, 9);
}

#[test]
fn malformed_skills_are_rejected_individually() {
    let payload = json!([
        { "id": 1, "name": "  ", "category": "x", "level": 1 },
        { "id": 2, "name": "Ok", "category": "x", "level": 1 },
        { "id": 3, "name": "No level", "category": "x" },
        { "id": 4, "name": "Bad date", "category": "x", "level": 2, "lastUpdated": "nope" },
        "not an object"
    ]);

    let decoded = decode_skills(&payload).unwrap();

    assert_eq!(decoded.items.len(), 1);
    assert_eq!(decoded.items[0].id, RecordId::Int(2));
    assert_eq!(
        decoded.rejected.iter().map(RecordError::index).collect::<Vec<_>>(),
        vec![0, 2, 3, 4]
    );
    assert_eq!(decoded.skipped(), 4);

    let RecordError::InvalidRecord { id, reason, .. } = &decoded.rejected[2];
    assert_eq!(id.as_deref(), Some("4"));
    assert!(reason.contains("lastUpdated"), "unexpected reason: {reason}");
}

#[test]
fn goals_require_title_description_and_date() {
    let payload = json!([
        { "id": "g1", "title": "", "description": "d", "targetDate": "2025-01-01" },
        { "id": "g2", "title": "t", "description": " ", "targetDate": "2025-01-01" },
        { "id": "g3", "title": "t", "description": "d" },
        { "id": "g4", "title": "t", "description": "d", "targetDate": "2025-01-01" }
    ]);

    let decoded = decode_goals(&payload).unwrap();

    assert_eq!(decoded.items.len(), 1);
    assert_eq!(decoded.items[0].id, RecordId::from("g4"));
    assert_eq!(decoded.rejected.len(), 3);
}

#[test]
fn non_array_payload_is_a_batch_error() {
    let err = decode_goals(&json!({ "goals": [] })).unwrap_err();
    assert!(matches!(err, BatchError::NotAnArray { found: "object" }));

    let err = decode_skills(&serde_json::Value::Null).unwrap_err();
    assert!(matches!(err, BatchError::NotAnArray { found: "null" }));
}

#[test]
fn string_entry_points_report_invalid_json() {
    assert!(matches!(
        decode_skills_str("[{"),
        Err(BatchError::Json(_))
    ));
    let decoded = decode_goals_str("[]").unwrap();
    assert!(decoded.items.is_empty() && decoded.rejected.is_empty());
}

#[test]
fn record_error_message_names_index_and_id() {
    let decoded = decode_goals(&json!([
        { "id": 42, "title": "t", "description": "d", "targetDate": "later" }
    ]))
    .unwrap();

    let message = decoded.rejected[0].to_string();
    assert!(message.contains("index 0"), "{message}");
    assert!(message.contains("id=42"), "{message}");
}

#[test]
fn integral_float_levels_decode_and_fractional_ones_are_rejected() {
    let payload = json!([
        { "id": 1, "name": "Rust", "category": "backend", "level": 2.0 },
        { "id": 2, "name": "Go", "category": "backend", "level": 2.5 },
        { "id": 3, "name": "Zig", "category": "backend", "level": "3" },
        { "id": 4, "name": "C", "category": "backend", "level": 9.0 }
    ]);

    let decoded = decode_skills(&payload).unwrap();

    assert_eq!(
        decoded.items.iter().map(|s| (s.id.clone(), s.level)).collect::<Vec<_>>(),
        vec![(RecordId::Int(1), 2), (RecordId::Int(4), 9)]
    );
    assert_eq!(
        decoded.rejected.iter().map(RecordError::index).collect::<Vec<_>>(),
        vec![1, 2]
    );
    let RecordError::InvalidRecord { reason, .. } = &decoded.rejected[0];
    assert!(reason.contains("level is not an integer"), "unexpected reason: {reason}");
}
