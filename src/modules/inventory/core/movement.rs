use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Ledger entry for a transfer and/or status change. Append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movement {
    pub id: String,
    pub asset_id: String,
    /// Department the asset held when the movement was recorded.
    pub from_department_id: String,
    pub to_department_id: String,
    pub date: DateTime<Utc>,
    pub reason: String,
}

#[cfg(test)]
mod movement_tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    #[rstest]
    fn it_should_read_a_browser_iso_timestamp() {
        let raw = r#"{"id":"m1","assetId":"a1","fromDepartmentId":"1","toDepartmentId":"3","date":"2024-05-02T13:45:00.000Z","reason":"Envio para reparo"}"#;
        let movement: Movement = serde_json::from_str(raw).unwrap();
        assert_eq!(
            movement.date,
            Utc.with_ymd_and_hms(2024, 5, 2, 13, 45, 0).unwrap()
        );
        assert_eq!(movement.from_department_id, "1");
        assert_eq!(movement.to_department_id, "3");

        let again: Movement =
            serde_json::from_str(&serde_json::to_string(&movement).unwrap()).unwrap();
        assert_eq!(again, movement);
    }
}
