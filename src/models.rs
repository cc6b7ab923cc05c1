// src/models.rs
//
// Rows are read with their storage column names (`state_id`) and serialized
// to the API's camelCase names (`stateId`) by serde.
use crate::errors::{PortalError, Result};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Largest accepted case counter. Keeps per-state sums inside `i64`.
pub const MAX_COUNTER: i64 = i32::MAX as i64;

/// Stored credential. Never serialized.
#[derive(FromRow, Clone)]
pub struct User {
    pub username: String,
    pub password: String,
}

#[derive(FromRow, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct State {
    pub state_id: i64,
    pub state_name: String,
    pub population: i64,
}

#[derive(FromRow, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct District {
    pub district_id: i64,
    pub district_name: String,
    pub state_id: i64,
    pub cases: i64,
    pub cured: i64,
    pub active: i64,
    pub deaths: i64,
}

/// Per-state totals summed over its districts.
#[derive(FromRow, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StateStats {
    pub total_cases: i64,
    pub total_cured: i64,
    pub total_active: i64,
    pub total_deaths: i64,
}

/// Request body for creating or replacing a district.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DistrictPayload {
    pub district_name: String,
    pub state_id: i64,
    pub cases: i64,
    pub cured: i64,
    pub active: i64,
    pub deaths: i64,
}

impl DistrictPayload {
    pub fn validate(&self) -> Result<()> {
        if self.district_name.trim().is_empty() {
            return Err(PortalError::Validation("districtName must not be empty".to_string()));
        }
        require_positive_id(self.state_id, "stateId")?;

        let counters = [
            ("cases", self.cases),
            ("cured", self.cured),
            ("active", self.active),
            ("deaths", self.deaths),
        ];
        for (field, value) in counters {
            if value < 0 {
                return Err(PortalError::Validation(format!(
                    "{} must be a non-negative integer, got {}",
                    field, value
                )));
            }
            if value > MAX_COUNTER {
                return Err(PortalError::Validation(format!(
                    "{} must not exceed {}, got {}",
                    field, MAX_COUNTER, value
                )));
            }
        }
        Ok(())
    }
}

#[derive(Deserialize, Debug)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub jwt_token: String,
}

/// Rejects ids that cannot name a row.
pub fn require_positive_id(value: i64, field: &str) -> Result<i64> {
    if value > 0 {
        Ok(value)
    } else {
        Err(PortalError::Validation(format!(
            "{} must be a positive integer, got {}",
            field, value
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload() -> DistrictPayload {
        DistrictPayload {
            district_name: "Pune".to_string(),
            state_id: 1,
            cases: 10,
            cured: 5,
            active: 3,
            deaths: 2,
        }
    }

    #[test]
    fn test_state_serializes_camel_case() {
        let state = State {
            state_id: 1,
            state_name: "Andaman and Nicobar Islands".to_string(),
            population: 380581,
        };
        assert_eq!(
            serde_json::to_value(&state).unwrap(),
            json!({"stateId": 1, "stateName": "Andaman and Nicobar Islands", "population": 380581})
        );
    }

    #[test]
    fn test_payload_reads_camel_case() {
        let parsed: DistrictPayload = serde_json::from_value(json!({
            "districtName": "Bagalkot",
            "stateId": 3,
            "cases": 2323,
            "cured": 2000,
            "active": 315,
            "deaths": 8
        }))
        .unwrap();
        assert_eq!(parsed.district_name, "Bagalkot");
        assert_eq!(parsed.state_id, 3);
        assert_eq!(parsed.deaths, 8);
    }

    #[test]
    fn test_payload_rejects_wrong_types() {
        let parsed = serde_json::from_value::<DistrictPayload>(json!({
            "districtName": "Bagalkot",
            "stateId": "3; DROP TABLE district",
            "cases": 1, "cured": 1, "active": 0, "deaths": 0
        }));
        assert!(parsed.is_err());
    }

    #[test]
    fn test_validate_accepts_well_formed_payload() {
        assert!(payload().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_fields() {
        let mut blank = payload();
        blank.district_name = "  ".to_string();
        assert!(matches!(blank.validate(), Err(PortalError::Validation(_))));

        let mut bad_state = payload();
        bad_state.state_id = 0;
        assert!(matches!(bad_state.validate(), Err(PortalError::Validation(_))));

        let mut negative = payload();
        negative.deaths = -1;
        let err = negative.validate().unwrap_err();
        assert!(err.to_string().contains("deaths"));

        let mut huge = payload();
        huge.cases = MAX_COUNTER + 1;
        assert!(matches!(huge.validate(), Err(PortalError::Validation(_))));

        let mut at_limit = payload();
        at_limit.cases = MAX_COUNTER;
        assert!(at_limit.validate().is_ok());
    }

    #[test]
    fn test_require_positive_id() {
        assert_eq!(require_positive_id(7, "districtId").unwrap(), 7);
        assert!(require_positive_id(-7, "districtId").is_err());
    }
}
