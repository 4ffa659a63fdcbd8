// Shared test fixture for RegistrationRecord.
// Defaults come from json/registration_record.json; timestamps are expressed as
// seconds after that fixture's registration date.

use crate::modules::course_registrations::core::record::RegistrationRecord;
use crate::modules::course_registrations::core::status::RegistrationStatus;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fs;

const BASE_TIMESTAMP_SECS: i64 = 1_700_000_000;

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct RegistrationRecordDto {
    pub participant_name: String,
    pub registration_date: DateTime<Utc>,
    pub registration_status: RegistrationStatus,
}

/// Fixture timestamp `offset_secs` seconds after the base registration date.
pub fn at(offset_secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(BASE_TIMESTAMP_SECS + offset_secs, 0).unwrap()
}

pub fn make_registration_record(
    participant_name: &str,
    offset_secs: i64,
    status: RegistrationStatus,
) -> RegistrationRecord {
    RegistrationRecordBuilder::new()
        .participant_name(participant_name)
        .at(offset_secs)
        .status(status)
        .build()
}

pub struct RegistrationRecordBuilder {
    inner: RegistrationRecord,
}

impl Default for RegistrationRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl RegistrationRecordBuilder {
    pub fn new() -> Self {
        let json_str =
            fs::read_to_string("./src/tests/fixtures/records/json/registration_record.json")
                .unwrap();
        let dto: RegistrationRecordDto = serde_json::from_str(&json_str).unwrap();

        Self {
            inner: RegistrationRecord {
                participant_name: dto.participant_name,
                registration_date: dto.registration_date,
                registration_status: dto.registration_status,
            },
        }
    }

    pub fn participant_name(mut self, v: impl Into<String>) -> Self {
        self.inner.participant_name = v.into();
        self
    }

    pub fn registration_date(mut self, v: DateTime<Utc>) -> Self {
        self.inner.registration_date = v;
        self
    }

    pub fn at(self, offset_secs: i64) -> Self {
        self.registration_date(at(offset_secs))
    }

    pub fn status(mut self, v: RegistrationStatus) -> Self {
        self.inner.registration_status = v;
        self
    }

    pub fn enrolled(self) -> Self {
        self.status(RegistrationStatus::Enrolled)
    }

    pub fn cancelled(self) -> Self {
        self.status(RegistrationStatus::Cancelled)
    }

    pub fn build(self) -> RegistrationRecord {
        self.inner
    }
}

#[cfg(test)]
mod registration_record_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = RegistrationRecordBuilder::default().build();
        assert_eq!(built.participant_name, "participant-fixed-0001");
        assert_eq!(built.registration_date, at(0));
        assert_eq!(built.registration_status, RegistrationStatus::Enrolled);
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = RegistrationRecordBuilder::new()
            .participant_name("Alice")
            .at(42)
            .cancelled()
            .build();

        assert_eq!(custom.participant_name, "Alice");
        assert_eq!(custom.registration_date, at(42));
        assert_eq!(custom.registration_status, RegistrationStatus::Cancelled);
    }

    #[rstest]
    fn make_registration_record_uses_the_builder() {
        let record = make_registration_record("Bob", 3, RegistrationStatus::Enrolled);
        assert_eq!(
            record,
            RegistrationRecord::new("Bob", at(3), RegistrationStatus::Enrolled)
        );
    }
}
