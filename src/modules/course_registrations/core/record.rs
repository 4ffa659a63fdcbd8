use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::course_registrations::core::status::RegistrationStatus;

/// One registration submitted by a course participant.
///
/// A participant is identified by name only, so the same name may appear on many
/// records (enrol, cancel, enrol again, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRecord {
    pub participant_name: String,
    pub registration_date: DateTime<Utc>,
    pub registration_status: RegistrationStatus,
}

impl RegistrationRecord {
    pub fn new(
        participant_name: impl Into<String>,
        registration_date: DateTime<Utc>,
        registration_status: RegistrationStatus,
    ) -> Self {
        Self {
            participant_name: participant_name.into(),
            registration_date,
            registration_status,
        }
    }
}
