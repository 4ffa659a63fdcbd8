use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RegistrationStatus {
    Enrolled,
    Cancelled,
}

impl RegistrationStatus {
    /// Only an enrolment counts as a valid registration.
    pub fn is_valid(self) -> bool {
        match self {
            RegistrationStatus::Enrolled => true,
            RegistrationStatus::Cancelled => false,
        }
    }
}
