use crate::modules::course_registrations::core::record::RegistrationRecord;

/// The registration that currently counts for one participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CurrentRegistrationState<'a> {
    #[default]
    None,
    Current {
        record: &'a RegistrationRecord,
    },
}

impl<'a> CurrentRegistrationState<'a> {
    pub fn record(&self) -> Option<&'a RegistrationRecord> {
        match *self {
            CurrentRegistrationState::None => None,
            CurrentRegistrationState::Current { record } => Some(record),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.record()
            .is_some_and(|record| record.registration_status.is_valid())
    }
}
