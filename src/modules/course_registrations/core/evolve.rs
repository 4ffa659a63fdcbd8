use crate::modules::course_registrations::core::record::RegistrationRecord;
use crate::modules::course_registrations::core::state::CurrentRegistrationState;

/// Fold one record of a participant into that participant's current state.
///
/// A record replaces the current one only when it is strictly later, so on equal
/// timestamps the record seen first stays current.
pub fn evolve<'a>(
    state: CurrentRegistrationState<'a>,
    record: &'a RegistrationRecord,
) -> CurrentRegistrationState<'a> {
    match state {
        CurrentRegistrationState::None => CurrentRegistrationState::Current { record },
        CurrentRegistrationState::Current { record: current }
            if record.registration_date > current.registration_date =>
        {
            CurrentRegistrationState::Current { record }
        }
        state => state,
    }
}
