use std::collections::BTreeMap;

use crate::modules::course_registrations::core::evolve::evolve;
use crate::modules::course_registrations::core::record::RegistrationRecord;
use crate::modules::course_registrations::core::state::CurrentRegistrationState;

fn fold_by_participant(
    records: &[RegistrationRecord],
) -> BTreeMap<&str, CurrentRegistrationState<'_>> {
    let mut states: BTreeMap<&str, CurrentRegistrationState<'_>> = BTreeMap::new();
    for record in records {
        let state = states.entry(record.participant_name.as_str()).or_default();
        *state = evolve(*state, record);
    }
    states
}

/// The latest record of every participant, keyed by participant name.
///
/// Library entry point for callers that need the current record itself rather
/// than only the names. Ties on the latest timestamp keep the record seen first.
pub fn current_registrations(
    records: &[RegistrationRecord],
) -> BTreeMap<String, RegistrationRecord> {
    fold_by_participant(records)
        .into_iter()
        .filter_map(|(name, state)| {
            state
                .record()
                .map(|record| (name.to_string(), record.clone()))
        })
        .collect()
}

/// Names of the participants whose latest registration is an enrolment.
///
/// Records may arrive in any order. Names are unique and sorted ascending.
pub fn current_valid_participant_names(records: &[RegistrationRecord]) -> Vec<String> {
    fold_by_participant(records)
        .into_iter()
        .filter(|(_, state)| state.is_valid())
        .map(|(name, _)| name.to_string())
        .collect()
}
