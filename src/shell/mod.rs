// Composition root for the course_registrations batch run.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the concrete registration source.
// - Wire it into the list_current_valid_participants handler and print the result.

pub mod config;
pub mod output;
