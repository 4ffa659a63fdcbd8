// Port for whatever supplies the registration records of one resolution run.
//
// Adapters implement it in adapters::outbound (in memory, JSON file).

use crate::modules::course_registrations::core::record::RegistrationRecord;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SourceError {
    #[error("io error: {0}")]
    Io(String),

    #[error("malformed registration records: {0}")]
    Malformed(String),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait RegistrationSource: Send + Sync {
    async fn load(&self) -> Result<Vec<RegistrationRecord>, SourceError>;
}
