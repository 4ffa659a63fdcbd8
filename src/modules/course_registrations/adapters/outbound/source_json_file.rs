// Registration source backed by a JSON file holding an array of records.

use crate::modules::course_registrations::core::record::RegistrationRecord;
use crate::modules::course_registrations::use_cases::list_current_valid_participants::source_port::{
    RegistrationSource, SourceError,
};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct JsonFileRegistrationSource {
    path: PathBuf,
}

impl JsonFileRegistrationSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl RegistrationSource for JsonFileRegistrationSource {
    async fn load(&self) -> Result<Vec<RegistrationRecord>, SourceError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| SourceError::Io(format!("{}: {e}", self.path.display())))?;

        let records: Vec<RegistrationRecord> = serde_json::from_slice(&bytes)
            .map_err(|e| SourceError::Malformed(format!("{}: {e}", self.path.display())))?;

        tracing::debug!(
            path = %self.path.display(),
            records = records.len(),
            "loaded registration records"
        );
        Ok(records)
    }
}
