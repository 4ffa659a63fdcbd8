// In memory registration source.
//
// Purpose
// - Exercise the handler without touching the filesystem.
// - Simulate an unavailable source with toggle_offline.

use crate::modules::course_registrations::core::record::RegistrationRecord;
use crate::modules::course_registrations::use_cases::list_current_valid_participants::source_port::{
    RegistrationSource, SourceError,
};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryRegistrationSource {
    records: RwLock<Vec<RegistrationRecord>>,
    is_offline: bool,
}

impl InMemoryRegistrationSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<RegistrationRecord>) -> Self {
        Self {
            records: RwLock::new(records),
            is_offline: false,
        }
    }

    pub async fn push(&self, record: RegistrationRecord) {
        self.records.write().await.push(record);
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }
}

#[async_trait::async_trait]
impl RegistrationSource for InMemoryRegistrationSource {
    async fn load(&self) -> Result<Vec<RegistrationRecord>, SourceError> {
        if self.is_offline {
            return Err(SourceError::Backend("Registration source offline".into()));
        }

        Ok(self.records.read().await.clone())
    }
}
