use crate::modules::course_registrations::use_cases::list_current_valid_participants::resolve::current_valid_participant_names;
use crate::modules::course_registrations::use_cases::list_current_valid_participants::source_port::{
    RegistrationSource, SourceError,
};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Source(#[from] SourceError),
}

pub struct ListCurrentValidParticipantsHandler<TSource>
where
    TSource: RegistrationSource + Send + Sync + 'static,
{
    source: Arc<TSource>,
}

impl<TSource> ListCurrentValidParticipantsHandler<TSource>
where
    TSource: RegistrationSource + Send + Sync + 'static,
{
    pub fn new(source: Arc<TSource>) -> Self {
        Self { source }
    }

    #[tracing::instrument(skip(self))]
    pub async fn handle(&self) -> Result<Vec<String>, ApplicationError> {
        let records = self
            .source
            .load()
            .await
            .map_err(ApplicationError::Source)?;

        let names = current_valid_participant_names(&records);
        tracing::info!(
            records = records.len(),
            participants = names.len(),
            "resolved current valid participants"
        );
        Ok(names)
    }
}
