use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tracing::{info, warn};

use super::draft::VacancyDraft;
use super::store::{DocumentId, DocumentStore, StoreError};
use crate::config::PublishingConfig;
use crate::workflows::auth::Identity;

const SAVE_FAILED: &str = "Erro ao salvar";

#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error("Preencha os campos obrigatórios (*)")]
    MissingRequiredFields,
    #[error("unable to encode vacancy record: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("{}", .0.remote_message().unwrap_or(SAVE_FAILED))]
    Store(#[source] StoreError),
}

/// Validates vacancy drafts and appends them to the vacancy collection.
#[derive(Debug)]
pub struct VacancyPublisher {
    store: Arc<dyn DocumentStore>,
    config: PublishingConfig,
    in_flight: AtomicUsize,
}

impl VacancyPublisher {
    pub fn new(store: Arc<dyn DocumentStore>, config: PublishingConfig) -> Self {
        Self {
            store,
            config,
            in_flight: AtomicUsize::new(0),
        }
    }

    /// True while at least one append is waiting on the store.
    pub fn is_publishing(&self) -> bool {
        self.in_flight.load(Ordering::Acquire) > 0
    }

    pub fn collection(&self) -> &str {
        &self.config.vacancy_collection
    }

    pub async fn publish(
        &self,
        draft: VacancyDraft,
        owner: &Identity,
    ) -> Result<DocumentId, PublishError> {
        if !draft.has_required_fields() {
            return Err(PublishError::MissingRequiredFields);
        }

        let record = draft.into_record(owner.uid.clone());
        let payload = serde_json::to_value(&record)?;

        let _in_flight = InFlight::enter(&self.in_flight);
        match self.store.append(self.collection(), payload).await {
            Ok(id) => {
                info!(
                    collection = self.collection(),
                    document = %id.0,
                    title = %record.title,
                    "vacancy published"
                );
                Ok(id)
            }
            Err(err) => {
                warn!(
                    collection = self.collection(),
                    error = %err,
                    "vacancy publish failed"
                );
                Err(PublishError::Store(err))
            }
        }
    }
}

/// Counts one append as in flight until dropped.
struct InFlight<'a>(&'a AtomicUsize);

impl<'a> InFlight<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::AcqRel);
        Self(counter)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::AcqRel);
    }
}
