//! Vacancy drafts published to the document store.

pub mod draft;
mod publisher;
pub mod store;

pub use draft::{JobVacancy, VacancyDraft, NEGOTIABLE_SALARY};
pub use publisher::{PublishError, VacancyPublisher};
pub use store::{DocumentId, DocumentStore, StoreError};
