use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;
use talent_board::workflows::auth::{Identity, IdentityError, IdentityService};
use talent_board::workflows::profile::{FilePicker, PickedFile};
use talent_board::workflows::vacancy::{DocumentId, DocumentStore, StoreError};

#[derive(Debug, Clone)]
struct Account {
    password: String,
    identity: Identity,
}

/// Process-local identity provider used by the console.
#[derive(Debug, Default, Clone)]
pub(crate) struct InMemoryIdentityService {
    accounts: Arc<Mutex<HashMap<String, Account>>>,
    sequence: Arc<AtomicU64>,
}

#[async_trait]
impl IdentityService for InMemoryIdentityService {
    async fn sign_in_with_email_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<Identity>, IdentityError> {
        let guard = self.accounts.lock().expect("accounts mutex poisoned");
        match guard.get(email) {
            Some(account) if account.password == password => Ok(Some(account.identity.clone())),
            Some(_) => Err(IdentityError::Rejected(
                "The password is invalid or the user does not have a password.".to_string(),
            )),
            None => Err(IdentityError::Rejected(
                "There is no user record corresponding to this identifier.".to_string(),
            )),
        }
    }

    async fn create_user_with_email_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<Identity>, IdentityError> {
        let mut guard = self.accounts.lock().expect("accounts mutex poisoned");
        if guard.contains_key(email) {
            return Err(IdentityError::Rejected(
                "The email address is already in use by another account.".to_string(),
            ));
        }

        let id = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        let identity = Identity {
            uid: format!("user-{id:04}"),
            email: email.to_string(),
            display_name: None,
        };
        guard.insert(
            email.to_string(),
            Account {
                password: password.to_string(),
                identity: identity.clone(),
            },
        );
        Ok(Some(identity))
    }

    async fn update_display_name(
        &self,
        identity: &Identity,
        name: &str,
    ) -> Result<(), IdentityError> {
        let mut guard = self.accounts.lock().expect("accounts mutex poisoned");
        let account = guard
            .get_mut(&identity.email)
            .ok_or(IdentityError::Unavailable)?;
        account.identity.display_name = Some(name.to_string());
        Ok(())
    }

    async fn sign_out(&self) -> Result<(), IdentityError> {
        Ok(())
    }
}

/// Append-only collections kept in memory.
#[derive(Debug, Default, Clone)]
pub(crate) struct InMemoryDocumentStore {
    collections: Arc<Mutex<HashMap<String, Vec<(DocumentId, Value)>>>>,
}

impl InMemoryDocumentStore {
    pub(crate) fn documents(&self, collection: &str) -> Vec<(DocumentId, Value)> {
        self.collections
            .lock()
            .expect("store mutex poisoned")
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn append(&self, collection: &str, record: Value) -> Result<DocumentId, StoreError> {
        let mut guard = self.collections.lock().expect("store mutex poisoned");
        let documents = guard.entry(collection.to_string()).or_default();
        let id = DocumentId(format!("{collection}-{:04}", documents.len() + 1));
        documents.push((id.clone(), record));
        Ok(id)
    }
}

/// Picker that always "selects" the configured file.
#[derive(Debug, Clone)]
pub(crate) struct FixedFilePicker {
    pub(crate) file_name: Option<String>,
}

#[async_trait]
impl FilePicker for FixedFilePicker {
    async fn pick_document(&self) -> Option<PickedFile> {
        self.file_name.clone().map(|display_name| PickedFile { display_name })
    }
}
