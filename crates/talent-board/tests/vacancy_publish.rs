use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Weak};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use talent_board::config::PublishingConfig;
use talent_board::workflows::auth::Identity;
use talent_board::workflows::vacancy::{
    DocumentId, DocumentStore, PublishError, StoreError, VacancyDraft, VacancyPublisher,
};
use tokio::sync::Notify;
use tokio::time::timeout;

#[derive(Debug, Default)]
struct FakeStore {
    appended: Mutex<Vec<(String, Value)>>,
    failure: Option<StoreError>,
    saw_publishing_flag: AtomicBool,
    publisher: Mutex<Option<Weak<VacancyPublisher>>>,
    gates: Mutex<HashMap<String, Arc<Notify>>>,
    entered: AtomicUsize,
}

impl FakeStore {
    fn hold(&self, title: &str) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.gates
            .lock()
            .expect("gates mutex")
            .insert(title.to_string(), Arc::clone(&gate));
        gate
    }
}

#[async_trait]
impl DocumentStore for FakeStore {
    async fn append(&self, collection: &str, record: Value) -> Result<DocumentId, StoreError> {
        let flag = self
            .publisher
            .lock()
            .expect("publisher mutex")
            .as_ref()
            .and_then(Weak::upgrade)
            .is_some_and(|publisher| publisher.is_publishing());
        self.saw_publishing_flag.store(flag, Ordering::SeqCst);
        self.entered.fetch_add(1, Ordering::SeqCst);

        let gate = record["title"]
            .as_str()
            .and_then(|title| self.gates.lock().expect("gates mutex").get(title).cloned());
        if let Some(gate) = gate {
            gate.notified().await;
        }

        if let Some(err) = &self.failure {
            return Err(err.clone());
        }

        let mut guard = self.appended.lock().expect("store mutex");
        guard.push((collection.to_string(), record));
        Ok(DocumentId(format!("doc-{}", guard.len())))
    }
}

fn owner() -> Identity {
    Identity {
        uid: "uid-empresa".to_string(),
        email: "rh@empresa.com".to_string(),
        display_name: Some("RH".to_string()),
    }
}

fn draft() -> VacancyDraft {
    VacancyDraft {
        title: "Atendente de Balcão".to_string(),
        description: "Atendimento e caixa".to_string(),
        location: "Quixadá, CE".to_string(),
        contract_type: "CLT".to_string(),
        salary_negotiable: false,
        salary_range: "R$ 1.600 - R$ 1.900".to_string(),
    }
}

fn publisher(store: &Arc<FakeStore>) -> Arc<VacancyPublisher> {
    let handle: Arc<dyn DocumentStore> = store.clone();
    let publisher = Arc::new(VacancyPublisher::new(handle, PublishingConfig::default()));
    *store.publisher.lock().expect("publisher mutex") = Some(Arc::downgrade(&publisher));
    publisher
}

#[tokio::test]
async fn publishes_record_to_vacancy_collection() {
    let store = Arc::new(FakeStore::default());
    let publisher = publisher(&store);

    let id = publisher.publish(draft(), &owner()).await.expect("published");
    assert_eq!(id, DocumentId("doc-1".to_string()));
    assert!(!publisher.is_publishing());
    assert!(store.saw_publishing_flag.load(Ordering::SeqCst));

    let appended = store.appended.lock().expect("store mutex");
    let (collection, record) = &appended[0];
    assert_eq!(collection, "vagas");
    assert_eq!(record["title"], "Atendente de Balcão");
    assert_eq!(record["salaryRange"], "R$ 1.600 - R$ 1.900");
    assert_eq!(record["ownerId"], "uid-empresa");
}

#[tokio::test]
async fn negotiable_salary_is_stored_as_a_combinar() {
    let store = Arc::new(FakeStore::default());
    let publisher = publisher(&store);

    let mut draft = draft();
    draft.salary_negotiable = true;
    publisher.publish(draft, &owner()).await.expect("published");

    let appended = store.appended.lock().expect("store mutex");
    assert_eq!(appended[0].1["salaryRange"], "A combinar");
    assert_eq!(appended[0].1["salaryNegotiable"], true);
}

#[tokio::test]
async fn missing_required_fields_never_reach_the_store() {
    let store = Arc::new(FakeStore::default());
    let publisher = publisher(&store);

    let mut draft = draft();
    draft.description.clear();
    let err = publisher
        .publish(draft, &owner())
        .await
        .expect_err("blank description");

    assert!(matches!(err, PublishError::MissingRequiredFields));
    assert_eq!(err.to_string(), "Preencha os campos obrigatórios (*)");
    assert!(store.appended.lock().expect("store mutex").is_empty());
}

#[tokio::test]
async fn store_failures_surface_their_message_or_fallback() {
    let store = Arc::new(FakeStore {
        failure: Some(StoreError::Rejected("PERMISSION_DENIED".to_string())),
        ..FakeStore::default()
    });
    let err = publisher(&store)
        .publish(draft(), &owner())
        .await
        .expect_err("store rejects");
    assert_eq!(err.to_string(), "PERMISSION_DENIED");

    let store = Arc::new(FakeStore {
        failure: Some(StoreError::Unavailable),
        ..FakeStore::default()
    });
    let publisher = publisher(&store);
    let err = publisher
        .publish(draft(), &owner())
        .await
        .expect_err("store down");
    assert_eq!(err.to_string(), "Erro ao salvar");
    assert!(!publisher.is_publishing());
}

#[tokio::test]
async fn publishing_flag_stays_up_until_every_append_returns() {
    let store = Arc::new(FakeStore::default());
    let first_gate = store.hold("Primeira");
    let second_gate = store.hold("Segunda");
    let publisher = publisher(&store);

    let spawn_publish = |title: &str| {
        let publisher = Arc::clone(&publisher);
        let draft = VacancyDraft {
            title: title.to_string(),
            ..draft()
        };
        tokio::spawn(async move { publisher.publish(draft, &owner()).await })
    };
    let first = spawn_publish("Primeira");
    let second = spawn_publish("Segunda");

    timeout(Duration::from_secs(1), async {
        while store.entered.load(Ordering::SeqCst) < 2 {
            tokio::task::yield_now().await;
        }
    })
    .await
    .expect("both appends reach the store");

    first_gate.notify_one();
    first.await.expect("join").expect("first published");
    assert!(publisher.is_publishing());

    second_gate.notify_one();
    second.await.expect("join").expect("second published");
    assert!(!publisher.is_publishing());
}
