use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::gateway::IdentityService;
use super::state::{AuthFlow, AuthState, Identity, BLANK_CREDENTIALS, BLANK_SIGN_UP_FIELDS};

/// Handle to a sign-in or sign-up attempt.
#[derive(Debug)]
pub enum AuthTask {
    /// Rejected before reaching the provider; the state already holds the error.
    Rejected,
    /// The provider call is running on the tokio runtime. Its output is the
    /// display-name update spawned after a successful sign-up, if any.
    Pending(JoinHandle<Option<JoinHandle<()>>>),
}

impl AuthTask {
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected)
    }

    /// Waits until the attempt has written its final state. A display-name
    /// update still in flight keeps running detached.
    pub async fn settled(self) {
        let _ = self.join_attempt().await;
    }

    /// Like [`AuthTask::settled`], then also waits for the display-name update.
    pub async fn finished(self) {
        if let Some(follow_up) = self.join_attempt().await {
            if let Err(err) = follow_up.await {
                warn!(error = %err, "display name task aborted");
            }
        }
    }

    async fn join_attempt(self) -> Option<JoinHandle<()>> {
        let Self::Pending(handle) = self else {
            return None;
        };
        match handle.await {
            Ok(follow_up) => follow_up,
            Err(err) => {
                warn!(error = %err, "authentication task aborted");
                None
            }
        }
    }
}

/// Terminal result handed to the presentation layer exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    SignedIn(Identity),
    Failed(String),
}

/// Observable authentication state driven by sign-in/sign-up requests.
///
/// Each accepted request spawns one task against the identity provider.
/// Overlapping requests are not serialised: whichever task finishes last
/// decides the final state.
#[derive(Debug, Clone)]
pub struct AuthSession {
    identity: Arc<dyn IdentityService>,
    state: Arc<watch::Sender<AuthState>>,
}

impl AuthSession {
    pub fn new(identity: Arc<dyn IdentityService>) -> Self {
        let (state, _) = watch::channel(AuthState::Idle);
        Self {
            identity,
            state: Arc::new(state),
        }
    }

    pub fn state(&self) -> AuthState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }

    /// Outside a tokio runtime the attempt fails with the flow's fallback message.
    pub fn sign_in(&self, email: &str, password: &str) -> AuthTask {
        if email.trim().is_empty() || password.trim().is_empty() {
            return self.reject(AuthFlow::SignIn, BLANK_CREDENTIALS);
        }

        self.launch(AuthFlow::SignIn, email, password, None)
    }

    /// Creates the account and reports `Success` right away. `name` is then set
    /// as the display name on a best-effort basis; when it lands while that
    /// same `Success` is still current, the state is republished with it.
    pub fn sign_up(&self, email: &str, password: &str, name: &str) -> AuthTask {
        if email.trim().is_empty() || password.trim().is_empty() {
            return self.reject(AuthFlow::SignUp, BLANK_CREDENTIALS);
        }
        if name.trim().is_empty() {
            return self.reject(AuthFlow::SignUp, BLANK_SIGN_UP_FIELDS);
        }

        self.launch(AuthFlow::SignUp, email, password, Some(name.to_string()))
    }

    pub fn reset_state(&self) {
        self.state.send_replace(AuthState::Idle);
    }

    /// Takes a `Success`/`Error` state and returns to `Idle` in one step.
    ///
    /// Returns `None` while idle or loading, so repeated calls after the first
    /// yield nothing.
    pub fn acknowledge(&self) -> Option<AuthOutcome> {
        let mut outcome = None;
        self.state.send_if_modified(|state| {
            if !state.is_terminal() {
                return false;
            }
            outcome = match std::mem::take(state) {
                AuthState::Success(user) => Some(AuthOutcome::SignedIn(user)),
                AuthState::Error(message) => Some(AuthOutcome::Failed(message)),
                AuthState::Idle | AuthState::Loading => None,
            };
            true
        });
        outcome
    }

    /// Signs out with the provider and returns to `Idle` regardless of its answer.
    pub async fn sign_out(&self) {
        if let Err(err) = self.identity.sign_out().await {
            warn!(error = %err, "identity provider sign-out failed");
        }
        self.state.send_replace(AuthState::Idle);
        info!("signed out");
    }

    fn reject(&self, flow: AuthFlow, message: &str) -> AuthTask {
        debug!(flow = flow.label(), "rejected blank credentials");
        self.state.send_replace(AuthState::Error(message.to_string()));
        AuthTask::Rejected
    }

    fn launch(
        &self,
        flow: AuthFlow,
        email: &str,
        password: &str,
        display_name: Option<String>,
    ) -> AuthTask {
        let Ok(runtime) = Handle::try_current() else {
            warn!(flow = flow.label(), "no tokio runtime to run the attempt on");
            let message = flow.failure_message().to_string();
            self.state.send_replace(AuthState::Error(message));
            return AuthTask::Rejected;
        };

        if self.state.borrow().is_loading() {
            debug!(flow = flow.label(), "attempt started while another is in flight");
        }
        self.state.send_replace(AuthState::Loading);

        let identity = Arc::clone(&self.identity);
        let state = Arc::clone(&self.state);
        let email = email.to_string();
        let password = password.to_string();

        let handle = runtime.spawn(async move {
            let next = run_attempt(identity.as_ref(), flow, &email, &password).await;
            info!(
                flow = flow.label(),
                state = next.label(),
                "authentication attempt settled"
            );

            let follow_up = match (&next, display_name) {
                (AuthState::Success(user), Some(name)) => Some((user.clone(), name)),
                _ => None,
            };
            state.send_replace(next);

            follow_up.map(|(user, name)| {
                tokio::spawn(apply_display_name(identity, state, user, name))
            })
        });

        AuthTask::Pending(handle)
    }
}

async fn run_attempt(
    identity: &dyn IdentityService,
    flow: AuthFlow,
    email: &str,
    password: &str,
) -> AuthState {
    let result = match flow {
        AuthFlow::SignIn => identity.sign_in_with_email_password(email, password).await,
        AuthFlow::SignUp => {
            identity
                .create_user_with_email_password(email, password)
                .await
        }
    };

    match result {
        Ok(Some(user)) => AuthState::Success(user),
        Ok(None) => {
            warn!(flow = flow.label(), "identity provider returned no user");
            AuthState::Error(flow.null_user_message().to_string())
        }
        Err(err) => {
            warn!(flow = flow.label(), error = %err, "identity provider call failed");
            let message = err.remote_message().unwrap_or(flow.failure_message());
            AuthState::Error(message.to_string())
        }
    }
}

/// The new account stands whether or not the name update lands.
async fn apply_display_name(
    identity: Arc<dyn IdentityService>,
    state: Arc<watch::Sender<AuthState>>,
    user: Identity,
    name: String,
) {
    if let Err(err) = identity.update_display_name(&user, &name).await {
        warn!(uid = %user.uid, error = %err, "display name update failed");
        return;
    }

    let named = Identity {
        display_name: Some(name),
        ..user.clone()
    };
    let republished = state.send_if_modified(|current| {
        if !matches!(&*current, AuthState::Success(signed_in) if *signed_in == user) {
            return false;
        }
        *current = AuthState::Success(named);
        true
    });
    if !republished {
        debug!(uid = %user.uid, "session moved on before the display name landed");
    }
}
