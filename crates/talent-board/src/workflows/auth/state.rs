use serde::{Deserialize, Serialize};

pub(crate) const BLANK_CREDENTIALS: &str = "Email e senha não podem estar em branco.";
pub(crate) const BLANK_SIGN_UP_FIELDS: &str = "Nome, email e senha não podem estar em branco.";
pub(crate) const SIGN_IN_NULL_USER: &str = "Login falhou: usuário nulo";
pub(crate) const SIGN_IN_FAILED: &str = "Login falhou";
pub(crate) const SIGN_UP_NULL_USER: &str = "Cadastro falhou: usuário nulo";
pub(crate) const SIGN_UP_FAILED: &str = "Cadastro falhou";

/// Opaque user handle returned by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub uid: String,
    pub email: String,
    pub display_name: Option<String>,
}

/// Lifecycle of the current authentication attempt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthState {
    #[default]
    Idle,
    Loading,
    Success(Identity),
    Error(String),
}

impl AuthState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// `Success` and `Error` stay put until acknowledged or reset.
    pub fn is_terminal(&self) -> bool {
        match self {
            Self::Success(_) | Self::Error(_) => true,
            Self::Idle | Self::Loading => false,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Success(_) => "success",
            Self::Error(_) => "error",
        }
    }
}

/// Which remote operation an attempt runs; selects the fallback messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AuthFlow {
    SignIn,
    SignUp,
}

impl AuthFlow {
    pub(crate) const fn null_user_message(self) -> &'static str {
        match self {
            Self::SignIn => SIGN_IN_NULL_USER,
            Self::SignUp => SIGN_UP_NULL_USER,
        }
    }

    pub(crate) const fn failure_message(self) -> &'static str {
        match self {
            Self::SignIn => SIGN_IN_FAILED,
            Self::SignUp => SIGN_UP_FAILED,
        }
    }

    pub(crate) const fn label(self) -> &'static str {
        match self {
            Self::SignIn => "sign_in",
            Self::SignUp => "sign_up",
        }
    }
}
