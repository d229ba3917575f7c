//! Sign-in/sign-up lifecycle against an external identity provider.

pub mod gateway;
pub mod registration;
mod session;
pub mod state;

pub use gateway::{IdentityError, IdentityService};
pub use registration::{AccountType, RegistrationField, RegistrationForm, SignUpRequest};
pub use session::{AuthOutcome, AuthSession, AuthTask};
pub use state::{AuthState, Identity};
