//! Applicant profile form.

mod form;
pub mod resume;

pub use form::{ProfileForm, ProfileFormError, ProfileSnapshot, TAX_ID_LENGTH};
pub use resume::{FilePicker, PickedFile, RESUME_HINT};
