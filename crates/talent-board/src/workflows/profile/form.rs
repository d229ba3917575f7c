use serde::Serialize;
use tracing::{info, warn};

use super::resume::FilePicker;
use crate::workflows::validation::{is_email_shaped, INVALID_EMAIL};

/// Digits in a CPF.
pub const TAX_ID_LENGTH: usize = 11;

const INVALID_TAX_ID: &str = "CPF deve ter 11 dígitos";

/// Profile values accepted by [`ProfileForm::save`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSnapshot {
    pub full_name: String,
    pub email: String,
    pub tax_id: String,
    pub resume_file_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileFormError {
    #[error("profile has invalid fields: {}", .fields.join(", "))]
    Invalid { fields: Vec<&'static str> },
}

/// Applicant profile with field errors derived on every edit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    full_name: String,
    email: String,
    tax_id: String,
    selected_file_name: Option<String>,
    email_error: Option<String>,
    tax_id_error: Option<String>,
}

impl ProfileForm {
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn tax_id(&self) -> &str {
        &self.tax_id
    }

    pub fn selected_file_name(&self) -> Option<&str> {
        self.selected_file_name.as_deref()
    }

    pub fn email_error(&self) -> Option<&str> {
        self.email_error.as_deref()
    }

    pub fn tax_id_error(&self) -> Option<&str> {
        self.tax_id_error.as_deref()
    }

    pub fn set_full_name(&mut self, value: impl Into<String>) {
        self.full_name = value.into();
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
        self.validate_email();
    }

    /// Applies a tax-id edit.
    ///
    /// Input containing anything but ASCII digits is ignored and the field keeps
    /// its previous value. Digit input is cut to [`TAX_ID_LENGTH`]. Returns
    /// whether the edit was accepted.
    pub fn set_tax_id(&mut self, value: &str) -> bool {
        if !value.chars().all(|c| c.is_ascii_digit()) {
            return false;
        }

        self.tax_id = value.chars().take(TAX_ID_LENGTH).collect();
        self.validate_tax_id();
        true
    }

    pub fn select_file(&mut self, display_name: impl Into<String>) {
        self.selected_file_name = Some(display_name.into());
    }

    /// Opens the picker and keeps the chosen file's name. A dismissed picker
    /// leaves any previous selection in place.
    pub async fn attach_resume(&mut self, picker: &dyn FilePicker) -> bool {
        match picker.pick_document().await {
            Some(file) => {
                self.select_file(file.display_name);
                true
            }
            None => false,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.email_error.is_none() && self.tax_id_error.is_none()
    }

    /// Re-validates and returns the profile. Nothing is sent anywhere yet.
    pub fn save(&mut self) -> Result<ProfileSnapshot, ProfileFormError> {
        self.validate_email();
        self.validate_tax_id();

        if !self.is_valid() {
            let mut fields = Vec::new();
            if self.email_error.is_some() {
                fields.push("email");
            }
            if self.tax_id_error.is_some() {
                fields.push("tax_id");
            }
            warn!(?fields, "profile not saved");
            return Err(ProfileFormError::Invalid { fields });
        }

        info!(has_resume = self.selected_file_name.is_some(), "profile saved");
        Ok(ProfileSnapshot {
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            tax_id: self.tax_id.clone(),
            resume_file_name: self.selected_file_name.clone(),
        })
    }

    fn validate_email(&mut self) {
        self.email_error = (!self.email.is_empty() && !is_email_shaped(&self.email))
            .then(|| INVALID_EMAIL.to_string());
    }

    fn validate_tax_id(&mut self) {
        self.tax_id_error = (!self.tax_id.is_empty() && self.tax_id.len() != TAX_ID_LENGTH)
            .then(|| INVALID_TAX_ID.to_string());
    }
}
