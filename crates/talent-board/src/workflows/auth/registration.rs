use serde::Serialize;

use super::session::{AuthSession, AuthTask};
use crate::config::AccountConfig;
use crate::workflows::validation::{is_email_shaped, INVALID_EMAIL};

const PHONE_DIGITS: usize = 11;

/// Who the account is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    #[default]
    Candidate,
    Company,
}

impl AccountType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Candidate => "Candidato",
            Self::Company => "Empresa",
        }
    }
}

/// Fields of the registration form that can carry an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistrationField {
    Name,
    Email,
    Phone,
    Password,
    ConfirmPassword,
}

/// Validated credentials ready for [`AuthSession::sign_up`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub account_type: AccountType,
}

impl SignUpRequest {
    pub fn send(&self, session: &AuthSession) -> AuthTask {
        session.sign_up(&self.email, &self.password, &self.name)
    }
}

/// Sign-up form. Errors are computed on submit and cleared as the user edits
/// the offending field.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    config: AccountConfig,
    account_type: AccountType,
    name: String,
    email: String,
    phone: String,
    about: String,
    password: String,
    confirm_password: String,
    name_error: Option<String>,
    email_error: Option<String>,
    phone_error: Option<String>,
    password_error: Option<String>,
    confirm_password_error: Option<String>,
}

impl RegistrationForm {
    pub fn new(config: AccountConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn account_type(&self) -> AccountType {
        self.account_type
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn about(&self) -> &str {
        &self.about
    }

    pub fn set_account_type(&mut self, account_type: AccountType) {
        self.account_type = account_type;
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = value.into();
        self.name_error = None;
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
        self.email_error = None;
    }

    /// Keeps the digits of `value` and stores them masked as `(dd) ddddd-dddd`.
    pub fn set_phone(&mut self, value: &str) {
        self.phone = format_phone(value);
        self.phone_error = None;
    }

    pub fn set_about(&mut self, value: impl Into<String>) {
        self.about = value.into();
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password = value.into();
        self.password_error = None;
    }

    pub fn set_confirm_password(&mut self, value: impl Into<String>) {
        self.confirm_password = value.into();
        self.confirm_password_error = None;
    }

    pub fn error(&self, field: RegistrationField) -> Option<&str> {
        let error = match field {
            RegistrationField::Name => &self.name_error,
            RegistrationField::Email => &self.email_error,
            RegistrationField::Phone => &self.phone_error,
            RegistrationField::Password => &self.password_error,
            RegistrationField::ConfirmPassword => &self.confirm_password_error,
        };
        error.as_deref()
    }

    pub fn has_errors(&self) -> bool {
        [
            RegistrationField::Name,
            RegistrationField::Email,
            RegistrationField::Phone,
            RegistrationField::Password,
            RegistrationField::ConfirmPassword,
        ]
        .into_iter()
        .any(|field| self.error(field).is_some())
    }

    /// Validates every field at once. Returns the request only when all pass.
    pub fn submit(&mut self) -> Option<SignUpRequest> {
        self.name_error = self
            .name
            .trim()
            .is_empty()
            .then(|| "Nome é obrigatório".to_string());

        self.email_error = if self.email.trim().is_empty() {
            Some("E-mail é obrigatório".to_string())
        } else if !is_email_shaped(&self.email) {
            Some(INVALID_EMAIL.to_string())
        } else {
            None
        };

        self.phone_error = self
            .phone
            .trim()
            .is_empty()
            .then(|| "Telefone é obrigatório".to_string());

        let min_length = self.config.min_password_length;
        self.password_error = if self.password.trim().is_empty() {
            Some("Senha é obrigatória".to_string())
        } else if self.password.chars().count() < min_length {
            Some(format!(
                "A senha deve ter pelo menos {min_length} caracteres"
            ))
        } else {
            None
        };

        self.confirm_password_error = if self.confirm_password.trim().is_empty() {
            Some("Confirmação de senha é obrigatória".to_string())
        } else if self.password != self.confirm_password {
            Some("As senhas não coincidem".to_string())
        } else {
            None
        };

        if self.has_errors() {
            return None;
        }

        Some(SignUpRequest {
            email: self.email.clone(),
            password: self.password.clone(),
            name: self.name.clone(),
            account_type: self.account_type,
        })
    }
}

/// Progressive mask: `(dd`, then `(dd) ddddd`, then `(dd) ddddd-dddd`.
pub fn format_phone(input: &str) -> String {
    let digits: Vec<char> = input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(PHONE_DIGITS)
        .collect();

    if digits.is_empty() {
        return String::new();
    }

    let mut formatted = String::with_capacity(16);
    formatted.push('(');
    formatted.extend(digits.iter().take(2));
    if digits.len() > 2 {
        formatted.push_str(") ");
        formatted.extend(digits.iter().skip(2).take(5));
        if digits.len() > 7 {
            formatted.push('-');
            formatted.extend(digits.iter().skip(7));
        }
    }
    formatted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> RegistrationForm {
        let mut form = RegistrationForm::new(AccountConfig::default());
        form.set_name("Ana Souza");
        form.set_email("ana@empresa.com");
        form.set_phone("88999991234");
        form.set_password("segredo");
        form.set_confirm_password("segredo");
        form
    }

    #[test]
    fn phone_mask_grows_with_input() {
        assert_eq!(format_phone(""), "");
        assert_eq!(format_phone("8"), "(8");
        assert_eq!(format_phone("88"), "(88");
        assert_eq!(format_phone("889"), "(88) 9");
        assert_eq!(format_phone("8899999"), "(88) 99999");
        assert_eq!(format_phone("88999991"), "(88) 99999-1");
        assert_eq!(format_phone("(88) 99999-1234"), "(88) 99999-1234");
        assert_eq!(format_phone("8899999123456"), "(88) 99999-1234");
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let mut form = RegistrationForm::new(AccountConfig::default());
        assert_eq!(form.submit(), None);
        assert_eq!(
            form.error(RegistrationField::Name),
            Some("Nome é obrigatório")
        );
        assert_eq!(
            form.error(RegistrationField::Email),
            Some("E-mail é obrigatório")
        );
        assert_eq!(
            form.error(RegistrationField::Phone),
            Some("Telefone é obrigatório")
        );
        assert_eq!(
            form.error(RegistrationField::Password),
            Some("Senha é obrigatória")
        );
        assert_eq!(
            form.error(RegistrationField::ConfirmPassword),
            Some("Confirmação de senha é obrigatória")
        );
    }

    #[test]
    fn short_and_mismatched_passwords_are_reported() {
        let mut form = filled_form();
        form.set_password("abc");
        form.set_confirm_password("abd");
        assert_eq!(form.submit(), None);
        assert_eq!(
            form.error(RegistrationField::Password),
            Some("A senha deve ter pelo menos 6 caracteres")
        );
        assert_eq!(
            form.error(RegistrationField::ConfirmPassword),
            Some("As senhas não coincidem")
        );
    }

    #[test]
    fn minimum_password_length_is_configurable() {
        let mut form = RegistrationForm::new(AccountConfig {
            min_password_length: 10,
        });
        form.set_name("Ana Souza");
        form.set_email("ana@empresa.com");
        form.set_phone("88999991234");
        form.set_password("segredo");
        form.set_confirm_password("segredo");
        assert_eq!(form.submit(), None);
        assert_eq!(
            form.error(RegistrationField::Password),
            Some("A senha deve ter pelo menos 10 caracteres")
        );
    }

    #[test]
    fn editing_a_field_clears_its_error() {
        let mut form = filled_form();
        form.set_email("ana");
        assert_eq!(form.submit(), None);
        assert_eq!(form.error(RegistrationField::Email), Some("E-mail inválido"));

        form.set_email("ana@empresa.com");
        assert_eq!(form.error(RegistrationField::Email), None);
        assert!(!form.has_errors());
    }

    #[test]
    fn valid_form_yields_sign_up_request() {
        let mut form = filled_form();
        form.set_account_type(AccountType::Company);
        let request = form.submit().expect("valid form");
        assert_eq!(request.email, "ana@empresa.com");
        assert_eq!(request.name, "Ana Souza");
        assert_eq!(request.account_type, AccountType::Company);
        assert_eq!(form.phone(), "(88) 99999-1234");
    }
}
