use std::sync::OnceLock;

use regex::Regex;

pub(crate) const INVALID_EMAIL: &str = "E-mail inválido";

// Same shape the Android `Patterns.EMAIL_ADDRESS` matcher accepts.
const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9+._%\-]{1,256}@[a-zA-Z0-9][a-zA-Z0-9\-]{0,64}(\.[a-zA-Z0-9][a-zA-Z0-9\-]{0,25})+$";

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
}

pub(crate) fn is_email_shaped(value: &str) -> bool {
    email_regex().is_match(value)
}
