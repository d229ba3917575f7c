use std::env;
use std::fmt;

const DEFAULT_SALARY_FLOOR: f64 = 0.0;
const DEFAULT_SALARY_CEILING: f64 = 10_000.0;
const DEFAULT_MIN_PASSWORD_LENGTH: usize = 6;
const DEFAULT_VACANCY_COLLECTION: &str = "vagas";

/// Distinguishes runtime behavior for different stages of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Test => "test",
            Self::Production => "production",
        }
    }

    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub board: BoardConfig,
    pub accounts: AccountConfig,
    pub publishing: PublishingConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let salary_floor = read_amount("APP_SALARY_FLOOR", DEFAULT_SALARY_FLOOR)?;
        let salary_ceiling = read_amount("APP_SALARY_CEILING", DEFAULT_SALARY_CEILING)?;
        if salary_floor > salary_ceiling {
            return Err(ConfigError::InvertedSalaryRange {
                floor: salary_floor,
                ceiling: salary_ceiling,
            });
        }

        let min_password_length = match env::var("APP_MIN_PASSWORD_LENGTH") {
            Ok(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|_| ConfigError::InvalidPasswordLength)?,
            Err(_) => DEFAULT_MIN_PASSWORD_LENGTH,
        };

        let vacancy_collection = env::var("APP_VACANCY_COLLECTION")
            .unwrap_or_else(|_| DEFAULT_VACANCY_COLLECTION.to_string());
        if vacancy_collection.trim().is_empty() {
            return Err(ConfigError::BlankCollection);
        }

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            board: BoardConfig {
                salary_floor,
                salary_ceiling,
            },
            accounts: AccountConfig {
                min_password_length,
            },
            publishing: PublishingConfig { vacancy_collection },
        })
    }
}

fn read_amount(var: &'static str, default: f64) -> Result<f64, ConfigError> {
    let Ok(raw) = env::var(var) else {
        return Ok(default);
    };

    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(ConfigError::InvalidAmount { var }),
    }
}

/// Bounds of the salary slider shown next to the job listing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardConfig {
    pub salary_floor: f64,
    pub salary_ceiling: f64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            salary_floor: DEFAULT_SALARY_FLOOR,
            salary_ceiling: DEFAULT_SALARY_CEILING,
        }
    }
}

/// Rules applied to the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountConfig {
    pub min_password_length: usize,
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
        }
    }
}

/// Target of published vacancies in the document store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishingConfig {
    pub vacancy_collection: String,
}

impl Default for PublishingConfig {
    fn default() -> Self {
        Self {
            vacancy_collection: DEFAULT_VACANCY_COLLECTION.to_string(),
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidAmount { var: &'static str },
    InvertedSalaryRange { floor: f64, ceiling: f64 },
    InvalidPasswordLength,
    BlankCollection,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidAmount { var } => {
                write!(f, "{var} must be a non-negative number")
            }
            ConfigError::InvertedSalaryRange { floor, ceiling } => write!(
                f,
                "APP_SALARY_FLOOR ({floor}) must not exceed APP_SALARY_CEILING ({ceiling})"
            ),
            ConfigError::InvalidPasswordLength => {
                write!(f, "APP_MIN_PASSWORD_LENGTH must be a valid usize")
            }
            ConfigError::BlankCollection => {
                write!(f, "APP_VACANCY_COLLECTION must not be blank")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
