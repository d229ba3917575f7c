use serde::{Deserialize, Serialize};

/// Salary text stored when the amount is left open.
pub const NEGOTIABLE_SALARY: &str = "A combinar";

/// Values typed into the vacancy form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VacancyDraft {
    pub title: String,
    pub description: String,
    pub location: String,
    pub contract_type: String,
    pub salary_negotiable: bool,
    pub salary_range: String,
}

impl VacancyDraft {
    /// Title, description and location must not be blank.
    pub fn has_required_fields(&self) -> bool {
        [&self.title, &self.description, &self.location]
            .iter()
            .all(|value| !value.trim().is_empty())
    }

    pub fn into_record(self, owner_id: impl Into<String>) -> JobVacancy {
        let salary_range = if self.salary_negotiable {
            NEGOTIABLE_SALARY.to_string()
        } else {
            self.salary_range
        };

        JobVacancy {
            title: self.title,
            description: self.description,
            location: self.location,
            contract_type: self.contract_type,
            salary_negotiable: self.salary_negotiable,
            salary_range,
            owner_id: owner_id.into(),
        }
    }
}

/// Vacancy record as stored in the document collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobVacancy {
    pub title: String,
    pub description: String,
    pub location: String,
    pub contract_type: String,
    pub salary_negotiable: bool,
    pub salary_range: String,
    pub owner_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> VacancyDraft {
        VacancyDraft {
            title: "Atendente".to_string(),
            description: "Atendimento ao público".to_string(),
            location: "Quixadá, CE".to_string(),
            contract_type: "CLT".to_string(),
            salary_negotiable: false,
            salary_range: "R$ 1.600".to_string(),
        }
    }

    #[test]
    fn blank_required_field_is_detected() {
        let mut draft = draft();
        assert!(draft.has_required_fields());
        draft.location = "  ".to_string();
        assert!(!draft.has_required_fields());
    }

    #[test]
    fn negotiable_salary_overrides_typed_range() {
        let mut draft = draft();
        draft.salary_negotiable = true;
        let record = draft.into_record("uid-1");
        assert_eq!(record.salary_range, "A combinar");
        assert_eq!(record.owner_id, "uid-1");
    }

    #[test]
    fn record_uses_collection_field_names() {
        let value = serde_json::to_value(draft().into_record("uid-1")).expect("encodes");
        assert_eq!(value["contractType"], "CLT");
        assert_eq!(value["salaryNegotiable"], false);
        assert_eq!(value["ownerId"], "uid-1");
    }
}
