use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

const PUBLISHED_DATE_FORMAT: &str = "%d/%m/%Y";

/// One vacancy as shown in the listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub title: String,
    pub company: String,
    #[serde(rename = "type")]
    pub job_type: String,
    pub location: String,
    pub salary_range: String,
    pub published_date: String,
    #[serde(default)]
    pub applied: bool,
}

impl JobPosting {
    pub fn new(
        title: impl Into<String>,
        company: impl Into<String>,
        job_type: impl Into<String>,
        location: impl Into<String>,
        salary_range: impl Into<String>,
        published_date: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            company: company.into(),
            job_type: job_type.into(),
            location: location.into(),
            salary_range: salary_range.into(),
            published_date: published_date.into(),
            applied: false,
        }
    }

    /// Calendar date of publication, when the text is in `dd/mm/yyyy` form.
    pub fn published_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.published_date.trim(), PUBLISHED_DATE_FORMAT).ok()
    }

    /// The apply action is only offered until the posting has been applied to.
    pub fn can_apply(&self) -> bool {
        !self.applied
    }
}

/// Postings loaded at start-up until a remote listing feed exists.
pub fn seed_postings() -> Vec<JobPosting> {
    vec![
        JobPosting::new(
            "Vendedor Interno",
            "Loja Magazine",
            "CLT",
            "Quixadá, CE",
            "R$ 1.800 - R$ 2.500",
            "30/09/2025",
        ),
        JobPosting::new(
            "Repositor de Mercadorias",
            "Supermercado Central",
            "CLT",
            "Quixadá, CE",
            "R$ 1.600 - R$ 2.000",
            "04/10/2025",
        ),
        JobPosting::new(
            "Desenvolvedor Android Pleno",
            "Startup Vision",
            "PJ",
            "Remoto",
            "R$ 7.000 - R$ 9.000",
            "01/10/2025",
        ),
        JobPosting::new(
            "Auxiliar Administrativo",
            "Escritório Contábil Futuro",
            "Estágio",
            "Quixadá, CE",
            "R$ 800",
            "10/10/2025",
        ),
        JobPosting::new(
            "Garçom / Garçonete",
            "Restaurante Sabor do Sertão",
            "CLT",
            "Quixadá, CE",
            "R$ 1.500 + gorjetas",
            "11/10/2025",
        ),
        JobPosting::new(
            "Técnico de Enfermagem",
            "Hospital Eudásio Barroso",
            "Concurso",
            "Quixadá, CE",
            "R$ 2.200 - R$ 3.000",
            "12/10/2025",
        ),
        JobPosting::new(
            "Professor de Inglês",
            "Escola de Idiomas Wize",
            "Autônomo",
            "Quixadá, CE",
            "R$ 30/hora",
            "13/10/2025",
        ),
        JobPosting::new(
            "Caixa de Loja",
            "Farmácia Pague Menos",
            "CLT",
            "Quixadá, CE",
            "R$ 1.412",
            "14/10/2025",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_dates_parse() {
        let postings = seed_postings();
        assert_eq!(postings.len(), 8);
        assert!(postings.iter().all(|posting| posting.published_on().is_some()));
        assert_eq!(
            postings[0].published_on(),
            NaiveDate::from_ymd_opt(2025, 9, 30)
        );
    }

    #[test]
    fn free_text_dates_are_not_guessed() {
        let mut posting = seed_postings().remove(0);
        posting.published_date = "há 2 dias".to_string();
        assert_eq!(posting.published_on(), None);
    }

    #[test]
    fn serializes_with_listing_field_names() {
        let posting = seed_postings().remove(2);
        let value = serde_json::to_value(&posting).expect("posting encodes");
        assert_eq!(value["type"], "PJ");
        assert_eq!(value["salaryRange"], "R$ 7.000 - R$ 9.000");
        assert_eq!(value["applied"], false);
    }
}
