//! Candidate record models.
//!
//! A [`UserDraft`] carries the raw, not-yet-validated values a form collects:
//! plain strings, optional choices, possibly-empty lists. The schema module
//! turns a draft into a typed [`UserRecord`](super::UserRecord) or a list of
//! field errors.

use serde::{Deserialize, Serialize};

use super::UserRecord;

/// A `{code, label}` pair as produced by the state select widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateChoice {
    /// Two-letter state code, e.g. `"SP"`.
    pub value: String,
    /// Display label, e.g. `"São Paulo"`.
    pub label: String,
}

/// One raw academic background row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcademicEntryDraft {
    pub university: String,
    pub degree: String,
}

/// User-entered, not-yet-validated registration data.
///
/// `id` is only present when the draft was seeded from an existing record
/// (profile editing); new registrations leave it unset and receive a fresh id
/// at creation time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub name: String,
    pub email: String,
    pub password: String,

    /// Date input value in `YYYY-MM-DD` form.
    pub birth_date: String,

    /// Selected gender option, if any.
    pub gender: Option<String>,

    /// Selected state choice, if any.
    pub state: Option<StateChoice>,

    /// Selected tech area option keys.
    pub tech_areas: Vec<String>,

    /// Data-URI encoded profile image, or empty if none was picked.
    pub profile_image: String,

    pub accept_terms: bool,

    pub academic_background: Vec<AcademicEntryDraft>,
}

impl UserDraft {
    /// Seeds a draft with a stored record's values, for profile editing.
    pub fn from_record(record: &UserRecord) -> Self {
        Self {
            id: Some(record.id.clone()),
            name: record.name.clone(),
            email: record.email.clone(),
            password: record.password.clone(),
            birth_date: record.birth_date.format("%Y-%m-%d").to_string(),
            gender: Some(record.gender.to_string()),
            state: Some(StateChoice {
                value: record.state.code().to_string(),
                label: record.state.label().to_string(),
            }),
            tech_areas: record.tech_areas.iter().map(|a| a.to_string()).collect(),
            profile_image: record.profile_image.clone(),
            accept_terms: record.accept_terms,
            academic_background: record
                .academic_background
                .iter()
                .map(|entry| AcademicEntryDraft {
                    university: entry.university.clone(),
                    degree: entry.degree.to_string(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::{AcademicEntry, Degree, Gender, TechArea, Uf};
    use chrono::NaiveDate;

    #[test]
    fn test_from_record_round_trips_choice_fields() {
        let record = UserRecord {
            id: "abc".to_string(),
            name: "Bruno".to_string(),
            email: "bruno@example.com".to_string(),
            password: "Abcdef1".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1988, 12, 3).unwrap(),
            gender: Gender::Masculino,
            state: Uf::MG,
            tech_areas: vec![TechArea::Devops, TechArea::Cloud],
            profile_image: "data:image/jpeg;base64,abc".to_string(),
            accept_terms: true,
            academic_background: vec![AcademicEntry {
                university: "Universidade Estadual de Campinas (Unicamp)".to_string(),
                degree: Degree::Mestrado,
            }],
        };

        let draft = UserDraft::from_record(&record);
        assert_eq!(draft.id.as_deref(), Some("abc"));
        assert_eq!(draft.birth_date, "1988-12-03");
        assert_eq!(draft.gender.as_deref(), Some("Masculino"));
        let state = draft.state.unwrap();
        assert_eq!(state.value, "MG");
        assert_eq!(state.label, "Minas Gerais");
        assert_eq!(draft.tech_areas, vec!["devops", "cloud"]);
        assert_eq!(draft.academic_background[0].degree, "Mestrado");
    }
}
