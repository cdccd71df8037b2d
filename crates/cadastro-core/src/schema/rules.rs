//! The registration validation rules.
//!
//! [`validate`] checks every rule independently and reports all violated
//! fields at once; it either yields a fully typed [`UserRecord`] or a
//! non-empty [`ValidationErrors`], never both. Validation is pure: no I/O and
//! no dependence on stored records (email uniqueness is the form controller's
//! job, checked against the store).

use chrono::{Datelike, Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::schema::model::{RuleCode, ValidationErrors};
use crate::user::{AcademicEntry, Degree, Gender, TechArea, Uf, UserDraft, UserRecord};

/// Minimum password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Minimum age, in whole years, on the day of registration.
pub const MIN_AGE_YEARS: i32 = 18;

// Text before and after the '@', then a dot and a non-empty tail.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email regex"));

// The regex crate has no lookahead, so the three password character classes
// are checked separately.
static HAS_UPPER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z]").expect("upper regex"));
static HAS_LOWER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z]").expect("lower regex"));
static HAS_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d").expect("digit regex"));

/// Validates a candidate record against today's date.
pub fn validate(draft: &UserDraft) -> Result<UserRecord, ValidationErrors> {
    validate_at(draft, Local::now().date_naive())
}

/// Validates a candidate record against an explicit "today".
///
/// The clock is a parameter so the date-sensitive rules stay deterministic
/// under test.
pub fn validate_at(draft: &UserDraft, today: NaiveDate) -> Result<UserRecord, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if draft.name.trim().is_empty() {
        errors.push("name", RuleCode::Required, "Nome é obrigatório");
    }

    if !EMAIL_RE.is_match(&draft.email) {
        errors.push("email", RuleCode::InvalidFormat, "Email inválido");
    }

    // Length and strength are independent rules; both may fire.
    if draft.password.chars().count() < MIN_PASSWORD_LEN {
        errors.push(
            "password",
            RuleCode::TooShort,
            "A senha deve ter no mínimo 6 caracteres",
        );
    }
    if !HAS_UPPER.is_match(&draft.password)
        || !HAS_LOWER.is_match(&draft.password)
        || !HAS_DIGIT.is_match(&draft.password)
    {
        errors.push(
            "password",
            RuleCode::WeakPassword,
            "A senha deve conter letra maiúscula, minúscula e número",
        );
    }

    let birth_date = match NaiveDate::parse_from_str(draft.birth_date.trim(), "%Y-%m-%d") {
        Ok(date) if date > today => {
            errors.push(
                "birthDate",
                RuleCode::FutureDate,
                "A data de nascimento não pode ser no futuro",
            );
            None
        }
        Ok(date) if age_on(today, date) < MIN_AGE_YEARS => {
            errors.push(
                "birthDate",
                RuleCode::Underage,
                "Você deve ter pelo menos 18 anos",
            );
            None
        }
        Ok(date) => Some(date),
        Err(_) => {
            errors.push(
                "birthDate",
                RuleCode::InvalidFormat,
                "Data de nascimento inválida",
            );
            None
        }
    };

    let gender = match draft.gender.as_deref().map(str::parse::<Gender>) {
        Some(Ok(gender)) => Some(gender),
        _ => {
            errors.push("gender", RuleCode::InvalidChoice, "Selecione um gênero");
            None
        }
    };

    // A well-formed state choice carries both a known code and a label.
    let state = match &draft.state {
        Some(choice) if !choice.label.trim().is_empty() => match choice.value.parse::<Uf>() {
            Ok(uf) => Some(uf),
            Err(_) => {
                errors.push("state", RuleCode::Required, "Selecione um estado");
                None
            }
        },
        _ => {
            errors.push("state", RuleCode::Required, "Selecione um estado");
            None
        }
    };

    let mut tech_areas = Vec::with_capacity(draft.tech_areas.len());
    if draft.tech_areas.is_empty() {
        errors.push(
            "techAreas",
            RuleCode::Required,
            "Selecione pelo menos uma área de TI",
        );
    }
    for raw in &draft.tech_areas {
        match raw.parse::<TechArea>() {
            Ok(area) => tech_areas.push(area),
            Err(_) => {
                errors.push("techAreas", RuleCode::InvalidChoice, "Área de TI desconhecida");
            }
        }
    }

    if !draft.accept_terms {
        errors.push(
            "acceptTerms",
            RuleCode::MustAccept,
            "Você deve aceitar os termos",
        );
    }

    if draft.profile_image.is_empty() {
        errors.push(
            "profileImage",
            RuleCode::Required,
            "Foto de perfil é obrigatória",
        );
    }

    let mut academic_background = Vec::with_capacity(draft.academic_background.len());
    if draft.academic_background.is_empty() {
        errors.push(
            "academicBackground",
            RuleCode::Required,
            "Você deve fornecer ao menos uma formação acadêmica",
        );
    }
    for (index, entry) in draft.academic_background.iter().enumerate() {
        let university_ok = !entry.university.trim().is_empty();
        if !university_ok {
            errors.push(
                format!("academicBackground[{index}].university"),
                RuleCode::Required,
                "Universidade é obrigatória",
            );
        }
        let degree = entry.degree.parse::<Degree>();
        if degree.is_err() {
            errors.push(
                format!("academicBackground[{index}].degree"),
                RuleCode::Required,
                "Grau acadêmico é obrigatório",
            );
        }
        if let (true, Ok(degree)) = (university_ok, degree) {
            academic_background.push(AcademicEntry {
                university: entry.university.clone(),
                degree,
            });
        }
    }

    // Every None above recorded an error, so this match is total in practice:
    // either the draft is clean and all parts exist, or errors is non-empty.
    match (birth_date, gender, state, errors.is_empty()) {
        (Some(birth_date), Some(gender), Some(state), true) => {
            Ok(UserRecord {
                id: draft.id.clone().unwrap_or_default(),
                name: draft.name.clone(),
                email: draft.email.clone(),
                password: draft.password.clone(),
                birth_date,
                gender,
                state,
                tech_areas,
                profile_image: draft.profile_image.clone(),
                accept_terms: draft.accept_terms,
                academic_background,
            })
        }
        _ => Err(errors),
    }
}

/// Validates the login form's narrow pre-check: email shape and password
/// length only.
pub fn validate_login(email: &str, password: &str) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if !EMAIL_RE.is_match(email) {
        errors.push("email", RuleCode::InvalidFormat, "Email inválido");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        errors.push(
            "password",
            RuleCode::TooShort,
            "Senha deve ter no mínimo 6 caracteres",
        );
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Age in whole years on `today`, with exact-birthday semantics: the year
/// difference drops by one until the birthday has passed.
fn age_on(today: NaiveDate, birth: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::{AcademicEntryDraft, StateChoice};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn valid_draft() -> UserDraft {
        UserDraft {
            id: None,
            name: "Carla Souza".to_string(),
            email: "carla@example.com".to_string(),
            password: "Abcdef1".to_string(),
            birth_date: "1995-03-10".to_string(),
            gender: Some("Feminino".to_string()),
            state: Some(StateChoice {
                value: "SP".to_string(),
                label: "São Paulo".to_string(),
            }),
            tech_areas: vec!["backend".to_string(), "data_science".to_string()],
            profile_image: "data:image/jpeg;base64,abc".to_string(),
            accept_terms: true,
            academic_background: vec![AcademicEntryDraft {
                university: "Universidade de São Paulo (USP)".to_string(),
                degree: "Bacharelado".to_string(),
            }],
        }
    }

    #[test]
    fn test_valid_draft_produces_typed_record() {
        let record = validate_at(&valid_draft(), today()).unwrap();
        assert_eq!(record.email, "carla@example.com");
        assert_eq!(record.gender, Gender::Feminino);
        assert_eq!(record.state, Uf::SP);
        assert_eq!(record.tech_areas, vec![TechArea::Backend, TechArea::DataScience]);
        assert_eq!(record.academic_background[0].degree, Degree::Bacharelado);
        assert_eq!(
            record.birth_date,
            NaiveDate::from_ymd_opt(1995, 3, 10).unwrap()
        );
    }

    #[test]
    fn test_empty_draft_reports_every_required_field() {
        let errors = validate_at(&UserDraft::default(), today()).unwrap_err();

        for field in [
            "name",
            "email",
            "password",
            "birthDate",
            "gender",
            "state",
            "techAreas",
            "acceptTerms",
            "profileImage",
            "academicBackground",
        ] {
            assert!(errors.has_field(field), "missing error for {field}");
        }
    }

    #[test]
    fn test_password_length_and_strength_are_independent() {
        let mut draft = valid_draft();

        draft.password = "abc12".to_string();
        let errors = validate_at(&draft, today()).unwrap_err();
        assert!(errors.has("password", RuleCode::TooShort));
        assert!(errors.has("password", RuleCode::WeakPassword));

        draft.password = "abcdefg".to_string();
        let errors = validate_at(&draft, today()).unwrap_err();
        assert!(!errors.has("password", RuleCode::TooShort));
        assert!(errors.has("password", RuleCode::WeakPassword));

        draft.password = "Abcdef1".to_string();
        assert!(validate_at(&draft, today()).is_ok());
    }

    #[test]
    fn test_birth_date_exact_eighteenth_birthday() {
        let mut draft = valid_draft();

        draft.birth_date = "2006-06-15".to_string();
        assert!(validate_at(&draft, today()).is_ok());

        draft.birth_date = "2006-06-16".to_string();
        let errors = validate_at(&draft, today()).unwrap_err();
        assert!(errors.has("birthDate", RuleCode::Underage));
    }

    #[test]
    fn test_birth_date_in_the_future() {
        let mut draft = valid_draft();
        draft.birth_date = "2024-06-16".to_string();

        let errors = validate_at(&draft, today()).unwrap_err();
        assert!(errors.has("birthDate", RuleCode::FutureDate));
        assert!(!errors.has("birthDate", RuleCode::Underage));
    }

    #[test]
    fn test_unparseable_birth_date_does_not_panic() {
        let mut draft = valid_draft();
        draft.birth_date = "not-a-date".to_string();

        let errors = validate_at(&draft, today()).unwrap_err();
        assert!(errors.has("birthDate", RuleCode::InvalidFormat));
    }

    #[test]
    fn test_email_shape() {
        let mut draft = valid_draft();
        for bad in ["", "plain", "a@b", "a b@c.com", "a@b."] {
            draft.email = bad.to_string();
            let errors = validate_at(&draft, today()).unwrap_err();
            assert!(errors.has("email", RuleCode::InvalidFormat), "accepted {bad:?}");
        }

        draft.email = "pessoa@dominio.com.br".to_string();
        assert!(validate_at(&draft, today()).is_ok());
    }

    #[test]
    fn test_state_requires_known_code_and_label() {
        let mut draft = valid_draft();

        draft.state = None;
        let errors = validate_at(&draft, today()).unwrap_err();
        assert!(errors.has("state", RuleCode::Required));

        draft.state = Some(StateChoice {
            value: "ZZ".to_string(),
            label: "Zetaland".to_string(),
        });
        let errors = validate_at(&draft, today()).unwrap_err();
        assert!(errors.has("state", RuleCode::Required));

        draft.state = Some(StateChoice {
            value: "SP".to_string(),
            label: "".to_string(),
        });
        let errors = validate_at(&draft, today()).unwrap_err();
        assert!(errors.has("state", RuleCode::Required));
    }

    #[test]
    fn test_gender_must_be_catalogued() {
        let mut draft = valid_draft();
        draft.gender = Some("Desconhecido".to_string());

        let errors = validate_at(&draft, today()).unwrap_err();
        assert!(errors.has("gender", RuleCode::InvalidChoice));
    }

    #[test]
    fn test_tech_areas_required_and_catalogued() {
        let mut draft = valid_draft();

        draft.tech_areas = vec![];
        let errors = validate_at(&draft, today()).unwrap_err();
        assert!(errors.has("techAreas", RuleCode::Required));

        draft.tech_areas = vec!["backend".to_string(), "astrology".to_string()];
        let errors = validate_at(&draft, today()).unwrap_err();
        assert!(errors.has("techAreas", RuleCode::InvalidChoice));
    }

    #[test]
    fn test_academic_entries_validated_independently() {
        let mut draft = valid_draft();
        draft.academic_background = vec![
            AcademicEntryDraft {
                university: "".to_string(),
                degree: "Mestrado".to_string(),
            },
            AcademicEntryDraft {
                university: "Universidade Federal de Minas Gerais (UFMG)".to_string(),
                degree: "".to_string(),
            },
        ];

        let errors = validate_at(&draft, today()).unwrap_err();
        assert!(errors.has("academicBackground[0].university", RuleCode::Required));
        assert!(!errors.has_field("academicBackground[0].degree"));
        assert!(errors.has("academicBackground[1].degree", RuleCode::Required));
        assert!(!errors.has_field("academicBackground[1].university"));
    }

    #[test]
    fn test_empty_academic_background_is_required() {
        let mut draft = valid_draft();
        draft.academic_background = vec![];

        let errors = validate_at(&draft, today()).unwrap_err();
        assert!(errors.has("academicBackground", RuleCode::Required));
    }

    #[test]
    fn test_terms_and_image_rules() {
        let mut draft = valid_draft();
        draft.accept_terms = false;
        draft.profile_image = String::new();

        let errors = validate_at(&draft, today()).unwrap_err();
        assert!(errors.has("acceptTerms", RuleCode::MustAccept));
        assert!(errors.has("profileImage", RuleCode::Required));
    }

    #[test]
    fn test_validate_login_narrow_rules() {
        assert!(validate_login("a@b.com", "Abcdef1").is_ok());

        let errors = validate_login("not-an-email", "short").unwrap_err();
        assert!(errors.has("email", RuleCode::InvalidFormat));
        assert!(errors.has("password", RuleCode::TooShort));
    }

    #[test]
    fn test_draft_id_is_carried_into_the_record() {
        let mut draft = valid_draft();
        draft.id = Some("existing-id".to_string());

        let record = validate_at(&draft, today()).unwrap();
        assert_eq!(record.id, "existing-id");
    }
}
