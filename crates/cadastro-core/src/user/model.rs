//! User record domain model.
//!
//! The typed, fully-validated form of a registration. Values of these types
//! only exist after the schema has accepted a candidate draft; the store never
//! persists anything else.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Gender choices offered by the registration form.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
pub enum Gender {
    Masculino,
    Feminino,
    Outro,
}

/// Academic degree levels.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
pub enum Degree {
    #[serde(rename = "Tecnólogo")]
    #[strum(serialize = "Tecnólogo")]
    Tecnologo,
    Bacharelado,
    Mestrado,
    Doutorado,
}

/// Brazilian federative units, keyed by their two-letter code.
///
/// Serialized as the code (`"SP"`); the display label is available via
/// [`Uf::label`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
pub enum Uf {
    AC,
    AL,
    AP,
    AM,
    BA,
    CE,
    DF,
    ES,
    GO,
    MA,
    MT,
    MS,
    MG,
    PA,
    PB,
    PR,
    PE,
    PI,
    RJ,
    RN,
    RS,
    RO,
    RR,
    SC,
    SP,
    SE,
    TO,
}

impl Uf {
    /// The two-letter code, e.g. `"SP"`.
    pub fn code(self) -> &'static str {
        self.into()
    }

    /// The display label, e.g. `"São Paulo"`.
    pub fn label(self) -> &'static str {
        match self {
            Uf::AC => "Acre",
            Uf::AL => "Alagoas",
            Uf::AP => "Amapá",
            Uf::AM => "Amazonas",
            Uf::BA => "Bahia",
            Uf::CE => "Ceará",
            Uf::DF => "Distrito Federal",
            Uf::ES => "Espírito Santo",
            Uf::GO => "Goiás",
            Uf::MA => "Maranhão",
            Uf::MT => "Mato Grosso",
            Uf::MS => "Mato Grosso do Sul",
            Uf::MG => "Minas Gerais",
            Uf::PA => "Pará",
            Uf::PB => "Paraíba",
            Uf::PR => "Paraná",
            Uf::PE => "Pernambuco",
            Uf::PI => "Piauí",
            Uf::RJ => "Rio de Janeiro",
            Uf::RN => "Rio Grande do Norte",
            Uf::RS => "Rio Grande do Sul",
            Uf::RO => "Rondônia",
            Uf::RR => "Roraima",
            Uf::SC => "Santa Catarina",
            Uf::SP => "São Paulo",
            Uf::SE => "Sergipe",
            Uf::TO => "Tocantins",
        }
    }
}

/// Technology interest areas selectable on the form.
///
/// Serialized with the snake_case keys the form options carry
/// (`"data_science"`, `"ui_ux"`, ...).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TechArea {
    Frontend,
    Backend,
    Fullstack,
    Mobile,
    Devops,
    Cloud,
    Ai,
    DataScience,
    Cybersecurity,
    Blockchain,
    UiUx,
    Qa,
    GameDev,
    Embedded,
    Database,
    Networking,
    ItSupport,
    ProjectManagement,
    BusinessAnalysis,
    Agile,
}

impl TechArea {
    /// The display label shown next to the option key.
    pub fn label(self) -> &'static str {
        match self {
            TechArea::Frontend => "Front-end Development",
            TechArea::Backend => "Back-end Development",
            TechArea::Fullstack => "Full-stack Development",
            TechArea::Mobile => "Mobile Development",
            TechArea::Devops => "DevOps",
            TechArea::Cloud => "Cloud Computing",
            TechArea::Ai => "Inteligência Artificial",
            TechArea::DataScience => "Data Science",
            TechArea::Cybersecurity => "Cybersecurity",
            TechArea::Blockchain => "Blockchain",
            TechArea::UiUx => "UI/UX Design",
            TechArea::Qa => "Quality Assurance",
            TechArea::GameDev => "Game Development",
            TechArea::Embedded => "Embedded Systems",
            TechArea::Database => "Database Administration",
            TechArea::Networking => "Networking",
            TechArea::ItSupport => "IT Support",
            TechArea::ProjectManagement => "Project Management",
            TechArea::BusinessAnalysis => "Business Analysis",
            TechArea::Agile => "Agile Methodologies",
        }
    }
}

/// One academic background entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcademicEntry {
    pub university: String,
    pub degree: Degree,
}

/// A stored user's full profile data.
///
/// `email` is the identity used for lookup, update, and deletion; `id` is
/// assigned once, when the record is first created. The password is kept as
/// the plain string the form collected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub birth_date: NaiveDate,
    pub gender: Gender,
    pub state: Uf,
    pub tech_areas: Vec<TechArea>,
    pub profile_image: String,
    pub accept_terms: bool,
    pub academic_background: Vec<AcademicEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_uf_code_and_label() {
        assert_eq!(Uf::SP.code(), "SP");
        assert_eq!(Uf::SP.label(), "São Paulo");
        assert_eq!(Uf::DF.label(), "Distrito Federal");
        assert_eq!(Uf::iter().count(), 27);
    }

    #[test]
    fn test_uf_parses_from_code() {
        assert_eq!("RJ".parse::<Uf>().unwrap(), Uf::RJ);
        assert!("XX".parse::<Uf>().is_err());
    }

    #[test]
    fn test_tech_area_parses_from_option_key() {
        assert_eq!("data_science".parse::<TechArea>().unwrap(), TechArea::DataScience);
        assert_eq!(TechArea::UiUx.to_string(), "ui_ux");
        assert!("warp_drives".parse::<TechArea>().is_err());
        assert_eq!(TechArea::iter().count(), 20);
    }

    #[test]
    fn test_degree_keeps_accented_spelling() {
        assert_eq!("Tecnólogo".parse::<Degree>().unwrap(), Degree::Tecnologo);
        assert_eq!(Degree::Tecnologo.to_string(), "Tecnólogo");
        assert!("Tecnologo".parse::<Degree>().is_err());
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let record = UserRecord {
            id: "1".to_string(),
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            password: "Abcdef1".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 5, 17).unwrap(),
            gender: Gender::Feminino,
            state: Uf::SP,
            tech_areas: vec![TechArea::Backend],
            profile_image: "data:image/jpeg;base64,xyz".to_string(),
            accept_terms: true,
            academic_background: vec![AcademicEntry {
                university: "Universidade de São Paulo (USP)".to_string(),
                degree: Degree::Bacharelado,
            }],
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["birthDate"], "1990-05-17");
        assert_eq!(json["techAreas"][0], "backend");
        assert_eq!(json["state"], "SP");
        assert_eq!(json["academicBackground"][0]["degree"], "Bacharelado");
    }
}
