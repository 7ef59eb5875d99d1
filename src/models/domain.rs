use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Candidate profile as stored in `candidates.csv`
///
/// Only `preferred_sector` and `preferred_location` take part in matching;
/// the remaining attributes are carried through so they can be served back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub candidate_id: String,
    pub name: String,
    pub age: u8,
    pub gender: String,
    pub social_category: String,
    pub district: String,
    pub education_level: String,
    pub gpa: f32,
    #[serde(with = "comma_list", default)]
    pub skills: Vec<String>,
    pub preferred_sector: String,
    pub preferred_location: String,
    #[serde(with = "flag", default)]
    pub willing_to_relocate: bool,
    #[serde(with = "flag", default)]
    pub past_participation: bool,
}

impl Candidate {
    /// Minimal candidate carrying only the fields the matchers read
    pub fn with_preferences(
        candidate_id: impl Into<String>,
        preferred_sector: impl Into<String>,
        preferred_location: impl Into<String>,
    ) -> Self {
        let candidate_id = candidate_id.into();
        Self {
            name: format!("Candidate_{}", candidate_id),
            candidate_id,
            age: 21,
            gender: String::new(),
            social_category: String::new(),
            district: String::new(),
            education_level: String::new(),
            gpa: 0.0,
            skills: vec![],
            preferred_sector: preferred_sector.into(),
            preferred_location: preferred_location.into(),
            willing_to_relocate: false,
            past_participation: false,
        }
    }
}

/// Internship opening as stored in `internships.csv`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Internship {
    pub internship_id: String,
    pub title: String,
    pub organization_name: String,
    pub sector: String,
    pub location: String,
    #[serde(with = "comma_list", default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub capacity: u32,
}

impl Internship {
    pub fn new(
        internship_id: impl Into<String>,
        sector: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        let internship_id = internship_id.into();
        let sector = sector.into();
        Self {
            title: format!("{} Intern", sector),
            organization_name: format!("Org_{}", internship_id),
            internship_id,
            sector,
            location: location.into(),
            required_skills: vec![],
            capacity: 0,
        }
    }
}

/// Application linking a candidate to an internship (generator output only)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub application_id: String,
    pub candidate_id: String,
    pub internship_id: String,
    pub preference_rank: u32,
}

/// Projection returned by the additive-score matcher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternshipMatch {
    pub id: String,
    pub title: String,
    pub sector: String,
    pub location: String,
    pub company: String,
    pub score: u8,
}

/// Per-call score for one internship; never written back to the dataset
#[derive(Debug, Clone, Copy)]
pub struct ScoredInternship<'a> {
    pub internship: &'a Internship,
    pub score: u8,
}

impl From<ScoredInternship<'_>> for InternshipMatch {
    fn from(scored: ScoredInternship<'_>) -> Self {
        let internship = scored.internship;
        Self {
            id: internship.internship_id.clone(),
            title: internship.title.clone(),
            sector: internship.sector.clone(),
            location: internship.location.clone(),
            company: internship.organization_name.clone(),
            score: scored.score,
        }
    }
}

/// Multi-valued cells are stored comma-joined, e.g. `Python,SQL,Cloud`
mod comma_list {
    use super::*;

    pub fn serialize<S: Serializer>(values: &[String], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&values.join(","))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
        Ok(raw
            .split(',')
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
            .collect())
    }
}

/// Boolean cells are written as `0`/`1`; `true`/`false` are accepted on read
mod flag {
    use super::*;
    use serde::de::Error;

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Bool(bool),
            Int(u8),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Bool(value) => Ok(value),
            Raw::Int(0) => Ok(false),
            Raw::Int(1) => Ok(true),
            Raw::Int(other) => Err(D::Error::custom(format!("invalid flag value: {}", other))),
            Raw::Text(text) => match text.trim().to_ascii_lowercase().as_str() {
                "" | "0" | "false" => Ok(false),
                "1" | "true" => Ok(true),
                other => Err(D::Error::custom(format!("invalid flag value: {}", other))),
            },
        }
    }
}
