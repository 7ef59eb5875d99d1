use std::path::{Path, PathBuf};

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use thiserror::Error;

use crate::models::{Application, Candidate, Internship};

pub const NUM_CANDIDATES: usize = 50;
pub const NUM_INTERNSHIPS: usize = 10;
pub const MAX_APPS_PER_CANDIDATE: usize = 3;

pub const SKILLS: &[&str] = &[
    "Python", "Java", "SQL", "Machine Learning", "Data Analysis",
    "Web Dev", "C++", "Cloud", "AI", "Networking",
];
pub const SECTORS: &[&str] = &["IT", "Finance", "Healthcare", "Education", "Energy"];
pub const DISTRICTS: &[&str] = &[
    "Delhi", "Mumbai", "Bangalore", "Chennai", "Kolkata", "Lucknow", "Patna", "Jaipur",
];
pub const SOCIAL_CATEGORIES: &[&str] = &["General", "OBC", "SC", "ST"];
pub const GENDERS: &[&str] = &["Male", "Female"];
pub const EDUCATION_LEVELS: &[&str] = &["Bachelors", "Masters", "Diploma"];

pub const CANDIDATES_FILE: &str = "candidates.csv";
pub const INTERNSHIPS_FILE: &str = "internships.csv";
pub const APPLICATIONS_FILE: &str = "applications.csv";

/// Errors that can occur while writing generated data
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("CSV write error for {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// A complete synthetic data set
#[derive(Debug, Clone)]
pub struct GeneratedData {
    pub candidates: Vec<Candidate>,
    pub internships: Vec<Internship>,
    pub applications: Vec<Application>,
}

/// Short random identifier: first 8 hex characters of a v4 UUID drawn from `rng`
fn short_id<R: Rng>(rng: &mut R) -> String {
    let uuid = uuid::Builder::from_random_bytes(rng.gen()).into_uuid();
    uuid.simple().to_string()[..8].to_string()
}

fn pick<R: Rng>(rng: &mut R, options: &[&str]) -> String {
    options.choose(rng).copied().unwrap_or_default().to_string()
}

fn sample<R: Rng>(rng: &mut R, options: &[&str], count: usize) -> Vec<String> {
    options
        .choose_multiple(rng, count)
        .map(|s| s.to_string())
        .collect()
}

pub fn generate_candidates<R: Rng>(rng: &mut R, count: usize) -> Vec<Candidate> {
    (0..count)
        .map(|_| {
            let candidate_id = short_id(rng);
            let skill_count = rng.gen_range(2..=5);
            let gpa: f32 = rng.gen_range(6.0..=9.9);

            Candidate {
                name: format!("Candidate_{}", candidate_id),
                candidate_id,
                age: rng.gen_range(18..=25),
                gender: pick(rng, GENDERS),
                social_category: pick(rng, SOCIAL_CATEGORIES),
                district: pick(rng, DISTRICTS),
                education_level: pick(rng, EDUCATION_LEVELS),
                gpa: (gpa * 100.0).round() / 100.0,
                skills: sample(rng, SKILLS, skill_count),
                preferred_sector: pick(rng, SECTORS),
                preferred_location: pick(rng, DISTRICTS),
                willing_to_relocate: rng.gen_bool(0.5),
                past_participation: rng.gen_bool(0.5),
            }
        })
        .collect()
}

pub fn generate_internships<R: Rng>(rng: &mut R, count: usize) -> Vec<Internship> {
    (0..count)
        .map(|i| {
            let sector = pick(rng, SECTORS);
            let skill_count = rng.gen_range(2..=4);

            Internship {
                internship_id: short_id(rng),
                title: format!("{} Intern", sector),
                organization_name: format!("Org_{}", i),
                location: pick(rng, DISTRICTS),
                sector,
                required_skills: sample(rng, SKILLS, skill_count),
                capacity: rng.gen_range(3..=10),
            }
        })
        .collect()
}

/// Each candidate applies to 1..=MAX_APPS_PER_CANDIDATE distinct internships,
/// ranked in the order they were drawn
pub fn generate_applications<R: Rng>(
    rng: &mut R,
    candidates: &[Candidate],
    internships: &[Internship],
) -> Vec<Application> {
    if internships.is_empty() {
        return vec![];
    }

    let max_apps = MAX_APPS_PER_CANDIDATE.min(internships.len());
    let mut applications = Vec::new();

    for candidate in candidates {
        let count = rng.gen_range(1..=max_apps);
        for (rank, internship) in internships.choose_multiple(rng, count).enumerate() {
            applications.push(Application {
                application_id: short_id(rng),
                candidate_id: candidate.candidate_id.clone(),
                internship_id: internship.internship_id.clone(),
                preference_rank: rank as u32 + 1,
            });
        }
    }

    applications
}

pub fn generate<R: Rng>(rng: &mut R) -> GeneratedData {
    let candidates = generate_candidates(rng, NUM_CANDIDATES);
    let internships = generate_internships(rng, NUM_INTERNSHIPS);
    let applications = generate_applications(rng, &candidates, &internships);

    GeneratedData {
        candidates,
        internships,
        applications,
    }
}

fn write_csv<T: Serialize>(path: &Path, records: &[T]) -> Result<(), GeneratorError> {
    let display = path.display().to_string();
    let mut writer = csv::Writer::from_path(path).map_err(|source| GeneratorError::Csv {
        path: display.clone(),
        source,
    })?;

    for record in records {
        writer.serialize(record).map_err(|source| GeneratorError::Csv {
            path: display.clone(),
            source,
        })?;
    }

    writer.flush().map_err(|source| GeneratorError::Io {
        path: display,
        source,
    })
}

/// Write the three CSV files into `dir`, returning the paths written
pub fn write_all<P: AsRef<Path>>(dir: P, data: &GeneratedData) -> Result<Vec<PathBuf>, GeneratorError> {
    let dir = dir.as_ref();
    let candidates_path = dir.join(CANDIDATES_FILE);
    let internships_path = dir.join(INTERNSHIPS_FILE);
    let applications_path = dir.join(APPLICATIONS_FILE);

    write_csv(&candidates_path, &data.candidates)?;
    tracing::info!("Wrote {} candidates to {}", data.candidates.len(), candidates_path.display());

    write_csv(&internships_path, &data.internships)?;
    tracing::info!("Wrote {} internships to {}", data.internships.len(), internships_path.display());

    write_csv(&applications_path, &data.applications)?;
    tracing::info!("Wrote {} applications to {}", data.applications.len(), applications_path.display());

    Ok(vec![candidates_path, internships_path, applications_path])
}
