use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::{Candidate, Internship};

/// Errors that can occur while loading the dataset
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed {file}: {source}")]
    Csv {
        file: &'static str,
        #[source]
        source: csv::Error,
    },

    #[error("duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },

    #[error("invalid {kind} record at row {row}: {reason}")]
    InvalidRecord {
        kind: &'static str,
        row: usize,
        reason: String,
    },
}

/// Immutable in-memory snapshot of candidates and internships
///
/// Built once at startup and shared read-only across workers. There is no
/// reload path; restart the process to pick up new files.
#[derive(Debug, Clone)]
pub struct Dataset {
    candidates: Vec<Candidate>,
    internships: Vec<Internship>,
    candidate_index: HashMap<String, usize>,
}

impl Dataset {
    /// Load both CSV files from disk
    pub fn load<P: AsRef<Path>, Q: AsRef<Path>>(
        candidates_path: P,
        internships_path: Q,
    ) -> Result<Self, DataError> {
        let candidates = read_records(candidates_path.as_ref(), "candidates")?;
        let internships = read_records(internships_path.as_ref(), "internships")?;

        tracing::info!(
            "Loaded {} candidates from {} and {} internships from {}",
            candidates.len(),
            candidates_path.as_ref().display(),
            internships.len(),
            internships_path.as_ref().display()
        );

        Self::from_records(candidates, internships)
    }

    /// Build a snapshot from records already in memory
    pub fn from_records(
        candidates: Vec<Candidate>,
        internships: Vec<Internship>,
    ) -> Result<Self, DataError> {
        let mut candidate_index = HashMap::with_capacity(candidates.len());
        for (row, candidate) in candidates.iter().enumerate() {
            if candidate.candidate_id.trim().is_empty() {
                return Err(DataError::InvalidRecord {
                    kind: "candidate",
                    row: row + 1,
                    reason: "empty candidate_id".to_string(),
                });
            }
            if candidate_index.insert(candidate.candidate_id.clone(), row).is_some() {
                return Err(DataError::DuplicateId {
                    kind: "candidate",
                    id: candidate.candidate_id.clone(),
                });
            }
        }

        let mut seen = std::collections::HashSet::with_capacity(internships.len());
        for (row, internship) in internships.iter().enumerate() {
            if internship.internship_id.trim().is_empty() {
                return Err(DataError::InvalidRecord {
                    kind: "internship",
                    row: row + 1,
                    reason: "empty internship_id".to_string(),
                });
            }
            if !seen.insert(internship.internship_id.as_str()) {
                return Err(DataError::DuplicateId {
                    kind: "internship",
                    id: internship.internship_id.clone(),
                });
            }
        }

        Ok(Self {
            candidates,
            internships,
            candidate_index,
        })
    }

    pub fn candidate(&self, candidate_id: &str) -> Option<&Candidate> {
        self.candidate_index
            .get(candidate_id)
            .map(|&position| &self.candidates[position])
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Internships in file order
    pub fn internships(&self) -> &[Internship] {
        &self.internships
    }
}

fn read_records<T: DeserializeOwned>(path: &Path, file: &'static str) -> Result<Vec<T>, DataError> {
    let handle = File::open(path).map_err(|source| DataError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_records(handle, file)
}

/// Parse CSV rows with a header line into records
pub fn parse_records<T: DeserializeOwned, R: Read>(
    reader: R,
    file: &'static str,
) -> Result<Vec<T>, DataError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    csv_reader
        .deserialize::<T>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|source| DataError::Csv { file, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANDIDATES: &str = "\
candidate_id,name,age,gender,social_category,district,education_level,gpa,skills,preferred_sector,preferred_location,willing_to_relocate,past_participation
a1,Candidate_a1,22,Female,OBC,Patna,Masters,8.25,\"Python,SQL\",IT,Delhi,1,0
b2,Candidate_b2,19,Male,General,Delhi,Diploma,6.5,,Finance,Mumbai,0,1
";

    #[test]
    fn test_parse_candidates() {
        let candidates: Vec<Candidate> = parse_records(CANDIDATES.as_bytes(), "candidates").unwrap();

        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].skills, vec!["Python", "SQL"]);
        assert!(candidates[0].willing_to_relocate);
        assert!(candidates[1].skills.is_empty());
        assert!(candidates[1].past_participation);
    }

    #[test]
    fn test_candidate_lookup() {
        let candidates: Vec<Candidate> = parse_records(CANDIDATES.as_bytes(), "candidates").unwrap();
        let dataset = Dataset::from_records(candidates, vec![]).unwrap();

        assert_eq!(dataset.candidate("b2").unwrap().preferred_sector, "Finance");
        assert!(dataset.candidate("zz").is_none());
    }

    #[test]
    fn test_duplicate_candidate_rejected() {
        let candidates = vec![
            Candidate::with_preferences("1", "IT", "Delhi"),
            Candidate::with_preferences("1", "IT", "Mumbai"),
        ];

        let err = Dataset::from_records(candidates, vec![]).unwrap_err();
        assert!(matches!(err, DataError::DuplicateId { kind: "candidate", .. }));
    }

    #[test]
    fn test_duplicate_internship_rejected() {
        let internships = vec![
            Internship::new("10", "IT", "Delhi"),
            Internship::new("10", "Finance", "Delhi"),
        ];

        let err = Dataset::from_records(vec![], internships).unwrap_err();
        assert!(matches!(err, DataError::DuplicateId { kind: "internship", .. }));
    }

    #[test]
    fn test_empty_candidate_id_rejected() {
        let candidates = vec![
            Candidate::with_preferences("1", "IT", "Delhi"),
            Candidate::with_preferences("  ", "IT", "Mumbai"),
        ];

        let err = Dataset::from_records(candidates, vec![]).unwrap_err();
        assert!(matches!(err, DataError::InvalidRecord { kind: "candidate", row: 2, .. }));
    }

    #[test]
    fn test_empty_internship_id_rejected() {
        let internships = vec![Internship::new("", "IT", "Delhi")];

        let err = Dataset::from_records(vec![], internships).unwrap_err();
        assert!(matches!(err, DataError::InvalidRecord { kind: "internship", row: 1, .. }));
    }

    #[test]
    fn test_malformed_row_reports_csv_error() {
        let body = "internship_id,title,organization_name,sector,location,required_skills,capacity\n\
                    10,IT Intern,Org_0,IT,Delhi,Python,not-a-number\n";

        let result: Result<Vec<Internship>, _> = parse_records(body.as_bytes(), "internships");
        assert!(matches!(result, Err(DataError::Csv { file: "internships", .. })));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Dataset::load("/nonexistent/candidates.csv", "/nonexistent/internships.csv").unwrap_err();
        assert!(matches!(err, DataError::Io { .. }));
    }
}
