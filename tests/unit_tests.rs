// Unit tests for Intern Match

use intern_match::core::{exact_matches, matches_preferences, score_internship, Matcher, MAX_SCORE};
use intern_match::models::{Candidate, Internship};
use intern_match::services::Dataset;
use intern_match::MatchError;

const SECTORS: &[&str] = &["IT", "Finance", "Healthcare"];
const LOCATIONS: &[&str] = &["Delhi", "Mumbai", "Patna"];

/// Every sector/location combination, twice, in a fixed order
fn create_internships() -> Vec<Internship> {
    let mut internships = Vec::new();
    for round in 0..2 {
        for sector in SECTORS {
            for location in LOCATIONS {
                let id = format!("{}-{}-{}", sector, location, round);
                internships.push(Internship::new(id, *sector, *location));
            }
        }
    }
    internships
}

fn create_dataset() -> Dataset {
    let candidates = SECTORS
        .iter()
        .flat_map(|sector| LOCATIONS.iter().map(move |location| (sector, location)))
        .enumerate()
        .map(|(i, (sector, location))| Candidate::with_preferences(i.to_string(), *sector, *location))
        .collect();

    Dataset::from_records(candidates, create_internships()).unwrap()
}

#[test]
fn test_concrete_scenario_from_three_internships() {
    let dataset = Dataset::from_records(
        vec![Candidate::with_preferences("1", "IT", "Delhi")],
        vec![
            Internship::new("10", "IT", "Delhi"),
            Internship::new("11", "IT", "Mumbai"),
            Internship::new("12", "Finance", "Delhi"),
        ],
    )
    .unwrap();

    let result = Matcher::with_defaults().rank("1", 2, &dataset).unwrap();

    let ranked: Vec<(&str, u8)> = result.matches.iter().map(|m| (m.id.as_str(), m.score)).collect();
    assert_eq!(ranked, vec![("10", 2), ("11", 1)]);
}

#[test]
fn test_exact_matches_are_subset_with_equal_fields() {
    let dataset = create_dataset();

    for candidate in dataset.candidates() {
        let matches = exact_matches(&candidate.candidate_id, &dataset).unwrap();

        // each sector/location pair appears twice
        assert_eq!(matches.len(), 2);
        for internship in matches {
            assert!(dataset.internships().contains(internship));
            assert_eq!(internship.sector, candidate.preferred_sector);
            assert_eq!(internship.location, candidate.preferred_location);
        }
    }
}

#[test]
fn test_exact_matches_agree_with_max_score() {
    let dataset = create_dataset();

    for candidate in dataset.candidates() {
        for internship in dataset.internships() {
            let score = score_internship(candidate, internship);
            assert!(score <= MAX_SCORE);
            assert_eq!(score == MAX_SCORE, matches_preferences(candidate, internship));
        }
    }
}

#[test]
fn test_ranked_matches_respect_top_n_and_order() {
    let dataset = create_dataset();
    let matcher = Matcher::with_defaults();

    for top_n in [0, 1, 3, 7, 18, 40] {
        for candidate in dataset.candidates() {
            let id = &candidate.candidate_id;
            let all = matcher.score_all(id, &dataset).unwrap();
            let result = matcher.rank(id, top_n, &dataset).unwrap();

            assert!(result.matches.len() <= top_n);
            assert_eq!(result.matches.len(), top_n.min(dataset.internships().len()));

            // no returned element scores below any element left out
            let lowest_returned = result.matches.iter().map(|m| m.score).min();
            let highest_skipped = all.iter().skip(result.matches.len()).map(|s| s.score).max();
            if let (Some(low), Some(high)) = (lowest_returned, highest_skipped) {
                assert!(low >= high, "returned score {} below skipped score {}", low, high);
            }
        }
    }
}

#[test]
fn test_equal_scores_keep_file_order() {
    let dataset = create_dataset();
    let matcher = Matcher::with_defaults();

    let scored = matcher.score_all("0", &dataset).unwrap();
    let positions: Vec<usize> = scored
        .iter()
        .map(|s| {
            dataset
                .internships()
                .iter()
                .position(|i| i.internship_id == s.internship.internship_id)
                .unwrap()
        })
        .collect();

    for pair in scored.iter().zip(positions.iter()).collect::<Vec<_>>().windows(2) {
        let ((a, pos_a), (b, pos_b)) = (pair[0], pair[1]);
        if a.score == b.score {
            assert!(pos_a < pos_b);
        }
    }
}

#[test]
fn test_matchers_are_idempotent() {
    let dataset = create_dataset();
    let matcher = Matcher::with_defaults();

    let first = matcher.rank("4", 6, &dataset).unwrap().matches;
    let second = matcher.rank("4", 6, &dataset).unwrap().matches;
    assert_eq!(first, second);

    let first = exact_matches("4", &dataset).unwrap();
    let second = exact_matches("4", &dataset).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_unknown_candidate_is_not_found_for_both_matchers() {
    let dataset = create_dataset();
    let matcher = Matcher::with_defaults();

    assert!(matches!(
        exact_matches("missing", &dataset),
        Err(MatchError::CandidateNotFound(_))
    ));
    assert!(matches!(
        matcher.rank("missing", 5, &dataset),
        Err(MatchError::CandidateNotFound(_))
    ));
}

#[test]
fn test_concurrent_rankings_do_not_interfere() {
    let dataset = create_dataset();
    let matcher = Matcher::with_defaults();

    let expected: Vec<_> = dataset
        .candidates()
        .iter()
        .map(|c| matcher.rank(&c.candidate_id, 3, &dataset).unwrap().matches)
        .collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = dataset
            .candidates()
            .iter()
            .map(|c| {
                let dataset = &dataset;
                scope.spawn(move || {
                    (0..50)
                        .map(|_| matcher.rank(&c.candidate_id, 3, dataset).unwrap().matches)
                        .last()
                        .unwrap()
                })
            })
            .collect();

        for (handle, expected) in handles.into_iter().zip(expected.iter()) {
            assert_eq!(&handle.join().unwrap(), expected);
        }
    });
}
