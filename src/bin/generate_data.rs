//! Synthetic data generator for Intern Match
//!
//! Writes candidates.csv, internships.csv and applications.csv into the
//! current directory. Counts and vocabularies are fixed in
//! `intern_match::services::generator`.
//!
//! Run: cargo run --bin generate-data

use intern_match::services::generator;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_target(false)
        .init();

    let mut rng = rand::thread_rng();
    let data = generator::generate(&mut rng);

    let written = generator::write_all(".", &data)?;

    let names: Vec<String> = written
        .iter()
        .filter_map(|p| p.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .collect();
    println!("Generated {}", names.join(", "));

    Ok(())
}
