//! Dataset persistence: CSV with `title,storyline` headers.
//!
//! The scraper writes the file once; the recommender only reads it. Loading
//! applies the cleanup the engine expects: rows without a storyline are
//! dropped and duplicate titles keep their first occurrence.

use std::collections::HashSet;
use std::path::Path;

use crate::error::Result;
use crate::record::Movie;

/// Load movies from a CSV file.
///
/// Rows whose storyline is empty (after trimming) are skipped, and repeated
/// titles keep the first row seen. Returns an I/O error if the file is
/// missing - run the scraper first.
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Movie>> {
    // Open through File so a missing dataset surfaces as an I/O error the
    // recommender binary can turn into a "run the scraper first" hint.
    let file = std::fs::File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);

    let mut seen_titles: HashSet<String> = HashSet::new();
    let mut movies = Vec::new();
    for row in reader.deserialize() {
        let movie: Movie = row?;
        if movie.storyline.trim().is_empty() {
            continue;
        }
        if seen_titles.insert(movie.title.clone()) {
            movies.push(movie);
        }
    }
    Ok(movies)
}

/// Write movies to a CSV file, replacing any existing content.
pub fn save_csv<P: AsRef<Path>>(path: P, movies: &[Movie]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for movie in movies {
        writer.serialize(movie)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn round_trip_preserves_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("movies.csv");

        let movies = vec![
            Movie::new("Inception", "A thief steals secrets through dream-sharing."),
            Movie::new("The Matrix", "A hacker learns the true nature of reality."),
        ];
        save_csv(&path, &movies).unwrap();

        let loaded = load_csv(&path).unwrap();
        assert_eq!(loaded, movies);
    }

    #[test]
    fn load_skips_rows_without_storyline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("movies.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "title,storyline").unwrap();
        writeln!(file, "Empty One,").unwrap();
        writeln!(file, "Blank One,\"   \"").unwrap();
        writeln!(file, "Kept,\"An actual plot.\"").unwrap();
        drop(file);

        let loaded = load_csv(&path).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].title, "Kept");
    }

    #[test]
    fn load_keeps_first_of_duplicate_titles() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("movies.csv");
        let movies = vec![
            Movie::new("Dune", "First storyline."),
            Movie::new("Dune", "Second storyline."),
        ];
        save_csv(&path, &movies).unwrap();

        let loaded = load_csv(&path).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].storyline, "First storyline.");
    }

    #[test]
    fn load_missing_file_is_an_error() {
        assert!(load_csv("definitely/does/not/exist.csv").is_err());
    }
}
