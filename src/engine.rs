//! The recommendation engine: corpus vectorization and query answering.
//!
//! `Engine::build` tokenizes every storyline, fits the TF-IDF model, and
//! keeps the document matrix in memory. `Engine::recommend` pushes a query
//! storyline through the identical cleaning pipeline and ranks the corpus by
//! cosine similarity.

use crate::error::{Error, Result};
use crate::options::Options;
use crate::record::{Movie, Recommendation};
use crate::similarity;
use crate::text;
use crate::tfidf::{SparseVector, TfIdfModel};

/// An in-memory similarity index over a movie dataset.
pub struct Engine {
    movies: Vec<Movie>,
    model: TfIdfModel,
    matrix: Vec<SparseVector>,
    options: Options,
}

impl Engine {
    /// Build an engine from movie records.
    ///
    /// Records whose storyline produces no tokens (empty, or stopwords only)
    /// are excluded from the index. Returns [`Error::EmptyDataset`] when
    /// nothing survives - there is nothing to recommend from.
    pub fn build(movies: Vec<Movie>, options: Options) -> Result<Self> {
        let mut kept = Vec::with_capacity(movies.len());
        let mut docs = Vec::with_capacity(movies.len());

        for movie in movies {
            let tokens = text::tokenize(&movie.storyline, &options);
            if tokens.is_empty() {
                continue;
            }
            kept.push(movie);
            docs.push(tokens);
        }

        if kept.is_empty() {
            return Err(Error::EmptyDataset);
        }

        let (model, matrix) = TfIdfModel::fit_transform(&docs);

        Ok(Self {
            movies: kept,
            model,
            matrix,
            options,
        })
    }

    /// Build an engine with default options.
    pub fn from_movies(movies: Vec<Movie>) -> Result<Self> {
        Self::build(movies, Options::default())
    }

    /// Return the movies most similar to a query storyline, best first.
    ///
    /// The query goes through the same clean/tokenize/transform pipeline as
    /// the corpus; a query that cleans down to nothing is an
    /// [`Error::EmptyQuery`]. A storyline identical to an indexed row ranks
    /// that row first with a score of 1.0.
    pub fn recommend(&self, storyline: &str) -> Result<Vec<Recommendation>> {
        let tokens = text::tokenize(storyline, &self.options);
        if tokens.is_empty() {
            return Err(Error::EmptyQuery);
        }

        let query = self.model.transform(&tokens);
        let ranked = similarity::rank(
            &query,
            &self.matrix,
            self.options.top_n,
            self.options.min_score,
        );

        Ok(ranked
            .into_iter()
            .map(|(idx, score)| Recommendation {
                title: self.movies[idx].title.clone(),
                storyline: self.movies[idx].storyline.clone(),
                score,
            })
            .collect())
    }

    /// Number of movies in the index.
    #[must_use]
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    /// Whether the index holds no movies. `build` never returns an empty
    /// engine, so this is only useful through trait-like call sites.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Number of distinct index terms.
    #[must_use]
    pub fn vocab_len(&self) -> usize {
        self.model.vocab_len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_movies() -> Vec<Movie> {
        vec![
            Movie::new(
                "Inception",
                "A thief who steals corporate secrets through dream-sharing technology.",
            ),
            Movie::new(
                "The Matrix",
                "A computer hacker learns about the true nature of reality and the war against its controllers.",
            ),
            Movie::new(
                "Interstellar",
                "A team of explorers travel through a wormhole in space to ensure humanity's survival.",
            ),
            Movie::new(
                "Harry Potter",
                "A young wizard begins his journey at a magical school, facing dark forces along the way.",
            ),
        ]
    }

    #[test]
    fn identical_storyline_ranks_its_movie_first_with_full_score() {
        let engine = Engine::from_movies(sample_movies()).unwrap();
        let results = engine
            .recommend("A young wizard begins his journey at a magical school, facing dark forces along the way.")
            .unwrap();

        assert_eq!(results[0].title, "Harry Potter");
        assert!((results[0].score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn scores_are_descending() {
        let engine = Engine::from_movies(sample_movies()).unwrap();
        let results = engine.recommend("a hacker discovers reality is a simulation").unwrap();
        assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn top_n_limits_result_count() {
        let options = Options {
            top_n: 2,
            ..Options::default()
        };
        let engine = Engine::build(sample_movies(), options).unwrap();
        let results = engine.recommend("space explorers and wormholes").unwrap();
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn stopword_only_query_is_rejected() {
        let engine = Engine::from_movies(sample_movies()).unwrap();
        assert!(matches!(engine.recommend("it was the and of"), Err(Error::EmptyQuery)));
    }

    #[test]
    fn empty_dataset_is_rejected_at_build() {
        let movies = vec![Movie::new("Blank", "   "), Movie::new("Stoppy", "the of and")];
        assert!(matches!(Engine::from_movies(movies), Err(Error::EmptyDataset)));
    }

    #[test]
    fn unindexable_rows_are_dropped_but_engine_still_builds() {
        let mut movies = sample_movies();
        movies.push(Movie::new("Blank", ""));
        let engine = Engine::from_movies(movies).unwrap();
        assert_eq!(engine.len(), 4);
    }
}
