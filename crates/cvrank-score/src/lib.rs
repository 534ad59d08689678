//! # cvrank-score
//!
//! Lexical relevance scoring for cvrank: TF-IDF vectors over a shared
//! vocabulary, compared by cosine similarity.
//!
//! ## Components
//!
//! | Item | Description |
//! |------|-------------|
//! | [`tokenizer::tokenize`] | Lowercasing word tokenizer with English stop words |
//! | [`TfIdfVectorizer`] | Joint query + corpus vectorization |
//! | [`similarity::cosine_similarity`] | Guarded cosine, clamped to `[0, 1]` |
//! | [`similarity::rank`] | Stable descending ranking |
//!
//! ## Usage
//!
//! ```rust,ignore
//! use cvrank_core::{Vectorizer, VectorizerConfig};
//! use cvrank_score::{similarity, TfIdfVectorizer};
//!
//! let vectorizer = TfIdfVectorizer::new(VectorizerConfig::default());
//! let joint = vectorizer.vectorize("python developer", &["Experienced Python developer"])?;
//! let ranking = similarity::rank(&joint.query, vec![("cv.txt".to_string(), &joint.documents[0])]);
//! ```

pub mod similarity;
pub mod tfidf;
pub mod tokenizer;

pub use similarity::{cosine_similarity, rank, rank_corpus};
pub use tfidf::TfIdfVectorizer;
