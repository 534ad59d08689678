//! Cosine similarity and ranking.

use cvrank_core::{ExtractedText, JointVectors, Ranking, ScoreError, ScoredResult, TermVector};

/// Cosine similarity between two non-negative vectors, in `[0, 1]`.
///
/// A zero-norm vector scores 0.0.
#[must_use]
pub fn cosine_similarity(a: &TermVector, b: &TermVector) -> f32 {
    let norm_a = a.norm();
    let norm_b = b.norm();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    let score = a.dot(b) / (norm_a * norm_b);
    if score.is_finite() {
        score.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Score every document against the query and rank them.
pub fn rank<'a, I>(query: &TermVector, documents: I) -> Ranking
where
    I: IntoIterator<Item = (String, &'a TermVector)>,
{
    let scores = documents
        .into_iter()
        .map(|(identifier, vector)| ScoredResult {
            identifier,
            score: cosine_similarity(query, vector),
        })
        .collect();
    Ranking::from_scores(scores)
}

/// Rank corpus entries using vectors produced for them, in the same order.
pub fn rank_corpus(joint: &JointVectors, entries: &[ExtractedText]) -> Result<Ranking, ScoreError> {
    if joint.documents.len() != entries.len() {
        return Err(ScoreError::LengthMismatch {
            vectors: joint.documents.len(),
            identifiers: entries.len(),
        });
    }

    Ok(rank(
        &joint.query,
        entries
            .iter()
            .map(|e| e.identifier.clone())
            .zip(joint.documents.iter()),
    ))
}
