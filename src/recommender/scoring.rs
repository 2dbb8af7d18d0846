use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use super::frequency::TermCounts;
use super::index::SparseVector;
use super::tokenizer::tokenize;
use super::Recommender;

/// Results returned by `recommend` when the caller does not pick a cutoff.
pub const DEFAULT_TOP_K: usize = 3;

/// One ranked recommendation, denormalized for display: the similarity
/// score as a percentage plus the catalog fields callers render directly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub id: String,
    pub name: String,
    /// Similarity as a percentage, rounded to one decimal. Fixed at 90.0
    /// for category-fallback suggestions.
    pub match_score: f64,
    #[serde(rename = "type")]
    pub kinds: Vec<String>,
    pub eco_score: f64,
    pub description: String,
}

/// Query matching over the prebuilt index
impl Recommender {
    /// Rank destinations against a free-text query, returning at most
    /// [`DEFAULT_TOP_K`] results. See [`Recommender::recommend_top`].
    pub fn recommend(&self, query: &str) -> Vec<Recommendation> {
        self.recommend_top(query, DEFAULT_TOP_K)
    }

    /// Rank destinations against a free-text query.
    ///
    /// The query goes through the document tokenizer, gets a TF-IDF vector
    /// from the prebuilt table (unknown terms drop out), and is scored by
    /// cosine similarity against every document. Results come back sorted
    /// by score, ties resolving to catalog order, with scores at or below
    /// the relevance floor removed, truncated to `top_k`.
    ///
    /// Total over its input: an empty query, a query of stop words, or a
    /// query with no vocabulary overlap all return an empty list.
    pub fn recommend_top(&self, query: &str, top_k: usize) -> Vec<Recommendation> {
        let mut counts = TermCounts::new();
        counts.add_terms(&tokenize(query));
        let query_vector = SparseVector::query_vector(&counts, self.index.idf());
        if query_vector.norm() == 0.0 {
            debug!(query, "query carries no indexed signal");
            return Vec::new();
        }

        let mut scored: Vec<(usize, f64)> = self
            .index
            .vectors()
            .par_iter()
            .enumerate()
            .map(|(position, document)| (position, cosine(&query_vector, document)))
            .collect();
        // stable sort: equal scores keep catalog order
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));

        let hits: Vec<Recommendation> = scored
            .into_iter()
            .filter(|&(_, score)| score > self.params.min_score)
            .take(top_k)
            .filter_map(|(position, score)| self.hit(position, score))
            .collect();
        debug!(
            query,
            terms = query_vector.term_num(),
            hits = hits.len(),
            "query scored"
        );
        hits
    }

    /// Category fallback: destinations tagged with `kind`, in catalog
    /// order, each stamped with a fixed high-confidence score. Bypasses
    /// the similarity engine entirely, so a known category always yields
    /// something even when no free-text query does.
    pub fn suggestions(&self, kind: &str) -> Vec<Recommendation> {
        self.catalog
            .iter()
            .filter(|(_, destination)| destination.kinds.iter().any(|tag| tag == kind))
            .take(self.params.suggestion_limit)
            .map(|(id, destination)| Recommendation {
                id: id.clone(),
                name: destination.name.clone(),
                match_score: self.params.suggestion_score,
                kinds: destination.kinds.clone(),
                eco_score: destination.eco_score,
                description: destination.description.clone(),
            })
            .collect()
    }

    fn hit(&self, position: usize, score: f64) -> Option<Recommendation> {
        let (id, destination) = self.catalog.get_index(position)?;
        Some(Recommendation {
            id: id.clone(),
            name: destination.name.clone(),
            match_score: round_percent(score),
            kinds: destination.kinds.clone(),
            eco_score: destination.eco_score,
            description: destination.description.clone(),
        })
    }
}

/// cosθ = A·B / (|A||B|). A zero-norm document scores 0 instead of
/// dividing by zero; the query norm is checked before scoring starts.
fn cosine(query: &SparseVector, document: &SparseVector) -> f64 {
    if document.norm() == 0.0 {
        return 0.0;
    }
    query.dot(document) / (query.norm() * document.norm())
}

/// Similarity expressed as a percentage, one decimal place
fn round_percent(score: f64) -> f64 {
    (score * 1000.0).round() / 10.0
}
