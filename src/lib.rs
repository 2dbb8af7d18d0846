/// This crate is a content-based destination recommender built on a TF-IDF
/// vectorizer and cosine similarity.
pub mod recommender;
pub mod error;

/// Destination Recommender
/// The top-level struct of this crate. It turns a destination catalog into
/// an in-memory similarity index and answers free-text queries with a
/// ranked list of destinations.
///
/// Internally, it holds:
/// - The catalog it was built from
/// - An IDF table over the corpus vocabulary
/// - A sparse TF-IDF vector and precomputed norm per destination
/// - The tunable engine parameters
///
/// The index is built eagerly at construction and is immutable afterwards:
/// there is no add/remove/re-index operation, and a changed catalog means
/// constructing a new instance. Because nothing mutates after construction,
/// a single instance can be shared across threads and queried concurrently
/// without locking.
pub use recommender::Recommender;

/// Tunable engine parameters: corpus field weights, the minimum-relevance
/// floor, and the fixed score and cap for category-fallback suggestions.
/// Defaults reproduce the reference ranking exactly.
pub use recommender::EngineParams;

/// Destination catalog and its records
/// `Catalog` is an insertion-ordered map of destination id to record;
/// its iteration order doubles as the tie-break order for equal-similarity
/// results. Load one from JSON with `Catalog::from_json_str`, build one in
/// code with `Catalog::insert`, or use the bundled `Catalog::sample()`.
pub use recommender::catalog::{Catalog, Destination};

/// Corpus field weighting
/// Repeat counts applied per field when a destination is flattened into
/// document text. Name and category tags count double by default; that
/// multiplier is the weighting contract that makes a name hit outrank a
/// description hit.
pub use recommender::corpus::FieldWeights;

/// One ranked result: destination id and display fields plus the
/// similarity expressed as a percentage rounded to one decimal.
pub use recommender::scoring::Recommendation;

/// Errors surfaced while loading a catalog. Queries never error; only
/// malformed construction input does, once, at load time.
pub use error::{Error, Result};
