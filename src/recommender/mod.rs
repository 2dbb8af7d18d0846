pub mod catalog;
pub mod corpus;
pub mod frequency;
pub mod index;
pub mod scoring;
pub mod tokenizer;

use serde::{Deserialize, Serialize};

use self::catalog::Catalog;
use self::corpus::FieldWeights;
use self::index::Index;

/// Tunable engine parameters.
///
/// The defaults reproduce the reference ranking exactly; they are plain
/// data so a deployment can load its own from configuration. `min_score`
/// is a strict floor: a result must score *above* it to be returned.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineParams {
    /// Corpus-construction repeat counts per field
    pub weights: FieldWeights,
    /// Minimum cosine similarity for a hit (strict greater-than)
    pub min_score: f64,
    /// Fixed `match_score` stamped on category-fallback suggestions
    pub suggestion_score: f64,
    /// Maximum number of category-fallback suggestions
    pub suggestion_limit: usize,
}

impl Default for EngineParams {
    fn default() -> Self {
        Self {
            weights: FieldWeights::default(),
            min_score: 0.05,
            suggestion_score: 90.0,
            suggestion_limit: 3,
        }
    }
}

/// Content-based destination recommender.
///
/// Owns the catalog it was built from plus the derived similarity index:
/// an IDF table over the corpus vocabulary and one TF-IDF vector (with
/// precomputed norm) per destination. Construction does all the work,
/// eagerly; afterwards the whole structure is read-only, so one instance
/// can serve any number of concurrent queries without locking.
///
/// There is deliberately no mutation API. The catalog is fixed for the
/// process lifetime; a changed catalog means building a new `Recommender`.
#[derive(Debug, Clone)]
pub struct Recommender {
    catalog: Catalog,
    index: Index,
    params: EngineParams,
}

impl Recommender {
    /// Build a recommender over `catalog` with default parameters.
    ///
    /// Never fails, even for an empty catalog (which yields an empty index
    /// and empty results for every query). Malformed catalog *input* is a
    /// parse-time error over in [`Catalog::from_json_str`], not here.
    pub fn new(catalog: Catalog) -> Self {
        Self::with_params(catalog, EngineParams::default())
    }

    /// Build a recommender with explicit parameters
    pub fn with_params(catalog: Catalog, params: EngineParams) -> Self {
        let documents = corpus::build_corpus(&catalog, &params.weights);
        let index = Index::build(&documents);
        Self {
            catalog,
            index,
            params,
        }
    }

    /// The catalog this recommender was built from
    #[inline]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Number of indexed documents
    #[inline]
    pub fn doc_num(&self) -> usize {
        self.index.doc_num()
    }

    /// The active engine parameters
    #[inline]
    pub fn params(&self) -> &EngineParams {
        &self.params
    }

    /// The derived similarity index
    #[inline]
    pub fn index(&self) -> &Index {
        &self.index
    }
}
