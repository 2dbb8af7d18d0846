use indexmap::{IndexMap, IndexSet};
use tracing::info;

use super::corpus::RawDocument;
use super::frequency::TermCounts;
use super::tokenizer::tokenize;

/// Inverse-document-frequency table over the corpus vocabulary.
///
/// Uses the smoothed form `idf(t) = ln(1 + N / (df + 1))`: no division by
/// zero for any df, and a term occurring in every document still keeps a
/// small positive weight instead of collapsing to zero the way plain
/// `ln(N / df)` does. Rare terms score high, ubiquitous terms score low.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdfTable {
    weights: IndexMap<String, f64>,
}

impl IdfTable {
    /// Derive the table from per-term document frequencies.
    ///
    /// Every term that appears in at least one document gets an entry.
    pub fn from_doc_freq(doc_freq: &IndexMap<String, u32>, doc_count: usize) -> Self {
        let doc_count = doc_count as f64;
        let weights = doc_freq
            .iter()
            .map(|(term, &df)| {
                let idf = (1.0 + doc_count / (df as f64 + 1.0)).ln();
                (term.clone(), idf)
            })
            .collect();
        Self { weights }
    }

    /// IDF weight of a term, `None` when the term never occurred in the
    /// corpus
    #[inline]
    pub fn weight(&self, term: &str) -> Option<f64> {
        self.weights.get(term).copied()
    }

    #[inline]
    pub fn contains_term(&self, term: &str) -> bool {
        self.weights.contains_key(term)
    }

    /// Vocabulary size
    #[inline]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Iterate `(term, idf)` pairs in first-seen corpus order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(term, &idf)| (term.as_str(), idf))
    }
}

/// Sparse TF-IDF vector with its Euclidean norm precomputed.
///
/// Both document vectors and query vectors use this shape; only how
/// unknown terms are handled differs between the two constructors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    scores: IndexMap<String, f64>,
    norm: f64,
}

impl SparseVector {
    /// TF-IDF vector for an indexed document. Every term is kept; a term
    /// missing from the table (which cannot happen for text the table was
    /// built from) would weigh zero.
    pub fn document_vector(counts: &TermCounts, idf: &IdfTable) -> Self {
        Self::weighted(counts, idf, true)
    }

    /// TF-IDF vector for a query against an existing table. Terms outside
    /// the corpus vocabulary are dropped: they cannot match any document,
    /// so they contribute nothing, silently.
    pub fn query_vector(counts: &TermCounts, idf: &IdfTable) -> Self {
        Self::weighted(counts, idf, false)
    }

    fn weighted(counts: &TermCounts, idf: &IdfTable, keep_unknown: bool) -> Self {
        let denominator = counts.tf_denominator() as f64;
        let mut scores = IndexMap::with_capacity(counts.term_num());
        for (term, count) in counts.iter() {
            let weight = match idf.weight(term) {
                Some(weight) => weight,
                None if keep_unknown => 0.0,
                None => continue,
            };
            let tf = count as f64 / denominator;
            scores.insert(term.to_string(), tf * weight);
        }
        let norm = scores.values().map(|score| score * score).sum::<f64>().sqrt();
        Self { scores, norm }
    }

    /// Dot product, iterating the smaller side's terms. A term missing on
    /// either side contributes zero.
    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (small, large) = if self.scores.len() <= other.scores.len() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .scores
            .iter()
            .filter_map(|(term, score)| large.scores.get(term).map(|other_score| score * other_score))
            .sum()
    }

    #[inline]
    pub fn norm(&self) -> f64 {
        self.norm
    }

    #[inline]
    pub fn score(&self, term: &str) -> Option<f64> {
        self.scores.get(term).copied()
    }

    #[inline]
    pub fn term_num(&self) -> usize {
        self.scores.len()
    }
}

/// The immutable similarity index.
///
/// Document ids and vectors are parallel vecs held in corpus order, so a
/// position in one is a position in the other and the original catalog
/// order is always recoverable — equal-score tie-breaking depends on it.
/// Built once, then only read; concurrent queries need no locking.
#[derive(Debug, Clone, Default)]
pub struct Index {
    ids: Vec<String>,
    vectors: Vec<SparseVector>,
    idf: IdfTable,
}

impl Index {
    /// Tokenize every document, derive document frequencies from each
    /// document's *distinct* term set, then the IDF table, then one TF-IDF
    /// vector per document. Deterministic: same documents, same index.
    ///
    /// Zero documents produce an empty table and no vectors; queries
    /// against such an index return nothing rather than failing.
    pub fn build(documents: &[RawDocument]) -> Self {
        let tokenized: Vec<Vec<String>> = documents
            .iter()
            .map(|document| tokenize(&document.text))
            .collect();

        // df counts each document once per term, however often the term
        // repeats inside it
        let mut doc_freq: IndexMap<String, u32> = IndexMap::new();
        for tokens in &tokenized {
            let mut seen: IndexSet<&str> = IndexSet::with_capacity(tokens.len());
            for token in tokens {
                if seen.insert(token.as_str()) {
                    *doc_freq.entry(token.clone()).or_insert(0) += 1;
                }
            }
        }
        let idf = IdfTable::from_doc_freq(&doc_freq, documents.len());

        let mut ids = Vec::with_capacity(documents.len());
        let mut vectors = Vec::with_capacity(documents.len());
        for (document, tokens) in documents.iter().zip(&tokenized) {
            let mut counts = TermCounts::new();
            counts.add_terms(tokens);
            ids.push(document.id.clone());
            vectors.push(SparseVector::document_vector(&counts, &idf));
        }

        info!(
            documents = ids.len(),
            vocabulary = idf.len(),
            "similarity index built"
        );
        Self { ids, vectors, idf }
    }

    #[inline]
    pub fn doc_num(&self) -> usize {
        self.ids.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Document ids in corpus order
    #[inline]
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Document vectors in corpus order, parallel to `ids()`
    #[inline]
    pub fn vectors(&self) -> &[SparseVector] {
        &self.vectors
    }

    #[inline]
    pub fn idf(&self) -> &IdfTable {
        &self.idf
    }
}
