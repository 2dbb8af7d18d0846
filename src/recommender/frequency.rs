use indexmap::IndexMap;

/// TermCounts struct
/// Manages the occurrence counts of terms within a single piece of text.
/// Used as the base data for TF (term frequency) calculation.
///
/// Counts are kept in first-seen order so that everything derived from them
/// is reproducible run to run.
///
/// # Examples
/// ```
/// use destination_recommender::recommender::frequency::TermCounts;
/// let mut counts = TermCounts::new();
/// counts.add_term("coral").add_term("reef").add_term("coral");
///
/// assert_eq!(counts.term_count("coral"), 2);
/// assert_eq!(counts.total_term_count(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermCounts {
    term_count: IndexMap<String, u32>,
    total_term_count: u64,
}

/// Implementation for adding terms
impl TermCounts {
    /// Create a new TermCounts
    pub fn new() -> Self {
        TermCounts {
            term_count: IndexMap::new(),
            total_term_count: 0,
        }
    }

    /// Add a term
    ///
    /// # Arguments
    /// * `term` - term to add
    #[inline]
    pub fn add_term(&mut self, term: &str) -> &mut Self {
        let count = self.term_count.entry(term.to_string()).or_insert(0);
        *count += 1;
        self.total_term_count += 1;
        self
    }

    /// Add multiple terms
    ///
    /// # Arguments
    /// * `terms` - Slice of terms to add
    #[inline]
    pub fn add_terms<T>(&mut self, terms: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        for term in terms {
            self.add_term(term.as_ref());
        }
        self
    }
}

/// Implementation for reading counts back
impl TermCounts {
    /// Get the occurrence count of a term
    #[inline]
    pub fn term_count(&self, term: &str) -> u32 {
        self.term_count.get(term).copied().unwrap_or(0)
    }

    /// Sum of all occurrence counts
    #[inline]
    pub fn total_term_count(&self) -> u64 {
        self.total_term_count
    }

    /// Denominator for TF calculation.
    /// Floored to 1 so that an empty text never divides by zero.
    #[inline]
    pub fn tf_denominator(&self) -> u64 {
        self.total_term_count.max(1)
    }

    /// Number of distinct terms
    #[inline]
    pub fn term_num(&self) -> usize {
        self.term_count.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.term_count.is_empty()
    }

    /// Iterate over `(term, count)` pairs in first-seen order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.term_count.iter().map(|(term, &count)| (term.as_str(), count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_accumulate() {
        let mut counts = TermCounts::new();
        counts.add_terms(&["solar", "solar", "houseboat"]);
        assert_eq!(counts.term_count("solar"), 2);
        assert_eq!(counts.term_count("houseboat"), 1);
        assert_eq!(counts.term_count("missing"), 0);
        assert_eq!(counts.total_term_count(), 3);
        assert_eq!(counts.term_num(), 2);
    }

    #[test]
    fn tf_denominator_never_zero() {
        let counts = TermCounts::new();
        assert!(counts.is_empty());
        assert_eq!(counts.total_term_count(), 0);
        assert_eq!(counts.tf_denominator(), 1);
    }

    #[test]
    fn iteration_is_first_seen_order() {
        let mut counts = TermCounts::new();
        counts.add_terms(&["b", "a", "b", "c"]);
        let terms: Vec<&str> = counts.iter().map(|(term, _)| term).collect();
        assert_eq!(terms, vec!["b", "a", "c"]);
    }
}
