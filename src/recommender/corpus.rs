use serde::{Deserialize, Serialize};

use super::catalog::{Catalog, Destination};

/// Field repeat counts used when flattening a destination into document
/// text. Repeating a field multiplies its term counts, which is how the
/// name and category tags end up weighing more than the prose description.
///
/// The defaults are empirically tuned values. They are exposed as knobs,
/// but changing them changes every similarity score the engine produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldWeights {
    pub name: usize,
    pub kinds: usize,
    pub features: usize,
    pub description: usize,
}

impl Default for FieldWeights {
    fn default() -> Self {
        Self {
            name: 2,
            kinds: 2,
            features: 1,
            description: 1,
        }
    }
}

/// A catalog entry flattened into raw document text, keyed by its catalog
/// id.
#[derive(Debug, Clone, PartialEq)]
pub struct RawDocument {
    pub id: String,
    pub text: String,
}

/// Flatten every catalog entry into weighted document text, in catalog
/// order. No entry is skipped: a destination with nothing but a name still
/// produces a (short) document, so document position stays aligned with
/// catalog position.
pub fn build_corpus(catalog: &Catalog, weights: &FieldWeights) -> Vec<RawDocument> {
    catalog
        .iter()
        .map(|(id, destination)| RawDocument {
            id: id.clone(),
            text: weighted_text(destination, weights),
        })
        .collect()
}

fn weighted_text(destination: &Destination, weights: &FieldWeights) -> String {
    let mut parts: Vec<&str> = Vec::new();
    for _ in 0..weights.name {
        parts.push(&destination.name);
    }
    for _ in 0..weights.kinds {
        for kind in &destination.kinds {
            parts.push(kind);
        }
    }
    for _ in 0..weights.features {
        for feature in &destination.sustainability_features {
            parts.push(feature);
        }
    }
    if !destination.description.is_empty() {
        for _ in 0..weights.description {
            parts.push(&destination.description);
        }
    }
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommender::tokenizer::tokenize;

    fn destination(name: &str, kinds: &[&str], features: &[&str], description: &str) -> Destination {
        Destination {
            name: name.to_string(),
            kinds: kinds.iter().map(|s| s.to_string()).collect(),
            description: description.to_string(),
            sustainability_features: features.iter().map(|s| s.to_string()).collect(),
            eco_score: 5.0,
            budget_level: "medium".to_string(),
        }
    }

    #[test]
    fn repeats_fields_per_weight() {
        let mut catalog = Catalog::new();
        catalog.insert(
            "reef",
            destination("Reef Bay", &["beach"], &["coral nurseries"], "quiet coves"),
        );
        let docs = build_corpus(&catalog, &FieldWeights::default());
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].id, "reef");

        let mut counts = crate::recommender::frequency::TermCounts::new();
        counts.add_terms(&tokenize(&docs[0].text));
        assert_eq!(counts.term_count("reef"), 2);
        assert_eq!(counts.term_count("bay"), 2);
        assert_eq!(counts.term_count("beach"), 2);
        assert_eq!(counts.term_count("coral"), 1);
        assert_eq!(counts.term_count("coves"), 1);
    }

    #[test]
    fn missing_optional_fields_contribute_nothing() {
        let mut catalog = Catalog::new();
        catalog.insert("spare", destination("Spare Rock", &[], &[], ""));
        let docs = build_corpus(&catalog, &FieldWeights::default());
        assert_eq!(tokenize(&docs[0].text), vec!["spare", "rock", "spare", "rock"]);
    }

    #[test]
    fn keeps_catalog_order_and_skips_nothing() {
        let mut catalog = Catalog::new();
        catalog
            .insert("b", destination("B", &[], &[], ""))
            .insert("a", destination("A", &[], &[], ""))
            .insert("c", destination("C", &[], &[], ""));
        let ids: Vec<String> = build_corpus(&catalog, &FieldWeights::default())
            .into_iter()
            .map(|doc| doc.id)
            .collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn zero_weight_drops_a_field() {
        let weights = FieldWeights {
            name: 2,
            kinds: 0,
            features: 1,
            description: 1,
        };
        let mut catalog = Catalog::new();
        catalog.insert(
            "reef",
            destination("Reef", &["beach"], &[], "sand"),
        );
        let docs = build_corpus(&catalog, &weights);
        let tokens = tokenize(&docs[0].text);
        assert!(!tokens.contains(&"beach".to_string()));
        assert_eq!(tokens, vec!["reef", "reef", "sand"]);
    }
}
