use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Serialize;

use crate::index::{total_terms, TermFreq, TermFreqIndex};
use crate::tokenizer::Lexer;

/// One ranked hit: the document key and its accumulated TF-IDF score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub document: String,
    pub score: f64,
}

/// Score every document in the index against a free-text query.
///
/// The query runs through the same lexer as document content, so its terms
/// match index terms under identical normalization. Documents sharing no
/// terms with the query (score exactly zero) are dropped. Results come back
/// sorted by descending score, ties broken by document key, so identical
/// (query, index) pairs always produce the same ordering.
pub fn search_index(query: &str, index: &TermFreqIndex) -> Vec<SearchResult> {
    let terms: Vec<String> = Lexer::new(query).collect();

    let mut idf_by_term: HashMap<&str, f64> = HashMap::with_capacity(terms.len());
    for term in &terms {
        idf_by_term
            .entry(term)
            .or_insert_with(|| inverse_document_frequency(term, index));
    }

    let mut results = Vec::new();
    for (document, doc) in index {
        let total = total_terms(doc);
        if total == 0 {
            continue;
        }

        let mut score = 0.0;
        for term in &terms {
            score += term_frequency(term, doc, total) * idf_by_term[term.as_str()];
        }
        if score == 0.0 {
            continue;
        }

        results.push(SearchResult {
            document: document.clone(),
            score,
        });
    }

    results.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.document.cmp(&b.document))
    });

    results
}

/// Fraction of the document's term occurrences attributable to `term`.
fn term_frequency(term: &str, doc: &TermFreq, total: u64) -> f64 {
    let count = doc.get(term).copied().unwrap_or(0);
    f64::from(count) / total as f64
}

/// Log-scaled rarity of `term` across the corpus. The divisor is clamped to
/// one document so a term nobody contains still scores log10(N) instead of
/// dividing by zero.
fn inverse_document_frequency(term: &str, index: &TermFreqIndex) -> f64 {
    let docs = index.len() as f64;
    let containing = index
        .values()
        .filter(|doc| doc.contains_key(term))
        .count() as f64;
    (docs / containing.max(1.0)).log10()
}
