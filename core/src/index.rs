use std::collections::HashMap;

/// Term -> occurrence count for a single document. Every present key has a
/// count of at least 1; absent keys mean the term does not occur.
pub type TermFreq = HashMap<String, u32>;

/// Document key -> per-document term counts for the whole corpus. Keys are
/// relative, slash-normalized paths rooted at the indexed directory's own
/// name, so a persisted index stays valid across machines.
pub type TermFreqIndex = HashMap<String, TermFreq>;

/// Total number of term occurrences in one document (the sum of all counts,
/// not the number of distinct terms).
pub fn total_terms(doc: &TermFreq) -> u64 {
    doc.values().map(|&count| u64::from(count)).sum()
}
