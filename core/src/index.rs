use crate::tokenizer::{tokenize_with, TokenizerOptions};
use std::collections::{BTreeMap, HashMap};

pub type TermId = u32;
pub type DocId = u32;

#[derive(Debug, Clone)]
pub struct Posting {
    pub doc_id: DocId,
    pub weight: f64, // normalized tf-idf weight
}

/// Term weighting knobs, named after the usual vectorizer parameters.
#[derive(Debug, Clone, Copy)]
pub struct Weighting {
    /// idf = ln((1 + n) / (1 + df)) + 1 instead of ln(n / df) + 1
    pub smooth_idf: bool,
    /// tf = 1 + ln(count) instead of the raw count
    pub sublinear_tf: bool,
}

impl Default for Weighting {
    fn default() -> Self {
        Self { smooth_idf: true, sublinear_tf: false }
    }
}

/// TF-IDF index over a fixed document list. The vocabulary is frozen at build time.
#[derive(Debug, Clone, Default)]
pub struct TfIdfIndex {
    pub dictionary: HashMap<String, TermId>,
    pub df: Vec<u32>,
    pub idf: Vec<f64>,
    pub postings: HashMap<TermId, Vec<Posting>>, // postings sorted by doc_id
    pub num_docs: u32,
    weighting: Weighting,
    tokenizer: TokenizerOptions,
}

impl TfIdfIndex {
    pub fn build<S: AsRef<str>>(docs: &[S], weighting: Weighting, tokenizer: TokenizerOptions) -> Self {
        let mut dictionary: HashMap<String, TermId> = HashMap::new();
        let mut df: Vec<u32> = Vec::new();
        let mut doc_tfs: Vec<BTreeMap<TermId, u32>> = Vec::with_capacity(docs.len());

        for doc in docs {
            let mut tf_counts: BTreeMap<TermId, u32> = BTreeMap::new();
            for term in tokenize_with(doc.as_ref(), tokenizer) {
                let next = dictionary.len() as TermId;
                let tid = *dictionary.entry(term).or_insert(next);
                if df.len() <= tid as usize { df.resize(tid as usize + 1, 0); }
                let count = tf_counts.entry(tid).or_insert(0);
                if *count == 0 { df[tid as usize] += 1; }
                *count += 1;
            }
            doc_tfs.push(tf_counts);
        }

        let num_docs = docs.len() as u32;
        let idf: Vec<f64> = df.iter().map(|&d| idf_for(num_docs, d, weighting)).collect();

        // Weights and norms per document, summed in term id order
        let mut postings: HashMap<TermId, Vec<Posting>> = HashMap::new();
        for (doc_id, tf_counts) in doc_tfs.into_iter().enumerate() {
            let weights: Vec<(TermId, f64)> = tf_counts
                .into_iter()
                .map(|(tid, raw)| (tid, tf_for(raw, weighting) * idf[tid as usize]))
                .collect();
            let mut norm = weights.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
            if norm == 0.0 { norm = 1.0; }
            for (tid, w) in weights {
                postings.entry(tid).or_default().push(Posting { doc_id: doc_id as DocId, weight: w / norm });
            }
        }
        for plist in postings.values_mut() {
            plist.sort_by_key(|p| p.doc_id);
        }

        tracing::debug!(num_docs, num_terms = dictionary.len(), "built tf-idf index");
        Self { dictionary, df, idf, postings, num_docs, weighting, tokenizer }
    }

    pub fn vocabulary_size(&self) -> usize { self.dictionary.len() }

    /// L2-normalized query weights sorted by term id. Out-of-vocabulary terms are
    /// ignored, so an empty or all-stopword query yields an empty (zero) vector.
    pub fn vectorize(&self, query: &str) -> Vec<(TermId, f64)> {
        let mut tf_q_raw: BTreeMap<TermId, u32> = BTreeMap::new();
        for term in tokenize_with(query, self.tokenizer) {
            if let Some(&tid) = self.dictionary.get(&term) {
                *tf_q_raw.entry(tid).or_insert(0) += 1;
            }
        }
        let mut q_weights: Vec<(TermId, f64)> = tf_q_raw
            .into_iter()
            .map(|(tid, raw)| (tid, tf_for(raw, self.weighting) * self.idf[tid as usize]))
            .collect();
        let norm = q_weights.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, w) in q_weights.iter_mut() { *w /= norm; }
        }
        q_weights
    }

    /// Cosine similarity of the query against every document, indexed by corpus position.
    pub fn scores(&self, query: &str) -> Vec<f32> {
        let mut scores = vec![0.0f64; self.num_docs as usize];
        for (tid, q_w) in self.vectorize(query) {
            if let Some(plist) = self.postings.get(&tid) {
                for p in plist {
                    scores[p.doc_id as usize] += p.weight * q_w; // cosine since doc weights are normalized
                }
            }
        }
        scores.into_iter().map(|s| s as f32).collect()
    }
}

fn idf_for(num_docs: u32, df: u32, weighting: Weighting) -> f64 {
    let n = num_docs as f64;
    let d = df as f64;
    if weighting.smooth_idf {
        ((1.0 + n) / (1.0 + d)).ln() + 1.0
    } else {
        (n / d.max(1.0)).ln() + 1.0
    }
}

fn tf_for(raw: u32, weighting: Weighting) -> f64 {
    if raw == 0 { return 0.0; }
    if weighting.sublinear_tf { 1.0 + (raw as f64).ln() } else { raw as f64 }
}
