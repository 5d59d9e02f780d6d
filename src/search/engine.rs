use super::tokenizer::tokenize;
use crate::dataset::types::DatasetRecord;

/// Scores every record against the query and returns the top-k matches.
///
/// The score of a record is the number of distinct tokens its title shares
/// with the query. Only positive scorers are kept. The sort is stable, so
/// records with equal scores keep their dataset order and the output is
/// fully deterministic.
pub fn retrieve(records: &[DatasetRecord], query: &str, top_k: usize) -> Vec<DatasetRecord> {
    let qtoks = tokenize(query);
    if qtoks.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<(usize, &DatasetRecord)> = Vec::new();
    for record in records {
        let ttoks = tokenize(&record.title);
        let score = qtoks.intersection(&ttoks).count();
        if score > 0 {
            scored.push((score, record));
        }
    }

    // Stable sort: ties keep dataset order.
    scored.sort_by(|a, b| b.0.cmp(&a.0));

    scored
        .into_iter()
        .take(top_k)
        .map(|(_, record)| record.clone())
        .collect()
}
