use crate::inventory::PhonemeInventory;
use crate::ipa::SymbolClass;
use serde::{Deserialize, Serialize};

/// Cluster and sequence restrictions for a language
///
/// Purely advisory: the evolution engine reports violations as diagnostics
/// but never blocks a generation on them, since sound change routinely
/// passes through illegal intermediate stages.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Phonotactics {
    /// Permitted word-initial consonant clusters (empty list = no restriction)
    pub onset_clusters: Vec<String>,
    /// Permitted word-internal consonant clusters (empty list = no restriction)
    pub medial_clusters: Vec<String>,
    /// Permitted word-final consonant clusters (empty list = no restriction)
    pub coda_clusters: Vec<String>,
    /// Sequences that may never appear anywhere in a form
    pub illegal_sequences: Vec<String>,
}

impl Phonotactics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sequences in `form` that violate this profile
    pub fn violations(&self, form: &[String], inventory: &PhonemeInventory) -> Vec<String> {
        let mut found = Vec::new();
        let joined = form.concat();

        for sequence in &self.illegal_sequences {
            if !sequence.is_empty() && joined.contains(sequence.as_str()) {
                found.push(sequence.clone());
            }
        }

        for (position, cluster) in consonant_clusters(form, inventory) {
            let permitted = match position {
                ClusterPosition::Onset => &self.onset_clusters,
                ClusterPosition::Medial => &self.medial_clusters,
                ClusterPosition::Coda => &self.coda_clusters,
            };
            if !permitted.is_empty() && !permitted.contains(&cluster) {
                found.push(cluster);
            }
        }

        found
    }
}

enum ClusterPosition {
    Onset,
    Medial,
    Coda,
}

/// Maximal consonant runs of length >= 2 with their word position
fn consonant_clusters(
    form: &[String],
    inventory: &PhonemeInventory,
) -> Vec<(ClusterPosition, String)> {
    let mut clusters = Vec::new();
    let mut run_start: Option<usize> = None;

    for (i, symbol) in form.iter().enumerate() {
        let is_consonant = inventory.classify(symbol) == Some(SymbolClass::Consonant);
        if is_consonant {
            run_start.get_or_insert(i);
        }
        let run_ends = !is_consonant || i + 1 == form.len();
        if run_ends {
            if let Some(start) = run_start.take() {
                let end = if is_consonant { i + 1 } else { i };
                if end - start >= 2 {
                    let position = if start == 0 {
                        ClusterPosition::Onset
                    } else if end == form.len() {
                        ClusterPosition::Coda
                    } else {
                        ClusterPosition::Medial
                    };
                    clusters.push((position, form[start..end].concat()));
                }
            }
        }
    }

    clusters
}
