//! Keyword search over the enterprise directory
//!
//! Titles, descriptions and tags are split into lowercase alphanumeric terms.
//! A listing matches when every query term is a prefix of one of its terms.
//! Matches rank by how many of their terms were hit, then by title.

use std::collections::HashSet;

use shared::{ComponentId, Directory, component_info};
use crate::traits::SearchIndex;

#[derive(Debug, Clone)]
struct IndexedEnterprise {
    id: String,
    sort_title: String,
    terms: Vec<String>,
}

/// In-memory keyword index built once from the directory
#[derive(Debug, Clone, Default)]
pub struct KeywordSearchIndex {
    entries: Vec<IndexedEnterprise>,
}

impl KeywordSearchIndex {
    pub fn build(directory: &Directory) -> Self {
        let entries: Vec<IndexedEnterprise> = directory
            .enterprises()
            .iter()
            .map(|enterprise| {
                let mut terms = tokenize(&enterprise.title);
                terms.extend(tokenize(&enterprise.description));
                for tag in &enterprise.tags {
                    terms.extend(tokenize(tag));
                }
                terms.sort();
                terms.dedup();

                IndexedEnterprise {
                    id: enterprise.id.clone(),
                    sort_title: enterprise.title.to_lowercase(),
                    terms,
                }
            })
            .collect();

        let term_count: usize = entries.iter().map(|e| e.terms.len()).sum();
        component_info!(ComponentId::Directory, "🔎 Indexed {} enterprises ({} terms)", entries.len(), term_count);

        Self { entries }
    }

    fn score(entry: &IndexedEnterprise, query_terms: &[String]) -> Option<usize> {
        let mut hits = HashSet::new();
        for query_term in query_terms {
            let matched: Vec<&String> = entry
                .terms
                .iter()
                .filter(|term| term.starts_with(query_term.as_str()))
                .collect();
            if matched.is_empty() {
                return None;
            }
            hits.extend(matched);
        }
        Some(hits.len())
    }
}

impl SearchIndex for KeywordSearchIndex {
    fn search(&self, query: &str) -> Vec<String> {
        let query_terms = tokenize(query);

        // A blank search browses the whole directory
        if query_terms.is_empty() {
            return self.entries.iter().map(|e| e.id.clone()).collect();
        }

        let mut scored: Vec<(usize, &IndexedEnterprise)> = self
            .entries
            .iter()
            .filter_map(|entry| Self::score(entry, &query_terms).map(|score| (score, entry)))
            .collect();
        scored.sort_by(|(a_score, a), (b_score, b)| {
            b_score.cmp(a_score).then_with(|| a.sort_title.cmp(&b.sort_title))
        });

        scored.into_iter().map(|(_, entry)| entry.id.clone()).collect()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Lowercase alphanumeric runs of a text
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|term| !term.is_empty())
        .map(str::to_lowercase)
        .collect()
}
