//! Rectification Chain Resolver - a judicial decision's version history.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::document::{Document, DocumentType, JudicialRuling};

/// Label of the original decision (index 0).
pub const ORIGINAL_DECISION_LABEL: &str = "Judicial Decision";

/// One version of a judicial decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionEntry {
    pub label: String,
    pub authority: String,
    pub court: String,
    pub signature_date: Option<NaiveDate>,
}

impl VersionEntry {
    fn from_ruling(label: String, ruling: &JudicialRuling) -> Self {
        Self {
            label,
            authority: ruling.authority.clone(),
            court: ruling.court.clone(),
            signature_date: ruling.signature_date,
        }
    }
}

/// Ordered versions: the original decision first, then each amendment.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionChain(Vec<VersionEntry>);

impl VersionChain {
    pub fn entries(&self) -> &[VersionEntry] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&VersionEntry> {
        self.0.get(index)
    }

    /// The version currently in force (the latest amendment, or the original).
    pub fn current(&self) -> Option<&VersionEntry> {
        self.0.last()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.0.iter().map(|entry| entry.label.as_str()).collect()
    }

    pub fn into_vec(self) -> Vec<VersionEntry> {
        self.0
    }
}

/// Builds the version chain of a judicial decision.
pub struct VersionChainResolver;

impl VersionChainResolver {
    /// Resolves the chain for a document.
    ///
    /// Index 0 is the decision's own ruling; index k is `rectifications[k-1]`.
    /// Documents that are not judicial decisions have an empty chain.
    pub fn resolve(document: &Document) -> VersionChain {
        if document.document_type() != DocumentType::JudicialDecision {
            return VersionChain::default();
        }

        let original = document.judicial.clone().unwrap_or_default();
        let mut entries = Vec::with_capacity(document.rectifications.len() + 1);
        entries.push(VersionEntry::from_ruling(
            ORIGINAL_DECISION_LABEL.to_string(),
            &original,
        ));
        entries.extend(
            document
                .rectifications
                .iter()
                .enumerate()
                .map(|(i, ruling)| VersionEntry::from_ruling(Self::amendment_label(i + 1), ruling)),
        );
        VersionChain(entries)
    }

    /// Label of the k-th amendment (1-based), e.g. "2nd Amending Decision".
    pub fn amendment_label(k: usize) -> String {
        format!("{} Amending Decision", ordinal(k))
    }
}

fn ordinal(n: usize) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}
