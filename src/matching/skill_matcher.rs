//! Synonym-table skill matching over the static catalog
//!
//! Equivalence is deliberately narrow: case-insensitive exact match or shared
//! membership in one catalog entry's synonym set. Free-text extraction is
//! plain substring scanning with no stemming, so the matcher behaves the same
//! for English and Arabic variants.

use crate::catalog::{SkillCatalog, SkillCategory, SkillSynonymEntry};
use crate::error::{Result, SkillPathError};
use aho_corasick::AhoCorasick;

/// One catalog entry found in a piece of free text
#[derive(Debug, Clone)]
pub struct SkillOccurrence {
    pub canonical: String,
    pub category: SkillCategory,
    /// Total occurrence count across all variants, overlapping counted
    pub frequency: u32,
    /// Distinct variant forms that actually appeared
    pub variants: Vec<String>,
}

/// Pure-function matcher over the immutable skill catalog
pub struct SkillMatcher {
    catalog: SkillCatalog,
    automaton: AhoCorasick,
    /// Maps automaton pattern index to catalog entry index
    pattern_entry: Vec<usize>,
    patterns: Vec<String>,
}

impl SkillMatcher {
    pub fn new(catalog: SkillCatalog) -> Result<Self> {
        let mut patterns = Vec::new();
        let mut pattern_entry = Vec::new();

        for (entry_idx, entry) in catalog.entries().iter().enumerate() {
            for variant in entry.variants() {
                patterns.push(variant);
                pattern_entry.push(entry_idx);
            }
        }

        let automaton = AhoCorasick::builder()
            .build(&patterns)
            .map_err(|e| SkillPathError::Catalog(format!("failed to build skill matcher: {}", e)))?;

        Ok(Self {
            catalog,
            automaton,
            pattern_entry,
            patterns,
        })
    }

    /// Matcher over the built-in bilingual dictionary
    pub fn builtin() -> Result<Self> {
        Self::new(SkillCatalog::builtin())
    }

    pub fn catalog(&self) -> &SkillCatalog {
        &self.catalog
    }

    /// Two skill strings are equivalent iff they match case-insensitively or
    /// both belong to the same catalog entry's synonym set
    pub fn are_equivalent(&self, a: &str, b: &str) -> bool {
        let a = a.trim().to_lowercase();
        let b = b.trim().to_lowercase();
        if a.is_empty() || b.is_empty() {
            return false;
        }
        if a == b {
            return true;
        }

        self.catalog.entries().iter().any(|entry| {
            let mut has_a = false;
            let mut has_b = false;
            for variant in entry.variants() {
                if variant == a {
                    has_a = true;
                }
                if variant == b {
                    has_b = true;
                }
            }
            has_a && has_b
        })
    }

    /// Category of the catalog entry whose synonym set contains `skill`,
    /// `Other` when nothing matches
    pub fn category_of(&self, skill: &str) -> SkillCategory {
        self.catalog
            .entry_for(skill)
            .map(|entry| entry.category)
            .unwrap_or(SkillCategory::Other)
    }

    /// All canonical names with at least one variant occurring as a substring
    /// of `text`, in catalog order
    pub fn extract_from_text(&self, text: &str) -> Vec<String> {
        self.scan_text(text)
            .into_iter()
            .map(|occ| occ.canonical)
            .collect()
    }

    /// Scan free text and report every catalog entry that occurs, with its
    /// total variant occurrence count and the variant forms that matched
    pub fn scan_text(&self, text: &str) -> Vec<SkillOccurrence> {
        let haystack = text.to_lowercase();

        // Per-entry accumulators, indexed by catalog order for determinism
        let mut counts = vec![0u32; self.catalog.len()];
        let mut variants: Vec<Vec<String>> = vec![Vec::new(); self.catalog.len()];

        // Overlapping search so each variant counts independently, matching
        // the per-variant occurrence semantics of the importance formula.
        // Hits embedded in a longer alphanumeric run are rejected so short
        // synonyms like "js" or "db" never fire inside "nodejs" or "mongodb".
        for mat in self.automaton.find_overlapping_iter(&haystack) {
            if !is_standalone(haystack.as_bytes(), mat.start(), mat.end()) {
                continue;
            }
            let entry_idx = self.pattern_entry[mat.pattern().as_usize()];
            counts[entry_idx] += 1;
            let pattern = &self.patterns[mat.pattern().as_usize()];
            if !variants[entry_idx].contains(pattern) {
                variants[entry_idx].push(pattern.clone());
            }
        }

        self.catalog
            .entries()
            .iter()
            .enumerate()
            .filter(|(idx, _)| counts[*idx] > 0)
            .map(|(idx, entry)| SkillOccurrence {
                canonical: entry.canonical.clone(),
                category: entry.category,
                frequency: counts[idx],
                variants: variants[idx].clone(),
            })
            .collect()
    }

    /// Entry backing a skill string, if any
    pub fn entry_for(&self, skill: &str) -> Option<&SkillSynonymEntry> {
        self.catalog.entry_for(skill)
    }
}

/// A hit is standalone when neither of its alphanumeric edges continues an
/// adjacent ASCII alphanumeric run. Arabic variants are multi-byte UTF-8 and
/// never ASCII alphanumeric, so they pass unconditionally.
fn is_standalone(haystack: &[u8], start: usize, end: usize) -> bool {
    let before_ok = start == 0
        || !haystack[start].is_ascii_alphanumeric()
        || !haystack[start - 1].is_ascii_alphanumeric();
    let after_ok = end == haystack.len()
        || !haystack[end - 1].is_ascii_alphanumeric()
        || !haystack[end].is_ascii_alphanumeric();
    before_ok && after_ok
}
