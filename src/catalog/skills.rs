//! Bilingual skill dictionary: canonical names, synonyms, and categories
//!
//! The dictionary is a finite curated table, not a learned model. Synonyms
//! cover common spelling variants and Arabic transliterations so the matcher
//! works on job postings written in either language.

use crate::error::{Result, SkillPathError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Category tag for a canonical skill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Programming,
    Database,
    Web,
    Mobile,
    Design,
    Marketing,
    Management,
    Soft,
    Other,
}

impl SkillCategory {
    /// All categories that can hold job skills, in a stable iteration order
    pub fn all() -> [SkillCategory; 9] {
        [
            SkillCategory::Programming,
            SkillCategory::Database,
            SkillCategory::Web,
            SkillCategory::Mobile,
            SkillCategory::Design,
            SkillCategory::Marketing,
            SkillCategory::Management,
            SkillCategory::Soft,
            SkillCategory::Other,
        ]
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SkillCategory::Programming => "programming",
            SkillCategory::Database => "database",
            SkillCategory::Web => "web",
            SkillCategory::Mobile => "mobile",
            SkillCategory::Design => "design",
            SkillCategory::Marketing => "marketing",
            SkillCategory::Management => "management",
            SkillCategory::Soft => "soft",
            SkillCategory::Other => "other",
        };
        write!(f, "{}", name)
    }
}

/// One catalog entry: a canonical skill name plus its synonym variants
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillSynonymEntry {
    pub canonical: String,
    pub synonyms: Vec<String>,
    pub category: SkillCategory,
}

impl SkillSynonymEntry {
    fn new(canonical: &str, synonyms: &[&str], category: SkillCategory) -> Self {
        Self {
            canonical: canonical.to_string(),
            synonyms: synonyms.iter().map(|s| s.to_string()).collect(),
            category,
        }
    }

    /// Canonical form followed by every synonym, all lowercased
    pub fn variants(&self) -> impl Iterator<Item = String> + '_ {
        std::iter::once(self.canonical.to_lowercase())
            .chain(self.synonyms.iter().map(|s| s.to_lowercase()))
    }
}

/// Immutable skill dictionary, loaded once and shared behind the matcher
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCatalog {
    entries: Vec<SkillSynonymEntry>,
}

impl SkillCatalog {
    /// Build a catalog from entries, validating canonical-name uniqueness
    pub fn new(entries: Vec<SkillSynonymEntry>) -> Result<Self> {
        let mut seen = HashSet::new();
        for entry in &entries {
            let key = entry.canonical.to_lowercase();
            if !seen.insert(key) {
                return Err(SkillPathError::Catalog(format!(
                    "duplicate canonical skill name: {}",
                    entry.canonical
                )));
            }
        }
        Ok(Self { entries })
    }

    /// The built-in bilingual dictionary
    pub fn builtin() -> Self {
        use SkillCategory::*;
        let entries = vec![
            // Programming
            SkillSynonymEntry::new(
                "javascript",
                &["js", "جافاسكريبت", "جافا سكريبت", "javascript es6", "es6"],
                Programming,
            ),
            SkillSynonymEntry::new("python", &["بايثون", "python3", "python 3"], Programming),
            SkillSynonymEntry::new("react", &["reactjs", "ريأكت", "react.js"], Programming),
            SkillSynonymEntry::new("nodejs", &["node.js", "نود جي اس", "node"], Programming),
            SkillSynonymEntry::new("typescript", &["ts", "تايب سكريبت"], Programming),
            SkillSynonymEntry::new("java", &["جافا"], Programming),
            SkillSynonymEntry::new("c++", &["سي بلس بلس"], Programming),
            SkillSynonymEntry::new("php", &["بي إتش بي"], Programming),
            // Databases
            SkillSynonymEntry::new("database", &["قاعدة بيانات", "قواعد البيانات", "db"], Database),
            SkillSynonymEntry::new("mongodb", &["mongo", "مونجو دي بي"], Database),
            SkillSynonymEntry::new("mysql", &["ماي إس كيو إل"], Database),
            SkillSynonymEntry::new("postgresql", &["postgres", "بوستجرس"], Database),
            SkillSynonymEntry::new("sql", &["إس كيو إل"], Database),
            // Web
            SkillSynonymEntry::new("frontend", &["واجهة أمامية", "front-end", "تطوير واجهة"], Web),
            SkillSynonymEntry::new("backend", &["واجهة خلفية", "back-end", "تطوير خلفية"], Web),
            SkillSynonymEntry::new("fullstack", &["فول ستاك", "تطوير كامل"], Web),
            SkillSynonymEntry::new("html", &["إتش تي إم إل"], Web),
            SkillSynonymEntry::new("css", &["سي إس إس"], Web),
            SkillSynonymEntry::new("bootstrap", &["بوتستراب"], Web),
            SkillSynonymEntry::new("tailwind", &["تيل ويند"], Web),
            // Mobile
            SkillSynonymEntry::new("mobile", &["تطبيقات الجوال", "موبايل"], Mobile),
            SkillSynonymEntry::new("react native", &["ريأكت نيتيف"], Mobile),
            SkillSynonymEntry::new("flutter", &["فلاتر"], Mobile),
            SkillSynonymEntry::new("android", &["أندرويد"], Mobile),
            SkillSynonymEntry::new("ios", &["آي أو إس"], Mobile),
            // Design
            SkillSynonymEntry::new("design", &["تصميم", "ديزاين"], Design),
            SkillSynonymEntry::new("ui", &["واجهة المستخدم", "user interface"], Design),
            SkillSynonymEntry::new("ux", &["تجربة المستخدم", "user experience"], Design),
            SkillSynonymEntry::new("figma", &["فيجما"], Design),
            SkillSynonymEntry::new("adobe xd", &["أدوبي إكس دي"], Design),
            SkillSynonymEntry::new("photoshop", &["فوتوشوب"], Design),
            // Marketing
            // "تسويق رقمي" belongs to both entries on purpose: a digital
            // marketing mention also counts as plain marketing
            SkillSynonymEntry::new("marketing", &["تسويق", "تسويق رقمي"], Marketing),
            SkillSynonymEntry::new("digital marketing", &["تسويق رقمي"], Marketing),
            SkillSynonymEntry::new("seo", &["تحسين محركات البحث"], Marketing),
            SkillSynonymEntry::new("social media", &["وسائل التواصل الاجتماعي"], Marketing),
            // Management
            SkillSynonymEntry::new("project management", &["إدارة المشاريع"], Management),
            SkillSynonymEntry::new("agile", &["أجايل", "منهجية أجايل"], Management),
            SkillSynonymEntry::new("scrum", &["سكروم"], Management),
            // Soft skills
            SkillSynonymEntry::new("communication", &["تواصل", "مهارات التواصل"], Soft),
            SkillSynonymEntry::new("leadership", &["قيادة", "مهارات قيادية"], Soft),
            SkillSynonymEntry::new("teamwork", &["عمل جماعي", "مهارات العمل الجماعي"], Soft),
            SkillSynonymEntry::new("problem solving", &["حل المشكلات"], Soft),
            SkillSynonymEntry::new("critical thinking", &["التفكير النقدي"], Soft),
        ];

        Self::new(entries).expect("built-in catalog has unique canonical names")
    }

    pub fn entries(&self) -> &[SkillSynonymEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the entry whose variants contain the given string
    pub fn entry_for(&self, skill: &str) -> Option<&SkillSynonymEntry> {
        let needle = skill.trim().to_lowercase();
        self.entries
            .iter()
            .find(|entry| entry.variants().any(|v| v == needle))
    }
}

impl Default for SkillCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
