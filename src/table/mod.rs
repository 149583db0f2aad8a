use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

use crate::error::SymptomError;

/// Built-in table, compiled into the binary. Edit `data/symptoms.json` to
/// change what the checker recognises.
const BUILTIN_TABLE: &str = include_str!("../../data/symptoms.json");

/// Disease, treatment and note suggested for one symptom phrase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomRecord {
    pub disease: String,
    pub treatment: String,
    pub info: String,
}

/// Row layout of the table source
#[derive(Debug, Deserialize)]
struct TableRow {
    symptom: String,
    #[serde(flatten)]
    record: SymptomRecord,
}

/// A symptom phrase with its record and compiled word-boundary pattern
#[derive(Debug, Clone)]
pub struct SymptomEntry {
    phrase: String,
    record: SymptomRecord,
    pattern: Regex,
}

impl SymptomEntry {
    fn new(phrase: String, record: SymptomRecord) -> Result<Self, SymptomError> {
        let pattern = Regex::new(&format!(r"\b{}\b", regex::escape(&phrase)))
            .map_err(|source| SymptomError::Pattern { phrase: phrase.clone(), source })?;
        Ok(Self { phrase, record, pattern })
    }

    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    pub fn record(&self) -> &SymptomRecord {
        &self.record
    }

    /// True when the phrase occurs in `text` as whole words. `text` must
    /// already be lowercased; phrases are stored lowercase.
    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

/// Ordered, immutable symptom lookup table
#[derive(Debug, Clone)]
pub struct SymptomTable {
    entries: Vec<SymptomEntry>,
}

impl SymptomTable {
    /// Parse the built-in table
    pub fn builtin() -> Result<Self, SymptomError> {
        Self::from_json(BUILTIN_TABLE)
    }

    /// Parse a JSON array of `{symptom, disease, treatment, info}` rows
    pub fn from_json(json: &str) -> Result<Self, SymptomError> {
        let rows: Vec<TableRow> = serde_json::from_str(json)?;
        Self::from_entries(rows.into_iter().map(|row| (row.symptom, row.record)))
    }

    /// Build a table from phrase/record pairs, keeping their order.
    /// Phrases are trimmed and lowercased and must be unique.
    pub fn from_entries<I, S>(entries: I) -> Result<Self, SymptomError>
    where
        I: IntoIterator<Item = (S, SymptomRecord)>,
        S: Into<String>,
    {
        let mut seen: HashSet<String> = HashSet::new();
        let mut built = Vec::new();

        for (phrase, record) in entries {
            let phrase: String = phrase.into();
            let phrase = phrase.trim().to_lowercase();
            if phrase.is_empty() {
                return Err(SymptomError::EmptyPhrase);
            }
            if !seen.insert(phrase.clone()) {
                return Err(SymptomError::DuplicatePhrase(phrase));
            }
            built.push(SymptomEntry::new(phrase, record)?);
        }

        if built.is_empty() {
            return Err(SymptomError::EmptyTable);
        }

        debug!(entries = built.len(), "symptom table built");
        Ok(Self { entries: built })
    }

    pub fn iter(&self) -> impl Iterator<Item = &SymptomEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(table: &'a SymptomTable, phrase: &str) -> &'a SymptomRecord {
        table.iter().find(|e| e.phrase() == phrase).unwrap().record()
    }

    fn record(disease: &str) -> SymptomRecord {
        SymptomRecord {
            disease: disease.to_string(),
            treatment: format!("{} treatment", disease),
            info: format!("{} info", disease),
        }
    }

    #[test]
    fn builtin_table_has_every_entry_in_order() {
        let table = SymptomTable::builtin().unwrap();
        let phrases: Vec<&str> = table.iter().map(|e| e.phrase()).collect();
        assert_eq!(
            phrases,
            vec![
                "fever",
                "cough",
                "shortness of breath",
                "wheezing",
                "nausea",
                "vomiting",
                "diarrhea",
                "chest pain",
                "palpitations",
                "headache",
                "dizziness",
                "rash",
                "itching",
                "painful urination",
                "blood in my urine",
                "excessive thirst",
                "fatigue",
            ]
        );
        assert_eq!(table.len(), 17);
    }

    #[test]
    fn builtin_records_carry_all_fields() {
        let table = SymptomTable::builtin().unwrap();
        for entry in table.iter() {
            let r = entry.record();
            assert!(!r.disease.is_empty(), "{} has no disease", entry.phrase());
            assert!(!r.treatment.is_empty(), "{} has no treatment", entry.phrase());
            assert!(!r.info.is_empty(), "{} has no info", entry.phrase());
        }
        assert_eq!(lookup(&table, "fever").disease, "Flu");
        assert_eq!(lookup(&table, "chest pain").disease, "Heart Attack");
    }

    #[test]
    fn phrases_are_normalised() {
        let table =
            SymptomTable::from_entries(vec![("  Sore Throat ", record("Pharyngitis"))]).unwrap();
        assert_eq!(table.iter().next().unwrap().phrase(), "sore throat");
    }

    #[test]
    fn duplicate_phrase_is_rejected_ignoring_case() {
        let entries = vec![("fever", record("Flu")), ("FEVER", record("Other"))];
        let err = SymptomTable::from_entries(entries).unwrap_err();
        assert!(matches!(err, SymptomError::DuplicatePhrase(p) if p == "fever"));
    }

    #[test]
    fn empty_phrase_is_rejected() {
        let err = SymptomTable::from_entries(vec![("   ", record("Nothing"))]).unwrap_err();
        assert!(matches!(err, SymptomError::EmptyPhrase));
    }

    #[test]
    fn empty_table_is_rejected() {
        let err = SymptomTable::from_entries(Vec::<(String, SymptomRecord)>::new()).unwrap_err();
        assert!(matches!(err, SymptomError::EmptyTable));
    }

    #[test]
    fn malformed_json_is_rejected() {
        let err = SymptomTable::from_json(r#"[{"symptom": "fever"}]"#).unwrap_err();
        assert!(matches!(err, SymptomError::InvalidTable(_)));
    }

    #[test]
    fn phrase_metacharacters_are_literal() {
        let table = SymptomTable::from_entries(vec![("a.b", record("Dots"))]).unwrap();
        let entry = table.iter().next().unwrap();
        assert!(entry.is_match("I have a.b today"));
        assert!(!entry.is_match("I have axb today"));
    }

    #[test]
    fn entry_matches_whole_words_only() {
        let table = SymptomTable::builtin().unwrap();
        let fever = table.iter().find(|e| e.phrase() == "fever").unwrap();
        assert!(fever.is_match("i have a fever."));
        assert!(!fever.is_match("I have a FEVER."));
        assert!(fever.is_match("fever-like chills"));
        assert!(!fever.is_match("feeling feverish"));
    }
}
