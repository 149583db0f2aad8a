use serde::Serialize;
use tracing::{debug, info};

use crate::table::{SymptomRecord, SymptomTable};

pub const NO_MATCH_MESSAGE: &str =
    "Sorry, no symptoms matched. Please try again with different symptoms.";

/// A table entry found in the user's text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymptomMatch<'a> {
    #[serde(rename = "symptom")]
    pub phrase: &'a str,
    #[serde(flatten)]
    pub record: &'a SymptomRecord,
}

/// Every symptom found in one input, in table order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnosis<'a> {
    matches: Vec<SymptomMatch<'a>>,
    /// Fallback text, present only when nothing matched
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'static str>,
}

impl<'a> Diagnosis<'a> {
    pub fn matches(&self) -> &[SymptomMatch<'a>] {
        &self.matches
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Output lines: four per match, or the single fallback message
    pub fn lines(&self) -> Vec<String> {
        if self.is_empty() {
            return vec![NO_MATCH_MESSAGE.to_string()];
        }

        let mut lines = Vec::with_capacity(self.matches.len() * 4);
        for m in self.matches() {
            lines.push(format!("Symptom: '{}'", m.phrase));
            lines.push(format!("Possible Disease: {}", m.record.disease));
            lines.push(format!("Treatment: {}", m.record.treatment));
            lines.push(format!("Additional Info: {}", m.record.info));
        }
        lines
    }
}

/// Scan `input` for every known symptom phrase.
///
/// The input is lowercased before matching. Results follow the table's
/// order, not the order phrases appear in the input. Overlapping phrases are
/// all reported.
pub fn diagnose<'a>(table: &'a SymptomTable, input: &str) -> Diagnosis<'a> {
    let lowered = input.to_lowercase();
    let matches: Vec<SymptomMatch<'a>> = table
        .iter()
        .filter(|entry| entry.is_match(&lowered))
        .map(|entry| SymptomMatch {
            phrase: entry.phrase(),
            record: entry.record(),
        })
        .collect();

    info!(matched = matches.len(), "diagnosis complete");
    debug!(symptoms = ?matches.iter().map(|m| m.phrase).collect::<Vec<_>>(), "matched phrases");

    let message = matches.is_empty().then_some(NO_MATCH_MESSAGE);
    Diagnosis { matches, message }
}
