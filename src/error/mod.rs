use thiserror::Error;

/// Errors raised while building the symptom table or handling user input
#[derive(Error, Debug)]
pub enum SymptomError {
    #[error("Please enter some symptoms.")]
    BlankInput,

    #[error("symptom table has no entries")]
    EmptyTable,

    #[error("symptom phrase must not be empty")]
    EmptyPhrase,

    #[error("duplicate symptom phrase: '{0}'")]
    DuplicatePhrase(String),

    #[error("invalid symptom table: {0}")]
    InvalidTable(#[from] serde_json::Error),

    #[error("cannot compile pattern for '{phrase}': {source}")]
    Pattern {
        phrase: String,
        #[source]
        source: regex::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
