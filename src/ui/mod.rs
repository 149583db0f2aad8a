use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, BufRead, Write};
use std::time::Duration;
use tracing::warn;

use crate::error::SymptomError;
use crate::matcher::Diagnosis;
use crate::table::SymptomTable;

pub const DISCLAIMER: &str = "Please remember, this is just a suggestion. \
                              Consult a healthcare professional for an accurate diagnosis.";

const QUIT_WORDS: [&str; 3] = ["q", "quit", "exit"];

/// Display welcome message
pub fn display_welcome<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "╔═══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                    Symptom Checker Chatbot                    ║")?;
    writeln!(out, "╠═══════════════════════════════════════════════════════════════╣")?;
    writeln!(out, "║  Describe how you feel and the checker will suggest possible  ║")?;
    writeln!(out, "║  conditions, treatments and notes for the symptoms it knows.  ║")?;
    writeln!(out, "║                                                               ║")?;
    writeln!(out, "║          WARNING: This is NOT a diagnosis tool.               ║")?;
    writeln!(out, "║     Always consult a medical professional for proper          ║")?;
    writeln!(out, "║     diagnosis and treatment.                                  ║")?;
    writeln!(out, "╚═══════════════════════════════════════════════════════════════╝")?;
    writeln!(out, "  Type 'q' to quit.")
}

/// Prompt for symptoms and read one line. Returns `None` at end of input.
pub fn read_symptoms<R: BufRead, W: Write>(
    reader: &mut R,
    out: &mut W,
) -> Result<Option<String>, SymptomError> {
    writeln!(out, "\n═══════════════════════════════════════════════════════════════")?;
    writeln!(out, "            Enter your symptoms (comma separated):")?;
    writeln!(out, "═══════════════════════════════════════════════════════════════")?;
    write!(out, "> ")?;
    out.flush()?;

    let mut input = String::new();
    if reader.read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim_end_matches(['\r', '\n']).to_string()))
}

pub fn is_quit(input: &str) -> bool {
    let word = input.trim().to_lowercase();
    QUIT_WORDS.contains(&word.as_str())
}

/// Reject blank or whitespace-only input before it reaches the matcher
pub fn validate_input(raw: &str) -> Result<&str, SymptomError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        warn!("rejected blank symptom input");
        return Err(SymptomError::BlankInput);
    }
    Ok(trimmed)
}

/// Display a validation error the way the checker titles them
pub fn display_input_error<W: Write>(out: &mut W, err: &SymptomError) -> io::Result<()> {
    writeln!(out, "Input Error: {}", err)
}

/// Show "Diagnosing..." and hold a spinner for `delay`
pub async fn show_diagnosing<W: Write>(out: &mut W, delay: Duration) -> io::Result<()> {
    writeln!(out, "\nDiagnosing...\n")?;
    out.flush()?;
    if delay.is_zero() {
        return Ok(());
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message("Checking symptoms...");
    pb.enable_steady_tick(Duration::from_millis(100));

    tokio::time::sleep(delay).await;

    pb.finish_and_clear();
    Ok(())
}

/// Write the diagnosis block followed by the disclaimer
pub fn write_diagnosis<W: Write>(out: &mut W, diagnosis: &Diagnosis<'_>) -> io::Result<()> {
    for line in diagnosis.lines() {
        writeln!(out, "{}", line)?;
    }
    writeln!(out)?;
    writeln!(out, "{}", DISCLAIMER)?;
    Ok(())
}

/// List every phrase the table recognises, with the condition it suggests
pub fn write_known_symptoms<W: Write>(out: &mut W, table: &SymptomTable) -> io::Result<()> {
    writeln!(out, "Known symptoms ({}):", table.len())?;
    for entry in table.iter() {
        writeln!(out, "  - {} ({})", entry.phrase(), entry.record().disease)?;
    }
    Ok(())
}

/// Display goodbye message
pub fn display_goodbye<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\nGoodbye! Take care!")
}
