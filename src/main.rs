mod config;
mod error;
mod matcher;
mod table;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::time::Duration;
use tracing::info;

use crate::table::SymptomTable;

#[derive(Parser)]
#[command(author, version, about = "Suggests possible conditions for the symptoms you describe")]
struct Cli {
    /// Diagnose these symptoms and exit instead of starting a session
    #[arg(short, long)]
    symptoms: Option<String>,

    /// Cosmetic pause before showing results, in milliseconds (0 disables)
    #[arg(long, default_value_t = config::DEFAULT_DELAY_MS)]
    delay_ms: u64,

    /// Print the one-shot result as JSON
    #[arg(long, requires = "symptoms")]
    json: bool,

    /// List the symptoms the checker recognises and exit
    #[arg(long, default_value_t = false)]
    list: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Diagnose a single input given on the command line
async fn run_once<W: Write>(
    table: &SymptomTable,
    raw: &str,
    cli: &Cli,
    out: &mut W,
) -> Result<()> {
    let input = ui::validate_input(raw).context("Input Error")?;
    let diagnosis = matcher::diagnose(table, input);

    if cli.json {
        serde_json::to_writer_pretty(&mut *out, &diagnosis)?;
        writeln!(out)?;
        return Ok(());
    }

    ui::show_diagnosing(out, Duration::from_millis(cli.delay_ms)).await?;
    ui::write_diagnosis(out, &diagnosis)?;
    Ok(())
}

/// Prompt repeatedly until the user quits or input ends
async fn run_session<R: BufRead, W: Write>(
    table: &SymptomTable,
    delay: Duration,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    ui::display_welcome(out)?;

    loop {
        let Some(user_input) = ui::read_symptoms(input, out)? else {
            break;
        };

        if ui::is_quit(&user_input) {
            break;
        }

        let symptoms = match ui::validate_input(&user_input) {
            Ok(symptoms) => symptoms,
            Err(e) => {
                ui::display_input_error(out, &e)?;
                continue;
            }
        };

        let diagnosis = matcher::diagnose(table, symptoms);
        ui::show_diagnosing(out, delay).await?;
        ui::write_diagnosis(out, &diagnosis)?;
    }

    ui::display_goodbye(out)?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    config::init_tracing(cli.verbose);

    info!("{} v{} starting", config::APP_NAME, config::APP_VERSION);

    let table = SymptomTable::builtin().context("failed to load the built-in symptom table")?;
    info!(entries = table.len(), "symptom table loaded");

    let mut stdout = io::stdout().lock();

    if cli.list {
        ui::write_known_symptoms(&mut stdout, &table)?;
        return Ok(());
    }

    match cli.symptoms.as_deref() {
        Some(raw) => run_once(&table, raw, &cli, &mut stdout).await,
        None => {
            let delay = Duration::from_millis(cli.delay_ms);
            run_session(&table, delay, &mut io::stdin().lock(), &mut stdout).await
        }
    }
}
