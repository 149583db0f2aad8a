use tracing_subscriber::EnvFilter;

pub const APP_NAME: &str = "Symptom Checker";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Cosmetic pause between submitting symptoms and showing the result
pub const DEFAULT_DELAY_MS: u64 = 1000;

/// Log filter used when `RUST_LOG` is not set
pub fn log_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "symptom_checker=warn",
        1 => "symptom_checker=info",
        2 => "symptom_checker=debug",
        _ => "symptom_checker=trace",
    }
}

/// Install the tracing subscriber. Logs go to stderr so stdout carries only
/// the diagnosis output.
pub fn init_tracing(verbosity: u8) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(log_filter(verbosity))),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
