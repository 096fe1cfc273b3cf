// CLI entry point for the chord table builder.
//
// Generates every chord voicing and inversion for all twelve roots and
// writes them to chords.json next to this crate. Takes no arguments.
//
// Usage:
//   cargo run -p perfect_chords_builder
//
// Log verbosity follows RUST_LOG (default: info).

use perfect_chords_builder::{BuilderConfig, run};
use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = BuilderConfig::default();

    match run(&config) {
        Ok(report) => {
            println!("Generated chord voicings for {} root notes.", report.root_count);
            println!("Saved to {}", report.output_path.display());
        }
        Err(e) => {
            eprintln!("Error writing chord table: {e}");
            std::process::exit(1);
        }
    }
}
