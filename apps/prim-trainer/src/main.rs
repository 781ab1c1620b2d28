//! # Prim Trainer
//!
//! Terminal front-end for the Prim minimum spanning tree trainer.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                apps/prim-trainer (THE BINARY)             │
//! │                                                           │
//! │  ┌─────────────┐    ┌─────────────┐    ┌──────────────┐   │
//! │  │    CLI      │    │  Play loop  │    │  Graph file  │   │
//! │  │   (clap)    │    │   (stdin)   │    │    (toml)    │   │
//! │  └──────┬──────┘    └──────┬──────┘    └──────┬───────┘   │
//! │         │                  │                  │           │
//! │         └──────────────────┼──────────────────┘           │
//! │                            ▼                              │
//! │                    ┌───────────────┐                      │
//! │                    │   prim-core   │                      │
//! │                    │  (THE LOGIC)  │                      │
//! │                    └───────────────┘                      │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Play on the demo town
//! prim-trainer play
//!
//! # Play on your own graph, machine-readable output
//! prim-trainer --config town.toml --json-mode play
//!
//! # Show the full run and graph metrics
//! prim-trainer solve --start 2
//! prim-trainer check
//! ```

mod cli;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    let cli = cli::Cli::parse();

    // PRIM_LOG_FORMAT=json enables machine-parseable logs. Logs go to stderr
    // so they never mix with reports on stdout.
    let log_format = std::env::var("PRIM_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let default_filter = if cli.verbose {
        "prim_trainer=debug,prim_core=debug"
    } else {
        "prim_trainer=info,prim_core=info"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    if !cli.quiet && !cli.json_mode {
        print_banner();
    }

    if let Err(e) = cli::execute(cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the startup banner.
fn print_banner() {
    println!(
        r#"
  ┌─┐┬─┐┬┌┬┐  ┌┬┐┬─┐┌─┐┬┌┐┌┌─┐┬─┐
  ├─┘├┬┘││││   │ ├┬┘├─┤││││├┤ ├┬┘
  ┴  ┴└─┴┴ ┴   ┴ ┴└─┴ ┴┴┘└┘└─┘┴└─

  Prim Trainer v{}

  Pick the cheapest road out of the tree.
"#,
        env!("CARGO_PKG_VERSION")
    );
}
