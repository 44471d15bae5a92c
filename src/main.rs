use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use subgen::{Generator, output};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "subgen",
    about = "Generate randomized email subscription fixtures",
    version
)]
struct Cli {
    /// Number of email subscriptions to generate
    #[arg(short = 'n', long)]
    number: Option<usize>,

    /// Output file (created or truncated)
    #[arg(short = 'o', long, default_value = output::DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Seed the generator for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Pretty-print the JSON array
    #[arg(long)]
    pretty: bool,
}

// Fatal errors are reported by anyhow on stderr regardless of RUST_LOG.
fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    run(&cli)
}

/// Initialize tracing on stderr with an env-driven filter (default WARN).
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .compact();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

fn run(cli: &Cli) -> Result<()> {
    // A zero count is a request for guidance, not an error.
    let count = match cli.number {
        Some(n) if n > 0 => n,
        _ => {
            Cli::command()
                .print_long_help()
                .context("failed to print usage")?;
            return Ok(());
        }
    };

    let generated = match cli.seed {
        Some(seed) => {
            info!(count, seed, "generating seeded subscriptions");
            Generator::seeded(seed).generate(count)
        }
        None => {
            info!(count, "generating subscriptions");
            Generator::from_entropy().generate(count)
        }
    };
    let subscriptions = generated.context("failed to generate subscriptions")?;

    let written = if cli.pretty {
        output::to_json_pretty(&subscriptions)
            .and_then(|body| output::write_file(&cli.output, &body))
    } else {
        output::write_subscriptions(&cli.output, &subscriptions)
    };
    written.with_context(|| format!("failed to save fixtures to {}", cli.output.display()))?;

    writeln!(
        io::stdout().lock(),
        r#"Successfully generated "{count}" email subscriptions in the "{}" file"#,
        cli.output.display()
    )
    .context("failed to print confirmation")?;
    Ok(())
}
