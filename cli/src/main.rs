//! CLI entrypoint for corpus-pool
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow, bail};
use clap::Parser;
use corpus_application::{
    CorpusSpec, DrawItemsInput, DrawItemsUseCase, HistoryStore, ResetHistoryInput,
    ResetHistoryUseCase,
};
use corpus_domain::{ConfigIssue, OutputFormat, Severity};
use corpus_infrastructure::{
    ConfigLoader, FileConfig, FileCorpusConfig, JsonCorpusLoader, JsonHistoryStore,
};
use corpus_presentation::{Cli, ConsoleFormatter, OutputFormatter};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = if cli.quiet {
        EnvFilter::new("error")
    } else {
        match cli.verbose {
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("info"),
            2 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"), // -vvv or more
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = load_config(&cli)?;

    // === Dependency Injection ===
    let history_path = cli
        .history
        .clone()
        .unwrap_or_else(|| config.history.resolve_path());
    debug!("Using history file {}", history_path.display());
    let store: Arc<dyn HistoryStore> = Arc::new(JsonHistoryStore::new(history_path));

    // Reset mode
    if cli.is_reset() {
        let input = if cli.reset_all {
            ResetHistoryInput::all()
        } else {
            ResetHistoryInput::domains(cli.reset.clone())
        };

        let output = ResetHistoryUseCase::new(store).execute(input)?;
        if !cli.quiet {
            println!(
                "Reset {} domain(s): {}",
                output.removed.len(),
                output.removed.join(", ")
            );
        }
        return Ok(());
    }

    // Draw mode - corpora from the command line take precedence over config
    let corpora: Vec<CorpusSpec> = if cli.corpora.is_empty() {
        config.corpora.iter().map(FileCorpusConfig::to_spec).collect()
    } else {
        cli.corpora.clone()
    };
    if corpora.is_empty() {
        bail!("No corpora given. Pass CORPUS arguments or configure [[corpora]].");
    }

    let count = cli.count.unwrap_or(config.draw.count);
    let mut input = DrawItemsInput::new(corpora).with_count(count);
    if cli.dry_run {
        input = input.dry_run();
    }

    let mut rng = match cli.seed.or(config.draw.seed) {
        Some(seed) => {
            info!("Using fixed seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    let use_case = DrawItemsUseCase::new(Arc::new(JsonCorpusLoader::new()), store);
    let output = use_case.execute(input, &mut rng)?;

    // Output results
    let format = cli
        .output
        .map(OutputFormat::from)
        .or(config.output.format)
        .unwrap_or_default();
    let formatter = ConsoleFormatter::new()
        .with_corpus(cli.show_corpus || config.output.show_corpus)
        .with_color(config.output.color && !cli.no_color);

    let rendered = match format {
        OutputFormat::Plain => formatter.format_plain(&output.draws),
        OutputFormat::Json => ConsoleFormatter::format_json(&output.draws),
    };
    if !rendered.is_empty() {
        println!("{}", rendered);
    }

    Ok(())
}

/// Load and validate configuration, honouring `--no-config` and `--config`
fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            Severity::Error => error!("{}", issue.message),
            Severity::Warning => warn!("{}", issue.message),
        }
    }
    if issues.iter().any(ConfigIssue::is_error) {
        bail!("Invalid configuration");
    }

    Ok(config)
}
