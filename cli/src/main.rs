//! CLI entrypoint for ad-oracle
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use oracle_application::{EvaluateScript, PredictPerformance, RunReflexion};
use oracle_domain::FeatureMap;
use oracle_infrastructure::{ConfigLoader, CtrModel, FileConfig, StaticKnowledge, wiring};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ad-oracle", version, about = "Ensemble ad performance prediction with council-reviewed script drafting", long_about = None)]
struct Cli {
    /// Path to a config file (overrides discovered configs)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Skip config file discovery and use built-in defaults
    #[arg(long, global = true)]
    no_config: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Predict ad performance from a feature snapshot (JSON file)
    Predict {
        /// Path to the feature snapshot JSON
        features: PathBuf,

        /// Identifier echoed into the prediction
        #[arg(long, default_value = "cli")]
        request_id: String,
    },

    /// Have the council evaluate a script draft
    Evaluate {
        /// Script text, or omit to read from --file
        script: Option<String>,

        /// Read the script from a file instead
        #[arg(long, conflicts_with = "script")]
        file: Option<PathBuf>,

        /// Optional feature snapshot for the data-driven seat
        #[arg(long)]
        visual: Option<PathBuf>,
    },

    /// Run the full draft -> critique -> revise loop
    Run {
        /// Creative context for the director
        context: String,

        /// Target niche (defaults to the configured one)
        #[arg(long)]
        niche: Option<String>,
    },
}

fn load_features(path: &PathBuf) -> Result<FeatureMap> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading features from {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing features in {}", path.display()))
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("loading configuration")?
    };
    config.validate().context("invalid configuration")?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = load_config(&cli)?;
    info!(niche = %config.niche, "Starting ad-oracle");

    // === Dependency Injection ===
    // One CTR model instance shared between the ensemble and its council
    // seat, so runtime training reaches both.
    let ctr = Arc::new(CtrModel::new(config.engines.ctr_weight));

    match cli.command {
        Command::Predict {
            features,
            request_id,
        } => {
            let features = load_features(&features)?;
            let engines = wiring::build_engines(&config, Arc::clone(&ctr));
            let use_case = PredictPerformance::new(engines, config.ensemble)
                .context("assembling ensemble")?;

            let prediction = use_case.execute(&features, &request_id).await;
            println!("{}", serde_json::to_string_pretty(&prediction)?);
        }

        Command::Evaluate {
            script,
            file,
            visual,
        } => {
            let script = match (script, file) {
                (Some(text), _) => text,
                (None, Some(path)) => std::fs::read_to_string(&path)
                    .with_context(|| format!("reading script from {}", path.display()))?,
                (None, None) => bail!("Provide a script argument or --file"),
            };
            let visual = visual.as_ref().map(load_features).transpose()?;

            let panel = wiring::build_panel(&config, Arc::clone(&ctr));
            let council =
                EvaluateScript::new(panel, config.council).context("assembling council")?;

            let verdict = council.execute(&script, visual.as_ref()).await;
            println!("{}", serde_json::to_string_pretty(&verdict)?);
        }

        Command::Run { context, niche } => {
            let niche = niche.unwrap_or_else(|| config.niche.clone());

            let panel = wiring::build_panel(&config, Arc::clone(&ctr));
            let council = Arc::new(
                EvaluateScript::new(panel, config.council).context("assembling council")?,
            );
            let director = wiring::build_director(&config);
            let knowledge = Arc::new(StaticKnowledge::new());

            let use_case = RunReflexion::new(director, council, knowledge, config.reflexion);
            let outcome = use_case.execute(&context, &niche).await;
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
    }

    Ok(())
}
