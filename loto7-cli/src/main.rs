mod display;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::{debug, info};

use loto7_core::analysis::rank::top_scorers;
use loto7_core::analysis::{apply_window, compute_stats};
use loto7_core::dataset::{Dataset, load_history};
use loto7_core::models::copy_block;
use loto7_core::sampler::{date_seed, generate_suggestions};
use loto7_core::{AnalysisConfig, CycleMetric};

use crate::display::{display_copy_block, display_draws, display_stats, display_suggestions, display_top_scorers};

#[derive(Parser)]
#[command(name = "loto7", about = "Scores fréquence / cycle / hot-cold et grilles suggérées pour Loto 7")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct AnalysisArgs {
    /// Fichier CSV des tirages (du plus ancien au plus récent)
    #[arg(short, long)]
    file: PathBuf,

    /// Fichier de configuration JSON
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Noms exacts des colonnes de numéros principaux (séparés par des virgules)
    #[arg(long, value_delimiter = ',')]
    columns: Vec<String>,

    /// Motif recherché dans les en-têtes de colonnes
    #[arg(long)]
    marker: Option<String>,

    /// Séparateur du CSV
    #[arg(long)]
    delimiter: Option<char>,

    /// Plus grand numéro tirable
    #[arg(long)]
    pool_size: Option<u8>,

    /// Nombre de numéros par tirage historique
    #[arg(long)]
    draw_size: Option<usize>,

    /// Nombre de numéros par grille suggérée
    #[arg(long)]
    ticket_size: Option<usize>,

    /// Fenêtre d'analyse (derniers tirages)
    #[arg(short, long)]
    window: Option<usize>,

    /// Signal de cycle utilisé pour le score
    #[arg(long)]
    cycle_metric: Option<CycleMetric>,
}

#[derive(Subcommand)]
enum Command {
    /// Calculer les scores et générer des grilles
    Predict {
        #[command(flatten)]
        analysis: AnalysisArgs,

        /// Nombre de grilles à suggérer
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Nombre de numéros affichés dans le top des scores
        #[arg(short, long, default_value = "5")]
        top: usize,

        /// Seed pour la reproductibilité
        #[arg(long, conflicts_with = "daily_seed")]
        seed: Option<u64>,

        /// Seed dérivé de la date du jour (YYYYMMDD)
        #[arg(long)]
        daily_seed: bool,
    },

    /// Afficher les statistiques de chaque numéro
    Stats {
        #[command(flatten)]
        analysis: AnalysisArgs,
    },

    /// Lister les derniers tirages chargés
    List {
        #[command(flatten)]
        analysis: AnalysisArgs,

        /// Nombre de tirages à afficher
        #[arg(short, long, default_value = "5")]
        last: usize,
    },

    /// Afficher la configuration effective au format JSON
    Config {
        /// Fichier de configuration JSON à compléter
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Predict { analysis, count, top, seed, daily_seed } => {
            let mut config = resolve_config(&analysis)?;
            if let Some(count) = count {
                config.suggestion_count = count;
            }
            let seed = if daily_seed { Some(date_seed()) } else { seed };
            cmd_predict(&analysis.file, &config, top, seed)
        }
        Command::Stats { analysis } => {
            let config = resolve_config(&analysis)?;
            cmd_stats(&analysis.file, &config)
        }
        Command::List { analysis, last } => {
            let config = resolve_config(&analysis)?;
            cmd_list(&analysis.file, &config, last)
        }
        Command::Config { config } => cmd_config(config.as_deref()),
    }
}

fn base_config(path: Option<&Path>) -> Result<AnalysisConfig> {
    match path {
        Some(p) => AnalysisConfig::from_json_file(p)
            .with_context(|| format!("Impossible de lire la configuration {:?}", p)),
        None => Ok(AnalysisConfig::default()),
    }
}

fn resolve_config(args: &AnalysisArgs) -> Result<AnalysisConfig> {
    let mut config = base_config(args.config.as_deref())?;

    if !args.columns.is_empty() {
        config.columns = args.columns.clone();
    }
    if let Some(marker) = &args.marker {
        config.column_marker = marker.clone();
    }
    if let Some(delimiter) = args.delimiter {
        config.delimiter = delimiter;
    }
    if let Some(pool_size) = args.pool_size {
        config.pool_size = pool_size;
    }
    if let Some(draw_size) = args.draw_size {
        config.draw_size = draw_size;
    }
    if let Some(ticket_size) = args.ticket_size {
        config.ticket_size = ticket_size;
    }
    if args.window.is_some() {
        config.window = args.window;
    }
    if let Some(metric) = args.cycle_metric {
        config.cycle_metric = metric;
    }

    config.validate()?;
    debug!("Configuration effective : {:?}", config);
    Ok(config)
}

fn load(file: &Path, config: &AnalysisConfig) -> Result<Dataset> {
    let dataset = load_history(file, config)
        .with_context(|| format!("Impossible de charger {:?}", file))?;
    info!(
        "{} tirages chargés depuis {:?} (colonnes : {})",
        dataset.draws.len(),
        file,
        dataset.columns.join(", ")
    );
    Ok(dataset)
}

fn cmd_predict(file: &Path, config: &AnalysisConfig, top: usize, seed: Option<u64>) -> Result<()> {
    let dataset = load(file, config)?;
    let draws = apply_window(&dataset.draws, config.window);

    let stats = compute_stats(draws, config)?;
    display_top_scorers(&top_scorers(&stats, top), draws.len());

    if let Some(s) = seed {
        info!("Seed : {s}");
    }
    let suggestions = generate_suggestions(&stats, config, seed)?;
    display_suggestions(&suggestions);
    display_copy_block(&copy_block(&suggestions));

    Ok(())
}

fn cmd_stats(file: &Path, config: &AnalysisConfig) -> Result<()> {
    let dataset = load(file, config)?;
    let draws = apply_window(&dataset.draws, config.window);

    let stats = compute_stats(draws, config)?;
    display_stats(&stats, draws.len());
    Ok(())
}

fn cmd_list(file: &Path, config: &AnalysisConfig, last: usize) -> Result<()> {
    let dataset = load(file, config)?;
    let start = dataset.draws.len().saturating_sub(last);
    display_draws(&dataset.draws[start..], start + 1);
    Ok(())
}

fn cmd_config(path: Option<&Path>) -> Result<()> {
    let config = base_config(path)?;
    config.validate()?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
