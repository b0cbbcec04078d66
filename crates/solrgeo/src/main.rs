//! Command-line interface for inspecting solrgeo request shaping.
//!
//! The binary is a development surface for the library crates: it shapes a
//! simulated request and prints the resulting Solr parameters, so the
//! effect of a bounding box or facet selection can be checked without a
//! running search stack.

use std::{
    collections::HashMap,
    env, fs,
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{Args, Parser, Subcommand};
use solrgeo_config::{CONFIG_FILENAME, Config, template};
use solrgeo_request::{
    RequestParams, SearchBuilder, SearchParams, ShapeOutcome, SpatialOutcome, SpatialSkip,
    VisibilityOutcome,
};
use solrgeo_spatial::BoundingBox;

#[derive(Parser)]
#[command(name = "solrgeo")]
#[command(about = "Shape Solr search requests with spatial and collection rules")]
/// Top-level CLI options.
struct Cli {
    #[command(subcommand)]
    /// Subcommand to execute.
    command: Commands,
}

#[derive(Subcommand)]
/// Supported `solrgeo` subcommands.
enum Commands {
    /// Parse a bounding box and print its spatial envelope
    Envelope {
        /// Bounding box ("minX minY maxX maxY" or "minX,minY,maxX,maxY")
        #[arg(allow_hyphen_values = true)]
        bbox: String,
    },

    /// Apply the shaping rules to a simulated request and print the result
    Shape(ShapeArgs),

    /// Write a commented .solrgeo.toml template to the current directory
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },

    /// Load and validate a configuration file
    Check {
        /// Configuration file (defaults to ./.solrgeo.toml)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[derive(Args)]
/// Arguments for the `shape` subcommand.
struct ShapeArgs {
    /// Bounding box parameter of the simulated request
    #[arg(long, allow_hyphen_values = true)]
    bbox: Option<String>,

    /// Action name of the simulated request
    #[arg(long, default_value = "index")]
    action: String,

    /// Selected facet value as field=value (repeatable)
    #[arg(long = "facet", value_parser = parse_facet)]
    facets: Vec<(String, String)>,

    /// Pre-existing filter query entry (repeatable)
    #[arg(long = "fq")]
    filter_query: Vec<String>,

    /// Sort expression of the outgoing request
    #[arg(long, default_value = "score desc")]
    sort: String,

    /// Configuration file to use instead of the defaults
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Parses a `field=value` facet argument.
fn parse_facet(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(field, value)| (field.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected field=value, got '{raw}'"))
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Envelope { bbox } => cmd_envelope(&bbox),
        Commands::Shape(args) => cmd_shape(&args),
        Commands::Init { force } => cmd_init(force),
        Commands::Check { config } => cmd_check(config.as_deref()),
    }
}

/// Implements the `solrgeo envelope` command.
fn cmd_envelope(raw: &str) -> ExitCode {
    match raw.parse::<BoundingBox>() {
        Ok(bbox) => {
            println!("{}", bbox.envelope());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Implements the `solrgeo shape` command.
fn cmd_shape(args: &ShapeArgs) -> ExitCode {
    let config = match load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(code) => return code,
    };

    let mut facets: HashMap<String, Vec<String>> = HashMap::new();
    for (field, value) in &args.facets {
        facets.entry(field.clone()).or_default().push(value.clone());
    }

    let request = RequestParams {
        action: args.action.clone(),
        bbox: args.bbox.clone(),
        facets,
    };
    let mut params = SearchParams {
        filter_query: args.filter_query.clone(),
        sort: args.sort.clone(),
        ..SearchParams::default()
    };

    let outcome = SearchBuilder::new(&config).shape(&request, &mut params);
    report_outcome(&outcome);

    match serde_json::to_string_pretty(&params) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize params: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Loads the configuration for `shape`: an explicit file, or the defaults.
fn load_config(path: Option<&Path>) -> Result<Config, ExitCode> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    Config::load(path).map_err(|e| {
        eprintln!("error: {e}");
        ExitCode::FAILURE
    })
}

/// Prints a one-line-per-rule outcome summary on stderr.
fn report_outcome(outcome: &ShapeOutcome) {
    match &outcome.spatial {
        SpatialOutcome::Applied(envelope) => eprintln!("spatial: applied {envelope}"),
        SpatialOutcome::Skipped(SpatialSkip::NoBbox) => {
            eprintln!("spatial: skipped (no bbox parameter)");
        }
        SpatialOutcome::Skipped(SpatialSkip::Malformed(err)) => {
            eprintln!("spatial: skipped ({err})");
        }
    }

    match &outcome.visibility {
        VisibilityOutcome::ShowAction => eprintln!("visibility: skipped (show action)"),
        VisibilityOutcome::ChildrenHidden => eprintln!("visibility: children hidden"),
        VisibilityOutcome::ParentExpanded { parent } => {
            eprintln!("visibility: parent expanded ({parent})");
        }
    }
}

/// Implements the `solrgeo init` command.
fn cmd_init(force: bool) -> ExitCode {
    let cwd = match env::current_dir() {
        Ok(cwd) => cwd,
        Err(e) => {
            eprintln!("error: could not determine current directory: {e}");
            return ExitCode::FAILURE;
        }
    };
    let config_path = cwd.join(CONFIG_FILENAME);

    if config_path.exists() && !force {
        eprintln!(
            "error: configuration file already exists: {}",
            config_path.display()
        );
        eprintln!("use --force to overwrite");
        return ExitCode::FAILURE;
    }

    if let Err(e) = fs::write(&config_path, template()) {
        eprintln!("error: failed to write {}: {e}", config_path.display());
        return ExitCode::FAILURE;
    }

    println!("created {}", config_path.display());
    ExitCode::SUCCESS
}

/// Implements the `solrgeo check` command.
fn cmd_check(path: Option<&Path>) -> ExitCode {
    let default_path = PathBuf::from(CONFIG_FILENAME);
    let path = path.unwrap_or(&default_path);

    match Config::load(path) {
        Ok(config) => {
            println!("configuration OK: {}", path.display());
            print!("{}", config.to_toml());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
