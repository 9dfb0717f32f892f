use anyhow::Context;
use clap::{Parser, Subcommand};
use fixture_showcase::app::{handle_fatal_error, init_logging, AppConfig};
use fixture_showcase::config::{ConfigLoader, ShowcaseConfig};
use fixture_showcase::env::AppEnv;
use fixture_showcase::{compute, error_function, files, probe, MathRequest, Recipe};
use std::path::PathBuf;
use tracing::debug;

/// Trivial arithmetic, file and environment helpers
#[derive(Parser)]
#[command(name = "showcase")]
#[command(about = "Run the showcase functions from the command line", long_about = None)]
struct Cli {
    /// Enable verbose output (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a TOML configuration file
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the orchestrator function and print the solution (default: 2 1)
    Math {
        #[arg(allow_negative_numbers = true)]
        first: i64,

        #[arg(allow_negative_numbers = true)]
        second: i64,

        /// Applied to the sum in `add`
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        multiplier: i64,

        /// Added to the product in `multiply`
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        offset: i64,

        /// Halve the final result
        #[arg(long)]
        half: bool,

        /// Seconds the engine sleeps (overrides config)
        #[arg(long)]
        sleep_secs: Option<f64>,

        /// Seconds above which diagnostics are emitted (overrides config)
        #[arg(long)]
        threshold_secs: Option<f64>,

        /// Emit the debug-only record
        #[arg(long)]
        debug: bool,

        /// How to compose the arithmetic operations (overrides config)
        #[arg(long, value_enum)]
        recipe: Option<Recipe>,
    },
    /// Decorate a text file in place and print the new content
    UpdateFile {
        /// File to rewrite
        path: PathBuf,
    },
    /// Describe the MY_VAR environment variable
    Probe,
    /// Print `true`, or fail with a fixed error when --raise is given
    Error {
        #[arg(long)]
        raise: bool,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Math {
            first: 2,
            second: 1,
            multiplier: 1,
            offset: 0,
            half: false,
            sleep_secs: None,
            threshold_secs: None,
            debug: false,
            recipe: None,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let env = AppEnv::real();

    let loader = ConfigLoader::new(env.fs.clone(), env.vars.clone());
    let config = match loader.load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            init_logging(&AppConfig::new(cli.verbose));
            handle_fatal_error(e.into(), cli.verbose)
        }
    };

    init_logging(&AppConfig::new(cli.verbose).with_log_level(config.log_level.clone()));

    if let Err(e) = run(cli.command.unwrap_or_default(), &config, &env) {
        handle_fatal_error(e, cli.verbose);
    }
}

fn run(command: Commands, config: &ShowcaseConfig, env: &AppEnv) -> anyhow::Result<()> {
    match command {
        Commands::Math {
            first,
            second,
            multiplier,
            offset,
            half,
            sleep_secs,
            threshold_secs,
            debug,
            recipe,
        } => {
            let mut config = config.clone();
            if let Some(sleep_secs) = sleep_secs {
                config.sleep_secs = sleep_secs;
            }
            if let Some(threshold_secs) = threshold_secs {
                config.threshold_secs = threshold_secs;
            }
            if let Some(recipe) = recipe {
                config.recipe = recipe;
            }
            config.debug_mode |= debug;
            config.validate()?;

            let settings = config.settings()?;
            debug!(?settings, "Running orchestrator");

            let request = MathRequest::new(first, second)
                .with_multiplier(multiplier)
                .with_offset(offset)
                .with_half(half);
            let solution = compute(&request, &settings, env)
                .with_context(|| format!("Failed to compute with {first} and {second}"))?;
            println!("{solution}");
        }
        Commands::UpdateFile { path } => {
            let new_contents = files::update_file(env.fs.as_ref(), &path)
                .with_context(|| format!("Failed to update {}", path.display()))?;
            println!("{new_contents}");
        }
        Commands::Probe => {
            println!("{}", probe::describe_my_var(env.vars.as_ref()));
        }
        Commands::Error { raise } => {
            println!("{}", error_function(raise)?);
        }
    }

    Ok(())
}
