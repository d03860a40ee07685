use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::*;
use std::path::PathBuf;

use fitplan::config::AppConfig;
use fitplan::display;
use fitplan::error::ErrorSeverity;
use fitplan::export::{self, ExportFormat, ExportOptions, PlanReport};
use fitplan::logging::init_logging;
use fitplan::{Budget, DietPreference, FitPlanError, Gender, Goal, RecommendationEngine, UserProfile};

/// FitPlan - Personalized Fitness Plan CLI
///
/// Computes BMI, picks a training intensity and returns a 7-day workout plan
/// with a matching daily diet plan.
#[derive(Parser)]
#[command(name = "fitplan")]
#[command(author = "FitPlan Contributors")]
#[command(version = "0.1.0")]
#[command(about = "Personalized Fitness Plan CLI", long_about = None)]
struct Cli {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Increase verbosity of output
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Profile overrides; anything not given comes from the config file
#[derive(Args, Debug, Default)]
struct ProfileArgs {
    /// Age in years (15-35)
    #[arg(long)]
    age: Option<u16>,

    /// male or female
    #[arg(long)]
    gender: Option<Gender>,

    /// Height in cm (120-220)
    #[arg(long)]
    height: Option<u16>,

    /// Weight in kg (30-150)
    #[arg(long)]
    weight: Option<u16>,

    /// fat-loss, muscle-gain or maintenance
    #[arg(long)]
    goal: Option<Goal>,

    /// vegetarian or non-vegetarian
    #[arg(long)]
    diet: Option<DietPreference>,

    /// low, medium or high
    #[arg(long)]
    budget: Option<Budget>,

    /// Available workout time per day in minutes (15-120)
    #[arg(long)]
    minutes: Option<u16>,
}

impl ProfileArgs {
    fn apply(&self, base: UserProfile) -> UserProfile {
        UserProfile {
            age: self.age.unwrap_or(base.age),
            gender: self.gender.unwrap_or(base.gender),
            height_cm: self.height.unwrap_or(base.height_cm),
            weight_kg: self.weight.unwrap_or(base.weight_kg),
            goal: self.goal.unwrap_or(base.goal),
            diet_preference: self.diet.unwrap_or(base.diet_preference),
            budget: self.budget.unwrap_or(base.budget),
            workout_minutes: self.minutes.unwrap_or(base.workout_minutes),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Show the recommendation in the terminal
    Recommend {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Skip the general health tips
        #[arg(long)]
        no_tips: bool,
    },

    /// Write the recommendation to a file
    Export {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Export format (text, json, csv)
        #[arg(short = 'f', long)]
        format: Option<String>,

        /// Output file or directory
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Configure application settings
    Config {
        /// List all configuration options
        #[arg(short, long)]
        list: bool,

        /// Write a default configuration file
        #[arg(short, long)]
        init: bool,

        /// Get a configuration value
        #[arg(short, long)]
        get: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        match e.downcast_ref::<FitPlanError>() {
            Some(err) => {
                match err.severity() {
                    ErrorSeverity::Warning => tracing::warn!(error = %err, "Request rejected"),
                    ErrorSeverity::Error => tracing::error!(error = %err, "Request failed"),
                }
                eprintln!("{} {}", "✗".red().bold(), err.user_message().red());
            }
            None => eprintln!("{} {:#}", "✗".red().bold(), e),
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // `config --init` must work before any file exists
    let config = match cli.command {
        Commands::Config { init: true, .. } => AppConfig::default(),
        _ => AppConfig::load(cli.config.as_deref())?,
    };
    init_logging(&config.logging.clone().with_verbosity(cli.verbose))?;

    match cli.command {
        Commands::Recommend { profile, no_tips } => {
            let profile = resolve_profile(&profile, &config)?;
            let rec = RecommendationEngine::new().recommend(&profile);
            display::print_recommendation(
                &profile,
                &rec,
                config.export.include_health_tips && !no_tips,
            );
        }

        Commands::Export {
            profile,
            format,
            output,
        } => {
            let format = match format {
                Some(f) => ExportFormat::from_str(&f).map_err(FitPlanError::from)?,
                None => config.export.default_format,
            };
            let profile = resolve_profile(&profile, &config)?;
            let rec = RecommendationEngine::new().recommend(&profile);
            let report = PlanReport::new(profile, rec);

            let path = export::resolve_output_path(
                &report,
                format,
                output.as_deref(),
                &config.export.output_dir,
            );
            let options = ExportOptions {
                format,
                include_health_tips: config.export.include_health_tips,
            };
            export::export_report(&report, &options, &path).map_err(FitPlanError::from)?;

            println!(
                "{} {}",
                "✓ Plan exported to".green().bold(),
                path.display()
            );
        }

        Commands::Config { list, init, get } => {
            let path = cli.config.unwrap_or_else(AppConfig::default_config_path);

            if init {
                if path.exists() {
                    bail!("Config file already exists: {}", path.display());
                }
                AppConfig::default()
                    .save_to_file(&path)
                    .with_context(|| "Failed to initialize configuration")?;
                println!("{} {}", "✓ Wrote".green().bold(), path.display());
            } else if let Some(key) = get {
                match config.get(&key)? {
                    Some(value) => println!("{}", value),
                    None => {
                        return Err(FitPlanError::Configuration(format!(
                            "unknown key: {}",
                            key
                        ))
                        .into())
                    }
                }
            } else if list {
                println!("{} {}", "Configuration:".bold(), path.display().to_string().dimmed());
                for (key, value) in config.entries()? {
                    println!("  {} = {}", key.cyan(), value);
                }
            } else {
                println!("Use --list, --init or --get KEY");
            }
        }
    }

    Ok(())
}

/// Merge CLI overrides over the configured profile and validate the result
fn resolve_profile(args: &ProfileArgs, config: &AppConfig) -> Result<UserProfile> {
    let profile = args.apply(config.profile);
    profile.validate().map_err(FitPlanError::from)?;
    tracing::info!(?profile, "Profile resolved");
    Ok(profile)
}
