use anyhow::{Context, Result, anyhow};
use chrono_tz::Tz;
use clap::{ArgAction, Args, Parser, Subcommand};
use dayfit_catalog::{CsvFeedbackLog, load_catalogs};
use dayfit_core::{
    EnergyLevel, FeedbackRecord, FeedbackSink, FreeHours, Goal, Hour, HungerLevel, Mood,
    PlannerOptions, PreferenceLabel, UserContext, Verdict, generate_schedule, parse_free_hours,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod render;
mod setup;
mod state;

use config::Config;
use state::Profile;

#[derive(Parser, Debug)]
#[command(name = "dayfit", version, about = "Daily routine optimizer")]
struct Cli {
    /// More log output on stderr (-v for debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// One-time interactive setup: capture profile and write ~/.dayfit/profile.json
    Setup,

    /// Generate a schedule for today's free hours
    Plan(PlanArgs),

    /// Like/dislike feedback on scheduled activities
    Feedback {
        #[command(subcommand)]
        command: FeedbackCommand,
    },

    /// Manage ~/.dayfit/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Args, Debug)]
struct PlanArgs {
    /// Free hours, e.g. "7,12,16-18"
    #[arg(long, value_parser = parse_free_hours)]
    hours: FreeHours,

    /// Preference (repeatable): exercise, meal, relaxation, sleep, hydration, outdoor, work
    #[arg(long = "pref")]
    prefs: Vec<PreferenceLabel>,

    /// Free-text preference (repeatable)
    #[arg(long)]
    custom: Vec<String>,

    /// Overrides the profile goal
    #[arg(long)]
    goal: Option<Goal>,

    #[arg(long, default_value = "moderate")]
    energy: EnergyLevel,

    #[arg(long, default_value = "slightly hungry")]
    hunger: HungerLevel,

    #[arg(long, default_value = "relaxed")]
    mood: Mood,

    /// Serve meals even when not hungry
    #[arg(long)]
    insist_meal: bool,

    /// Append energy/mood default preferences
    #[arg(long)]
    baseline: bool,

    /// Seed for reproducible picks
    #[arg(long)]
    seed: Option<u64>,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum FeedbackCommand {
    /// Append one like/dislike row to routine_feedback.csv
    Record {
        #[arg(long)]
        hour: Hour,

        #[arg(long)]
        activity: String,

        #[arg(long)]
        verdict: Verdict,
    },

    /// Delete the feedback file
    Reset,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default config.toml if none exists
    Init,

    /// Print the effective config
    Show,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Setup => setup::run_setup()?,
        Command::Plan(args) => plan(args)?,
        Command::Feedback { command } => match command {
            FeedbackCommand::Record {
                hour,
                activity,
                verdict,
            } => record_feedback(hour, activity, verdict)?,
            FeedbackCommand::Reset => {
                let log = feedback_log()?;
                if log.reset()? {
                    println!("Removed {}", log.path().display());
                } else {
                    println!("No feedback file at {}", log.path().display());
                }
            }
        },
        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => {
                let cfg = config::load_config()?;
                print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
            }
        },
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let default = if verbose > 0 { "dayfit=debug" } else { "dayfit=info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Profile set by `dayfit setup`, else the config's `[profile]` section.
fn effective_profile(cfg: &Config) -> Result<Profile> {
    if let Some(p) = state::read_profile(&state::profile_path()?)? {
        return Ok(p);
    }
    Ok(Profile {
        created_at_utc: None,
        user_id: cfg.profile.user_id.clone(),
        goal: cfg.profile.goal,
        timezone: cfg.profile.timezone.clone(),
    })
}

fn plan(args: PlanArgs) -> Result<()> {
    let cfg = config::load_config()?;
    let profile = effective_profile(&cfg)?;

    if args.hours.is_empty() {
        println!("{}", render::NO_PLAN);
        return Ok(());
    }

    let catalogs = load_catalogs(&cfg.catalog.foods, &cfg.catalog.exercises)?;
    let ctx = UserContext::new(
        args.goal.unwrap_or(profile.goal),
        args.energy,
        args.hunger,
        args.mood,
    )
    .with_meal_override(args.insist_meal);

    let mut prefs = args.prefs;
    prefs.extend(args.custom.into_iter().map(PreferenceLabel::Custom));
    let options = PlannerOptions::default().with_baseline_fill(args.baseline || cfg.planner.baseline_fill);

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    debug!(?ctx, prefs = prefs.len(), hours = args.hours.len(), "planning");
    let schedule = generate_schedule(&ctx, &args.hours, &prefs, &catalogs, &options, &mut rng);

    if args.json {
        println!("{}", render::render_json(&schedule)?);
    } else {
        print!("{}", render::render_text(&schedule));
    }
    Ok(())
}

fn feedback_log() -> Result<CsvFeedbackLog> {
    Ok(CsvFeedbackLog::in_dir(state::ensure_dayfit_home()?))
}

fn record_feedback(hour: Hour, activity: String, verdict: Verdict) -> Result<()> {
    let cfg = config::load_config()?;
    let profile = effective_profile(&cfg)?;
    let tz: Tz = profile
        .timezone
        .parse()
        .map_err(|e| anyhow!("unknown timezone '{}': {}", profile.timezone, e))?;
    let date = chrono::Utc::now().with_timezone(&tz).date_naive();

    let record = FeedbackRecord {
        user_id: profile.user_id,
        date,
        hour,
        activity,
        verdict,
    };
    let mut log = feedback_log()?;
    log.record_feedback(&record)?;
    info!(path = %log.path().display(), "feedback saved");
    println!("Recorded {} for {} at {}", record.verdict, record.activity, record.hour);
    Ok(())
}
