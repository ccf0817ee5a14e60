//! folio - a developer portfolio for the terminal

use anyhow::{Context, Result, bail};
use clap::{CommandFactory, Parser, Subcommand};
use folio::app::App;
use folio::config::Config;
use folio::contact::{ContactForm, Field, HttpSubmitter, SubmitTrigger, Submitter};
use folio::content::{ContentSource, Portfolio};
use std::path::PathBuf;
use std::sync::Arc;

/// A developer portfolio for the terminal
#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory holding personal-info.json, skills.json and projects.json
    #[arg(long, global = true, value_name = "DIR")]
    content: Option<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// URL contact submissions are POSTed to
    #[arg(long, global = true, value_name = "URL")]
    endpoint: Option<String>,

    /// Jump between sections instead of animating
    #[arg(long, global = true)]
    reduced_motion: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the portfolio documents and print a summary
    Check,
    /// Send a contact message without opening the UI
    Send {
        /// Sender's name
        #[arg(long)]
        name: String,
        /// Sender's reply address
        #[arg(long)]
        email: String,
        /// Message body
        #[arg(long)]
        message: String,
    },
    /// Print the effective configuration
    Config {
        /// Print the config file location instead
        #[arg(long)]
        path: bool,
        /// Write the default configuration if no file exists yet
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Let --help and --version exit normally
            if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                e.exit();
            }
            // For actual errors, show error + help
            eprintln!("error: {}\n", e.kind());
            Cli::command().print_help()?;
            std::process::exit(1);
        }
    };

    let config_path = cli.config.clone().unwrap_or_else(Config::default_path);
    let config = load_config(&cli, &config_path)?;

    match cli.command {
        Some(Commands::Check) => cmd_check(&config),
        Some(Commands::Send {
            name,
            email,
            message,
        }) => cmd_send(&config, &name, &email, &message),
        Some(Commands::Config { path, init }) => cmd_config(&config, &config_path, path, init),
        None => {
            let submitter =
                HttpSubmitter::new(config.contact_endpoint.clone(), config.submit_timeout());
            let source = ContentSource::from_dir(config.content_dir.clone());
            let app = App::new(config, source, Arc::new(submitter));
            folio::tui::run(app)
        }
    }
}

/// Log to the temp dir - tail with: tail -f $TMPDIR/folio.log
/// Set DEBUG=0-3 to control verbosity (0=off, 1=warn, 2=info, 3=debug)
fn init_logging() {
    let log_path = folio::paths::log_path();
    // Clear the log file on startup
    if let Err(e) = std::fs::write(&log_path, "") {
        eprintln!("Warning: Failed to clear log file: {e}");
    }

    let debug_level = std::env::var("DEBUG")
        .ok()
        .and_then(|v| v.parse::<u8>().ok())
        .unwrap_or(0);
    if debug_level == 0 {
        return;
    }

    let level = match debug_level {
        1 => tracing::Level::WARN,
        2 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    let (Some(dir), Some(file)) = (log_path.parent(), log_path.file_name()) else {
        return;
    };
    let file_appender = tracing_appender::rolling::never(dir, file);
    tracing_subscriber::fmt()
        .with_writer(file_appender)
        .with_max_level(level)
        .with_ansi(false)
        .init();
}

/// Read the config file (defaults when it does not exist), then apply the
/// environment and command-line overrides.
fn load_config(cli: &Cli, path: &std::path::Path) -> Result<Config> {
    let mut config = if path.exists() {
        Config::load_from(path)?
    } else {
        Config::default()
    };
    config.apply_env();

    if let Some(dir) = &cli.content {
        config.content_dir = Some(dir.clone());
    }
    if let Some(endpoint) = &cli.endpoint {
        config.contact_endpoint = Some(endpoint.clone());
    }
    if cli.reduced_motion {
        config.reduced_motion = true;
    }
    Ok(config)
}

fn cmd_check(config: &Config) -> Result<()> {
    let source = ContentSource::from_dir(config.content_dir.clone());
    let portfolio = match Portfolio::load(&source) {
        Ok(portfolio) => portfolio,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    println!("{} - {}", portfolio.personal.name, portfolio.personal.title);
    println!();
    println!("Skills: {}", portfolio.skills.len());
    for group in portfolio.skill_groups() {
        println!("  {:<20} {}", group.category, group.skills.len());
    }
    println!(
        "Primary expertise: {}",
        portfolio.primary_expertise().count()
    );
    println!(
        "Projects: {} ({} featured)",
        portfolio.projects.len(),
        portfolio.featured_count()
    );
    Ok(())
}

fn cmd_send(config: &Config, name: &str, email: &str, message: &str) -> Result<()> {
    let mut form = ContactForm::new();
    form.update_field(Field::Name, name);
    form.update_field(Field::Email, email);
    form.update_field(Field::Message, message);

    let data = match form.begin_submit() {
        SubmitTrigger::Dispatch(data) => data,
        SubmitTrigger::Invalid { .. } => {
            for (field, error) in form.errors().iter() {
                eprintln!("{}: {error}", field.label());
            }
            std::process::exit(1);
        }
        SubmitTrigger::Blocked => bail!("The contact form cannot be submitted"),
    };

    let submitter = HttpSubmitter::new(config.contact_endpoint.clone(), config.submit_timeout());
    submitter
        .submit(&data)
        .context("Your message could not be sent")?;
    println!("Thank you for your message! I'll get back to you soon.");
    Ok(())
}

fn cmd_config(config: &Config, config_path: &std::path::Path, path: bool, init: bool) -> Result<()> {
    if init {
        if config_path.exists() {
            println!("Config already exists at {}", config_path.display());
        } else {
            Config::default().save_to(config_path)?;
            println!("Wrote default config to {}", config_path.display());
        }
        return Ok(());
    }
    if path {
        println!("{}", config_path.display());
        return Ok(());
    }
    let json = serde_json::to_string_pretty(config).context("Failed to serialize config")?;
    println!("{json}");
    Ok(())
}
