//! pagekit command-line companion.
//!
//! Drives the page helpers outside a browser: submit a form the way the page
//! script does, replay a debounced search, format values, flip the theme.

use clap::{Parser, Subcommand};
use serde_json::Value;
use std::path::PathBuf;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use pagekit::config::{load_config, PageKitConfig};
use pagekit::format::{format_currency, format_date, parse_date, DateStyle};
use pagekit::observability::logging;
use pagekit::page::{Field, Form, FormMethod, Page};
use pagekit::theme::{FileStore, MemoryStore, PreferenceStore, ThemeController};
use pagekit::widgets::SearchInput;
use pagekit::AjaxFormSubmitter;

#[derive(Parser)]
#[command(name = "pagekit")]
#[command(about = "Page helpers for server-rendered web applications", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a form as a programmatic request and print the JSON payload
    Submit {
        /// Form action URL
        #[arg(long)]
        action: String,

        /// Form method (get or post)
        #[arg(short, long, default_value = "post")]
        method: String,

        /// Field as name=value; repeatable
        #[arg(short, long = "field", value_parser = parse_field)]
        fields: Vec<(String, String)>,
    },
    /// Read keystrokes from stdin, one value per line, and search once input settles
    Search {
        /// Override the configured quiet period
        #[arg(long)]
        wait_ms: Option<u64>,
    },
    /// Format an amount of money
    Currency {
        #[arg(allow_negative_numbers = true)]
        amount: f64,

        #[arg(short, long, default_value = "USD")]
        code: String,
    },
    /// Format a date given as YYYY-MM-DD or RFC 3339
    Date {
        date: String,

        /// long or short
        #[arg(short, long, default_value = "long")]
        style: String,
    },
    /// Show the saved theme, or toggle it
    Theme {
        #[arg(long)]
        toggle: bool,
    },
}

fn parse_field(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected name=value, got '{}'", s)),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => PageKitConfig::default(),
    };
    logging::init(&config.observability);

    match cli.command {
        Commands::Submit { action, method, fields } => {
            submit(&config, &action, &method, fields).await?;
        }
        Commands::Search { wait_ms } => {
            let wait = wait_ms
                .map(Duration::from_millis)
                .unwrap_or_else(|| config.debounce.search_wait());
            search(wait).await?;
        }
        Commands::Currency { amount, code } => {
            println!("{}", format_currency(amount, &code)?);
        }
        Commands::Date { date, style } => {
            let style: DateStyle = style.parse()?;
            println!("{}", format_date(parse_date(&date)?, style));
        }
        Commands::Theme { toggle } => match &config.theme.store_path {
            Some(path) => theme(FileStore::new(path), &config, toggle)?,
            None => theme(MemoryStore::new(), &config, toggle)?,
        },
    }

    Ok(())
}

async fn submit(
    config: &PageKitConfig,
    action: &str,
    method: &str,
    fields: Vec<(String, String)>,
) -> Result<(), Box<dyn std::error::Error>> {
    let page = Page::new(action)?;
    let method: FormMethod = method.parse()?;
    let form = fields
        .into_iter()
        .fold(Form::new("cli", "").with_method(method), |form, (name, value)| {
            form.with_field(Field::new(name, value))
        });
    page.insert_form(form);

    let (tx, mut rx) = mpsc::unbounded_channel::<Result<Value, Value>>();
    let err_tx = tx.clone();
    let submitter = AjaxFormSubmitter::new(config.ajax.clone())?;
    submitter
        .attach(
            &page,
            "cli",
            move |body| {
                let _ = tx.send(Ok(body));
            },
            move |body| {
                let _ = err_tx.send(Err(body));
            },
        )
        .ok_or("form was not registered")?;

    page.submit("cli");

    match rx.recv().await {
        Some(Ok(body)) => println!("{}", serde_json::to_string_pretty(&body)?),
        Some(Err(body)) => {
            eprintln!("{}", serde_json::to_string_pretty(&body)?);
            std::process::exit(1);
        }
        None => return Err("submission ended without a response".into()),
    }
    Ok(())
}

async fn search(wait: Duration) -> Result<(), Box<dyn std::error::Error>> {
    let input = SearchInput::new(|query: &str| println!("Searching for: {}", query), wait);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        input.input(line);
    }

    // Let the last pending search fire before exiting.
    while input.is_pending() {
        tokio::time::sleep(wait.max(Duration::from_millis(10))).await;
    }
    Ok(())
}

fn theme<S: PreferenceStore>(
    store: S,
    config: &PageKitConfig,
    toggle: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut controller = ThemeController::load(store, config.theme.default)?;
    if toggle {
        controller.toggle()?;
    }
    println!("{}", controller.current());
    Ok(())
}
