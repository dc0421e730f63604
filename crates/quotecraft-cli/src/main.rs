//! Quotecraft CLI - Terminal quote widget
//!
//! Shows a random quote and rewrites it once in a chosen style.

mod config;
mod theme;
mod widget;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::Select;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use quotecraft::{
    build_llm_client, build_quote_client, builtin_styles, find_style, widget_direct_sources,
    widget_fallback_quotes, EndpointTransformer, HttpQuoteSource, QuoteChain, QuoteClientConfig,
    QuoteOrigin, QuoteSource, StyleConfig, DEFAULT_LLM_TIMEOUT,
};

use config::{Config, QuoteStrategy};
use widget::{TransformOutcome, Widget};

const PAYWALL: &str = "You've used your free transformation. Upgrade to keep transforming quotes.";

#[derive(Parser)]
#[command(name = "quotecraft")]
#[command(about = "Quotecraft - Random quotes, rewritten in style", long_about = None)]
#[command(version)]
struct Cli {
    /// Show debug logs (RUST_LOG also works)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive widget (default)
    Widget,

    /// Fetch and print a quote
    Quote {
        /// Show which source answered
        #[arg(long)]
        origin: bool,
    },

    /// List available styles
    Styles,

    /// Transform a quote once in the given style
    Transform {
        /// Style key (see `quotecraft styles`)
        #[arg(short, long)]
        style: String,
        /// Quote text (fetched if omitted)
        #[arg(short, long)]
        quote: Option<String>,
    },

    /// Set the Quotecraft server URL
    Endpoint {
        /// Base URL, e.g. https://quotecraft.shuttle.app
        url: String,
    },

    /// Choose how quotes are fetched: endpoint or direct
    Source {
        strategy: QuoteStrategy,
    },

    /// Show current configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command.unwrap_or(Commands::Widget) {
        Commands::Widget => cmd_widget().await,
        Commands::Quote { origin } => cmd_quote(origin).await,
        Commands::Styles => cmd_styles(),
        Commands::Transform { style, quote } => cmd_transform(style, quote).await,
        Commands::Endpoint { url } => cmd_endpoint(url),
        Commands::Source { strategy } => cmd_source(strategy),
        Commands::Config => cmd_config(),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "quotecraft=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

// ============================================
// Wiring
// ============================================

fn build_chain(config: &Config) -> Result<QuoteChain> {
    let client = build_quote_client(&QuoteClientConfig {
        timeout: config.timeout(),
        ..QuoteClientConfig::default()
    })?;

    let mut sources: Vec<Arc<dyn QuoteSource>> = Vec::new();
    if config.quote_source == QuoteStrategy::Endpoint {
        let base_url = config.effective_base_url();
        sources.push(Arc::new(HttpQuoteSource::endpoint(client.clone(), &base_url)));
    }
    sources.extend(widget_direct_sources(&client));

    Ok(QuoteChain::new(sources, widget_fallback_quotes())?)
}

fn build_widget(config: &Config) -> Result<Widget> {
    let chain = build_chain(config)?;
    let client = build_llm_client(DEFAULT_LLM_TIMEOUT)?;
    let transformer = EndpointTransformer::new(client, &config.effective_base_url());

    Ok(Widget::new(
        chain,
        Arc::new(transformer),
        widget_fallback_quotes(),
    ))
}

fn resolve_style(key: &str) -> Result<StyleConfig> {
    match find_style(key) {
        Some(style) => Ok(style),
        None => {
            let keys: Vec<_> = builtin_styles().into_iter().map(|(k, _)| k).collect();
            bail!("Unknown style '{}'. Available: {}", key, keys.join(", "));
        }
    }
}

// ============================================
// Rendering
// ============================================

fn print_quote(text: &str) {
    println!("\n  {}\n", format!("“{}”", text).bold());
}

fn print_outcome(outcome: &TransformOutcome) {
    match outcome {
        TransformOutcome::Transformed {
            text,
            css_class,
            locked,
        } => {
            println!("\n{}\n", theme::paint(text, css_class.as_deref()));
            if *locked {
                print_paywall();
            }
        }
        TransformOutcome::Failed { message } => {
            println!("\n{}\n", message.red());
        }
        TransformOutcome::Locked => print_paywall(),
    }
}

fn print_paywall() {
    println!("{} {}", "🔒".yellow(), PAYWALL.yellow().bold());
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_widget() -> Result<()> {
    let config = Config::load()?;
    let mut widget = build_widget(&config)?;

    let fetched = widget.load_quote().await;
    print_quote(widget.original_quote().unwrap_or_default());
    if fetched.origin == QuoteOrigin::Fallback {
        println!("{}", "(offline - showing a saved quote)".dimmed());
    }

    let styles = builtin_styles();
    let mut items: Vec<String> = styles.iter().map(|(_, s)| s.name.clone()).collect();
    items.push("Quit".to_string());

    while !widget.is_locked() {
        let choice = Select::new()
            .with_prompt("Transform with style")
            .items(&items)
            .default(0)
            .interact()
            .context("Failed to read selection")?;

        let Some((_, style)) = styles.get(choice) else {
            break;
        };

        println!("{}", format!("Transforming as {}...", style.name).dimmed());
        let outcome = widget.transform(style).await;
        print_outcome(&outcome);
    }

    Ok(())
}

async fn cmd_quote(show_origin: bool) -> Result<()> {
    let config = Config::load()?;
    let chain = build_chain(&config)?;

    let fetched = chain.fetch().await;
    print_quote(&fetched.quote.to_string());

    if show_origin {
        println!("  {} {}", "source:".dimmed(), fetched.origin.to_string().cyan());
    }

    Ok(())
}

fn cmd_styles() -> Result<()> {
    println!("{}", "Styles:".bold());
    for (key, style) in builtin_styles() {
        println!(
            "  {:<20} {:<20} {}",
            key.cyan(),
            style.name,
            theme::label(style.css_class.as_deref()).dimmed()
        );
    }

    println!("\n{}", "Use one with:".dimmed());
    println!("  quotecraft transform --style <KEY>");

    Ok(())
}

async fn cmd_transform(style_key: String, quote: Option<String>) -> Result<()> {
    let style = resolve_style(&style_key)?;
    let config = Config::load()?;
    let mut widget = build_widget(&config)?;

    match quote {
        Some(text) => widget.set_quote(text),
        None => {
            widget.load_quote().await;
        }
    }
    print_quote(widget.original_quote().unwrap_or_default());

    let outcome = widget.transform(&style).await;
    print_outcome(&outcome);

    if let TransformOutcome::Failed { .. } = outcome {
        bail!("Transformation failed");
    }

    Ok(())
}

fn cmd_endpoint(url: String) -> Result<()> {
    let mut config = Config::load()?;
    config.set_base_url(&url);
    config.save()?;

    println!("{} Server URL set to {}", "✓".green(), config.base_url.cyan());
    Ok(())
}

fn cmd_source(strategy: QuoteStrategy) -> Result<()> {
    let mut config = Config::load()?;
    config.quote_source = strategy;
    config.save()?;

    println!("{} Quote source set to {}", "✓".green(), strategy.to_string().cyan());
    Ok(())
}

fn cmd_config() -> Result<()> {
    let config = Config::load()?;

    println!("{}", "Configuration:".bold());
    println!("  Path: {:?}", Config::config_path()?);
    println!("  Base URL: {}", config.effective_base_url());
    if std::env::var(config::BASE_URL_ENV).is_ok() {
        println!("    {}", format!("(overridden by {})", config::BASE_URL_ENV).dimmed());
    }
    println!("  Quote Source: {}", config.quote_source.to_string().cyan());
    println!("  Timeout: {}ms", config.timeout_ms);

    Ok(())
}
