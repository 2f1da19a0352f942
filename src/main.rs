use clap::Parser;
use gloss::headless::{self, OutputFormat, Query};
use gloss_core::{config::Config, Browser};
use gloss_source::CatalogSource;

#[derive(Parser)]
#[command(name = "gloss", about = "Interactive math glossary for the terminal")]
struct Cli {
    /// Catalog to load: `embedded`, a JSON file path, or an http:// URL.
    /// Overrides `[catalog] source` in the config file.
    #[arg(long, value_name = "SOURCE")]
    catalog: Option<CatalogSource>,

    /// Write debug logs to /tmp/gloss-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,

    /// Print the filtered glossary to stdout instead of opening the TUI.
    #[arg(long)]
    headless: bool,

    /// Only show terms in this domain (`all` for every domain).
    #[arg(long, requires = "headless")]
    domain: Option<String>,

    /// Only show terms mentioning this text.
    #[arg(long, requires = "headless")]
    query: Option<String>,

    #[arg(long, value_enum, default_value_t, requires = "headless")]
    format: OutputFormat,

    /// List the catalog's domains and exit.
    #[arg(long, requires = "headless")]
    list_domains: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/gloss-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("gloss debug log started — tail -f /tmp/gloss-debug.log");
    }

    let config = Config::load().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "config unreadable, using defaults");
        Config::defaults()
    });

    let source = match cli.catalog.clone() {
        Some(source) => source,
        None => match config.catalog.source.parse::<CatalogSource>() {
            Ok(source) => source,
            Err(err) => {
                tracing::error!(error = %err, "bad catalog source in config");
                eprintln!(
                    "Invalid [catalog] source in {}: {err}",
                    Config::path().display()
                );
                std::process::exit(2);
            }
        },
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let catalog = match runtime.block_on(source.load()) {
        Ok(catalog) => catalog,
        Err(err) => {
            tracing::error!(error = %err, "catalog load failed");
            eprintln!("Failed to load math glossary: {err}");
            std::process::exit(1);
        }
    };

    if !cli.headless {
        return gloss_tui::run(catalog, config);
    }

    let mut browser = Browser::new(catalog);
    let mut stdout = std::io::stdout().lock();
    if cli.list_domains {
        return headless::print_domains(&mut stdout, &browser, cli.format);
    }
    Query {
        domain: cli.domain,
        search: cli.query,
    }
    .apply(&mut browser);
    headless::print_view(&mut stdout, &browser, cli.format)
}
