use clap::{Parser, Subcommand};
use docket::{
    DocketError, EngineConfig, FormKind, PrintPayload, PrintViewBuilder, Token, ViewOutcome,
};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Prints business documents through layout descriptors.
#[derive(Parser, Debug)]
#[command(name = "docket", version, about)]
struct Cli {
    /// JSON configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Overrides `layouts_dir`.
    #[arg(long, global = true)]
    layouts_dir: Option<PathBuf>,

    /// Overrides `store_dir`.
    #[arg(long, global = true)]
    store_dir: Option<PathBuf>,

    /// Overrides `spool_dir`.
    #[arg(long, global = true)]
    spool_dir: Option<PathBuf>,

    /// Overrides `print_timeout_ms`.
    #[arg(long, global = true)]
    timeout_ms: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Publishes a payload and prints the token a print view opens with.
    Publish {
        payload: PathBuf,
        /// Lays the document out as this form instead of its own.
        #[arg(long)]
        layout: Option<FormKind>,
    },
    /// Prints a published token, or a payload file directly.
    Print {
        #[arg(long, conflicts_with = "payload", required_unless_present = "payload")]
        token: Option<String>,
        #[arg(long)]
        payload: Option<PathBuf>,
    },
    /// Writes the page a print surface would load.
    Render {
        payload: PathBuf,
        /// Output file; stdout when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Lists the layouts in effect.
    Layouts,
    /// Deletes expired or unreadable published payloads.
    Purge,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode, DocketError> {
    env_logger::init();
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    let view = PrintViewBuilder::new()
        .with_config(&config)?
        .build(config.spool_host())?;

    match cli.command {
        Command::Publish { payload, layout } => {
            let mut payload = read_payload(&payload)?;
            if layout.is_some() {
                payload.layout = layout;
            }
            let token = view.channel().publish(&payload)?;
            println!("{}", token);
            info!("Open the print view with ?{}", token.query());
        }
        Command::Print { token, payload } => {
            let report = match (token, payload) {
                (Some(raw), _) => match view.open(&Token::parse(&raw)?).await? {
                    ViewOutcome::Printed(report) => report,
                    ViewOutcome::NothingToPrint => {
                        eprintln!("Nothing to print for {}.", raw);
                        return Ok(ExitCode::from(2));
                    }
                },
                (None, Some(path)) => view.print_payload(&read_payload(&path)?).await?,
                (None, None) => {
                    eprintln!("Either --token or --payload is required.");
                    return Ok(ExitCode::from(2));
                }
            };
            println!("{} {:?}", report.session_id, report.settled_by);
        }
        Command::Render { payload, output } => {
            let page = view.preview(&read_payload(&payload)?);
            match output {
                Some(path) => {
                    fs::write(&path, page.html.as_bytes())?;
                    info!("Wrote {}", path.display());
                }
                None => println!("{}", page.html),
            }
        }
        Command::Layouts => {
            for kind in FormKind::ALL {
                let layout = view.layouts().get(kind);
                let page = layout.page.page_setup();
                let source = if view.layouts().declared(kind).is_some() {
                    "declared"
                } else {
                    "fallback"
                };
                println!(
                    "{:<10} {:<9} {} margins {} | {} columns, min {} rows",
                    kind.code(),
                    source,
                    page.size.css_size(),
                    page.margins.css_mm(),
                    layout.items_table.effective_columns().len(),
                    layout.items_table.min_rows,
                );
            }
        }
        Command::Purge => {
            let removed = view.channel().purge_expired()?;
            println!("{} payload(s) removed", removed);
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// File values first, then command-line overrides. The CLI runs as separate
/// processes, so publishing and printing need a shared on-disk store.
fn resolve_config(cli: &Cli) -> Result<EngineConfig, DocketError> {
    let mut config = match &cli.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    if let Some(dir) = &cli.layouts_dir {
        config.layouts_dir = Some(dir.clone());
    }
    if let Some(dir) = &cli.store_dir {
        config.store_dir = Some(dir.clone());
    }
    if let Some(dir) = &cli.spool_dir {
        config.spool_dir = Some(dir.clone());
    }
    if let Some(ms) = cli.timeout_ms {
        config.print_timeout_ms = ms;
    }
    if config.store_dir.is_none() {
        config.store_dir = Some(std::env::temp_dir().join("docket-payloads"));
    }
    Ok(config)
}

fn read_payload(path: &Path) -> Result<PrintPayload, DocketError> {
    let source = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&source)?)
}
