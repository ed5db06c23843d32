use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};

use clap::{Parser, Subcommand};
use log::LevelFilter;

use crate::catalog::{self, CatalogError};
use crate::config::{self, Config, ConfigError};
use crate::contract::{CoreResponse, SearchResponse, SuggestionDto};
use crate::core_service::{CoreService, ServiceError};
use crate::debounce::Clock;
use crate::navigation::Navigator;
use crate::selection::SelectionAction;
use crate::transport::{encode_response, handle_json, TransportResponse};

#[derive(Debug)]
pub enum RuntimeError {
    Config(ConfigError),
    Service(ServiceError),
    Catalog(CatalogError),
    Io(std::io::Error),
    MissingIndexPath,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(error) => write!(f, "config error: {error}"),
            Self::Service(error) => write!(f, "service error: {error}"),
            Self::Catalog(error) => write!(f, "catalog error: {error}"),
            Self::Io(error) => write!(f, "io error: {error}"),
            Self::MissingIndexPath => write!(f, "no index output path given or configured"),
        }
    }
}

impl std::error::Error for RuntimeError {}

impl From<ConfigError> for RuntimeError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<ServiceError> for RuntimeError {
    fn from(value: ServiceError) -> Self {
        Self::Service(value)
    }
}

impl From<CatalogError> for RuntimeError {
    fn from(value: CatalogError) -> Self {
        Self::Catalog(value)
    }
}

impl From<std::io::Error> for RuntimeError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

#[derive(Debug, Parser)]
#[command(name = "songfind-core", about = "Fuzzy song and artist suggestions for a songbook")]
pub struct CliOptions {
    /// Config file (TOML, or JSON5 for .json/.json5).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Catalog document, overriding the configured one.
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Compact index, overriding the configured one.
    #[arg(long, global = true)]
    pub index: Option<PathBuf>,

    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the suggestions for one query.
    Search {
        query: String,
        #[arg(long)]
        json: bool,
    },
    /// JSON-lines session over stdin/stdout.
    Serve,
    /// Write the compact index for the catalog.
    BuildIndex {
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Write the default config file if none exists.
    InitConfig,
}

pub fn parse_cli_args(args: &[String]) -> Result<CliOptions, clap::Error> {
    let argv = std::iter::once("songfind-core".to_string()).chain(args.iter().cloned());
    CliOptions::try_parse_from(argv)
}

pub fn run_with_options(options: CliOptions) -> Result<(), RuntimeError> {
    let mut config = config::load(options.config.as_deref())?;
    if let Some(catalog) = options.catalog {
        config.catalog_path = catalog;
    }
    if let Some(index) = options.index {
        config.index_path = Some(index);
    }

    let level = if options.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if let Err(error) = crate::logging::init(&config.log_dir, level) {
        eprintln!("[songfind-core] logging disabled: {error}");
    }
    log::info!(
        "startup config_path={} catalog_path={}",
        config.config_path.display(),
        config.catalog_path.display()
    );

    match options.command {
        Command::InitConfig => init_config(&config),
        Command::BuildIndex { output } => build_index(&config, output),
        Command::Search { query, json } => search_once(config, &query, json),
        Command::Serve => serve_stdio(CoreService::new(config)?),
    }
}

fn init_config(config: &Config) -> Result<(), RuntimeError> {
    if config.config_path.exists() {
        println!(
            "[songfind-core] config already present at {}",
            config.config_path.display()
        );
        return Ok(());
    }
    config::save(config)?;
    println!(
        "[songfind-core] wrote default config to {}",
        config.config_path.display()
    );
    Ok(())
}

fn build_index(config: &Config, output: Option<PathBuf>) -> Result<(), RuntimeError> {
    let output = output
        .or_else(|| config.index_path.clone())
        .ok_or(RuntimeError::MissingIndexPath)?;
    let loaded = catalog::load_catalog(&config.catalog_path)?;
    let index = catalog::build_index(&loaded);
    catalog::write_index(&output, &index)?;
    log::info!("index written entries={} path={}", index.songs.len(), output.display());
    println!(
        "[songfind-core] indexed {} songs into {}",
        index.songs.len(),
        output.display()
    );
    Ok(())
}

fn search_once(config: Config, query: &str, json: bool) -> Result<(), RuntimeError> {
    let service = CoreService::new(config)?;
    let hits = service.search(query);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if json {
        let response = TransportResponse::Ok {
            response: CoreResponse::Search(SearchResponse {
                suggestions: hits.iter().map(SuggestionDto::from).collect(),
            }),
        };
        writeln!(out, "{}", encode_response(&response))?;
        return Ok(());
    }

    if hits.is_empty() {
        writeln!(out, "No matches for '{}'.", query.trim())?;
    }
    for hit in &hits {
        let kind = match hit.kind() {
            crate::model::EntryKind::Song => "song",
            crate::model::EntryKind::Artist => "artist",
        };
        writeln!(out, "{kind:<6} {:.3}  {}", hit.score, hit.entry.label)?;
    }
    Ok(())
}

fn serve_stdio(mut service: CoreService) -> Result<(), RuntimeError> {
    let (sender, receiver) = mpsc::channel::<String>();
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else {
                break;
            };
            if sender.send(line).is_err() {
                break;
            }
        }
    });

    log::info!("serve loop running");
    let stdout = std::io::stdout();
    serve_lines(&mut service, &receiver, &mut stdout.lock())?;
    log::info!("serve loop stopped");
    Ok(())
}

/// Answers each request line on `out`. Between requests it waits only until
/// the pending search pass is due, then pushes the resulting state. A pass
/// still pending when the input closes is flushed before returning.
pub fn serve_lines<C: Clock, N: Navigator, W: Write>(
    service: &mut CoreService<C, N>,
    receiver: &Receiver<String>,
    out: &mut W,
) -> Result<(), RuntimeError> {
    loop {
        let received = match service.time_until_pass() {
            Some(wait) => receiver.recv_timeout(wait),
            None => receiver.recv().map_err(|_| RecvTimeoutError::Disconnected),
        };

        let line = match received {
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => handle_json(service, &line),
            Err(RecvTimeoutError::Timeout) => {
                let Some(action) = service.poll() else {
                    continue;
                };
                selection_line(service, action)
            }
            Err(RecvTimeoutError::Disconnected) => {
                if let Some(action) = service.flush() {
                    let line = selection_line(service, action);
                    writeln!(out, "{line}")?;
                    out.flush()?;
                }
                return Ok(());
            }
        };

        writeln!(out, "{line}")?;
        out.flush()?;
    }
}

fn selection_line<C: Clock, N: Navigator>(
    service: &CoreService<C, N>,
    action: SelectionAction,
) -> String {
    encode_response(&TransportResponse::Ok {
        response: CoreResponse::Selection(service.selection_response(Some(action))),
    })
}
