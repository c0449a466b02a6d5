use anyhow::Context;
use clap::Parser;
use pkg_constants::api::{DEFAULT_API_BASE, DEFAULT_AUTH_ENV, DEFAULT_PUBLISH_BASE};
use pkg_constants::paths::{
    DEFAULT_CONFIG, DEFAULT_CSV_PATH, DEFAULT_HTML_OUTPUT, DEFAULT_LOG_LEVEL, LOG_FILE_NAME,
};
use pkg_datawrapper::HttpChartApi;
use pkg_publisher::{ConfigFileStore, MapIdStore, MapPublisher, PublisherConfig, dispatch};
use pkg_types::config::{WorkerConfigFile, load_config_file};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "mapworker",
    about = "Publish county case counts to a hosted choropleth map"
)]
struct Cli {
    /// Run type: `create` a new map or `update` the existing one
    run_type: String,

    /// Path to YAML config file (also stores the active map id)
    #[arg(long, short, default_value = DEFAULT_CONFIG)]
    config: String,

    /// Case CSV to upload
    #[arg(long)]
    csv: Option<String>,

    /// File the embed snippet is written to on create
    #[arg(long)]
    output: Option<String>,

    /// Directory for map_worker.log (stderr if unset)
    #[arg(long)]
    log_dir: Option<String>,

    /// Log level when RUST_LOG is not set
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load config file (returns defaults if file not found)
    let file_cfg: WorkerConfigFile = load_config_file(&cli.config)?;
    let cwd = std::env::current_dir()?;

    let log_dir = cli
        .log_dir
        .clone()
        .or_else(|| file_cfg.log_dir.clone())
        .map(|dir| cwd.join(dir));
    let log_level = cli
        .log_level
        .clone()
        .or_else(|| file_cfg.log_level.clone())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
    init_logging(log_dir.as_deref(), &log_level)?;
    info!("Config file: {}", cli.config);

    dispatch(&cli.run_type, || build_publisher(&cli, file_cfg, &cwd))?;

    Ok(())
}

/// Log to `<log_dir>/map_worker.log` (appending) or to stderr.
fn init_logging(log_dir: Option<&Path>, level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?;

    match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
            let path = dir.join(LOG_FILE_NAME);
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

fn build_publisher(
    cli: &Cli,
    file_cfg: WorkerConfigFile,
    cwd: &Path,
) -> anyhow::Result<MapPublisher<HttpChartApi, ConfigFileStore>> {
    // Merge: CLI args > config file > defaults
    let api_base = file_cfg
        .api_base
        .clone()
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    let publish_base = file_cfg
        .publish_base
        .clone()
        .unwrap_or_else(|| DEFAULT_PUBLISH_BASE.to_string());
    let auth_env = file_cfg
        .auth_env
        .clone()
        .unwrap_or_else(|| DEFAULT_AUTH_ENV.to_string());
    let csv_path = resolve(cwd, cli.csv.as_ref().or(file_cfg.csv_path.as_ref()), DEFAULT_CSV_PATH);
    let html_output = resolve(
        cwd,
        cli.output.as_ref().or(file_cfg.html_output.as_ref()),
        DEFAULT_HTML_OUTPUT,
    );

    let token = std::env::var(&auth_env)
        .with_context(|| format!("Bearer token variable {} is not set", auth_env))?;

    let store = ConfigFileStore::new(&cli.config, file_cfg);
    let map_id = store.load();

    info!("Starting map worker");
    info!("  API:       {}", api_base);
    info!("  Map id:    {}", map_id.as_ref().map_or("<none>", |id| id.as_str()));
    info!("  CSV:       {}", csv_path.display());
    info!("  Output:    {}", html_output.display());
    info!(
        "  Token:     {}*** (from {})",
        token.chars().take(4).collect::<String>(),
        auth_env
    );

    let api = HttpChartApi::new(api_base, publish_base, token)?;
    Ok(MapPublisher::new(
        api,
        store,
        PublisherConfig {
            map_id,
            csv_path,
            html_output,
        },
    ))
}

/// Relative paths are taken from the working directory.
fn resolve(cwd: &Path, configured: Option<&String>, default: &str) -> PathBuf {
    cwd.join(configured.map(String::as_str).unwrap_or(default))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn run_type_is_positional_and_unrestricted() {
        let cli = Cli::try_parse_from(["mapworker", "rebuild"]).unwrap();
        assert_eq!(cli.run_type, "rebuild");
        assert_eq!(cli.config, DEFAULT_CONFIG);

        let cli = Cli::try_parse_from([
            "mapworker",
            "--config",
            "/etc/mapworker.yaml",
            "--csv",
            "cases.csv",
            "update",
        ])
        .unwrap();
        assert_eq!(cli.run_type, "update");
        assert_eq!(cli.config, "/etc/mapworker.yaml");
        assert_eq!(cli.csv.as_deref(), Some("cases.csv"));

        assert!(Cli::try_parse_from(["mapworker"]).is_err());
    }

    #[test]
    fn paths_resolve_against_working_directory() {
        let cwd = Path::new("/srv/worker");
        assert_eq!(
            resolve(cwd, None, DEFAULT_CSV_PATH),
            PathBuf::from("/srv/worker/data/county_cases.csv")
        );
        let configured = "out/cases.csv".to_string();
        assert_eq!(
            resolve(cwd, Some(&configured), DEFAULT_CSV_PATH),
            PathBuf::from("/srv/worker/out/cases.csv")
        );
        let absolute = "/data/cases.csv".to_string();
        assert_eq!(
            resolve(cwd, Some(&absolute), DEFAULT_CSV_PATH),
            PathBuf::from("/data/cases.csv")
        );
    }

    #[test]
    fn unknown_run_type_needs_no_token() {
        let cli = Cli::try_parse_from(["mapworker", "--config", "absent.yaml", "delete"]).unwrap();
        let cwd = PathBuf::from("/tmp");
        let outcome = dispatch(&cli.run_type, || {
            build_publisher(&cli, WorkerConfigFile::default(), &cwd)
        })
        .unwrap();
        assert!(outcome.is_none());
    }
}
