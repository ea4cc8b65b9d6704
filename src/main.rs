use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::error;

use attendance_portal::app::ports::{DiagnosticSink, SourceFetcher};
use attendance_portal::app::AttendanceService;
use attendance_portal::config::PortalConfig;
use attendance_portal::constants::DEFAULT_CONFIG_PATH;
use attendance_portal::countdown::parse_target;
use attendance_portal::domain::Group;
use attendance_portal::infra::{CollectingSink, FileFetcher, HttpFetcher, TracingSink};
use attendance_portal::logging;
use attendance_portal::server::{start_server, AppState};
use attendance_portal::view::{filter_records, ListQuery};

#[derive(Parser)]
#[command(name = "attendance_portal")]
#[command(about = "Exam attendance eligibility lookup")]
#[command(version)]
struct Cli {
    /// Path to the TOML config file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the development server
    Serve {
        #[arg(long)]
        port: Option<u16>,
        /// Directory holding the site and the source files
        #[arg(long)]
        public_dir: Option<PathBuf>,
    },
    /// Load both source files and print one group's list
    Check {
        /// Group to list: a or b
        #[arg(long, default_value = "a")]
        group: Group,
        /// Case-insensitive name filter
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long)]
        eligible_only: bool,
        /// Fetch sources from this origin
        #[arg(long, conflicts_with = "dir")]
        base_url: Option<String>,
        /// Read sources from this directory
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

fn build_service(
    config: &PortalConfig,
    fetcher: Arc<dyn SourceFetcher>,
    sink: Arc<dyn DiagnosticSink>,
) -> AttendanceService {
    AttendanceService::with_schemas(fetcher, sink, config.schema(Group::A), config.schema(Group::B))
}

fn pick_fetcher(
    config: &PortalConfig,
    base_url: Option<String>,
    dir: Option<PathBuf>,
) -> Arc<dyn SourceFetcher> {
    if let Some(dir) = dir {
        return Arc::new(FileFetcher::new(dir));
    }
    match base_url.or_else(|| config.sources.base_url.clone()) {
        Some(url) => Arc::new(HttpFetcher::new(url)),
        None => Arc::new(FileFetcher::new(&config.server.public_dir)),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_logging();

    let cli = Cli::parse();
    let config = PortalConfig::load(&cli.config)?;

    match cli.command {
        Commands::Serve { port, public_dir } => {
            let public_dir = public_dir.unwrap_or_else(|| PathBuf::from(&config.server.public_dir));
            let port = port.unwrap_or(config.server.port);
            let exam_starts_at = parse_target(&config.exam.starts_at)?;

            let fetcher: Arc<dyn SourceFetcher> = match &config.sources.base_url {
                Some(url) => Arc::new(HttpFetcher::new(url.clone())),
                None => Arc::new(FileFetcher::new(&public_dir)),
            };
            let service = build_service(&config, fetcher, Arc::new(TracingSink));
            let state = AppState {
                service: Arc::new(service),
                exam_starts_at,
            };

            start_server(state, &public_dir, &config.server.index_file, port)
                .await
                .context("development server stopped")?;
        }
        Commands::Check {
            group,
            search,
            eligible_only,
            base_url,
            dir,
        } => {
            let sink = Arc::new(CollectingSink::new());
            let fetcher = pick_fetcher(&config, base_url, dir);
            let service = build_service(&config, fetcher, sink.clone());

            let records = match service.load_all().await {
                Ok(records) => records,
                Err(e) => {
                    error!(error = %e, "Failed to load attendance data");
                    println!("❌ {}", e.user_message());
                    std::process::exit(1);
                }
            };

            let view = filter_records(
                &records,
                &ListQuery {
                    group,
                    search,
                    eligible_only,
                },
            );

            println!("\n📋 Group {} attendance:", group);
            for record in &view.records {
                let mark = if record.is_eligible { "✅" } else { "❌" };
                println!(
                    "   {} {:>4}  {:<30} {:>3}%",
                    mark, record.identifier, record.display_name, record.attendance_percentage
                );
            }
            println!("\n   {} eligible of {}", view.eligible_count, view.total_count);

            let issues = sink.issues();
            if !issues.is_empty() {
                println!("\n⚠️  Row issues:");
                for issue in &issues {
                    println!("   - {}", issue);
                }
            }
        }
    }
    Ok(())
}
