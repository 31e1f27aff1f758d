//! User directory viewer - Entry Point

use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use userdir::model::AppError;
use userdir::source::HttpFetcher;
use userdir::state::ViewSession;
use userdir::view::render_table;
use userdir::view_state::{SortDirection, SortField, ViewQuery};

/// Browse a paged user collection with search, filters, sorting and paging
#[derive(Parser, Debug)]
#[command(name = "userdir")]
#[command(version)]
#[command(about = "Searchable, paginated view over a paged user collection endpoint")]
pub struct Args {
    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Collection endpoint URL
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Base client page size (3, 6 or 12)
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Search by name or email
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Filter by email domain suffix (e.g. @reqres.in)
    #[arg(long, default_value = "")]
    pub domain: String,

    /// Filter by first letter of the first name
    #[arg(long, default_value = "")]
    pub first_letter: String,

    /// Sort field
    #[arg(long, value_parser = ["first_name", "email"])]
    pub sort: Option<String>,

    /// Sort descending
    #[arg(long)]
    pub desc: bool,

    /// Client page to show (must be positive)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: Option<u32>,

    /// Number of additional server pages to load after the first
    #[arg(long, default_value = "0")]
    pub load_more: u32,
}

impl Args {
    fn query(&self) -> ViewQuery {
        let direction = if self.desc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        ViewQuery::new()
            .with_search(self.search.clone())
            .with_domain(self.domain.clone())
            .with_first_letter(&self.first_letter)
            .with_sort(SortField::from_key(self.sort.as_deref().unwrap_or("")), direction)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = userdir::config::load_config_with_precedence(args.config.clone())?;
        let merged = userdir::config::merge_config(config_file);
        let with_env = userdir::config::apply_env_overrides(merged);
        userdir::config::apply_cli_overrides(with_env, args.endpoint.clone(), args.page_size)?
    };

    userdir::logging::init(&config.log_file_path)?;

    info!(
        endpoint = %config.endpoint,
        page_size = %config.page_size,
        auto_grow = config.auto_grow_page_size,
        "Configuration loaded and resolved"
    );

    let fetcher = HttpFetcher::new(config.fetcher_options())?;
    let mut session = ViewSession::with_fetcher(fetcher, config.session_options());

    let mut snapshot = session.trigger_initial_load().await;
    for _ in 0..args.load_more {
        if snapshot.server_pages_exhausted || snapshot.last_error_message.is_some() {
            break;
        }
        snapshot = session.trigger_load_more().await;
    }

    session.set_query(args.query());
    if let Some(page) = args.page {
        session.set_page_index(page as usize);
    }

    print!("{}", render_table(&session.snapshot()));
    Ok(())
}
