use std::io::{IsTerminal, Write};
use std::str::FromStr;
use std::time::Duration;

use bs_client::logging::init_logging;
use bs_client::{ClientConfig, HtmlView, HttpApi, SearchClient, TerminalView, View, DEFAULT_BASE_URL};
use bs_core::Result;
use clap::{Parser, ValueEnum};
use tracing::info;

mod shell;

#[derive(Debug, Clone, PartialEq)]
struct HumanDuration(Duration);

impl FromStr for HumanDuration {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut total_seconds = 0u64;
        let mut current_number = String::new();
        let mut has_unit = false;

        for c in s.chars() {
            if c.is_ascii_digit() {
                current_number.push(c);
            } else if let Ok(num) = current_number.parse::<u64>() {
                let unit = match c {
                    's' => 1,
                    'm' => 60,
                    'h' => 3600,
                    _ => return Err(format!("Invalid duration unit: {}", c)),
                };
                total_seconds = num
                    .checked_mul(unit)
                    .and_then(|secs| total_seconds.checked_add(secs))
                    .ok_or_else(|| "Duration too large".to_string())?;
                current_number.clear();
                has_unit = true;
            } else if !c.is_whitespace() {
                return Err(format!("Invalid character in duration: {}", c));
            }
        }

        // A bare number means seconds
        if !current_number.is_empty() {
            let num = current_number
                .parse::<u64>()
                .map_err(|_| "Invalid number in duration".to_string())?;
            total_seconds = total_seconds
                .checked_add(num)
                .ok_or_else(|| "Duration too large".to_string())?;
            has_unit = true;
        }

        if !has_unit {
            return Err("Duration must include a number".to_string());
        }

        Ok(HumanDuration(Duration::from_secs(total_seconds)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Html,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Search indexed blog articles", long_about = None)]
struct Cli {
    /// Base URL of the search backend
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,
    /// Request timeout (e.g. 10s, 1m30s)
    #[arg(long)]
    timeout: Option<HumanDuration>,
    /// Maximum number of search results to ask for
    #[arg(long)]
    limit: Option<u32>,
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
    /// Disable colored output
    #[arg(long)]
    no_color: bool,
    #[arg(short, long)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug, Clone)]
enum Commands {
    /// Search articles by keyword
    Search {
        #[arg(required = true)]
        query: Vec<String>,
    },
    /// Show one random article
    Random,
    /// Show the number of indexed articles
    Stats,
    /// List indexed blogs
    Blogs,
    /// Read queries from stdin until `:quit`
    Shell,
}

/// Per-format hooks the commands need beyond [`View`].
pub(crate) trait Page: View {
    fn set_query(&mut self, query: &str);

    /// Called after each action has been rendered.
    fn present(&mut self) {}
}

impl Page for HtmlView {
    fn set_query(&mut self, query: &str) {
        HtmlView::set_query(self, query);
    }

    fn present(&mut self) {
        let mut out = std::io::stdout();
        if let Err(e) = writeln!(out, "{}", self.render_page()) {
            tracing::warn!("Failed to write page: {}", e);
        }
    }
}

impl<W: Write + Send> Page for TerminalView<W> {
    fn set_query(&mut self, query: &str) {
        TerminalView::set_query(self, query);
    }
}

fn build_config(cli: &Cli) -> Result<ClientConfig> {
    let mut config = ClientConfig::new(&cli.base_url)?;
    if let Some(timeout) = &cli.timeout {
        config = config.with_timeout(timeout.0);
    }
    if let Some(limit) = cli.limit {
        config = config.with_search_limit(limit);
    }
    Ok(config)
}

async fn run<V: Page>(client: &SearchClient<HttpApi, V>, command: Commands) -> Result<()> {
    let result = match command {
        Commands::Search { query } => {
            let query = query.join(" ");
            client.view().await.set_query(&query);
            client.submit(&query).await.map(|_| ())
        }
        Commands::Random => client.random_article().await.map(|_| ()),
        Commands::Stats => {
            client.load_stats().await;
            Ok(())
        }
        Commands::Blogs => client.list_blogs().await.map(|_| ()),
        Commands::Shell => return shell::run(client).await,
    };
    client.view().await.present();
    result
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = build_config(&cli)?;
    info!("Using backend at {}", config.base_url);
    let api = HttpApi::new(config)?;

    match cli.format {
        OutputFormat::Text => {
            let styled = !cli.no_color && std::io::stdout().is_terminal();
            let client = SearchClient::new(api, TerminalView::stdout().with_style(styled));
            run(&client, cli.command).await
        }
        OutputFormat::Html => {
            let client = SearchClient::new(api, HtmlView::new());
            run(&client, cli.command).await
        }
    }
}
