use std::sync::Arc;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use tastecli::{
    cli, config, error,
    management::SessionState,
    types::{PkceToken, TimeWindow},
    utils,
};
use tokio::sync::Mutex;

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with Spotify API
    Auth,

    /// Show your enriched top tracks
    Tracks(TracksOptions),

    /// Derived metrics over your top tracks
    Insights(InsightsOptions),

    #[clap(about = "Create a playlist from your top tracks")]
    Playlist(PlaylistOptions),

    /// Export the enriched track table as CSV
    Export(ExportOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct TracksOptions {
    /// Listening window to analyze (short, medium, long)
    #[clap(long, default_value = "medium", value_parser = utils::parse_time_window)]
    pub window: TimeWindow,
}

#[derive(Parser, Debug, Clone)]
pub struct InsightsOptions {
    /// Listening window to analyze (short, medium, long)
    #[clap(long, default_value = "medium", value_parser = utils::parse_time_window)]
    pub window: TimeWindow,

    /// Genre distribution and genre popularity
    #[clap(long)]
    pub genres: bool,

    /// Detected song languages
    #[clap(long)]
    pub languages: bool,

    /// Most frequent artists and artist popularity
    #[clap(long)]
    pub artists: bool,

    /// Albums with the most tracks in your top list
    #[clap(long)]
    pub albums: bool,

    /// Release year distribution
    #[clap(long)]
    pub years: bool,

    /// Explicit content breakdown
    #[clap(long)]
    pub explicit: bool,

    /// Taste diversity score
    #[clap(long)]
    pub diversity: bool,

    /// Track similarity clustering
    #[clap(long)]
    pub clusters: bool,

    /// Hidden gems (low popularity, clean, known genre)
    #[clap(long = "hidden-gems")]
    pub hidden_gems: bool,

    /// Genre breakdown across all three windows
    #[clap(long)]
    pub evolution: bool,
}

impl InsightsOptions {
    fn sections(&self) -> cli::InsightSections {
        cli::InsightSections {
            genres: self.genres,
            languages: self.languages,
            artists: self.artists,
            albums: self.albums,
            years: self.years,
            explicit: self.explicit,
            diversity: self.diversity,
            clusters: self.clusters,
            hidden_gems: self.hidden_gems,
            evolution: self.evolution,
        }
    }
}

#[derive(Parser, Debug, Clone)]
pub struct PlaylistOptions {
    /// Listening window the playlist is built from
    #[clap(long, default_value = "medium", value_parser = utils::parse_time_window)]
    pub window: TimeWindow,
}

#[derive(Parser, Debug, Clone)]
pub struct ExportOptions {
    /// Listening window to export
    #[clap(long, default_value = "medium", value_parser = utils::parse_time_window)]
    pub window: TimeWindow,

    /// Path of the CSV file to write
    #[clap(long, default_value = "top_tracks.csv")]
    pub output: String,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth => {
            let oauth_result: Arc<Mutex<Option<PkceToken>>> = Arc::new(Mutex::new(None));
            cli::auth(Arc::clone(&oauth_result)).await;
        }
        Command::Tracks(opt) => cli::tracks(opt.window).await,
        Command::Insights(opt) => cli::insights(opt.window, opt.sections()).await,
        Command::Playlist(opt) => {
            let mut session = SessionState::new();
            cli::playlist(opt.window, &mut session).await
        }
        Command::Export(opt) => cli::export(opt.window, opt.output).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
