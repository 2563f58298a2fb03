mod api;
mod server;

use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

use engagement_heatmap::config::ScorerConfig;
use engagement_heatmap::input::{read_posts, read_posts_from};
use engagement_heatmap::sample::generate_sample_posts;
use engagement_heatmap::scoring::{mood_styles, EngagementScorer};
use engagement_heatmap::{format_float, format_number, format_percent, HeatmapError, ScoredPost};

use crate::api::{ApiHeatmapRequest, ApiHeatmapResponse};

#[derive(Parser)]
#[command(name = "engagement-heatmap", about = "Engagement heat map for social posts")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Score a batch of posts read from a file or stdin
    Score(ScoreArgs),
    /// Print the mood legend
    Moods(MoodsArgs),
    /// Write a synthetic batch of posts
    Sample(SampleArgs),
    /// Serve the heat map API and dashboard
    Serve(ServeArgs),
}

#[derive(Args, Debug, Clone, Default)]
struct ScoreArgs {
    #[arg(long)]
    input: Option<PathBuf>,
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    platform: Option<String>,
    #[arg(long)]
    timeline: bool,
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug, Clone)]
struct MoodsArgs {
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
struct SampleArgs {
    #[arg(long, default_value_t = 12)]
    count: usize,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    #[arg(long, default_value = "127.0.0.1")]
    host: String,
    #[arg(long, default_value_t = 8788)]
    port: u16,
    #[arg(long, default_value = "../dashboard/dist")]
    web_root: String,
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    load_dotenv();
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("engagement_heatmap=info")),
        )
        .init();

    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), HeatmapError> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Score(ScoreArgs::default()));

    match command {
        Command::Score(args) => run_score(args),
        Command::Moods(args) => run_moods(args),
        Command::Sample(args) => run_sample(args),
        Command::Serve(args) => server::serve(args).await,
    }
}

fn run_score(args: ScoreArgs) -> Result<(), HeatmapError> {
    let (config, _) = ScorerConfig::load(args.config)?;

    let posts = match args.input.as_deref() {
        Some(path) => read_posts(path)?,
        None => read_posts_from(io::stdin().lock())?,
    };
    let request = ApiHeatmapRequest {
        posts,
        order: args.timeline.then(|| "timeline".to_string()),
        platform: args.platform,
    };
    let (posts, order) = request.into_batch()?;

    let scored = EngagementScorer::from_config(&config).score(&posts);
    let response = ApiHeatmapResponse::from_scored(scored, order);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    if response.posts.is_empty() {
        println!("No posts to score.");
        return Ok(());
    }

    for post in &response.posts {
        print_scored_post(post);
    }

    let summary = &response.summary;
    println!();
    println!(
        "Average engagement score: {} across {} posts",
        summary.average_score, summary.total_posts
    );
    if let Some(mood) = summary.dominant_mood {
        println!(
            "Dominant mood: {} {} ({} posts)",
            mood.style().emoji,
            mood.label(),
            summary.count_for(mood)
        );
    }

    Ok(())
}

fn print_scored_post(post: &ScoredPost) {
    let rate = post
        .engagement_rate
        .map(|rate| format!(" | rate {}", format_percent(rate)))
        .unwrap_or_default();
    println!(
        "{} {:<8} {:>5} [{:<6}] {:<10} {:<22} likes {} | comments {} | shares {} | total {}{}",
        post.emoji,
        post.mood.label(),
        format_float(post.engagement_score, 1),
        post.intensity.label(),
        post.post.platform.label(),
        post.post.id,
        format_number(post.post.likes),
        format_number(post.post.comments),
        format_number(post.post.shares),
        format_number(post.total_engagement),
        rate
    );
}

fn run_moods(args: MoodsArgs) -> Result<(), HeatmapError> {
    let (config, _) = ScorerConfig::load(args.config)?;
    let t = &config.thresholds;
    let o = &config.overrides;

    println!(
        "Score ladder: Viral >= {} | Loved >= {} | Good >= {} | Neutral >= {} | Quiet below",
        t.viral, t.loved, t.good, t.neutral
    );
    println!(
        "Overrides: Buzzing when comments > {} x likes and > {} | Trending when shares > {} x likes and > {}",
        o.buzzing_comment_ratio,
        o.buzzing_min_comments,
        o.trending_share_ratio,
        o.trending_min_shares
    );
    println!();
    for style in mood_styles() {
        println!(
            "{} {:<8} {:<6} {:<13} {}",
            style.emoji,
            style.mood.label(),
            style.intensity.label(),
            style.color,
            style.description
        );
    }
    Ok(())
}

fn run_sample(args: SampleArgs) -> Result<(), HeatmapError> {
    let posts = generate_sample_posts(args.count, args.seed, Utc::now());
    let payload = serde_json::to_string_pretty(&posts)?;

    match args.output {
        Some(path) => {
            let parent = path
                .parent()
                .filter(|parent| !parent.as_os_str().is_empty());
            if let Some(parent) = parent {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, payload)?;
            info!(path = %path.display(), posts = posts.len(), "wrote sample batch");
        }
        None => println!("{}", payload),
    }
    Ok(())
}

fn load_dotenv() {
    let _ = dotenvy::dotenv();
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let manifest_path = Path::new(manifest_dir).join(".env");
    let _ = dotenvy::from_path(manifest_path);
}
