use anyhow::{Context, Result, anyhow};
use browser::{BrowseView, BrowserConfig, MovieBrowser, MovieCard, SelectionView};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::{LoadOptions, Year, normalize_label};
use pipeline::{Criteria, DEFAULT_RECOMMENDATION_LIMIT, GenreMatch};
use posters::{ImageHandle, PLACEHOLDER_TEXT};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use tracing::debug;

/// Bundled datasets point at `poster/` while the image files live in `posters/`
const DEFAULT_POSTER_REWRITE: &str = "poster/=posters/";

/// ReelPicks - browse a movie dataset and get recommendations
#[derive(Parser)]
#[command(name = "reel-picks")]
#[command(about = "Filter a movie dataset and recommend similar titles", long_about = None)]
struct Cli {
    /// Path to the movie dataset (CSV)
    #[arg(short, long, default_value = "data/movies.csv")]
    data: PathBuf,

    /// Directory poster paths are resolved against
    #[arg(short, long, default_value = ".")]
    assets: PathBuf,

    /// Drop movies released before this year
    #[arg(long, requires = "to_year")]
    from_year: Option<Year>,

    /// Drop movies released after this year
    #[arg(long, requires = "from_year")]
    to_year: Option<Year>,

    /// Abort on the first malformed row instead of skipping it
    #[arg(long)]
    strict: bool,

    /// Keep Language and Genre exactly as written in the dataset
    #[arg(long)]
    raw_labels: bool,

    /// Rewrite a leading poster path segment before lookup
    #[arg(long, value_parser = parse_rewrite, default_value = DEFAULT_POSTER_REWRITE)]
    poster_rewrite: (String, String),

    /// Look up poster references exactly as written in the dataset
    #[arg(long)]
    no_poster_rewrite: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter the catalog and show the first match with recommendations
    Browse {
        #[arg(long)]
        language: Option<String>,

        #[arg(long)]
        genre: Option<String>,

        /// Match the genre as a case-insensitive substring
        #[arg(long)]
        genre_contains: bool,

        #[arg(long)]
        year: Option<Year>,

        /// Lowest rating to include
        #[arg(long)]
        min_rating: Option<f32>,

        /// Highest rating to include
        #[arg(long)]
        max_rating: Option<f32>,

        /// Number of recommendations to return
        #[arg(long, default_value_t = DEFAULT_RECOMMENDATION_LIMIT)]
        limit: usize,

        /// Print the view as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one movie and its recommendations
    Show {
        /// Exact title of the movie
        #[arg(long)]
        title: String,

        /// Number of recommendations to return
        #[arg(long, default_value_t = DEFAULT_RECOMMENDATION_LIMIT)]
        limit: usize,

        /// Print the view as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the languages, genres and years available for filtering
    Options,
}

fn parse_rewrite(s: &str) -> std::result::Result<(String, String), String> {
    s.split_once('=')
        .map(|(from, to)| (from.to_string(), to.to_string()))
        .ok_or_else(|| format!("expected FROM=TO, got '{}'", s))
}

fn main() -> Result<ExitCode> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut load_options = LoadOptions::default()
        .with_strict(cli.strict)
        .with_normalize_labels(!cli.raw_labels);
    if let (Some(from), Some(to)) = (cli.from_year, cli.to_year) {
        if from > to {
            return Err(anyhow!("--from-year {} is after --to-year {}", from, to));
        }
        load_options = load_options.with_year_range(from, to);
    }

    let mut config = BrowserConfig::new(&cli.data, &cli.assets).with_load_options(load_options);
    if !cli.no_poster_rewrite {
        let (from, to) = &cli.poster_rewrite;
        debug!("Rewriting poster references from '{}' to '{}'", from, to);
        config = config.with_poster_rewrite(from.clone(), to.clone());
    }

    // Load the catalog once; it stays read-only for the rest of the process
    let start = Instant::now();
    let browser = config.build().context("Failed to start movie browser")?;
    eprintln!(
        "{} Loaded {} movies in {:?}",
        "✓".green(),
        browser.catalog().len(),
        start.elapsed()
    );

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Browse {
            language,
            genre,
            genre_contains,
            year,
            min_rating,
            max_rating,
            limit,
            json,
        } => {
            let normalize = |label: String| {
                if cli.raw_labels {
                    label
                } else {
                    normalize_label(&label)
                }
            };
            let criteria = Criteria {
                language: language.map(normalize),
                genre: genre.map(normalize),
                genre_match: if genre_contains {
                    GenreMatch::Contains
                } else {
                    GenreMatch::Exact
                },
                year,
                min_rating,
                max_rating,
            };
            handle_browse(&browser.with_limit(limit), &criteria, json)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Show { title, limit, json } => {
            if handle_show(&browser.with_limit(limit), &title, json)? {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
        Commands::Options => {
            handle_options(&browser);
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Handle the 'browse' command
fn handle_browse(browser: &MovieBrowser, criteria: &Criteria, json: bool) -> Result<()> {
    debug!("Browsing with {:?}", criteria);
    let view = browser.browse(criteria);

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    print_browse(&view);
    Ok(())
}

/// Handle the 'show' command
///
/// Returns `false` when the title is not in the catalog.
fn handle_show(browser: &MovieBrowser, title: &str, json: bool) -> Result<bool> {
    let view = match browser.select(title) {
        Ok(view) => view,
        Err(e) => {
            println!("{}", e.to_string().yellow());
            return Ok(false);
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print_selection(&view);
    }
    Ok(true)
}

/// Handle the 'options' command
fn handle_options(browser: &MovieBrowser) {
    let catalog = browser.catalog();

    println!("{}", "Languages:".bold().blue());
    for language in catalog.languages() {
        println!("  • {}", language);
    }

    println!("{}", "Genres:".bold().blue());
    for (genre, count) in catalog.genre_counts() {
        println!("  • {} ({} movies)", genre, count);
    }

    let years: Vec<String> = catalog.years().map(|y| y.to_string()).collect();
    println!("{} {}", "Years:".bold().blue(), years.join(", "));
}

fn print_browse(view: &BrowseView) {
    if view.matches.is_empty() {
        println!(
            "{}",
            "No movies found based on the selected filters. Try adjusting your filters.".yellow()
        );
        return;
    }

    println!("{}", format!("Matches ({}):", view.matches.len()).bold().blue());
    for (i, movie) in view.matches.iter().enumerate() {
        println!(
            "{}. {} ({}) [{} / {}] - {:.1}",
            (i + 1).to_string().green(),
            movie.title,
            movie.year,
            movie.language,
            movie.genre,
            movie.rating
        );
    }
    println!();

    if let Some(selection) = &view.selection {
        print_selection(selection);
    }
}

fn print_selection(view: &SelectionView) {
    println!("{}", "Selected Movie:".bold().blue());
    print_card(&view.selected, "");
    println!();

    println!("{}", "Recommended Movies:".bold().blue());
    if view.recommendations.is_empty() {
        println!("No recommendations available.");
        return;
    }
    for (i, card) in view.recommendations.iter().enumerate() {
        println!("{}.", (i + 1).to_string().green());
        print_card(card, "   ");
    }
}

fn print_card(card: &MovieCard, indent: &str) {
    println!(
        "{}{} ({}) [{} / {}] - {:.1}",
        indent,
        card.title.bold(),
        card.year,
        card.language,
        card.genre,
        card.rating
    );
    println!("{}{}", indent, card.description);
    match &card.poster {
        ImageHandle::Poster {
            path,
            width,
            height,
        } => println!("{}Poster: {} ({}x{})", indent, path.display(), width, height),
        ImageHandle::Placeholder => println!("{}{}", indent, PLACEHOLDER_TEXT.dimmed()),
    }
}
