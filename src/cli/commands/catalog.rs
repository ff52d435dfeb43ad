//! `workr catalog` command - list and inspect specialists

use std::time::Duration;

use clap::{Subcommand, ValueEnum};
use miette::{IntoDiagnostic, Result};
use tokio_util::sync::CancellationToken;

use crate::catalog::{
    filter_specialists, Availability, CatalogLoader, Category, FetchState, FilterCriteria,
    Language, MockSource, PriceRange, Rating, Specialist, SpecialistId,
};
use crate::cli::output;
use crate::cli::{GlobalOpts, OutputFormat};

#[derive(Subcommand, Debug)]
pub enum CatalogCommands {
    /// List specialists with filtering
    List(ListArgs),

    /// Show one specialist's details
    Show(ShowArgs),
}

/// Sort key for list output
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Keep the source order
    #[default]
    None,
    Name,
    Rating,
    Price,
    Reviews,
    Experience,
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Search in name, handle and skills (case-insensitive substring)
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// Filter by category
    #[arg(long, short = 'c')]
    pub category: Option<Category>,

    /// Require a skill (can be given multiple times; all must match)
    #[arg(long)]
    pub skill: Vec<String>,

    /// Require a spoken language (can be given multiple times)
    #[arg(long, short = 'l')]
    pub language: Vec<Language>,

    /// Filter by availability (free or busy)
    #[arg(long)]
    pub available: Option<Availability>,

    /// Minimum rating, e.g. 4.5
    #[arg(long)]
    pub min_rating: Option<Rating>,

    /// Lower price bound
    #[arg(long)]
    pub price_min: Option<u32>,

    /// Upper price bound
    #[arg(long)]
    pub price_max: Option<u32>,

    /// Only specialists new to the platform
    #[arg(long)]
    pub new_only: bool,

    /// Sort by field
    #[arg(long, default_value = "none")]
    pub sort: SortKey,

    /// Reverse sort order
    #[arg(long, short = 'r')]
    pub reverse: bool,

    /// Limit number of results
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    /// Show only count
    #[arg(long)]
    pub count: bool,

    #[command(flatten)]
    pub fetch: FetchArgs,
}

/// Knobs for the simulated fetch
#[derive(clap::Args, Debug)]
pub struct FetchArgs {
    /// Override the simulated network delay in milliseconds
    #[arg(long)]
    pub latency_ms: Option<u64>,

    /// Give up on the fetch after this many milliseconds
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Simulate an upstream failure with this message
    #[arg(long)]
    pub fail: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Specialist id
    pub id: u32,

    #[command(flatten)]
    pub fetch: FetchArgs,
}

/// Run a catalog subcommand
pub fn run(cmd: CatalogCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        CatalogCommands::List(args) => run_list(args, global),
        CatalogCommands::Show(args) => run_show(args, global),
    }
}

/// Build the source from fetch flags
fn build_source(fetch: &FetchArgs) -> MockSource {
    if let Some(ref message) = fetch.fail {
        return MockSource::failing(message.clone());
    }
    match fetch.latency_ms {
        Some(ms) => MockSource::with_latency(Duration::from_millis(ms)),
        None => MockSource::new(),
    }
}

/// Run one catalog load on a current-thread runtime
pub fn fetch_specialists(fetch: &FetchArgs) -> Result<Vec<Specialist>> {
    let source = build_source(fetch);
    let timeout = fetch.timeout_ms.map(Duration::from_millis);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .into_diagnostic()?;

    let state = runtime.block_on(async {
        let cancel = CancellationToken::new();
        if let Some(timeout) = timeout {
            let cancel = cancel.clone();
            tokio::spawn(async move {
                tokio::time::sleep(timeout).await;
                cancel.cancel();
            });
        }

        let mut loader = CatalogLoader::new();
        loader.load(&source, &cancel).await.clone()
    });

    match state {
        FetchState::Ready(list) => Ok(list),
        FetchState::Failed(err) => Err(miette::miette!("{}", err)),
        FetchState::Loading => unreachable!("load resolves before returning"),
    }
}

fn run_list(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    super::require_role(global)?;

    let price_range = match (args.price_min, args.price_max) {
        (None, None) => None,
        (min, max) => Some(
            PriceRange::new(min.unwrap_or(0), max.unwrap_or(u32::MAX))
                .map_err(|e| miette::miette!("{}", e))?,
        ),
    };

    let criteria = FilterCriteria {
        search: args.search.clone(),
        category: args.category,
        skills: args.skill.clone(),
        languages: args.language.clone(),
        availability: args.available,
        min_rating: args.min_rating,
        price_range,
        only_new: args.new_only,
    };

    let specialists = fetch_specialists(&args.fetch)?;
    let mut specialists = filter_specialists(&specialists, &criteria);

    match args.sort {
        SortKey::None => {}
        SortKey::Name => specialists.sort_by(|a, b| a.name.cmp(&b.name)),
        SortKey::Rating => specialists.sort_by(|a, b| a.rating.cmp(&b.rating)),
        SortKey::Price => specialists.sort_by_key(|s| s.price.amount()),
        SortKey::Reviews => specialists.sort_by_key(|s| s.review_count),
        SortKey::Experience => specialists.sort_by_key(|s| s.experience_years),
    }

    if args.reverse {
        specialists.reverse();
    }

    if let Some(limit) = args.limit {
        specialists.truncate(limit);
    }

    if args.count {
        println!("{}", specialists.len());
        return Ok(());
    }

    if specialists.is_empty() {
        println!("No specialists found.");
        return Ok(());
    }

    match output::effective_format(global.output) {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&specialists).into_diagnostic()?;
            println!("{}", json);
        }
        OutputFormat::Yaml => {
            let yaml = serde_yml::to_string(&specialists).into_diagnostic()?;
            print!("{}", yaml);
        }
        OutputFormat::Table | OutputFormat::Auto => {
            println!("{}", output::specialist_table(&specialists));
            println!("{} specialist(s)", specialists.len());
        }
    }

    Ok(())
}

fn run_show(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    super::require_role(global)?;

    let specialists = fetch_specialists(&args.fetch)?;
    let wanted = SpecialistId(args.id);
    let specialist = specialists
        .iter()
        .find(|s| s.id == wanted)
        .ok_or_else(|| miette::miette!("No specialist found with id {}", args.id))?;

    match output::effective_format(global.output) {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(specialist).into_diagnostic()?;
            println!("{}", json);
        }
        OutputFormat::Yaml => {
            let yaml = serde_yml::to_string(specialist).into_diagnostic()?;
            print!("{}", yaml);
        }
        OutputFormat::Table | OutputFormat::Auto => {
            output::print_specialist_detail(specialist);
        }
    }

    Ok(())
}
