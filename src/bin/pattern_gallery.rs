use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;
use itertools::Itertools;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::info;

use pattern_gallery::flyweight::{BadgeCollectionBuilder, FlyweightBuildResult};
use pattern_gallery::mediator::{Discipline, LaunchMediator, MediatorLogEntry};
use pattern_gallery::prototype::{creative_brief_library, find_brief, BriefOverrides, CreativeBriefSpec};
use pattern_gallery::{logging, FactoryScope, GalleryConfig, IdSequence, PatternKind, Result};

#[derive(Parser, Debug)]
#[command(version, about = "Design pattern demos as seedable data generators", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// RNG seed; overrides the config file
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the available patterns
    List,
    /// Generate badge collections through an icon flyweight cache
    Flyweight {
        #[arg(long, default_value_t = 1)]
        rounds: usize,
        /// Keep one icon cache across rounds
        #[arg(long)]
        session: bool,
    },
    /// Dispatch team updates through the launch mediator
    Mediator {
        /// Sending discipline; repeat for several, defaults to all
        #[arg(long = "from")]
        from: Vec<Discipline>,
    },
    /// Clone a stock creative brief with overrides
    Prototype {
        /// Name of the stock brief to clone (substring match)
        #[arg(long)]
        source: Option<String>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        tone: Option<String>,
        #[arg(long = "keyword")]
        keywords: Vec<String>,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => GalleryConfig::from_file(path)?,
        None => GalleryConfig::default(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    info!(seed = ?config.seed, "starting");

    match args.command {
        Command::List => list(args.json),
        Command::Flyweight { rounds, session } => {
            if session {
                config.flyweight.factory_scope = FactoryScope::Session;
            }
            let mut builder = BadgeCollectionBuilder::new(config.flyweight)?;
            let results: Vec<FlyweightBuildResult> =
                (0..rounds).map(|_| builder.build(&mut rng)).collect();

            if args.json {
                print_json(&results)
            } else {
                results.iter().enumerate().for_each(|(i, r)| print_badges(i + 1, r));
                Ok(())
            }
        }
        Command::Mediator { from } => {
            let senders = if from.is_empty() {
                Discipline::ALL.to_vec()
            } else {
                from
            };
            let mut mediator = LaunchMediator::new(config.mediator)?;
            let entries: Vec<MediatorLogEntry> =
                senders.into_iter().map(|d| mediator.dispatch(d, &mut rng)).collect();

            if args.json {
                #[derive(Serialize)]
                struct Output<'a> {
                    log: &'a [MediatorLogEntry],
                    channels: std::collections::BTreeMap<Discipline, String>,
                }
                print_json(&Output {
                    log: &entries,
                    channels: mediator.channel_snapshot(),
                })
            } else {
                entries.iter().for_each(print_log_entry);
                println!();
                println!("{}", "Channels".bold());
                for (discipline, message) in mediator.channel_snapshot() {
                    println!("  {:<12} {}", discipline.to_string().cyan(), message);
                }
                Ok(())
            }
        }
        Command::Prototype {
            source,
            name,
            tone,
            keywords,
        } => {
            let mut ids = IdSequence::new("brief");
            let library = creative_brief_library(&mut ids);
            let prototype = match &source {
                Some(wanted) => find_brief(&library, wanted)?,
                None => &library[0],
            };

            let mut overrides = BriefOverrides::new();
            overrides.name = name;
            overrides.tone = tone.map(Into::into);
            if !keywords.is_empty() {
                overrides = overrides.keywords(keywords);
            }
            let clone = prototype.clone_with(overrides, &mut ids);

            if args.json {
                print_json(&[prototype.snapshot(), clone.snapshot()])
            } else {
                print_brief("source", &prototype.snapshot());
                print_brief("clone", &clone.snapshot());
                Ok(())
            }
        }
    }
}

fn list(json: bool) -> Result<()> {
    if json {
        let slugs: Vec<&str> = PatternKind::ALL.iter().map(|p| p.slug()).collect();
        return print_json(&slugs);
    }
    for pattern in PatternKind::ALL {
        println!("{:<10} {}", pattern.title().bold(), pattern.summary());
    }
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn hex_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

fn print_badges(round: usize, result: &FlyweightBuildResult) {
    println!("{}", format!("Round {round}").bold());
    for badge in &result.badges {
        let swatch = match hex_rgb(badge.accent) {
            Some((r, g, b)) => "■".truecolor(r, g, b),
            None => "■".normal(),
        };
        println!(
            "  {} {:<6} {:<15} {:<14} {}",
            swatch,
            badge.icon_name.to_string().yellow(),
            badge.title,
            badge.product.dimmed(),
            badge.meta
        );
    }
    let stats = &result.stats;
    println!(
        "  {} badges, {} unique icons, {} hits, {} misses",
        stats.total_badges.to_string().green(),
        stats.unique_icons.to_string().green(),
        stats.cache_hits.to_string().green(),
        stats.cache_misses.to_string().red()
    );
}

fn print_log_entry(entry: &MediatorLogEntry) {
    println!(
        "{} {} -> {}: {}",
        entry.timestamp.dimmed(),
        entry.from.to_string().cyan().bold(),
        entry.routed_to.iter().join(", ").cyan(),
        entry.summary
    );
    println!("    {}", entry.nudge.italic());
}

fn print_brief(label: &str, spec: &CreativeBriefSpec) {
    println!("{} {} ({})", format!("[{label}]").bold(), spec.name, spec.id.dimmed());
    println!("  theme:        {}", spec.theme);
    println!("  tone:         {}", spec.tone);
    println!("  palette:      {}", spec.palette.join(" "));
    println!("  keywords:     {}", spec.keywords.join(", "));
    println!("  deliverables: {}", spec.deliverables.join(", "));
}
