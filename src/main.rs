use std::io::Write;
use std::path::PathBuf;
use std::thread;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use u_seek::generator::RequestGenerator;
use u_seek::metrics::Comparison;
use u_seek::models::{parse_cylinders, Algorithm, Cylinder, SeekRequest};
use u_seek::playback::Playback;
use u_seek::render::{
    metrics_line, render_chart, render_comparison_chart, render_comparison_table,
    render_step_table, sequence_string,
};
use u_seek::sequencing::SequencingEngine;
use u_seek::validation::validate_input;
use u_seek::{Error, SimulatorConfig};

#[derive(Parser)]
#[command(name = "u-seek")]
#[command(author, version, about = "Disk-head scheduling simulator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (defaults to ./u-seek.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter, e.g. "debug" (overrides the config file; RUST_LOG wins)
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one algorithm and print its step table
    Run {
        /// fcfs, sstf, scan, cscan, look or clook
        #[arg(short, long, default_value = "fcfs")]
        algorithm: Algorithm,
        #[command(flatten)]
        input: InputArgs,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Run all six algorithms, compare them against FCFS and overlay their paths
    Compare {
        #[command(flatten)]
        input: InputArgs,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Draw the seek chart and play the head movement step by step
    Visualize {
        #[arg(short, long, default_value = "fcfs")]
        algorithm: Algorithm,
        #[command(flatten)]
        input: InputArgs,
        /// Print all frames without pausing
        #[arg(long)]
        no_delay: bool,
    },
    /// Print a random request set
    Generate {
        /// Number of requests (clamped to 1-1000)
        #[arg(short = 'n', long)]
        count: Option<usize>,
        /// Highest cylinder
        #[arg(short, long)]
        max_cylinder: Option<Cylinder>,
        /// Seed for a reproducible set
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Args)]
struct InputArgs {
    /// Requests in arrival order, e.g. "98,183,37,122"
    #[arg(short, long, conflicts_with = "random")]
    requests: Option<String>,
    /// Generate this many random requests instead
    #[arg(long)]
    random: Option<usize>,
    /// Seed for --random
    #[arg(long, requires = "random")]
    seed: Option<u64>,
    /// Starting head position
    #[arg(long)]
    head: Option<Cylinder>,
    /// Highest cylinder
    #[arg(short, long)]
    max_cylinder: Option<Cylinder>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = SimulatorConfig::load(cli.config.as_deref()).context("loading configuration")?;

    let filter = std::env::var("RUST_LOG")
        .ok()
        .or_else(|| cli.log_level.clone())
        .unwrap_or_else(|| config.log_level.clone());
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    debug!(?config, "loaded configuration");
    let engine = SequencingEngine::new();

    match cli.command {
        Commands::Run {
            algorithm,
            input,
            format,
        } => {
            let request = build_request(&input, &config)?;
            let result = engine.run(algorithm, &request);
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
                OutputFormat::Text => {
                    println!("Requests: {}", sequence_string(&request.requests));
                    println!("Seek sequence: {}", sequence_string(&result.sequence));
                    println!();
                    println!("{}", render_step_table(&result, request.len()));
                }
            }
        }
        Commands::Compare { input, format } => {
            let request = build_request(&input, &config)?;
            let results = engine.run_all(&request);
            let comparison = Comparison::from_results(&results, request.len());
            match format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&comparison)?)
                }
                OutputFormat::Text => {
                    println!("{}", render_comparison_table(&comparison));
                    if let Some(best) = comparison.best() {
                        println!("\nLeast head movement: {best}");
                    }
                    println!();
                    println!(
                        "{}",
                        render_comparison_chart(
                            &results,
                            request.max_cylinder,
                            &config.chart_options()
                        )
                    );
                }
            }
        }
        Commands::Visualize {
            algorithm,
            input,
            no_delay,
        } => {
            let request = build_request(&input, &config)?;
            let result = engine.run(algorithm, &request);

            println!("{algorithm}: {}", sequence_string(&result.sequence));
            println!("{}", metrics_line(&result, request.len()));
            println!();
            println!(
                "{}",
                render_chart(&result, request.max_cylinder, &config.chart_options())
            );
            println!();

            let playback =
                Playback::new(&result, request.max_cylinder).with_delay(config.step_delay());
            let delay = playback.delay();
            let mut stdout = std::io::stdout();
            for frame in playback {
                let note = if frame.is_wrap {
                    "wrap"
                } else if frame.services_request {
                    "serviced"
                } else {
                    "boundary"
                };
                writeln!(
                    stdout,
                    "[{:>3}] Head: {:>5}  {}  Next: {:>5}  ({:>5.1}%)  {note}",
                    frame.step,
                    frame.from,
                    frame.direction.arrow(),
                    frame.to,
                    frame.position_percent
                )?;
                stdout.flush()?;
                if !no_delay {
                    thread::sleep(delay);
                }
            }
            if let Some(position) = result.final_position() {
                println!("      Head: {position:>5}  -  Next:     -");
            }
        }
        Commands::Generate {
            count,
            max_cylinder,
            seed,
        } => {
            let generator = RequestGenerator::new(max_cylinder.unwrap_or(config.max_cylinder))
                .with_count(count.unwrap_or(config.request_count));
            let requests = draw(&generator, seed);
            let list: Vec<String> = requests.iter().map(|c| c.to_string()).collect();
            println!("{}", list.join(","));
        }
    }

    Ok(())
}

/// Assembles and validates the request set from flags and configuration.
fn build_request(input: &InputArgs, config: &SimulatorConfig) -> Result<SeekRequest> {
    let max_cylinder = input.max_cylinder.unwrap_or(config.max_cylinder);
    let head = input.head.unwrap_or(config.initial_head);

    let requests = match (&input.requests, input.random) {
        (Some(list), _) => parse_cylinders(list)?,
        (None, Some(count)) => {
            let generator = RequestGenerator::new(max_cylinder).with_count(count);
            draw(&generator, input.seed)
        }
        (None, None) => Vec::new(),
    };

    let request = SeekRequest::new(requests, head).with_max_cylinder(max_cylinder);
    validate_input(&request).map_err(Error::Validation)?;
    info!(
        requests = request.len(),
        head = request.head,
        max_cylinder = request.max_cylinder,
        "request set ready"
    );
    Ok(request)
}

fn draw(generator: &RequestGenerator, seed: Option<u64>) -> Vec<Cylinder> {
    match seed {
        Some(seed) => generator.generate(&mut SmallRng::seed_from_u64(seed)),
        None => generator.generate(&mut rand::rng()),
    }
}
