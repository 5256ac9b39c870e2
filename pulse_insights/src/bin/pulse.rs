use clap::{Parser, Subcommand, ValueEnum};
use pulse_insights::synthetic::demo_records;
use pulse_insights::{EngagementRecord, InsightConfig, InsightEngine, InsightError, RecordLoader, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use trend_math::{compute_trend, predict};

#[derive(Parser, Debug)]
#[command(name = "pulse")]
#[command(author, version, about = "Engagement trend analysis and insights", long_about = None)]
struct Args {
    #[arg(short, long, help = "Verbose logging")]
    verbose: bool,

    #[arg(short, long, help = "Path to a TOML config file")]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the normalized trend and prediction of a series
    Trend {
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,
    },
    /// Generate insights from a JSON or CSV record file
    Insights {
        #[arg(short, long, help = "Record file (.json or .csv)")]
        input: String,

        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Generate insights from a synthetic engagement series
    Demo {
        #[arg(short, long, default_value = "30")]
        points: usize,

        #[arg(short, long, default_value = "7")]
        seed: u64,

        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    log::debug!("Starting pulse v{}", pulse_insights::VERSION);

    let config = match &args.config {
        Some(path) => InsightConfig::load(path)?,
        None => InsightConfig::default(),
    };

    match args.command {
        Command::Trend { values } => {
            println!("Trend:      {}", compute_trend(&values));
            println!("Prediction: {}", predict(&values));
        }
        Command::Insights { input, format } => {
            let records = RecordLoader::from_path(&input)?;
            run_engine(config, &records, format)?;
        }
        Command::Demo { points, seed, format } => {
            let mut rng = StdRng::seed_from_u64(seed);
            let today = chrono::Utc::now().date_naive();
            let records = demo_records(points, today, &mut rng)?;
            run_engine(config, &records, format)?;
        }
    }

    Ok(())
}

fn run_engine(config: InsightConfig, records: &[EngagementRecord], format: OutputFormat) -> Result<()> {
    if records.is_empty() {
        return Err(InsightError::DataError("No records to analyze".to_string()));
    }

    let mut engine = InsightEngine::new(config);
    engine.generate_insights(records);

    match format {
        OutputFormat::Json => println!("{}", engine.export_json()?),
        OutputFormat::Text => {
            for insight in engine.insights() {
                println!("{}\n", insight);
            }
        }
    }

    Ok(())
}
