//! iris-lab CLI
//!
//! Usage:
//!     iris-lab demo
//!     iris-lab classify 5.1,3.5,1.4,0.2 --method knn --k 5
//!     iris-lab distance 5.1,3.5,1.4,0.2 6.4,3.2,4.5,1.5 --metric minkowski --p 3
//!     iris-lab fleet

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use iris_lab::classify::{Classifier, NearestNeighborClassifier, PetalLengthClassifier};
use iris_lab::core::{average, scale, FlowerRecord};
use iris_lab::datasets::load_iris_records;
use iris_lab::fleet::{Car, Motorcycle, Truck, Vehicle, VehicleSpec};
use iris_lab::io::{read_records_csv, save_records_json, write_records_csv};
use iris_lab::metrics::{DistanceMetric, DEFAULT_MINKOWSKI_P};

/// Flower measurements, distances and species classification
#[derive(Parser)]
#[command(name = "iris-lab")]
#[command(version)]
#[command(about = "Iris flower records: distances, averages and classification", long_about = None)]
struct Cli {
    /// Log at debug level (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the reference flower walkthrough
    Demo {
        /// Minkowski exponent
        #[arg(long, default_value_t = DEFAULT_MINKOWSKI_P)]
        minkowski_p: f64,

        /// Factor applied to the first flower at the end
        #[arg(long, default_value_t = 1.2)]
        scale_factor: f64,
    },

    /// Classify a flower given as SL,SW,PL,PW
    Classify {
        #[arg(allow_hyphen_values = true)]
        measurements: String,

        #[arg(long, value_enum, default_value_t = Method::Threshold)]
        method: Method,

        /// Neighbours for the knn method
        #[arg(short, long, default_value_t = iris_lab::classify::DEFAULT_K)]
        k: usize,

        /// Metric for the knn method
        #[arg(long, value_enum, default_value_t = MetricArg::Euclidean)]
        metric: MetricArg,

        /// Minkowski exponent
        #[arg(long, default_value_t = DEFAULT_MINKOWSKI_P)]
        p: f64,

        /// Reference records (CSV) for the knn method; defaults to the built-in sample
        #[arg(long)]
        data: Option<PathBuf>,
    },

    /// Distance between two flowers given as SL,SW,PL,PW
    Distance {
        #[arg(allow_hyphen_values = true)]
        a: String,

        #[arg(allow_hyphen_values = true)]
        b: String,

        #[arg(long, value_enum, default_value_t = MetricArg::Euclidean)]
        metric: MetricArg,

        /// Minkowski exponent
        #[arg(long, default_value_t = DEFAULT_MINKOWSKI_P)]
        p: f64,
    },

    /// Field-wise average of two flowers
    Average {
        #[arg(allow_hyphen_values = true)]
        a: String,

        #[arg(allow_hyphen_values = true)]
        b: String,
    },

    /// Scale a flower's measurements
    Scale {
        #[arg(allow_hyphen_values = true)]
        a: String,

        #[arg(long, allow_hyphen_values = true)]
        factor: f64,

        #[arg(long, default_value = "flower")]
        label: String,
    },

    /// Run the vehicle walkthrough
    Fleet,

    /// Write the built-in iris sample to disk
    Export {
        #[arg(long)]
        csv: Option<PathBuf>,

        #[arg(long)]
        json: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Method {
    Threshold,
    Knn,
}

#[derive(Clone, Copy, ValueEnum)]
enum MetricArg {
    Euclidean,
    Manhattan,
    Minkowski,
}

impl MetricArg {
    fn with_p(self, p: f64) -> DistanceMetric<f64> {
        match self {
            MetricArg::Euclidean => DistanceMetric::Euclidean,
            MetricArg::Manhattan => DistanceMetric::Manhattan,
            MetricArg::Minkowski => DistanceMetric::Minkowski(p),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Demo { minkowski_p, scale_factor } => run_demo(minkowski_p, scale_factor)?,
        Commands::Classify { measurements, method, k, metric, p, data } => {
            let flower = parse_flower(&measurements, "query")?;
            let species = match method {
                Method::Threshold => PetalLengthClassifier.classify(&flower)?,
                Method::Knn => {
                    let reference = match data {
                        Some(path) => read_records_csv(&path).with_context(|| {
                            format!("reading reference records from {}", path.display())
                        })?,
                        None => load_iris_records(),
                    };
                    let mut knn = NearestNeighborClassifier::new(k, metric.with_p(p));
                    knn.fit(&reference)?;
                    knn.classify(&flower)?
                }
            };
            println!("{species}");
        }
        Commands::Distance { a, b, metric, p } => {
            let (a, b) = (parse_flower(&a, "a")?, parse_flower(&b, "b")?);
            let d = metric.with_p(p).distance(&a, &b)?;
            println!("{d:.2}");
        }
        Commands::Average { a, b } => {
            let (a, b) = (parse_flower(&a, "a")?, parse_flower(&b, "b")?);
            println!("{}", average(&a, &b));
        }
        Commands::Scale { a, factor, label } => {
            println!("{}", scale(&parse_flower(&a, label)?, factor));
        }
        Commands::Fleet => run_fleet(),
        Commands::Export { csv, json } => export_records(csv.as_deref(), json.as_deref())?,
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn parse_flower(input: &str, label: impl Into<String>) -> Result<FlowerRecord<f64>> {
    let values = input
        .split(',')
        .map(|v| v.trim().parse::<f64>().with_context(|| format!("invalid measurement {v:?}")))
        .collect::<Result<Vec<_>>>()?;
    let Ok(values) = <[f64; 4]>::try_from(values.as_slice()) else {
        bail!("expected 4 measurements (SL,SW,PL,PW), got {}", values.len());
    };
    let flower = FlowerRecord::from_measurements(values, label);
    flower.validate()?;
    debug!(%flower, "parsed flower");
    Ok(flower)
}

/// Write the built-in iris sample to the requested files.
fn export_records(csv: Option<&Path>, json: Option<&Path>) -> Result<()> {
    if csv.is_none() && json.is_none() {
        bail!("nothing to export: pass --csv and/or --json");
    }
    let records = load_iris_records();
    if let Some(path) = csv {
        write_records_csv(path, &records).with_context(|| format!("writing {}", path.display()))?;
    }
    if let Some(path) = json {
        save_records_json(path, &records).with_context(|| format!("writing {}", path.display()))?;
    }
    Ok(())
}

fn run_demo(minkowski_p: f64, scale_factor: f64) -> Result<()> {
    let mut f1 = FlowerRecord::new(5.1, 3.5, 1.4, 0.2, "setosa");
    let f2 = FlowerRecord::new(6.4, 3.2, 4.5, 1.5, "versicolor");
    let f3 = FlowerRecord::new(7.1, 3.0, 6.1, 2.3, "virginica");

    println!("Flowers:");
    println!("{f1}");
    println!("{f2}");
    println!("{f3}");

    f1.set_sepal_width(3.9);
    println!("\nAfter changing the sepal width of f1:");
    println!("{f1}");

    let species = PetalLengthClassifier.classify(&f3)?;
    println!("\nClassification of f3: {species}");

    println!("\nDistances between f1 and f2:");
    println!("Euclidean: {:.2}", DistanceMetric::Euclidean.distance(&f1, &f2)?);
    println!("Manhattan: {:.2}", DistanceMetric::Manhattan.distance(&f1, &f2)?);
    println!(
        "Minkowski (p={minkowski_p}): {:.2}",
        DistanceMetric::Minkowski(minkowski_p).distance(&f1, &f2)?
    );

    println!("\nCombined flower (average of f1 and f2):");
    println!("{}", average(&f1, &f2));

    println!("\nf1 scaled by {scale_factor}:");
    println!("{}", scale(&f1, scale_factor));

    info!("demo finished");
    Ok(())
}

fn run_fleet() {
    let car = Car::new(VehicleSpec::new("A001", "Toyota Corolla", 180, 500));
    let mut truck = Truck::new(VehicleSpec::new("C001", "Volvo FH", 120, 10000));
    let moto = Motorcycle::new(VehicleSpec::new("M001", "Yamaha R3", 200, 150));

    for vehicle in [&car as &dyn Vehicle, &truck, &moto] {
        println!("{}", vehicle.status_report());
        println!("{}", vehicle.accelerate());
        println!("{}", vehicle.brake());
        println!();
    }
    println!("{}", truck.hitch_trailer());
    println!("{}", moto.evasive_maneuver());
}
