use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};
use pisim::config::{SimConfig, DEFAULT_EXPONENT};
use pisim::core::Simulation;

#[derive(Debug, clap::Parser)]
#[command(
    name = "pisim",
    version,
    about = "Count block collisions against a wall; mass ratio 100^n gives n+1 digits of pi"
)]
pub struct Cli {
    /// Mass-ratio exponent: object 2 weighs 100^n times object 1.
    #[arg(short = 'n', long = "exponent", conflicts_with = "config")]
    pub exponent: Option<u32>,

    /// YAML file with the run configuration; flags override it.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    #[arg(long = "v1", allow_hyphen_values = true)]
    pub v1: Option<f64>,
    #[arg(long = "x1", allow_hyphen_values = true)]
    pub x1: Option<f64>,
    #[arg(long = "m1")]
    pub m1: Option<f64>,

    #[arg(long = "v2", allow_hyphen_values = true)]
    pub v2: Option<f64>,
    #[arg(long = "x2", allow_hyphen_values = true)]
    pub x2: Option<f64>,
    #[arg(long = "m2")]
    pub m2: Option<f64>,

    /// Event budget before giving up.
    #[arg(long = "max-events")]
    pub max_events: Option<u64>,

    /// Print every event once the run is over.
    #[arg(long = "history")]
    pub history: bool,
}

impl Cli {
    fn to_config(&self) -> pisim::Result<SimConfig> {
        let mut cfg = match &self.config {
            Some(path) => SimConfig::from_yaml_file(path)?,
            None => SimConfig::from_exponent(self.exponent.unwrap_or(DEFAULT_EXPONENT))?,
        };
        let overrides = [
            (self.v1, &mut cfg.object1.velocity),
            (self.x1, &mut cfg.object1.position),
            (self.m1, &mut cfg.object1.mass),
        ];
        for (flag, slot) in overrides {
            if let Some(value) = flag {
                *slot = value;
            }
        }
        let overrides = [
            (self.v2, &mut cfg.object2.velocity),
            (self.x2, &mut cfg.object2.position),
            (self.m2, &mut cfg.object2.mass),
        ];
        for (flag, slot) in overrides {
            if let Some(value) = flag {
                *slot = value;
            }
        }
        if let Some(max_events) = self.max_events {
            cfg.max_events = max_events;
        }
        Ok(cfg)
    }
}

fn run(cli: &Cli) -> pisim::Result<()> {
    let cfg = cli.to_config()?;
    info!("Config: {:?}", cfg);

    let mut sim = Simulation::new(&cfg)?;
    if cli.history {
        sim = sim.record_history();
    }
    let report = sim.run()?;

    let mut t = 0.0;
    for (i, event) in sim.history().iter().enumerate() {
        t += event.dt_f64();
        println!("{:>8} {:<9} t={}", i + 1, event.kind, t);
    }
    println!("{report}");
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
