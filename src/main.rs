//! Life CLI - Run automata and soup surveys from JSON configuration.

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use std::path::{Path, PathBuf};
use std::time::Instant;

use life_ca::{
    compute::{CycleDetector, SurveySummary, TerrainStats, run_survey},
    schema::{SimulationConfig, SurveyConfig},
};

/// Grids at most this wide print their final frame.
const MAX_FRAME_WIDTH: usize = 80;

/// What the command line asks for.
#[derive(Debug, PartialEq)]
enum Command {
    Example,
    Survey(PathBuf),
    Run { config: PathBuf, steps: u64 },
}

/// Interpret `args` (program name first). `None` means print usage.
fn parse_args(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str)? {
        "--example" => Some(Command::Example),
        "--survey" => args.get(2).map(|path| Command::Survey(PathBuf::from(path))),
        config => Some(Command::Run {
            config: PathBuf::from(config),
            steps: args.get(2).and_then(|s| s.parse().ok()).unwrap_or(100),
        }),
    }
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} <config.json> [steps]", program);
    eprintln!("       {} --survey <survey.json>", program);
    eprintln!("       {} --example", program);
    eprintln!();
    eprintln!("Run a toroidal cellular automaton from JSON configuration.");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  config.json  Path to simulation configuration file");
    eprintln!("  steps        Number of generations (default: 100)");
    eprintln!("  --survey     Run many random soups until each one cycles");
    eprintln!("  --example    Print an example configuration");
}

fn main() {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    let (config_path, steps) = match parse_args(&args) {
        Some(Command::Example) => {
            print_example_config();
            return;
        }
        Some(Command::Survey(path)) => {
            survey(&path);
            return;
        }
        Some(Command::Run { config, steps }) => (config, steps),
        None => {
            let program = args.first().map(String::as_str).unwrap_or("life-ca");
            print_usage(program);
            std::process::exit(1);
        }
    };

    let config = SimulationConfig::from_json_file(&config_path).unwrap_or_else(|e| {
        eprintln!("Error loading config: {}", e);
        std::process::exit(1);
    });

    let mut model = config.build().unwrap_or_else(|e| {
        eprintln!("Invalid config: {}", e);
        std::process::exit(1);
    });
    let mut detector = CycleDetector::new(config.cycle_history).unwrap_or_else(|e| {
        eprintln!("Invalid config: {}", e);
        std::process::exit(1);
    });

    println!("Life Simulation");
    println!("===============");
    println!("Grid: {}x{}", config.width, config.height);
    println!("Rule: {:?}", config.rule);
    println!("Density: {}", config.density);
    println!("Steps: {}", steps);
    println!();

    let initial_stats = TerrainStats::from_terrain(&model.terrain());
    println!("Initial state:");
    println!("  Population: {}", initial_stats.population);
    println!("  Checksum: {:08x}", model.checksum());
    println!();

    println!("Running simulation...");
    let start = Instant::now();
    detector.observe(model.generation(), model.checksum());

    for i in 0..steps {
        model.advance();

        if let Some(cycle) = detector.observe(model.generation(), model.checksum()) {
            println!(
                "  Cycle detected at generation {}: period {} (first seen at {})",
                model.generation(),
                cycle.period,
                cycle.first_seen
            );
            break;
        }

        // Print progress every 10%
        if (i + 1) % (steps / 10).max(1) == 0 {
            let stats = TerrainStats::from_terrain(&model.terrain());
            let elapsed = start.elapsed().as_secs_f32();
            println!(
                "  Generation {}/{}: population={}, max_age={}, checksum={:08x}, {:.1} gen/s",
                i + 1,
                steps,
                stats.population,
                stats.max_age,
                model.checksum(),
                (i + 1) as f32 / elapsed
            );
        }
    }

    let elapsed = start.elapsed();
    let terrain = model.terrain();
    let final_stats = TerrainStats::from_terrain(&terrain);

    println!();
    println!("Final state (generation {}):", model.generation());
    println!("  Population: {}", final_stats.population);
    println!("  Density: {:.4}", final_stats.density);
    println!(
        "  Age: max {}, mean {:.2}",
        final_stats.max_age, final_stats.mean_age
    );
    println!("  Checksum: {:08x}", model.checksum());
    if terrain.width() <= MAX_FRAME_WIDTH {
        println!();
        print!("{}", terrain);
    }
    println!();
    println!(
        "Time: {:.2}s ({:.1} gen/s)",
        elapsed.as_secs_f32(),
        model.generation() as f32 / elapsed.as_secs_f32()
    );
}

fn survey(path: &Path) {
    let text = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading survey file: {}", e);
        std::process::exit(1);
    });
    let config: SurveyConfig = serde_json::from_str(&text).unwrap_or_else(|e| {
        eprintln!("Error parsing survey: {}", e);
        std::process::exit(1);
    });

    let start = Instant::now();
    let outcomes = run_survey(&config).unwrap_or_else(|e| {
        eprintln!("Invalid survey: {}", e);
        std::process::exit(1);
    });

    for outcome in &outcomes {
        match outcome.period {
            Some(period) => println!(
                "  seed {}: period {} at generation {}, population {}",
                outcome.seed, period, outcome.generation, outcome.population
            ),
            None => println!(
                "  seed {}: no cycle within {} generations, population {}",
                outcome.seed, outcome.generation, outcome.population
            ),
        }
    }

    let summary = SurveySummary::from_outcomes(&outcomes);
    println!();
    println!(
        "Settled: {}/{} (mean generation {:.1})",
        summary.settled, summary.soups, summary.mean_settle_generation
    );
    for (period, count) in &summary.periods {
        println!("  period {}: {}", period, count);
    }
    println!("Time: {:.2}s", start.elapsed().as_secs_f32());
}

fn print_example_config() {
    let config = SimulationConfig {
        width: 64,
        height: 48,
        density: 0.3,
        ..Default::default()
    };
    let survey = SurveyConfig::default();

    println!("Example configuration (config.json):");
    println!("{}", serde_json::to_string_pretty(&config).unwrap());
    println!();
    println!("Example survey (survey.json):");
    println!("{}", serde_json::to_string_pretty(&survey).unwrap());
}
