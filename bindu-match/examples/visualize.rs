//! Point Matching Visualizer
//!
//! Runs a match scenario and writes the figure as SVG.
//!
//! Scenarios define:
//! - Reference set A and pattern set B as `[x, y]` rows
//! - Matcher settings (eps, search strategy)
//!
//! Without a scenario file, the built-in demo sets are matched both exactly
//! and with a tolerance.
//!
//! Usage:
//!   cargo run --example visualize
//!   cargo run --example visualize -- --scenario scenarios/fuzzy_square.yaml
//!   cargo run --example visualize -- -s scenarios/exact_line.yaml -o ./my_output

use clap::Parser;
use std::path::Path;

use bindu_match::render::SvgCanvas;
use bindu_match::{BinduConfig, MatchScenario, MatcherConfig, PointMatcher};

/// Point set matching visualizer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Scenario YAML file (built-in demo if omitted)
    #[arg(short = 's', long)]
    scenario: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "configs/bindu.yaml")]
    config: String,

    /// Output directory for SVG files
    #[arg(short, long, default_value = "./output")]
    output: String,

    /// Skip drawing connections
    #[arg(long)]
    no_connections: bool,
}

/// Demo sets: B sits on A exactly, then drifts off by a few hundredths.
fn demo_scenarios(matcher: &MatcherConfig) -> Vec<MatchScenario> {
    let points_a: Vec<Vec<f64>> = [
        (0.0, 0.0),
        (1.0, 0.5),
        (2.0, 1.5),
        (3.0, 1.0),
        (4.0, 2.5),
        (5.0, 2.0),
        (2.5, 4.0),
        (0.5, 3.0),
    ]
    .iter()
    .map(|&(x, y)| vec![x, y])
    .collect();

    let exact_b = vec![vec![1.0, 0.5], vec![2.0, 1.5], vec![3.0, 1.0]];
    let fuzzy_b = vec![
        vec![1.03, 0.48],
        vec![2.05, 1.52],
        vec![2.96, 1.04],
        vec![4.5, 3.5],
    ];

    let fuzzy_eps = if matcher.eps > 0.0 { matcher.eps } else { 0.1 };

    vec![
        MatchScenario {
            name: "demo_exact".into(),
            points_a: points_a.clone(),
            points_b: exact_b,
            matcher: MatcherConfig {
                eps: 0.0,
                ..matcher.clone()
            },
        },
        MatchScenario {
            name: "demo_fuzzy".into(),
            points_a,
            points_b: fuzzy_b,
            matcher: MatcherConfig {
                eps: fuzzy_eps,
                ..matcher.clone()
            },
        },
    ]
}

fn file_stem(name: &str) -> String {
    let stem: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    if stem.is_empty() {
        "scenario".to_string()
    } else {
        stem
    }
}

fn run(scenario: MatchScenario, config: &BinduConfig, output_dir: &Path, connections: bool) {
    let name = file_stem(&scenario.name);
    let matcher = match scenario.into_matcher() {
        Ok(m) => m,
        Err(e) => {
            log::error!("Scenario {} rejected: {}", name, e);
            return;
        }
    };

    report(&name, &matcher);

    let mut canvas = SvgCanvas::new(config.render.clone());
    matcher.plot(&mut canvas, connections);

    let path = output_dir.join(format!("{}.svg", name));
    match canvas.save(&path) {
        Ok(()) => log::info!("Figure written to {}", path.display()),
        Err(e) => log::error!("Failed to write {}: {}", path.display(), e),
    }
}

fn report(name: &str, matcher: &PointMatcher) {
    log::info!(
        "{}: |A|={} |B|={} eps={:?} search={:?}",
        name,
        matcher.reference().len(),
        matcher.pattern().len(),
        matcher.eps(),
        matcher.search()
    );
    log::info!("  exact match: {}", matcher.exact_match());
    log::info!("  fuzzy match: {}", matcher.fuzzy_match());

    let pairs = matcher.matched_pairs();
    log::info!(
        "  matched {}/{} pattern points",
        pairs.len(),
        matcher.pattern().len()
    );
    for pair in &pairs {
        log::debug!(
            "  B[{}] -> A[{}] distance {:.4}",
            pair.pattern_index,
            pair.reference_index,
            pair.distance
        );
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    // Load configuration
    let config_path = Path::new(&args.config);
    let config = if config_path.exists() {
        BinduConfig::load(config_path).unwrap_or_else(|e| {
            log::warn!("Failed to load config: {}, using defaults", e);
            BinduConfig::default()
        })
    } else {
        log::info!(
            "Config not found at {}, using defaults",
            config_path.display()
        );
        BinduConfig::default()
    };

    let scenarios = match args.scenario {
        Some(ref file) => {
            let scenario_file = Path::new(file);
            if !scenario_file.exists() {
                log::error!("Scenario file not found: {}", scenario_file.display());
                std::process::exit(1);
            }
            log::info!("Loading scenario: {}", scenario_file.display());
            let mut scenario = MatchScenario::load(scenario_file).unwrap_or_else(|e| {
                log::error!("Failed to load scenario: {}", e);
                std::process::exit(1);
            });
            if scenario.name.is_empty() {
                scenario.name = scenario_file
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_default();
            }
            vec![scenario]
        }
        None => demo_scenarios(&config.matcher),
    };

    let output_dir = Path::new(&args.output);
    for scenario in scenarios {
        run(scenario, &config, output_dir, !args.no_connections);
    }
}
