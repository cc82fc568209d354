//! Manual power calculator
//!
//! Computes the what-if power number from two typed-in values, the same
//! way the codex's manual fields do. Non-numeric input counts as 0.
//!
//! Usage: `cargo run --example power_calc -- <INT_STRENGTH> <POWER_RATING> [FORMULA_JSON]`

use codex_stats::power::parse_manual_input;
use codex_stats::*;

fn main() -> Result<(), StatError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let int_strength = parse_manual_input(args.first().map(String::as_str).unwrap_or(""));
    let power_rating = parse_manual_input(args.get(1).map(String::as_str).unwrap_or(""));

    let formula = match args.get(2) {
        Some(path) => {
            let content = std::fs::read_to_string(path).map_err(|source| StatError::Io {
                path: path.into(),
                source,
            })?;
            PowerFormula::from_json_str(&content)?
        }
        None => PowerFormula::default(),
    };
    let estimator = PowerEstimator::new(formula);

    println!("Int/Strength: {}", int_strength);
    println!("Power Rating: {}", power_rating);
    println!(
        "Formula: ({} * {} + {}) / {}",
        int_strength, formula.strength_weight, power_rating, formula.divisor
    );
    println!(
        "Power: {}",
        estimator.manual_estimate(int_strength, power_rating)
    );

    Ok(())
}
