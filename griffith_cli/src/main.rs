//! # Griffith CLI Application
//!
//! Terminal front end for fatigue crack growth. Prompts for Paris-law inputs
//! (Enter keeps the default shown in brackets), prints the growth table and
//! the JSON result, and can append the run to a `.grf` project file.
//!
//! Set `RUST_LOG=debug` to see engine logging.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::str::FromStr;

use griffith_core::calculations::fatigue::{
    calculate, CrackLengthBounds, FatigueInput, FatigueResult, IntegrationConfig, LoadingCondition,
    MaterialLawParameters, DEFAULT_STEP_COUNT,
};
use griffith_core::calculations::CalculationItem;
use griffith_core::file_io::{load_project, save_project, ProjectLock};
use griffith_core::project::Project;
use griffith_core::units::{LengthUnit, Meters, Millimeters, StressUnit};
use griffith_core::GriffithResult;

/// Rows printed between the first and last sample
const TABLE_ROWS: usize = 10;

fn read_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input).ok()?;
    Some(input.trim().to_string())
}

/// Blank keeps the default; anything else must parse.
fn parse_answer<T: FromStr>(answer: &str, default: T) -> Result<T, String> {
    if answer.is_empty() {
        return Ok(default);
    }
    answer
        .parse()
        .map_err(|_| format!("'{}' is not a valid value", answer))
}

/// Ask until the answer parses. End of input keeps the default.
fn prompt<T: FromStr + Copy>(question: &str, default: T) -> T {
    loop {
        let Some(answer) = read_line(question) else {
            return default;
        };
        match parse_answer(&answer, default) {
            Ok(value) => return value,
            Err(notice) => eprintln!("  {}, try again (blank keeps the default)", notice),
        }
    }
}

fn main() {
    env_logger::init();

    println!("Griffith CLI - Fatigue Crack Growth (Paris' Law)");
    println!("================================================");
    println!();

    let c = prompt("Paris coefficient C [1e-12]: ", 1e-12);
    let m = prompt("Paris exponent m [3.0]: ", 3.0);
    let stress_range = prompt("Stress range Δσ (MPa) [100.0]: ", 100.0);
    let geometry_factor = prompt("Geometry factor Y [1.0]: ", 1.0);
    let a_initial = Meters::from(Millimeters(prompt("Initial crack length a0 (mm) [5.0]: ", 5.0)));
    let a_final = Meters::from(Millimeters(prompt("Final crack length af (mm) [20.0]: ", 20.0)));
    let steps = prompt(
        &format!("Integration steps [{}]: ", DEFAULT_STEP_COUNT),
        DEFAULT_STEP_COUNT,
    );

    let input = FatigueInput {
        label: "CLI run".to_string(),
        law: MaterialLawParameters::new(c, m),
        loading: LoadingCondition::new(stress_range, geometry_factor),
        bounds: CrackLengthBounds::new(a_initial.0, a_final.0),
        config: IntegrationConfig::new(steps),
        stress_unit: StressUnit::MPa,
        law_stress_unit: StressUnit::MPa,
    };

    println!();
    match calculate(&input) {
        Ok(result) => {
            print_result(&input, &result);
            offer_save(input);
        }
        Err(e) => {
            eprintln!("Error [{}]: {}", e.error_code(), e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
        }
    }
}

fn print_result(input: &FatigueInput, result: &FatigueResult) {
    println!("═══════════════════════════════════════");
    println!("  FATIGUE CRACK GROWTH RESULTS");
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  C = {:e}, m = {}", input.law.c, input.law.m);
    println!(
        "  Δσ = {} {}, Y = {}",
        input.loading.stress_range, input.stress_unit, input.loading.geometry_factor
    );
    println!(
        "  a: {:.3} → {:.3} mm in {} steps",
        input.bounds.initial_length * 1000.0,
        input.bounds.final_length * 1000.0,
        input.config.step_count
    );
    println!();

    let curve = result.curve(LengthUnit::Millimeters);
    let stride = (curve.len() / TABLE_ROWS).max(1);
    println!("  {:>16}  {:>12}", "Cycles N", "a (mm)");
    for (i, point) in curve.iter().enumerate() {
        if i % stride == 0 || i + 1 == curve.len() {
            println!("  {:>16.0}  {:>12.4}", point.cycles, point.crack_length);
        }
    }

    println!();
    println!("  N (stepped)     = {:.0} cycles", result.total_cycles);
    match (result.closed_form_cycles, result.discretization_error) {
        (Some(exact), Some(error)) => {
            println!("  N (closed form) = {:.0} cycles", exact);
            println!("  Step error      = {:+.2}%", error * 100.0);
        }
        _ => println!("  N (closed form) = not representable for these inputs"),
    }
    println!("═══════════════════════════════════════");

    println!();
    println!("JSON Output:");
    if let Ok(json) = serde_json::to_string_pretty(result) {
        println!("{}", json);
    }
}

fn offer_save(input: FatigueInput) {
    let Some(path) = read_line("\nSave to project file (.grf, blank to skip): ").filter(|p| !p.is_empty()) else {
        return;
    };

    match append_to_project(Path::new(&path), input) {
        Ok(count) => println!("Saved to {} ({} calculations)", path, count),
        Err(e) => eprintln!("Save failed [{}]: {}", e.error_code(), e),
    }
}

fn append_to_project(path: &Path, input: FatigueInput) -> GriffithResult<usize> {
    let user = std::env::var("USER").unwrap_or_else(|_| "griffith-cli".to_string());
    let _lock = ProjectLock::acquire(path, user)?;

    let mut project = if path.exists() {
        load_project(path)?
    } else {
        Project::default()
    };
    project.add_item(CalculationItem::FatigueGrowth(input));
    save_project(&project, path)?;
    Ok(project.item_count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_answer_keeps_default() {
        assert_eq!(parse_answer("", 3.0), Ok(3.0));
        assert_eq!(parse_answer("", 50usize), Ok(50));
    }

    #[test]
    fn test_valid_answers_parse() {
        assert_eq!(parse_answer("1e-11", 1e-12), Ok(1e-11));
        assert_eq!(parse_answer("200", 50usize), Ok(200));
    }

    #[test]
    fn test_typo_is_rejected_not_defaulted() {
        let err = parse_answer("1e-1x", 1e-12).unwrap_err();
        assert!(err.contains("1e-1x"));
        assert!(parse_answer("-3", 50usize).is_err());
    }
}
