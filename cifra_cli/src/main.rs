//! # Cifra CLI Application
//!
//! Terminal front end for the formula engine. Plays the role the page
//! shells play on the web: collect raw strings, do boundary validation
//! (block anything non-finite before touching a formula), call one pure
//! calculation, and render the result or the error inline.

use std::io::{self, BufRead, Write};

use cifra_core::calculations::electricity::{self, ElectricityInput};
use cifra_core::calculations::password::{self, PasswordInput};
use cifra_core::calculations::percentage::{self, PercentageInput};
use cifra_core::errors::CalcError;

/// Prompt for a number. Boundary rule: anything unparseable or
/// non-finite is reported as a validation message and re-asked; the
/// formulas only ever see finite numbers.
fn prompt_f64(prompt: &str, default: f64) -> f64 {
    loop {
        print!("{}", prompt);
        if io::stdout().flush().is_err() {
            return default;
        }

        let mut input = String::new();
        if io::stdin().lock().read_line(&mut input).is_err() {
            return default;
        }
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return default;
        }
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => return value,
            _ => println!("  Please enter a valid number."),
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{}", prompt);
    let _ = io::stdout().flush();
    let mut input = String::new();
    let _ = io::stdin().lock().read_line(&mut input);
    input.trim().to_string()
}

fn render_error(error: &CalcError) {
    println!();
    println!("  ✗ [{}] {}", error.error_code(), error);
}

fn run_percentage() {
    let value = prompt_f64("Value [25.0]: ", 25.0);
    let total = prompt_f64("Total [200.0]: ", 200.0);

    match percentage::calculate(&PercentageInput::PercentageOf { value, total }) {
        Ok(result) => {
            println!();
            println!("═══════════════════════════════════════");
            println!("  PERCENTAGE RESULT");
            println!("═══════════════════════════════════════");
            println!();
            println!("  {} is {}% of {}", value, result.value, total);
            println!();
            println!("  Steps:");
            for step in &result.steps {
                println!("    {}", step);
            }
        }
        Err(error) => render_error(&error),
    }
}

fn run_electricity() {
    let input = ElectricityInput {
        power_watts: prompt_f64("Appliance power (W) [1000.0]: ", 1000.0),
        hours_per_day: prompt_f64("Hours per day [2.0]: ", 2.0),
        days_per_month: prompt_f64("Days per month [30.0]: ", 30.0),
        cost_per_kwh: prompt_f64("Tariff per kWh [0.15]: ", 0.15),
    };

    match electricity::calculate(&input) {
        Ok(result) => {
            println!();
            println!("═══════════════════════════════════════");
            println!("  ELECTRICITY CONSUMPTION");
            println!("═══════════════════════════════════════");
            println!();
            println!("  Per day:   {:.2} kWh  ({:.2})", result.kwh_per_day, result.daily_cost);
            println!(
                "  Per month: {:.2} kWh  ({:.2})",
                result.kwh_per_month, result.monthly_cost
            );
        }
        Err(error) => render_error(&error),
    }
}

fn run_password() {
    let password = prompt_line("Password to analyze: ");

    match password::analyze(&PasswordInput { password }) {
        Ok(result) => {
            println!();
            println!("═══════════════════════════════════════");
            println!("  PASSWORD ENTROPY (educational estimate)");
            println!("═══════════════════════════════════════");
            println!();
            println!("  Length:       {}", result.length);
            println!("  Charset size: {}", result.charset_size);
            println!("  Entropy:      {:.1} bits", result.entropy_bits);
            println!("  Strength:     {}", result.strength.display_name());
            println!("  Crack time:   {} (at 10^10 guesses/s)", result.crack_time_display);
            if !result.suggestions.is_empty() {
                println!();
                println!("  Suggestions:");
                for suggestion in &result.suggestions {
                    println!("    - {}", suggestion);
                }
            }
        }
        Err(error) => render_error(&error),
    }
}

fn main() {
    println!("Cifra CLI - Educational Calculators");
    println!("===================================");
    println!();
    println!("  1) Percentage (what % is a of b)");
    println!("  2) Electricity consumption");
    println!("  3) Password entropy");
    println!();

    match prompt_line("Choose a calculator [1]: ").as_str() {
        "2" => run_electricity(),
        "3" => run_password(),
        _ => run_percentage(),
    }

    println!();
}
