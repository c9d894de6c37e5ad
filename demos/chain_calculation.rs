//! Chain Calculation
//!
//! This demo drives the calculator through a short session the way a
//! keypad front end would, with logging turned on.
//!
//! Key concepts:
//! - One method call per button press
//! - Results chain into the next expression
//! - Failures leave the calculator untouched and post a notice
//!
//! Run with: RUST_LOG=debug cargo run --example chain_calculation

use chaincalc::{Calculator, CalculatorBuilder};
use tracing_subscriber::EnvFilter;

fn press(calc: &mut Calculator, key: char) {
    let outcome = match key {
        '=' => calc.evaluate().map(|_| ()),
        'C' => {
            calc.reset();
            Ok(())
        }
        d if d.is_ascii_digit() => calc.input_digit(d),
        op => calc.choose_operator_symbol(&op.to_string()),
    };

    let status = match calc.notice() {
        Some(notice) if key == '=' || outcome.is_err() => notice.to_string(),
        _ => String::new(),
    };
    println!("[{key}] display: {:>8}  {status}", calc.display());
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Chain Calculation Demo ===\n");

    let mut calc = CalculatorBuilder::new()
        .log_history(true)
        .build()
        .expect("default config is valid");

    for key in "7+2=*3=".chars() {
        press(&mut calc, key);
    }

    println!("\nHistory (newest first):");
    for record in calc.history().newest_first() {
        println!("  {record}");
    }

    println!("\nDividing by zero:");
    for key in "/0=".chars() {
        press(&mut calc, key);
    }
    println!("History still has {} records", calc.history().len());

    println!("\nClearing:");
    press(&mut calc, 'C');
    println!("History has {} records", calc.history().len());

    println!("\n=== Demo Complete ===");
}
