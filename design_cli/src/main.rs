//! # Gearwright CLI Application
//!
//! Terminal-based interface for machine element sizing.
//!
//! ## Status
//!
//! This is a simple interactive demo covering the spur gear path; the
//! other component families are reachable through the design_core API.

use std::io::{self, BufRead, Write};

use design_core::calculations::spur_gear::{calculate, SpurGearInput};
use design_core::calculations::FaceWidth;
use design_core::factors::ToothSystem;
use design_core::materials::{self, MaterialOverrides};
use design_core::report::ItemStatus;

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn main() {
    println!("Gearwright CLI - Machine Element Design Calculator");
    println!("==================================================");
    println!();
    println!("Running spur gear sizing demo...");
    println!();

    let power_kw = prompt_f64("Enter transmitted power (kW) [15.0]: ", 15.0);
    let speed_rpm = prompt_f64("Enter pinion speed (rpm) [1000.0]: ", 1000.0);
    let ratio = prompt_f64("Enter speed ratio [4.0]: ", 4.0);
    let teeth = prompt_f64("Enter pinion tooth count [20]: ", 20.0) as u32;

    println!();
    println!("Sizing 20° stub teeth, b = 10m, C30 HT pinion on CI35 gear...");
    println!();

    let input = SpurGearInput {
        label: "CLI-Demo".to_string(),
        power_kw,
        speed_pinion_rpm: speed_rpm,
        ratio,
        teeth_pinion: teeth,
        tooth_system: ToothSystem::Stub20,
        face_width: FaceWidth::Factor { k: 10.0 },
    };

    // Resolve catalog materials ahead of the calculation
    let no_overrides = MaterialOverrides::default();
    let pinion = match materials::resolve("c30_ht", &no_overrides) {
        Ok(props) => props,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };
    let gear = match materials::resolve("ci_35", &no_overrides) {
        Ok(props) => props,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };

    match calculate(&input, &pinion, &gear) {
        Ok(result) => {
            println!("═══════════════════════════════════════");
            println!("  SPUR GEAR SIZING RESULTS");
            println!("═══════════════════════════════════════");
            println!();
            println!("Input:");
            println!("  Power:    {:.1} kW", input.power_kw);
            println!("  Speed:    {:.0} rpm", input.speed_pinion_rpm);
            println!("  Ratio:    {:.2}", input.ratio);
            println!("  Pinion:   {} teeth, {}", input.teeth_pinion, input.tooth_system);
            println!();
            println!(
                "{}: {} {}",
                result.main_label, result.main_value, result.main_unit
            );
            println!("  {}", result.sub_text);
            println!();
            for item in &result.items {
                let unit = item.unit.as_deref().unwrap_or("");
                let status = match item.status {
                    Some(ItemStatus::Safe) => " [OK]",
                    Some(ItemStatus::Unsafe) => " [FAIL]",
                    _ => "",
                };
                println!("  {:<24} {} {}{}", item.label, item.value, unit, status);
            }
            for warning in &result.warnings {
                println!();
                println!("  Warning: {}", warning);
            }
            println!();
            println!("═══════════════════════════════════════");
            println!(
                "  RESULT: {}",
                if result.is_safe { "SAFE" } else { "NOT SAFE" }
            );
            println!("═══════════════════════════════════════");

            println!();
            println!("JSON Output (for LLM/API use):");
            if let Ok(json) = serde_json::to_string_pretty(&result) {
                println!("{}", json);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
        }
    }
}
