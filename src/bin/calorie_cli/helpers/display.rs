// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for calorie-cli
// ABOUTME: Provides consistent display functions for calculations and JSON output

use calorie_tracker::{
    errors::AppResult, intelligence::MacroPercentages, models::StoredCalculation,
};
use serde::Serialize;

/// Display a calculation as a human-readable report
pub fn display_calculation(record: &StoredCalculation) {
    let data = &record.data;
    let results = &record.results;
    let macros = &results.macros;
    let percentages = MacroPercentages::from_macros(macros);

    println!("\nDaily Calorie Targets");
    println!("{}", "=".repeat(50));
    println!("PROFILE:");
    println!("   Gender: {}", data.gender());
    println!("   Age: {}", data.age());
    println!("   Height: {} cm", data.height_cm());
    println!("   Weight: {} kg", data.weight_kg());
    println!("   Activity: {}", data.activity_level());
    println!("   Goal: {}", data.goal());

    println!("\nENERGY:");
    println!("   BMR ({}): {} kcal", results.formula, results.bmr);
    println!("   TDEE: {} kcal", results.tdee);
    println!("   Target: {} kcal", results.target_calories);

    println!("\nMACRONUTRIENTS:");
    println!(
        "   Protein: {} g ({:.0}%)",
        macros.protein_grams, percentages.protein_percent
    );
    println!(
        "   Fat: {} g ({:.0}%)",
        macros.fat_grams, percentages.fat_percent
    );
    println!(
        "   Carbs: {} g ({:.0}%)",
        macros.carbs_grams, percentages.carbs_percent
    );
    println!("   Total: {:.0} kcal", macros.total_calories());
    println!("{}", "=".repeat(50));
}

/// Print `value` as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
