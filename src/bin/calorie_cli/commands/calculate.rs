// ABOUTME: Calculate command for calorie-cli
// ABOUTME: Validates the biometric input, runs the service, and prints the results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use calorie_tracker::{
    errors::AppResult,
    intelligence::validate_calculation_input,
    logging::CalculationLogger,
    models::{CalorieCalculationData, StoredCalculation},
    services::CalorieService,
    storage::factory::Storage,
};

use crate::helpers::display::{display_calculation, print_json};

/// Calculate targets for `data`, save them, and print them
pub async fn run(
    service: &CalorieService<Storage>,
    data: CalorieCalculationData,
    json: bool,
) -> AppResult<()> {
    validate_calculation_input(&data)?;

    let results = service.calculate_calories(&data).await;
    CalculationLogger::log_calculation(results.target_calories, results.tdee);

    let record = StoredCalculation { data, results };
    if json {
        print_json(&record)
    } else {
        display_calculation(&record);
        Ok(())
    }
}
