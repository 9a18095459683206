// ABOUTME: Serde helpers that keep numeric fields in the historical JSON format
// ABOUTME: Whole-valued floats are written as JSON integers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serializer;

/// Largest magnitude at which every integer is exactly representable in an `f64`
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Serialize `180.0` as `180` and `72.5` as `72.5`
pub fn serialize_number<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.is_finite() && value.fract() == 0.0 && value.abs() < MAX_EXACT_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}
