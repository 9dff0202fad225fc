//! Axis tick calculation and label formatting
//!
//! Ticks land on "nice" values (1, 2 or 5 × 10^k). Labels carry just
//! enough decimals to tell neighbouring ticks apart.

use serde::{Deserialize, Serialize};

/// Which axis a tick or gridline belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    /// Horizontal axis, ticks vary in x
    Horizontal,
    /// Vertical axis, ticks vary in y
    Vertical,
}

/// A tick mark on an axis
#[derive(Clone, Debug, PartialEq)]
pub struct TickMark {
    /// Position in data coordinates
    pub value: f64,

    /// Label text
    pub label: String,
}

/// Calculate tick marks covering `[min, max]`, aiming for about `target` ticks
pub fn calculate_ticks(min: f64, max: f64, target: usize) -> Vec<TickMark> {
    let range = max - min;
    if !range.is_finite() || range <= 0.0 || target == 0 {
        return vec![];
    }

    let step = nice_step(range / target as f64);
    let decimals = decimals_for(step);

    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;

    (first..=last)
        .map(|i| {
            // Multiply rather than accumulate to avoid drift
            let value = i as f64 * step;
            TickMark {
                value,
                label: format_number(value, decimals),
            }
        })
        .collect()
}

/// Round a rough step up to 1, 2 or 5 × 10^k
fn nice_step(rough_step: f64) -> f64 {
    let magnitude = 10.0_f64.powf(rough_step.abs().log10().floor());
    let residual = rough_step / magnitude;

    if residual <= 1.5 {
        magnitude
    } else if residual <= 3.0 {
        2.0 * magnitude
    } else if residual <= 7.0 {
        5.0 * magnitude
    } else {
        10.0 * magnitude
    }
}

/// Decimals needed to print multiples of `step` exactly
fn decimals_for(step: f64) -> usize {
    let exponent = step.log10().floor();
    if exponent >= 0.0 {
        0
    } else {
        (-exponent) as usize
    }
}

/// Format a tick value with a fixed number of decimals
fn format_number(value: f64, decimals: usize) -> String {
    let text = format!("{:.prec$}", value, prec = decimals);
    // "-0" and "-0.0" read badly on an axis
    if text.starts_with('-') && text[1..].chars().all(|c| c == '0' || c == '.') {
        text[1..].to_string()
    } else {
        text
    }
}
