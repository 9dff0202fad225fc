//! Display strings shown next to the chart
//!
//! The numeric formatting here is fixed: values with two decimals,
//! percentages with one.

use bellcurve_stats::{sigma_coverage, DistributionParams};

/// Tooltip text for a hovered value
pub fn value_label(x: f64, percentile: f64) -> String {
    format!("Value: {:.2}, Percentile: {:.1}%", x, percentile)
}

/// Marker text for the line `n` standard deviations from the mean
pub fn sigma_label(n: i32) -> String {
    format!("{}σ: {:.1}% of data", n, sigma_coverage(f64::from(n)))
}

/// Accessible description of the interactive surface
pub fn aria_label(params: &DistributionParams) -> String {
    format!(
        "Normal distribution with mean {:.2} and standard deviation {:.2}. \
         Use arrow keys to move the cursor.",
        params.mean(),
        params.std_dev()
    )
}
