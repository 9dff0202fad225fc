//! Golden values for the displayed numbers

use bellcurve_stats::{bin_histogram, pdf, percentile, sample_stats, sigma_coverage, Domain};
use rstest::rstest;

#[rstest]
#[case(0.0, 0.0, 1.0, 0.398_942)]
#[case(1.0, 0.0, 1.0, 0.241_971)]
#[case(2.0, 0.0, 1.0, 0.053_991)]
#[case(10.0, 10.0, 2.0, 0.199_471)]
fn density(#[case] x: f64, #[case] mean: f64, #[case] std_dev: f64, #[case] expected: f64) {
    assert!((pdf(x, mean, std_dev).unwrap() - expected).abs() < 1e-6);
}

#[rstest]
#[case(0.0, 50.0)]
#[case(1.0, 84.134)]
#[case(-1.0, 15.866)]
#[case(2.0, 97.725)]
#[case(-3.0, 0.135)]
fn standard_percentiles(#[case] x: f64, #[case] expected: f64) {
    assert!((percentile(x, 0.0, 1.0).unwrap() - expected).abs() < 1e-3);
}

#[rstest]
#[case(1.0, "68.3")]
#[case(2.0, "95.4")]
#[case(3.0, "99.7")]
fn coverage_labels(#[case] n: f64, #[case] expected: &str) {
    assert_eq!(format!("{:.1}", sigma_coverage(n)), expected);
}

#[test]
fn textbook_sample() {
    let stats = sample_stats(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
    assert_eq!(stats.mean, 5.0);
    assert_eq!(stats.std_dev, 2.0);
}

#[test]
fn six_unit_bins() {
    let domain = Domain::new(0.0, 6.0).unwrap();
    let bins = bin_histogram(&[1.0, 1.0, 1.0, 5.0, 5.0], domain, 6).unwrap();
    let counts: Vec<usize> = bins.iter().map(|b| b.count).collect();
    assert_eq!(counts, vec![0, 3, 0, 0, 0, 2]);
}
