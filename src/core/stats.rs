use crate::utils::error::{AnalysisError, Result};
use serde::Serialize;

/// Arithmetic mean of the scores.
pub fn mean(values: &[u32]) -> Result<f64> {
    if values.is_empty() {
        return Err(AnalysisError::EmptyDataset);
    }
    let sum: u64 = values.iter().map(|&v| u64::from(v)).sum();
    Ok(sum as f64 / values.len() as f64)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    pub bin_start: f64,
    pub bin_end: f64,
    pub count: u64,
}

/// Equal-width histogram over the closed range `[min, max]` of the input.
///
/// Each bin is half-open `[start, end)` except the last, which also takes
/// values equal to the upper edge. A degenerate range (all values equal) is
/// widened to `[v - 0.5, v + 0.5]` so the bins keep a non-zero width.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    bins: Vec<HistogramBin>,
}

impl Histogram {
    pub fn from_values(values: &[f64], bin_count: usize) -> Result<Self> {
        if bin_count == 0 {
            return Err(AnalysisError::InvalidBinCount { bins: bin_count });
        }
        if values.is_empty() {
            return Err(AnalysisError::EmptyDataset);
        }

        let mut lo = values.iter().copied().fold(f64::INFINITY, f64::min);
        let mut hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if (hi - lo).abs() < f64::EPSILON {
            lo -= 0.5;
            hi += 0.5;
        }

        let width = (hi - lo) / bin_count as f64;
        let edge = |i: usize| lo + i as f64 * width;
        let mut counts = vec![0u64; bin_count];
        for &v in values {
            let mut idx = (((v - lo) / width).floor() as usize).min(bin_count - 1);
            // The division can land one bin off on an interior edge; settle
            // against the same edges the bins report.
            if idx + 1 < bin_count && v >= edge(idx + 1) {
                idx += 1;
            } else if idx > 0 && v < edge(idx) {
                idx -= 1;
            }
            counts[idx] += 1;
        }

        let bins = counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| HistogramBin {
                bin_start: edge(i),
                bin_end: if i + 1 == bin_count { hi } else { edge(i + 1) },
                count,
            })
            .collect();

        Ok(Self { bins })
    }

    pub fn bins(&self) -> &[HistogramBin] {
        &self.bins
    }

    pub fn counts(&self) -> Vec<u64> {
        self.bins.iter().map(|b| b.count).collect()
    }

    pub fn range(&self) -> (f64, f64) {
        // from_values never builds an empty histogram
        let start = self.bins.first().map(|b| b.bin_start).unwrap_or(0.0);
        let end = self.bins.last().map(|b| b.bin_end).unwrap_or(0.0);
        (start, end)
    }

    pub fn max_count(&self) -> u64 {
        self.bins.iter().map(|b| b.count).max().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.bins.iter().map(|b| b.count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_mean_of_demo_scores() {
        assert_eq!(mean(&[85, 92, 78, 90]).unwrap(), 86.25);
    }

    #[test]
    fn test_mean_of_empty_slice_is_error() {
        assert!(matches!(mean(&[]), Err(AnalysisError::EmptyDataset)));
    }

    #[test]
    fn test_demo_histogram_has_five_bins() {
        let hist = Histogram::from_values(&[85.0, 92.0, 78.0, 90.0], 5).unwrap();
        assert_eq!(hist.bins().len(), 5);
        assert_eq!(hist.counts(), vec![1, 0, 1, 0, 2]);
        assert_eq!(hist.total(), 4);
        assert_eq!(hist.max_count(), 2);

        let edges: Vec<f64> = hist.bins().iter().map(|b| b.bin_start).collect();
        for (got, want) in edges.iter().zip([78.0, 80.8, 83.6, 86.4, 89.2]) {
            assert!(approx(*got, want), "edge {} != {}", got, want);
        }
        assert_eq!(hist.range(), (78.0, 92.0));
    }

    #[test]
    fn test_maximum_lands_in_last_bin() {
        let hist = Histogram::from_values(&[0.0, 10.0], 2).unwrap();
        assert_eq!(hist.counts(), vec![1, 1]);
    }

    fn bin_of(hist: &Histogram, v: f64) -> usize {
        let last = hist.bins().len() - 1;
        hist.bins()
            .iter()
            .position(|b| b.bin_start <= v && v < b.bin_end)
            .unwrap_or(last)
    }

    #[test]
    fn test_interior_edge_values_land_in_upper_bin() {
        let values = [0.0, 9.0, 18.0];
        let hist = Histogram::from_values(&values, 14).unwrap();

        let mut expected = vec![0u64; 14];
        for &v in &values {
            expected[bin_of(&hist, v)] += 1;
        }
        assert_eq!(hist.counts(), expected);

        let nine = bin_of(&hist, 9.0);
        assert_eq!(hist.bins()[nine].bin_start, 9.0);
        assert_eq!(hist.bins()[nine].count, 1);
    }

    #[test]
    fn test_integer_ranges_respect_half_open_bins() {
        for bin_count in 1..=20 {
            for hi in 1..=60u32 {
                let values: Vec<f64> = (0..=hi).map(f64::from).collect();
                let hist = Histogram::from_values(&values, bin_count).unwrap();

                let mut expected = vec![0u64; bin_count];
                for &v in &values {
                    expected[bin_of(&hist, v)] += 1;
                }
                assert_eq!(hist.counts(), expected, "bins={} hi={}", bin_count, hi);
            }
        }
    }

    #[test]
    fn test_single_value_range_is_widened() {
        let hist = Histogram::from_values(&[70.0, 70.0], 5).unwrap();
        assert_eq!(hist.range(), (69.5, 70.5));
        assert_eq!(hist.total(), 2);
        assert_eq!(hist.counts(), vec![0, 0, 2, 0, 0]);
    }

    #[test]
    fn test_zero_bins_is_error() {
        assert!(matches!(
            Histogram::from_values(&[1.0], 0),
            Err(AnalysisError::InvalidBinCount { bins: 0 })
        ));
    }
}
