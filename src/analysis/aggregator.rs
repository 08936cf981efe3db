//! # Intensity Aggregation
//!
//! Per-class statistics over scored records: mean intensity, class
//! distribution and score spread.

use crate::sentiment::{ScoredRecord, SentimentClass};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Count and share of one sentiment class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassShare {
    pub class: SentimentClass,
    pub count: usize,
    /// Fraction of all scored records, in [0, 1]
    pub share: f64,
}

/// Five-number summary of a group of scores
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpreadSummary {
    pub count: usize,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl SpreadSummary {
    /// Summary of a non-empty set of values
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));

        Some(Self {
            count: sorted.len(),
            min: sorted[0],
            q1: quantile(&sorted, 0.25),
            median: quantile(&sorted, 0.5),
            q3: quantile(&sorted, 0.75),
            max: sorted[sorted.len() - 1],
        })
    }

    /// Interquartile range
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

/// Everything the aggregator derives from a scored table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntensitySummary {
    pub distribution: Vec<ClassShare>,
    pub means: BTreeMap<SentimentClass, f64>,
    pub spread: BTreeMap<SentimentClass, SpreadSummary>,
}

/// Groups scored records by sentiment class
#[derive(Debug, Clone, Copy, Default)]
pub struct IntensityAggregator;

impl IntensityAggregator {
    pub fn new() -> Self {
        Self
    }

    /// Mean compound per class; classes without members are absent
    pub fn class_means(&self, records: &[ScoredRecord]) -> BTreeMap<SentimentClass, f64> {
        group_means(records.iter().map(|r| (r.sentiment_class, r.compound)))
    }

    /// Count and share per present class, in class order
    pub fn distribution(&self, records: &[ScoredRecord]) -> Vec<ClassShare> {
        let total = records.len();
        let mut counts: BTreeMap<SentimentClass, usize> = BTreeMap::new();
        for record in records {
            *counts.entry(record.sentiment_class).or_insert(0) += 1;
        }

        counts
            .into_iter()
            .map(|(class, count)| ClassShare {
                class,
                count,
                share: count as f64 / total as f64,
            })
            .collect()
    }

    /// Five-number summary of compound scores per present class
    pub fn spread(&self, records: &[ScoredRecord]) -> BTreeMap<SentimentClass, SpreadSummary> {
        let mut groups: BTreeMap<SentimentClass, Vec<f64>> = BTreeMap::new();
        for record in records {
            groups.entry(record.sentiment_class).or_default().push(record.compound);
        }

        groups
            .into_iter()
            .filter_map(|(class, values)| SpreadSummary::from_values(&values).map(|s| (class, s)))
            .collect()
    }

    pub fn aggregate(&self, records: &[ScoredRecord]) -> IntensitySummary {
        IntensitySummary {
            distribution: self.distribution(records),
            means: self.class_means(records),
            spread: self.spread(records),
        }
    }
}

/// Arithmetic mean per key, dividing each group by its own size
///
/// Values are summed in input order so repeated runs agree bit for bit.
pub(crate) fn group_means<K, I>(items: I) -> BTreeMap<K, f64>
where
    K: Ord,
    I: IntoIterator<Item = (K, f64)>,
{
    let mut sums: BTreeMap<K, (f64, usize)> = BTreeMap::new();
    for (key, value) in items {
        let entry = sums.entry(key).or_insert((0.0, 0));
        entry.0 += value;
        entry.1 += 1;
    }
    sums.into_iter()
        .map(|(key, (sum, count))| (key, sum / count as f64))
        .collect()
}

/// Linear interpolation between order statistics of sorted data
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}
