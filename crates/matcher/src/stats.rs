//! Summary statistics over a comparison result list.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Deserialize;

use crate::types::{Metric, SimilarityResult};

/// Min, arithmetic mean and max of one metric.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, Deserialize)]
pub struct MetricStats {
    pub min: f64,
    pub mean: f64,
    pub max: f64,
}

impl MetricStats {
    fn from_scores(scores: impl Iterator<Item = f64>) -> Option<Self> {
        let mut count = 0usize;
        let mut sum = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for score in scores {
            count += 1;
            sum += score;
            min = min.min(score);
            max = max.max(score);
        }
        (count > 0).then(|| Self {
            min,
            mean: sum / count as f64,
            max,
        })
    }

    /// `max - min`.
    pub fn spread(&self) -> f64 {
        self.max - self.min
    }
}

/// Per-metric statistics plus the number of results they were computed from.
///
/// Serializes as a flat map with the keys yielded by [`entries`](Self::entries).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatisticsSummary {
    pub cosine: MetricStats,
    pub jaccard: MetricStats,
    pub levenshtein: MetricStats,
    pub total_pairs: usize,
}

impl StatisticsSummary {
    pub fn metric(&self, metric: Metric) -> &MetricStats {
        match metric {
            Metric::Cosine => &self.cosine,
            Metric::Jaccard => &self.jaccard,
            Metric::Levenshtein => &self.levenshtein,
        }
    }

    /// Fixed-key view: `<metric>_mean`, `<metric>_min`, `<metric>_max` for
    /// each metric in [`Metric::ALL`] order, then `total_pairs`.
    pub fn entries(&self) -> [(&'static str, f64); 10] {
        [
            ("cosine_mean", self.cosine.mean),
            ("cosine_min", self.cosine.min),
            ("cosine_max", self.cosine.max),
            ("jaccard_mean", self.jaccard.mean),
            ("jaccard_min", self.jaccard.min),
            ("jaccard_max", self.jaccard.max),
            ("levenshtein_mean", self.levenshtein.mean),
            ("levenshtein_min", self.levenshtein.min),
            ("levenshtein_max", self.levenshtein.max),
            ("total_pairs", self.total_pairs as f64),
        ]
    }

    /// Mean of the three metric means.
    pub fn overall_mean(&self) -> f64 {
        (self.cosine.mean + self.jaccard.mean + self.levenshtein.mean) / 3.0
    }

    /// Metric whose scores vary the most across pairs. Ties resolve to the
    /// earliest metric in [`Metric::ALL`].
    pub fn most_discriminating(&self) -> Metric {
        let mut best = Metric::Cosine;
        for metric in Metric::ALL {
            if self.metric(metric).spread() > self.metric(best).spread() {
                best = metric;
            }
        }
        best
    }
}

impl Serialize for StatisticsSummary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(10))?;
        for (key, value) in self.entries() {
            if key == "total_pairs" {
                map.serialize_entry(key, &self.total_pairs)?;
            } else {
                map.serialize_entry(key, &value)?;
            }
        }
        map.end()
    }
}

/// Reduces `results` to per-metric min/mean/max and a pair count.
///
/// Returns `None` for an empty list.
pub fn aggregate(results: &[SimilarityResult]) -> Option<StatisticsSummary> {
    let stats = |metric: Metric| MetricStats::from_scores(results.iter().map(|r| r.score(metric)));
    Some(StatisticsSummary {
        cosine: stats(Metric::Cosine)?,
        jaccard: stats(Metric::Jaccard)?,
        levenshtein: stats(Metric::Levenshtein)?,
        total_pairs: results.len(),
    })
}
