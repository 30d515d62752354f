// File: crates/trend-core/src/series.rs
// Summary: Series identities and the fixed weekly symptom samples.

/// One of the three tracked symptom channels. The set is closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SeriesKind {
    Pain,
    Bloating,
    Fatigue,
}

impl SeriesKind {
    /// Draw order: pain first, fatigue on top.
    pub const ALL: [SeriesKind; 3] = [SeriesKind::Pain, SeriesKind::Bloating, SeriesKind::Fatigue];

    pub const fn index(self) -> usize {
        match self {
            SeriesKind::Pain => 0,
            SeriesKind::Bloating => 1,
            SeriesKind::Fatigue => 2,
        }
    }

    /// Machine key, also used as a CSS class in SVG output.
    pub const fn key(self) -> &'static str {
        match self {
            SeriesKind::Pain => "pain",
            SeriesKind::Bloating => "bloating",
            SeriesKind::Fatigue => "fatigue",
        }
    }

    /// Legend label.
    pub const fn label(self) -> &'static str {
        match self {
            SeriesKind::Pain => "Pain",
            SeriesKind::Bloating => "Bloating",
            SeriesKind::Fatigue => "Fatigue",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.key().eq_ignore_ascii_case(key))
    }
}

/// A single day across all series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub label: &'static str,
    values: [f64; 3], // indexed by SeriesKind::index
}

impl Sample {
    pub const fn new(label: &'static str, pain: f64, bloating: f64, fatigue: f64) -> Self {
        Self { label, values: [pain, bloating, fatigue] }
    }

    #[inline]
    pub fn value(&self, kind: SeriesKind) -> f64 {
        self.values[kind.index()]
    }
}

/// Illustrative scores for one week, Monday first.
pub const SYMPTOM_WEEK: [Sample; 7] = [
    Sample::new("Mon", 2.0, 1.0, 4.0),
    Sample::new("Tue", 1.0, 2.0, 3.0),
    Sample::new("Wed", 4.0, 2.0, 3.0),
    Sample::new("Thu", 3.0, 3.0, 2.0),
    Sample::new("Fri", 1.0, 4.0, 2.0),
    Sample::new("Sat", 3.0, 2.0, 1.0),
    Sample::new("Sun", 4.0, 1.0, 4.0),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn week_values_stay_in_score_range() {
        for s in SYMPTOM_WEEK {
            for k in SeriesKind::ALL {
                let v = s.value(k);
                assert!((1.0..=4.0).contains(&v), "{} {} = {}", s.label, k.key(), v);
            }
        }
    }

    #[test]
    fn keys_round_trip() {
        for k in SeriesKind::ALL {
            assert_eq!(SeriesKind::from_key(k.key()), Some(k));
        }
        assert_eq!(SeriesKind::from_key("nausea"), None);
    }
}
