//! Aggregate totals shared by the SGPA and CGPA aggregators

/// Credit-weighted totals and their average
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AggregateResult {
    /// Sum of `points × credit hours` over counted units
    pub weighted_point_total: f64,
    /// Credit hours of counted units
    pub attempted_credit_total: f64,
    /// Attempted credit hours excluding failing units
    pub secured_credit_total: f64,
    /// `weighted_point_total / attempted_credit_total`, or `0` with no attempted credit
    pub average_value: f64,
}

impl AggregateResult {
    /// Build a result from raw totals, deriving the average
    #[must_use]
    pub fn from_totals(
        weighted_point_total: f64,
        attempted_credit_total: f64,
        secured_credit_total: f64,
    ) -> Self {
        let average_value = if attempted_credit_total > 0.0 {
            weighted_point_total / attempted_credit_total
        } else {
            0.0
        };
        Self {
            weighted_point_total,
            attempted_credit_total,
            secured_credit_total,
            average_value,
        }
    }

    /// Whether any unit counted towards the totals
    #[must_use]
    pub fn has_attempted_credit(&self) -> bool {
        self.attempted_credit_total > 0.0
    }
}

/// Which average a value is: per semester or cumulative
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AverageKind {
    /// Semester GPA
    Semester,
    /// Cumulative GPA
    Cumulative,
}

/// Display band for an average
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerformanceBand {
    /// Top band
    Excellent,
    /// Second band
    Good,
    /// Third band
    Fair,
    /// Any positive average below `Fair`
    Low,
    /// Nothing attempted yet
    Unrated,
}

impl PerformanceBand {
    /// Classify an average; the cumulative thresholds are lower
    #[must_use]
    pub fn classify(kind: AverageKind, average: f64) -> Self {
        let (excellent, good) = match kind {
            AverageKind::Semester => (3.75, 3.25),
            AverageKind::Cumulative => (3.5, 3.0),
        };
        if average >= excellent {
            Self::Excellent
        } else if average >= good {
            Self::Good
        } else if average >= 2.5 {
            Self::Fair
        } else if average > 0.0 {
            Self::Low
        } else {
            Self::Unrated
        }
    }

    /// Lowercase name, also used as a CSS class
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Low => "low",
            Self::Unrated => "unrated",
        }
    }
}
