use crate::core::color::ColorToken;
use crate::facial::{DatasetMode, Group, GroupMetric};

const LIGHT_MALES: Group = Group {
    name: "Light-skinned Males",
    reference_sample_count: 8500,
    color: ColorToken::Blue,
};

const LIGHT_FEMALES: Group = Group {
    name: "Light-skinned Females",
    reference_sample_count: 7200,
    color: ColorToken::Purple,
};

const DARK_MALES: Group = Group {
    name: "Dark-skinned Males",
    reference_sample_count: 1800,
    color: ColorToken::Orange,
};

const DARK_FEMALES: Group = Group {
    name: "Dark-skinned Females",
    reference_sample_count: 1200,
    color: ColorToken::Red,
};

static GROUPS: [Group; 4] = [LIGHT_MALES, LIGHT_FEMALES, DARK_MALES, DARK_FEMALES];

const fn metric(
    group: Group,
    training_samples: u32,
    accuracy: f64,
    false_positive_rate: f64,
) -> GroupMetric {
    GroupMetric {
        group,
        training_samples,
        accuracy,
        false_positive_rate,
    }
}

static SKEWED: [GroupMetric; 4] = [
    metric(LIGHT_MALES, 8500, 94.2, 0.8),
    metric(LIGHT_FEMALES, 7200, 92.7, 1.2),
    metric(DARK_MALES, 1800, 76.5, 6.4),
    metric(DARK_FEMALES, 1200, 65.3, 12.7),
];

static BALANCED: [GroupMetric; 4] = [
    metric(LIGHT_MALES, 5000, 91.5, 1.1),
    metric(LIGHT_FEMALES, 5000, 90.8, 1.3),
    metric(DARK_MALES, 5000, 89.7, 1.5),
    metric(DARK_FEMALES, 5000, 88.4, 1.8),
];

/// Demographic groups of the facial-recognition demonstration
pub fn facial_groups() -> &'static [Group] {
    &GROUPS
}

/// Metric set measured on the selected training set, in group order
pub fn facial_metrics(mode: DatasetMode) -> &'static [GroupMetric] {
    match mode {
        DatasetMode::Skewed => &SKEWED,
        DatasetMode::Balanced => &BALANCED,
    }
}

/// Largest reference sample count, used as the 100% mark of every sample bar
pub fn max_reference_samples() -> u32 {
    GROUPS
        .iter()
        .map(|g| g.reference_sample_count)
        .max()
        .unwrap_or(0)
}
