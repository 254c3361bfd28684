//! Property-based tests for the bias-simulation formulas using proptest.

use proptest::prelude::*;

use biaslab_domain::registry::reference_candidates;
use biaslab_domain::{
    AccuracyModel, BiasLevel, BiasThresholds, Candidate, Gender, ProtectedAttributes, ScoringMode,
    SkewReport, SkewSplit, compute_accuracy, group_average, rank_candidates,
};

fn candidate_strategy() -> impl Strategy<Value = Candidate> {
    (0u32..=100, 0u32..=100, any::<bool>(), 20u32..70).prop_map(|(fair, biased, female, age)| {
        Candidate::new(
            "synthetic",
            ProtectedAttributes {
                gender: if female { Gender::Female } else { Gender::Male },
                age,
            },
            fair as f64,
            biased as f64,
        )
        .with_experience(1)
        .with_education("n/a")
    })
}

fn mode_strategy() -> impl Strategy<Value = ScoringMode> {
    prop_oneof![
        Just(ScoringMode::Fair),
        Just(ScoringMode::HistoricallyBiased)
    ]
}

// --- Skew-accuracy properties ---

proptest! {
    #[test]
    fn advantaged_accuracy_stays_in_band(p in 0.0f64..=100.0) {
        let acc = compute_accuracy(p, true);
        prop_assert!((85.0..=95.0).contains(&acc));
    }

    #[test]
    fn disadvantaged_accuracy_stays_in_band(p in 0.0f64..=100.0) {
        let acc = compute_accuracy(p, false);
        prop_assert!((45.0..=85.0).contains(&acc));
    }

    #[test]
    fn advantaged_accuracy_non_decreasing_in_deviation(a in 0.0f64..=50.0, b in 0.0f64..=50.0) {
        let (near, far) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(compute_accuracy(50.0 + near, true) <= compute_accuracy(50.0 + far, true));
        prop_assert!(compute_accuracy(50.0 - near, true) <= compute_accuracy(50.0 - far, true));
    }

    #[test]
    fn disadvantaged_accuracy_non_increasing_in_deviation(a in 0.0f64..=50.0, b in 0.0f64..=50.0) {
        let (near, far) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(compute_accuracy(50.0 - near, false) >= compute_accuracy(50.0 - far, false));
        prop_assert!(compute_accuracy(50.0 + near, false) >= compute_accuracy(50.0 + far, false));
    }

    #[test]
    fn integer_slider_shares_sum_to_hundred(a in 0u32..=100) {
        let split = SkewSplit::from_group_a(a as f64).unwrap();
        prop_assert_eq!(split.group_a() + split.group_b(), 100.0);
    }

    #[test]
    fn any_slider_value_keeps_shares_summing_to_hundred(a in any::<f64>().prop_filter("not NaN", |v| !v.is_nan())) {
        let split = SkewSplit::from_group_a(a).unwrap();
        prop_assert!((split.group_a() + split.group_b() - 100.0).abs() < 1e-9);
        prop_assert!((0.0..=100.0).contains(&split.group_a()));
    }

    #[test]
    fn report_mirrors_around_balance(a in 0u32..=100) {
        let model = AccuracyModel::default();
        let thresholds = BiasThresholds::default();
        let left = SkewReport::compute(SkewSplit::from_group_a(a as f64).unwrap(), &model, &thresholds);
        let right = SkewReport::compute(SkewSplit::from_group_a(100.0 - a as f64).unwrap(), &model, &thresholds);
        prop_assert_eq!(left.accuracy_a, right.accuracy_b);
        prop_assert_eq!(left.bias_level, right.bias_level);
    }
}

// --- Ranking properties ---

proptest! {
    #[test]
    fn ranking_is_a_permutation(pool in prop::collection::vec(candidate_strategy(), 0..20), mode in mode_strategy()) {
        let ranked = rank_candidates(&pool, mode);
        prop_assert_eq!(ranked.len(), pool.len());
        for c in &pool {
            let in_pool = pool.iter().filter(|x| *x == c).count();
            let in_ranked = ranked.iter().filter(|x| **x == c).count();
            prop_assert_eq!(in_pool, in_ranked);
        }
    }

    #[test]
    fn ranking_is_descending(pool in prop::collection::vec(candidate_strategy(), 0..20), mode in mode_strategy()) {
        let ranked = rank_candidates(&pool, mode);
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].score(mode) >= pair[1].score(mode));
        }
    }

    #[test]
    fn ranking_is_idempotent(pool in prop::collection::vec(candidate_strategy(), 0..20), mode in mode_strategy()) {
        let once: Vec<Candidate> = rank_candidates(&pool, mode).into_iter().cloned().collect();
        let twice: Vec<Candidate> = rank_candidates(&once, mode).into_iter().cloned().collect();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn group_average_within_score_range(pool in prop::collection::vec(candidate_strategy(), 1..20), mode in mode_strategy()) {
        let avg = group_average(&pool, |_| true, mode).unwrap();
        let min = pool.iter().map(|c| c.score(mode)).fold(f64::INFINITY, f64::min);
        let max = pool.iter().map(|c| c.score(mode)).fold(f64::NEG_INFINITY, f64::max);
        prop_assert!(avg >= min - 1e-9 && avg <= max + 1e-9);
    }
}

// --- Reference scenarios ---

#[test]
fn female_average_under_biased_mode() {
    let avg = group_average(
        reference_candidates(),
        |c| c.gender() == Gender::Female,
        ScoringMode::HistoricallyBiased,
    )
    .unwrap();
    assert!((avg - (79.0 + 81.0 + 72.0) / 3.0).abs() < 0.01);
    assert!((avg - 77.33).abs() < 0.01);
}

#[test]
fn skew_of_ninety_end_to_end() {
    let report = SkewReport::compute(
        SkewSplit::from_group_a(90.0).unwrap(),
        &AccuracyModel::default(),
        &BiasThresholds::default(),
    );
    assert_eq!(report.accuracy_a, 93.0);
    assert_eq!(report.accuracy_b, 53.0);
    assert_eq!(report.bias_level, BiasLevel::High);
}
