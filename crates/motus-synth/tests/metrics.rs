use motus_core::models::session::{ADHERENCE_RANGE, FATIGUE_RANGE, PERFORMANCE_RANGE};
use motus_synth::metrics::{
    adherence_baseline, fatigue_baseline, performance_baseline, session_metrics,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn performance_baseline_climbs_monotonically() {
    assert_eq!(performance_baseline(0, 8), 40.0);
    for i in 0..19 {
        assert!(performance_baseline(i + 1, 20) > performance_baseline(i, 20));
    }
}

#[test]
fn fatigue_baseline_falls_as_performance_rises() {
    assert!(fatigue_baseline(95) < fatigue_baseline(50));
    assert!(fatigue_baseline(50) < fatigue_baseline(20));
    assert_eq!(fatigue_baseline(100), 4.0);
}

#[test]
fn adherence_phases_for_twenty_sessions() {
    // 30%/60% phase boundaries over twenty sessions: indices 6..12 sit in
    // the mid-treatment dip.
    for i in 0..6 {
        assert_eq!(adherence_baseline(i, 20), 85.0, "index {i}");
    }
    for i in 6..12 {
        assert_eq!(adherence_baseline(i, 20), 65.0, "index {i}");
    }
    for i in 12..20 {
        assert_eq!(adherence_baseline(i, 20), 80.0, "index {i}");
    }
}

#[test]
fn drawn_metrics_respect_bounds_for_any_seed() {
    for seed in 0..200 {
        let mut rng = StdRng::seed_from_u64(seed);
        for index in 0..20 {
            let m = session_metrics(index, 20, &mut rng);
            assert!(PERFORMANCE_RANGE.contains(m.performance_score), "seed={seed}");
            assert!(FATIGUE_RANGE.contains(m.fatigue_level), "seed={seed}");
            assert!(ADHERENCE_RANGE.contains(m.adherence_rate), "seed={seed}");
        }
    }
}

#[test]
fn noise_stays_within_band_around_baselines() {
    for seed in 0..100 {
        let mut rng = StdRng::seed_from_u64(seed);
        for index in 0..20 {
            let m = session_metrics(index, 20, &mut rng);

            let perf_delta =
                (m.performance_score as f64 - performance_baseline(index, 20)).abs();
            assert!(perf_delta <= 10.5, "seed={seed} index={index}");

            let fatigue_delta =
                (m.fatigue_level as f64 - fatigue_baseline(m.performance_score)).abs();
            assert!(fatigue_delta <= 2.0, "seed={seed} index={index}");

            let adherence_delta =
                (m.adherence_rate as f64 - adherence_baseline(index, 20)).abs();
            assert!(adherence_delta <= 8.0, "seed={seed} index={index}");
        }
    }
}
