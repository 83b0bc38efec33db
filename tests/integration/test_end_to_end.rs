// エンドツーエンド統合テスト
use crate::fixtures::small_config;
use dispatch_bench::{
    create_quiet_experiment, GenerationPolicy, MatchDispatch, NoOpBenchmarkReporter,
    SeededShapeFactory, VisitorDispatch,
};
use dispatch_bench::engine::Experiment;

#[test]
fn test_sequential_policy_inline_only() {
    let experiment = create_quiet_experiment(small_config(0));

    let outcome = experiment.run(GenerationPolicy::Sequential).unwrap();

    assert_eq!(outcome.settings.worker_threads, 0);
    assert_eq!(outcome.verdict.iterations, 100);
    assert!(outcome.verdict.to_string().contains("per call (100 calls)"));
    assert!(outcome.checksums.is_consistent());
}

#[test]
fn test_worker_threads_do_not_change_checksums() {
    let inline = create_quiet_experiment(small_config(0))
        .run(GenerationPolicy::Sequential)
        .unwrap();
    let parallel = create_quiet_experiment(small_config(3))
        .run(GenerationPolicy::Sequential)
        .unwrap();

    assert_eq!(parallel.settings.worker_threads, 3);
    assert!(parallel.checksums.is_consistent());
    assert_eq!(parallel.checksums, inline.checksums);
    assert_eq!(parallel.verdict.iterations, inline.verdict.iterations);
}

#[test]
fn test_more_threads_than_objects() {
    let config = small_config(8).with_object_count(5);
    let outcome = create_quiet_experiment(config)
        .run(GenerationPolicy::Sequential)
        .unwrap();

    assert_eq!(outcome.verdict.iterations, 5);
    assert!(outcome.checksums.is_consistent());
}

#[test]
fn test_single_measurement_single_repetition() {
    let config = small_config(2).with_measurements(1).with_repetitions(1);
    let verdict = create_quiet_experiment(config).test_repetitive().unwrap();
    assert_eq!(verdict.iterations, 100);
}

#[test]
fn test_run_all_policies_in_order() {
    let experiment = Experiment::new(
        SeededShapeFactory::new(),
        VisitorDispatch::new(),
        MatchDispatch::new(),
        small_config(2).with_random_seed(Some(99)),
        NoOpBenchmarkReporter::new(),
    );

    let outcomes = experiment.run_all().unwrap();

    assert_eq!(outcomes.len(), 3);
    for (outcome, policy) in outcomes.iter().zip(GenerationPolicy::ALL) {
        assert_eq!(outcome.policy, policy);
        assert!(outcome.checksums.is_consistent());
    }
}
