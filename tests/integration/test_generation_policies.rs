// 生成ポリシーの統合テスト
use crate::fixtures::{small_config, RecordingShapeFactory};
use dispatch_bench::engine::Experiment;
use dispatch_bench::{
    create_quiet_experiment, GenerationPolicy, MatchDispatch, NoOpBenchmarkReporter,
    VisitorDispatch,
};

fn recording_experiment(
    config: dispatch_bench::DefaultBenchmarkConfig,
) -> Experiment<
    RecordingShapeFactory,
    VisitorDispatch,
    MatchDispatch,
    dispatch_bench::DefaultBenchmarkConfig,
    NoOpBenchmarkReporter,
> {
    Experiment::new(
        RecordingShapeFactory::new(),
        VisitorDispatch::new(),
        MatchDispatch::new(),
        config,
        NoOpBenchmarkReporter::new(),
    )
}

#[test]
fn test_repetitive_seeds_every_repetition() {
    let config = small_config(1).with_object_count(4).with_repetitions(3);
    let experiment = recording_experiment(config);

    experiment.test_repetitive().unwrap();

    let expected: Vec<usize> = [0, 2, 4, 6].repeat(3);
    assert_eq!(experiment.factory().seeds(), expected);
}

#[test]
fn test_sequential_seeds_are_indices_built_once() {
    let config = small_config(0).with_object_count(6);
    let experiment = recording_experiment(config);

    experiment.test_sequential().unwrap();

    assert_eq!(experiment.factory().seeds(), vec![0, 1, 2, 3, 4, 5]);
}

#[test]
fn test_randomized_seeds_are_non_negative_31_bit() {
    let config = small_config(0).with_random_seed(Some(3));
    let experiment = recording_experiment(config);

    experiment.test_randomized().unwrap();

    let seeds = experiment.factory().seeds();
    assert_eq!(seeds.len(), 100);
    assert!(seeds.iter().all(|&seed| seed <= i32::MAX as usize));
}

#[test]
fn test_fixed_seed_makes_randomized_runs_reproducible() {
    let config = small_config(2).with_random_seed(Some(2024));

    let first = create_quiet_experiment(config.clone())
        .run(GenerationPolicy::Randomized)
        .unwrap();
    let second = create_quiet_experiment(config)
        .run(GenerationPolicy::Randomized)
        .unwrap();

    assert_eq!(first.checksums, second.checksums);
}
