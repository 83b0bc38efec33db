// 不変条件違反の統合テスト
use crate::fixtures::{small_config, MockBenchmarkReporter, OffByOneDispatch};
use dispatch_bench::core::INVARIANT_VIOLATION_EXIT_CODE;
use dispatch_bench::engine::Experiment;
use dispatch_bench::{BenchError, MatchDispatch, SeededShapeFactory, VisitorDispatch};

#[test]
fn test_broken_mechanism_is_fatal() {
    let mut mock_reporter = MockBenchmarkReporter::new();
    mock_reporter.expect_report_started().times(1).return_const(());
    mock_reporter
        .expect_report_invariant_violation()
        .withf(|checksums| checksums.visitor != checksums.matcher)
        .times(1)
        .return_const(());
    mock_reporter.expect_report_completed().times(0);

    let experiment = Experiment::new(
        SeededShapeFactory::new(),
        VisitorDispatch::new(),
        OffByOneDispatch::new(),
        small_config(2),
        mock_reporter,
    );

    let error = experiment.test_sequential().unwrap_err();

    match &error {
        BenchError::InvariantViolation { visitor, matcher } => {
            // 100オブジェクト x 10計測 x 5繰り返し分だけずれる
            assert_eq!(matcher.wrapping_sub(*visitor), 5_000);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(error.exit_code(), INVARIANT_VIOLATION_EXIT_CODE);
    assert!(error.to_string().contains("不変条件違反"));
}

#[test]
fn test_violation_is_deterministic_across_policies() {
    let experiment = Experiment::new(
        SeededShapeFactory::new(),
        OffByOneDispatch::new(),
        MatchDispatch::new(),
        small_config(0).with_repetitions(2),
        dispatch_bench::NoOpBenchmarkReporter::new(),
    );

    assert!(matches!(
        experiment.test_sequential(),
        Err(BenchError::InvariantViolation { .. })
    ));
    assert!(matches!(
        experiment.test_randomized(),
        Err(BenchError::InvariantViolation { .. })
    ));
    assert!(matches!(
        experiment.test_repetitive(),
        Err(BenchError::InvariantViolation { .. })
    ));
}
