// エンジン層 - スイープ実行とオーケストレーション
// 分割・摂動・計測・集約を組み合わせて実験を実行する

pub mod aggregator;
pub mod experiment;
pub mod invariant;
pub mod partition;
pub mod perturbation;
pub mod sampler;
pub mod sweep;

pub use aggregator::{display_timings, median, MedianSet};
pub use experiment::{Experiment, ExperimentOutcome};
pub use invariant::check_invariant;
pub use partition::ChunkPlan;
pub use perturbation::{perturbation, PERTURBATION_TABLE, PERTURBATION_TABLE_LEN};
pub use sampler::{run_timings, TimingSamples};
pub use sweep::{execute_sweep, parallel_sweep, partial_sweep, ExecutionMode};
