// ベンチマークハーネス専用のカスタムエラー型定義

use thiserror::Error;

/// 不変条件違反時に使用する終了ステータス
pub const INVARIANT_VIOLATION_EXIT_CODE: i32 = 42;

/// ベンチマーク実行固有のエラー型
#[derive(Error, Debug)]
pub enum BenchError {
    #[error("不変条件違反: a1={visitor} と a2={matcher} が一致しません")]
    InvariantViolation { visitor: usize, matcher: usize },

    #[error("設定エラー: {message}")]
    ConfigurationError { message: String },

    #[error("バリデーションエラー: {field} - {reason}")]
    ValidationError { field: String, reason: String },

    #[error("ワーカースレッドエラー: {message}")]
    ThreadPanic { message: String },

    #[error("リソース不足エラー: {resource_type} - {details}")]
    ResourceExhaustionError {
        resource_type: String,
        details: String,
    },

    #[error("レポート出力エラー: {source}")]
    ReportError {
        #[source]
        source: anyhow::Error,
    },

    #[error("内部エラー: {source}")]
    InternalError {
        #[source]
        source: anyhow::Error,
    },
}

impl BenchError {
    /// 不変条件違反エラーの作成
    pub fn invariant_violation(visitor: usize, matcher: usize) -> Self {
        Self::InvariantViolation { visitor, matcher }
    }

    /// 設定エラーの作成
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
        }
    }

    /// バリデーションエラーの作成
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// スレッドパニックエラーの作成
    pub fn thread_panic(message: impl Into<String>) -> Self {
        Self::ThreadPanic {
            message: message.into(),
        }
    }

    /// リソース不足エラーの作成
    pub fn resource_exhaustion(
        resource_type: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self::ResourceExhaustionError {
            resource_type: resource_type.into(),
            details: details.into(),
        }
    }

    /// レポート出力エラーの作成
    pub fn report(source: anyhow::Error) -> Self {
        Self::ReportError { source }
    }

    /// 内部エラーの作成
    pub fn internal(source: anyhow::Error) -> Self {
        Self::InternalError { source }
    }

    /// エラーの重要度を取得
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvariantViolation { .. } | Self::InternalError { .. } => ErrorSeverity::Critical,
            Self::ConfigurationError { .. } | Self::ValidationError { .. } => ErrorSeverity::High,
            Self::ThreadPanic { .. } | Self::ResourceExhaustionError { .. } => {
                ErrorSeverity::Critical
            }
            Self::ReportError { .. } => ErrorSeverity::Medium,
        }
    }

    /// エラーが回復可能かどうかを判定
    ///
    /// 計測結果自体は得られているレポート出力失敗のみ回復可能
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::ReportError { .. })
    }

    /// プロセス終了ステータスを取得
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvariantViolation { .. } => INVARIANT_VIOLATION_EXIT_CODE,
            _ => 1,
        }
    }

    /// エラーコンテキストを取得
    pub fn context(&self) -> ErrorContext {
        match self {
            Self::InvariantViolation { visitor, matcher } => {
                ErrorContext::new("invariant_check")
                    .with_resource(format!("a1={visitor:#x} a2={matcher:#x}"))
                    .with_suggestion("2つのディスパッチ機構の計算結果が異なります。実装を確認してください")
            }
            Self::ConfigurationError { message } => ErrorContext::new("configuration")
                .with_suggestion(format!("設定を確認してください: {message}")),
            Self::ValidationError { field, .. } => ErrorContext::new("validation")
                .with_resource(field.clone())
                .with_suggestion("値の範囲を確認してください"),
            Self::ThreadPanic { .. } => ErrorContext::new("parallel_sweep")
                .with_suggestion("ディスパッチ機構がパニックしていないか確認してください"),
            _ => ErrorContext::new("unknown"),
        }
    }
}

/// エラーの重要度レベル
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// 低重要度 - ログ出力程度
    Low,
    /// 中重要度 - 警告レベル
    Medium,
    /// 高重要度 - 要対応
    High,
    /// 致命的 - ベンチマーク停止レベル
    Critical,
}

impl ErrorSeverity {
    /// 重要度の文字列表現を取得
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// エラーコンテキスト情報
#[derive(Debug, Clone)]
pub struct ErrorContext {
    /// 実行していた操作
    pub operation: String,
    /// 関連するリソース
    pub resource: Option<String>,
    /// エラー解決のための提案
    pub suggestion: Option<String>,
}

impl ErrorContext {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            resource: None,
            suggestion: None,
        }
    }

    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// ベンチマーク処理の結果型
pub type BenchResult<T> = std::result::Result<T, BenchError>;

impl From<anyhow::Error> for BenchError {
    fn from(error: anyhow::Error) -> Self {
        BenchError::InternalError { source: error }
    }
}
