use crate::domain::ports::DiagnosticSink;
use crate::utils::error::HeroError;

/// 把失敗的請求寫進 tracing（預設 sink）
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, operation: &str, error: &HeroError) {
        tracing::error!(operation = operation, "❌ {} failed: {:?}", operation, error);
    }
}
