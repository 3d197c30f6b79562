use crate::core::messages::MessageService;
use crate::domain::ports::DiagnosticSink;
use crate::utils::error::Result;

/// 請求失敗時的統一處理：
/// 原始錯誤送到 diagnostic sink，訊息紀錄加上 `"<operation> failed: <message>"`，
/// 然後以 `fallback` 作為結果回傳，錯誤不再往上拋。
pub fn recover<T>(
    operation: &str,
    fallback: T,
    outcome: Result<T>,
    messages: &MessageService,
    sink: &dyn DiagnosticSink,
) -> T {
    match outcome {
        Ok(value) => value,
        Err(error) => {
            sink.report(operation, &error);
            messages.add(format!("{} failed: {}", operation, error.message()));
            fallback
        }
    }
}
