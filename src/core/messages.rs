use std::sync::{Arc, Mutex, MutexGuard};

/// 狀態訊息紀錄：只能附加，直到明確呼叫 `clear`。
///
/// Clone 出來的 handle 共用同一份紀錄，由應用程式在啟動時建立並注入
/// `HeroService`。
#[derive(Debug, Clone, Default)]
pub struct MessageService {
    messages: Arc<Mutex<Vec<String>>>,
}

impl MessageService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, message: impl Into<String>) {
        self.lock().push(message.into());
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    /// 目前訊息的快照（依加入順序）
    pub fn messages(&self) -> Vec<String> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // Vec::push/clear cannot panic midway, so a poisoned log is still consistent.
    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.messages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
