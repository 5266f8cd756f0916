use std::sync::atomic::{AtomicU64, Ordering};

/// Request id source shared by every call made through one requester.
pub struct RpcIdGenerate {
    seed: AtomicU64,
}

impl Default for RpcIdGenerate {
    fn default() -> Self {
        Self { seed: AtomicU64::new(1) }
    }
}

impl RpcIdGenerate {
    pub fn generate(&self) -> u64 {
        self.seed.fetch_add(1, Ordering::Relaxed)
    }
}
