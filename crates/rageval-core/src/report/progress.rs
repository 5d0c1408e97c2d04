//! Progress reporting for a run. The runner emits one event before each item
//! is judged; the console layer consumes them via a sink.

use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct ProgressEvent {
    /// 1-based position of the item about to be judged.
    pub position: usize,
    pub total: usize,
    pub id: String,
}

pub type ProgressSink = Arc<dyn Fn(ProgressEvent) + Send + Sync>;
