use std::sync::atomic::{AtomicU64, Ordering};

/// Callback invoked with `(bytes_sent, bytes_total)` while a body streams out.
pub type ProgressCallback = Box<dyn Fn(u64, u64) + Send + Sync>;

/// Rounds `sent / total` to a whole percentage.
///
/// Returns `None` when `total` is zero: the transfer has no measurable
/// length and progress must not be reported.
pub fn percent_of(sent: u64, total: u64) -> Option<u8> {
    if total == 0 {
        return None;
    }
    let pct = (sent.min(total) as f64 / total as f64 * 100.0).round();
    Some(pct as u8)
}

/// Label shown on the progress bar: `"42% (2/5)"`.
///
/// `index` is zero-based; the label shows it one-based.
pub fn progress_label(percent: u8, index: usize, total: usize) -> String {
    format!("{percent}% ({}/{total})", index + 1)
}

/// Counts bytes handed to the transport and reports them to a callback.
///
/// Shared between the body stream (which calls [`advance`](Self::advance))
/// and whoever created it.
pub struct ProgressCounter {
    total: u64,
    sent: AtomicU64,
    callback: Option<ProgressCallback>,
}

impl ProgressCounter {
    pub fn new(total: u64, callback: Option<ProgressCallback>) -> Self {
        Self {
            total,
            sent: AtomicU64::new(0),
            callback,
        }
    }

    /// Records `n` more bytes sent and notifies the callback.
    pub fn advance(&self, n: u64) {
        let sent = self.sent.fetch_add(n, Ordering::Relaxed) + n;
        if let Some(cb) = &self.callback {
            cb(sent.min(self.total), self.total);
        }
    }
}
