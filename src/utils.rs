//! Shared helpers: verbose progress logging behind a single lock.

use std::sync::Mutex;

use chrono::Local;

static LOG_LOCK: Mutex<()> = Mutex::new(());

/// Whether CHARKHA_VERBOSE asks for per-item progress logging. Off unless the
/// env var says otherwise; every logged completion costs an extra lock
/// acquisition, so dispatchers check this once up front.
pub fn verbose_enabled() -> bool {
    std::env::var("CHARKHA_VERBOSE")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// One timestamped progress line to stderr. Serialized through a dedicated
/// lock so concurrent workers never interleave partial lines.
pub fn log(message: &str) {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    let _guard = LOG_LOCK.lock().expect("log lock");
    eprintln!("[{}] {}", timestamp, message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_does_not_poison_under_concurrent_use() {
        std::thread::scope(|scope| {
            for id in 0..4 {
                scope.spawn(move || {
                    for i in 0..10 {
                        log(&format!("worker {} item {}", id, i));
                    }
                });
            }
        });
        // A poisoned LOG_LOCK would panic here.
        log("done");
    }
}
