// src/notify.rs
//! User-facing notifications. The console speaks French to the operator
//! while diagnostics go to tracing on stderr.

/// Success banner, shown after accepted mutations and manual refreshes.
pub fn success(message: &str) {
    println!("✅ {}", message);
}

/// Error banner for terminal failures.
pub fn error(message: &str) {
    println!("❌ {}", message);
}

/// Warning banner, mostly for throttled refreshes and degraded output.
pub fn warning(message: &str) {
    println!("⚠️  {}", message);
}

/// Neutral informational line.
pub fn info(message: &str) {
    println!("ℹ️  {}", message);
}
