//! Human-readable formatting helpers.

const KIB: u64 = 1024;
const MIB: u64 = 1024 * 1024;

/// Format a byte count for display (e.g., `512 B`, `3.4 KB`, `1.25 MB`).
pub fn format_bytes(bytes: u64) -> String {
    if bytes < KIB {
        format!("{} B", bytes)
    } else if bytes < MIB {
        format!("{:.1} KB", bytes as f64 / KIB as f64)
    } else {
        format!("{:.2} MB", bytes as f64 / MIB as f64)
    }
}
