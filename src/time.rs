//! Monotonic time since program start

use std::sync::OnceLock;
use std::time::Instant;

pub fn now_seconds() -> f64 {
    static START: OnceLock<Instant> = OnceLock::new();
    START.get_or_init(Instant::now).elapsed().as_secs_f64()
}
