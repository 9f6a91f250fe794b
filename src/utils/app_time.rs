//! Instant type that works on both targets; `std::time::Instant` panics on
//! wasm, so the monitor timers go through this alias.

#[cfg(not(target_arch = "wasm32"))]
pub type AppInstant = std::time::Instant;

#[cfg(target_arch = "wasm32")]
pub type AppInstant = web_time::Instant;

pub fn now() -> AppInstant {
    AppInstant::now()
}
