/// Seed for the shuffle and burst generators, drawn from `Math.random`.
pub(crate) fn js_random_seed() -> u64 {
    let bytes: [u8; 8] = std::array::from_fn(|_| (256. * js_sys::Math::random()) as u8);
    u64::from_be_bytes(bytes)
}

/// Whole milliseconds for gloo timers, saturating at `u32::MAX`.
pub(crate) fn timer_millis(duration: std::time::Duration) -> u32 {
    duration.as_millis().try_into().unwrap_or(u32::MAX)
}
