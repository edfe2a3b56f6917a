//! Reveal-on-load animation timing for landing page sections.
//!
//! Cards fade in one after another; the delay grows with the card index and
//! is capped so long lists don't leave the last card invisible for seconds.

#[cfg(test)]
#[path = "animation_test.rs"]
mod animation_test;

pub const REVEAL_STEP_MS: u32 = 120;
pub const REVEAL_MAX_DELAY_MS: u32 = 600;

/// Delay before the `index`-th element starts its reveal.
pub fn reveal_delay_ms(index: usize) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(REVEAL_STEP_MS)
        .min(REVEAL_MAX_DELAY_MS)
}

/// Inline `style` value applying the reveal delay.
pub fn reveal_style(index: usize) -> String {
    format!("animation-delay: {}ms", reveal_delay_ms(index))
}
