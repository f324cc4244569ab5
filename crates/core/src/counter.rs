//! Hero banner click counter.
//!
//! Every [`HeroClick`] handle returned by [`use_hero_click`] shares one
//! process-wide count.

use std::sync::atomic::{AtomicU64, Ordering};

static HERO_CLICKS: ClickCounter = ClickCounter::new();

/// A lock-free click counter.
#[derive(Debug, Default)]
pub struct ClickCounter {
    count: AtomicU64,
}

impl ClickCounter {
    pub const fn new() -> Self {
        Self { count: AtomicU64::new(0) }
    }

    /// Record one click and return the new count.
    pub fn trigger_click(&self) -> u64 {
        self.count.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn click_count(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }
}

/// Handle onto the shared hero click count.
#[derive(Debug, Clone, Copy)]
pub struct HeroClick {
    counter: &'static ClickCounter,
}

impl HeroClick {
    pub fn trigger_click(&self) -> u64 {
        self.counter.trigger_click()
    }

    pub fn click_count(&self) -> u64 {
        self.counter.click_count()
    }
}

pub fn use_hero_click() -> HeroClick {
    HeroClick { counter: &HERO_CLICKS }
}
