//! User-Agent selection.
//!
//! Each search picks one identity from a fixed list of desktop browser
//! strings so consecutive runs do not share a fingerprint. This is not an
//! evasion guarantee, just variation.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Realistic desktop browser User-Agent strings.
pub const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:133.0) Gecko/20100101 Firefox/133.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:133.0) Gecko/20100101 Firefox/133.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/18.1 Safari/605.1.15",
];

/// Picks User-Agent strings from [`USER_AGENTS`] using its own random source.
#[derive(Debug, Clone)]
pub struct IdentitySelector {
    rng: StdRng,
}

impl Default for IdentitySelector {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentitySelector {
    /// Selector seeded from operating system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Selector with a fixed seed; the same seed yields the same sequence.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniformly random entry from [`USER_AGENTS`].
    pub fn next_identity(&mut self) -> &'static str {
        USER_AGENTS
            .choose(&mut self.rng)
            .copied()
            // SAFETY: USER_AGENTS is a non-empty const array, choose only returns None on empty slices
            .unwrap_or(USER_AGENTS[0])
    }

    /// Return `explicit` exactly as given when it is set and not blank,
    /// otherwise a random entry.
    pub fn resolve(&mut self, explicit: Option<&str>) -> String {
        match explicit {
            Some(ua) if !ua.trim().is_empty() => ua.to_string(),
            _ => self.next_identity().to_string(),
        }
    }
}
