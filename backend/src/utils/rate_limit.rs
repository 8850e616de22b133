use std::num::NonZeroU32;

use governor::{DefaultKeyedRateLimiter, Quota, RateLimiter};
use nonzero_ext::nonzero;

/// Contact submissions allowed per client and minute.
pub const CONTACT_PER_MINUTE: u32 = 5;

/// Per-client quota for the contact endpoint, keyed by client address.
pub struct ContactLimiter {
    inner: DefaultKeyedRateLimiter<String>,
}

impl ContactLimiter {
    pub fn per_minute(limit: u32) -> Self {
        let limit = NonZeroU32::new(limit).unwrap_or(nonzero!(1u32));
        Self {
            inner: RateLimiter::keyed(Quota::per_minute(limit)),
        }
    }

    /// Takes one cell from the client's quota if any is left.
    pub fn allow(&self, client: &str) -> bool {
        self.inner.check_key(&client.to_string()).is_ok()
    }

    /// Drops clients whose quota has fully refilled. Returns how many are
    /// still tracked.
    pub fn prune(&self) -> usize {
        self.inner.retain_recent();
        self.inner.shrink_to_fit();
        self.inner.len()
    }
}

impl Default for ContactLimiter {
    fn default() -> Self {
        Self::per_minute(CONTACT_PER_MINUTE)
    }
}
