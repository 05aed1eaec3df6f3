use core::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a placed device instance.
///
/// Ids are handed out by the store from a strictly increasing counter and
/// are never reused within a session, so a dangling reference (e.g. from a
/// wire whose endpoint was deleted) can never silently resolve to a newer
/// device.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentId(u64);

impl ComponentId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ComponentId({})", self.0)
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_round_trip() {
        for raw in [0_u64, 1, 42, u64::MAX] {
            assert_eq!(ComponentId::new(raw).raw(), raw);
        }
    }

    #[test]
    fn ordering_follows_raw() {
        assert!(ComponentId::new(3) < ComponentId::new(7));
    }
}
