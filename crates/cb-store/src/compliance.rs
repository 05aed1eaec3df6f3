//! Compliance tagging for units under calibration.
//!
//! While uncertainty mode is on, every UUC carries a randomly assigned
//! pass/fail/out-of-tolerance label. The label drives a panel badge and
//! scales the fluctuation amplitude. Toggling uncertainty off leaves
//! existing labels in place, inert, until the mode comes back on or the
//! device is recreated.

use cb_catalog::DeviceRole;
use cb_core::BenchRng;

use crate::component::Component;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplianceStatus {
    Compliance,
    NonCompliance,
    OutOfTolerance,
}

impl ComplianceStatus {
    pub const ALL: [ComplianceStatus; 3] = [
        ComplianceStatus::Compliance,
        ComplianceStatus::NonCompliance,
        ComplianceStatus::OutOfTolerance,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ComplianceStatus::Compliance => "compliance",
            ComplianceStatus::NonCompliance => "non_compliance",
            ComplianceStatus::OutOfTolerance => "out_of_tolerance",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == s)
    }

    /// Multiplier applied to the catalog tolerance when simulating
    /// display jitter for a device carrying this status.
    pub fn tolerance_scale(self) -> f64 {
        match self {
            ComplianceStatus::Compliance => 1.0,
            ComplianceStatus::NonCompliance => 3.0,
            ComplianceStatus::OutOfTolerance => 10.0,
        }
    }
}

/// Draw a status uniformly from the three non-null labels.
pub fn random_status(rng: &mut BenchRng) -> ComplianceStatus {
    *rng.pick(&ComplianceStatus::ALL)
}

/// Assign a fresh random status to every UUC on the bench.
///
/// Runs on the off→on transition of global uncertainty mode.
pub(crate) fn retag_all(components: &mut [Component], rng: &mut BenchRng) {
    for comp in components.iter_mut() {
        if comp.role() == Some(DeviceRole::Uuc) {
            comp.state.set_compliance(random_status(rng));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip() {
        for status in ComplianceStatus::ALL {
            assert_eq!(ComplianceStatus::from_str(status.as_str()), Some(status));
        }
        assert_eq!(ComplianceStatus::from_str("passed"), None);
    }

    #[test]
    fn scales_match_training_model() {
        assert_eq!(ComplianceStatus::Compliance.tolerance_scale(), 1.0);
        assert_eq!(ComplianceStatus::NonCompliance.tolerance_scale(), 3.0);
        assert_eq!(ComplianceStatus::OutOfTolerance.tolerance_scale(), 10.0);
    }

    #[test]
    fn random_status_covers_all_labels() {
        let mut rng = BenchRng::seeded(3);
        let mut seen = [false; 3];
        for _ in 0..100 {
            let status = random_status(&mut rng);
            seen[ComplianceStatus::ALL.iter().position(|c| *c == status).unwrap()] = true;
        }
        assert_eq!(seen, [true, true, true]);
    }
}
