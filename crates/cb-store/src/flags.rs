//! Global simulation flags.

/// Process-wide error-simulation switches.
///
/// `uncertainty_mode` is the legacy global toggle; the per-error switches
/// came later and overlap with it for resolution jitter. The engine
/// derives one boolean from the pair instead of re-checking both
/// everywhere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimFlags {
    pub uncertainty_mode: bool,
    pub loading_error: bool,
    pub resolution_uncertainty: bool,
    /// Reserved: declared by the panel but consumed by nothing yet.
    pub instrument_error: bool,
}

impl SimFlags {
    /// Whether resolution-uncertainty jitter is in effect.
    pub fn resolution_active(&self) -> bool {
        self.uncertainty_mode || self.resolution_uncertainty
    }
}

/// Addressable per-error-type switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorFlag {
    LoadingError,
    ResolutionUncertainty,
    InstrumentError,
}
