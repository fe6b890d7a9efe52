use epr_core::{EprError, EprResult};

/// Parameters of the EPR decision rule.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EprParams {
    /// Exploration strength, `0 < rho <= 1`.
    pub rho: f64,
    /// Decay of the exploration probability with the number of distinct
    /// visited cells, `gamma >= 0`.
    pub gamma: f64,
}

impl EprParams {
    pub const fn new(rho: f64, gamma: f64) -> Self {
        Self { rho, gamma }
    }

    /// `rho = 0.6, gamma = 0.21`, the empirically fitted human-mobility values.
    pub const REFERENCE: EprParams = EprParams::new(0.6, 0.21);

    pub fn validate(&self) -> EprResult<()> {
        if !(self.rho > 0.0 && self.rho <= 1.0) {
            return Err(EprError::InvalidArgument(format!(
                "rho must lie in (0, 1], got {}",
                self.rho
            )));
        }
        if !(self.gamma >= 0.0 && self.gamma.is_finite()) {
            return Err(EprError::InvalidArgument(format!(
                "gamma must be a non-negative finite number, got {}",
                self.gamma
            )));
        }
        Ok(())
    }
}

impl Default for EprParams {
    fn default() -> Self {
        Self::REFERENCE
    }
}
