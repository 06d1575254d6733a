use crate::domain::OracleParams;
use crate::error::ParamsError;
use crate::ports::ParamsProvider;
use parking_lot::RwLock;
use shared_types::Dec;
use tracing::info;

/// Parameter store updated by governance.
///
/// Updates are validated before they land; a rejected update leaves the
/// previous params in force.
#[derive(Debug)]
pub struct GovernedParams {
    params: RwLock<OracleParams>,
}

impl GovernedParams {
    pub fn new(params: OracleParams) -> Result<Self, ParamsError> {
        params.validate()?;
        Ok(Self {
            params: RwLock::new(params),
        })
    }

    pub fn set_params(&self, params: OracleParams) -> Result<(), ParamsError> {
        params.validate()?;
        info!(
            "[qc-18] Oracle params updated: vote_period={} slash_window={} min_valid={} slash_fraction={}",
            params.vote_period, params.slash_window, params.min_valid_per_window, params.slash_fraction
        );
        *self.params.write() = params;
        Ok(())
    }

    pub fn vote_period(&self) -> u64 {
        self.params.read().vote_period
    }

    pub fn slash_window(&self) -> u64 {
        self.params.read().slash_window
    }

    pub fn min_valid_per_window(&self) -> Dec {
        self.params.read().min_valid_per_window
    }

    pub fn slash_fraction(&self) -> Dec {
        self.params.read().slash_fraction
    }
}

impl Default for GovernedParams {
    fn default() -> Self {
        Self {
            params: RwLock::new(OracleParams::default()),
        }
    }
}

impl ParamsProvider for GovernedParams {
    fn params(&self) -> OracleParams {
        self.params.read().clone()
    }
}
