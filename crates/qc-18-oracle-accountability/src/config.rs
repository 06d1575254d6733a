//! Configuration for Oracle Accountability Subsystem
//!
//! Node-local settings only. Anything that affects consensus lives in
//! `OracleParams` and is set by governance.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountabilityConfig {
    /// Buffer outgoing events for the block's event log
    pub emit_events: bool,
    /// Log skipped validators at info level instead of debug
    pub log_skipped_validators: bool,
}

impl Default for AccountabilityConfig {
    fn default() -> Self {
        Self {
            emit_events: true,
            log_skipped_validators: false,
        }
    }
}
