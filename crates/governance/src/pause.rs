use serde::{Deserialize, Serialize};

use crate::errors::BridgeError;

/// Gate that blocks every mutating entry point except `unpause`.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct PauseGate {
    paused: bool,
}

impl PauseGate {
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn ensure_not_paused(&self) -> Result<(), BridgeError> {
        if self.paused {
            return Err(BridgeError::Paused);
        }
        Ok(())
    }

    pub fn ensure_paused(&self) -> Result<(), BridgeError> {
        if !self.paused {
            return Err(BridgeError::NotPaused);
        }
        Ok(())
    }

    pub(crate) fn engage(&mut self) {
        self.paused = true;
    }

    pub(crate) fn release(&mut self) {
        self.paused = false;
    }
}
