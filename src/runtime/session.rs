use crate::{MockError, Result};
use serde::{Deserialize, Serialize};

/// Address used as both `tx-sender` and contract owner after a reset.
pub const DEFAULT_SENDER: &str = "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM";

/// Block height after a reset.
pub const DEFAULT_BLOCK_HEIGHT: u64 = 100;

/// Ambient chain state a contract call observes.
///
/// Owned by whoever drives the calls (a test, a scenario step, a CLI
/// command) and handed to the dispatcher by reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionContext {
    tx_sender: String,
    contract_owner: String,
    block_height: u64,
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            tx_sender: DEFAULT_SENDER.to_string(),
            contract_owner: DEFAULT_SENDER.to_string(),
            block_height: DEFAULT_BLOCK_HEIGHT,
        }
    }

    /// Reinitialize every field to its reset value.
    ///
    /// This is the only way block height can go backwards.
    pub fn reset(&mut self) {
        *self = Self::new();
        tracing::debug!(
            sender = DEFAULT_SENDER,
            block_height = DEFAULT_BLOCK_HEIGHT,
            "Session reset"
        );
    }

    pub fn tx_sender(&self) -> &str {
        &self.tx_sender
    }

    pub fn contract_owner(&self) -> &str {
        &self.contract_owner
    }

    pub fn block_height(&self) -> u64 {
        self.block_height
    }

    pub fn set_tx_sender(&mut self, sender: impl Into<String>) {
        self.tx_sender = sender.into();
    }

    pub fn set_contract_owner(&mut self, owner: impl Into<String>) {
        self.contract_owner = owner.into();
    }

    /// Mine `blocks` empty blocks.
    pub fn advance_blocks(&mut self, blocks: u64) -> Result<u64> {
        self.block_height = self.block_height.checked_add(blocks).ok_or_else(|| {
            MockError::SessionError(format!(
                "advancing {} blocks from height {} overflows",
                blocks, self.block_height
            ))
        })?;
        Ok(self.block_height)
    }

    /// Jump to `height`, which must not be below the current height.
    pub fn set_block_height(&mut self, height: u64) -> Result<()> {
        if height < self.block_height {
            return Err(MockError::SessionError(format!(
                "cannot move block height back from {} to {}",
                self.block_height, height
            ))
            .into());
        }
        self.block_height = height;
        Ok(())
    }
}
