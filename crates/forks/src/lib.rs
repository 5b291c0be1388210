//! Height-gated consensus behaviour switches.
//!
//! The trie core is handed a value-typed [`ForkRules`] at open time and
//! reads the relevant threshold at each call site; there is no dynamic
//! dispatch between rule eras.

#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

mod normalization;
mod workarounds;

pub use normalization::normalize_name;
pub use workarounds::{takeover_workaround_exists, TAKEOVER_WORKAROUND_CUTOFF};

/// Upper bound on the activation delay of a new claim, in blocks.
pub const MAX_ACTIVATION_DELAY: u32 = 4032;

/// Activation heights and parameters of the consensus forks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ForkRules {
    /// Height above which names are Unicode-normalized into trie keys.
    pub normalization_fork_height: u32,
    /// Claim lifetime before the expiration fork, in blocks.
    pub original_expiration_time: u32,
    /// Claim lifetime from the expiration fork onward, in blocks.
    pub extended_expiration_time: u32,
    /// Height at which the extended expiration time activates.
    pub extended_expiration_fork_height: u32,
    /// Height from which every active claim participates in node hashes.
    pub all_claims_in_merkle_fork_height: u32,
    /// Divisor applied to the ownership duration when computing delays.
    pub proportional_delay_factor: u32,
}

impl ForkRules {
    /// Mainnet fork schedule.
    pub const fn mainnet() -> Self {
        Self {
            normalization_fork_height: 539_940,
            original_expiration_time: 262_974,
            extended_expiration_time: 2_102_400,
            extended_expiration_fork_height: 400_155,
            all_claims_in_merkle_fork_height: 658_309,
            proportional_delay_factor: 32,
        }
    }

    /// Testnet fork schedule.
    pub const fn testnet() -> Self {
        Self {
            normalization_fork_height: 993_380,
            original_expiration_time: 262_974,
            extended_expiration_time: 2_102_400,
            extended_expiration_fork_height: 278_160,
            all_claims_in_merkle_fork_height: 1_198_559,
            proportional_delay_factor: 32,
        }
    }

    /// Regtest fork schedule with short lifetimes for local testing.
    pub const fn regtest() -> Self {
        Self {
            normalization_fork_height: 250,
            original_expiration_time: 500,
            extended_expiration_time: 600,
            extended_expiration_fork_height: 800,
            all_claims_in_merkle_fork_height: 350,
            proportional_delay_factor: 32,
        }
    }

    /// Claim lifetime applicable at `height`.
    pub const fn expiration_time(&self, height: u32) -> u32 {
        if height < self.extended_expiration_fork_height {
            self.original_expiration_time
        } else {
            self.extended_expiration_time
        }
    }

    /// Number of blocks the expiration fork adds to pending expirations.
    pub const fn expiration_extension(&self) -> u32 {
        self.extended_expiration_time - self.original_expiration_time
    }

    /// True once lookups and inserts must normalize names.
    pub const fn should_normalize(&self, height: u32) -> bool {
        height > self.normalization_fork_height
    }

    /// True once node hashes cover every active claim.
    pub const fn all_claims_in_merkle(&self, height: u32) -> bool {
        height >= self.all_claims_in_merkle_fork_height
    }

    /// True once supports may carry metadata.
    pub const fn allow_support_metadata(&self, height: u32) -> bool {
        height >= self.all_claims_in_merkle_fork_height
    }
}
