#![no_std]

mod errors;
mod events;
mod types;
mod wallet;

pub use errors::WalletError;
pub use types::{EtherTransfer, Phase, Proposal, TokenTransfer};
pub use wallet::{WalletContract, WalletContractClient};
