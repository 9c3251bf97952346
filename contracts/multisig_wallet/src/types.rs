use soroban_sdk::{contracttype, Address, String};

pub const SIGNER_COUNT: u32 = 3;
// Effective quorum: the proposer's locked vote plus one confirmation.
pub const CONFIRMATION_THRESHOLD: u32 = 2;
pub const INITIAL_VOTING_BALANCE: u32 = 1;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Initialized,
    Signers,
    NativeAsset,
    VotingBalance(Address),
    Phase,
    Proposal,
    LockedSigner,
}

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Phase {
    Initialized,
    Proposed,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EtherTransfer {
    pub transferee: Address,
    pub amount: i128,
    pub details: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenTransfer {
    pub transferee: Address,
    pub amount: i128,
    pub token: Address,
    pub details: String,
}

/// The single action awaiting a second signer.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Proposal {
    Text(String),
    Ether(EtherTransfer),
    Token(TokenTransfer),
}

/// Which confirm entry point was used; `confirm` accepts any pending kind.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum ProposalKind {
    Text,
    Ether,
    Token,
}

impl Proposal {
    pub(crate) fn kind(&self) -> ProposalKind {
        match self {
            Proposal::Text(_) => ProposalKind::Text,
            Proposal::Ether(_) => ProposalKind::Ether,
            Proposal::Token(_) => ProposalKind::Token,
        }
    }
}
