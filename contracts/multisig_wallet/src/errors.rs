use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum WalletError {
    NotInitialized = 0,
    AlreadyInitialized = 1,
    InvalidSignerCount = 2,
    DuplicateSigner = 3,
    Unauthorized = 4,
    InsufficientVotingRight = 5,
    NoProposalPending = 6,
    ProposalPending = 7,
    ProposalKindMismatch = 8,
    InvalidAmount = 9,
    TransferFailed = 10,
    VotingRightOverflow = 11,
}
