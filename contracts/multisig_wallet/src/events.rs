use soroban_sdk::{contractevent, Address, String};

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Received {
    #[topic]
    pub from: Address,
    pub amount: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalSubmitted {
    pub text: String,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalSigned {}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EtherTransferProposed {
    #[topic]
    pub transferee: Address,
    pub amount: i128,
    pub details: String,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EtherTransferConfirmed {}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenTransferProposed {
    #[topic]
    pub transferee: Address,
    #[topic]
    pub token: Address,
    pub amount: i128,
    pub details: String,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenTransferConfirmed {}

/// `signer` has its vote back and may propose or confirm again.
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SignatureUnlocked {
    #[topic]
    pub signer: Address,
}
