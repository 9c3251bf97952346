use soroban_sdk::{
    contract, contractimpl, log, panic_with_error, token, Address, Env, String, Vec,
};

use crate::errors::WalletError;
use crate::events::{
    EtherTransferConfirmed, EtherTransferProposed, ProposalSigned, ProposalSubmitted, Received,
    SignatureUnlocked, TokenTransferConfirmed, TokenTransferProposed,
};
use crate::types::{
    DataKey, EtherTransfer, Phase, Proposal, ProposalKind, TokenTransfer,
    CONFIRMATION_THRESHOLD, INITIAL_VOTING_BALANCE, SIGNER_COUNT,
};

/// Shared wallet controlled by three signers.
///
/// A signer's voting balance is the permission token for every mutating call:
/// proposing spends it, and the proposal stays locked to that signer until a
/// different signer confirms and the balance is restored. Because the
/// proposer's balance is zero while its proposal is pending, the proposer can
/// never confirm its own action.
#[contract]
pub struct WalletContract;

#[contractimpl]
impl WalletContract {
    pub fn initialize(env: Env, signers: Vec<Address>, native_asset: Address) {
        if env.storage().instance().has(&DataKey::Initialized) {
            panic_with_error!(&env, WalletError::AlreadyInitialized);
        }

        if signers.len() != SIGNER_COUNT {
            panic_with_error!(&env, WalletError::InvalidSignerCount);
        }

        for i in 0..signers.len() {
            for j in (i + 1)..signers.len() {
                if signers.get_unchecked(i) == signers.get_unchecked(j) {
                    panic_with_error!(&env, WalletError::DuplicateSigner);
                }
            }
        }

        env.storage().instance().set(&DataKey::Initialized, &true);
        env.storage().instance().set(&DataKey::Signers, &signers);
        env.storage().instance().set(&DataKey::NativeAsset, &native_asset);
        env.storage().instance().set(&DataKey::Phase, &Phase::Initialized);

        for signer in signers.iter() {
            env.storage()
                .instance()
                .set(&DataKey::VotingBalance(signer), &INITIAL_VOTING_BALANCE);
        }

        log!(&env, "wallet initialized", signers);
    }

    /// Accepts native value into the wallet. Only a notification is recorded.
    pub fn deposit(env: Env, from: Address, amount: i128) {
        Self::require_initialized(&env);
        from.require_auth();

        let native_asset = Self::native_asset(env.clone());
        let wallet = env.current_contract_address();
        Self::dispatch_transfer(&env, &native_asset, &from, &wallet, amount);

        Received { from, amount }.publish(&env);
    }

    pub fn submit_proposal(env: Env, caller: Address, text: String) {
        Self::lock_vote(&env, &caller, Proposal::Text(text.clone()));
        ProposalSubmitted { text }.publish(&env);
    }

    pub fn sign_proposal(env: Env, caller: Address) {
        Self::confirm_pending(&env, &caller, Some(ProposalKind::Text));
    }

    pub fn propose_ether_transfer(
        env: Env,
        caller: Address,
        transferee: Address,
        amount: i128,
        details: String,
    ) {
        let transfer = EtherTransfer {
            transferee: transferee.clone(),
            amount,
            details: details.clone(),
        };
        Self::lock_vote(&env, &caller, Proposal::Ether(transfer));
        EtherTransferProposed {
            transferee,
            amount,
            details,
        }
        .publish(&env);
    }

    pub fn confirm_ether_transfer(env: Env, caller: Address) {
        Self::confirm_pending(&env, &caller, Some(ProposalKind::Ether));
    }

    pub fn propose_token_transfer(
        env: Env,
        caller: Address,
        transferee: Address,
        amount: i128,
        token: Address,
        details: String,
    ) {
        let transfer = TokenTransfer {
            transferee: transferee.clone(),
            amount,
            token: token.clone(),
            details: details.clone(),
        };
        Self::lock_vote(&env, &caller, Proposal::Token(transfer));
        TokenTransferProposed {
            transferee,
            token,
            amount,
            details,
        }
        .publish(&env);
    }

    pub fn confirm_token_transfer(env: Env, caller: Address) {
        Self::confirm_pending(&env, &caller, Some(ProposalKind::Token));
    }

    /// Confirms whatever is pending.
    pub fn confirm(env: Env, caller: Address) {
        Self::confirm_pending(&env, &caller, None);
    }

    pub fn is_authorized_signer(env: Env, identity: Address) -> bool {
        Self::require_initialized(&env);
        Self::balance_of(&env, &identity) > 0
    }

    pub fn voting_balance(env: Env, identity: Address) -> u32 {
        Self::require_initialized(&env);
        Self::balance_of(&env, &identity)
    }

    pub fn signers(env: Env) -> Vec<Address> {
        Self::require_initialized(&env);
        env.storage()
            .instance()
            .get(&DataKey::Signers)
            .unwrap_or_else(|| panic_with_error!(&env, WalletError::NotInitialized))
    }

    pub fn signer_count(env: Env) -> u32 {
        Self::signers(env).len()
    }

    pub fn threshold(env: Env) -> u32 {
        Self::require_initialized(&env);
        CONFIRMATION_THRESHOLD
    }

    pub fn native_asset(env: Env) -> Address {
        Self::require_initialized(&env);
        env.storage()
            .instance()
            .get(&DataKey::NativeAsset)
            .unwrap_or_else(|| panic_with_error!(&env, WalletError::NotInitialized))
    }

    pub fn phase(env: Env) -> Phase {
        Self::require_initialized(&env);
        Self::read_phase(&env)
    }

    pub fn proposal(env: Env) -> Option<Proposal> {
        Self::require_initialized(&env);
        env.storage().instance().get(&DataKey::Proposal)
    }

    pub fn locked_signer(env: Env) -> Option<Address> {
        Self::require_initialized(&env);
        env.storage().instance().get(&DataKey::LockedSigner)
    }

    fn require_initialized(env: &Env) {
        if !env.storage().instance().has(&DataKey::Initialized) {
            panic_with_error!(env, WalletError::NotInitialized);
        }
    }

    fn read_phase(env: &Env) -> Phase {
        env.storage()
            .instance()
            .get(&DataKey::Phase)
            .unwrap_or(Phase::Initialized)
    }

    fn balance_of(env: &Env, identity: &Address) -> u32 {
        env.storage()
            .instance()
            .get(&DataKey::VotingBalance(identity.clone()))
            .unwrap_or(0u32)
    }

    fn set_balance(env: &Env, identity: &Address, balance: u32) {
        env.storage()
            .instance()
            .set(&DataKey::VotingBalance(identity.clone()), &balance);
    }

    /// Spends the caller's vote and records `proposal` as the pending action.
    fn lock_vote(env: &Env, caller: &Address, proposal: Proposal) {
        Self::require_initialized(env);
        caller.require_auth();

        if Self::balance_of(env, caller) == 0 {
            panic_with_error!(env, WalletError::Unauthorized);
        }

        // Replacing a pending proposal would strand the earlier proposer's vote.
        if Self::read_phase(env) == Phase::Proposed {
            panic_with_error!(env, WalletError::ProposalPending);
        }

        if let Proposal::Ether(EtherTransfer { amount, .. })
        | Proposal::Token(TokenTransfer { amount, .. }) = &proposal
        {
            if *amount <= 0 {
                panic_with_error!(env, WalletError::InvalidAmount);
            }
        }

        let balance = Self::balance_of(env, caller)
            .checked_sub(1)
            .unwrap_or_else(|| panic_with_error!(env, WalletError::InsufficientVotingRight));
        Self::set_balance(env, caller, balance);

        env.storage().instance().set(&DataKey::Phase, &Phase::Proposed);
        env.storage().instance().set(&DataKey::Proposal, &proposal);
        env.storage().instance().set(&DataKey::LockedSigner, caller);

        log!(env, "voting right locked", caller.clone());
    }

    /// Releases the locked signer's vote and carries out the pending action.
    ///
    /// State is reset before any transfer is dispatched; a failed transfer
    /// aborts the invocation and the host discards every write made here.
    fn confirm_pending(env: &Env, caller: &Address, expected: Option<ProposalKind>) {
        Self::require_initialized(env);
        caller.require_auth();

        if Self::read_phase(env) != Phase::Proposed {
            panic_with_error!(env, WalletError::NoProposalPending);
        }

        // The proposer fails here: its own balance is zero until released.
        if Self::balance_of(env, caller) == 0 {
            panic_with_error!(env, WalletError::Unauthorized);
        }

        let proposal: Proposal = env
            .storage()
            .instance()
            .get(&DataKey::Proposal)
            .unwrap_or_else(|| panic_with_error!(env, WalletError::NoProposalPending));

        if let Some(kind) = expected {
            if proposal.kind() != kind {
                panic_with_error!(env, WalletError::ProposalKindMismatch);
            }
        }

        let locked_signer: Address = env
            .storage()
            .instance()
            .get(&DataKey::LockedSigner)
            .unwrap_or_else(|| panic_with_error!(env, WalletError::NoProposalPending));

        env.storage().instance().set(&DataKey::Phase, &Phase::Initialized);

        let balance = Self::balance_of(env, &locked_signer)
            .checked_add(1)
            .unwrap_or_else(|| panic_with_error!(env, WalletError::VotingRightOverflow));
        Self::set_balance(env, &locked_signer, balance);

        env.storage().instance().remove(&DataKey::Proposal);
        env.storage().instance().remove(&DataKey::LockedSigner);

        let wallet = env.current_contract_address();
        match proposal {
            Proposal::Text(_) => {
                ProposalSigned {}.publish(env);
            }
            Proposal::Ether(transfer) => {
                let native_asset: Address = env
                    .storage()
                    .instance()
                    .get(&DataKey::NativeAsset)
                    .unwrap_or_else(|| panic_with_error!(env, WalletError::NotInitialized));
                log!(env, "dispatching native transfer", transfer.transferee.clone(), transfer.amount);
                Self::dispatch_transfer(
                    env,
                    &native_asset,
                    &wallet,
                    &transfer.transferee,
                    transfer.amount,
                );
                EtherTransferConfirmed {}.publish(env);
            }
            Proposal::Token(transfer) => {
                log!(env, "dispatching token transfer", transfer.token.clone(), transfer.amount);
                Self::dispatch_transfer(
                    env,
                    &transfer.token,
                    &wallet,
                    &transfer.transferee,
                    transfer.amount,
                );
                TokenTransferConfirmed {}.publish(env);
            }
        }

        log!(env, "voting right released", locked_signer.clone());
        SignatureUnlocked {
            signer: locked_signer,
        }
        .publish(env);
    }

    fn dispatch_transfer(env: &Env, asset: &Address, from: &Address, to: &Address, amount: i128) {
        let token_client = token::Client::new(env, asset);

        match token_client.try_transfer(from, to, &amount) {
            Ok(Ok(())) => {}
            _ => panic_with_error!(env, WalletError::TransferFailed),
        }
    }
}
