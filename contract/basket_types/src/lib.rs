#![no_std]

//! Types shared by the ledger, escrow factory and vault contracts.
//!
//! Everything that crosses a contract boundary lives here: the proposal
//! record and its payload variants, the basket snapshot, the error codes and
//! the client interfaces each contract uses to call the others.

#[cfg(test)]
mod test;

use soroban_sdk::{contractclient, contracterror, contracttype, Address, Env, Vec};

pub type ProposalId = u64;
pub type EscrowId = u64;
pub type BasketId = u32;

/// Fixed-point scale of basket weights. A weight equal to `WEIGHT_SCALE`
/// requires one collateral unit per unit of issued supply.
pub const WEIGHT_SCALE: i128 = 10_000_000;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    WrongSigner = 4,
    InvalidState = 5,
    InsufficientFunds = 6,
    InsufficientStake = 7,
    InvalidParameter = 8,
    AlreadyReleased = 9,
    AlreadyCompleted = 10,
    TooEarly = 11,
    ProposalNotFound = 12,
    EscrowNotFound = 13,
    InvalidBasket = 14,
    ArithmeticError = 15,
    LedgerUnavailable = 16,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
#[repr(u32)]
pub enum ProposalState {
    Created = 0,
    Accepted = 1,
    Cancelled = 2,
    Completed = 3,
}

impl ProposalState {
    pub fn is_terminal(self) -> bool {
        matches!(self, ProposalState::Cancelled | ProposalState::Completed)
    }

    /// Legal edges: Created -> Accepted -> Completed, and Created/Accepted -> Cancelled.
    pub fn can_transition_to(self, next: ProposalState) -> bool {
        matches!(
            (self, next),
            (ProposalState::Created, ProposalState::Accepted)
                | (ProposalState::Accepted, ProposalState::Completed)
                | (ProposalState::Created, ProposalState::Cancelled)
                | (ProposalState::Accepted, ProposalState::Cancelled)
        )
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum Direction {
    ToVault,
    FromVault,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SwapLeg {
    pub token: Address,
    pub amount: i128,
    pub direction: Direction,
}

/// Immutable snapshot of collateral tokens and their weights.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Basket {
    pub tokens: Vec<Address>,
    pub weights: Vec<i128>,
}

impl Basket {
    pub fn len(&self) -> u32 {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn position(&self, token: &Address) -> Option<u32> {
        for (i, candidate) in self.tokens.iter().enumerate() {
            if candidate == *token {
                return Some(i as u32);
            }
        }
        None
    }

    /// Weight of `token`, zero when the token is not part of the basket.
    pub fn weight_of(&self, token: &Address) -> i128 {
        self.position(token)
            .and_then(|i| self.weights.get(i))
            .unwrap_or(0)
    }

    /// Non-empty, matching lengths, strictly positive weights, no duplicates.
    pub fn is_well_formed(&self) -> bool {
        if self.is_empty() || self.len() != self.weights.len() {
            return false;
        }
        for (i, token) in self.tokens.iter().enumerate() {
            if self.weights.get(i as u32).unwrap_or(0) <= 0 {
                return false;
            }
            if self.position(&token) != Some(i as u32) {
                return false;
            }
        }
        true
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub enum ProposalPayload {
    Swap(Vec<SwapLeg>),
    Weights(Basket),
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Proposal {
    pub id: ProposalId,
    pub proposer: Address,
    pub state: ProposalState,
    pub created_at: u64,
    pub accepted_at: Option<u64>,
    pub payload: ProposalPayload,
}

/// Ledger entry points the escrow factory relies on.
#[contractclient(name = "LedgerClient")]
pub trait LedgerInterface {
    fn propose_swap(
        env: Env,
        caller: Address,
        proposer: Address,
        tokens: Vec<Address>,
        amounts: Vec<i128>,
        directions: Vec<Direction>,
    ) -> Result<ProposalId, ContractError>;

    fn propose_weights(
        env: Env,
        caller: Address,
        proposer: Address,
        tokens: Vec<Address>,
        weights: Vec<i128>,
    ) -> Result<ProposalId, ContractError>;

    fn cancel_proposal(env: Env, caller: Address, id: ProposalId) -> Result<(), ContractError>;

    fn get_proposal(env: Env, id: ProposalId) -> Result<Proposal, ContractError>;

    fn get_owner(env: Env) -> Result<Address, ContractError>;

    fn get_operator(env: Env) -> Result<Address, ContractError>;
}

/// Collateral custody as seen by the ledger.
#[contractclient(name = "VaultClient")]
pub trait VaultInterface {
    fn withdraw_to(
        env: Env,
        caller: Address,
        token: Address,
        amount: i128,
        to: Address,
    ) -> Result<(), ContractError>;

    fn balance(env: Env, token: Address) -> i128;
}

/// Outstanding supply of the issued token.
#[contractclient(name = "ReserveClient")]
pub trait ReserveInterface {
    fn total_supply(env: Env) -> i128;
}
