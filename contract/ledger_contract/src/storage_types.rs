use basket_types::{Basket, BasketId, ContractError, Proposal, ProposalId};
use soroban_sdk::{contracttype, Address, Env};

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Owner,
    Operator,
    Vault,
    Reserve,
    EscrowFactory,
    ProposalCount,
    CurrentBasket,
    BasketCount,
}

// Storage keys for persistent data
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Proposal(ProposalId),
    Basket(BasketId),
}

/// Seconds an accepted proposal must wait; execution needs strictly more.
pub const ACCEPT_DELAY: u64 = 86_400;

pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days

pub fn extend_instance(e: &Env) {
    e.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

pub fn extend_persistent(e: &Env, key: &PersistentKey) {
    e.storage()
        .persistent()
        .extend_ttl(key, TTL_PERSISTENT, TTL_PERSISTENT);
}

pub fn read_address(e: &Env, key: &DataKey) -> Result<Address, ContractError> {
    e.storage()
        .instance()
        .get(key)
        .ok_or(ContractError::NotInitialized)
}

pub fn read_proposal(e: &Env, id: ProposalId) -> Result<Proposal, ContractError> {
    e.storage()
        .persistent()
        .get(&PersistentKey::Proposal(id))
        .ok_or(ContractError::ProposalNotFound)
}

pub fn write_proposal(e: &Env, proposal: &Proposal) {
    let key = PersistentKey::Proposal(proposal.id);
    e.storage().persistent().set(&key, proposal);
    extend_persistent(e, &key);
}

/// Append a proposal to the registry under the next id.
pub fn next_proposal_id(e: &Env) -> ProposalId {
    let id: ProposalId = e
        .storage()
        .instance()
        .get(&DataKey::ProposalCount)
        .unwrap_or(0);
    e.storage().instance().set(&DataKey::ProposalCount, &(id + 1));
    id
}

pub fn proposal_count(e: &Env) -> u64 {
    e.storage()
        .instance()
        .get(&DataKey::ProposalCount)
        .unwrap_or(0)
}

pub fn read_current_basket_id(e: &Env) -> Result<BasketId, ContractError> {
    e.storage()
        .instance()
        .get(&DataKey::CurrentBasket)
        .ok_or(ContractError::NotInitialized)
}

pub fn read_basket(e: &Env, id: BasketId) -> Result<Basket, ContractError> {
    e.storage()
        .persistent()
        .get(&PersistentKey::Basket(id))
        .ok_or(ContractError::InvalidBasket)
}

pub fn read_current_basket(e: &Env) -> Result<Basket, ContractError> {
    read_basket(e, read_current_basket_id(e)?)
}

/// Store `basket` as a new snapshot and point the ledger at it. Earlier
/// snapshots are left untouched.
pub fn install_basket(e: &Env, basket: &Basket) -> BasketId {
    let id: BasketId = e
        .storage()
        .instance()
        .get(&DataKey::BasketCount)
        .unwrap_or(0);
    let key = PersistentKey::Basket(id);
    e.storage().persistent().set(&key, basket);
    extend_persistent(e, &key);

    e.storage().instance().set(&DataKey::BasketCount, &(id + 1));
    e.storage().instance().set(&DataKey::CurrentBasket, &id);
    id
}
