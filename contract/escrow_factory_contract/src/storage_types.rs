use basket_types::{ContractError, EscrowId, ProposalId};
use soroban_sdk::{contracttype, Address, Env};

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    StakeToken,
    LockDuration,
    StakeAmount,
    Ledger,
    NextEscrowId,
}

// Storage keys for persistent data
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Escrow(EscrowId),
    ProposalEscrow(ProposalId),
}

/// Stake held against one proposal. The stake parameters in force at
/// creation are copied in, so later setter calls never touch it.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Escrow {
    pub id: EscrowId,
    pub proposal_id: ProposalId,
    pub proposer: Address,
    pub created_at: u64,
    pub locked_amount: i128,
    pub lock_duration: u64,
    pub stake_token: Address,
    pub withdrawn: bool,
}

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

pub fn read_lock_duration(e: &Env) -> Result<u64, ContractError> {
    e.storage()
        .instance()
        .get(&DataKey::LockDuration)
        .ok_or(ContractError::NotInitialized)
}

pub fn read_stake_amount(e: &Env) -> Result<i128, ContractError> {
    e.storage()
        .instance()
        .get(&DataKey::StakeAmount)
        .ok_or(ContractError::NotInitialized)
}

pub fn read_escrow(e: &Env, id: EscrowId) -> Result<Escrow, ContractError> {
    e.storage()
        .persistent()
        .get(&PersistentKey::Escrow(id))
        .ok_or(ContractError::EscrowNotFound)
}

pub fn write_escrow(e: &Env, escrow: &Escrow) {
    let key = PersistentKey::Escrow(escrow.id);
    e.storage().persistent().set(&key, escrow);
    extend_persistent(e, &key);
}

pub fn read_proposal_escrow(e: &Env, proposal_id: ProposalId) -> Option<EscrowId> {
    e.storage()
        .persistent()
        .get(&PersistentKey::ProposalEscrow(proposal_id))
}

pub fn write_proposal_escrow(e: &Env, proposal_id: ProposalId, escrow_id: EscrowId) {
    let key = PersistentKey::ProposalEscrow(proposal_id);
    e.storage().persistent().set(&key, &escrow_id);
    extend_persistent(e, &key);
}

/// Hand out the next escrow id. Ids start at 1.
pub fn next_escrow_id(e: &Env) -> EscrowId {
    let id: EscrowId = e
        .storage()
        .instance()
        .get(&DataKey::NextEscrowId)
        .unwrap_or(1);
    e.storage().instance().set(&DataKey::NextEscrowId, &(id + 1));
    id
}

pub fn escrow_count(e: &Env) -> u64 {
    let next: EscrowId = e
        .storage()
        .instance()
        .get(&DataKey::NextEscrowId)
        .unwrap_or(1);
    next - 1
}
