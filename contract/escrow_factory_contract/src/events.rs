use basket_types::{EscrowId, ProposalId};
use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakeLockedEvent {
    pub escrow_id: EscrowId,
    pub proposal_id: ProposalId,
    pub proposer: Address,
    pub amount: i128,
    pub unlock_after: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakeReleasedEvent {
    pub escrow_id: EscrowId,
    pub proposer: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AddressChangedEvent {
    pub old: Address,
    pub new: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DurationChangedEvent {
    pub old: u64,
    pub new: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AmountChangedEvent {
    pub old: i128,
    pub new: i128,
}

pub fn emit_stake_locked(env: &Env, event: StakeLockedEvent) {
    env.events()
        .publish((Symbol::new(env, "stake_locked"), event.escrow_id), event);
}

pub fn emit_stake_released(env: &Env, event: StakeReleasedEvent) {
    env.events()
        .publish((Symbol::new(env, "stake_released"), event.escrow_id), event);
}

pub fn emit_stake_token_changed(env: &Env, event: AddressChangedEvent) {
    env.events().publish(
        (Symbol::new(env, "param_changed"), symbol_short!("token")),
        event,
    );
}

pub fn emit_ledger_changed(env: &Env, event: AddressChangedEvent) {
    env.events().publish(
        (Symbol::new(env, "param_changed"), symbol_short!("ledger")),
        event,
    );
}

pub fn emit_lock_duration_changed(env: &Env, event: DurationChangedEvent) {
    env.events().publish(
        (Symbol::new(env, "param_changed"), symbol_short!("duration")),
        event,
    );
}

pub fn emit_stake_amount_changed(env: &Env, event: AmountChangedEvent) {
    env.events().publish(
        (Symbol::new(env, "param_changed"), symbol_short!("amount")),
        event,
    );
}
