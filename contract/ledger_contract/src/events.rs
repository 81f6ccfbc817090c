use basket_types::{BasketId, ProposalId};
use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalCreatedEvent {
    pub proposal_id: ProposalId,
    pub proposer: Address,
    pub kind: Symbol,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalAcceptedEvent {
    pub proposal_id: ProposalId,
    pub accepted_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalExecutedEvent {
    pub proposal_id: ProposalId,
    pub basket_id: BasketId,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalCancelledEvent {
    pub proposal_id: ProposalId,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AddressChangedEvent {
    pub old: Address,
    pub new: Address,
}

pub fn emit_proposal_created(env: &Env, event: ProposalCreatedEvent) {
    env.events()
        .publish((Symbol::new(env, "proposal_created"), event.proposal_id), event);
}

pub fn emit_proposal_accepted(env: &Env, event: ProposalAcceptedEvent) {
    env.events()
        .publish((Symbol::new(env, "proposal_accepted"), event.proposal_id), event);
}

pub fn emit_proposal_executed(env: &Env, event: ProposalExecutedEvent) {
    env.events()
        .publish((Symbol::new(env, "proposal_executed"), event.proposal_id), event);
}

pub fn emit_proposal_cancelled(env: &Env, event: ProposalCancelledEvent) {
    env.events()
        .publish((Symbol::new(env, "proposal_cancelled"), event.proposal_id), event);
}

pub fn emit_operator_changed(env: &Env, event: AddressChangedEvent) {
    env.events().publish(
        (Symbol::new(env, "param_changed"), symbol_short!("operator")),
        event,
    );
}

pub fn emit_escrow_factory_changed(env: &Env, event: AddressChangedEvent) {
    env.events().publish(
        (Symbol::new(env, "param_changed"), symbol_short!("factory")),
        event,
    );
}
