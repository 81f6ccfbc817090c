#![no_std]

mod basket;
mod events;
mod execution;
mod storage_types;


use basket_types::{
    Basket, BasketId, ContractError, Direction, Proposal, ProposalId, ProposalPayload,
    ProposalState, SwapLeg,
};
use soroban_sdk::{contract, contractimpl, log, symbol_short, Address, Env, Vec};
use storage_types::*;

pub use storage_types::ACCEPT_DELAY;

#[contract]
pub struct LedgerContract;

#[contractimpl]
impl LedgerContract {
    /// Wire the ledger to its collaborators and record the starting basket.
    pub fn initialize(
        e: Env,
        owner: Address,
        operator: Address,
        vault: Address,
        reserve: Address,
        escrow_factory: Address,
        basket: Basket,
    ) -> Result<(), ContractError> {
        if e.storage().instance().has(&DataKey::Owner) {
            return Err(ContractError::AlreadyInitialized);
        }
        basket::validate(&basket)?;

        e.storage().instance().set(&DataKey::Owner, &owner);
        e.storage().instance().set(&DataKey::Operator, &operator);
        e.storage().instance().set(&DataKey::Vault, &vault);
        e.storage().instance().set(&DataKey::Reserve, &reserve);
        e.storage().instance().set(&DataKey::EscrowFactory, &escrow_factory);
        e.storage().instance().set(&DataKey::ProposalCount, &0u64);
        install_basket(&e, &basket);

        extend_instance(&e);
        Ok(())
    }

    /// Register a swap proposal. Only the escrow factory may call this.
    pub fn propose_swap(
        e: Env,
        caller: Address,
        proposer: Address,
        tokens: Vec<Address>,
        amounts: Vec<i128>,
        directions: Vec<Direction>,
    ) -> Result<ProposalId, ContractError> {
        require_escrow_factory(&e, &caller)?;

        if tokens.is_empty() || tokens.len() != amounts.len() || tokens.len() != directions.len() {
            return Err(ContractError::InvalidParameter);
        }

        let mut legs = Vec::new(&e);
        for i in 0..tokens.len() {
            let amount = amounts.get_unchecked(i);
            if amount <= 0 {
                return Err(ContractError::InvalidParameter);
            }
            legs.push_back(SwapLeg {
                token: tokens.get_unchecked(i),
                amount,
                direction: directions.get_unchecked(i),
            });
        }

        Ok(register(&e, proposer, ProposalPayload::Swap(legs)))
    }

    /// Register a re-weighting proposal. Only the escrow factory may call this.
    pub fn propose_weights(
        e: Env,
        caller: Address,
        proposer: Address,
        tokens: Vec<Address>,
        weights: Vec<i128>,
    ) -> Result<ProposalId, ContractError> {
        require_escrow_factory(&e, &caller)?;

        let target = Basket { tokens, weights };
        if !target.is_well_formed() {
            return Err(ContractError::InvalidParameter);
        }

        Ok(register(&e, proposer, ProposalPayload::Weights(target)))
    }

    /// Cancel a live proposal. Only the escrow factory may call this; it owns
    /// the signer rules.
    pub fn cancel_proposal(e: Env, caller: Address, id: ProposalId) -> Result<(), ContractError> {
        require_escrow_factory(&e, &caller)?;

        let mut proposal = read_proposal(&e, id)?;
        transition(&mut proposal, ProposalState::Cancelled)?;
        write_proposal(&e, &proposal);

        events::emit_proposal_cancelled(&e, events::ProposalCancelledEvent { proposal_id: id });
        Ok(())
    }

    pub fn accept_proposal(e: Env, operator: Address, id: ProposalId) -> Result<(), ContractError> {
        require_operator(&e, &operator)?;

        let mut proposal = read_proposal(&e, id)?;
        transition(&mut proposal, ProposalState::Accepted)?;
        let now = e.ledger().timestamp();
        proposal.accepted_at = Some(now);
        write_proposal(&e, &proposal);

        events::emit_proposal_accepted(
            &e,
            events::ProposalAcceptedEvent {
                proposal_id: id,
                accepted_at: now,
            },
        );
        Ok(())
    }

    /// Execute an accepted proposal once strictly more than `ACCEPT_DELAY`
    /// seconds have passed since acceptance.
    pub fn execute_proposal(e: Env, operator: Address, id: ProposalId) -> Result<(), ContractError> {
        require_operator(&e, &operator)?;

        let mut proposal = read_proposal(&e, id)?;
        if proposal.state != ProposalState::Accepted {
            return Err(ContractError::InvalidState);
        }
        let accepted_at = proposal.accepted_at.ok_or(ContractError::InvalidState)?;
        if e.ledger().timestamp().saturating_sub(accepted_at) <= ACCEPT_DELAY {
            return Err(ContractError::InvalidState);
        }

        let next_basket = execution::apply_payload(&e, &proposal)?;
        let basket_id = install_basket(&e, &next_basket);

        transition(&mut proposal, ProposalState::Completed)?;
        write_proposal(&e, &proposal);
        extend_instance(&e);
        log!(&e, "proposal executed", id, basket_id);

        events::emit_proposal_executed(
            &e,
            events::ProposalExecutedEvent {
                proposal_id: id,
                basket_id,
            },
        );
        Ok(())
    }

    pub fn set_operator(e: Env, new_operator: Address) -> Result<(), ContractError> {
        let owner = read_address(&e, &DataKey::Owner)?;
        owner.require_auth();

        let old = read_address(&e, &DataKey::Operator)?;
        e.storage().instance().set(&DataKey::Operator, &new_operator);
        extend_instance(&e);

        events::emit_operator_changed(
            &e,
            events::AddressChangedEvent {
                old,
                new: new_operator,
            },
        );
        Ok(())
    }

    pub fn set_escrow_factory(e: Env, new_factory: Address) -> Result<(), ContractError> {
        let owner = read_address(&e, &DataKey::Owner)?;
        owner.require_auth();

        if new_factory == e.current_contract_address() {
            return Err(ContractError::InvalidParameter);
        }

        let old = read_address(&e, &DataKey::EscrowFactory)?;
        e.storage().instance().set(&DataKey::EscrowFactory, &new_factory);
        extend_instance(&e);

        events::emit_escrow_factory_changed(
            &e,
            events::AddressChangedEvent {
                old,
                new: new_factory,
            },
        );
        Ok(())
    }

    /// View functions
    pub fn get_proposal(e: Env, id: ProposalId) -> Result<Proposal, ContractError> {
        read_proposal(&e, id)
    }

    pub fn proposals_len(e: Env) -> u64 {
        proposal_count(&e)
    }

    pub fn get_basket(e: Env) -> Result<Basket, ContractError> {
        read_current_basket(&e)
    }

    pub fn get_basket_at(e: Env, id: BasketId) -> Result<Basket, ContractError> {
        read_basket(&e, id)
    }

    pub fn current_basket_id(e: Env) -> Result<BasketId, ContractError> {
        read_current_basket_id(&e)
    }

    /// Collateral the current basket requires for `supply` issued units, in
    /// basket token order.
    pub fn quantities_required(e: Env, supply: i128) -> Result<Vec<i128>, ContractError> {
        if supply < 0 {
            return Err(ContractError::InvalidParameter);
        }
        let current = read_current_basket(&e)?;
        basket::quantities_required(&e, &current, supply)
    }

    pub fn get_owner(e: Env) -> Result<Address, ContractError> {
        read_address(&e, &DataKey::Owner)
    }

    pub fn get_operator(e: Env) -> Result<Address, ContractError> {
        read_address(&e, &DataKey::Operator)
    }

    pub fn get_escrow_factory(e: Env) -> Result<Address, ContractError> {
        read_address(&e, &DataKey::EscrowFactory)
    }

    pub fn get_vault(e: Env) -> Result<Address, ContractError> {
        read_address(&e, &DataKey::Vault)
    }

    pub fn get_reserve(e: Env) -> Result<Address, ContractError> {
        read_address(&e, &DataKey::Reserve)
    }
}

fn require_escrow_factory(e: &Env, caller: &Address) -> Result<(), ContractError> {
    caller.require_auth();
    if *caller != read_address(e, &DataKey::EscrowFactory)? {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

fn require_operator(e: &Env, caller: &Address) -> Result<(), ContractError> {
    caller.require_auth();
    if *caller != read_address(e, &DataKey::Operator)? {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

fn transition(proposal: &mut Proposal, next: ProposalState) -> Result<(), ContractError> {
    if !proposal.state.can_transition_to(next) {
        return Err(ContractError::InvalidState);
    }
    proposal.state = next;
    Ok(())
}

fn register(e: &Env, proposer: Address, payload: ProposalPayload) -> ProposalId {
    let kind = match payload {
        ProposalPayload::Swap(_) => symbol_short!("swap"),
        ProposalPayload::Weights(_) => symbol_short!("weights"),
    };

    let id = next_proposal_id(e);
    let proposal = Proposal {
        id,
        proposer: proposer.clone(),
        state: ProposalState::Created,
        created_at: e.ledger().timestamp(),
        accepted_at: None,
        payload,
    };
    write_proposal(e, &proposal);
    extend_instance(e);

    events::emit_proposal_created(
        e,
        events::ProposalCreatedEvent {
            proposal_id: id,
            proposer,
            kind,
        },
    );
    id
}
