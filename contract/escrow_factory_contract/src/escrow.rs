use basket_types::{ContractError, EscrowId, ProposalId};
use soroban_sdk::{log, token, Address, Env};

use crate::events;
use crate::storage_types::*;

/// Check that `proposer` can cover the current stake, in balance and in
/// allowance to this contract.
pub fn ensure_stake_available(e: &Env, proposer: &Address) -> Result<(), ContractError> {
    let stake_token = read_address(e, &DataKey::StakeToken)?;
    let amount = read_stake_amount(e)?;
    let token_client = token::Client::new(e, &stake_token);

    let factory = e.current_contract_address();
    if token_client.balance(proposer) < amount || token_client.allowance(proposer, &factory) < amount {
        return Err(ContractError::InsufficientStake);
    }
    Ok(())
}

/// Pull the stake from `proposer` into custody and record the escrow for
/// `proposal_id`.
pub fn lock(e: &Env, proposer: &Address, proposal_id: ProposalId) -> Result<EscrowId, ContractError> {
    let stake_token = read_address(e, &DataKey::StakeToken)?;
    let locked_amount = read_stake_amount(e)?;
    let lock_duration = read_lock_duration(e)?;

    let factory = e.current_contract_address();
    token::Client::new(e, &stake_token).transfer_from(&factory, proposer, &factory, &locked_amount);

    let id = next_escrow_id(e);
    let created_at = e.ledger().timestamp();
    let escrow = Escrow {
        id,
        proposal_id,
        proposer: proposer.clone(),
        created_at,
        locked_amount,
        lock_duration,
        stake_token,
        withdrawn: false,
    };
    write_escrow(e, &escrow);
    write_proposal_escrow(e, proposal_id, id);
    extend_instance(e);

    events::emit_stake_locked(
        e,
        events::StakeLockedEvent {
            escrow_id: id,
            proposal_id,
            proposer: proposer.clone(),
            amount: locked_amount,
            unlock_after: created_at.saturating_add(lock_duration),
        },
    );
    Ok(id)
}

/// Return the stake to its proposer. Both unlock paths end here; the
/// `withdrawn` flag makes every call after the first a no-op.
pub fn release(e: &Env, escrow: &mut Escrow) {
    if escrow.withdrawn {
        log!(e, "escrow already released", escrow.id);
        return;
    }

    escrow.withdrawn = true;
    write_escrow(e, escrow);

    token::Client::new(e, &escrow.stake_token).transfer(
        &e.current_contract_address(),
        &escrow.proposer,
        &escrow.locked_amount,
    );

    events::emit_stake_released(
        e,
        events::StakeReleasedEvent {
            escrow_id: escrow.id,
            proposer: escrow.proposer.clone(),
            amount: escrow.locked_amount,
        },
    );
}

/// True once strictly more than the escrow's lock duration has elapsed.
pub fn is_unlocked(e: &Env, escrow: &Escrow) -> bool {
    e.ledger().timestamp().saturating_sub(escrow.created_at) > escrow.lock_duration
}

/// Custody still held for `escrow`.
pub fn held(escrow: &Escrow) -> i128 {
    if escrow.withdrawn {
        0
    } else {
        escrow.locked_amount
    }
}
