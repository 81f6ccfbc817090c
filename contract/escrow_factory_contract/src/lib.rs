#![no_std]

mod escrow;
mod events;
mod storage_types;


use basket_types::{ContractError, Direction, EscrowId, LedgerClient, ProposalId, ProposalState};
use soroban_sdk::{contract, contractimpl, log, Address, Env, Vec};
use storage_types::*;

pub use storage_types::Escrow;

#[contract]
pub struct EscrowFactoryContract;

#[contractimpl]
impl EscrowFactoryContract {
    /// Initialize the factory with the stake parameters and the ledger it
    /// files proposals with.
    pub fn initialize(
        e: Env,
        admin: Address,
        stake_token: Address,
        lock_duration: u64,
        stake_amount: i128,
        ledger: Address,
    ) -> Result<(), ContractError> {
        if e.storage().instance().has(&DataKey::Admin) {
            return Err(ContractError::AlreadyInitialized);
        }
        let this = e.current_contract_address();
        if lock_duration == 0 || stake_amount <= 0 || stake_token == this || ledger == this {
            return Err(ContractError::InvalidParameter);
        }

        e.storage().instance().set(&DataKey::Admin, &admin);
        e.storage().instance().set(&DataKey::StakeToken, &stake_token);
        e.storage().instance().set(&DataKey::LockDuration, &lock_duration);
        e.storage().instance().set(&DataKey::StakeAmount, &stake_amount);
        e.storage().instance().set(&DataKey::Ledger, &ledger);
        e.storage().instance().set(&DataKey::NextEscrowId, &1u64);

        extend_instance(&e);
        Ok(())
    }

    /// Stake and file a swap proposal in one step.
    pub fn create_and_propose_swap(
        e: Env,
        proposer: Address,
        tokens: Vec<Address>,
        amounts: Vec<i128>,
        directions: Vec<Direction>,
    ) -> Result<EscrowId, ContractError> {
        proposer.require_auth();
        escrow::ensure_stake_available(&e, &proposer)?;

        let proposal_id = from_ledger(ledger_client(&e)?.try_propose_swap(
            &e.current_contract_address(),
            &proposer,
            &tokens,
            &amounts,
            &directions,
        ))?;
        escrow::lock(&e, &proposer, proposal_id)
    }

    /// Stake and file a re-weighting proposal in one step.
    pub fn create_and_propose_weights(
        e: Env,
        proposer: Address,
        tokens: Vec<Address>,
        weights: Vec<i128>,
    ) -> Result<EscrowId, ContractError> {
        proposer.require_auth();
        escrow::ensure_stake_available(&e, &proposer)?;

        let proposal_id = from_ledger(ledger_client(&e)?.try_propose_weights(
            &e.current_contract_address(),
            &proposer,
            &tokens,
            &weights,
        ))?;
        escrow::lock(&e, &proposer, proposal_id)
    }

    /// Cancel a live proposal and hand its stake back.
    ///
    /// The ledger owner, the ledger operator and the proposer may cancel.
    /// A stake already withdrawn after its lock is not paid out again.
    pub fn cancel_and_unlock(e: Env, signer: Address, proposal_id: ProposalId) -> Result<(), ContractError> {
        signer.require_auth();

        let ledger = ledger_client(&e)?;
        let proposal = from_ledger(ledger.try_get_proposal(&proposal_id))?;
        let escrow_id = read_proposal_escrow(&e, proposal_id).ok_or(ContractError::EscrowNotFound)?;
        let mut escrow = read_escrow(&e, escrow_id)?;

        let owner = from_ledger(ledger.try_get_owner())?;
        let operator = from_ledger(ledger.try_get_operator())?;
        if signer != owner && signer != operator && signer != escrow.proposer {
            return Err(ContractError::WrongSigner);
        }

        if proposal.state.is_terminal() {
            return Err(match proposal.state {
                ProposalState::Completed => ContractError::AlreadyCompleted,
                _ => ContractError::InvalidState,
            });
        }

        from_ledger(ledger.try_cancel_proposal(&e.current_contract_address(), &proposal_id))?;
        escrow::release(&e, &mut escrow);
        log!(&e, "proposal cancelled", proposal_id, escrow_id);
        Ok(())
    }

    /// Return the stake once the lock has run out. Anyone may trigger it; the
    /// stake always goes to the proposer.
    pub fn withdraw(e: Env, signer: Address, escrow_id: EscrowId) -> Result<(), ContractError> {
        signer.require_auth();

        let mut escrow = read_escrow(&e, escrow_id)?;
        if escrow.withdrawn {
            return Err(ContractError::AlreadyReleased);
        }
        if !escrow::is_unlocked(&e, &escrow) {
            return Err(ContractError::TooEarly);
        }

        escrow::release(&e, &mut escrow);
        Ok(())
    }

    pub fn set_stake_token(e: Env, stake_token: Address) -> Result<(), ContractError> {
        require_admin(&e)?;
        if stake_token == e.current_contract_address() {
            return Err(ContractError::InvalidParameter);
        }

        let old = read_address(&e, &DataKey::StakeToken)?;
        e.storage().instance().set(&DataKey::StakeToken, &stake_token);
        extend_instance(&e);

        events::emit_stake_token_changed(&e, events::AddressChangedEvent { old, new: stake_token });
        Ok(())
    }

    pub fn set_lock_duration(e: Env, lock_duration: u64) -> Result<(), ContractError> {
        require_admin(&e)?;
        if lock_duration == 0 {
            return Err(ContractError::InvalidParameter);
        }

        let old = read_lock_duration(&e)?;
        e.storage().instance().set(&DataKey::LockDuration, &lock_duration);
        extend_instance(&e);

        events::emit_lock_duration_changed(
            &e,
            events::DurationChangedEvent {
                old,
                new: lock_duration,
            },
        );
        Ok(())
    }

    pub fn set_stake_amount(e: Env, stake_amount: i128) -> Result<(), ContractError> {
        require_admin(&e)?;
        if stake_amount <= 0 {
            return Err(ContractError::InvalidParameter);
        }

        let old = read_stake_amount(&e)?;
        e.storage().instance().set(&DataKey::StakeAmount, &stake_amount);
        extend_instance(&e);

        events::emit_stake_amount_changed(
            &e,
            events::AmountChangedEvent {
                old,
                new: stake_amount,
            },
        );
        Ok(())
    }

    pub fn set_ledger(e: Env, ledger: Address) -> Result<(), ContractError> {
        require_admin(&e)?;
        if ledger == e.current_contract_address() {
            return Err(ContractError::InvalidParameter);
        }

        let old = read_address(&e, &DataKey::Ledger)?;
        e.storage().instance().set(&DataKey::Ledger, &ledger);
        extend_instance(&e);

        events::emit_ledger_changed(&e, events::AddressChangedEvent { old, new: ledger });
        Ok(())
    }

    /// View functions
    pub fn get_admin(e: Env) -> Result<Address, ContractError> {
        read_address(&e, &DataKey::Admin)
    }

    pub fn get_stake_token(e: Env) -> Result<Address, ContractError> {
        read_address(&e, &DataKey::StakeToken)
    }

    pub fn get_lock_duration(e: Env) -> Result<u64, ContractError> {
        read_lock_duration(&e)
    }

    pub fn get_stake_amount(e: Env) -> Result<i128, ContractError> {
        read_stake_amount(&e)
    }

    pub fn get_ledger(e: Env) -> Result<Address, ContractError> {
        read_address(&e, &DataKey::Ledger)
    }

    pub fn get_escrow(e: Env, escrow_id: EscrowId) -> Result<Escrow, ContractError> {
        read_escrow(&e, escrow_id)
    }

    /// Stake still in custody for `escrow_id`; zero once released.
    pub fn escrow_balance(e: Env, escrow_id: EscrowId) -> Result<i128, ContractError> {
        Ok(escrow::held(&read_escrow(&e, escrow_id)?))
    }

    pub fn escrow_for_proposal(e: Env, proposal_id: ProposalId) -> Result<EscrowId, ContractError> {
        read_proposal_escrow(&e, proposal_id).ok_or(ContractError::EscrowNotFound)
    }

    pub fn proposal_for_escrow(e: Env, escrow_id: EscrowId) -> Result<ProposalId, ContractError> {
        Ok(read_escrow(&e, escrow_id)?.proposal_id)
    }

    pub fn escrow_count(e: Env) -> u64 {
        storage_types::escrow_count(&e)
    }
}

fn require_admin(e: &Env) -> Result<(), ContractError> {
    let admin = read_address(e, &DataKey::Admin)?;
    admin.require_auth();
    Ok(())
}

fn ledger_client(e: &Env) -> Result<LedgerClient<'_>, ContractError> {
    let ledger = read_address(e, &DataKey::Ledger)?;
    Ok(LedgerClient::new(e, &ledger))
}

/// Surface the ledger's own error code. A failure that carries no contract
/// error, or a reply that does not decode, means the configured ledger could
/// not serve the call.
fn from_ledger<T, C, I>(result: Result<Result<T, C>, Result<ContractError, I>>) -> Result<T, ContractError> {
    match result {
        Ok(Ok(value)) => Ok(value),
        Err(Ok(err)) => Err(err),
        Ok(Err(_)) | Err(Err(_)) => Err(ContractError::LedgerUnavailable),
    }
}
