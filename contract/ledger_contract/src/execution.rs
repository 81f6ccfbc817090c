use basket_types::{
    Basket, ContractError, Direction, Proposal, ProposalPayload, ReserveClient, SwapLeg, VaultClient,
};
use soroban_sdk::{log, token, Address, Env, Vec};

use crate::basket;
use crate::storage_types::{read_address, read_current_basket, DataKey};

/// Perform the collateral movements of `proposal` and return the basket that
/// must become current. Nothing is persisted here; any error aborts the
/// whole invocation.
pub fn apply_payload(e: &Env, proposal: &Proposal) -> Result<Basket, ContractError> {
    let supply = outstanding_supply(e)?;
    let current = read_current_basket(e)?;

    match &proposal.payload {
        ProposalPayload::Swap(legs) => execute_swap(e, &proposal.proposer, &current, legs, supply),
        ProposalPayload::Weights(target) => {
            execute_weights(e, &proposal.proposer, &current, target, supply)
        }
    }
}

fn outstanding_supply(e: &Env) -> Result<i128, ContractError> {
    let reserve = read_address(e, &DataKey::Reserve)?;
    let supply = ReserveClient::new(e, &reserve).total_supply();
    if supply < 0 {
        return Err(ContractError::InvalidParameter);
    }
    Ok(supply)
}

fn execute_swap(
    e: &Env,
    proposer: &Address,
    current: &Basket,
    legs: &Vec<SwapLeg>,
    supply: i128,
) -> Result<Basket, ContractError> {
    let next = basket::after_swap(e, current, legs, supply)?;

    for leg in legs.iter() {
        match leg.direction {
            Direction::ToVault => pull_to_vault(e, &leg.token, proposer, leg.amount)?,
            Direction::FromVault => push_from_vault(e, &leg.token, proposer, leg.amount)?,
        }
    }
    Ok(next)
}

fn execute_weights(
    e: &Env,
    proposer: &Address,
    current: &Basket,
    target: &Basket,
    supply: i128,
) -> Result<Basket, ContractError> {
    // New collateral comes in before surplus goes out.
    for token in target.tokens.iter() {
        let wanted = basket::quantity_required(target, &token, supply)?;
        let held = basket::quantity_required(current, &token, supply)?;
        if wanted > held {
            pull_to_vault(e, &token, proposer, wanted - held)?;
        }
    }

    for token in current.tokens.iter() {
        let held = basket::quantity_required(current, &token, supply)?;
        let wanted = basket::quantity_required(target, &token, supply)?;
        if held > wanted {
            push_from_vault(e, &token, proposer, held - wanted)?;
        }
    }

    Ok(target.clone())
}

fn pull_to_vault(e: &Env, token: &Address, from: &Address, amount: i128) -> Result<(), ContractError> {
    let vault = read_address(e, &DataKey::Vault)?;
    let ledger = e.current_contract_address();
    let token_client = token::Client::new(e, token);

    if token_client.balance(from) < amount || token_client.allowance(from, &ledger) < amount {
        log!(e, "collateral pull short", token.clone(), amount);
        return Err(ContractError::InsufficientFunds);
    }
    token_client.transfer_from(&ledger, from, &vault, &amount);
    Ok(())
}

fn push_from_vault(e: &Env, token: &Address, to: &Address, amount: i128) -> Result<(), ContractError> {
    let vault = read_address(e, &DataKey::Vault)?;
    let vault_client = VaultClient::new(e, &vault);

    if vault_client.balance(token) < amount {
        log!(e, "vault short", token.clone(), amount);
        return Err(ContractError::InsufficientFunds);
    }
    vault_client.withdraw_to(&e.current_contract_address(), token, &amount, to);
    Ok(())
}
