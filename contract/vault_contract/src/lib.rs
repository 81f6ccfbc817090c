#![no_std]


mod events;
mod storage;
use storage::{extend_instance, read_address, DataKey};

use basket_types::ContractError;
use soroban_sdk::{contract, contractimpl, log, token, Address, Env};

#[contract]
pub struct VaultContract;

#[contractimpl]
impl VaultContract {
    /// Set up the vault. `manager` is the only address allowed to move
    /// collateral out.
    pub fn initialize(e: Env, admin: Address, manager: Address) -> Result<(), ContractError> {
        if e.storage().instance().has(&DataKey::Admin) {
            return Err(ContractError::AlreadyInitialized);
        }

        e.storage().instance().set(&DataKey::Admin, &admin);
        e.storage().instance().set(&DataKey::Manager, &manager);
        extend_instance(&e);
        Ok(())
    }

    pub fn change_manager(e: Env, new_manager: Address) -> Result<(), ContractError> {
        let admin = read_address(&e, &DataKey::Admin)?;
        admin.require_auth();

        if new_manager == e.current_contract_address() {
            return Err(ContractError::InvalidParameter);
        }

        let old = read_address(&e, &DataKey::Manager)?;
        e.storage().instance().set(&DataKey::Manager, &new_manager);
        extend_instance(&e);

        events::emit_manager_changed(&e, events::ManagerChangedEvent { old, new: new_manager });
        Ok(())
    }

    /// Send `amount` of `token` held by the vault to `to`.
    pub fn withdraw_to(
        e: Env,
        caller: Address,
        token: Address,
        amount: i128,
        to: Address,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        if caller != read_address(&e, &DataKey::Manager)? {
            return Err(ContractError::Unauthorized);
        }
        if amount <= 0 {
            return Err(ContractError::InvalidParameter);
        }

        let token_client = token::Client::new(&e, &token);
        let vault = e.current_contract_address();
        if token_client.balance(&vault) < amount {
            return Err(ContractError::InsufficientFunds);
        }
        token_client.transfer(&vault, &to, &amount);
        log!(&e, "vault withdraw", token, amount);

        events::emit_withdrawn(&e, events::WithdrawnEvent { token, amount, to });
        Ok(())
    }

    pub fn balance(e: Env, token: Address) -> i128 {
        token::Client::new(&e, &token).balance(&e.current_contract_address())
    }

    pub fn get_admin(e: Env) -> Result<Address, ContractError> {
        read_address(&e, &DataKey::Admin)
    }

    pub fn get_manager(e: Env) -> Result<Address, ContractError> {
        read_address(&e, &DataKey::Manager)
    }
}
