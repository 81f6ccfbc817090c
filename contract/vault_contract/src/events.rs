use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ManagerChangedEvent {
    pub old: Address,
    pub new: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawnEvent {
    pub token: Address,
    pub amount: i128,
    pub to: Address,
}

pub fn emit_manager_changed(env: &Env, event: ManagerChangedEvent) {
    env.events().publish(
        (Symbol::new(env, "param_changed"), symbol_short!("manager")),
        event,
    );
}

pub fn emit_withdrawn(env: &Env, event: WithdrawnEvent) {
    env.events()
        .publish((Symbol::new(env, "vault"), symbol_short!("withdrawn")), event);
}
