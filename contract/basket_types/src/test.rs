#![cfg(test)]

use super::*;
use soroban_sdk::{testutils::Address as _, vec, Address, Env};

#[test]
fn test_state_edges() {
    use ProposalState::*;

    assert!(Created.can_transition_to(Accepted));
    assert!(Created.can_transition_to(Cancelled));
    assert!(Accepted.can_transition_to(Completed));
    assert!(Accepted.can_transition_to(Cancelled));

    // no skipping acceptance, no leaving a terminal state, no going back
    assert!(!Created.can_transition_to(Completed));
    assert!(!Accepted.can_transition_to(Created));
    for terminal in [Cancelled, Completed] {
        assert!(terminal.is_terminal());
        for next in [Created, Accepted, Cancelled, Completed] {
            assert!(!terminal.can_transition_to(next));
        }
    }
    assert!(!Created.is_terminal());
    assert!(!Accepted.is_terminal());
}

#[test]
fn test_basket_lookup() {
    let env = Env::default();
    let a = Address::generate(&env);
    let b = Address::generate(&env);
    let c = Address::generate(&env);

    let basket = Basket {
        tokens: vec![&env, a.clone(), b.clone()],
        weights: vec![&env, 3, 7],
    };

    assert_eq!(basket.len(), 2);
    assert_eq!(basket.position(&b), Some(1));
    assert_eq!(basket.position(&c), None);
    assert_eq!(basket.weight_of(&a), 3);
    assert_eq!(basket.weight_of(&c), 0);
    assert!(basket.is_well_formed());
}

#[test]
fn test_malformed_baskets() {
    let env = Env::default();
    let a = Address::generate(&env);
    let b = Address::generate(&env);

    let empty = Basket {
        tokens: Vec::new(&env),
        weights: Vec::new(&env),
    };
    assert!(!empty.is_well_formed());

    let mismatched = Basket {
        tokens: vec![&env, a.clone(), b.clone()],
        weights: vec![&env, 1],
    };
    assert!(!mismatched.is_well_formed());

    let zero_weight = Basket {
        tokens: vec![&env, a.clone(), b.clone()],
        weights: vec![&env, 1, 0],
    };
    assert!(!zero_weight.is_well_formed());

    let duplicate = Basket {
        tokens: vec![&env, a.clone(), a.clone()],
        weights: vec![&env, 1, 1],
    };
    assert!(!duplicate.is_well_formed());
}
