use basket_types::{Basket, ContractError, Direction, SwapLeg, WEIGHT_SCALE};
use soroban_sdk::{Address, Env, Vec};

pub fn validate(basket: &Basket) -> Result<(), ContractError> {
    if basket.is_well_formed() {
        Ok(())
    } else {
        Err(ContractError::InvalidBasket)
    }
}

fn mul_div(a: i128, b: i128, d: i128, round_up: bool) -> Result<i128, ContractError> {
    if d <= 0 {
        return Err(ContractError::ArithmeticError);
    }
    let product = a.checked_mul(b).ok_or(ContractError::ArithmeticError)?;
    let quotient = product / d;
    if round_up && product % d != 0 {
        Ok(quotient + 1)
    } else {
        Ok(quotient)
    }
}

/// Collateral units of `token` backing `supply` units of issued token.
/// Rounds up so the vault is never under-collateralized.
pub fn quantity_required(basket: &Basket, token: &Address, supply: i128) -> Result<i128, ContractError> {
    mul_div(supply, basket.weight_of(token), WEIGHT_SCALE, true)
}

pub fn quantities_required(e: &Env, basket: &Basket, supply: i128) -> Result<Vec<i128>, ContractError> {
    let mut quantities = Vec::new(e);
    for token in basket.tokens.iter() {
        quantities.push_back(quantity_required(basket, &token, supply)?);
    }
    Ok(quantities)
}

/// Basket describing the vault after `legs` have been applied against
/// `supply` units of issued token.
///
/// Weight added to the vault rounds down, weight removed rounds up. Tokens
/// that end with zero weight leave the basket.
pub fn after_swap(
    e: &Env,
    basket: &Basket,
    legs: &Vec<SwapLeg>,
    supply: i128,
) -> Result<Basket, ContractError> {
    if supply == 0 {
        return Ok(basket.clone());
    }

    let mut next = basket.clone();
    for leg in legs.iter() {
        let current = next.weight_of(&leg.token);
        let weight = match leg.direction {
            Direction::ToVault => {
                let delta = mul_div(leg.amount, WEIGHT_SCALE, supply, false)?;
                current.checked_add(delta)
            }
            Direction::FromVault => {
                let delta = mul_div(leg.amount, WEIGHT_SCALE, supply, true)?;
                // Taking out everything the token requires empties it even
                // when rounding pushes the weight delta past its weight.
                let required = mul_div(supply, current, WEIGHT_SCALE, true)?;
                if delta > current && leg.amount <= required {
                    Some(0)
                } else {
                    current.checked_sub(delta)
                }
            }
        }
        .ok_or(ContractError::ArithmeticError)?;

        if weight < 0 {
            return Err(ContractError::InvalidBasket);
        }

        match next.position(&leg.token) {
            Some(i) => next.weights.set(i, weight),
            None => {
                next.tokens.push_back(leg.token.clone());
                next.weights.push_back(weight);
            }
        }
    }

    let mut pruned = Basket {
        tokens: Vec::new(e),
        weights: Vec::new(e),
    };
    for (i, token) in next.tokens.iter().enumerate() {
        let weight = next.weights.get(i as u32).unwrap_or(0);
        if weight > 0 {
            pruned.tokens.push_back(token);
            pruned.weights.push_back(weight);
        }
    }

    validate(&pruned)?;
    Ok(pruned)
}
