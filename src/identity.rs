use cosmwasm_std::{Addr, Storage};

use crate::error::ContractError;
use crate::state::MEMBERS;

/// Organization the `sender` acts for, taken from the membership registry.
pub fn resolve_organization(storage: &dyn Storage, sender: &Addr) -> Result<String, ContractError> {
    MEMBERS
        .may_load(storage, sender)?
        .ok_or_else(|| ContractError::IdentityResolution { sender: sender.to_string() })
}
