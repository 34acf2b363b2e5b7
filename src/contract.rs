use cosmwasm_std::{to_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult};
#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::state::{Config, CONFIG, MEMBERS};

// version info for migration info
const CONTRACT_NAME: &str = env!("CARGO_PKG_NAME");
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let admin = match msg.admin {
        Some(admin) => deps.api.addr_validate(&admin)?,
        None => info.sender.clone(),
    };
    let config = Config {
        admin,
        close_policy: msg.close_policy,
    };
    CONFIG.save(deps.storage, &config)?;

    for member in msg.members {
        let address = deps.api.addr_validate(&member.address)?;
        if member.organization.is_empty() {
            return Err(ContractError::InvalidOrganization {});
        }
        MEMBERS.save(deps.storage, &address, &member.organization)?;
    }

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("sender", info.sender.as_str())
        .add_attribute("admin", config.admin.as_str())
        .add_attribute("close_policy", config.close_policy.as_str()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::CreateAuction { asset_id, description } => {
            exec::create_auction(deps, env, info, asset_id, description)
        }
        ExecuteMsg::SubmitBid { asset_id, amount } => exec::submit_bid(deps, env, info, asset_id, amount),
        ExecuteMsg::DeclareWinner { asset_id } => exec::declare_winner(deps, env, info, asset_id),
        ExecuteMsg::RegisterMember { address, organization } => {
            exec::register_member(deps, env, info, address, organization)
        }
    }
}

pub mod exec {
    use cosmwasm_std::{to_binary, DepsMut, Env, MessageInfo, Response};

    use crate::error::ContractError;
    use crate::identity::resolve_organization;
    use crate::ledger;
    use crate::msg::CreateAuctionResponse;
    use crate::state::{Auction, CONFIG, MEMBERS};

    pub fn create_auction(
        deps: DepsMut,
        _env: Env,
        info: MessageInfo,
        asset_id: Option<String>,
        description: Option<String>,
    ) -> Result<Response, ContractError> {
        let organization = resolve_organization(deps.storage, &info.sender)?;

        let asset_id = match asset_id {
            Some(asset_id) if asset_id.is_empty() => return Err(ContractError::InvalidAssetId {}),
            Some(asset_id) if ledger::exists(deps.storage, &asset_id) => {
                return Err(ContractError::AlreadyExists { asset_id });
            }
            Some(asset_id) => asset_id,
            None => ledger::next_asset_id(deps.storage)?,
        };

        let auction = Auction::new(asset_id.clone(), organization.clone(), description);
        ledger::store(deps.storage, &auction)?;

        Ok(Response::new()
            .add_attribute("action", "create_auction")
            .add_attribute("sender", info.sender.as_str())
            .add_attribute("organization", organization)
            .add_attribute("asset_id", asset_id.as_str())
            .set_data(to_binary(&CreateAuctionResponse { asset_id })?))
    }

    pub fn submit_bid(
        deps: DepsMut,
        _env: Env,
        info: MessageInfo,
        asset_id: String,
        amount: i64,
    ) -> Result<Response, ContractError> {
        let organization = resolve_organization(deps.storage, &info.sender)?;

        let mut auction = ledger::load(deps.storage, &asset_id)?;
        let value = auction.submit_bid(&organization, amount)?;
        ledger::store(deps.storage, &auction)?;

        Ok(Response::new()
            .add_attribute("action", "submit_bid")
            .add_attribute("sender", info.sender.as_str())
            .add_attribute("organization", organization)
            .add_attribute("asset_id", asset_id)
            .add_attribute("amount", value.to_string()))
    }

    pub fn declare_winner(
        deps: DepsMut,
        _env: Env,
        info: MessageInfo,
        asset_id: String,
    ) -> Result<Response, ContractError> {
        let organization = resolve_organization(deps.storage, &info.sender)?;
        let config = CONFIG.load(deps.storage)?;

        let mut auction = ledger::load(deps.storage, &asset_id)?;
        let winning = auction.declare_winner(&organization, config.close_policy)?;
        ledger::store(deps.storage, &auction)?;

        Ok(Response::new()
            .add_attribute("action", "declare_winner")
            .add_attribute("sender", info.sender.as_str())
            .add_attribute("asset_id", asset_id)
            .add_attribute("winner", winning.organization)
            .add_attribute("winning_price", winning.amount.to_string()))
    }

    pub fn register_member(
        deps: DepsMut,
        _env: Env,
        info: MessageInfo,
        address: String,
        organization: String,
    ) -> Result<Response, ContractError> {
        let config = CONFIG.load(deps.storage)?;
        if info.sender != config.admin {
            return Err(ContractError::AdminOnly {});
        }
        if organization.is_empty() {
            return Err(ContractError::InvalidOrganization {});
        }

        let address = deps.api.addr_validate(&address)?;
        MEMBERS.save(deps.storage, &address, &organization)?;

        Ok(Response::new()
            .add_attribute("action", "register_member")
            .add_attribute("sender", info.sender.as_str())
            .add_attribute("member", address.as_str())
            .add_attribute("organization", organization))
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_binary(&query::query_config(deps)?),
        QueryMsg::Auction { asset_id } => to_binary(&query::query_auction(deps, asset_id)?),
        QueryMsg::Auctions { start_after, limit } => {
            to_binary(&query::query_auctions(deps, start_after, limit)?)
        }
        QueryMsg::Member { address } => to_binary(&query::query_member(deps, address)?),
    }
}

pub mod query {
    use cosmwasm_std::{Deps, StdResult};

    use crate::contract::{DEFAULT_LIMIT, MAX_LIMIT};
    use crate::ledger;
    use crate::msg::{AuctionResponse, AuctionsResponse, ConfigResponse, MemberResponse};
    use crate::state::{CONFIG, MEMBERS};

    pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
        let config = CONFIG.load(deps.storage)?;
        Ok(ConfigResponse { config })
    }

    pub fn query_auction(deps: Deps, asset_id: String) -> StdResult<AuctionResponse> {
        let auction = ledger::load(deps.storage, &asset_id)?;
        Ok(AuctionResponse { auction })
    }

    pub fn query_auctions(deps: Deps, start_after: Option<String>, limit: Option<u32>) -> StdResult<AuctionsResponse> {
        let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
        let auctions = ledger::range(deps.storage, start_after.as_deref(), limit)?;
        Ok(AuctionsResponse { auctions })
    }

    pub fn query_member(deps: Deps, address: String) -> StdResult<MemberResponse> {
        let address = deps.api.addr_validate(&address)?;
        let organization = MEMBERS.may_load(deps.storage, &address)?;
        Ok(MemberResponse { organization })
    }
}
