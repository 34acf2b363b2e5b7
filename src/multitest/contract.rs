use cosmwasm_std::{from_binary, Addr, StdResult};
use cw_multi_test::{App, ContractWrapper, Executor};

use crate::contract::{execute, instantiate, query};
use crate::error::ContractError;
use crate::msg::{
    AuctionResponse, AuctionsResponse, ConfigResponse, CreateAuctionResponse, ExecuteMsg, InstantiateMsg, Member,
    MemberResponse, QueryMsg,
};
use crate::state::ClosePolicy;

pub struct AuctionContract(Addr);

impl AuctionContract {
    pub fn addr(&self) -> &Addr {
        &self.0
    }

    pub fn store_code(app: &mut App) -> u64 {
        let contract = ContractWrapper::new(execute, instantiate, query);
        app.store_code(Box::new(contract))
    }

    #[track_caller]
    pub fn instantiate<'a>(
        app: &mut App,
        code_id: u64,
        sender: &Addr,
        admin: impl Into<Option<&'a Addr>>,
        close_policy: ClosePolicy,
        members: &[(&Addr, &str)],
    ) -> Result<Self, ContractError> {
        let admin = admin.into().map(Addr::to_string);
        let members = members
            .iter()
            .map(|(address, organization)| Member {
                address: address.to_string(),
                organization: organization.to_string(),
            })
            .collect();

        app.instantiate_contract(
            code_id,
            sender.clone(),
            &InstantiateMsg {
                admin,
                close_policy,
                members,
            },
            &[],
            "First price auction",
            None,
        )
            .map(AuctionContract)
            .map_err(|err| err.downcast().unwrap())
    }

    #[track_caller]
    pub fn create_auction<'a>(
        &self,
        app: &mut App,
        sender: &Addr,
        asset_id: impl Into<Option<&'a str>>,
        description: impl Into<Option<&'a str>>,
    ) -> Result<String, ContractError> {
        let msg = ExecuteMsg::CreateAuction {
            asset_id: asset_id.into().map(str::to_string),
            description: description.into().map(str::to_string),
        };
        app.execute_contract(sender.clone(), self.0.clone(), &msg, &[])
            .map_err(|err| err.downcast().unwrap())
            .map(|resp| {
                let data = resp.data.expect("create_auction returns the asset id");
                let resp: CreateAuctionResponse = from_binary(&data).unwrap();
                resp.asset_id
            })
    }

    #[track_caller]
    pub fn submit_bid(
        &self,
        app: &mut App,
        sender: &Addr,
        asset_id: &str,
        amount: i64,
    ) -> Result<(), ContractError> {
        let msg = ExecuteMsg::SubmitBid { asset_id: asset_id.to_string(), amount };
        app.execute_contract(sender.clone(), self.0.clone(), &msg, &[])
            .map_err(|err| err.downcast().unwrap())
            .map(|_| ())
    }

    #[track_caller]
    pub fn declare_winner(
        &self,
        app: &mut App,
        sender: &Addr,
        asset_id: &str,
    ) -> Result<(), ContractError> {
        let msg = ExecuteMsg::DeclareWinner { asset_id: asset_id.to_string() };
        app.execute_contract(sender.clone(), self.0.clone(), &msg, &[])
            .map_err(|err| err.downcast().unwrap())
            .map(|_| ())
    }

    #[track_caller]
    pub fn register_member(
        &self,
        app: &mut App,
        sender: &Addr,
        address: &Addr,
        organization: &str,
    ) -> Result<(), ContractError> {
        let msg = ExecuteMsg::RegisterMember {
            address: address.to_string(),
            organization: organization.to_string(),
        };
        app.execute_contract(sender.clone(), self.0.clone(), &msg, &[])
            .map_err(|err| err.downcast().unwrap())
            .map(|_| ())
    }

    #[track_caller]
    pub fn query_config(&self, app: &App) -> StdResult<ConfigResponse> {
        app.wrap()
            .query_wasm_smart(self.0.clone(), &QueryMsg::Config {})
    }

    #[track_caller]
    pub fn query_auction(&self, app: &App, asset_id: &str) -> StdResult<AuctionResponse> {
        app.wrap()
            .query_wasm_smart(self.0.clone(), &QueryMsg::Auction { asset_id: asset_id.to_string() })
    }

    #[track_caller]
    pub fn query_auctions<'a>(
        &self,
        app: &App,
        start_after: impl Into<Option<&'a str>>,
        limit: impl Into<Option<u32>>,
    ) -> StdResult<AuctionsResponse> {
        let msg = QueryMsg::Auctions {
            start_after: start_after.into().map(str::to_string),
            limit: limit.into(),
        };
        app.wrap().query_wasm_smart(self.0.clone(), &msg)
    }

    #[track_caller]
    pub fn query_member(&self, app: &App, address: &Addr) -> StdResult<MemberResponse> {
        app.wrap()
            .query_wasm_smart(self.0.clone(), &QueryMsg::Member { address: address.to_string() })
    }
}
