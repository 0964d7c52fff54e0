use cosmwasm_std::{to_json_binary, Addr, CosmosMsg, HexBinary, QuerierWrapper, WasmMsg};

use crate::msg::{ExecuteMsg, QueryMsg};

type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed to query deployment status of {address}: {source}")]
    IsDeployed {
        address: String,
        source: cosmwasm_std::StdError,
    },
}

pub struct Client<'a> {
    querier: QuerierWrapper<'a>,
    address: &'a Addr,
}

impl<'a> Client<'a> {
    pub fn new(querier: QuerierWrapper<'a>, address: &'a Addr) -> Self {
        Client { querier, address }
    }

    pub fn create(&self, bytecode: HexBinary, salt: [u8; 32]) -> CosmosMsg {
        WasmMsg::Execute {
            contract_addr: self.address.to_string(),
            msg: to_json_binary(&ExecuteMsg::Create { bytecode, salt })
                .expect("create msg must serialize"),
            funds: vec![],
        }
        .into()
    }

    pub fn is_deployed(&self, address: &Addr) -> Result<bool> {
        self.querier
            .query_wasm_smart(
                self.address,
                &QueryMsg::IsDeployed {
                    address: address.to_string(),
                },
            )
            .map_err(|source| Error::IsDeployed {
                address: address.to_string(),
                source,
            })
    }
}
