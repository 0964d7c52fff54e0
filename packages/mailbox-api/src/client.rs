use cosmwasm_std::{to_json_binary, Addr, Coin, CosmosMsg, HexBinary, QuerierWrapper, WasmMsg};

use crate::msg::{ExecuteMsg, QueryMsg};

type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed to quote dispatch to domain {destination_domain}: {source}")]
    QuoteDispatch {
        destination_domain: u32,
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

    /// Builds the dispatch message for the transport. Attached funds are
    /// forwarded as the delivery fee payment.
    pub fn dispatch(
        &self,
        destination_domain: u32,
        recipient: [u8; 32],
        body: HexBinary,
        hook_metadata: Option<HexBinary>,
        funds: Vec<Coin>,
    ) -> CosmosMsg {
        WasmMsg::Execute {
            contract_addr: self.address.to_string(),
            msg: to_json_binary(&ExecuteMsg::Dispatch {
                destination_domain,
                recipient,
                body,
                hook_metadata,
            })
            .expect("dispatch msg must serialize"),
            funds,
        }
        .into()
    }

    pub fn quote_dispatch(
        &self,
        destination_domain: u32,
        body: Option<HexBinary>,
        gas_limit: Option<u64>,
    ) -> Result<Coin> {
        self.querier
            .query_wasm_smart(
                self.address,
                &QueryMsg::QuoteDispatch {
                    destination_domain,
                    body,
                    gas_limit,
                },
            )
            .map_err(|source| Error::QuoteDispatch {
                destination_domain,
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use assert_ok::assert_ok;
    use cosmwasm_std::testing::{MockApi, MockQuerier};
    use cosmwasm_std::{coin, from_json, to_json_binary, Addr, SystemError, WasmQuery};

    use super::*;

    #[test]
    fn dispatch_builds_execute_msg_with_funds() {
        let querier = MockQuerier::default();
        let addr = MockApi::default().addr_make("mailbox");
        let client = Client::new(QuerierWrapper::new(&querier), &addr);

        let body = HexBinary::from(vec![1, 2, 3]);
        let funds = vec![coin(250, "uaxl")];
        let msg = client.dispatch(7, [3; 32], body.clone(), None, funds.clone());

        assert_eq!(
            msg,
            WasmMsg::Execute {
                contract_addr: addr.to_string(),
                msg: to_json_binary(&ExecuteMsg::Dispatch {
                    destination_domain: 7,
                    recipient: [3; 32],
                    body,
                    hook_metadata: None,
                })
                .unwrap(),
                funds,
            }
            .into()
        );
    }

    #[test]
    fn quote_dispatch_returns_fee() {
        let (querier, addr) = setup_quote_query(coin(1000, "uaxl"));
        let client = Client::new(QuerierWrapper::new(&querier), &addr);

        let fee = assert_ok!(client.quote_dispatch(7, None, None));
        assert_eq!(fee, coin(1000, "uaxl"));
    }

    #[test]
    fn quote_dispatch_propagates_query_failure() {
        let addr = MockApi::default().addr_make("mailbox");
        let mut querier = MockQuerier::default();
        querier.update_wasm(|_| Err(SystemError::Unknown {}).into());
        let client = Client::new(QuerierWrapper::new(&querier), &addr);

        let res = client.quote_dispatch(7, None, None);
        assert!(matches!(
            res,
            Err(Error::QuoteDispatch {
                destination_domain: 7,
                ..
            })
        ));
    }

    fn setup_quote_query(fee: Coin) -> (MockQuerier, Addr) {
        let addr = MockApi::default().addr_make("mailbox");
        let expected = addr.clone();

        let mut querier = MockQuerier::default();
        querier.update_wasm(move |msg| match msg {
            WasmQuery::Smart { contract_addr, msg } if contract_addr == expected.as_str() => {
                match from_json::<QueryMsg>(msg).unwrap() {
                    QueryMsg::QuoteDispatch { .. } => Ok(to_json_binary(&fee).into()).into(),
                }
            }
            _ => panic!("unexpected query: {:?}", msg),
        });

        (querier, addr)
    }
}
