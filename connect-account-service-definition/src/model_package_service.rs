use crate::models::Account;
use connect_rpc_service::{EndpointMethod, decode_json, encode_json};
use connect_rpc_service_caller::{ConnectClientInterface, EndpointCall, error::RpcCallerError};
use serde::{Deserialize, Serialize};
use std::io;

#[derive(Serialize, Deserialize, PartialEq, Debug)]
pub struct GetAccountPackageParams {
    pub name: Option<String>,
}

pub struct GetAccountPackage;

impl EndpointMethod for GetAccountPackage {
    const SERVICE_NAME: &'static str = "ModelPackageService";
    const METHOD_NAME: &'static str = "getAccountPackage";

    type Params = Option<String>;
    type Response = Option<Account>;

    fn encode_params(name: Option<String>) -> Result<Vec<u8>, io::Error> {
        encode_json(&GetAccountPackageParams { name })
    }

    fn decode_params(bytes: &[u8]) -> Result<Option<String>, io::Error> {
        let raw = decode_json::<GetAccountPackageParams>(bytes)?;
        Ok(raw.name)
    }

    fn encode_response(account: Option<Account>) -> Result<Vec<u8>, io::Error> {
        encode_json(&account)
    }

    fn decode_response(bytes: &[u8]) -> Result<Option<Account>, io::Error> {
        decode_json(bytes)
    }
}

/// Forwards `name` to `ModelPackageService.getAccountPackage` on the given
/// client and resolves with the account it returns, if any.
pub async fn get_account_package<C>(
    client: &C,
    name: Option<String>,
) -> Result<Option<Account>, RpcCallerError>
where
    C: ConnectClientInterface + Send + Sync,
{
    GetAccountPackage::call(client, name).await
}
