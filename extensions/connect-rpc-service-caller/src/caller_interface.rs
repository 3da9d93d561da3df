use crate::error::RpcCallerError;
use connect_rpc_service::EndpointMethod;
use tracing::debug;

/// Defines a generic capability for making name-addressed RPC calls.
///
/// Any struct that can dispatch a raw params object to a named method on a
/// named service (e.g., a connected client, or a test double) implements the
/// single required method to gain the typed call surface.
#[async_trait::async_trait]
pub trait ConnectClientInterface: Send + Sync {
    // --- METHOD TO BE IMPLEMENTED BY THE STRUCT (e.g., a connected client) ---

    /// Dispatches an encoded params object to `method_name` on `service_name`
    /// and resolves with the raw response body.
    ///
    /// Transport, serialization framing, endpoint resolution, retries, and
    /// authentication all live behind this method. Callers treat it as a
    /// black box: whatever error it yields is propagated unchanged.
    async fn call_raw(
        &self,
        service_name: &str,
        method_name: &str,
        param_bytes: Vec<u8>,
    ) -> Result<Vec<u8>, RpcCallerError>;

    // --- METHOD PROVIDED AUTOMATICALLY BY THE TRAIT ---

    /// Performs a typed buffered call.
    ///
    /// This default method handles the full lifecycle of:
    /// - Encoding the params into the method's params object
    /// - Forwarding service name, method name, and params through `call_raw`
    /// - Decoding the response body
    async fn call_buffered<M>(&self, params: M::Params) -> Result<M::Response, RpcCallerError>
    where
        M: EndpointMethod + Send + Sync + 'static,
        M::Params: Send + 'static,
        M::Response: Send + 'static,
    {
        let encoded = M::encode_params(params)?;

        debug!(
            service = M::SERVICE_NAME,
            method = M::METHOD_NAME,
            "dispatching rpc call"
        );

        let response_bytes = self
            .call_raw(M::SERVICE_NAME, M::METHOD_NAME, encoded)
            .await?;

        let response = M::decode_response(&response_bytes)?;

        debug!(
            service = M::SERVICE_NAME,
            method = M::METHOD_NAME,
            "rpc call resolved"
        );

        Ok(response)
    }
}
