use crate::ConnectClientInterface;
use crate::error::RpcCallerError;
use connect_rpc_service::EndpointMethod;

/// Trait for method bindings that are directly callable against a client.
///
/// This trait forms the final layer of abstraction, allowing downstream
/// users to write `M::call(&client, params)` without dealing with traits
/// or transport logic explicitly.
#[async_trait::async_trait]
pub trait EndpointCall: EndpointMethod + Sized + Send + Sync {
    async fn call<C: ConnectClientInterface + Send + Sync>(
        client: &C,
        params: Self::Params,
    ) -> Result<Self::Response, RpcCallerError>;
}

/// Blanket implementation of the `EndpointCall` trait for any type that also
/// implements `EndpointMethod`.
///
/// This enables `.call()` usage on any method binding without requiring a
/// manual implementation for each one.
#[async_trait::async_trait]
impl<M> EndpointCall for M
where
    M: EndpointMethod + Send + Sync + 'static,
    M::Params: Send + 'static,
    M::Response: Send + 'static,
{
    async fn call<C: ConnectClientInterface + Send + Sync>(
        client: &C,
        params: Self::Params,
    ) -> Result<Self::Response, RpcCallerError> {
        client.call_buffered::<M>(params).await
    }
}
