use std::io;

// These traits define a convention for binding a typed client method to a
// named service method, with pre-buffered (i.e., fully materialized) payloads.
//
// The protocol addresses methods by a `(service, method)` string pair rather
// than a numeric identifier, so a binding carries both names as associated
// constants. Everything else about dispatch — transport, endpoint resolution,
// authentication — lives behind the caller interface and is of no concern to
// a method definition.

/// Trait for types that represent a callable service method binding.
///
/// An implementor couples method identity (service and method names) with the
/// serialization logic for its params object and response in a single
/// location, keeping call sites agnostic of the wire representation.
pub trait EndpointMethod {
    /// Name of the backend service the method is dispatched to.
    const SERVICE_NAME: &'static str;

    /// Name of the method on that service.
    const METHOD_NAME: &'static str;

    /// The high-level params type accepted by the request encoder
    /// (e.g., `Option<String>`).
    type Params;

    /// The high-level type the response decoder produces
    /// (e.g., `Option<Account>`).
    type Response;

    /// Encodes the params into the method's named params object.
    fn encode_params(params: Self::Params) -> Result<Vec<u8>, io::Error>;

    /// Decodes a raw params object back into the typed params.
    ///
    /// # Arguments
    /// * `bytes` - Serialized params object.
    fn decode_params(bytes: &[u8]) -> Result<Self::Params, io::Error>;

    /// Encodes the response value into a raw response body.
    fn encode_response(response: Self::Response) -> Result<Vec<u8>, io::Error>;

    /// Decodes a raw response body into the typed response.
    ///
    /// # Arguments
    /// * `bytes` - Serialized response body.
    fn decode_response(bytes: &[u8]) -> Result<Self::Response, io::Error>;
}
