mod caller_interface;
pub use caller_interface::*;
mod endpoint_call;
pub use endpoint_call::*;
pub mod error;
