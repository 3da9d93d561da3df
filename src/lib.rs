mod method;
pub use method::*;
mod codec;
pub use codec::*;
