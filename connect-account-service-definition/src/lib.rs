pub mod models;

mod model_package_service;
pub use model_package_service::*;
mod sub_model_package_service;
pub use sub_model_package_service::*;
