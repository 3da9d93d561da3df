use serde::{Deserialize, Serialize};

/// An account as returned by the package services.
///
/// All fields are optional: the backend may populate a response sparsely,
/// and the binding forwards whatever it receives unchanged.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: Option<i64>,
    pub username: Option<String>,
}
