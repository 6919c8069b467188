use crate::modules::inventory::core::asset::Asset;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("asset name must not be empty")]
    EmptyName,

    #[error("asset tag must not be empty")]
    EmptyTag,

    #[error("purchase value must be a finite number")]
    NonFiniteValue,
}

pub enum Decision {
    Accepted { asset: Asset },
    Rejected { reason: DecideError },
}
