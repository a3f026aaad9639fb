use thiserror::Error;

use crate::domain::PageId;

/// Violations of the structural contract the host must satisfy when binding
/// elements. Raised only at controller construction; every operation after a
/// successful construction is infallible.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractError {
    #[error("no page bindings were provided")]
    NoPages,
    #[error("duplicate page binding for `{0}`")]
    DuplicatePage(PageId),
    #[error("default page `{0}` has no binding")]
    MissingDefaultPage(PageId),
}
