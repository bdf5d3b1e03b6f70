//! Navigation error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("Search template {template:?} has no {placeholder:?} placeholder")]
    MissingPlaceholder {
        template: String,
        placeholder: String,
    },

    #[error("Search placeholder must not be empty")]
    EmptyPlaceholder,
}
