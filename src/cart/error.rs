use thiserror::Error;

/// Why a cart or builder action was refused.
///
/// These replace blocking alerts: the caller decides how to show them.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Choose a dish type first")]
    MissingDishType,

    #[error("Choose at least one meat")]
    MissingMeat,

    #[error("Choose a snack first")]
    MissingSnack,

    #[error("Pick at least one ingredient")]
    NoIngredients,

    #[error("Unknown {kind}: {id}")]
    UnknownOption { kind: &'static str, id: String },

    #[error("Quantity must be at least 1")]
    ZeroQuantity,

    #[error("Cart is empty")]
    EmptyCart,
}

impl ValidationError {
    pub(crate) fn unknown(kind: &'static str, id: &str) -> Self {
        ValidationError::UnknownOption {
            kind,
            id: id.to_string(),
        }
    }
}
