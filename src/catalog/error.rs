use thiserror::Error;

/// Errors raised while loading the menu catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog fixture is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate {kind} id in catalog: {id}")]
    DuplicateId { kind: &'static str, id: String },

    #[error("Menu item {id} has spicy level {level}, maximum is 3")]
    InvalidSpiceLevel { id: String, level: u8 },

    #[error("Menu item not in catalog: {0}")]
    UnknownMenuItem(String),

    #[error("Catalog has no {0}")]
    MissingSection(&'static str),
}
