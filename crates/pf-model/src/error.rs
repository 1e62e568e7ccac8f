use thiserror::Error;

/// Lookup failures for the entity store and status log.
///
/// The raw integer id is carried rather than a typed id so one enum serves
/// both packages and trucks — the two logs are separate structures, so the
/// caller always knows which namespace the id belongs to.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    /// No entity with this id in the store.
    #[error("no entity with id {0}")]
    NotFound(u32),

    /// A point-in-time query against an id that has no history yet.
    #[error("entity {0} has no status history")]
    EntityNotLogged(u32),
}

pub type ModelResult<T> = Result<T, ModelError>;
