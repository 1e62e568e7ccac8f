use pf_model::ModelError;
use pf_spatial::SpatialError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// The hub was assembled with inconsistent inputs (unknown pinned truck,
    /// destination missing from the distance map, duplicate id, …).
    #[error("hub configuration error: {0}")]
    Config(String),

    #[error("entity lookup failed: {0}")]
    Model(#[from] ModelError),

    #[error("distance lookup failed: {0}")]
    Spatial(#[from] SpatialError),

    /// The run crossed a full synthetic day without delivering everything.
    /// Timestamps wrap at midnight, so continuing would corrupt every
    /// comparison; aborting beats looping forever.
    #[error("day exhausted after {ticks} ticks with {undelivered} packages undelivered")]
    DayExhausted { ticks: u32, undelivered: usize },
}

pub type SimResult<T> = Result<T, SimError>;
