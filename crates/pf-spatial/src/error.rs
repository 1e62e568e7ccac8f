use pf_core::Location;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpatialError {
    /// The origin address was never loaded into the map.
    #[error("location \"{0}\" is not in the distance map")]
    UnknownLocation(Location),

    /// The origin is known but has no cost loaded toward `to`.
    #[error("no distance loaded from \"{from}\" to \"{to}\"")]
    MissingLeg { from: Location, to: Location },
}

pub type SpatialResult<T> = Result<T, SpatialError>;
