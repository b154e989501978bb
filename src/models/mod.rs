mod color;
mod id;
mod network;
mod occupancy;
mod ownership;
mod player;
mod snapshot;
mod station;

pub use color::{Color, ColorMap};
pub use id::{LocomotiveId, PlayerId, StationId, WagonId};
pub use network::StationNetwork;
pub use occupancy::{OccupancyTable, StationOccupancy};
pub use ownership::OwnershipIndex;
pub use player::{Player, PlayerKind};
pub use snapshot::{GameSnapshot, SnapshotData};
pub use station::Station;
