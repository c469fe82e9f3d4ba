//! Core data model for Waypoint.
//!
//! Two halves: the journal events the game writes, and the status snapshot
//! reconstructed from them.

mod event;
mod ship;
mod status;

pub use event::{
    ApproachBody, ApproachSettlement, Docked, FsdJump, JournalEvent, LoadGame, Loadout, Location,
    PlayerControl, ShipyardBuy, ShipyardNew, ShipyardSwap, SupercruiseExit, SystemOnly,
};
pub use ship::ShipRef;
pub use status::{StatusSnapshot, TravelState};
