//! Status transitions: folding one journal event onto a snapshot.
//!
//! [`transition`] is the whole reducer. It is pure: it reads the previous
//! snapshot and the event and returns a new snapshot built with struct update
//! syntax, so fields an event doesn't name carry over untouched.

use crate::model::{JournalEvent, Location, StatusSnapshot, TravelState};

/// Apply one event to the previous snapshot.
///
/// `previous` of `None` means the start of the journal and is treated as
/// [`StatusSnapshot::default`]. `current_system` is the star system the
/// player is in, used by events that fall back to the system's star.
///
/// Never fails. Events with no bearing on status, and events vetoed by a
/// guard, return a copy of `previous`.
pub fn transition(
    previous: Option<&StatusSnapshot>,
    event: &JournalEvent,
    current_system: &str,
) -> StatusSnapshot {
    let initial;
    let prev = match previous {
        Some(p) => p,
        None => {
            initial = StatusSnapshot::default();
            &initial
        }
    };

    match event {
        JournalEvent::Location(loc) => {
            let travel_state = if loc.docked {
                TravelState::Docked
            } else if loc.latitude.is_some() {
                TravelState::Landed
            } else {
                TravelState::NormalSpace
            };
            arrive(prev, loc, travel_state)
        }

        // Arriving with a carrier always means being docked on it.
        JournalEvent::CarrierJump(loc) => arrive(prev, loc, TravelState::Docked),

        JournalEvent::FsdJump(jump) => StatusSnapshot {
            travel_state: TravelState::Hyperspace,
            market_id: None,
            body_id: Some(-1),
            body_type: Some("Star".to_string()),
            body_name: Some(jump.star_system.clone()),
            wanted: jump.wanted,
            station_name: None,
            station_type: None,
            body_approached: false,
            ..prev.clone()
        },

        JournalEvent::LoadGame(load) => {
            let ship = load.ship();
            let in_srv = ship.is_ground_vehicle();
            let travel_state = if in_srv || load.start_landed {
                TravelState::Landed
            } else {
                prev.travel_state
            };

            let base = StatusSnapshot {
                crew_captain: None,
                game_mode: load.game_mode.clone(),
                group: load.group.clone(),
                travel_state,
                ..prev.clone()
            };

            if in_srv {
                base
            } else {
                StatusSnapshot {
                    ship_id: ship.id(),
                    ship_type: ship.display_name().to_string(),
                    ship_type_internal: ship.internal_name(),
                    ..base
                }
            }
        }

        JournalEvent::Docked(docked) => StatusSnapshot {
            travel_state: TravelState::Docked,
            market_id: docked.market_id,
            wanted: docked.wanted,
            station_name: non_empty(Some(&docked.station_name)),
            station_type: non_empty(docked.station_type.as_ref()),
            ..prev.clone()
        },

        JournalEvent::Undocked => StatusSnapshot {
            travel_state: TravelState::NormalSpace,
            market_id: None,
            station_name: None,
            station_type: None,
            ..prev.clone()
        },

        JournalEvent::Touchdown(control) if control.is_player() => StatusSnapshot {
            travel_state: TravelState::Landed,
            ..prev.clone()
        },

        JournalEvent::Liftoff(control) if control.is_player() => StatusSnapshot {
            travel_state: TravelState::NormalSpace,
            ..prev.clone()
        },

        JournalEvent::SupercruiseExit(exit) => {
            if prev.body_approached {
                StatusSnapshot {
                    travel_state: TravelState::NormalSpace,
                    ..prev.clone()
                }
            } else {
                StatusSnapshot {
                    travel_state: TravelState::NormalSpace,
                    body_name: exit.body.clone(),
                    body_type: exit.body_type.clone(),
                    body_id: exit.body_id,
                    ..prev.clone()
                }
            }
        }

        JournalEvent::SupercruiseEntry(_) => {
            if prev.body_approached {
                StatusSnapshot {
                    travel_state: TravelState::Hyperspace,
                    ..prev.clone()
                }
            } else {
                StatusSnapshot {
                    travel_state: TravelState::Hyperspace,
                    ..at_system_star(prev, current_system)
                }
            }
        }

        JournalEvent::ApproachBody(approach) => StatusSnapshot {
            body_approached: true,
            body_type: Some(approach.body_type.clone()),
            body_name: Some(approach.body.clone()),
            body_id: approach.body_id,
            ..prev.clone()
        },

        JournalEvent::ApproachSettlement(approach) => StatusSnapshot {
            body_approached: true,
            body_type: Some(approach.body_type.clone()),
            body_name: approach.body_name.clone(),
            body_id: approach.body_id,
            ..prev.clone()
        },

        JournalEvent::LeaveBody => StatusSnapshot {
            body_approached: false,
            ..at_system_star(prev, current_system)
        },

        // Already in hyperspace when chaining jumps along a route.
        JournalEvent::StartJump if prev.travel_state != TravelState::Hyperspace => {
            StatusSnapshot {
                travel_state: TravelState::Hyperspace,
                ..prev.clone()
            }
        }

        JournalEvent::ShipyardBuy(buy) => StatusSnapshot {
            ship_id: -1,
            ship_type: buy.ship().display_name().to_string(),
            ..prev.clone()
        },

        JournalEvent::ShipyardNew(new) => {
            let ship = new.ship();
            StatusSnapshot {
                ship_id: ship.id(),
                ship_type: ship.display_name().to_string(),
                ship_type_internal: ship.internal_name(),
                ..prev.clone()
            }
        }

        JournalEvent::ShipyardSwap(swap) => {
            let ship = swap.ship();
            StatusSnapshot {
                ship_id: ship.id(),
                ship_type: ship.display_name().to_string(),
                ship_type_internal: ship.internal_name(),
                ..prev.clone()
            }
        }

        JournalEvent::JoinACrew { captain } => StatusSnapshot {
            crew_captain: Some(captain.clone()),
            ..prev.clone()
        },

        JournalEvent::QuitACrew => StatusSnapshot {
            crew_captain: None,
            ..prev.clone()
        },

        // After a respawn the previous location can't be trusted.
        JournalEvent::Died => StatusSnapshot {
            body_name: Some("Unknown".to_string()),
            body_id: Some(-1),
            body_type: Some("Unknown".to_string()),
            station_name: Some("Unknown".to_string()),
            station_type: Some("Unknown".to_string()),
            market_id: None,
            travel_state: TravelState::Docked,
            crew_captain: None,
            body_approached: false,
            ..prev.clone()
        },

        JournalEvent::Loadout(loadout) if !loadout.ship().is_ground_vehicle() => {
            let ship = loadout.ship();
            StatusSnapshot {
                ship_id: ship.id(),
                ship_type: ship.display_name().to_string(),
                ship_type_internal: ship.internal_name(),
                ..prev.clone()
            }
        }

        JournalEvent::Touchdown(_)
        | JournalEvent::Liftoff(_)
        | JournalEvent::StartJump
        | JournalEvent::Loadout(_)
        | JournalEvent::Other => prev.clone(),
    }
}

/// Shared mapping for `Location` and `CarrierJump`.
fn arrive(prev: &StatusSnapshot, loc: &Location, travel_state: TravelState) -> StatusSnapshot {
    StatusSnapshot {
        travel_state,
        market_id: loc.market_id,
        body_id: loc.body_id,
        body_type: loc.body_type.clone(),
        body_name: loc.body.clone(),
        wanted: loc.wanted,
        station_name: non_empty(loc.station_name.as_ref()),
        station_type: non_empty(loc.station_type.as_ref()),
        ..prev.clone()
    }
}

/// Body fields pointing at the system's main star.
fn at_system_star(prev: &StatusSnapshot, current_system: &str) -> StatusSnapshot {
    StatusSnapshot {
        body_name: Some(current_system.to_string()),
        body_type: Some("Star".to_string()),
        body_id: Some(-1),
        ..prev.clone()
    }
}

/// The journal writes `""` for "no station".
fn non_empty(value: Option<&String>) -> Option<String> {
    value.filter(|s| !s.is_empty()).cloned()
}
