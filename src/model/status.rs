//! Status snapshots: what is known about the player at one point in the journal.

use std::fmt;

use serde::Serialize;

/// Coarse location and motion state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum TravelState {
    Docked,
    Landed,
    Hyperspace,
    NormalSpace,

    /// Only before the first event.
    #[default]
    Unknown,
}

impl fmt::Display for TravelState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Docked => "docked",
            Self::Landed => "landed",
            Self::Hyperspace => "hyperspace",
            Self::NormalSpace => "normal space",
            Self::Unknown => "unknown",
        };
        f.pad(s)
    }
}

/// An immutable record of situational status.
///
/// Snapshots are never changed once built. Each journal event produces a new
/// one, copied from its predecessor with selected fields replaced. Fields are
/// crate-visible for that construction; everything else reads through the
/// accessors.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusSnapshot {
    pub(crate) body_name: Option<String>,
    pub(crate) body_id: Option<i32>,
    pub(crate) body_type: Option<String>,

    /// Never `Some("")`. Set and cleared together with `station_type` and
    /// `market_id`.
    pub(crate) station_name: Option<String>,
    pub(crate) station_type: Option<String>,
    pub(crate) market_id: Option<i64>,

    pub(crate) travel_state: TravelState,

    pub(crate) ship_id: i32,
    pub(crate) ship_type: String,
    pub(crate) ship_type_internal: String,

    /// Some while riding in another commander's ship.
    pub(crate) crew_captain: Option<String>,

    pub(crate) game_mode: String,
    pub(crate) group: String,
    pub(crate) wanted: bool,

    /// Set by approaching a body or settlement, cleared on leaving it or
    /// jumping out. While set, supercruise transitions leave the body fields
    /// alone.
    pub(crate) body_approached: bool,
}

impl Default for StatusSnapshot {
    fn default() -> Self {
        Self {
            body_name: None,
            body_id: None,
            body_type: None,
            station_name: None,
            station_type: None,
            market_id: None,
            travel_state: TravelState::Unknown,
            ship_id: -1,
            ship_type: "Unknown".to_string(),
            ship_type_internal: "unknown".to_string(),
            crew_captain: None,
            game_mode: "Unknown".to_string(),
            group: String::new(),
            wanted: false,
            body_approached: false,
        }
    }
}

impl StatusSnapshot {
    pub fn body_name(&self) -> Option<&str> {
        self.body_name.as_deref()
    }

    pub fn body_id(&self) -> Option<i32> {
        self.body_id
    }

    /// True when the body id is present and not the `-1` placeholder.
    pub fn has_body_id(&self) -> bool {
        self.body_id.is_some_and(|id| id >= 0)
    }

    pub fn body_type(&self) -> Option<&str> {
        self.body_type.as_deref()
    }

    pub fn station_name(&self) -> Option<&str> {
        self.station_name.as_deref()
    }

    pub fn station_type(&self) -> Option<&str> {
        self.station_type.as_deref()
    }

    pub fn market_id(&self) -> Option<i64> {
        self.market_id
    }

    pub fn travel_state(&self) -> TravelState {
        self.travel_state
    }

    pub fn is_docked(&self) -> bool {
        self.travel_state == TravelState::Docked
    }

    pub fn ship_id(&self) -> i32 {
        self.ship_id
    }

    pub fn ship_type(&self) -> &str {
        &self.ship_type
    }

    pub fn ship_type_internal(&self) -> &str {
        &self.ship_type_internal
    }

    pub fn crew_captain(&self) -> Option<&str> {
        self.crew_captain.as_deref()
    }

    pub fn is_on_crew(&self) -> bool {
        self.crew_captain.is_some()
    }

    pub fn game_mode(&self) -> &str {
        &self.game_mode
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn wanted(&self) -> bool {
        self.wanted
    }

    pub fn body_approached(&self) -> bool {
        self.body_approached
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_snapshot_has_defaults() {
        let s = StatusSnapshot::default();
        assert_eq!(s.travel_state(), TravelState::Unknown);
        assert_eq!(s.ship_id(), -1);
        assert_eq!(s.ship_type(), "Unknown");
        assert_eq!(s.ship_type_internal(), "unknown");
        assert_eq!(s.game_mode(), "Unknown");
        assert_eq!(s.group(), "");
        assert!(!s.wanted());
        assert!(!s.body_approached());
        assert!(!s.has_body_id());
        assert!(!s.is_on_crew());
    }

    #[test]
    fn negative_body_id_is_not_a_body_id() {
        let s = StatusSnapshot {
            body_id: Some(-1),
            ..StatusSnapshot::default()
        };
        assert!(!s.has_body_id());

        let s = StatusSnapshot {
            body_id: Some(0),
            ..s
        };
        assert!(s.has_body_id());
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(StatusSnapshot::default()).unwrap();
        assert_eq!(json["travelState"], "Unknown");
        assert_eq!(json["shipTypeInternal"], "unknown");
        assert!(json["crewCaptain"].is_null());
    }
}
