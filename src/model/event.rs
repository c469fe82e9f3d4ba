//! Journal events: the status-relevant subset of what the game writes.
//!
//! Each journal line is a JSON object whose `event` field names the kind.
//! Kinds that never touch status decode to [`JournalEvent::Other`] and carry
//! nothing, so unrelated payloads cannot leak into a snapshot.

use serde::Deserialize;

use super::ship::ShipRef;

/// A decoded journal event.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "event")]
pub enum JournalEvent {
    /// Written at login and after respawn: where the player is.
    Location(Location),

    /// The fleet carrier the player is docked on has jumped.
    CarrierJump(Location),

    /// Arrived in a new system after a hyperspace jump.
    #[serde(rename = "FSDJump")]
    FsdJump(FsdJump),

    /// Game loaded into a session.
    LoadGame(LoadGame),

    Docked(Docked),

    Undocked,

    Touchdown(PlayerControl),

    Liftoff(PlayerControl),

    SupercruiseExit(SupercruiseExit),

    SupercruiseEntry(SystemOnly),

    ApproachBody(ApproachBody),

    ApproachSettlement(ApproachSettlement),

    LeaveBody,

    /// Frame shift drive charging, either for supercruise or hyperspace.
    StartJump,

    ShipyardBuy(ShipyardBuy),

    ShipyardNew(ShipyardNew),

    ShipyardSwap(ShipyardSwap),

    /// Joined another commander's ship as multicrew.
    JoinACrew {
        #[serde(rename = "Captain")]
        captain: String,
    },

    QuitACrew,

    Died,

    Loadout(Loadout),

    /// Any kind with no bearing on status.
    #[serde(other)]
    Other,
}

impl JournalEvent {
    /// The star system this event places the player in, if it names one.
    pub fn star_system(&self) -> Option<&str> {
        match self {
            Self::Location(l) | Self::CarrierJump(l) => Some(&l.star_system),
            Self::FsdJump(j) => Some(&j.star_system),
            Self::SupercruiseExit(e) => e.star_system.as_deref(),
            Self::SupercruiseEntry(e) => e.star_system.as_deref(),
            Self::ApproachBody(a) => a.star_system.as_deref(),
            _ => None,
        }
    }
}

/// Payload shared by `Location` and `CarrierJump`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Location {
    pub star_system: String,

    #[serde(default)]
    pub docked: bool,

    /// Present only when on a planet surface.
    pub latitude: Option<f64>,

    #[serde(rename = "MarketID")]
    pub market_id: Option<i64>,

    #[serde(rename = "BodyID")]
    pub body_id: Option<i32>,

    pub body_type: Option<String>,

    pub body: Option<String>,

    #[serde(default)]
    pub wanted: bool,

    pub station_name: Option<String>,

    pub station_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FsdJump {
    pub star_system: String,

    #[serde(default)]
    pub wanted: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoadGame {
    /// Internal ship code. Absent while on foot or in multicrew.
    #[serde(default)]
    pub ship: String,

    #[serde(rename = "Ship_Localised")]
    pub ship_localised: Option<String>,

    #[serde(rename = "ShipID")]
    pub ship_id: Option<i32>,

    #[serde(default)]
    pub start_landed: bool,

    #[serde(default = "unknown_game_mode")]
    pub game_mode: String,

    /// Private group name; empty outside group play.
    #[serde(default)]
    pub group: String,
}

impl LoadGame {
    pub fn ship(&self) -> ShipRef<'_> {
        ShipRef::new(&self.ship, self.ship_localised.as_deref(), self.ship_id)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Docked {
    pub station_name: String,

    pub station_type: Option<String>,

    #[serde(rename = "MarketID")]
    pub market_id: Option<i64>,

    #[serde(default)]
    pub wanted: bool,
}

/// Payload of `Touchdown` and `Liftoff`.
///
/// The game also writes these for the ship while the player is away in an
/// SRV or on foot; those carry `PlayerControlled: false` or omit it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PlayerControl {
    pub player_controlled: Option<bool>,
}

impl PlayerControl {
    pub fn is_player(&self) -> bool {
        self.player_controlled == Some(true)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SupercruiseExit {
    pub star_system: Option<String>,

    pub body: Option<String>,

    #[serde(rename = "BodyID")]
    pub body_id: Option<i32>,

    pub body_type: Option<String>,
}

/// Events that only name the current system.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SystemOnly {
    pub star_system: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApproachBody {
    pub star_system: Option<String>,

    pub body: String,

    #[serde(rename = "BodyID")]
    pub body_id: Option<i32>,

    /// Not written by the game; approaches are always to a planet.
    #[serde(default = "planet")]
    pub body_type: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApproachSettlement {
    /// The body the settlement sits on. Journals before 3.3 omit it.
    pub body_name: Option<String>,

    #[serde(rename = "BodyID")]
    pub body_id: Option<i32>,

    #[serde(default = "planet")]
    pub body_type: String,
}

/// Buying a ship. The new ship's id only arrives with the follow-up
/// `ShipyardNew`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ShipyardBuy {
    pub ship_type: String,

    #[serde(rename = "ShipType_Localised")]
    pub ship_type_localised: Option<String>,
}

impl ShipyardBuy {
    pub fn ship(&self) -> ShipRef<'_> {
        ShipRef::new(&self.ship_type, self.ship_type_localised.as_deref(), None)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ShipyardNew {
    pub ship_type: String,

    #[serde(rename = "ShipType_Localised")]
    pub ship_type_localised: Option<String>,

    #[serde(rename = "NewShipID")]
    pub new_ship_id: i32,
}

impl ShipyardNew {
    pub fn ship(&self) -> ShipRef<'_> {
        ShipRef::new(
            &self.ship_type,
            self.ship_type_localised.as_deref(),
            Some(self.new_ship_id),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ShipyardSwap {
    pub ship_type: String,

    #[serde(rename = "ShipType_Localised")]
    pub ship_type_localised: Option<String>,

    #[serde(rename = "ShipID")]
    pub ship_id: i32,
}

impl ShipyardSwap {
    pub fn ship(&self) -> ShipRef<'_> {
        ShipRef::new(
            &self.ship_type,
            self.ship_type_localised.as_deref(),
            Some(self.ship_id),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Loadout {
    pub ship: String,

    #[serde(rename = "Ship_Localised")]
    pub ship_localised: Option<String>,

    #[serde(rename = "ShipID")]
    pub ship_id: Option<i32>,
}

impl Loadout {
    pub fn ship(&self) -> ShipRef<'_> {
        ShipRef::new(&self.ship, self.ship_localised.as_deref(), self.ship_id)
    }
}

fn unknown_game_mode() -> String {
    "Unknown".to_string()
}

fn planet() -> String {
    "Planet".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: &str) -> JournalEvent {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn decodes_location_with_station() {
        let event = decode(
            r#"{"timestamp":"2024-03-01T10:00:00Z","event":"Location","Docked":true,
                "StarSystem":"Shinrarta Dezhra","Body":"Jameson Memorial","BodyID":62,
                "BodyType":"Station","StationName":"Jameson Memorial",
                "StationType":"Orbis","MarketID":128666762,"Wanted":false}"#,
        );

        let JournalEvent::Location(loc) = event else {
            panic!("expected Location, got {event:?}");
        };
        assert!(loc.docked);
        assert_eq!(loc.star_system, "Shinrarta Dezhra");
        assert_eq!(loc.market_id, Some(128_666_762));
        assert_eq!(loc.body_id, Some(62));
        assert_eq!(loc.station_type.as_deref(), Some("Orbis"));
        assert_eq!(loc.latitude, None);
    }

    #[test]
    fn decodes_fsd_jump_by_journal_name() {
        let event = decode(r#"{"event":"FSDJump","StarSystem":"Sol","JumpDist":8.2}"#);
        assert_eq!(
            event,
            JournalEvent::FsdJump(FsdJump {
                star_system: "Sol".into(),
                wanted: false,
            })
        );
    }

    #[test]
    fn unknown_kinds_decode_to_other() {
        let event = decode(r#"{"event":"Bounty","Reward":1000,"VictimFaction":"Pirates"}"#);
        assert_eq!(event, JournalEvent::Other);
    }

    #[test]
    fn unit_kinds_ignore_extra_fields() {
        let event = decode(r#"{"event":"Undocked","StationName":"Abraham Lincoln"}"#);
        assert_eq!(event, JournalEvent::Undocked);
    }

    #[test]
    fn touchdown_without_flag_is_not_player_controlled() {
        let JournalEvent::Touchdown(t) = decode(r#"{"event":"Touchdown","Latitude":1.0}"#) else {
            panic!("expected Touchdown");
        };
        assert!(!t.is_player());
    }

    #[test]
    fn approach_body_defaults_to_planet() {
        let JournalEvent::ApproachBody(a) =
            decode(r#"{"event":"ApproachBody","StarSystem":"Sol","Body":"Earth","BodyID":3}"#)
        else {
            panic!("expected ApproachBody");
        };
        assert_eq!(a.body_type, "Planet");
        assert_eq!(a.body_id, Some(3));
    }

    #[test]
    fn approach_settlement_without_body_decodes() {
        let event = decode(
            r#"{"event":"ApproachSettlement","Name":"Hauser's Reach","MarketID":1}"#,
        );
        assert_eq!(
            event,
            JournalEvent::ApproachSettlement(ApproachSettlement {
                body_name: None,
                body_id: None,
                body_type: "Planet".into(),
            })
        );
    }

    #[test]
    fn join_a_crew_carries_captain() {
        let event = decode(r#"{"event":"JoinACrew","Captain":"Hawkeye"}"#);
        assert_eq!(
            event,
            JournalEvent::JoinACrew {
                captain: "Hawkeye".into()
            }
        );
    }

    #[test]
    fn star_system_comes_from_naming_events_only() {
        let jump = decode(r#"{"event":"FSDJump","StarSystem":"Achenar"}"#);
        let docked = decode(r#"{"event":"Docked","StationName":"Dawes Hub"}"#);
        assert_eq!(jump.star_system(), Some("Achenar"));
        assert_eq!(docked.star_system(), None);
    }
}
