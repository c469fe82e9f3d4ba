//! Ship references as carried by journal events.

/// A ship as named by a single journal event.
///
/// The same schema is used for SRVs, which are not ships in the status
/// model and must never replace the parent ship's identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipRef<'a> {
    internal: &'a str,
    localised: Option<&'a str>,
    id: Option<i32>,
}

impl<'a> ShipRef<'a> {
    pub fn new(internal: &'a str, localised: Option<&'a str>, id: Option<i32>) -> Self {
        Self {
            internal,
            localised,
            id,
        }
    }

    /// Ship id, `-1` when the event doesn't carry one.
    pub fn id(&self) -> i32 {
        self.id.unwrap_or(-1)
    }

    /// Human-readable type: the localised name, falling back to the code.
    pub fn display_name(&self) -> &'a str {
        match self.localised {
            Some(name) if !name.is_empty() => name,
            _ if self.internal.is_empty() => "Unknown",
            _ => self.internal,
        }
    }

    /// Internal type code, lowercased as the game is inconsistent about case.
    pub fn internal_name(&self) -> String {
        if self.internal.is_empty() {
            "unknown".to_string()
        } else {
            self.internal.to_ascii_lowercase()
        }
    }

    /// True for surface recon vehicles.
    pub fn is_ground_vehicle(&self) -> bool {
        let code = self.internal.to_ascii_lowercase();
        code == "testbuggy" || code.contains("_srv")
    }
}
