//! Output formatting for CLI display.

use crate::history::HistoryEntry;
use crate::model::StatusSnapshot;

/// Where the player is, in a few words.
pub(super) fn format_location(status: &StatusSnapshot) -> String {
    let body = status.body_name().unwrap_or("unknown body");
    match status.station_name() {
        Some(station) if status.is_docked() => format!("{station} ({body})"),
        _ if status.has_body_id() => {
            let id = status.body_id().unwrap_or(-1);
            format!("{body} #{id}")
        }
        _ => body.to_string(),
    }
}

/// Multi-line status block, one field per line.
pub(super) fn format_status(status: &StatusSnapshot) -> String {
    let mut out = String::new();
    out.push_str(&format!("State:    {}\n", status.travel_state()));
    out.push_str(&format!("Location: {}\n", format_location(status)));
    if let Some(kind) = status.body_type() {
        out.push_str(&format!("Body:     {kind}\n"));
    }
    if let (Some(kind), Some(market)) = (status.station_type(), status.market_id()) {
        out.push_str(&format!("Station:  {kind}, market {market}\n"));
    }
    out.push_str(&format!(
        "Ship:     {} [{}] id {}\n",
        status.ship_type(),
        status.ship_type_internal(),
        status.ship_id()
    ));
    if let Some(captain) = status.crew_captain() {
        out.push_str(&format!("Crew:     aboard {captain}'s ship\n"));
    }
    let mode = if status.group().is_empty() {
        status.game_mode().to_string()
    } else {
        format!("{} ({})", status.game_mode(), status.group())
    };
    out.push_str(&format!("Mode:     {mode}\n"));
    if status.wanted() {
        out.push_str("Wanted\n");
    }
    if status.body_approached() {
        out.push_str("Approaching body\n");
    }
    out
}

/// One history line: `timestamp  kind  state  location`.
pub(super) fn format_entry(entry: &HistoryEntry) -> String {
    format!(
        "{}  {:<20} {:<12} {}",
        entry.timestamp,
        entry.kind,
        entry.status.travel_state(),
        format_location(&entry.status)
    )
}
