use crate::ephemeris::dataset::Entry;

/// Text for the timestamp and warnings sinks above the canvas.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HeaderText {
    /// The entry's time key, verbatim.
    pub timestamp: String,
    /// `"<moon>: <event>"` lines joined by `\n`; empty when nothing is happening.
    pub warnings: String,
}

/// One `"<moon>: <event>"` line per moon with an event, canonical order.
pub fn warning_lines(entry: &Entry) -> Vec<String> {
    entry
        .events
        .iter()
        .map(|(moon, text)| format!("{moon}: {text}"))
        .collect()
}

pub fn header_for(entry: &Entry) -> HeaderText {
    HeaderText {
        timestamp: entry.time.clone(),
        warnings: warning_lines(entry).join("\n"),
    }
}
