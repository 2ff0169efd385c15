pub mod header;
pub mod snapshot;
pub mod timeline;

pub use header::{header_for, warning_lines, HeaderText};
pub use snapshot::{render_snapshot, snapshot_span, ScaleBarStyle, SnapshotLayout, SnapshotStyle};
pub use timeline::{render_timeline, timeline_span, TimelineLayout, TimelineMode, TimelineStyle};
