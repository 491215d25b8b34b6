pub mod metrics;
pub mod report;
pub mod types;
pub mod zones;
pub mod zwo;

pub use metrics::{time_in_zone, total_duration, training_stress};
pub use report::{
    build_report, parse_zwo_json, segment_color, segment_text, workout_report_json,
};
pub use types::{
    DisplayCfg, Segment, SegmentGroup, SegmentLine, Tag, Workout, WorkoutNode, WorkoutReport,
    ZoneShare,
};
pub use zones::{format_duration, ftp_to_zone, zone_color, Zone};
pub use zwo::{parse_zwo, FormatError};
