// core/src/zwo.rs
use log::{debug, info};
use roxmltree::{Document, Node};
use thiserror::Error;

use crate::types::{Segment, SegmentGroup, Tag, Workout, WorkoutNode};

/// Eneste rapporterte feiltype, og kun for de to obligatoriske
/// strukturelementene. Alt annet av manglende eller ugyldige data
/// degraderes stille til defaults.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("invalid .zwo: missing <workout_file>")]
    MissingWorkoutFile,
    #[error("invalid .zwo: missing <workout>")]
    MissingWorkout,
}

/// Attributt som tall. Fraværende, tom eller ikke-endelig verdi gir None,
/// som så faller gjennom default-kjedene i parseren.
fn num_attr(el: Node, name: &str) -> Option<f64> {
    let v = el.attribute(name)?;
    if v.is_empty() {
        return None;
    }
    v.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Trimmet tekstinnhold for første element med gitt navn; tom etter trim
/// regnes som fraværende.
fn child_text(root: Node, tag: &str) -> Option<String> {
    root.descendants()
        .find(|n| n.has_tag_name(tag))
        .and_then(|n| n.text())
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}

/// Løpende tidsmarkør. Lokal for ett parse-kall og slipper aldri ut;
/// hvert push rykker markøren frem med nøyaktig segmentets varighet.
struct Cursor {
    t: f64,
    segments: Vec<Segment>,
}

impl Cursor {
    fn new() -> Self {
        Self {
            t: 0.0,
            segments: Vec::new(),
        }
    }

    fn push_steady(&mut self, dur: f64, ftp: f64, label: &str) -> Segment {
        let s = Segment::Steady {
            start_sec: self.t,
            end_sec: self.t + dur,
            ftp,
            label: Some(label.to_string()),
        };
        self.segments.push(s.clone());
        self.t += dur;
        s
    }

    fn push_ramp(&mut self, dur: f64, low: f64, high: f64, label: &str) -> Segment {
        let s = Segment::Ramp {
            start_sec: self.t,
            end_sec: self.t + dur,
            ftp_low: low,
            ftp_high: high,
            label: Some(label.to_string()),
        };
        self.segments.push(s.clone());
        self.t += dur;
        s
    }

    fn push_free(&mut self, dur: f64, label: &str) -> Segment {
        let s = Segment::Free {
            start_sec: self.t,
            end_sec: self.t + dur,
            label: Some(label.to_string()),
        };
        self.segments.push(s.clone());
        self.t += dur;
        s
    }
}

/// Parser rå .zwo-tekst til et Workout.
///
/// Feiler kun når `<workout_file>` eller `<workout>` mangler. Tekst som
/// ikke lar seg lese som XML har heller ikke noe rot-element og faller i
/// samme kategori.
pub fn parse_zwo(xml_text: &str) -> Result<Workout, FormatError> {
    let doc = Document::parse(xml_text).map_err(|_| FormatError::MissingWorkoutFile)?;

    let root = doc
        .descendants()
        .find(|n| n.has_tag_name("workout_file"))
        .ok_or(FormatError::MissingWorkoutFile)?;

    let workout_el = root
        .descendants()
        .find(|n| n.has_tag_name("workout"))
        .ok_or(FormatError::MissingWorkout)?;

    let name = child_text(root, "name");
    let description = child_text(root, "description");

    let mut tags = Vec::new();
    for tags_el in root.descendants().filter(|n| n.has_tag_name("tags")) {
        for tag_el in tags_el.children().filter(|n| n.has_tag_name("tag")) {
            match tag_el.attribute("name").filter(|n| !n.is_empty()) {
                Some(n) => tags.push(Tag { name: n.to_string() }),
                None => debug!("skipping <tag> without name attribute"),
            }
        }
    }

    let mut cur = Cursor::new();
    let mut nodes: Vec<WorkoutNode> = Vec::new();

    for step in workout_el.children().filter(|n| n.is_element()) {
        let kind = step.tag_name().name();
        match kind {
            "Warmup" | "Cooldown" => {
                let dur = num_attr(step, "Duration").unwrap_or(0.0);
                let low = num_attr(step, "PowerLow")
                    .or_else(|| num_attr(step, "Power"))
                    .unwrap_or(0.0);
                let high = num_attr(step, "PowerHigh")
                    .or_else(|| num_attr(step, "Power"))
                    .unwrap_or(low);
                let seg = if low != high {
                    cur.push_ramp(dur, low, high, kind)
                } else {
                    cur.push_steady(dur, low, kind)
                };
                nodes.push(WorkoutNode::Segment(seg));
            }
            "SteadyState" => {
                let dur = num_attr(step, "Duration").unwrap_or(0.0);
                let p = num_attr(step, "Power").unwrap_or(0.0);
                nodes.push(WorkoutNode::Segment(cur.push_steady(dur, p, "Steady")));
            }
            "FreeRide" => {
                let dur = num_attr(step, "Duration").unwrap_or(0.0);
                nodes.push(WorkoutNode::Segment(cur.push_free(dur, "Free ride")));
            }
            "IntervalsT" => {
                let repeat = num_attr(step, "Repeat").unwrap_or(1.0).max(0.0).ceil() as u32;
                let on_dur = num_attr(step, "OnDuration").unwrap_or(0.0);
                let off_dur = num_attr(step, "OffDuration").unwrap_or(0.0);
                let on_p = num_attr(step, "OnPower").unwrap_or(0.0);
                let off_p = num_attr(step, "OffPower").unwrap_or(0.0);

                let mut group_segments = Vec::new();
                for i in 0..repeat {
                    group_segments.push(cur.push_steady(
                        on_dur,
                        on_p,
                        &format!("On {}/{}", i + 1, repeat),
                    ));
                    if off_dur > 0.0 {
                        group_segments.push(cur.push_steady(
                            off_dur,
                            off_p,
                            &format!("Off {}/{}", i + 1, repeat),
                        ));
                    }
                }

                nodes.push(WorkoutNode::Group(SegmentGroup {
                    repeat,
                    on_duration: on_dur,
                    off_duration: off_dur,
                    on_power: on_p,
                    off_power: off_p,
                    text: format!("{}x", repeat),
                    segments: group_segments,
                }));
            }
            other => {
                // Ukjente steg skal ikke velte parsingen: med varighet blir
                // de et free-segment, uten varighet hoppes de helt over.
                match num_attr(step, "Duration") {
                    Some(dur) if dur != 0.0 => {
                        nodes.push(WorkoutNode::Segment(cur.push_free(dur, other)));
                    }
                    _ => debug!("ignoring <{}> step without duration", other),
                }
            }
        }
    }

    info!(
        "parsed .zwo: {} nodes, {} segments, {} tags",
        nodes.len(),
        cur.segments.len(),
        tags.len()
    );

    Ok(Workout {
        name,
        description,
        segments: cur.segments,
        nodes,
        tags,
    })
}
