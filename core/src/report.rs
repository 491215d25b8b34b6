use serde_path_to_error as spte;

use crate::metrics::{time_in_zone, total_duration, training_stress};
use crate::types::{DisplayCfg, Segment, SegmentLine, Workout, WorkoutReport, ZoneShare};
use crate::zones::{format_duration, ftp_to_zone, zone_color, Zone};
use crate::zwo::parse_zwo;

/// Prosent- eller watt-tekst for en FTP-brøk, styrt av visningsvalget.
fn power_text(frac: f64, cfg: &DisplayCfg) -> String {
    if cfg.show_watts {
        format!("{}W", (frac * cfg.ftp_watts).round() as i64)
    } else {
        format!("{}%", (frac * 100.0).round() as i64)
    }
}

/// Visningstekst per segment: "10min @ 95%", "8min ramp 50%-75%",
/// "5min free ride".
pub fn segment_text(segment: &Segment, cfg: &DisplayCfg) -> String {
    let dur = format_duration(segment.duration());
    match segment {
        Segment::Steady { ftp, .. } => format!("{} @ {}", dur, power_text(*ftp, cfg)),
        Segment::Ramp {
            ftp_low, ftp_high, ..
        } => format!(
            "{} ramp {}-{}",
            dur,
            power_text(*ftp_low, cfg),
            power_text(*ftp_high, cfg)
        ),
        Segment::Free { .. } => format!("{} free ride", dur),
    }
}

/// Sonefarge for segmentet: steady etter egen brøk, ramp etter midtpunktet.
/// Free har ingen sone; verten velger nøytral farge selv.
pub fn segment_color(segment: &Segment) -> Option<&'static str> {
    match segment {
        Segment::Steady { ftp, .. } => Some(zone_color(ftp_to_zone(*ftp))),
        Segment::Ramp {
            ftp_low, ftp_high, ..
        } => Some(zone_color(ftp_to_zone((ftp_low + ftp_high) / 2.0))),
        Segment::Free { .. } => None,
    }
}

fn segment_label(segment: &Segment) -> String {
    match segment.label() {
        Some(l) => l.to_string(),
        None => match segment {
            Segment::Free { .. } => "Free Ride".to_string(),
            _ => "Interval".to_string(),
        },
    }
}

/// Bygger rapporten verten viser: totals, TSS, sonefordeling og linjer.
pub fn build_report(workout: &Workout, cfg: &DisplayCfg) -> WorkoutReport {
    let total_sec = total_duration(&workout.segments);
    let tiz = time_in_zone(&workout.segments);

    let zones = Zone::ALL
        .iter()
        .map(|&z| {
            let seconds = tiz[z as usize];
            ZoneShare {
                zone: z,
                seconds,
                share: if total_sec > 0.0 {
                    seconds / total_sec
                } else {
                    0.0
                },
                color: zone_color(z).to_string(),
            }
        })
        .collect();

    let segments = workout
        .segments
        .iter()
        .map(|s| SegmentLine {
            label: segment_label(s),
            text: segment_text(s, cfg),
            color: segment_color(s).map(str::to_string),
        })
        .collect();

    WorkoutReport {
        name: workout.name.clone(),
        description: workout.description.clone(),
        total_sec,
        total_text: format_duration(total_sec),
        segment_count: workout.segments.len(),
        tss: training_stress(&workout.segments),
        zones,
        segments,
    }
}

fn parse_cfg(cfg_json: Option<&str>) -> Result<DisplayCfg, String> {
    match cfg_json {
        None => Ok(DisplayCfg::default()),
        Some(txt) => {
            let mut de = serde_json::Deserializer::from_str(txt);
            spte::deserialize(&mut de)
                .map_err(|e| format!("parse error (DisplayCfg) at {}: {}", e.path(), e))
        }
    }
}

/// JSON-grensesnitt mot verten: .zwo-tekst og valgfri cfg-JSON inn,
/// rapport-JSON ut.
pub fn workout_report_json(xml_text: &str, cfg_json: Option<&str>) -> Result<String, String> {
    let cfg = parse_cfg(cfg_json)?;
    let workout = parse_zwo(xml_text).map_err(|e| e.to_string())?;
    let report = build_report(&workout, &cfg);
    serde_json::to_string(&report).map_err(|e| e.to_string())
}

/// Hele parse-resultatet som JSON (segmenter, noder og metadata), for
/// graftegningen i verten.
pub fn parse_zwo_json(xml_text: &str) -> Result<String, String> {
    let workout = parse_zwo(xml_text).map_err(|e| e.to_string())?;
    serde_json::to_string(&workout).map_err(|e| e.to_string())
}
