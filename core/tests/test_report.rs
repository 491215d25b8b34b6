// tests/test_report.rs
use serde_json::Value;
use zwoview_core::{
    build_report, parse_zwo, parse_zwo_json, segment_color, segment_text, workout_report_json,
    DisplayCfg, Segment, Workout, Zone,
};

const ONE_STEADY: &str = r#"<workout_file>
  <name>FTP Hour</name>
  <workout>
    <SteadyState Duration="600" Power="0.95"/>
  </workout>
</workout_file>"#;

#[test]
fn test_segment_text_percent_and_watts() {
    let seg = Segment::Steady {
        start_sec: 0.0,
        end_sec: 600.0,
        ftp: 0.95,
        label: None,
    };

    let pct = DisplayCfg {
        ftp_watts: 200.0,
        show_watts: false,
    };
    assert_eq!(segment_text(&seg, &pct), "10min @ 95%");

    let watts = DisplayCfg {
        ftp_watts: 200.0,
        show_watts: true,
    };
    assert_eq!(segment_text(&seg, &watts), "10min @ 190W");
}

#[test]
fn test_segment_text_ramp_and_free() {
    let cfg = DisplayCfg::default();

    let ramp = Segment::Ramp {
        start_sec: 0.0,
        end_sec: 480.0,
        ftp_low: 0.5,
        ftp_high: 0.75,
        label: None,
    };
    assert_eq!(segment_text(&ramp, &cfg), "8min ramp 50%-75%");

    let free = Segment::Free {
        start_sec: 0.0,
        end_sec: 300.0,
        label: None,
    };
    assert_eq!(segment_text(&free, &cfg), "5min free ride");
}

#[test]
fn test_segment_color_by_zone() {
    let steady = Segment::Steady {
        start_sec: 0.0,
        end_sec: 60.0,
        ftp: 0.95,
        label: None,
    };
    assert_eq!(segment_color(&steady), Some("#ffcc33")); // Z4

    let ramp = Segment::Ramp {
        start_sec: 0.0,
        end_sec: 60.0,
        ftp_low: 0.5,
        ftp_high: 0.9,
        label: None,
    };
    assert_eq!(segment_color(&ramp), Some("#3284ff")); // midtpunkt 0.7 -> Z2

    let free = Segment::Free {
        start_sec: 0.0,
        end_sec: 60.0,
        label: None,
    };
    assert_eq!(segment_color(&free), None);
}

#[test]
fn test_build_report_totals_and_shares() {
    let w = parse_zwo(ONE_STEADY).unwrap();
    let report = build_report(&w, &DisplayCfg::default());

    assert_eq!(report.name.as_deref(), Some("FTP Hour"));
    assert_eq!(report.total_sec, 600.0);
    assert_eq!(report.total_text, "10min");
    assert_eq!(report.segment_count, 1);
    assert_eq!(report.tss, 15); // 600/3600 * 0.95^2 * 100 = 15.04

    let z4 = report
        .zones
        .iter()
        .find(|z| z.zone == Zone::Z4)
        .expect("Z4 missing");
    assert_eq!(z4.seconds, 600.0);
    assert_eq!(z4.share, 1.0);

    // Alle syv soner rapporteres, også tomme
    assert_eq!(report.zones.len(), 7);
}

#[test]
fn test_report_json_with_cfg() {
    let out = workout_report_json(
        ONE_STEADY,
        Some(r#"{"ftpWatts": 250, "showWatts": true}"#),
    )
    .unwrap();
    let v: Value = serde_json::from_str(&out).unwrap();

    assert_eq!(v["name"], "FTP Hour");
    assert_eq!(v["totalText"], "10min");
    assert_eq!(v["segments"][0]["text"], "10min @ 238W"); // 0.95 * 250 avrundet
    assert_eq!(v["segments"][0]["label"], "Steady");
    assert_eq!(v["segments"][0]["color"], "#ffcc33");
}

#[test]
fn test_report_json_defaults_without_cfg() {
    let out = workout_report_json(ONE_STEADY, None).unwrap();
    let v: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["segments"][0]["text"], "10min @ 95%");
}

#[test]
fn test_report_json_bad_cfg_names_path() {
    let err = workout_report_json(ONE_STEADY, Some(r#"{"ftpWatts": "high"}"#)).unwrap_err();
    assert!(err.contains("ftpWatts"), "err was: {}", err);
}

#[test]
fn test_report_json_missing_workout() {
    let err = workout_report_json("<workout_file/>", None).unwrap_err();
    assert!(err.contains("missing <workout>"));
}

#[test]
fn test_label_fallback_without_label() {
    let w = Workout {
        segments: vec![Segment::Free {
            start_sec: 0.0,
            end_sec: 60.0,
            label: None,
        }],
        ..Workout::default()
    };
    let report = build_report(&w, &DisplayCfg::default());
    assert_eq!(report.segments[0].label, "Free Ride");
    assert_eq!(report.segments[0].color, None);
}

#[test]
fn test_parse_zwo_json_shape() {
    let out = parse_zwo_json(ONE_STEADY).unwrap();
    let v: Value = serde_json::from_str(&out).unwrap();

    assert_eq!(v["name"], "FTP Hour");
    assert_eq!(v["segments"][0]["kind"], "steady");
    assert_eq!(v["segments"][0]["startSec"], 0.0);
    assert_eq!(v["segments"][0]["endSec"], 600.0);
    assert_eq!(v["segments"][0]["ftp"], 0.95);
    assert_eq!(v["segments"][0]["label"], "Steady");
}
