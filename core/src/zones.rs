use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Syv soner etter FTP-brøk (Zwift-standardskjemaet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Zone {
    Z1,
    Z2,
    Z3,
    Z4,
    Z5,
    Z6,
    Z7,
}

impl Zone {
    pub const ALL: [Zone; 7] = [
        Zone::Z1,
        Zone::Z2,
        Zone::Z3,
        Zone::Z4,
        Zone::Z5,
        Zone::Z6,
        Zone::Z7,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Zone::Z1 => "Z1",
            Zone::Z2 => "Z2",
            Zone::Z3 => "Z3",
            Zone::Z4 => "Z4",
            Zone::Z5 => "Z5",
            Zone::Z6 => "Z6",
            Zone::Z7 => "Z7",
        }
    }
}

struct ZoneSpec {
    zone: Zone,
    /// Øvre grense (eksklusiv); en brøk på grensen hører til sonen over.
    upper: f64,
    color: &'static str,
}

/// Én kanonisk tabell for terskler og farger. Ikke dupliser verdiene.
static ZONE_TABLE: Lazy<[ZoneSpec; 7]> = Lazy::new(|| {
    [
        ZoneSpec { zone: Zone::Z1, upper: 0.6, color: "#7f7f7f" },  // Gray (Recovery)
        ZoneSpec { zone: Zone::Z2, upper: 0.76, color: "#3284ff" }, // Blue
        ZoneSpec { zone: Zone::Z3, upper: 0.9, color: "#5aca5a" },  // Green
        ZoneSpec { zone: Zone::Z4, upper: 1.05, color: "#ffcc33" }, // Yellow
        ZoneSpec { zone: Zone::Z5, upper: 1.19, color: "#ff6633" }, // Orange
        ZoneSpec { zone: Zone::Z6, upper: 1.5, color: "#ff3333" },  // Red
        ZoneSpec { zone: Zone::Z7, upper: f64::INFINITY, color: "#800080" }, // Purple
    ]
});

/// FTP-brøk til sone. Total for alle reelle verdier: alt under laveste
/// terskel er Z1, alt på eller over øverste er Z7.
pub fn ftp_to_zone(p: f64) -> Zone {
    for spec in ZONE_TABLE.iter() {
        if p < spec.upper {
            return spec.zone;
        }
    }
    Zone::Z7
}

/// Visningsfarge for sonen, fra samme tabell som tersklene.
pub fn zone_color(zone: Zone) -> &'static str {
    ZONE_TABLE[zone as usize].color
}

/// "10min" når sekundresten er 0, ellers "1min 30s".
pub fn format_duration(sec: f64) -> String {
    let m = (sec / 60.0).floor() as i64;
    let s = sec % 60.0;
    if s == 0.0 {
        format!("{}min", m)
    } else {
        format!("{}min {}s", m, s)
    }
}
