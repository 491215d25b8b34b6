use serde::{Deserialize, Serialize};

use crate::zones::Zone;

/// Elementært, udelelig tidslinje-intervall. start_sec/end_sec er sekunder
/// fra øktstart; segmentene ligger kontinuerlig fra 0 (ingen hull/overlapp).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Segment {
    #[serde(rename_all = "camelCase")]
    Steady {
        start_sec: f64,
        end_sec: f64,
        /// 0.0-2.0 (0.95 = 95 % FTP)
        ftp: f64,
        #[serde(skip_serializing_if = "Option::is_none")]
        label: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Ramp {
        start_sec: f64,
        end_sec: f64,
        ftp_low: f64,
        ftp_high: f64,
        #[serde(skip_serializing_if = "Option::is_none")]
        label: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Free {
        start_sec: f64,
        end_sec: f64,
        #[serde(skip_serializing_if = "Option::is_none")]
        label: Option<String>,
    },
}

impl Segment {
    pub fn start_sec(&self) -> f64 {
        match self {
            Segment::Steady { start_sec, .. }
            | Segment::Ramp { start_sec, .. }
            | Segment::Free { start_sec, .. } => *start_sec,
        }
    }

    pub fn end_sec(&self) -> f64 {
        match self {
            Segment::Steady { end_sec, .. }
            | Segment::Ramp { end_sec, .. }
            | Segment::Free { end_sec, .. } => *end_sec,
        }
    }

    pub fn duration(&self) -> f64 {
        self.end_sec() - self.start_sec()
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            Segment::Steady { label, .. }
            | Segment::Ramp { label, .. }
            | Segment::Free { label, .. } => label.as_deref(),
        }
    }
}

/// Gjentatt on/off-blokk ("5x 3min på / 2min av"). Én strukturell node som
/// ekspanderer til flere flate steady-segmenter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentGroup {
    pub repeat: u32,
    pub on_duration: f64,
    pub off_duration: f64,
    pub on_power: f64,
    pub off_power: f64,
    /// "5x"; UI-et formatterer videre
    pub text: String,
    pub segments: Vec<Segment>,
}

/// Node på forfatter-nivå: enten et enkeltsegment eller en intervallblokk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WorkoutNode {
    Group(SegmentGroup),
    Segment(Segment),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
}

/// Toppnivå parse-resultat. Bygges én gang per vellykket parse og er
/// deretter uforanderlig; re-parse erstatter hele verdien.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Workout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Flat, kronologisk liste (for metrikker og graf)
    pub segments: Vec<Segment>,
    /// Strukturen slik den er forfattet (for visning)
    pub nodes: Vec<WorkoutNode>,
    pub tags: Vec<Tag>,
}

/// Visningsvalg fra verten. Påvirker kun formattering, aldri parsing
/// eller metrikker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DisplayCfg {
    pub ftp_watts: f64,
    pub show_watts: bool,
}

impl Default for DisplayCfg {
    fn default() -> Self {
        Self {
            ftp_watts: 230.0,
            show_watts: false,
        }
    }
}

/// Én visningslinje per segment i sidepanelet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentLine {
    pub label: String,
    pub text: String,
    /// None for free ride; verten velger nøytral farge
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Sekunder og andel av total per sone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneShare {
    pub zone: Zone,
    pub seconds: f64,
    pub share: f64,
    pub color: String,
}

/// Rapporten verten viser: totals, TSS, sonefordeling og segmentlinjer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub total_sec: f64,
    pub total_text: String,
    pub segment_count: usize,
    pub tss: i64,
    pub zones: Vec<ZoneShare>,
    pub segments: Vec<SegmentLine>,
}
