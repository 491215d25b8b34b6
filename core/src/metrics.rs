use crate::types::Segment;
use crate::zones::ftp_to_zone;

/// Fast antatt intensitet for free ride (moderat innsats per konvensjon).
const FREE_RIDE_IF: f64 = 0.5;

/// Mål-brøk for et segment: steady = ftp, ramp = midtpunktet av lav/høy,
/// free = ingen.
fn target_ftp_frac(segment: &Segment) -> Option<f64> {
    match segment {
        Segment::Steady { ftp, .. } => Some(*ftp),
        Segment::Ramp {
            ftp_low, ftp_high, ..
        } => Some((ftp_low + ftp_high) / 2.0),
        Segment::Free { .. } => None,
    }
}

/// Total varighet = end_sec på siste segment, 0 for tom liste.
/// Segmentene ligger kontinuerlig fra 0, så siste sluttpunkt er allerede
/// summen; ikke summer enkeltvarigheter.
pub fn total_duration(segments: &[Segment]) -> f64 {
    segments.last().map(|s| s.end_sec()).unwrap_or(0.0)
}

/// Sekunder per sone (Z1..Z7 i rekkefølge). Free-segmenter teller mot
/// total varighet men ikke mot noen sone; ramp attribueres i sin helhet
/// til sonen for midtpunktet av lav/høy.
pub fn time_in_zone(segments: &[Segment]) -> [f64; 7] {
    let mut secs = [0.0f64; 7];
    for s in segments {
        if let Some(frac) = target_ftp_frac(s) {
            secs[ftp_to_zone(frac) as usize] += s.duration();
        }
    }
    secs
}

/// TSS-estimat: sum av timer * IF^2 * 100, avrundet til heltall.
/// IF = brøken for steady, midtpunktet for ramp, 0.5 for free.
pub fn training_stress(segments: &[Segment]) -> i64 {
    let mut score = 0.0f64;
    for s in segments {
        let hours = s.duration() / 3600.0;
        let r_if = target_ftp_frac(s).unwrap_or(FREE_RIDE_IF);
        score += hours * r_if * r_if * 100.0;
    }
    score.round() as i64
}
