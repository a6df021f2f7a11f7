use crate::model::{Status, TimeWindow};

pub const REC_PEAK: &str = "🔥 MOMENTO IDEAL! RTP e multiplicadores em alta";
pub const REC_WAIT: &str = "⚠️ Aguarde um pouco. Retornos baixos detectados";
pub const REC_GOOD: &str = "✨ Bom momento para jogar! Chances elevadas";
pub const REC_NEUTRAL: &str = "Momento neutro para jogar";

/// Sum of the character codes of the card name. Drives everything else
/// in this module, so the whole schedule is stable per name.
pub fn name_hash(name: &str) -> u32 {
    name.chars().map(|c| c as u32).sum()
}

/// Derives the hot/cold schedule for a card from its name and the current
/// wall clock. Pure: the same (name, hour, minute) always yields the same
/// window. `hour` is 0-23, `minute` 0-59.
pub fn predict(name: &str, hour: u32, minute: u32) -> TimeWindow {
    let hash = name_hash(name);
    // Roughly one card in three gets the favorable near-term schedule.
    let priority = hash % 3 == 0;

    let (high_hours, low_hours) = if priority {
        (
            [hour % 24, (hour + 1) % 24, (hour + 2) % 24],
            [(hour + 6) % 24, (hour + 12) % 24, (hour + 18) % 24],
        )
    } else {
        (
            [hash % 6 + 6, hash % 4 + 14, hash % 3 + 20],
            [hash % 3 + 2, hash % 5 + 10, hash % 4 + 16],
        )
    };

    let minute_mark = if priority {
        [15u32, 30, 45][(hash % 3) as usize]
    } else {
        hash % 60
    };

    let next_high = next_after(&high_hours, hour);
    let next_low = next_after(&low_hours, hour);

    let (status, recommendation) = if priority && minute <= 45 {
        (Status::High, REC_PEAK)
    } else if near_any(&high_hours, hour) {
        (Status::High, REC_PEAK)
    } else if near_any(&low_hours, hour) {
        (Status::Low, REC_WAIT)
    } else if hash % 4 == 0 {
        (Status::High, REC_GOOD)
    } else {
        (Status::Medium, REC_NEUTRAL)
    };

    TimeWindow {
        next_high: format_clock(next_high, minute_mark),
        next_low: format_clock(next_low, minute_mark),
        status,
        recommendation,
    }
}

/// First hour in list order strictly after `current`; when the whole list
/// is behind us the first entry rolls over to tomorrow.
fn next_after(hours: &[u32; 3], current: u32) -> u32 {
    hours
        .iter()
        .copied()
        .find(|&h| h > current)
        .unwrap_or(hours[0] + 24)
}

/// Within one hour either side, without midnight wrap-around.
fn near_any(hours: &[u32; 3], current: u32) -> bool {
    hours.iter().any(|&h| h.abs_diff(current) <= 1)
}

fn format_clock(hour: u32, minute: u32) -> String {
    format!("{:02}:{:02}", hour % 24, minute)
}
