#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    pub fn label(&self) -> &'static str {
        match self {
            Trend::Up => "Alta",
            Trend::Down => "Baixa",
            Trend::Stable => "Estável",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    High,
    Low,
    Medium,
}

/// One card's generated numbers for the current snapshot.
#[derive(Debug, Clone)]
pub struct CardMetrics {
    pub name: String,

    pub rtp: u8,         // 60..=98
    pub multiplier: u16, // 100..=200
    pub trend: Trend,
}

/// Hot/cold schedule derived from the card name and the wall clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeWindow {
    pub next_high: String, // "HH:MM"
    pub next_low: String,  // "HH:MM"
    pub status: Status,
    pub recommendation: &'static str,
}

#[derive(Debug, Clone)]
pub struct CardRow {
    pub name: String,
    pub url: String,

    pub rtp: u8,
    pub multiplier: u16,
    pub trend: Trend,

    pub window: TimeWindow,
}

/// Everything the view shows for one generation. Built once per refresh
/// and swapped in wholesale; rows are never mutated in place.
#[derive(Debug, Clone)]
pub struct Snapshot {
    rows: Vec<CardRow>,
}

impl Snapshot {
    /// Sorts rows by RTP descending. Ties keep catalog order (stable sort).
    pub fn from_rows(mut rows: Vec<CardRow>) -> Self {
        rows.sort_by(|a, b| b.rtp.cmp(&a.rtp));
        Snapshot { rows }
    }

    pub fn rows(&self) -> &[CardRow] {
        &self.rows
    }

    pub fn featured(&self) -> Option<&CardRow> {
        self.rows.first()
    }

    /// Ranks 2-3, shown as compact alternatives under the featured card.
    pub fn alternatives(&self) -> &[CardRow] {
        if self.rows.len() <= 1 {
            &[]
        } else {
            &self.rows[1..self.rows.len().min(3)]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, rtp: u8) -> CardRow {
        CardRow {
            name: name.to_string(),
            url: String::new(),
            rtp,
            multiplier: 150,
            trend: Trend::Stable,
            window: TimeWindow {
                next_high: "00:00".to_string(),
                next_low: "00:00".to_string(),
                status: Status::Medium,
                recommendation: "",
            },
        }
    }

    #[test]
    fn snapshot_sorts_by_rtp_descending() {
        let snap = Snapshot::from_rows(vec![row("a", 70), row("b", 95), row("c", 82)]);
        let rtps: Vec<u8> = snap.rows().iter().map(|r| r.rtp).collect();
        assert_eq!(rtps, vec![95, 82, 70]);
    }

    #[test]
    fn featured_is_highest_rtp() {
        let snap = Snapshot::from_rows(vec![row("a", 70), row("b", 95), row("c", 82)]);
        assert_eq!(snap.featured().unwrap().name, "b");
    }

    #[test]
    fn alternatives_are_ranks_two_and_three() {
        let snap = Snapshot::from_rows(vec![row("a", 70), row("b", 95), row("c", 82), row("d", 61)]);
        let names: Vec<&str> = snap.alternatives().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["c", "a"]);
    }

    #[test]
    fn alternatives_empty_for_single_row() {
        let snap = Snapshot::from_rows(vec![row("a", 70)]);
        assert!(snap.alternatives().is_empty());
        assert!(Snapshot::from_rows(vec![]).featured().is_none());
    }
}
