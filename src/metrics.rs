use crate::catalog::Catalog;
use crate::model::{CardMetrics, Trend};
use rand::Rng;

/// Rolls a fresh set of display numbers for every card in the catalog.
/// Each call is independent; previous values are discarded, not blended.
pub fn generate(catalog: &Catalog, rng: &mut impl Rng) -> Vec<CardMetrics> {
    catalog
        .cards
        .iter()
        .map(|card| CardMetrics {
            name: card.name.clone(),
            rtp: rng.gen_range(60..=98),
            multiplier: rng.gen_range(100..=200),
            trend: match rng.gen_range(0..3u8) {
                0 => Trend::Up,
                1 => Trend::Down,
                _ => Trend::Stable,
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn one_metric_set_per_card() {
        let catalog = Catalog::builtin();
        let mut rng = StdRng::seed_from_u64(7);
        let metrics = generate(&catalog, &mut rng);
        assert_eq!(metrics.len(), catalog.cards.len());
        for (card, m) in catalog.cards.iter().zip(&metrics) {
            assert_eq!(card.name, m.name);
        }
    }

    #[test]
    fn values_stay_in_range() {
        let catalog = Catalog::builtin();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            for m in generate(&catalog, &mut rng) {
                assert!((60..=98).contains(&m.rtp), "rtp {} out of range", m.rtp);
                assert!(
                    (100..=200).contains(&m.multiplier),
                    "multiplier {} out of range",
                    m.multiplier
                );
            }
        }
    }

    #[test]
    fn all_trends_eventually_appear() {
        let catalog = Catalog::builtin();
        let mut rng = StdRng::seed_from_u64(99);
        let mut seen = [false; 3];
        for _ in 0..50 {
            for m in generate(&catalog, &mut rng) {
                match m.trend {
                    Trend::Up => seen[0] = true,
                    Trend::Down => seen[1] = true,
                    Trend::Stable => seen[2] = true,
                }
            }
        }
        assert_eq!(seen, [true; 3]);
    }
}
