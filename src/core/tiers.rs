use crate::domain::model::{BoundedTier, DistanceTier};
use crate::utils::error::{PricingError, Result};

/// The deliverable tier a distance fell into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchedTier<'a> {
    pub index: usize,
    pub tier: &'a BoundedTier,
}

/// First matching tier wins. Landing in the unreachable tier is an error,
/// never a price.
pub fn resolve_tier(distance: u64, tiers: &[DistanceTier]) -> Result<MatchedTier<'_>> {
    let meters = distance as f64;

    for (index, tier) in tiers.iter().enumerate() {
        match tier {
            DistanceTier::Bounded(bounded) if meters >= bounded.min && meters < bounded.max => {
                return Ok(MatchedTier {
                    index,
                    tier: bounded,
                });
            }
            DistanceTier::Unreachable { min } if meters >= *min => {
                return Err(PricingError::DeliveryNotPossible { min: *min });
            }
            _ => {}
        }
    }

    Err(PricingError::NoApplicableRange { distance })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounded(min: f64, max: f64, a: f64, b: f64) -> DistanceTier {
        DistanceTier::Bounded(BoundedTier {
            min,
            max,
            a,
            b,
            flag: None,
        })
    }

    fn helsinki_tiers() -> Vec<DistanceTier> {
        vec![
            bounded(0.0, 500.0, 0.0, 0.0),
            bounded(500.0, 1000.0, 100.0, 0.0),
            bounded(1000.0, 1500.0, 200.0, 0.0),
            bounded(1500.0, 2000.0, 200.0, 1.0),
            DistanceTier::Unreachable { min: 2000.0 },
        ]
    }

    #[test]
    fn test_resolves_each_bounded_tier() {
        let tiers = helsinki_tiers();
        let cases = [
            (0, 0),
            (177, 0),
            (499, 0),
            (500, 1),
            (999, 1),
            (1000, 2),
            (1499, 2),
            (1500, 3),
            (1999, 3),
        ];
        for (distance, expected) in cases {
            let matched = resolve_tier(distance, &tiers).unwrap();
            assert_eq!(matched.index, expected, "distance {}", distance);
        }
    }

    #[test]
    fn test_upper_bound_is_exclusive() {
        let tiers = helsinki_tiers();
        let matched = resolve_tier(1000, &tiers).unwrap();
        assert_eq!(matched.tier.min, 1000.0);
        assert_eq!(matched.tier.a, 200.0);
    }

    #[test]
    fn test_sentinel_means_delivery_not_possible() {
        let tiers = helsinki_tiers();
        for distance in [2000, 2001, 50_000] {
            match resolve_tier(distance, &tiers) {
                Err(PricingError::DeliveryNotPossible { min }) => assert_eq!(min, 2000.0),
                other => panic!("expected DeliveryNotPossible, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_gap_is_no_applicable_range() {
        let tiers = vec![
            bounded(0.0, 500.0, 0.0, 0.0),
            bounded(600.0, 1000.0, 0.0, 0.0),
            DistanceTier::Unreachable { min: 1000.0 },
        ];
        match resolve_tier(550, &tiers) {
            Err(PricingError::NoApplicableRange { distance }) => assert_eq!(distance, 550),
            other => panic!("expected NoApplicableRange, got {:?}", other),
        }
    }

    #[test]
    fn test_no_sentinel_past_last_range() {
        let tiers = vec![bounded(0.0, 500.0, 0.0, 0.0)];
        assert!(matches!(
            resolve_tier(500, &tiers),
            Err(PricingError::NoApplicableRange { distance: 500 })
        ));
    }
}
