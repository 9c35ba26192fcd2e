//! Priority score for allocating account-management attention

use crate::client::ClientRecord;

/// Calculate a client's attention priority score. Higher = more urgent.
///
/// The score multiplies four factors:
/// - risk: inverse of the IVI score, 0 for a perfect score
/// - value: log10 of premium, floored at 1,000 so small or zero premiums
///   stay in the log domain, scaled to roughly [0.3, 1] for typical books
/// - actionability: profitable at-risk clients are worth the most effort,
///   heavy loss-makers the least (1.2 / 1.0 / 0.7 step on loss ratio)
/// - size: member count scaled by 100, capped at 1.5
///
/// Result is rounded to two decimals. Strictly decreasing in `ivi_score`,
/// non-decreasing in `total_members` up to the 150-member cap, and steps
/// down as `loss_ratio` crosses 1.0 and 1.5.
pub fn calculate_priority_score(
    ivi_score: f64,
    premium: f64,
    loss_ratio: f64,
    total_members: u32,
) -> f64 {
    let risk_factor = (100.0 - ivi_score) / 100.0;

    let value_factor = premium.max(1000.0).log10() / 10.0;

    let actionability = if loss_ratio < 1.0 {
        1.2 // profitable - worth saving
    } else if loss_ratio < 1.5 {
        1.0 // moderate loss - salvageable
    } else {
        0.7 // high loss - may not be worth saving
    };

    let size_factor = (total_members as f64 / 100.0).min(1.5);

    let score = risk_factor * value_factor * actionability * size_factor * 100.0;
    (score * 100.0).round() / 100.0
}

/// Priority score for a score-table record, treating a missing loss ratio
/// as break-even
pub fn client_priority_score(client: &ClientRecord) -> f64 {
    calculate_priority_score(
        client.ivi_score,
        client.written_premium,
        client.loss_ratio.unwrap_or(1.0),
        client.total_members,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_perfect_score_zeroes_priority() {
        let score = calculate_priority_score(100.0, 10_000.0, 0.5, 100);
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_reference_value() {
        // risk 1.0, value log10(1e6)/10 = 0.6, actionability 1.2, size capped 1.5
        let score = calculate_priority_score(0.0, 1_000_000.0, 0.5, 200);
        assert_relative_eq!(score, 108.0);
    }

    #[test]
    fn test_premium_floor_avoids_log_domain_error() {
        let at_floor = calculate_priority_score(50.0, 1000.0, 0.5, 100);
        for premium in [0.0, -5_000.0, 999.0] {
            let score = calculate_priority_score(50.0, premium, 0.5, 100);
            assert!(score.is_finite());
            assert_relative_eq!(score, at_floor);
        }
    }

    #[test]
    fn test_strictly_decreasing_in_ivi() {
        let mut last = f64::MAX;
        for ivi in [0.0, 25.0, 50.0, 75.0, 99.0] {
            let score = calculate_priority_score(ivi, 500_000.0, 0.9, 120);
            assert!(score < last, "score not decreasing at ivi={ivi}");
            last = score;
        }
    }

    #[test]
    fn test_size_factor_saturates_at_150_members() {
        let base = calculate_priority_score(40.0, 200_000.0, 0.8, 50);
        let larger = calculate_priority_score(40.0, 200_000.0, 0.8, 150);
        assert!(larger > base);

        // Beyond 150 members the size factor is pinned at 1.5
        let capped = calculate_priority_score(40.0, 200_000.0, 0.8, 10_000);
        assert_relative_eq!(capped, larger);
    }

    #[test]
    fn test_actionability_steps_down() {
        let profitable = calculate_priority_score(40.0, 200_000.0, 0.99, 100);
        let moderate = calculate_priority_score(40.0, 200_000.0, 1.0, 100);
        let heavy = calculate_priority_score(40.0, 200_000.0, 1.5, 100);

        assert!(profitable > moderate);
        assert!(moderate > heavy);

        // Step function: flat within each bucket
        assert_relative_eq!(
            calculate_priority_score(40.0, 200_000.0, 1.1, 100),
            calculate_priority_score(40.0, 200_000.0, 1.49, 100),
        );
    }

    #[test]
    fn test_rounded_to_two_decimals() {
        let score = calculate_priority_score(37.0, 123_456.0, 1.1, 87);
        assert_relative_eq!(score, (score * 100.0).round() / 100.0);
    }

    #[test]
    fn test_idempotent() {
        let a = calculate_priority_score(42.0, 250_000.0, 1.3, 75);
        let b = calculate_priority_score(42.0, 250_000.0, 1.3, 75);
        assert_eq!(a.to_bits(), b.to_bits());
    }
}
