//! Rating aggregation over a subject's reviews.

use catalog::Review;
use serde::Serialize;

/// Valid star ratings.
pub const RATING_RANGE: std::ops::RangeInclusive<u8> = 1..=5;

/// Mean rating and number of ratings that went into it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct RatingSummary {
    pub average_rating: f64,
    pub review_count: u64,
}

/// Aggregates the ratings of `reviews`.
///
/// Ratings outside 1..=5 are skipped and do not count. An empty input (or
/// one with only malformed ratings) yields `0.0` / `0`.
pub fn aggregate<'a>(reviews: impl IntoIterator<Item = &'a Review>) -> RatingSummary {
    let mut sum: u64 = 0;
    let mut count: u64 = 0;

    for review in reviews {
        if !RATING_RANGE.contains(&review.rating) {
            tracing::debug!(
                review_id = %review.id,
                rating = review.rating,
                "skipping out-of-range rating"
            );
            metrics::counter!("projections_records_skipped", "reason" => "rating_out_of_range")
                .increment(1);
            continue;
        }
        sum += u64::from(review.rating);
        count += 1;
    }

    if count == 0 {
        return RatingSummary::default();
    }

    RatingSummary {
        average_rating: round_one_decimal(sum as f64 / count as f64),
        review_count: count,
    }
}

/// Rounds to one decimal place, halves away from zero.
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{EntityId, SubjectRef, UserId};

    fn reviews(ratings: &[u8]) -> Vec<Review> {
        let subject = SubjectRef::remedy(EntityId::new());
        ratings
            .iter()
            .map(|&r| Review::new(UserId::new(), subject, r, ""))
            .collect()
    }

    #[test]
    fn empty_is_zero() {
        assert_eq!(
            aggregate(&reviews(&[])),
            RatingSummary {
                average_rating: 0.0,
                review_count: 0
            }
        );
    }

    #[test]
    fn five_four_three_averages_four() {
        let summary = aggregate(&reviews(&[5, 4, 3]));
        assert_eq!(summary.average_rating, 4.0);
        assert_eq!(summary.review_count, 3);
    }

    #[test]
    fn average_rounds_to_one_decimal() {
        // 14 / 3 = 4.666...
        assert_eq!(aggregate(&reviews(&[5, 5, 4])).average_rating, 4.7);
        // 13 / 3 = 4.333...
        assert_eq!(aggregate(&reviews(&[5, 4, 4])).average_rating, 4.3);
    }

    #[test]
    fn half_rounds_away_from_zero() {
        assert_eq!(round_one_decimal(4.25), 4.3);
        assert_eq!(round_one_decimal(1.05), 1.1);
        assert_eq!(round_one_decimal(0.0), 0.0);
    }

    #[test]
    fn out_of_range_ratings_are_skipped() {
        let summary = aggregate(&reviews(&[0, 5, 9, 3]));
        assert_eq!(summary.average_rating, 4.0);
        assert_eq!(summary.review_count, 2);
    }

    #[test]
    fn only_malformed_ratings_is_zero() {
        assert_eq!(aggregate(&reviews(&[0, 6])), RatingSummary::default());
    }

    #[test]
    fn average_stays_within_bounds() {
        let cases: [&[u8]; 5] = [&[1], &[5], &[1, 5], &[2, 2, 3, 5, 1], &[4; 17]];
        for ratings in cases {
            let summary = aggregate(&reviews(ratings));
            let mean = ratings.iter().map(|&r| r as f64).sum::<f64>() / ratings.len() as f64;
            assert!((1.0..=5.0).contains(&summary.average_rating));
            assert_eq!(summary.average_rating, round_one_decimal(mean));
        }
    }
}
