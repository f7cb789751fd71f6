//! Remedy payload.

use catalog::EntityId;
use serde::Serialize;

use crate::field::Field;
use crate::rating::RatingSummary;
use crate::views::ReviewView;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RemedyView {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    pub is_fav: bool,
    /// `average_rating` and `review_count`, when reviews were loaded.
    #[serde(flatten)]
    pub rating: Field<RatingSummary>,
    #[serde(skip_serializing_if = "Field::is_omitted")]
    pub reviews: Field<Vec<ReviewView>>,
}
