//! Video payload.

use catalog::EntityId;
use serde::Serialize;

use crate::field::Field;
use crate::rating::RatingSummary;
use crate::views::ReviewView;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoView {
    pub id: EntityId,
    pub title: String,
    pub url: String,
    pub is_fav: bool,
    #[serde(flatten)]
    pub rating: Field<RatingSummary>,
    #[serde(skip_serializing_if = "Field::is_omitted")]
    pub reviews: Field<Vec<ReviewView>>,
}
