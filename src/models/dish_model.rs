use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::entities::{dish, local};
use crate::utils::validator_utils::{validate_positive_price, validate_required};

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDishRequest {
    #[validate(custom(function = "validate_required"), length(max = 255))]
    pub name: String,

    #[validate(custom(function = "validate_required"))]
    pub description: String,

    #[validate(custom(function = "validate_required"))]
    pub photo_url: String,

    #[validate(custom(function = "validate_positive_price"))]
    pub price: Decimal,

    #[validate(range(min = 1, message = "localId must be a positive id"))]
    pub local_id: i64,
}

/// Body of `POST /platillos/multiple`.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct CreateDishesRequest(pub Vec<CreateDishRequest>);

impl Validate for CreateDishesRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        self.0.iter().try_for_each(|dish| dish.validate())
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDishRequest {
    #[validate(custom(function = "validate_required"), length(max = 255))]
    pub name: Option<String>,
    #[validate(custom(function = "validate_required"))]
    pub description: Option<String>,
    #[validate(custom(function = "validate_required"))]
    pub photo_url: Option<String>,
    #[validate(custom(function = "validate_positive_price"))]
    pub price: Option<Decimal>,
    #[validate(range(min = 1, message = "localId must be a positive id"))]
    pub local_id: Option<i64>,
}

impl UpdateDishRequest {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.photo_url.is_none()
            && self.price.is_none()
            && self.local_id.is_none()
    }
}

/// Query string of `GET /platillos/search`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub categorias: Option<String>,
    pub etiquetas: Option<String>,
    pub ingredientes: Option<String>,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LocalResponse {
    pub id: i64,
    pub name: String,
    pub photo_url: Option<String>,
}

impl From<local::Model> for LocalResponse {
    fn from(model: local::Model) -> Self {
        LocalResponse {
            id: model.id,
            name: model.name,
            photo_url: model.photo_url,
        }
    }
}

/// Single-dish view with every tag axis expanded to names.
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DishDetailResponse {
    pub name: String,
    pub description: String,
    pub photo_url: String,
    pub price: Decimal,
    pub local: LocalResponse,
    pub categorias: Vec<String>,
    pub etiquetas: Vec<String>,
    pub ingredientes: Vec<String>,
}

/// Flattened row used by search results.
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DishSummaryResponse {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
    pub local: String,
    pub photo_url: String,
}

/// Row of `GET /platillos`: the stored dish plus its local, no tags.
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DishListingResponse {
    #[serde(flatten)]
    pub dish: dish::Model,
    pub local: LocalResponse,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AssignTagRequest {
    #[validate(range(min = 1, message = "tagId must be a positive id"))]
    pub tag_id: i64,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateTagRequest {
    #[validate(custom(function = "validate_required"), length(max = 100))]
    pub name: String,
}
