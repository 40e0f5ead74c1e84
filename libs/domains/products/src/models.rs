use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum::{Display, EnumIter, IntoEnumIterator};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

/// Product category.
///
/// The internal name (`BOOKS`, used in logs) and the external label (`"Book"`,
/// used on the wire) are linked by [`ProductType::LABELS`] rather than derived
/// from each other, so renaming a variant never changes the JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductType {
    Books,
    Electronics,
    Clothing,
    HomeAndGarden,
    Toys,
    Sports,
    Food,
    HealthAndBeauty,
}

impl ProductType {
    /// Internal variant <-> external label.
    pub const LABELS: [(ProductType, &'static str); 8] = [
        (ProductType::Books, "Book"),
        (ProductType::Electronics, "Electronics"),
        (ProductType::Clothing, "Clothing"),
        (ProductType::HomeAndGarden, "Home and Garden"),
        (ProductType::Toys, "Toy"),
        (ProductType::Sports, "Sport"),
        (ProductType::Food, "Food"),
        (ProductType::HealthAndBeauty, "Health and Beauty"),
    ];

    /// The serialized form, e.g. `"Book"`.
    pub fn label(self) -> &'static str {
        Self::LABELS
            .iter()
            .find(|(kind, _)| *kind == self)
            .map(|(_, label)| *label)
            .unwrap_or("Unknown")
    }

    /// Case-insensitive lookup by external label; surrounding whitespace is significant.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::LABELS
            .iter()
            .find(|(_, known)| known.eq_ignore_ascii_case(label))
            .map(|(kind, _)| *kind)
    }

    /// Whether this type's label matches `label`, ignoring case.
    pub fn matches_label(self, label: &str) -> bool {
        self.label().eq_ignore_ascii_case(label)
    }

    pub fn all_labels() -> Vec<&'static str> {
        Self::iter().map(Self::label).collect()
    }
}

impl Serialize for ProductType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for ProductType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Self::from_label(&label).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "unknown product type '{}', expected one of: {}",
                label,
                Self::all_labels().join(", ")
            ))
        })
    }
}

/// Price with currency code. `value` is written as a JSON number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Price {
    /// Amount, never negative
    #[serde(
        serialize_with = "serialize_amount",
        deserialize_with = "rust_decimal::serde::float::deserialize"
    )]
    #[validate(custom(function = "validate_non_negative"))]
    #[schema(value_type = f64, example = 18.99)]
    pub value: Decimal,
    /// Currency code, e.g. "GBP"
    #[schema(example = "GBP")]
    pub currency: String,
}

impl Price {
    pub fn new(value: Decimal, currency: impl Into<String>) -> Self {
        Self {
            value,
            currency: currency.into(),
        }
    }
}

/// Writes the amount as the JSON number closest to its decimal text, so 18.99 stays 18.99.
fn serialize_amount<S: Serializer>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
    let amount: f64 = value
        .to_string()
        .parse()
        .map_err(|e| {
            <S::Error as serde::ser::Error>::custom(format!(
                "price {} is not representable: {}",
                value, e
            ))
        })?;
    serializer.serialize_f64(amount)
}

fn validate_non_negative(value: &Decimal) -> Result<(), ValidationError> {
    if *value < Decimal::ZERO {
        let mut err = ValidationError::new("non_negative");
        err.message = Some("price must not be negative".into());
        return Err(err);
    }
    Ok(())
}

/// Catalog entry. The `id` is supplied by the caller and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Product {
    #[schema(example = "CLN-CDE-BOOK")]
    pub id: String,
    #[schema(example = "Clean Code")]
    pub name: String,
    pub description: String,
    #[validate(nested)]
    pub price: Price,
    /// External type label, e.g. "Book"
    #[serde(rename = "type")]
    #[schema(value_type = String, example = "Book")]
    pub product_type: ProductType,
    #[schema(example = "Books and Stationery")]
    pub department: String,
    /// Free-form, unit included (e.g. "220g")
    #[schema(example = "220g")]
    pub weight: String,
}

/// Query parameters for listing products
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ProductQuery {
    /// External type label to filter by, case-insensitive. Empty lists everything.
    #[serde(rename = "byType")]
    pub by_type: Option<String>,
}

impl ProductQuery {
    /// The filter label, unless the parameter is absent or empty.
    ///
    /// Whitespace-only values are still a filter (and match no type).
    pub fn type_filter(&self) -> Option<&str> {
        self.by_type.as_deref().filter(|label| !label.is_empty())
    }
}
