//! Listing filters and sort order.
//!
//! A listing is opened with at most one [`ListingFilter`] (the navigation
//! payload). That payload seeds a [`Filters`] record, which the listing then
//! refines locally without touching the navigation history.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Wallpaper};

/// Sentinel spelling of "no constraint".
pub const ALL: &str = "all";

/// Product attribute a navigation payload can filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterKind {
    Category,
    RoomType,
    Mood,
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Category => write!(f, "category"),
            Self::RoomType => write!(f, "roomType"),
            Self::Mood => write!(f, "mood"),
        }
    }
}

impl FromStr for FilterKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "category" => Ok(Self::Category),
            "roomType" | "room-type" | "room_type" => Ok(Self::RoomType),
            "mood" => Ok(Self::Mood),
            _ => Err(format!("invalid filter type: {s}")),
        }
    }
}

/// Filter carried by a listing navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListingFilter {
    pub kind: FilterKind,
    pub value: String,
}

impl ListingFilter {
    #[must_use]
    pub fn new(kind: FilterKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// Build a payload from its loose `(type, value)` form.
    ///
    /// A type of `"all"` means an unfiltered listing and yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns an error for a type that is neither `"all"` nor a
    /// [`FilterKind`].
    pub fn from_pair(kind: &str, value: &str) -> Result<Option<Self>, String> {
        if kind == ALL {
            return Ok(None);
        }
        Ok(Some(Self::new(kind.parse()?, value)))
    }
}

/// Value of a single filter field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum FilterValue {
    #[default]
    All,
    Only(String),
}

impl FilterValue {
    /// Whether `field` passes this filter (exact, case-sensitive).
    #[must_use]
    pub fn admits(&self, field: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(value) => value == field,
        }
    }

    #[must_use]
    pub fn as_option(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Only(value) => Some(value),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        if value == ALL {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_option().unwrap_or(ALL))
    }
}

impl Serialize for FilterValue {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_option().unwrap_or(ALL))
    }
}

impl<'de> Deserialize<'de> for FilterValue {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// Field of the listing-local filter record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterField {
    Category,
    RoomType,
    Mood,
    SubCategory,
}

impl FromStr for FilterField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "subCategory" | "sub-category" | "sub_category" => Ok(Self::SubCategory),
            other => other.parse::<FilterKind>().map(Self::from),
        }
    }
}

impl From<FilterKind> for FilterField {
    fn from(kind: FilterKind) -> Self {
        match kind {
            FilterKind::Category => Self::Category,
            FilterKind::RoomType => Self::RoomType,
            FilterKind::Mood => Self::Mood,
        }
    }
}

/// Listing-local filter record.
///
/// `sub_category` is presentation state only: wallpapers carry no
/// sub-category attribute, so it never narrows the result set.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filters {
    pub category: FilterValue,
    pub room_type: FilterValue,
    pub mood: FilterValue,
    pub sub_category: FilterValue,
}

impl Filters {
    /// Filters seeded from a navigation payload.
    #[must_use]
    pub fn seeded(filter: Option<&ListingFilter>) -> Self {
        let mut filters = Self::default();
        if let Some(filter) = filter {
            filters.set(FilterField::from(filter.kind), filter.value.as_str().into());
        }
        filters
    }

    pub fn set(&mut self, field: FilterField, value: FilterValue) {
        match field {
            FilterField::Category => self.category = value,
            FilterField::RoomType => self.room_type = value,
            FilterField::Mood => self.mood = value,
            FilterField::SubCategory => self.sub_category = value,
        }
    }

    #[must_use]
    pub const fn get(&self, field: FilterField) -> &FilterValue {
        match field {
            FilterField::Category => &self.category,
            FilterField::RoomType => &self.room_type,
            FilterField::Mood => &self.mood,
            FilterField::SubCategory => &self.sub_category,
        }
    }

    /// Whether a product satisfies every active filter.
    #[must_use]
    pub fn admits(&self, product: &Wallpaper) -> bool {
        self.category.admits(&product.category)
            && self.room_type.admits(&product.room_type)
            && self.mood.admits(&product.mood)
    }
}

/// Sort order for a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    #[default]
    Relevance,
    NewestArrivals,
    PriceLowToHigh,
    PriceHighToLow,
}

impl SortKey {
    pub const ALL: [Self; 4] = [
        Self::Relevance,
        Self::NewestArrivals,
        Self::PriceLowToHigh,
        Self::PriceHighToLow,
    ];

    /// Label shown in the sort menu.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Relevance => "Relevance",
            Self::NewestArrivals => "Newest Arrivals",
            Self::PriceLowToHigh => "Price: Low → High",
            Self::PriceHighToLow => "Price: High → Low",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(key) = Self::ALL.into_iter().find(|k| k.label() == s) {
            return Ok(key);
        }
        match s {
            "relevance" => Ok(Self::Relevance),
            "newest" => Ok(Self::NewestArrivals),
            "price-asc" => Ok(Self::PriceLowToHigh),
            "price-desc" => Ok(Self::PriceHighToLow),
            _ => Err(format!("invalid sort key: {s}")),
        }
    }
}

impl Serialize for SortKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Products admitted by `filters`, in input order.
#[must_use]
pub fn apply_filters<'a>(products: &[&'a Wallpaper], filters: &Filters) -> Vec<&'a Wallpaper> {
    products
        .iter()
        .copied()
        .filter(|p| filters.admits(p))
        .collect()
}

/// Sort products in place. Stable: ties keep their relative order.
pub fn apply_sort(products: &mut [&Wallpaper], key: SortKey) {
    match key {
        SortKey::Relevance | SortKey::NewestArrivals => {}
        SortKey::PriceLowToHigh => products.sort_by(|a, b| a.price.amount.cmp(&b.price.amount)),
        SortKey::PriceHighToLow => products.sort_by(|a, b| b.price.amount.cmp(&a.price.amount)),
    }
}

/// Listing selection: the filter record plus the sort order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    pub filters: Filters,
    pub sort: SortKey,
}

impl Selection {
    #[must_use]
    pub fn seeded(filter: Option<&ListingFilter>) -> Self {
        Self {
            filters: Filters::seeded(filter),
            sort: SortKey::default(),
        }
    }

    /// Filtered and sorted products for this selection.
    #[must_use]
    pub fn visible<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Wallpaper> {
        let all: Vec<&Wallpaper> = catalog.products().iter().collect();
        let mut visible = apply_filters(&all, &self.filters);
        apply_sort(&mut visible, self.sort);
        visible
    }
}
