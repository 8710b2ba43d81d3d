//! Static, read-only wallpaper catalog and its lookup tables.
//!
//! The catalog is built once at startup, either from [`Catalog::builtin`] or
//! from a seed file deserialized into [`CatalogData`], and is never mutated
//! afterwards. Everything else in the crate borrows from it.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::selection::{FilterKind, ListingFilter};
use crate::types::{CurrencyCode, Price, Surface, WallpaperId};

/// Sub-categories shown when the active category has no table of its own.
pub const FALLBACK_SUB_CATEGORIES: &[&str] = &["Patterns", "Abstract", "Minimalist", "Artisan"];

/// Errors raised while validating catalog seed data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("duplicate wallpaper id: {0}")]
    DuplicateId(WallpaperId),
    #[error("wallpaper {0} has a negative price")]
    NegativePrice(WallpaperId),
    #[error("wallpaper {id} is priced in {found}, catalog currency is {expected}")]
    CurrencyMismatch {
        id: WallpaperId,
        expected: CurrencyCode,
        found: CurrencyCode,
    },
    #[error("catalog must define at least one category")]
    NoCategories,
}

/// A wallpaper product record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallpaper {
    pub id: WallpaperId,
    pub name: String,
    pub price: Price,
    pub image: String,
    pub category: String,
    pub room_type: String,
    pub collection: String,
    pub surface: Surface,
    pub mood: String,
    pub color: String,
}

/// A named tile with an image (categories and spaces).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub name: String,
    pub image: String,
}

/// A mood tile with a short blurb.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mood {
    pub name: String,
    pub image: String,
    pub description: String,
}

/// A customer review shown on the home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub customer_name: String,
    pub text: String,
    pub image: String,
}

/// A header navigation link and the listing filter it opens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderLink {
    pub label: &'static str,
    pub filter: Option<ListingFilter>,
}

/// Raw catalog seed, as read from a file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogData {
    #[serde(default)]
    pub currency: CurrencyCode,
    pub products: Vec<Wallpaper>,
    pub categories: Vec<Tile>,
    #[serde(default)]
    pub spaces: Vec<Tile>,
    #[serde(default)]
    pub moods: Vec<Mood>,
    #[serde(default)]
    pub sub_categories: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub reviews: Vec<Review>,
    /// Brand promises listed on the home page.
    #[serde(default)]
    pub promises: Vec<String>,
}

/// The validated, immutable catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    data: CatalogData,
}

impl Catalog {
    /// Validate seed data and build a catalog.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if product ids repeat, a price is negative or
    /// in a foreign currency, or no category is defined.
    pub fn new(data: CatalogData) -> Result<Self, CatalogError> {
        if data.categories.is_empty() {
            return Err(CatalogError::NoCategories);
        }

        let mut seen = HashSet::with_capacity(data.products.len());
        for product in &data.products {
            if !seen.insert(&product.id) {
                return Err(CatalogError::DuplicateId(product.id.clone()));
            }
            if product.price.is_negative() {
                return Err(CatalogError::NegativePrice(product.id.clone()));
            }
            if product.price.currency_code != data.currency {
                return Err(CatalogError::CurrencyMismatch {
                    id: product.id.clone(),
                    expected: data.currency,
                    found: product.price.currency_code,
                });
            }
        }

        Ok(Self { data })
    }

    /// The storefront's built-in mock catalog.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            data: builtin_data(),
        }
    }

    /// Currency every product is priced in.
    #[must_use]
    pub const fn currency(&self) -> CurrencyCode {
        self.data.currency
    }

    /// All products, in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Wallpaper] {
        &self.data.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn product(&self, id: &WallpaperId) -> Option<&Wallpaper> {
        self.data.products.iter().find(|p| &p.id == id)
    }

    #[must_use]
    pub fn categories(&self) -> &[Tile] {
        &self.data.categories
    }

    #[must_use]
    pub fn spaces(&self) -> &[Tile] {
        &self.data.spaces
    }

    #[must_use]
    pub fn moods(&self) -> &[Mood] {
        &self.data.moods
    }

    #[must_use]
    pub fn reviews(&self) -> &[Review] {
        &self.data.reviews
    }

    #[must_use]
    pub fn promises(&self) -> &[String] {
        &self.data.promises
    }

    /// Look up a category tile by exact name.
    #[must_use]
    pub fn category(&self, name: &str) -> Option<&Tile> {
        self.data.categories.iter().find(|c| c.name == name)
    }

    /// Hero tile for a listing: the named category, or the first category
    /// when no category is selected.
    ///
    /// Returns `None` for a category name the catalog does not know.
    #[must_use]
    pub fn category_context(&self, category: Option<&str>) -> Option<&Tile> {
        match category {
            Some(name) => self.category(name),
            None => self.data.categories.first(),
        }
    }

    /// Sub-category names offered for a category.
    ///
    /// Falls back to [`FALLBACK_SUB_CATEGORIES`] when no category is selected
    /// or the category has no table entry.
    #[must_use]
    pub fn sub_categories_for(&self, category: Option<&str>) -> Vec<String> {
        category
            .and_then(|name| self.data.sub_categories.get(name))
            .cloned()
            .unwrap_or_else(|| {
                FALLBACK_SUB_CATEGORIES
                    .iter()
                    .map(|s| (*s).to_string())
                    .collect()
            })
    }

    /// Links shown in the header navigation bar.
    #[must_use]
    pub fn header_links() -> Vec<HeaderLink> {
        vec![
            HeaderLink {
                label: "Wall Art",
                filter: Some(ListingFilter::new(FilterKind::Category, "Abstract")),
            },
            HeaderLink {
                label: "Print & Frame",
                filter: Some(ListingFilter::new(FilterKind::Category, "Modern")),
            },
            HeaderLink {
                label: "Wallpaper",
                filter: None,
            },
            HeaderLink {
                label: "Art For Business",
                filter: Some(ListingFilter::new(FilterKind::RoomType, "Office")),
            },
        ]
    }
}

impl TryFrom<CatalogData> for Catalog {
    type Error = CatalogError;

    fn try_from(data: CatalogData) -> Result<Self, Self::Error> {
        Self::new(data)
    }
}

// =============================================================================
// Built-in Data
// =============================================================================

const IMAGE_BASE: &str = "https://images.unsplash.com/photo-";

fn image(photo: &str, width: u32) -> String {
    format!("{IMAGE_BASE}{photo}?auto=format&fit=crop&q=80&w={width}")
}

fn tile(name: &str, photo: &str, width: u32) -> Tile {
    Tile {
        name: name.to_string(),
        image: image(photo, width),
    }
}

fn mood(name: &str, photo: &str, description: &str) -> Mood {
    Mood {
        name: name.to_string(),
        image: image(photo, 800),
        description: description.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn wallpaper(
    id: &str,
    name: &str,
    photo: &str,
    category: &str,
    room_type: &str,
    collection: &str,
    surface: Surface,
    mood: &str,
    color: &str,
) -> Wallpaper {
    Wallpaper {
        id: WallpaperId::from(id),
        name: name.to_string(),
        price: Price::from_minor(7565, CurrencyCode::INR),
        image: image(photo, 600),
        category: category.to_string(),
        room_type: room_type.to_string(),
        collection: collection.to_string(),
        surface,
        mood: mood.to_string(),
        color: color.to_string(),
    }
}

fn builtin_data() -> CatalogData {
    let categories = vec![
        tile("Floral", "1582794543139-8ac9cb0f7b11", 600),
        tile("Abstract", "1541701494587-cb58502866ab", 600),
        tile("Modern", "1614850523296-d8c1af93d400", 600),
        tile("Traditional", "1560448204-603b3fc33ddc", 600),
        tile("Nature", "1441974231531-c6227db76b6e", 600),
        tile("Kids", "1533090161767-e6ffed986c88", 600),
    ];

    let spaces = vec![
        tile("Living Room", "1600210492486-724fe5c67fb0", 400),
        tile("Bedroom", "1560185007-cde436f6a4d0", 400),
        tile("Office", "1497366811353-6870744d04b2", 400),
        tile("Kids Room", "1522771739844-6a9f6d5f14af", 400),
    ];

    let moods = vec![
        mood(
            "Calm",
            "1494438639946-1ebd1d20bf85",
            "Serene textures and soft palettes for a peaceful sanctuary.",
        ),
        mood(
            "Bold",
            "1550684848-fac1c5b4e853",
            "High contrast and striking patterns that demand attention.",
        ),
        mood(
            "Playful",
            "1513694490325-24b3921b3dca",
            "Vibrant colors and imaginative designs for creative spirits.",
        ),
        mood(
            "Elegant",
            "1618221195710-dd6b41faaea6",
            "Refined textures and timeless aesthetics for sophisticated living.",
        ),
        mood(
            "Industrial",
            "1505691938895-1758d7eaa511",
            "Urban-inspired finishes with raw appeal and metallic accents.",
        ),
        mood(
            "Zen",
            "1586023492125-27b2c045efd7",
            "Minimalist compositions that bring balance and harmony to any room.",
        ),
    ];

    let sub_categories = [
        ("Modern", ["Geometric", "Minimalistic", "Urban", "Industrial"]),
        ("Floral", ["Vintage", "Tropical", "Botanical", "Dainty"]),
        ("Abstract", ["Concept", "Fluid", "Textured", "Gradient"]),
    ]
    .into_iter()
    .map(|(category, subs)| {
        (
            category.to_string(),
            subs.iter().map(|s| (*s).to_string()).collect(),
        )
    })
    .collect();

    let promises = [
        "Easy to Choose, Easy to Install",
        "Curated by Design Experts",
        "Made to Fit, Perfectly",
        "Scratch-resistant",
    ]
    .iter()
    .map(|s| (*s).to_string())
    .collect();

    let reviews = vec![
        Review {
            id: "1".to_string(),
            customer_name: "Sarah Jenkins".to_string(),
            text: "Absolutely love my new bedroom mural. The installation was seamless \
                   and the colors are exactly as shown."
                .to_string(),
            image: image("1596464716127-f2a82984de30", 600),
        },
        Review {
            id: "2".to_string(),
            customer_name: "Michael Chen".to_string(),
            text: "The custom design process was so easy. Our office wall looks \
                   incredible now. Highly recommend MahattaArt!"
                .to_string(),
            image: image("1600210492486-724fe5c67fb0", 600),
        },
    ];

    let products = vec![
        wallpaper(
            "1",
            "Black Beige Textured Horizontal",
            "1620641788421-7a1c342ea42e",
            "Abstract",
            "Office",
            "Concept Design",
            Surface::Matte,
            "Bold",
            "Beige",
        ),
        wallpaper(
            "2",
            "Distressed Vertical Texture Beige",
            "1615529182904-14819c35db37",
            "Abstract",
            "Living Room",
            "Concept Design",
            Surface::Matte,
            "Calm",
            "Beige",
        ),
        wallpaper(
            "3",
            "Abstract Fringed Vertical Blue",
            "1614850523296-d8c1af93d400",
            "Modern",
            "Bedroom",
            "Concept Design",
            Surface::Glossy,
            "Bold",
            "Blue",
        ),
        wallpaper(
            "4",
            "Geometric Tribal Pattern Beige",
            "1544457070-4cd773b4d71e",
            "Traditional",
            "Living Room",
            "Concept Design",
            Surface::Matte,
            "Bold",
            "Beige",
        ),
        wallpaper(
            "5",
            "Abstract Geometric Kilim Grey",
            "1618005182384-a83a8bd57fbe",
            "Modern",
            "Living Room",
            "Concept Design",
            Surface::Matte,
            "Sophisticated",
            "Grey",
        ),
        wallpaper(
            "6",
            "Geometric Pattern Teal Pink",
            "1614850715649-1d0106293bd1",
            "Modern",
            "Kids Room",
            "Pattern Design",
            Surface::Glossy,
            "Playful",
            "Pink",
        ),
    ];

    CatalogData {
        currency: CurrencyCode::INR,
        products,
        categories,
        spaces,
        moods,
        sub_categories,
        reviews,
        promises,
    }
}
