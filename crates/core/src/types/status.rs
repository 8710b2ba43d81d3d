//! Enumerations for catalog attributes and storefront pages.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Finish of a wallpaper's surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Surface {
    Glossy,
    Matte,
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Glossy => write!(f, "Glossy"),
            Self::Matte => write!(f, "Matte"),
        }
    }
}

impl FromStr for Surface {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Glossy" | "glossy" => Ok(Self::Glossy),
            "Matte" | "matte" => Ok(Self::Matte),
            _ => Err(format!("invalid surface: {s}")),
        }
    }
}

/// A top-level storefront page.
///
/// Every page is reachable from every other page; only [`Page::Listing`]
/// carries entry data (the filter it was opened with).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    #[default]
    Home,
    Listing,
    Wishlist,
    Cart,
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => write!(f, "home"),
            Self::Listing => write!(f, "listing"),
            Self::Wishlist => write!(f, "wishlist"),
            Self::Cart => write!(f, "cart"),
        }
    }
}

impl FromStr for Page {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(Self::Home),
            "listing" => Ok(Self::Listing),
            "wishlist" => Ok(Self::Wishlist),
            "cart" => Ok(Self::Cart),
            _ => Err(format!("invalid page: {s}")),
        }
    }
}
