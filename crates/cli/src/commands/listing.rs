//! One-shot listing query.

use mahatta_core::{Action, FilterField, FilterValue, SortKey};
use tracing::debug;

use crate::commands::{emit, open_storefront};
use crate::config::CliConfig;

/// Filters accepted on the command line.
#[derive(Debug, Default)]
pub struct ListingQuery {
    pub category: Option<String>,
    pub room_type: Option<String>,
    pub mood: Option<String>,
    pub sub_category: Option<String>,
    pub sort: SortKey,
}

/// Open an unfiltered listing, refine it with the query, and print it.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or the view written.
pub fn run(
    config: &CliConfig,
    query: ListingQuery,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_storefront(config)?;
    store.dispatch(Action::listing(None));

    let refinements = [
        (FilterField::Category, query.category),
        (FilterField::RoomType, query.room_type),
        (FilterField::Mood, query.mood),
        (FilterField::SubCategory, query.sub_category),
    ];
    for (field, value) in refinements {
        if let Some(value) = value {
            store.dispatch(Action::SetFilter {
                field,
                value: FilterValue::from(value.as_str()),
            });
        }
    }
    store.dispatch(Action::SetSort(query.sort));

    let view = store.listing_view();
    debug!(count = view.count, "Listing computed");
    emit(&view, compact)
}
