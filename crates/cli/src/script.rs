//! Text form of shopper actions.
//!
//! One action per line. Blank lines and lines starting with `#` are skipped.
//!
//! ```text
//! listing category Modern     # open the listing filtered to a category
//! filter room-type Living Room
//! sort price-desc
//! toggle 3
//! add 1
//! qty 1 -1
//! remove 1
//! back
//! show                        # print the current view
//! ```

use mahatta_core::{Action, FilterField, FilterValue, ListingFilter, Page, SortKey, WallpaperId};
use thiserror::Error;

/// Errors from parsing a script line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("{command}: missing {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    #[error("{command}: {message}")]
    InvalidArgument {
        command: &'static str,
        message: String,
    },
    #[error("{command}: unexpected argument '{argument}'")]
    UnexpectedArgument {
        command: &'static str,
        argument: String,
    },
}

/// A parsed script line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Action(Action),
    /// Print the current view.
    Show,
}

/// Parse one line.
///
/// Returns `Ok(None)` for blank and comment lines.
///
/// # Errors
///
/// Returns a [`ScriptError`] for an unknown command or bad arguments.
pub fn parse_line(line: &str) -> Result<Option<Line>, ScriptError> {
    let line = line.split_once('#').map_or(line, |(code, _)| code).trim();
    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return Ok(None);
    };
    let rest: Vec<&str> = words.collect();

    let parsed = match command {
        "home" => navigate("home", Page::Home, &rest)?,
        "wishlist" => navigate("wishlist", Page::Wishlist, &rest)?,
        "cart" => navigate("cart", Page::Cart, &rest)?,
        "listing" => Line::Action(Action::listing(listing_filter(&rest)?)),
        "back" => {
            no_arguments("back", &rest)?;
            Line::Action(Action::Back)
        }
        "toggle" => Line::Action(Action::ToggleWishlist(single_id("toggle", &rest)?)),
        "add" => Line::Action(Action::AddToCart(single_id("add", &rest)?)),
        "remove" => Line::Action(Action::RemoveFromCart(single_id("remove", &rest)?)),
        "qty" => quantity(&rest)?,
        "filter" => filter(&rest)?,
        "clear-filters" => {
            no_arguments("clear-filters", &rest)?;
            Line::Action(Action::ClearFilters)
        }
        "sort" => {
            let key = joined("sort", "sort key", &rest)?;
            let sort = key
                .parse::<SortKey>()
                .map_err(|message| ScriptError::InvalidArgument {
                    command: "sort",
                    message,
                })?;
            Line::Action(Action::SetSort(sort))
        }
        "show" => {
            no_arguments("show", &rest)?;
            Line::Show
        }
        other => return Err(ScriptError::UnknownCommand(other.to_string())),
    };
    Ok(Some(parsed))
}

fn navigate(command: &'static str, page: Page, rest: &[&str]) -> Result<Line, ScriptError> {
    no_arguments(command, rest)?;
    Ok(Line::Action(Action::go(page)))
}

fn listing_filter(rest: &[&str]) -> Result<Option<ListingFilter>, ScriptError> {
    let Some((kind, value)) = rest.split_first() else {
        return Ok(None);
    };
    let value = if value.is_empty() {
        if *kind != mahatta_core::selection::ALL {
            return Err(ScriptError::MissingArgument {
                command: "listing",
                argument: "filter value",
            });
        }
        mahatta_core::selection::ALL.to_string()
    } else {
        value.join(" ")
    };
    ListingFilter::from_pair(kind, &value).map_err(|message| ScriptError::InvalidArgument {
        command: "listing",
        message,
    })
}

fn quantity(rest: &[&str]) -> Result<Line, ScriptError> {
    let [id, delta] = rest else {
        return Err(ScriptError::MissingArgument {
            command: "qty",
            argument: "product id and delta",
        });
    };
    let delta = delta
        .parse::<i32>()
        .map_err(|e| ScriptError::InvalidArgument {
            command: "qty",
            message: format!("invalid delta '{delta}': {e}"),
        })?;
    Ok(Line::Action(Action::UpdateCartQuantity {
        id: WallpaperId::from(*id),
        delta,
    }))
}

fn filter(rest: &[&str]) -> Result<Line, ScriptError> {
    let Some((field, value)) = rest.split_first() else {
        return Err(ScriptError::MissingArgument {
            command: "filter",
            argument: "field",
        });
    };
    let field = field
        .parse::<FilterField>()
        .map_err(|message| ScriptError::InvalidArgument {
            command: "filter",
            message,
        })?;
    let value = joined("filter", "value", value)?;
    Ok(Line::Action(Action::SetFilter {
        field,
        value: FilterValue::from(value.as_str()),
    }))
}

fn single_id(command: &'static str, rest: &[&str]) -> Result<WallpaperId, ScriptError> {
    match rest {
        [id] => Ok(WallpaperId::from(*id)),
        [] => Err(ScriptError::MissingArgument {
            command,
            argument: "product id",
        }),
        [_, extra, ..] => Err(ScriptError::UnexpectedArgument {
            command,
            argument: (*extra).to_string(),
        }),
    }
}

fn joined(
    command: &'static str,
    argument: &'static str,
    rest: &[&str],
) -> Result<String, ScriptError> {
    if rest.is_empty() {
        return Err(ScriptError::MissingArgument { command, argument });
    }
    Ok(rest.join(" "))
}

fn no_arguments(command: &'static str, rest: &[&str]) -> Result<(), ScriptError> {
    rest.first().map_or(Ok(()), |extra| {
        Err(ScriptError::UnexpectedArgument {
            command,
            argument: (*extra).to_string(),
        })
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use mahatta_core::FilterKind;

    use super::*;

    fn action(line: &str) -> Action {
        match parse_line(line).unwrap() {
            Some(Line::Action(action)) => action,
            other => panic!("expected an action, got {other:?}"),
        }
    }

    #[test]
    fn test_blank_and_comment_lines_are_skipped() {
        assert_eq!(parse_line("").unwrap(), None);
        assert_eq!(parse_line("   # just a note").unwrap(), None);
    }

    #[test]
    fn test_listing_with_multi_word_value() {
        assert_eq!(
            action("listing roomType Living Room"),
            Action::listing(Some(ListingFilter::new(FilterKind::RoomType, "Living Room")))
        );
        assert_eq!(action("listing"), Action::listing(None));
        assert_eq!(action("listing all"), Action::listing(None));
    }

    #[test]
    fn test_listing_rejects_unknown_kind() {
        assert!(matches!(
            parse_line("listing color Blue"),
            Err(ScriptError::InvalidArgument { command: "listing", .. })
        ));
        assert_eq!(
            parse_line("listing mood"),
            Err(ScriptError::MissingArgument {
                command: "listing",
                argument: "filter value",
            })
        );
    }

    #[test]
    fn test_cart_commands() {
        assert_eq!(action("add 1"), Action::AddToCart(WallpaperId::from("1")));
        assert_eq!(
            action("qty 1 -3"),
            Action::UpdateCartQuantity {
                id: WallpaperId::from("1"),
                delta: -3,
            }
        );
        assert_eq!(action("remove 2  # gone"), Action::RemoveFromCart(WallpaperId::from("2")));
        assert!(matches!(
            parse_line("qty 1 lots"),
            Err(ScriptError::InvalidArgument { command: "qty", .. })
        ));
        assert!(matches!(
            parse_line("add 1 2"),
            Err(ScriptError::UnexpectedArgument { command: "add", .. })
        ));
    }

    #[test]
    fn test_filter_and_sort() {
        assert_eq!(
            action("filter sub-category Geometric"),
            Action::SetFilter {
                field: FilterField::SubCategory,
                value: FilterValue::Only("Geometric".into()),
            }
        );
        assert_eq!(
            action("filter mood all"),
            Action::SetFilter {
                field: FilterField::Mood,
                value: FilterValue::All,
            }
        );
        assert_eq!(
            action("sort Price: High → Low"),
            Action::SetSort(SortKey::PriceHighToLow)
        );
        assert_eq!(action("sort newest"), Action::SetSort(SortKey::NewestArrivals));
    }

    #[test]
    fn test_show_and_unknown() {
        assert_eq!(parse_line("show").unwrap(), Some(Line::Show));
        assert_eq!(
            parse_line("checkout"),
            Err(ScriptError::UnknownCommand("checkout".to_string()))
        );
        assert!(matches!(
            parse_line("back now"),
            Err(ScriptError::UnexpectedArgument { command: "back", .. })
        ));
    }
}
