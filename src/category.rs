use thiserror::Error;

use std::{fmt::Display, str::FromStr};

/// An item category covered by the sales marker analysis.
///
/// Each category carries its own static configuration: the item ID bounds
/// that define it, the extra item IDs that belong to it despite falling
/// outside those bounds, and the item IDs it ignores by default. The tables
/// are compiled in and never change during a run.
///
/// A `Category` is constructed by name with [`FromStr`]:
///
/// ```
/// use sma_query::Category;
///
/// let category: Category = "furniture".parse().unwrap();
/// assert_eq!(category, Category::Furniture);
/// assert!("electronics".parse::<Category>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Alcohol,
    Clothing,
    Furniture,
}

impl Category {
    /// Returns the lowercase name of the category, as used on the command
    /// line.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Alcohol => "alcohol",
            Self::Clothing => "clothing",
            Self::Furniture => "furniture",
        }
    }

    /// Returns the item ID bounds for the category.
    ///
    /// Both bounds are exclusive: a query selects item IDs strictly between
    /// the lower and upper bound. IDs that belong to the category but fall
    /// outside these bounds are listed by [`Self::extra_item_ids`].
    #[must_use]
    pub fn item_bounds(self) -> (i64, i64) {
        match self {
            Self::Alcohol => (310200, 310605),
            Self::Clothing => (510100, 510599),
            Self::Furniture => (430100, 430199),
        }
    }

    /// Returns the item IDs that belong to the category despite falling
    /// outside its bounds.
    #[must_use]
    pub fn extra_item_ids(self) -> &'static [i64] {
        match self {
            Self::Alcohol => &[],
            Self::Clothing => &[
                440104, // dry cleaning of a man's suit
                440132, // men's clothing hire, added 2014
            ],
            Self::Furniture => &[520132],
        }
    }

    /// Returns the item IDs the category ignores by default.
    ///
    /// These apply whenever the caller does not supply an ignore list of
    /// their own; see [`crate::resolve_ignored_items`].
    #[must_use]
    pub fn default_ignored_items(self) -> &'static [i64] {
        match self {
            Self::Alcohol => &[
                310301, 310302, 310306, 310307, 310309, 310310, 310315, 310316,
            ],
            Self::Clothing | Self::Furniture => &[],
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = UnsupportedCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "alcohol" => Ok(Self::Alcohol),
            "clothing" => Ok(Self::Clothing),
            "furniture" => Ok(Self::Furniture),
            _ => Err(UnsupportedCategoryError(s.to_string())),
        }
    }
}

/// The error returned when constructing a [`Category`] from a name outside
/// the supported set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("the category {0} is not supported at this time")]
pub struct UnsupportedCategoryError(pub String);
