use crate::Category;

use std::fmt::Display;

/// Resolves the ignore list for a query.
///
/// If the caller supplied any item IDs, those are used as given. Otherwise
/// the category's own default ignore list applies. Either way the result is
/// an independently owned list, so no two queries ever share one.
///
/// # Examples
///
/// ```
/// use sma_query::{resolve_ignored_items, Category};
///
/// assert_eq!(resolve_ignored_items(Category::Alcohol, vec![550100]), [550100]);
/// assert!(resolve_ignored_items(Category::Clothing, vec![]).is_empty());
/// ```
#[must_use]
pub fn resolve_ignored_items(category: Category, supplied: Vec<i64>) -> Vec<i64> {
    if supplied.is_empty() {
        category.default_ignored_items().to_vec()
    } else {
        supplied
    }
}

/// One query against the quote data: a category, a month, and a resolved
/// ignore list.
///
/// To create a `Query`, use [`Self::new`].
///
/// To get the SQL text, use its [`Display`] implementation.
///
/// The query selects every quote record for the category's item ID range in
/// the given month, unions in the category's extra item IDs with `or`
/// clauses, and then subtracts the ignore list with a trailing `not in`
/// clause. Because the `not in` clause applies to the whole preceding
/// disjunction, an ignored ID stays excluded even when it is also one of the
/// category's extras.
#[derive(Debug, Clone)]
pub struct Query {
    category: Category,
    month: String,
    items_to_ignore: Vec<i64>,
}

impl Query {
    /// Creates a query for `category` in `month`.
    ///
    /// `month` is substituted into the SQL verbatim; the quote data keys it
    /// as `YYYYMM`, but this function does not inspect it. An empty
    /// `items_to_ignore` falls back to the category's default ignore list,
    /// per [`resolve_ignored_items`].
    ///
    /// # Examples
    ///
    /// ```
    /// use sma_query::{Category, Query};
    ///
    /// let query = Query::new(Category::Alcohol, "202203", vec![]);
    /// assert!(query.to_string().starts_with("select * from quote"));
    /// assert!(query.to_string().ends_with(";commit;"));
    /// ```
    #[must_use]
    pub fn new(category: Category, month: impl ToString, items_to_ignore: Vec<i64>) -> Self {
        Self {
            category,
            month: month.to_string(),
            items_to_ignore: resolve_ignored_items(category, items_to_ignore),
        }
    }
}

impl Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (lower, upper) = self.category.item_bounds();
        write!(
            f,
            "select * from quote\nwhere quote_date = {}\nand item_id > {lower}\nand item_id < {upper}",
            self.month
        )?;
        for item in self.category.extra_item_ids() {
            write!(f, "\nor quote_date = {}\nand item_id = {item}", self.month)?;
        }
        if !self.items_to_ignore.is_empty() {
            let ids: Vec<String> = self.items_to_ignore.iter().map(|id| id.to_string()).collect();
            write!(f, "\nand item_id not in ({})", ids.join(", "))?;
        }
        write!(f, "\n;commit;")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_ignored_items_fn_prefers_a_supplied_list() {
        assert_eq!(
            resolve_ignored_items(Category::Alcohol, vec![1, 2]),
            [1, 2]
        );
    }

    #[test]
    fn resolve_ignored_items_fn_falls_back_to_category_defaults() {
        assert_eq!(
            resolve_ignored_items(Category::Alcohol, vec![]),
            [310301, 310302, 310306, 310307, 310309, 310310, 310315, 310316]
        );
        assert!(resolve_ignored_items(Category::Clothing, vec![]).is_empty());
    }

    #[test]
    fn query_display_builds_bounds_and_extras_clauses_for_furniture() {
        let query = Query::new(Category::Furniture, "202203", vec![]);
        assert_eq!(
            query.to_string(),
            "\
select * from quote
where quote_date = 202203
and item_id > 430100
and item_id < 430199
or quote_date = 202203
and item_id = 520132
;commit;"
        );
    }

    #[test]
    fn query_display_appends_a_supplied_ignore_list_after_the_extras() {
        let query = Query::new(Category::Clothing, "202112", vec![550100]);
        assert_eq!(
            query.to_string(),
            "\
select * from quote
where quote_date = 202112
and item_id > 510100
and item_id < 510599
or quote_date = 202112
and item_id = 440104
or quote_date = 202112
and item_id = 440132
and item_id not in (550100)
;commit;"
        );
    }

    #[test]
    fn query_display_uses_the_default_ignore_list_for_alcohol() {
        let query = Query::new(Category::Alcohol, "202203", vec![]);
        assert_eq!(
            query.to_string(),
            "\
select * from quote
where quote_date = 202203
and item_id > 310200
and item_id < 310605
and item_id not in (310301, 310302, 310306, 310307, 310309, 310310, 310315, 310316)
;commit;"
        );
    }

    #[test]
    fn query_display_keeps_an_ignored_extra_in_the_not_in_clause() {
        // The not in clause trails the whole disjunction, so an ID that is
        // both an extra and ignored ends up excluded.
        let query = Query::new(Category::Furniture, "202203", vec![520132]);
        let sql = query.to_string();
        assert!(sql.contains("or quote_date = 202203\nand item_id = 520132"));
        assert!(sql.contains("and item_id not in (520132)"));
    }

    #[test]
    fn query_display_is_deterministic() {
        let a = Query::new(Category::Clothing, "202112", vec![550100, 550101]);
        let b = Query::new(Category::Clothing, "202112", vec![550100, 550101]);
        assert_eq!(a.to_string(), b.to_string());
    }
}
