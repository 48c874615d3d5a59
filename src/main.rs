use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;

use sma_query::{Category, Month, Query};

/// Build the SQL queries for one round of sales marker analysis.
#[derive(Debug, Parser)]
#[command(
    version,
    about = "Builds the SQL queries that retrieve price-quote data for sales marker analysis",
    long_about = "Builds the SQL queries that retrieve price-quote data for sales marker \
                  analysis. The month of interest is compared to the same month from the \
                  previous year to compare expenditure, and to the previous month in the \
                  same year to track any sales marker changes. The queries account for \
                  items that should be ignored, and for additional items not captured by \
                  the category's typical bounds."
)]
struct Cli {
    /// Category to perform the analysis for (alcohol, clothing, or furniture)
    item_category: Category,

    /// Month of interest in YYYYMM format
    #[arg(short, long, default_value_t = Month::current())]
    month_of_interest: Month,

    /// Item number(s) to ignore; defaults to the category's own ignore list
    #[arg(short, long, num_args = 0.., value_name = "ITEM_ID")]
    items_to_ignore: Vec<i64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let month = cli.month_of_interest;
    let comparisons = [
        ("this month", month),
        ("last month", month.prev_month()),
        ("this month last year", month.prev_year()),
    ];

    let mut out = io::stdout().lock();
    for (label, month) in comparisons {
        let query = Query::new(cli.item_category, month, cli.items_to_ignore.clone());
        writeln!(
            out,
            "Run this SQL query to retrieve the data for {label}:\n{query}\n"
        )?;
    }
    Ok(())
}
