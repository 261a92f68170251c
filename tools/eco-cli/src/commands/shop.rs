//! Shop page listing.

use anyhow::Result;
use eco_commerce::catalog::{listings, Category, ListingQuery, SortOption, ALL_CATEGORIES};

use super::ShopArgs;
use crate::context::Context;

/// Run the shop command.
pub async fn run(args: ShopArgs, ctx: &Context) -> Result<()> {
    let sort: SortOption = args.sort.parse()?;

    if let Some(ref category) = args.category {
        let category = category.as_str();
        if category != ALL_CATEGORIES && !Category::all().iter().any(|c| c.name == category) {
            ctx.output
                .warn(&format!("'{}' is not a known category", category));
        }
    }

    let products = ctx.read_products(&args.products)?;
    let currency = ctx.config.currency()?;
    let tiles = listings(&products, currency);

    let query = ListingQuery {
        category: args.category,
        query: args.query,
        sort,
    };
    let matched = query.apply(&tiles);

    if ctx.output.is_json() {
        ctx.output.json(&matched);
        return Ok(());
    }

    ctx.output.header(&format!(
        "{} ({} of {} listed, sorted by {})",
        ctx.config.store.name,
        matched.len(),
        tiles.len(),
        sort.display_name()
    ));

    let hidden = products.len() - tiles.len();
    if hidden > 0 {
        ctx.output
            .debug(&format!("{} unavailable product(s) hidden", hidden));
    }

    if matched.is_empty() {
        ctx.output.info("No products match.");
        return Ok(());
    }

    for listing in matched {
        ctx.output.table_row(
            &[
                &listing.id.to_string(),
                &listing.title,
                &listing.category,
                &listing.price.display_compact(),
            ],
            &[5, 32, 28, 14],
        );
    }

    Ok(())
}
