//! Scripted cart session.

use std::collections::HashMap;

use anyhow::{bail, Context as _, Result};
use eco_commerce::cart::CartItem;
use eco_commerce::catalog::Product;
use eco_commerce::{CommerceError, Currency, Money, ProductId};
use eco_storefront::{Command, Outcome, Storefront};
use serde::Deserialize;

use super::CartArgs;
use crate::context::Context;

/// One line of a cart script.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
enum ScriptOp {
    /// Add a product. `title` and `price` are required when the product is
    /// not in the products file.
    Add {
        id: ProductId,
        #[serde(default = "one")]
        quantity: i64,
        title: Option<String>,
        price: Option<String>,
    },
    Remove {
        id: ProductId,
    },
    Set {
        id: ProductId,
        quantity: i64,
    },
    Clear,
}

fn one() -> i64 {
    1
}

/// Run the cart command.
pub async fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let path = ctx.resolve_path(&args.script);
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read cart script: {}", path.display()))?;
    let script: Vec<ScriptOp> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse cart script: {}", path.display()))?;

    let catalog: HashMap<ProductId, Product> = match args.products {
        Some(ref products) => ctx
            .read_products(products)?
            .into_iter()
            .map(|p| (p.id, p))
            .collect(),
        None => HashMap::new(),
    };

    let mut storefront = Storefront::new(&ctx.config)?;
    let currency = storefront.cart().currency;

    ctx.output.header("Cart");
    let total = script.len();
    for (i, op) in script.into_iter().enumerate() {
        let label = format!("{:?}", op);
        let command = to_command(op, &catalog, currency)
            .with_context(|| format!("Cart script step {}", i + 1))?;
        let outcome = storefront.dispatch(command);
        let marker = match outcome {
            Outcome::Applied => "applied",
            Outcome::Ignored => "ignored",
        };
        ctx.output
            .step(i + 1, total, &format!("{} ({})", label, marker));
    }

    let summary = storefront.cart().summary();

    if ctx.output.is_json() {
        ctx.output.json(&summary);
        return Ok(());
    }

    ctx.output.header("Summary");
    if summary.is_empty() {
        ctx.output.info("Your cart is empty.");
        return Ok(());
    }
    for line in &summary.lines {
        ctx.output.table_row(
            &[
                &line.title,
                &line.price_breakdown(),
                &line.subtotal.display_compact(),
            ],
            &[32, 20, 14],
        );
    }
    ctx.output.kv("items", &summary.total_quantity.to_string());
    ctx.output.kv("subtotal", &summary.subtotal.display_compact());

    Ok(())
}

fn to_command(
    op: ScriptOp,
    catalog: &HashMap<ProductId, Product>,
    currency: Currency,
) -> Result<Command> {
    let command = match op {
        ScriptOp::Add {
            id,
            quantity,
            title,
            price,
        } => {
            let item = match (catalog.get(&id), title, price) {
                (Some(product), _, _) => product.to_cart_item(currency),
                (None, Some(title), Some(price)) => {
                    CartItem::new(id, title, Money::parse(&price, currency)?)
                }
                (None, _, _) => bail!(CommerceError::ProductNotFound(id.get())),
            };
            Command::AddItem { item, quantity }
        }
        ScriptOp::Remove { id } => Command::RemoveItem(id),
        ScriptOp::Set { id, quantity } => Command::SetQuantity { id, quantity },
        ScriptOp::Clear => Command::Clear,
    };
    Ok(command)
}
