//! Weekly offers carousel walkthrough.

use anyhow::Result;
use eco_commerce::carousel::Direction;
use eco_commerce::catalog::OfferTile;
use eco_storefront::{Command, Driver, Outcome, Rail, Storefront};
use serde::Serialize;

use super::OffersArgs;
use crate::context::Context;

/// Visible offers after a step.
#[derive(Serialize)]
struct Snapshot {
    step: usize,
    offset: usize,
    offers: Vec<OfferTile>,
}

/// Run the offers command.
pub async fn run(args: OffersArgs, ctx: &Context) -> Result<()> {
    let products = ctx.read_products(&args.products)?;
    let mut storefront = Storefront::new(&ctx.config)?;
    let count = storefront.load_catalog(&products);

    ctx.output.header(&format!(
        "This week's essential offers ({} of {} products)",
        count,
        products.len()
    ));

    if count == 0 {
        ctx.output.info("No available products to feature.");
        if ctx.output.is_json() {
            ctx.output.json(&Vec::<Snapshot>::new());
        }
        return Ok(());
    }

    let mut snapshots = vec![snapshot(0, &storefront)];
    print_snapshot(&snapshots[0], args.ticks, ctx);

    if args.autoplay {
        autoplay(&args, storefront, &mut snapshots, ctx).await?;
    } else {
        for step in 1..=args.ticks {
            let begin = Command::BeginAdvance {
                rail: Rail::Offers,
                direction: Direction::Forward,
            };
            if storefront.dispatch(begin) == Outcome::Ignored {
                ctx.output.warn("Advance ignored");
                continue;
            }
            storefront.dispatch(Command::CompleteAdvance { rail: Rail::Offers });

            let snap = snapshot(step, &storefront);
            print_snapshot(&snap, args.ticks, ctx);
            snapshots.push(snap);
        }
    }

    if ctx.output.is_json() {
        ctx.output.json(&snapshots);
    }

    Ok(())
}

async fn autoplay(
    args: &OffersArgs,
    storefront: Storefront,
    snapshots: &mut Vec<Snapshot>,
    ctx: &Context,
) -> Result<()> {
    let offers = &ctx.config.offers;
    ctx.output.info(&format!(
        "Autoplay every {} ms, {} ms slide",
        offers.autoplay_ms, offers.transition_ms
    ));

    let mut driver = Driver::start(storefront, &ctx.config);
    let mut step = 0;
    while step < args.ticks {
        let Some((command, outcome)) = driver.next().await else {
            break;
        };
        match (command, outcome) {
            (_, Outcome::Ignored) => ctx.output.debug("Command ignored"),
            (Command::BeginAdvance { rail: Rail::Offers, .. }, _) => {
                ctx.output.debug("Sliding...");
            }
            (Command::CompleteAdvance { rail: Rail::Offers }, _) => {
                step += 1;
                let snap = snapshot(step, driver.storefront());
                print_snapshot(&snap, args.ticks, ctx);
                snapshots.push(snap);
            }
            _ => {}
        }
    }

    Ok(())
}

fn snapshot(step: usize, storefront: &Storefront) -> Snapshot {
    let rail = storefront.offers();
    Snapshot {
        step,
        offset: rail.offset(),
        offers: rail.window().into_iter().cloned().collect(),
    }
}

fn print_snapshot(snap: &Snapshot, total: usize, ctx: &Context) {
    if ctx.output.is_json() {
        return;
    }
    ctx.output
        .step(snap.step, total, &format!("offset {}", snap.offset));
    for offer in &snap.offers {
        let prices = if offer.original_price == offer.price {
            offer.price.display_compact()
        } else {
            format!(
                "{} (was {})",
                offer.price.display_compact(),
                offer.original_price.display_compact()
            )
        };
        ctx.output
            .table_row(&[&offer.title, &prices], &[32, 28]);
    }
}
