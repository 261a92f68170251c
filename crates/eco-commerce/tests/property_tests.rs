//! Property-based tests for the cart and carousel invariants.

use eco_commerce::carousel::{true_mod, window_at, Direction, GroupCarousel, Phase, Stride};
use eco_commerce::prelude::*;
use proptest::collection::vec;
use proptest::prelude::*;

fn item(id: u64, price_cents: i64) -> CartItem {
    CartItem::new(
        ProductId::new(id),
        format!("Product {id}"),
        Money::new(price_cents, Currency::KES),
    )
}

#[derive(Debug, Clone)]
enum CartOp {
    Add(u64, i64, i64),
    Remove(u64),
    Update(u64, i64),
    Clear,
}

fn cart_op() -> impl Strategy<Value = CartOp> {
    prop_oneof![
        4 => (0u64..6, 0i64..100_000, -5i64..150).prop_map(|(id, p, q)| CartOp::Add(id, p, q)),
        1 => (0u64..6).prop_map(CartOp::Remove),
        2 => (0u64..6, -5i64..150).prop_map(|(id, q)| CartOp::Update(id, q)),
        1 => Just(CartOp::Clear),
    ]
}

proptest! {
    /// Repeated adds of one id leave a single line holding the clamped sum.
    #[test]
    fn merge_invariant(quantities in vec(-10i64..200, 1..20)) {
        let mut cart = Cart::new(Currency::KES);
        for q in &quantities {
            cart.add_item(item(1, 500), *q);
        }

        let expected: u32 = quantities
            .iter()
            .map(|q| (*q).clamp(1, 99) as u32)
            .fold(0u32, |acc, q| (acc + q).min(99));

        prop_assert_eq!(cart.line_count(), 1);
        prop_assert_eq!(cart.get(ProductId::new(1)).map(|l| l.quantity), Some(expected));
    }

    /// Removing an id twice has the same effect as removing it once.
    #[test]
    fn removal_is_idempotent(ids in vec(0u64..5, 0..10), target in 0u64..5) {
        let mut cart = Cart::new(Currency::KES);
        for id in &ids {
            cart.add_item(item(*id, 100), 1);
        }

        cart.remove_item(ProductId::new(target));
        let once = cart.clone();
        cart.remove_item(ProductId::new(target));

        prop_assert_eq!(cart, once);
    }

    /// Totals always equal the sums over the current lines.
    #[test]
    fn totals_track_lines(ops in vec(cart_op(), 0..40)) {
        let mut cart = Cart::new(Currency::KES);
        for op in ops {
            match op {
                CartOp::Add(id, price, q) => cart.add_item(item(id, price), q),
                CartOp::Remove(id) => { cart.remove_item(ProductId::new(id)); }
                CartOp::Update(id, q) => { cart.update_quantity(ProductId::new(id), q); }
                CartOp::Clear => cart.clear(),
            }
        }

        let qty: u64 = cart.lines().iter().map(|l| u64::from(l.quantity)).sum();
        let price: i64 = cart
            .lines()
            .iter()
            .map(|l| l.unit_price.amount_cents * i64::from(l.quantity))
            .sum();

        prop_assert_eq!(cart.total_quantity(), qty);
        prop_assert_eq!(cart.total_price().amount_cents, price);
        for line in cart.lines() {
            prop_assert!((1..=99).contains(&line.quantity));
        }
    }

    /// The window is K consecutive items from `offset mod N`, wrapping.
    #[test]
    fn cyclic_windowing(n in 1usize..30, k_seed in 0usize..30, offset in any::<i64>()) {
        let items: Vec<usize> = (0..n).collect();
        let k = k_seed % (n + 1);

        let window: Vec<usize> = window_at(&items, offset, k).into_iter().copied().collect();
        let start = true_mod(offset, n);

        prop_assert_eq!(window.len(), k);
        for (i, value) in window.iter().enumerate() {
            prop_assert_eq!(*value, (start + i) % n);
        }
    }

    /// A second begin while transitioning changes nothing.
    #[test]
    fn transition_guard(n in 1usize..20, visible in 1usize..6, forward in any::<bool>(), again in any::<bool>()) {
        let dir = |f: bool| if f { Direction::Forward } else { Direction::Backward };
        let mut rail = GroupCarousel::new((0..n).collect::<Vec<_>>(), visible);

        prop_assert!(rail.begin_advance(dir(forward)));
        let phase = rail.phase();

        prop_assert!(!rail.begin_advance(dir(again)));
        prop_assert_eq!(rail.phase(), phase);
        prop_assert!(rail.complete_advance());
        prop_assert_eq!(rail.phase(), Phase::Idle);
        prop_assert!(rail.offset() < n);
    }

    /// Single-stride rails land on `steps mod N` after that many forward steps.
    #[test]
    fn single_stride_walks_every_tile(n in 1usize..20, visible in 1usize..6, steps in 0usize..50) {
        let mut rail = GroupCarousel::new((0..n).collect::<Vec<_>>(), visible)
            .with_stride(Stride::Single);
        for _ in 0..steps {
            prop_assert!(rail.advance(Direction::Forward));
        }
        prop_assert_eq!(rail.offset(), steps % n);
        prop_assert_eq!(rail.window().len(), visible.min(n));
    }

    /// Empty carousels never advance and show nothing.
    #[test]
    fn empty_collection_is_safe(visible in 0usize..10, forward in any::<bool>()) {
        let mut rail: GroupCarousel<u8> = GroupCarousel::new(Vec::new(), visible);
        let dir = if forward { Direction::Forward } else { Direction::Backward };

        prop_assert!(!rail.begin_advance(dir));
        prop_assert!(!rail.complete_advance());
        prop_assert!(rail.window().is_empty());
        prop_assert_eq!(rail.offset(), 0);
    }
}

#[test]
fn documented_examples() {
    let mut cart = Cart::new(Currency::KES);
    cart.add_item(item(1, 100), 2);
    cart.add_item(item(2, 50), 1);
    assert_eq!(cart.total_price().amount_cents, 250);
    assert_eq!(cart.total_quantity(), 3);

    let items = ['a', 'b', 'c', 'd', 'e'];
    let window: Vec<char> = window_at(&items, 4, 3).into_iter().copied().collect();
    assert_eq!(window, vec!['e', 'a', 'b']);
}
