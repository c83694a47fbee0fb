//! Every way into a nary: options, values, collections, maps, and
//! pull-style sources.
//!
//! Run with: cargo run --example adapters

use std::collections::BTreeMap;

use nary::Nary;

fn main() {
    // Known cardinality at construction.
    let nothing: Nary<i32> = Nary::empty();
    let exactly_one = Nary::of(42);
    println!("empty: {nothing:?}, one: {exactly_one:?}");

    // Host optionals map present/absent onto one/empty.
    let from_some = Nary::of_option(Some("hello"));
    let from_none = Nary::of_option(None::<&str>);
    println!("some: {:?}, none: {:?}", from_some.to_option(), from_none.to_option());

    // A first value plus additionals: one when alone, a sequence otherwise.
    println!("alone: {:?}", Nary::of_many(1, vec![]));
    println!("several: {:?}", Nary::of_many(1, vec![2, 3]).into_vec());

    // Collections and arrays come in through their iterators.
    println!("from vec: {:?}", Nary::from(vec![1, 2]).into_vec());
    println!("from array: {:?}", Nary::from([3, 4]).into_vec());

    // Key-value maps traverse as pairs.
    let populations = BTreeMap::from([("amsterdam", 900_000), ("utrecht", 360_000)]);
    let cities: Vec<&str> = Nary::from_sequence(populations)
        .map(|(city, _)| city)
        .into_vec();
    println!("cities: {cities:?}");

    // Pull-style sources bridge with unknown size, preserving order.
    let mut countdown = 3;
    let bridged = Nary::from_fn(move || {
        if countdown == 0 {
            None
        } else {
            countdown -= 1;
            Some(countdown)
        }
    });
    println!("bridged: {:?}", bridged.into_vec());

    // And `collect` works like on any other container.
    let collected: Nary<i32> = (1..=5).filter(|n| n % 2 == 1).collect();
    println!("collected: {:?}", collected.into_vec());
}
