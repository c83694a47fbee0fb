//! A data pipeline that narrows from many to one.
//!
//! Run with: cargo run --example pipeline

use nary::Nary;

#[derive(Debug, Clone)]
struct Order {
    id: u32,
    customer: &'static str,
    total_cents: i64,
}

fn orders() -> Vec<Order> {
    vec![
        Order { id: 1, customer: "ada", total_cents: 1250 },
        Order { id: 2, customer: "grace", total_cents: 300 },
        Order { id: 3, customer: "ada", total_cents: 8900 },
        Order { id: 4, customer: "hedy", total_cents: 4100 },
    ]
}

fn main() {
    // Sequence view: lazy transformation over unknown cardinality.
    let big_spender_ids: Vec<u32> = Nary::from_sequence(orders())
        .filter(|order| order.total_cents > 1000)
        .map(|order| order.id)
        .into_vec();
    println!("orders over $10: {big_spender_ids:?}");

    // Narrowing: exactly one order belongs to "hedy", so the at-most-one
    // view succeeds and behaves like a plain optional from here on.
    let hedys = Nary::from_sequence(orders()).filter(|order| order.customer == "hedy");
    println!("hedy's order: {:?}", hedys.get());

    // Absence is tolerated by the or-else family.
    let nobody = Nary::from_sequence(orders())
        .filter(|order| order.customer == "linus")
        .map(|order| order.total_cents);
    println!("linus spent: {} cents", nobody.value_or(0));

    // Excess is not: two orders belong to "ada", and the diagnostic names
    // both of them in traversal order.
    let adas = Nary::from_sequence(orders()).filter(|order| order.customer == "ada");
    match adas.at_most_one() {
        Ok(value) => println!("ada's order: {value:?}"),
        Err(excess) => println!("narrowing failed: {excess}"),
    }

    // Aggregations flow back into the same algebra.
    let largest = Nary::from_sequence(orders())
        .map(|order| order.total_cents)
        .max()
        .value_or(0);
    println!("largest order: {largest} cents");
}
