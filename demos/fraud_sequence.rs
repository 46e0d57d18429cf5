//! Card-testing detection: a burst of small authorizations on one card
//! followed by a large purchase on the same card.
//!
//! Run with: cargo run --example fraud_sequence

use anyhow::Result;
use seqmatch_core::Event;
use seqmatch_engine::Matcher;

fn auth(card: &str, amount: f64) -> Event {
    Event::new()
        .with_attribute("kind", "auth")
        .with_attribute("card", card)
        .with_attribute("amount", amount)
}

fn purchase(card: &str, amount: f64) -> Event {
    Event::new()
        .with_attribute("kind", "purchase")
        .with_attribute("card", card)
        .with_attribute("amount", amount)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let definition = seqmatch_compiler::compile(
        "seed(kind='auth' and amount<5) \
         probe{2,+}(kind='auth' and amount<5 and card=seed.card) \
         ->> big(kind='purchase' and amount>500 and card=seed.card)",
    )?;

    let events = vec![
        auth("4111", 1.0),
        auth("4111", 2.0),
        auth("4111", 1.5),
        purchase("5500", 40.0),
        purchase("4111", 950.0),
    ];

    for (index, result) in Matcher::new(&definition, &events).enumerate() {
        let probes = result.events("probe").map_or(0, |events| events.len());
        println!("match {index}: {probes} probe authorization(s)");
        println!("{}", serde_json::to_string_pretty(&result)?);
    }

    Ok(())
}
