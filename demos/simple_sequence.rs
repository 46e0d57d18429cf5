//! Minimal end-to-end walkthrough: compile a pattern and run it over a
//! hand-built event sequence.
//!
//! Run with: cargo run --example simple_sequence

use anyhow::Result;
use seqmatch_core::Event;
use seqmatch_engine::find_matches;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // a login followed (not necessarily immediately) by a purchase from
    // the same user
    let definition =
        seqmatch_compiler::compile("login(kind='login') -> purchase(kind='purchase' and user=login.user)")?;

    let events = vec![
        Event::new()
            .with_attribute("kind", "login")
            .with_attribute("user", "alice"),
        Event::new()
            .with_attribute("kind", "view")
            .with_attribute("user", "alice"),
        Event::new()
            .with_attribute("kind", "purchase")
            .with_attribute("user", "alice"),
    ];

    let matches = find_matches(&definition, &events);
    println!("{} match(es)", matches.len());
    for result in &matches {
        println!("{}", serde_json::to_string_pretty(result)?);
    }

    Ok(())
}
