//! File permission flags with validation logging
//!
//! Run with `RUST_LOG=debug cargo run --example permissions` to see the
//! validation switch being toggled.

use flagset::{flagset, set_validation_enabled, FlagSet};
use tracing_subscriber::EnvFilter;

const READ: u8 = 1 << 0;
const WRITE: u8 = 1 << 1;
const EXEC: u8 = 1 << 2;

fn describe(flag: u8) -> &'static str {
    match flag {
        READ => "read",
        WRITE => "write",
        EXEC => "exec",
        _ => "unknown",
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    set_validation_enabled(true);

    let mut owner: FlagSet<u8> = flagset![READ, WRITE];
    owner.add(EXEC, &[]);
    let group = FlagSet::new(READ, &[]);
    let combined = owner.merge(group);

    println!("owner: {owner:?} ({owner:03b})");
    println!("group: {group:?} ({group:03b})");
    for flag in combined.all() {
        println!("  {} set", describe(flag));
    }
    println!("group can write: {}", group.has(WRITE));
    println!("owner has all: {}", owner.has_all(READ, &[WRITE, EXEC]));

    set_validation_enabled(false);
}
