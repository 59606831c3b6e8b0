//! Offline index construction for the handrank poker hand evaluator.
//!
//! This crate has no notion of "online" evaluation at all: it builds the
//! pieces `handrank` assembles into a working evaluator — the canonical
//! hand id (C5), the id registry (C6), the transition table builder (C7),
//! and the Cactus-Kev perfect-hash constant tables consumed by `handrank`'s
//! 5-card evaluator (C2). Grounded on
//! `examples/original_source/pokerlib.cpp`/`.hpp` and `generator.cpp`.

pub mod builder;
pub mod cactus;
pub mod canonical;
pub mod registry;

pub use builder::{build, BuiltTable, TerminalEvaluator};
pub use cactus::CactusTables;
pub use canonical::{make_id, num_cards, Folded};
pub use registry::IdRegistry;
