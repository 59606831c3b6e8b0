use handrank_base::constants::CARD_COUNT;
use handrank_codegen::{build, cactus, TerminalEvaluator};

fn main() {
    divan::main();
}

/// Stands in for the real Cactus-Kev terminal evaluator (private to the
/// `handrank` crate) so this bench can isolate the cost of the canonical-id
/// machinery (C5/C6/C7) from five-card hand evaluation itself.
struct ZeroEvaluator;

impl TerminalEvaluator for ZeroEvaluator {
    fn evaluate(&self, _id: i64, _num_cards: usize) -> i32 {
        0
    }
}

#[divan::bench(sample_count = 10, sample_size = 1)]
fn cactus_tables() {
    cactus::generate();
}

#[divan::bench(sample_count = 1, sample_size = 1)]
fn standard_table() {
    build(CARD_COUNT, &ZeroEvaluator);
}
