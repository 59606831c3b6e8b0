use handrank::{lookup, Card, Config, FullDeck, JokerDeck};

const SEED: u64 = 42;

fn main() {
    let mut config = Config::default();
    config.eager = true;
    handrank::init(&config).expect("failed to build hand rank tables");
    divan::main();
}

#[divan::bench(consts = [5, 6, 7], sample_count = 1000, sample_size = 1000)]
fn standard<const N: usize>(bencher: divan::Bencher) {
    let mut deck = FullDeck::with_seed(SEED);

    bencher
        .counter(divan::counter::ItemsCount::new(1u32))
        .with_inputs(|| {
            deck.reset();
            deck.deal(N)
                .unwrap()
                .iter()
                .map(Card::index)
                .collect::<Vec<u8>>()
        })
        .bench_local_refs(|cards| lookup(cards).unwrap())
}

#[divan::bench(consts = [5, 6, 7], sample_count = 1000, sample_size = 1000)]
fn joker<const N: usize>(bencher: divan::Bencher) {
    let mut deck = JokerDeck::with_seed(SEED);

    bencher
        .counter(divan::counter::ItemsCount::new(1u32))
        .with_inputs(|| {
            deck.reset();
            deck.deal(N)
                .unwrap()
                .iter()
                .map(Card::index)
                .collect::<Vec<u8>>()
        })
        .bench_local_refs(|cards| lookup(cards).unwrap())
}
