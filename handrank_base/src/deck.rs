use crate::Card;

/// A custom collection of playing cards that can be dealt in a random order.
///
/// Deck shuffling is a consumed interface, not part of the index
/// construction or lookup core: it exists to let a host application (or the
/// diagnostic CLI) generate hands to feed into [`lookup`](crate) exercising
/// code, the way `init_deck`/`shuffle_deck` serve the original evaluator's
/// test harness.
pub struct Deck {
    cards: Vec<Card>,
    idx: usize,
    rng: fastrand::Rng,
}

impl Deck {
    /// Creates a new deck containing the given cards shuffled by a random seed.
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Deck {
        let seed = fastrand::u64(..);
        Deck::with_seed(cards, seed)
    }

    /// Creates a new deck containing the given cards shuffled according to the
    /// initial seed.
    pub fn with_seed(cards: impl IntoIterator<Item = Card>, seed: u64) -> Deck {
        Deck {
            cards: cards.into_iter().collect(),
            idx: 0,
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    /// Deals `num_cards` cards from the top of the deck, or `None` if fewer
    /// than that many remain.
    pub fn deal(&mut self, num_cards: usize) -> Option<&[Card]> {
        if num_cards > self.len() {
            return None;
        }

        let end = self.cards.len();
        for i in self.idx..(self.idx + num_cards) {
            self.cards.swap(i, self.rng.usize(i..end))
        }

        let result = &self.cards[self.idx..(self.idx + num_cards)];
        self.idx += num_cards;
        Some(result)
    }

    /// Returns the number of cards remaining in the deck.
    pub fn len(&self) -> usize {
        self.cards.len() - self.idx
    }

    /// Returns `true` if there are no more cards available in the deck.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Replaces the cards that have been dealt out.
    pub fn reset(&mut self) {
        self.idx = 0;
    }
}

/// A standard 52-card deck.
pub struct FullDeck(Deck);

impl FullDeck {
    /// Creates a new 52-card deck shuffled by a random seed.
    pub fn new() -> FullDeck {
        FullDeck(Deck::new(crate::constants::all_cards(false)))
    }

    /// Creates a new 52-card deck shuffled according to the given seed.
    pub fn with_seed(seed: u64) -> FullDeck {
        FullDeck(Deck::with_seed(crate::constants::all_cards(false), seed))
    }

    pub fn deal(&mut self, num_cards: usize) -> Option<&[Card]> {
        self.0.deal(num_cards)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn reset(&mut self) {
        self.0.reset();
    }
}

impl Default for FullDeck {
    fn default() -> Self {
        FullDeck::new()
    }
}

/// The 56-card extended deck: the 52 standard cards plus 4 suited jokers.
pub struct JokerDeck(Deck);

impl JokerDeck {
    /// Creates a new 56-card deck shuffled by a random seed.
    pub fn new() -> JokerDeck {
        JokerDeck(Deck::new(crate::constants::all_cards(true)))
    }

    /// Creates a new 56-card deck shuffled according to the given seed.
    pub fn with_seed(seed: u64) -> JokerDeck {
        JokerDeck(Deck::with_seed(crate::constants::all_cards(true), seed))
    }

    pub fn deal(&mut self, num_cards: usize) -> Option<&[Card]> {
        self.0.deal(num_cards)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn reset(&mut self) {
        self.0.reset();
    }
}

impl Default for JokerDeck {
    fn default() -> Self {
        JokerDeck::new()
    }
}
