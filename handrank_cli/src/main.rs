//! Diagnostic CLI for the handrank poker hand evaluator. Not part of the
//! core library contract (spec.md §6) — an inspection tool for the
//! canonical-id / transition-table machinery, in the spirit of the small
//! `clap`-derive binaries in this pack (`erning-snapcall`,
//! `DeveloperPaul123-byte-knight`).

use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};

use handrank::{dump_hand, str_to_cards, to_hand, Config};
use handrank_base::constants::{CARD_COUNT, JOKER_CARD_COUNT, MAX_HAND_SIZE};
use handrank_codegen::{make_id, num_cards, IdRegistry};

#[derive(Parser)]
#[command(name = "handrank", about = "Inspect the handrank partial-hand id and rank tables")]
struct Cli {
    #[arg(long, value_enum, default_value_t = DeckArg::Standard)]
    deck: DeckArg,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum DeckArg {
    Standard,
    Joker,
}

impl DeckArg {
    fn deck_size(self) -> usize {
        match self {
            DeckArg::Standard => CARD_COUNT,
            DeckArg::Joker => JOKER_CARD_COUNT,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Rebuilds and persists the rank table(s) for `--deck` under the
    /// configured table directory, even if one is already on disk.
    Build,
    /// Dumps every reachable canonical partial-hand id of `count` cards.
    List {
        #[arg(long)]
        count: usize,
    },
    /// Finds the canonical id of a specific card combination.
    Find {
        /// Contiguous two-characters-per-card string, e.g. `AhKhQhJhTh`.
        cards: String,
    },
    /// Evaluates a hand and prints its rank code and category.
    Eval {
        /// Contiguous two-characters-per-card string, e.g. `AhKhQhJhTh`.
        cards: String,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Build => run_build(cli.deck),
        Command::List { count } => run_list(cli.deck, count),
        Command::Find { cards } => run_find(&cards),
        Command::Eval { cards } => run_eval(&cards),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run_build(deck: DeckArg) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = Config::default();
    config.eager = true;
    match deck {
        DeckArg::Standard => {
            std::fs::remove_file(config.standard_path()).ok();
        }
        DeckArg::Joker => {
            std::fs::remove_file(config.joker_path()).ok();
        }
    }
    handrank::init(&config)?;
    println!("rebuilt table(s) under {}", config.dir.display());
    Ok(())
}

fn run_list(deck: DeckArg, count: usize) -> Result<(), Box<dyn std::error::Error>> {
    // The discovery loop below mirrors pass 1 of the table builder, which
    // only ever registers ids with fewer than `MAX_HAND_SIZE` cards — a
    // `MAX_HAND_SIZE`-card id is terminal and is evaluated straight to a
    // rank code rather than kept in the registry, so there is nothing to
    // list at that count.
    if count >= MAX_HAND_SIZE {
        return Err(format!(
            "count must be less than {MAX_HAND_SIZE}: {MAX_HAND_SIZE}-card hands are terminal and are not enumerated"
        )
        .into());
    }

    let mut registry = IdRegistry::new();
    let deck_size = deck.deck_size();
    let mut id_num = 0usize;
    while id_num < registry.len() {
        let current_id = registry.id_at(id_num);
        for card in 1..=(deck_size as u8) {
            let folded = make_id(current_id, card);
            if folded.num_cards < MAX_HAND_SIZE {
                registry.save(folded.id);
            }
        }
        id_num += 1;
    }

    for &id in registry.ids() {
        if num_cards(id) == count {
            println!("{id:#018x}");
        }
    }
    Ok(())
}

fn run_find(cards: &str) -> Result<(), Box<dyn std::error::Error>> {
    let indices = str_to_cards(cards)?;

    let mut id = 0i64;
    for &index in &indices {
        let folded = make_id(id, index);
        id = folded.id;
    }
    println!("{id:#018x}");
    Ok(())
}

fn run_eval(cards: &str) -> Result<(), Box<dyn std::error::Error>> {
    let indices = str_to_cards(cards)?;
    let rank_code = handrank::lookup(&indices)?;
    println!("{} -> rank code {rank_code} ({:?})", dump_hand(&indices)?, to_hand(rank_code));
    Ok(())
}
