//! Bootstrap (C9): getting from "nothing on disk" to a ready-to-query
//! joker-deck table, building and persisting whatever tables are missing
//! along the way.
//!
//! The joker table's terminal evaluator needs the *standard* table as an
//! oracle for resolved (joker-free) hands, so building it may first require
//! building the standard table. Both tables are cached under
//! [`Config::dir`] so a second process start just `mmap`s them back.

use handrank_base::constants::{CARD_COUNT, JOKER_CARD_COUNT};
use handrank_codegen::{build, TerminalEvaluator};
use once_cell::sync::OnceCell;

use crate::config::Config;
use crate::error::HandRankError;
use crate::table::Table;
use crate::terminal;

static ACTIVE_CONFIG: OnceCell<Config> = OnceCell::new();
static JOKER_TABLE: OnceCell<Table> = OnceCell::new();

struct JokerEvaluator<'a> {
    standard: &'a Table,
}

impl TerminalEvaluator for JokerEvaluator<'_> {
    fn evaluate(&self, id: i64, num_cards: usize) -> i32 {
        terminal::evaluate_joker_id(id, num_cards, &|cards| {
            self.standard
                .lookup(cards)
                .expect("standard table lookup during joker table construction")
        })
    }
}

fn standard_table(config: &Config) -> Result<Table, HandRankError> {
    let path = config.standard_path();
    if let Ok(table) = Table::map(&path, CARD_COUNT) {
        log::info!("mapped standard hand rank table from {}", path.display());
        return Ok(table);
    }

    log::info!("building standard hand rank table (this only happens once)");
    let built = build(CARD_COUNT, &terminal::evaluate_standard_id);
    log::info!(
        "standard table built: {} ids, {} entries",
        built.num_ids,
        built.hr.len()
    );
    let table = Table::from_owned(built.hr, CARD_COUNT);
    table.persist(&path)?;
    Ok(table)
}

fn joker_table(config: &Config) -> Result<Table, HandRankError> {
    let path = config.joker_path();
    if let Ok(table) = Table::map(&path, JOKER_CARD_COUNT) {
        log::info!("mapped joker hand rank table from {}", path.display());
        return Ok(table);
    }

    let standard = standard_table(config)?;

    log::info!("building joker hand rank table (this only happens once)");
    let evaluator = JokerEvaluator {
        standard: &standard,
    };
    let built = build(JOKER_CARD_COUNT, &evaluator);
    log::info!(
        "joker table built: {} ids, {} entries",
        built.num_ids,
        built.hr.len()
    );
    let table = Table::from_owned(built.hr, JOKER_CARD_COUNT);
    table.persist(&path)?;
    Ok(table)
}

/// Registers `config` as the active configuration (first caller wins,
/// matching every other `OnceCell` in this module) and, if `config.eager`
/// is set, builds and persists the joker table (and the standard table it
/// depends on, if needed) immediately. With `eager` unset, construction is
/// deferred to the first [`table`] call. Idempotent and safe to call from
/// multiple threads.
pub fn init(config: &Config) -> Result<(), HandRankError> {
    let active = ACTIVE_CONFIG.get_or_init(|| config.clone());
    if config.eager {
        JOKER_TABLE.get_or_try_init(|| joker_table(active))?;
    }
    Ok(())
}

/// Returns the global joker table, building it under the active
/// configuration if nothing has built it yet. The active configuration is
/// whatever the first call to [`init`] registered, or the default
/// [`Config`] if [`init`] was never called.
pub fn table() -> Result<&'static Table, HandRankError> {
    let config = ACTIVE_CONFIG.get_or_init(Config::default);
    JOKER_TABLE.get_or_try_init(|| joker_table(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_paths_join_dir_and_file_names() {
        let config = Config::new("/tmp/tables");
        assert_eq!(config.standard_path(), std::path::Path::new("/tmp/tables/standard_handranks.dat"));
        assert_eq!(config.joker_path(), std::path::Path::new("/tmp/tables/handranks.dat"));
    }
}
