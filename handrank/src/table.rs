//! The dense transition table and its lookup walk (C8).
//!
//! A table is either freshly built in memory (`Owned`) or `mmap`'d back
//! from a persisted `.dat` file (`Mapped`), avoiding paging in tables that
//! aren't in use. Persisted files are a flat little-endian `i32` array with
//! no header, matching
//! `std::fwrite(&HR[0], sizeof(int) * HR.size(), 1, fout)` in
//! `examples/original_source/pokerlib.cpp`.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use memmap2::Mmap;

use crate::error::HandRankError;

enum TableData {
    Owned(Vec<i32>),
    Mapped(Mmap),
}

pub struct Table {
    data: TableData,
    row_width: usize,
}

impl Table {
    pub fn from_owned(hr: Vec<i32>, deck_size: usize) -> Self {
        Table {
            data: TableData::Owned(hr),
            row_width: deck_size + 1,
        }
    }

    /// Maps an existing table file, validating only that its length is a
    /// whole number of rows for `deck_size`. A mismatched or missing file
    /// is reported as an I/O error, which callers treat as "not built yet".
    pub fn map(path: &Path, deck_size: usize) -> Result<Self, HandRankError> {
        let file = File::open(path)?;
        let mmap = unsafe { Mmap::map(&file)? };
        let row_width = deck_size + 1;
        if mmap.len() % (row_width * 4) != 0 || mmap.is_empty() {
            return Err(HandRankError::InternalImpossible(
                "table file length is not a whole number of rows",
            ));
        }
        Ok(Table {
            data: TableData::Mapped(mmap),
            row_width,
        })
    }

    /// Writes the table to `path` atomically: a temporary file in the same
    /// directory is written and flushed, then renamed over `path`, so a
    /// reader never observes a partially-written table.
    pub fn persist(&self, path: &Path) -> Result<(), HandRankError> {
        let hr = match &self.data {
            TableData::Owned(hr) => hr,
            TableData::Mapped(_) => {
                return Err(HandRankError::InternalImpossible(
                    "persist called on a table that was mapped, not built",
                ))
            }
        };

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let tmp_path = path.with_extension("tmp");
        {
            let mut tmp = File::create(&tmp_path)?;
            let mut buf = Vec::with_capacity(hr.len() * 4);
            for value in hr {
                buf.extend_from_slice(&value.to_le_bytes());
            }
            tmp.write_all(&buf)?;
            tmp.sync_all()?;
        }
        fs::rename(&tmp_path, path)?;
        Ok(())
    }

    fn entry(&self, idx: usize) -> i32 {
        match &self.data {
            TableData::Owned(hr) => hr[idx],
            TableData::Mapped(mmap) => {
                let off = idx * 4;
                i32::from_le_bytes(mmap[off..off + 4].try_into().unwrap())
            }
        }
    }

    /// Walks the table for a hand of `cards` (1-based indices), returning
    /// its rank code. `cards` must hold exactly 5, 6 or 7 entries.
    ///
    /// Grounded on `standard_lookup`/`lookup` in
    /// `examples/original_source/pokerlib.cpp`: the walk starts one row
    /// past the empty-hand row (so `p = row_width` needs no special case
    /// for zero cards seen so far), follows one forwarding pointer per
    /// card, and for 5- or 6-card hands takes one extra step to turn the
    /// row pointer into the rank code stashed at that row's column 0.
    pub fn lookup(&self, cards: &[u8]) -> Result<i32, HandRankError> {
        let count = cards.len();
        if !(5..=7).contains(&count) {
            return Err(HandRankError::InvalidHandSize(count));
        }

        let mut p = self.row_width as i32;
        for &card in cards {
            p = self.entry(p as usize + card as usize);
        }
        if count == 5 || count == 6 {
            p = self.entry(p as usize);
        }
        Ok(p)
    }
}
