//! Random country selection that avoids recently shown countries.

use rand::Rng;
use smallvec::SmallVec;

use crate::constants::HISTORY_LEN;
use crate::countries::{Countries, Country};
use crate::error::{QuizError, QuizResult};

/// A drawn country together with its table index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pick {
    pub index: usize,
    pub country: &'static Country,
}

#[derive(Clone, Debug)]
pub struct CountrySelector {
    table: &'static [Country],
    // newest first
    recent: SmallVec<[usize; HISTORY_LEN]>,
    cap: usize,
}

impl CountrySelector {
    /// Fails when the history would leave no candidates (`cap >= N`).
    pub fn new(countries: &Countries, cap: usize) -> QuizResult<Self> {
        let table = countries.table();
        if table.is_empty() {
            return Err(QuizError::EmptyRegistry);
        }
        if cap >= table.len() {
            return Err(QuizError::HistoryTooLarge {
                cap,
                table_len: table.len(),
            });
        }
        Ok(Self {
            table,
            recent: SmallVec::new(),
            cap,
        })
    }

    /// Selector remembering `min(HISTORY_LEN, N - 1)` countries.
    pub fn with_default_history(countries: &Countries) -> QuizResult<Self> {
        let cap = HISTORY_LEN.min(countries.len().saturating_sub(1));
        Self::new(countries, cap)
    }

    pub fn next<R: Rng + ?Sized>(&mut self, rng: &mut R) -> QuizResult<Pick> {
        let mut omitted: SmallVec<[usize; HISTORY_LEN]> = self.recent.clone();
        omitted.sort_unstable();
        let num_candidates = self.table.len() - omitted.len();
        let r = rng.gen_range(0..num_candidates);
        let index = resolve_candidate(r, &omitted);
        let country = self
            .table
            .get(index)
            .ok_or(QuizError::SelectionOutOfRange {
                resolved: index,
                table_len: self.table.len(),
            })?;

        self.recent.insert(0, index);
        self.recent.truncate(self.cap);
        log::debug!(
            "[selector] drew {} ({}) from {} candidates",
            country.code,
            index,
            num_candidates
        );
        Ok(Pick { index, country })
    }

    /// Recently drawn indices, newest first.
    pub fn recent(&self) -> &[usize] {
        &self.recent
    }

    pub fn cap(&self) -> usize {
        self.cap
    }
}

/// Map the `r`-th candidate to its table index, skipping the holes left by
/// `sorted_omitted` (ascending).
pub fn resolve_candidate(mut r: usize, sorted_omitted: &[usize]) -> usize {
    for &omitted in sorted_omitted {
        if omitted <= r {
            r += 1;
        } else {
            break;
        }
    }
    r
}
