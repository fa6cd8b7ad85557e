//! Paging through raw trips, a few rows at a time.

use std::str::FromStr;

use crate::loader::Trip;

pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Which end of the record set browsing starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// From the first row forward.
    First,
    /// From the last row backward.
    Bottom,
}

impl FromStr for Direction {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "first" => Ok(Direction::First),
            "bottom" => Ok(Direction::Bottom),
            other => anyhow::bail!("unknown direction '{other}', expected 'first' or 'bottom'"),
        }
    }
}

/// One page of rows. `offset` is the index of the page's first row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Page<'a> {
    pub offset: usize,
    pub rows: &'a [Trip],
}

/// A finite, restartable sequence of pages over a slice of trips.
///
/// Forward pages are `[0, n)`, `[n, 2n)`, ...; bottom pages are
/// `[len-n, len)`, `[len-2n, len-n)`, ... with a final short page at 0.
/// Rows within a page always keep source order.
#[derive(Debug, Clone)]
pub struct RowPager<'a> {
    rows: &'a [Trip],
    direction: Direction,
    page_size: usize,
    pages_read: usize,
}

impl<'a> RowPager<'a> {
    pub fn new(rows: &'a [Trip], direction: Direction, page_size: usize) -> Self {
        Self {
            rows,
            direction,
            page_size: page_size.max(1),
            pages_read: 0,
        }
    }

    /// Whether every row has been shown.
    pub fn is_exhausted(&self) -> bool {
        self.pages_read * self.page_size >= self.rows.len()
    }

    /// Restarts from the first page.
    pub fn reset(&mut self) {
        self.pages_read = 0;
    }
}

impl<'a> Iterator for RowPager<'a> {
    type Item = Page<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_exhausted() {
            return None;
        }
        let rows = self.rows;
        let len = rows.len();
        let shown = self.pages_read * self.page_size;
        let (start, end) = match self.direction {
            Direction::First => (shown, (shown + self.page_size).min(len)),
            Direction::Bottom => {
                let end = len - shown;
                (end.saturating_sub(self.page_size), end)
            }
        };
        self.pages_read += 1;
        Some(Page {
            offset: start,
            rows: &rows[start..end],
        })
    }
}
