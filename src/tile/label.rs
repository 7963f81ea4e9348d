// src/tile/label.rs

//! Label alphabets and the fixed-length addressing of grid cells.
//!
//! Every cell index in `[0, N)` is written as a `D`-digit number in base `A`
//! (the alphabet size), most significant digit first and left-padded. Because
//! all labels share the same length, no label is a strict prefix of another,
//! and incremental input knows it is complete exactly when `D` digits have
//! been typed.

use std::collections::HashSet;

use crate::error::{Result, TileError};

/// An ordered set of distinct, non-empty symbols the user types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<String>,
}

impl Alphabet {
    /// Builds an alphabet from explicit symbols, rejecting empty,
    /// duplicate, or fewer than two symbols.
    pub fn new<I, S>(symbols: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let symbols: Vec<String> = symbols.into_iter().map(Into::into).collect();

        let mut seen = HashSet::with_capacity(symbols.len());
        for symbol in &symbols {
            if symbol.is_empty() {
                return Err(TileError::EmptySymbol);
            }
            if !seen.insert(symbol.as_str()) {
                return Err(TileError::DuplicateSymbol(symbol.clone()));
            }
        }
        if symbols.len() < 2 {
            return Err(TileError::AlphabetTooSmall { len: symbols.len() });
        }

        Ok(Self { symbols })
    }

    /// Parses a configured symbol string: every `char` is one symbol.
    pub fn parse(symbols: &str) -> Result<Self> {
        Self::new(symbols.chars().map(String::from))
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false for a constructed alphabet; kept for the usual pairing with `len`.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The symbol for digit `digit`.
    pub fn symbol(&self, digit: usize) -> &str {
        &self.symbols[digit]
    }

    /// The digit whose symbol equals `text`, if any.
    pub fn find(&self, text: &str) -> Option<usize> {
        self.symbols.iter().position(|s| s == text)
    }
}

/// Fixed-length base-`A` addressing of `N` cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelAddressing {
    radix: usize,
    cell_count: usize,
    digits: usize,
}

impl LabelAddressing {
    /// Smallest `D >= 1` with `radix^D >= cell_count`.
    pub fn new(alphabet: &Alphabet, cell_count: usize) -> Self {
        let radix = alphabet.len();
        assert!(radix >= 2, "alphabet must have at least two symbols");
        assert!(cell_count >= 1, "cannot address an empty grid");

        let mut digits = 1;
        let mut capacity = radix;
        while capacity < cell_count {
            digits += 1;
            match capacity.checked_mul(radix) {
                Some(next) => capacity = next,
                None => break,
            }
        }

        Self {
            radix,
            cell_count,
            digits,
        }
    }

    /// Alphabet size `A`.
    pub fn radix(&self) -> usize {
        self.radix
    }

    /// Number of addressable cells `N`.
    pub fn cell_count(&self) -> usize {
        self.cell_count
    }

    /// Label length `D`.
    pub fn digits(&self) -> usize {
        self.digits
    }

    /// The `D` digits of `index`, most significant first.
    pub fn encode(&self, index: usize) -> Vec<usize> {
        assert!(
            index < self.cell_count,
            "index {} out of range for {} cells",
            index,
            self.cell_count
        );
        let mut digits = vec![0; self.digits];
        let mut rest = index;
        for slot in digits.iter_mut().rev() {
            *slot = rest % self.radix;
            rest /= self.radix;
        }
        digits
    }

    /// The index addressed by a complete `D`-digit label.
    ///
    /// # Panics
    /// Panics if `digits` is not exactly `D` long; a shorter sequence is an
    /// address still being typed and has no index yet.
    pub fn decode(&self, digits: &[usize]) -> usize {
        assert_eq!(
            digits.len(),
            self.digits,
            "decoding an incomplete label ({} of {} digits)",
            digits.len(),
            self.digits
        );
        self.value(digits)
    }

    /// True iff the label of `index` begins with `typed`.
    pub fn is_prefix(&self, index: usize, typed: &[usize]) -> bool {
        if typed.len() > self.digits || index >= self.cell_count {
            return false;
        }
        let scale = self.scale(self.digits - typed.len());
        match scale {
            Some(scale) => index / scale == self.value(typed),
            // The remaining digits exceed usize; only an all-zero prefix fits.
            None => typed.iter().all(|&d| d == 0),
        }
    }

    /// True if at least one cell in `[0, N)` has a label starting with `typed`.
    pub fn is_reachable(&self, typed: &[usize]) -> bool {
        if typed.len() > self.digits || typed.iter().any(|&d| d >= self.radix) {
            return false;
        }
        let first = self
            .scale(self.digits - typed.len())
            .and_then(|scale| self.value(typed).checked_mul(scale));
        matches!(first, Some(first) if first < self.cell_count)
    }

    /// The full label of `index` rendered with `alphabet`.
    pub fn label(&self, alphabet: &Alphabet, index: usize) -> String {
        self.encode(index)
            .into_iter()
            .map(|digit| alphabet.symbol(digit))
            .collect()
    }

    /// The label of `index` split after `depth` digits.
    pub fn split_label(&self, alphabet: &Alphabet, index: usize, depth: usize) -> (String, String) {
        let digits = self.encode(index);
        let depth = depth.min(digits.len());
        let render = |ds: &[usize]| ds.iter().map(|&d| alphabet.symbol(d)).collect::<String>();
        (render(&digits[..depth]), render(&digits[depth..]))
    }

    fn value(&self, digits: &[usize]) -> usize {
        digits.iter().fold(0usize, |acc, &digit| {
            debug_assert!(digit < self.radix, "digit {} out of range", digit);
            acc.saturating_mul(self.radix).saturating_add(digit)
        })
    }

    /// `radix^exp`, or `None` on overflow.
    fn scale(&self, exp: usize) -> Option<usize> {
        (0..exp).try_fold(1usize, |acc, _| acc.checked_mul(self.radix))
    }
}
