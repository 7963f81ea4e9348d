// src/tile/cursor.rs

//! Incremental label input.

use crate::tile::label::LabelAddressing;

/// The digits typed so far towards one label.
///
/// Holds between `0` and `D` digits. The owner consumes the completed index
/// as soon as `D` digits are present; the cursor itself never accepts input
/// past completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionCursor {
    addressing: LabelAddressing,
    typed: Vec<usize>,
}

impl SelectionCursor {
    pub fn new(addressing: LabelAddressing) -> Self {
        Self {
            addressing,
            typed: Vec::with_capacity(addressing.digits()),
        }
    }

    /// Rebuilds a cursor from previously typed digits.
    pub fn with_history(addressing: LabelAddressing, typed: Vec<usize>) -> Self {
        assert!(
            typed.len() <= addressing.digits(),
            "history of {} digits exceeds label length {}",
            typed.len(),
            addressing.digits()
        );
        Self { addressing, typed }
    }

    pub fn addressing(&self) -> &LabelAddressing {
        &self.addressing
    }

    pub fn typed(&self) -> &[usize] {
        &self.typed
    }

    pub fn depth(&self) -> usize {
        self.typed.len()
    }

    pub fn is_complete(&self) -> bool {
        self.typed.len() == self.addressing.digits()
    }

    /// Appends one digit.
    ///
    /// Returns false, leaving the cursor untouched, if no cell label starts
    /// with the extended sequence (possible when `A^D > N`).
    ///
    /// # Panics
    /// Panics if the cursor is already complete or `digit` is not a valid
    /// alphabet index.
    pub fn append(&mut self, digit: usize) -> bool {
        assert!(!self.is_complete(), "append on a completed label");
        assert!(
            digit < self.addressing.radix(),
            "digit {} outside alphabet of {}",
            digit,
            self.addressing.radix()
        );

        self.typed.push(digit);
        if !self.addressing.is_reachable(&self.typed) {
            self.typed.pop();
            log::debug!("Digit {} leads to no cell, ignoring", digit);
            return false;
        }
        log::trace!("Typed digits now {:?}", self.typed);
        true
    }

    /// Removes the last digit. Returns false if there was nothing to remove.
    pub fn undo(&mut self) -> bool {
        self.typed.pop().is_some()
    }

    /// The selected index, once all `D` digits are typed.
    pub fn completed_index(&self) -> Option<usize> {
        self.is_complete().then(|| self.addressing.decode(&self.typed))
    }

    pub fn reset(&mut self) {
        self.typed.clear();
    }

    /// True if cell `index` is still reachable with the digits typed so far.
    pub fn selects(&self, index: usize) -> bool {
        self.addressing.is_prefix(index, &self.typed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::label::Alphabet;
    use test_log::test;

    fn cursor(symbols: &str, cells: usize) -> SelectionCursor {
        let alphabet = Alphabet::parse(symbols).unwrap();
        SelectionCursor::new(LabelAddressing::new(&alphabet, cells))
    }

    #[test]
    fn test_completion_matches_encoding() {
        let mut cursor = cursor("abcdefghijklmnopqrstuvwxyz", 400);
        assert_eq!(cursor.completed_index(), None);
        assert!(cursor.append(1));
        assert_eq!(cursor.completed_index(), None);
        assert!(cursor.append(1));
        assert_eq!(cursor.completed_index(), Some(27));
        assert_eq!(cursor.addressing().encode(27), cursor.typed());
    }

    #[test]
    fn test_index_zero_is_a_completion() {
        let mut cursor = cursor("ab", 4);
        assert!(cursor.append(0));
        assert!(cursor.append(0));
        assert_eq!(cursor.completed_index(), Some(0));
    }

    #[test]
    fn test_single_digit_labels() {
        let mut cursor = cursor("asdf", 3);
        assert!(cursor.append(2));
        assert!(cursor.is_complete());
        assert_eq!(cursor.completed_index(), Some(2));
    }

    #[test]
    fn test_undo_walks_back_to_empty() {
        let mut cursor = cursor("abc", 27);
        for digit in [2, 1, 0] {
            assert!(cursor.append(digit));
        }
        for expected_depth in [2, 1, 0] {
            assert!(cursor.undo());
            assert_eq!(cursor.depth(), expected_depth);
        }
        assert!(!cursor.undo());
        assert_eq!(cursor.depth(), 0);
        assert!(cursor.typed().is_empty());
    }

    #[test]
    fn test_unreachable_digit_is_rejected() {
        // 5 cells in base 2: labels 000..100, so a leading 1 only allows 00.
        let mut cursor = cursor("ab", 5);
        assert!(cursor.append(1));
        assert!(!cursor.append(1));
        assert_eq!(cursor.typed(), &[1]);
        assert!(cursor.append(0));
        assert!(cursor.append(0));
        assert_eq!(cursor.completed_index(), Some(4));
    }

    #[test]
    fn test_selects_filters_by_prefix() {
        let mut cursor = cursor("ab", 8);
        assert!((0..8).all(|i| cursor.selects(i)));
        cursor.append(1);
        let selected: Vec<usize> = (0..8).filter(|&i| cursor.selects(i)).collect();
        assert_eq!(selected, vec![4, 5, 6, 7]);
        cursor.reset();
        assert!((0..8).all(|i| cursor.selects(i)));
    }

    #[test]
    fn test_with_history_restores_digits() {
        let alphabet = Alphabet::parse("ab").unwrap();
        let addressing = LabelAddressing::new(&alphabet, 8);
        let mut cursor = SelectionCursor::with_history(addressing, vec![1, 0, 1]);
        assert_eq!(cursor.completed_index(), Some(5));
        assert!(cursor.undo());
        assert_eq!(cursor.typed(), &[1, 0]);
    }

    #[test]
    #[should_panic(expected = "append on a completed label")]
    fn test_append_past_completion_panics() {
        let mut cursor = cursor("ab", 2);
        cursor.append(0);
        cursor.append(0);
    }
}
