use crate::error::SelectionError;
use crate::rules::{Group, Rules};

use super::Board;

impl<R: Rules> Board<R> {
    /// Checks that every index names a distinct occupied slot.
    fn validate_selection(&self, selection: &[usize]) -> Result<(), SelectionError> {
        for (position, &index) in selection.iter().enumerate() {
            let slot = self.slots.get(index).ok_or(SelectionError::OutOfRange {
                index,
                size: self.slots.len(),
            })?;
            if slot.is_none() {
                return Err(SelectionError::EmptySlot(index));
            }
            if selection[..position].contains(&index) {
                return Err(SelectionError::DuplicateIndex(index));
            }
        }
        Ok(())
    }

    /// Deals a card into each slot, emptying it once the deck runs out.
    ///
    /// Indices must already be validated.
    fn refill(&mut self, indices: &[usize]) {
        for &index in indices {
            self.slots[index] = self.deck.deal();
        }
    }

    /// Returns whether the selected slots form a legal group.
    ///
    /// Selections naming an empty slot, an index past the end of the board,
    /// or the same slot twice are never legal.
    pub fn is_legal(&self, selection: &[usize]) -> bool {
        self.validate_selection(selection).is_ok() && self.rules.is_legal(&self.slots, selection)
    }

    /// Returns whether any legal group remains among the occupied slots.
    pub fn another_play_is_possible(&self) -> bool {
        self.rules
            .another_play_is_possible(&self.slots, &self.card_indexes())
    }

    /// Replaces the selected cards with cards dealt from the deck.
    ///
    /// Slots are emptied once the deck is exhausted. Every index is checked
    /// before any slot changes, so on error the board is untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if an index is out of range, names an empty slot, or
    /// appears more than once.
    pub fn replace_selected_cards(&mut self, indices: &[usize]) -> Result<(), SelectionError> {
        self.validate_selection(indices)?;
        self.refill(indices);
        Ok(())
    }

    /// Removes a player-selected group and refills its slots.
    ///
    /// Returns the group that was removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the selection does not name distinct occupied
    /// slots, or [`SelectionError::NotLegal`] if the cards do not form a
    /// legal group. The board is untouched on error.
    pub fn try_play(&mut self, selection: &[usize]) -> Result<R::Group, SelectionError> {
        self.validate_selection(selection)?;
        if !self.rules.is_legal(&self.slots, selection) {
            return Err(SelectionError::NotLegal);
        }

        let group = self
            .rules
            .find_group(&self.slots, selection)
            .ok_or(SelectionError::NotLegal)?;
        self.refill(selection);
        Ok(group)
    }

    /// Finds a legal group anywhere on the board and plays it.
    ///
    /// Returns `true` if a group was removed. The board is unchanged when
    /// none exists.
    pub fn play_if_possible(&mut self) -> bool {
        let candidates = self.card_indexes();
        let Some(group) = self.rules.find_group(&self.slots, &candidates) else {
            return false;
        };

        self.refill(group.indices());
        if let Some(level) = self.options.play_log_level {
            log::log!(level, "{group} removed.");
        }
        true
    }
}
