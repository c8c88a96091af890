use alloc::collections::BTreeSet;
use alloc::string::String;
use serde::{Deserialize, Serialize};

use crate::*;

/// Guessing, scoring and word-level undo/redo for one puzzle.
///
/// A guess counts only the first time a target word is named. Both a wrong word and a
/// repeated correct word are rejected the same way.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    targets: BTreeSet<String>,
    found: BTreeSet<String>,
    history: History<String>,
    score: u32,
}

impl GameState {
    /// Points gained for finding a word, and lost again when it is undone.
    pub const POINTS_PER_WORD: u32 = 10;

    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            targets: words
                .into_iter()
                .map(|word| normalize_word(word.as_ref()))
                .collect(),
            found: BTreeSet::new(),
            history: History::new(),
            score: 0,
        }
    }

    /// Returns `true` only if `word` is a target that had not been found yet.
    pub fn guess(&mut self, word: &str) -> bool {
        let word = normalize_word(word);
        if !self.targets.contains(&word) || self.found.contains(&word) {
            log::trace!("Rejected guess {}", word);
            return false;
        }

        log::trace!("Found {}", word);
        self.found.insert(word.clone());
        self.history.push(word);
        self.score += Self::POINTS_PER_WORD;
        self.debug_check();
        true
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Un-finds the most recently found word and returns it.
    pub fn undo(&mut self) -> Option<String> {
        let word = self.history.undo()?.clone();
        log::trace!("Undo {}", word);
        self.found.remove(&word);
        self.score -= Self::POINTS_PER_WORD;
        self.debug_check();
        Some(word)
    }

    /// Finds the most recently undone word again and returns it.
    pub fn redo(&mut self) -> Option<String> {
        let word = self.history.redo()?.clone();
        log::trace!("Redo {}", word);
        self.found.insert(word.clone());
        self.score += Self::POINTS_PER_WORD;
        self.debug_check();
        Some(word)
    }

    pub fn found_words(&self) -> &BTreeSet<String> {
        &self.found
    }

    pub fn targets(&self) -> &BTreeSet<String> {
        &self.targets
    }

    /// Targets still waiting to be found, in alphabetical order.
    pub fn remaining(&self) -> impl Iterator<Item = &str> {
        self.targets.difference(&self.found).map(String::as_str)
    }

    pub fn is_complete(&self) -> bool {
        self.found.len() == self.targets.len()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn history(&self) -> &History<String> {
        &self.history
    }

    fn debug_check(&self) {
        debug_assert!(self.found.is_subset(&self.targets));
        debug_assert_eq!(
            self.score as usize,
            self.found.len() * Self::POINTS_PER_WORD as usize
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use rand::{Rng, SeedableRng, rngs::SmallRng};

    fn cat_dog() -> GameState {
        GameState::new(["CAT", "DOG"])
    }

    #[test]
    fn correct_guess_scores_once() {
        let mut game = cat_dog();

        assert!(game.guess("CAT"));
        assert_eq!(game.score(), 10);
        assert!(!game.guess("cat"));
        assert_eq!(game.score(), 10);
        assert_eq!(game.found_words().len(), 1);
    }

    #[test]
    fn wrong_guess_changes_nothing() {
        let mut game = cat_dog();
        let before = game.clone();

        assert!(!game.guess("BIRD"));
        assert_eq!(game, before);
    }

    #[test]
    fn plays_through_undo_and_redo() {
        let mut game = cat_dog();

        assert!(game.guess("CAT"));
        assert!(game.guess("DOG"));
        assert_eq!(game.score(), 20);
        assert!(game.is_complete());

        assert_eq!(game.undo().as_deref(), Some("DOG"));
        assert_eq!(game.score(), 10);
        assert_eq!(game.found_words().iter().collect::<Vec<_>>(), ["CAT"]);
        assert_eq!(game.remaining().collect::<Vec<_>>(), ["DOG"]);

        assert_eq!(game.redo().as_deref(), Some("DOG"));
        assert_eq!(game.score(), 20);
    }

    #[test]
    fn undo_then_redo_restores_state() {
        let mut game = cat_dog();
        game.guess("dog");
        let after_guess = game.clone();

        game.undo();
        game.redo();

        assert_eq!(game, after_guess);
        assert!(!game.can_redo());
        assert_eq!(game.history().undo_entries(), ["DOG"]);
    }

    #[test]
    fn new_guess_clears_redo() {
        let mut game = cat_dog();
        game.guess("CAT");
        game.undo();
        assert!(game.can_redo());

        assert!(game.guess("DOG"));

        assert!(!game.can_redo());
        assert_eq!(game.redo(), None);
    }

    #[test]
    fn rejected_guess_keeps_redo() {
        let mut game = cat_dog();
        game.guess("CAT");
        game.undo();

        assert!(!game.guess("COW"));

        assert!(game.can_redo());
    }

    #[test]
    fn empty_history_is_a_no_op() {
        let mut game = cat_dog();

        assert!(!game.can_undo());
        assert_eq!(game.undo(), None);
        assert_eq!(game.redo(), None);
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn score_tracks_found_words() {
        let words = ["ONE", "TWO", "THREE", "FOUR"];
        let mut rng = SmallRng::seed_from_u64(42);
        let mut game = GameState::new(words);

        for _ in 0..500 {
            match rng.gen_range(0..3) {
                0 => {
                    let word = words[rng.gen_range(0..words.len())];
                    game.guess(word);
                }
                1 => {
                    game.undo();
                }
                _ => {
                    game.redo();
                }
            }
            assert_eq!(game.score() as usize, 10 * game.found_words().len());
            assert!(game.found_words().is_subset(game.targets()));
        }
    }
}
