use std::collections::BTreeSet;

use crossword_core::*;

/// One line of player input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command<'a> {
    Undo,
    Redo,
    Quit,
    Guess(&'a str),
}

impl<'a> Command<'a> {
    pub fn parse(line: &'a str) -> Self {
        match line.trim() {
            ":undo" | ":u" => Self::Undo,
            ":redo" | ":r" => Self::Redo,
            ":quit" | ":q" => Self::Quit,
            text => Self::Guess(text),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    Empty,
    Correct,
    Completed { score: u32 },
    Rejected,
}

impl Submission {
    pub fn message(self) -> String {
        match self {
            Self::Empty => "Please enter a word.".to_owned(),
            Self::Correct => "Correct!".to_owned(),
            Self::Completed { score } => format!(
                "Congratulations! You found all the words.\nYour final score is: {}",
                score
            ),
            Self::Rejected => "Wrong or duplicate.".to_owned(),
        }
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Completed { .. })
    }
}

/// A running puzzle: the grid, the game state and the grid snapshots that follow it.
///
/// The word history inside [`GameState`] and the snapshot history here are separate
/// stacks. Every accepted guess records one snapshot, so undo and redo step both together.
#[derive(Clone, Debug)]
pub struct Session {
    grid: Grid,
    solution: GridSnapshot,
    game: GameState,
    snapshots: History<GridSnapshot>,
    report: PlacementReport,
}

impl Session {
    pub fn new<S: RandomSource>(config: &PuzzleConfig, source: S) -> Result<Self> {
        let mut grid = Grid::new(config.size())?;
        let mut placer = RandomPlacer::new(source);
        let report = placer.place_words(&mut grid, config.words());
        let solution = grid.grid_copy();
        let filled = grid.fill_empty_with_random_letters(placer.source_mut());
        log::debug!(
            "Built {0}x{0} grid, {1} word(s) placed, {2} cell(s) filled",
            grid.size(),
            report.placed.len(),
            filled
        );

        Ok(Self {
            grid,
            solution,
            game: GameState::new(config.words()),
            snapshots: History::new(),
            report,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Layout of the placed words before the noise letters went in.
    pub fn solution(&self) -> &GridSnapshot {
        &self.solution
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn report(&self) -> &PlacementReport {
        &self.report
    }

    pub fn submit(&mut self, input: &str) -> Submission {
        let guess = normalize_word(input.trim());
        if guess.is_empty() {
            return Submission::Empty;
        }

        let snapshot = self.grid.grid_copy();
        if !self.game.guess(&guess) {
            return Submission::Rejected;
        }
        self.snapshots.push(snapshot);

        if self.game.is_complete() {
            Submission::Completed {
                score: self.game.score(),
            }
        } else {
            Submission::Correct
        }
    }

    pub fn undo(&mut self) -> Option<String> {
        if !self.game.can_undo() || !self.snapshots.can_undo() {
            return None;
        }
        let previous = self.snapshots.step_back(self.grid.grid_copy())?;
        self.grid.load_from_copy(&previous);
        self.game.undo()
    }

    pub fn redo(&mut self) -> Option<String> {
        if !self.game.can_redo() || !self.snapshots.can_redo() {
            return None;
        }
        let next = self.snapshots.step_forward(self.grid.grid_copy())?;
        self.grid.load_from_copy(&next);
        self.game.redo()
    }

    /// Cells covered by words found so far.
    pub fn highlighted(&self) -> BTreeSet<Coord2> {
        self.game
            .found_words()
            .iter()
            .flat_map(|word| self.grid.word_positions(word).iter().copied())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::SmallRng};

    fn session(words: &str, seed: u64) -> Session {
        let config = PuzzleConfig::parse_list(words).unwrap();
        Session::new(&config, SmallRng::seed_from_u64(seed)).unwrap()
    }

    #[test]
    fn command_parsing() {
        assert_eq!(Command::parse(" :undo "), Command::Undo);
        assert_eq!(Command::parse(":r"), Command::Redo);
        assert_eq!(Command::parse(":quit"), Command::Quit);
        assert_eq!(Command::parse(" cat "), Command::Guess("cat"));
    }

    #[test]
    fn new_session_is_fully_lettered() {
        let session = session("cat, dog", 3);

        assert_eq!(session.grid().size(), 8);
        assert!(session.grid().is_filled());
        assert_eq!(session.report().placed, ["CAT", "DOG"]);
        for word in ["CAT", "DOG"] {
            let positions = session.grid().word_positions(word);
            let spelled: String = positions
                .iter()
                .map(|&coords| session.grid().cell_at(coords).to_char())
                .collect();
            assert_eq!(spelled, word);
            assert_eq!(spelled.chars().count(), positions.len());
        }
    }

    #[test]
    fn plays_cat_and_dog() {
        let mut session = session("CAT,DOG", 11);

        assert_eq!(session.submit("CAT"), Submission::Correct);
        assert_eq!(session.game().score(), 10);
        assert_eq!(session.submit("cat"), Submission::Rejected);
        assert_eq!(session.submit("  "), Submission::Empty);
        assert_eq!(session.submit("DOG"), Submission::Completed { score: 20 });

        assert_eq!(session.undo().as_deref(), Some("DOG"));
        assert_eq!(session.game().score(), 10);
        assert_eq!(session.redo().as_deref(), Some("DOG"));
        assert_eq!(session.game().score(), 20);
    }

    #[test]
    fn undo_restores_the_grid_snapshot() {
        let mut session = session("CAT,DOG", 5);
        let before = session.grid().grid_copy();

        session.submit("dog");
        session.undo();

        assert_eq!(session.grid().grid_copy(), before);
        assert!(session.highlighted().is_empty());
    }

    #[test]
    fn highlight_follows_found_words() {
        let mut session = session("CAT,DOG", 9);
        session.submit("cat");

        let expected: BTreeSet<_> = session.grid().word_positions("CAT").iter().copied().collect();
        assert_eq!(session.highlighted(), expected);
    }

    #[test]
    fn nothing_to_undo_or_redo() {
        let mut session = session("CAT", 1);

        assert_eq!(session.undo(), None);
        assert_eq!(session.redo(), None);
        session.submit("bird");
        assert_eq!(session.undo(), None);
    }

    #[test]
    fn completion_message_reports_score() {
        let message = Submission::Completed { score: 30 }.message();

        assert!(message.ends_with("Your final score is: 30"));
        assert!(Submission::Completed { score: 30 }.is_finished());
        assert!(!Submission::Correct.is_finished());
    }
}
