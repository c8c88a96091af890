use std::io::{self, Write};

use crossterm::style::Stylize;
use crossword_core::GridSnapshot;

use crate::session::Session;

pub fn draw(out: &mut impl Write, session: &Session, color: bool) -> io::Result<()> {
    let grid = session.grid();
    let highlighted = session.highlighted();
    let size = grid.size();

    writeln!(out)?;
    for row in 0..size {
        for col in 0..size {
            if col > 0 {
                write!(out, " ")?;
            }
            let letter = grid.cell_at((row, col)).to_string();
            if !highlighted.contains(&(row, col)) {
                write!(out, "{}", letter)?;
            } else if color {
                write!(out, "{}", letter.blue().bold())?;
            } else {
                write!(out, "{}", letter.to_lowercase())?;
            }
        }
        writeln!(out)?;
    }

    let game = session.game();
    writeln!(out)?;
    writeln!(out, "Score: {}", game.score())?;
    let remaining: Vec<&str> = game.remaining().collect();
    writeln!(out, "Clues: {}", remaining.join(", "))?;
    Ok(())
}

pub fn draw_solution(out: &mut impl Write, solution: &GridSnapshot) -> io::Result<()> {
    writeln!(out, "Solution:")?;
    write!(out, "{}", solution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossword_core::PuzzleConfig;
    use rand::{SeedableRng, rngs::SmallRng};

    fn render(session: &Session) -> String {
        let mut out = Vec::new();
        draw(&mut out, session, false).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn found_words_are_lowercased_without_color() {
        let config = PuzzleConfig::parse_list("cat,dog").unwrap();
        let mut session = Session::new(&config, SmallRng::seed_from_u64(2)).unwrap();
        session.submit("CAT");

        let text = render(&session);
        let cells: String = text
            .lines()
            .skip(1)
            .take(8)
            .flat_map(|line| line.split(' '))
            .collect();

        assert_eq!(cells.chars().filter(char::is_ascii_lowercase).count(), 3);
        assert!(text.contains("Score: 10"));
        assert!(text.contains("Clues: DOG"));
    }

    #[test]
    fn solution_shows_empty_cells() {
        let solution = GridSnapshot::from_rows(&["A.", ".B"]).unwrap();
        let mut out = Vec::new();

        draw_solution(&mut out, &solution).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "Solution:\nA .\n. B\n");
    }
}
