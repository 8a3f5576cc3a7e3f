//! The guesser side of the game.
//!
//! [`GuessReader`] is what the engine talks to each round. Two
//! implementations are provided:
//! - [`TerminalReader`]: interactive play over any `BufRead`/`Write` pair
//! - [`ScriptedReader`]: replays pre-recorded picks, for tests and demos

use std::collections::VecDeque;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::clue::Clue;
use crate::core::{Error, Result};
use crate::embedding::EmbeddingSpace;

use super::state::HIDDEN;

/// Typed at a guess prompt to stop guessing.
pub const SKIP_FLAG: &str = "";

/// Typed at a guess prompt to print the remaining agent words.
pub const DEBUG_FLAG: &str = "\\debug";

/// Source of guesses (and clues, when the roles are reversed).
pub trait GuessReader {
    /// Collect the picks for one clue.
    ///
    /// Returns at most `budget` words, all live on `board`, stopping after
    /// the first pick that is not in `agents`.
    fn read_picks(&mut self, board: &[String], agents: &[String], budget: usize)
        -> Result<Vec<String>>;

    /// Read a clue and count from a human spymaster.
    fn read_clue(&mut self, space: &EmbeddingSpace) -> Result<(String, usize)>;

    /// Show the board before a clue is given.
    fn show_board(&mut self, _board: &[String], _rows: usize) -> Result<()> {
        Ok(())
    }

    /// Announce a clue.
    fn show_clue(&mut self, _clue: &Clue, _remaining: usize) -> Result<()> {
        Ok(())
    }
}

/// Interactive reader.
pub struct TerminalReader<R, W> {
    input: R,
    output: W,
}

impl TerminalReader<StdinLock<'static>, Stdout> {
    /// Reader over the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalReader<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Print `text` and read one trimmed, lowercased line. EOF interrupts.
    pub fn ask(&mut self, text: &str) -> Result<String> {
        write!(self.output, "{}", text).map_err(write_err)?;
        self.output.flush().map_err(write_err)?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| Error::io("read input", e))?;
        if read == 0 {
            return Err(Error::Interrupted);
        }
        Ok(line.trim().to_lowercase())
    }

    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text).map_err(write_err)
    }
}

fn write_err(e: io::Error) -> Error {
    Error::io("write output", e)
}

impl<R: BufRead, W: Write> GuessReader for TerminalReader<R, W> {
    fn read_picks(
        &mut self,
        board: &[String],
        agents: &[String],
        budget: usize,
    ) -> Result<Vec<String>> {
        let mut picks: Vec<String> = Vec::new();

        while picks.len() < budget {
            let guess = loop {
                let guess = self.ask("Your guess: ")?;
                if guess == SKIP_FLAG {
                    break guess;
                }
                if guess == DEBUG_FLAG {
                    self.say(&format!("{:?}", agents))?;
                    continue;
                }
                let on_board = guess != HIDDEN && board.iter().any(|w| *w == guess);
                if on_board && !picks.contains(&guess) {
                    break guess;
                }
            };

            if guess == SKIP_FLAG {
                break;
            }

            let correct = agents.iter().any(|a| *a == guess);
            picks.push(guess);
            if correct {
                self.say("Correct!")?;
            } else {
                self.say("Wrong :(")?;
                break;
            }
        }

        Ok(picks)
    }

    fn read_clue(&mut self, space: &EmbeddingSpace) -> Result<(String, usize)> {
        loop {
            let line = self.ask("Clue (e.g. 'car 2'): ")?;
            let Some((clue, count)) = parse_clue(&line) else {
                continue;
            };
            if !space.contains(&clue) {
                self.say("I don't understand that word.")?;
                continue;
            }
            return Ok((clue, count));
        }
    }

    fn show_board(&mut self, board: &[String], rows: usize) -> Result<()> {
        let longest = board.iter().map(|w| w.chars().count()).max().unwrap_or(0);
        let rows = rows.max(1);
        let per_row = ((board.len() + rows - 1) / rows).max(1);

        writeln!(self.output).map_err(write_err)?;
        for row in board.chunks(per_row) {
            let line: Vec<String> = row
                .iter()
                .map(|w| format!("{:>width$}", w, width = longest))
                .collect();
            writeln!(self.output, "{}", line.join(" ")).map_err(write_err)?;
        }
        writeln!(self.output).map_err(write_err)
    }

    fn show_clue(&mut self, clue: &Clue, remaining: usize) -> Result<()> {
        writeln!(
            self.output,
            "\nClue: \"{} {}\" (remaining words {})\n",
            clue.word,
            clue.count(),
            remaining
        )
        .map_err(write_err)
    }
}

/// Parse `"<word> <count>"`. Anything after the count is ignored.
fn parse_clue(line: &str) -> Option<(String, usize)> {
    let mut parts = line.split_whitespace();
    let word = parts.next()?;
    let count = parts.next()?;
    if !word.chars().all(|c| c.is_alphanumeric() || c == '_') {
        return None;
    }
    if !count.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    Some((word.to_string(), count.parse().ok()?))
}

/// Reader that replays scripted rounds.
///
/// Each call to `read_picks` consumes one scripted round, truncated to the
/// budget. Running out of script interrupts the game.
#[derive(Clone, Debug, Default)]
pub struct ScriptedReader {
    rounds: VecDeque<Vec<String>>,
    clues: VecDeque<(String, usize)>,
    announced: Vec<(String, usize)>,
}

impl ScriptedReader {
    pub fn new<I, R, S>(rounds: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rounds: rounds
                .into_iter()
                .map(|round| round.into_iter().map(Into::into).collect())
                .collect(),
            ..Self::default()
        }
    }

    /// Queue clues for `read_clue`.
    #[must_use]
    pub fn with_clues<S: Into<String>>(mut self, clues: impl IntoIterator<Item = (S, usize)>) -> Self {
        self.clues
            .extend(clues.into_iter().map(|(word, count)| (word.into(), count)));
        self
    }

    /// Clues announced through `show_clue`, in order.
    pub fn announced(&self) -> &[(String, usize)] {
        &self.announced
    }

    /// Scripted rounds not yet played.
    #[must_use]
    pub fn remaining_rounds(&self) -> usize {
        self.rounds.len()
    }
}

impl GuessReader for ScriptedReader {
    fn read_picks(
        &mut self,
        _board: &[String],
        _agents: &[String],
        budget: usize,
    ) -> Result<Vec<String>> {
        let mut picks = self.rounds.pop_front().ok_or(Error::Interrupted)?;
        picks.truncate(budget);
        Ok(picks)
    }

    fn read_clue(&mut self, space: &EmbeddingSpace) -> Result<(String, usize)> {
        let (word, count) = self.clues.pop_front().ok_or(Error::Interrupted)?;
        space.index_of(&word)?;
        Ok((word, count))
    }

    fn show_clue(&mut self, clue: &Clue, _remaining: usize) -> Result<()> {
        self.announced.push((clue.word.clone(), clue.count()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn board() -> Vec<String> {
        ["apple", "bear", "cloud", "drum"]
            .iter()
            .map(|w| w.to_string())
            .collect()
    }

    fn agents() -> Vec<String> {
        vec!["bear".to_string(), "drum".to_string()]
    }

    fn terminal(input: &str) -> TerminalReader<Cursor<Vec<u8>>, Vec<u8>> {
        TerminalReader::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(reader: TerminalReader<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(reader.into_inner().1).unwrap()
    }

    #[test]
    fn test_terminal_stops_on_miss() {
        let mut reader = terminal("Bear\napple\ndrum\n");
        let picks = reader.read_picks(&board(), &agents(), 3).unwrap();

        assert_eq!(picks, vec!["bear", "apple"]);
        let out = output(reader);
        assert!(out.contains("Correct!"));
        assert!(out.contains("Wrong :("));
    }

    #[test]
    fn test_terminal_respects_budget() {
        let mut reader = terminal("bear\ndrum\n");
        let picks = reader.read_picks(&board(), &agents(), 1).unwrap();
        assert_eq!(picks, vec!["bear"]);
    }

    #[test]
    fn test_terminal_skip_and_reprompt() {
        // Off-board words, hidden words and repeats are asked again.
        let mut reader = terminal("zebra\n---\nbear\nbear\n\n");
        let mut board = board();
        board[0] = HIDDEN.to_string();

        let picks = reader.read_picks(&board, &agents(), 2).unwrap();
        assert_eq!(picks, vec!["bear"]);
    }

    #[test]
    fn test_terminal_debug_flag_prints_agents() {
        let mut reader = terminal("\\debug\n\n");
        let picks = reader.read_picks(&board(), &agents(), 2).unwrap();

        assert!(picks.is_empty());
        assert!(output(reader).contains("\"drum\""));
    }

    #[test]
    fn test_terminal_eof_interrupts() {
        let mut reader = terminal("bear\n");
        let result = reader.read_picks(&board(), &agents(), 2);
        assert!(matches!(result, Err(Error::Interrupted)));
    }

    #[test]
    fn test_terminal_read_clue() {
        let space = EmbeddingSpace::from_pairs(vec![("car", vec![1.0]), ("road", vec![1.0])]).unwrap();
        let mut reader = terminal("car\nplane 2\nCar 2 please\n");

        let clue = reader.read_clue(&space).unwrap();
        assert_eq!(clue, ("car".to_string(), 2));
        assert!(output(reader).contains("I don't understand that word."));
    }

    #[test]
    fn test_parse_clue() {
        assert_eq!(parse_clue("car 2"), Some(("car".to_string(), 2)));
        assert_eq!(parse_clue("car   10 extra"), Some(("car".to_string(), 10)));
        assert_eq!(parse_clue("car"), None);
        assert_eq!(parse_clue("car two"), None);
        assert_eq!(parse_clue("car-x 2"), None);
        assert_eq!(parse_clue("car -2"), None);
    }

    #[test]
    fn test_show_board_layout() {
        let mut reader = terminal("");
        reader.show_board(&board(), 2).unwrap();

        let out = output(reader);
        let rows: Vec<&str> = out.lines().filter(|l| !l.is_empty()).collect();
        assert_eq!(rows, vec!["apple  bear", "cloud  drum"]);
    }

    #[test]
    fn test_scripted_reader() {
        let mut reader = ScriptedReader::new(vec![vec!["bear", "drum", "apple"], vec![]]);

        assert_eq!(reader.read_picks(&board(), &agents(), 2).unwrap(), vec!["bear", "drum"]);
        assert!(reader.read_picks(&board(), &agents(), 2).unwrap().is_empty());
        assert_eq!(reader.remaining_rounds(), 0);
        assert!(matches!(
            reader.read_picks(&board(), &agents(), 2),
            Err(Error::Interrupted)
        ));
    }

    #[test]
    fn test_scripted_clues() {
        let space = EmbeddingSpace::from_pairs(vec![("car", vec![1.0])]).unwrap();
        let mut reader = ScriptedReader::default().with_clues(vec![("car", 2), ("boat", 1)]);

        assert_eq!(reader.read_clue(&space).unwrap(), ("car".to_string(), 2));
        assert!(matches!(reader.read_clue(&space), Err(Error::UnknownWord { .. })));
        assert!(matches!(reader.read_clue(&space), Err(Error::Interrupted)));
    }
}
