use std::io::{self, stdout, Stdout, Write};
use std::sync::Once;
use std::time::Duration;

use crossterm::event::{poll, read, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue, style, terminal};
use tracing::{debug, warn};

use crate::driver::{latest_input, InputSource, RenderSink};
use crate::game::Input;
use crate::grid::{Cell, Grid};

const EMPTY_CHAR: char = '.';
const TARGET_CHAR: char = 'X';
const HEAD_CHAR: char = 'O';
const SEGMENT_CHAR: char = '#';

/// Holds the terminal in raw mode on the alternate screen until dropped.
pub struct TermManager {
    stdout: Stdout,
}

impl TermManager {
    pub fn setup() -> io::Result<Self> {
        install_panic_hook();

        let mut term = TermManager { stdout: stdout() };
        // From here on, Drop undoes whatever part of the setup succeeded.
        terminal::enable_raw_mode()?;
        execute!(
            term.stdout,
            EnterAlternateScreen,
            cursor::Hide,
            cursor::DisableBlinking,
            terminal::Clear(ClearType::All)
        )?;
        debug!("terminal raw mode enabled");

        Ok(term)
    }

    fn restore(&mut self) {
        if let Err(err) = restore_terminal(&mut self.stdout) {
            warn!(%err, "failed to restore the terminal");
        }
    }
}

impl Drop for TermManager {
    fn drop(&mut self) {
        self.restore();
        debug!("terminal restored");
    }
}

impl RenderSink for TermManager {
    fn render(&mut self, grid: &Grid, score: usize) -> io::Result<()> {
        draw_frame(&mut self.stdout, grid, score)
    }
}

/// Reads pending key presses from the terminal without blocking.
#[derive(Debug, Default)]
pub struct KeyInput;

impl InputSource for KeyInput {
    fn poll_input(&mut self) -> io::Result<Input> {
        let mut inputs = vec![];

        while poll(Duration::from_millis(0))? {
            if let Event::Key(key) = read()? {
                if key.kind == KeyEventKind::Press {
                    inputs.push(decode_key(&key));
                }
            }
        }

        Ok(latest_input(inputs))
    }
}

/// Maps a key press to game input. Keys without a meaning are `Input::None`.
pub fn decode_key(key: &KeyEvent) -> Input {
    if is_ctrl_c(key) {
        return Input::Quit;
    }

    match key.code {
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => Input::Up,
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => Input::Left,
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => Input::Down,
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => Input::Right,
        KeyCode::Char('q') | KeyCode::Char('Q') => Input::Quit,
        _ => Input::None,
    }
}

/// Writes the grid, one row per line starting at the top-left corner, followed by the score.
pub fn draw_frame<W: Write>(out: &mut W, grid: &Grid, score: usize) -> io::Result<()> {
    let mut last_row = 0;

    for (row, cells) in grid.rows().enumerate() {
        let line: String = cells.iter().map(|cell| cell_char(*cell)).collect();
        queue!(out, cursor::MoveTo(0, row as u16), style::Print(line))?;
        last_row = row as u16;
    }

    queue!(
        out,
        cursor::MoveTo(0, last_row + 2),
        terminal::Clear(ClearType::UntilNewLine),
        style::Print(format!("Score: {}", score)),
        cursor::MoveTo(0, last_row + 3),
        style::Print("WASD or arrow keys to move, q to quit")
    )?;

    out.flush()
}

///////////////////////////////////////////////////////////////////////////

fn cell_char(cell: Cell) -> char {
    match cell {
        Cell::Empty => EMPTY_CHAR,
        Cell::Target => TARGET_CHAR,
        Cell::Head => HEAD_CHAR,
        Cell::Segment => SEGMENT_CHAR,
    }
}

fn is_ctrl_c(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('c')) && key.modifiers.contains(KeyModifiers::CONTROL)
}

fn restore_terminal<W: Write>(out: &mut W) -> io::Result<()> {
    let leave = execute!(out, cursor::EnableBlinking, cursor::Show, LeaveAlternateScreen);
    // Raw mode goes even if the escape sequences could not be written.
    let raw = terminal::disable_raw_mode();
    leave.and(raw)
}

fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = restore_terminal(&mut stdout());
            previous(info);
        }));
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snake::Snake;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn wasd_and_arrows_map_to_directions() {
        assert_eq!(decode_key(&key(KeyCode::Char('w'))), Input::Up);
        assert_eq!(decode_key(&key(KeyCode::Char('a'))), Input::Left);
        assert_eq!(decode_key(&key(KeyCode::Char('s'))), Input::Down);
        assert_eq!(decode_key(&key(KeyCode::Char('d'))), Input::Right);
        assert_eq!(decode_key(&key(KeyCode::Up)), Input::Up);
        assert_eq!(decode_key(&key(KeyCode::Left)), Input::Left);
        assert_eq!(decode_key(&key(KeyCode::Down)), Input::Down);
        assert_eq!(decode_key(&key(KeyCode::Right)), Input::Right);
    }

    #[test]
    fn q_and_ctrl_c_quit() {
        assert_eq!(decode_key(&key(KeyCode::Char('q'))), Input::Quit);
        assert_eq!(decode_key(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)), Input::Quit);
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(decode_key(&key(KeyCode::Char('c'))), Input::None);
        assert_eq!(decode_key(&key(KeyCode::Esc)), Input::None);
        assert_eq!(decode_key(&key(KeyCode::Enter)), Input::None);
    }

    #[test]
    fn frame_has_one_line_per_row_and_the_score() {
        let snake = Snake::from_segments(vec![(1, 1), (1, 0)], 3);
        let grid = Grid::rebuild(&snake, (0, 2));
        let mut out = Vec::new();

        draw_frame(&mut out, &grid, 1).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("..X"));
        assert!(text.contains("#O."));
        assert!(text.contains("..."));
        assert!(text.contains("Score: 1"));
    }
}
