use crate::TermInt;
use crate::frontend::{Frontend, Key, Palette};
use std::{io::{Stdout, Write, stdout}, time::Duration};

use anyhow::Result;
use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, poll, read};
use crossterm::style::{Color, Colors};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};

const BODY_COLORS: [Color; 6] = [
    Color::DarkRed,
    Color::DarkGreen,
    Color::DarkYellow,
    Color::DarkBlue,
    Color::DarkMagenta,
    Color::DarkCyan,
];

/// Crossterm front end. Owns the terminal between `setup` and drop.
pub struct TermManager {
    stdout: Stdout,
    active: bool,
}

impl TermManager {
    pub fn new() -> Self {
        TermManager { stdout: stdout(), active: false }
    }

    pub fn setup(&mut self) -> Result<()> {
        execute!(self.stdout, EnterAlternateScreen)?;
        self.active = true;
        terminal::enable_raw_mode()?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking)?;
        Ok(())
    }

    pub fn restore(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        terminal::disable_raw_mode()?;
        execute!(self.stdout, style::ResetColor, cursor::Show, cursor::EnableBlinking, LeaveAlternateScreen)?;
        Ok(())
    }
}

impl Drop for TermManager {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

impl Frontend for TermManager {
    fn poll_key(&mut self, timeout: Duration) -> Result<Option<Key>> {
        if poll(timeout)? {
            if let Event::Key(ev) = read()? {
                if ev.kind == KeyEventKind::Press {
                    return Ok(Some(map_key(&ev)));
                }
            }
        }
        Ok(None)
    }

    fn wait_key(&mut self) -> Result<Key> {
        loop {
            if let Event::Key(ev) = read()? {
                if ev.kind == KeyEventKind::Press {
                    return Ok(map_key(&ev));
                }
            }
        }
    }

    fn size(&self) -> Result<(TermInt, TermInt)> {
        Ok(terminal::size()?)
    }

    fn clear(&mut self) -> Result<()> {
        execute!(self.stdout, style::ResetColor, terminal::Clear(ClearType::All))?;
        Ok(())
    }

    fn draw(&mut self, col: TermInt, row: TermInt, text: &str, color: Palette) -> Result<()> {
        queue!(self.stdout, cursor::MoveTo(col, row), style::SetColors(colors(color)), style::Print(text))?;
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        queue!(self.stdout, style::ResetColor)?;
        self.stdout.flush()?;
        Ok(())
    }
}

fn colors(color: Palette) -> Colors {
    match color {
        Palette::Border | Palette::Apple => Colors::new(Color::Red, Color::Black),
        Palette::Body(i) => Colors::new(Color::Black, BODY_COLORS[i as usize % BODY_COLORS.len()]),
        Palette::Text => Colors::new(Color::Reset, Color::Reset),
    }
}

fn map_key(ev: &KeyEvent) -> Key {
    match ev.code {
        KeyCode::Char('c') if ev.modifiers.contains(KeyModifiers::CONTROL) => Key::Quit,
        KeyCode::Char('w') | KeyCode::Up => Key::Up,
        KeyCode::Char('a') | KeyCode::Left => Key::Left,
        KeyCode::Char('s') | KeyCode::Down => Key::Down,
        KeyCode::Char('d') | KeyCode::Right => Key::Right,
        KeyCode::Char('p') | KeyCode::Char('P') => Key::Pause,
        KeyCode::Char('y') | KeyCode::Char('Y') => Key::Yes,
        KeyCode::Char('n') | KeyCode::Char('N') => Key::No,
        _ => Key::Other,
    }
}
