use crate::{Position, TermInt};
use crate::board::Cell;
use crate::frontend::{Frontend, Palette};
use crate::session::GameSession;
use crate::snake::MoveResult;

use anyhow::Result;

const SNAKE_GLYPH: &str = "[]";
const APPLE_GLYPH: &str = "{}";
const EMPTY_GLYPH: &str = "  ";

/// Screen position of a board cell; cells are two columns wide and sit
/// inside a one-character border.
pub fn screen_pos(pos: Position) -> (TermInt, TermInt) {
    ((pos.0 * 2 + 1) as TermInt, (pos.1 + 1) as TermInt)
}

pub fn draw_border<F: Frontend + ?Sized>(f: &mut F, width: usize, height: usize) -> Result<()> {
    let end_x = (width * 2 + 1) as TermInt;
    let end_y = (height + 1) as TermInt;

    for x in 0..=end_x {
        let ch = if x == 0 || x == end_x {"+"} else {"-"};
        f.draw(x, 0, ch, Palette::Border)?;
        f.draw(x, end_y, ch, Palette::Border)?;
    }

    for y in 1..end_y {
        f.draw(0, y, "|", Palette::Border)?;
        f.draw(end_x, y, "|", Palette::Border)?;
    }

    Ok(())
}

/// Draws the whole game from the board state.
pub fn draw_session<F: Frontend + ?Sized>(f: &mut F, session: &mut GameSession) -> Result<()> {
    f.clear()?;
    draw_border(f, session.board.width(), session.board.height())?;

    let segments: Vec<Position> = session.board.cells()
        .filter(|(_, cell)| matches!(cell, Cell::Trail(_)))
        .map(|(pos, _)| pos)
        .collect();

    for pos in segments {
        let tint = session.next_tint();
        draw_cell(f, pos, SNAKE_GLYPH, Palette::Body(tint))?;
    }
    draw_cell(f, session.apple, APPLE_GLYPH, Palette::Apple)?;

    f.present()
}

/// Draws only what a single step changed.
pub fn draw_step<F: Frontend + ?Sized>(f: &mut F, session: &GameSession, res: &MoveResult) -> Result<()> {
    if let MoveResult::Moved { new_head, old_head: _, vacated, new_apple } = res {
        if let Some(old_tail) = vacated {
            draw_cell(f, *old_tail, EMPTY_GLYPH, Palette::Text)?;
        }
        draw_cell(f, *new_head, SNAKE_GLYPH, Palette::Body(session.tint()))?;

        if let Some(apple) = new_apple {
            draw_cell(f, *apple, APPLE_GLYPH, Palette::Apple)?;
        }

        f.present()?;
    }
    Ok(())
}

pub fn draw_paused<F: Frontend + ?Sized>(f: &mut F, width: usize, height: usize) -> Result<()> {
    f.clear()?;
    draw_border(f, width, height)?;
    show_message(f, &["-- Paused --"])?;
    f.present()
}

pub fn draw_scoreboard<F: Frontend + ?Sized>(f: &mut F, score: u32, high_score: u32, new_high: bool) -> Result<()> {
    let lines = if new_high {
        vec![format!("NEW HIGHSCORE: {}", score), String::new(), "New Game (y/n)".to_string()]
    } else {
        vec![
            format!("SCORE: {}", score),
            format!("HIGHSCORE: {}", high_score),
            String::new(),
            "New Game (y/n)".to_string(),
        ]
    };
    let lines: Vec<&str> = lines.iter().map(String::as_str).collect();

    f.clear()?;
    show_message(f, &lines)?;
    f.present()
}

/// Prints `lines` centred on the screen, padded into a blank box.
pub fn show_message<F: Frontend + ?Sized>(f: &mut F, lines: &[&str]) -> Result<()> {
    let (cols, rows) = f.size()?;

    let msg_height = (lines.len() + 2) as TermInt;
    let msg_width = (lines.iter().map(|x| x.len()).max().unwrap_or(0) + 2) as TermInt;
    let top_left = (
        (cols / 2).saturating_sub(msg_width / 2),
        (rows / 2).saturating_sub(msg_height / 2),
    );
    let blank = " ".repeat(msg_width as usize);

    f.draw(top_left.0, top_left.1, &blank, Palette::Text)?;
    f.draw(top_left.0, top_left.1 + msg_height - 1, &blank, Palette::Text)?;

    for (i, line) in lines.iter().enumerate() {
        let padded_line = format!("{line: ^width$}", line = line, width = msg_width as usize);
        f.draw(top_left.0, top_left.1 + i as TermInt + 1, &padded_line, Palette::Text)?;
    }

    Ok(())
}

fn draw_cell<F: Frontend + ?Sized>(f: &mut F, pos: Position, glyph: &str, color: Palette) -> Result<()> {
    let (col, row) = screen_pos(pos);
    f.draw(col, row, glyph, color)
}
