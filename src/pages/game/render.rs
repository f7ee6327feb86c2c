use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    Frame,
};

use crate::{
    assets::{AssetId, Sprites},
    components::pixels::PixelCanvas,
    constants::{
        game::{BOARD_HEIGHT, BOARD_WIDTH, TEXT_COLOR},
        GAME_OVER_TEXT, TITLE_TEXT,
    },
    pages::game::{
        clock::Cadence,
        object::{Bounds, Object},
        pipe::PipeKind,
        session::{GameState, Session},
    },
};

const TITLE_Y: i32 = BOARD_HEIGHT / 2 - 30;
const SUBTITLE_Y: i32 = BOARD_HEIGHT / 2 + 30;
const SCORE_X: i32 = 10;
const SCORE_Y: i32 = 3;

/// Draws the board for the current state. Reads the session, never changes it.
pub fn draw<C: Cadence>(frame: &mut Frame<'_>, area: Rect, session: &Session<C>, sprites: &Sprites, confirm_key: &str) {
    let viewport = board_viewport(area);
    if viewport.is_empty() {
        return;
    }

    let mut canvas = PixelCanvas::for_area(viewport);
    canvas.blit(sprites.get(AssetId::Background), Bounds::new(0, 0, BOARD_WIDTH, BOARD_HEIGHT));
    if session.state() == GameState::Playing {
        canvas.blit(sprites.get(AssetId::Bird), session.bird().bounds());
        for pipe in session.pipes() {
            let sprite = match pipe.kind() {
                PipeKind::Top => AssetId::TopPipe,
                PipeKind::Bottom => AssetId::BottomPipe,
            };
            canvas.blit(sprites.get(sprite), pipe.bounds());
        }
    }
    frame.render_widget(&canvas, viewport);

    match session.state() {
        GameState::Menu => {
            draw_banner(frame, area, viewport, TITLE_TEXT, &format!("PRESS {confirm_key} TO START PLAY"));
        },
        GameState::Playing => draw_score(frame, area, viewport, session.score()),
        GameState::GameOver => {
            draw_banner(frame, area, viewport, GAME_OVER_TEXT, &format!("PRESS {confirm_key} TO RETURN TO MENU"));
        },
    }
}

/// The largest 9:16 block of half-block cells centred in `area`.
pub fn board_viewport(area: Rect) -> Rect {
    // A cell is one pixel wide and two pixels tall.
    let rows = (area.height as u32).min(area.width as u32 * 8 / 9);
    let columns = (rows * 9 / 8).min(area.width as u32);
    let (rows, columns) = (rows as u16, columns as u16);
    Rect {
        x: area.x + (area.width - columns) / 2,
        y: area.y + (area.height - rows) / 2,
        width: columns,
        height: rows,
    }
}

fn row_at(viewport: Rect, board_y: i32) -> u16 {
    let pixel = board_y.clamp(0, BOARD_HEIGHT - 1) as u32 * viewport.height as u32 * 2 / BOARD_HEIGHT as u32;
    viewport.y + (pixel / 2) as u16
}

fn column_at(viewport: Rect, board_x: i32) -> u16 {
    let pixel = board_x.clamp(0, BOARD_WIDTH - 1) as u32 * viewport.width as u32 / BOARD_WIDTH as u32;
    viewport.x + pixel as u16
}

fn text_style() -> Style {
    Style::default().fg(TEXT_COLOR)
}

fn draw_banner(frame: &mut Frame<'_>, area: Rect, viewport: Rect, title: &str, subtitle: &str) {
    let title_row = Rect { y: row_at(viewport, TITLE_Y), height: 1, ..area };
    let subtitle_row = Rect { y: row_at(viewport, SUBTITLE_Y), height: 1, ..area };

    let title = Line::from(Span::styled(title, text_style().add_modifier(Modifier::BOLD))).centered();
    let subtitle = Line::from(Span::styled(subtitle, text_style())).centered();
    frame.render_widget(title, title_row);
    frame.render_widget(subtitle, subtitle_row);
}

fn draw_score(frame: &mut Frame<'_>, area: Rect, viewport: Rect, score: f64) {
    let x = column_at(viewport, SCORE_X);
    let row = Rect { x, y: row_at(viewport, SCORE_Y), width: area.right() - x, height: 1 };
    let text = Line::from(Span::styled(format!("Score: {}", score as i64), text_style()));
    frame.render_widget(text, row);
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ratatui::{backend::TestBackend, buffer::Buffer, style::Color, Terminal};

    use super::*;
    use crate::pages::game::{clock::ManualClock, pipe::Pipe};

    fn render(session: &Session<ManualClock>) -> Buffer {
        let sprites = Sprites::load().unwrap();
        let mut terminal = Terminal::new(TestBackend::new(36, 32)).unwrap();
        terminal.draw(|f| draw(f, f.area(), session, &sprites, "SPACE")).unwrap();
        terminal.backend().buffer().clone()
    }

    fn lines(buffer: &Buffer) -> Vec<String> {
        let area = buffer.area;
        (area.top()..area.bottom())
            .map(|y| (area.left()..area.right()).map(|x| buffer[(x, y)].symbol()).collect())
            .collect()
    }

    fn has_line_containing(buffer: &Buffer, text: &str) -> bool {
        lines(buffer).iter().any(|line| line.contains(text))
    }

    #[test]
    fn test_viewport_keeps_aspect() {
        assert_eq!(board_viewport(Rect::new(0, 0, 36, 32)), Rect::new(0, 0, 36, 32));
        assert_eq!(board_viewport(Rect::new(0, 0, 100, 20)), Rect::new(39, 0, 22, 20));
        assert_eq!(board_viewport(Rect::new(2, 3, 9, 40)), Rect::new(2, 19, 9, 8));
        assert!(board_viewport(Rect::new(0, 0, 1, 1)).is_empty());
    }

    #[test]
    fn test_menu_shows_title() {
        let session = Session::new(ManualClock::default());
        let buffer = render(&session);
        assert!(lines(&buffer)[14].contains("START"));
        assert!(lines(&buffer)[17].contains("PRESS SPACE TO START PLAY"));
        assert!(!has_line_containing(&buffer, "Score"));
    }

    #[test]
    fn test_playing_shows_score_and_bird() {
        let mut session = Session::new(ManualClock::default());
        session.handle_confirm();
        let buffer = render(&session);

        let top = lines(&buffer)[0].clone();
        insta::assert_snapshot!(top.trim_start_matches('\u{2580}').split('\u{2580}').next().unwrap(), @"Score: 0");
        assert!(!has_line_containing(&buffer, "START"));

        // Bird's upper body, which the menu does not draw.
        assert_eq!(buffer[(5, 16)].fg, Color::Rgb(255, 225, 100));
        let menu = render(&Session::new(ManualClock::default()));
        assert_ne!(menu[(5, 16)].fg, Color::Rgb(255, 225, 100));
    }

    #[test]
    fn test_score_is_truncated() {
        let mut session = Session::new(ManualClock::default());
        session.handle_confirm();
        session.place_pipes([Pipe::new(PipeKind::Top, -18, -500), Pipe::new(PipeKind::Top, 200, -500)]);
        session.update();
        assert_eq!(session.score(), 0.5);
        assert!(has_line_containing(&render(&session), "Score: 0"));
    }

    #[test]
    fn test_game_over_banner() {
        let mut session = Session::new(ManualClock::default());
        session.handle_confirm();
        for _ in 0..25 {
            session.update();
        }
        assert_eq!(session.state(), GameState::GameOver);

        let buffer = render(&session);
        assert!(has_line_containing(&buffer, "GAME OVER"));
        assert!(has_line_containing(&buffer, "PRESS SPACE TO RETURN TO MENU"));
        assert!(!has_line_containing(&buffer, "Score"));
    }

    #[test]
    fn test_tiny_terminal_draws_nothing() {
        let sprites = Sprites::load().unwrap();
        let mut terminal = Terminal::new(TestBackend::new(1, 1)).unwrap();
        let session = Session::new(ManualClock::default());
        terminal.draw(|f| draw(f, f.area(), &session, &sprites, "SPACE")).unwrap();
        assert_eq!(terminal.backend().buffer()[(0, 0)].symbol(), " ");
    }
}
