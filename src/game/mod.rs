mod direction;
mod overlay;
mod snake;
mod state;
use self::overlay::StopOverlay;
use self::state::{Cell, GameState, Msg};
use crate::app::Screen;
use crate::command::Command;
use crate::consts;
use crate::util::{center_rect, get_display_area};
use crossterm::event::{poll, read, Event};
use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Position, Positions, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Widget},
    Frame,
};
use std::time::Instant;

/// The game screen: a [`GameState`] snapshot plus the timer and RNG that
/// drive it.
///
/// The controller is the single writer of the state.  Key presses are
/// applied as soon as they are read, so the latest direction wins and is
/// what the next tick sees; presses between ticks do not queue.
#[derive(Clone, Debug)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    state: GameState,
    /// Deadline for the next tick.  Only ever armed while the game is
    /// running, so no tick can fire while stopped.
    next_tick: Option<Instant>,
}

impl Game {
    pub(crate) fn new() -> Game {
        Game::new_with_rng(rand::rng())
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(mut rng: R) -> Game<R> {
        let state = GameState::new(&mut rng);
        Game {
            rng,
            state,
            next_tick: None,
        }
    }

    pub(crate) fn process_input(&mut self) -> std::io::Result<Option<Screen>> {
        if self.state.running {
            if self.next_tick.is_none() {
                self.next_tick = Some(Instant::now() + consts::TICK_PERIOD);
            }
            let when = self.next_tick.expect("next_tick should be Some");
            let wait = when.saturating_duration_since(Instant::now());
            if wait.is_zero() || !poll(wait)? {
                self.apply(Msg::Tick);
                self.next_tick = None;
                Ok(None)
            } else {
                Ok(self.handle_event(read()?))
            }
        } else {
            self.next_tick = None;
            Ok(self.handle_event(read()?))
        }
    }

    /// Feed one message through the reducer, replacing the state snapshot
    fn apply(&mut self, msg: Msg) {
        self.state = self.state.clone().reduce(msg, &mut self.rng);
    }

    fn handle_event(&mut self, event: Event) -> Option<Screen> {
        if event == Event::FocusLost {
            if self.state.running {
                self.apply(Msg::Key(Command::Space));
            }
            return None;
        }
        match Command::from_key_event(event.as_key_press_event()?)? {
            Command::Quit | Command::Q => Some(Screen::Quit),
            Command::R => {
                self.apply(Msg::Reset);
                None
            }
            cmd => {
                self.apply(Msg::Key(cmd));
                None
            }
        }
    }
}

impl<R> Game<R> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }
}

impl<R> Widget for &Game<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [score_area, board_area, hint_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(display);
        Line::styled(format!(" Score: {}", self.state.score), consts::SCORE_BAR_STYLE)
            .render(score_area, buf);

        let block_size = Size {
            width: consts::BOARD_SIZE + 2,
            height: consts::BOARD_SIZE + 2,
        };
        let block_area = center_rect(board_area, block_size);
        Block::bordered().render(block_area, buf);

        let mut board = Canvas {
            area: block_area.inner(Margin::new(1, 1)),
            buf,
        };
        for pos in board_positions() {
            match self.state.classify(pos) {
                Cell::Empty => (),
                Cell::SnakeHead => board.draw_cell(
                    pos,
                    self.state.direction.head_symbol(),
                    consts::SNAKE_STYLE,
                ),
                Cell::SnakeBody => {
                    board.draw_cell(pos, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
                }
                Cell::Food => board.draw_cell(pos, consts::FOOD_SYMBOL, consts::FOOD_STYLE),
            }
        }

        Line::from_iter([
            Span::raw(" Pause ("),
            Span::styled("Space", consts::KEY_STYLE),
            Span::raw(") — Restart ("),
            Span::styled("r", consts::KEY_STYLE),
            Span::raw(") — Quit ("),
            Span::styled("q", consts::KEY_STYLE),
            Span::raw(")"),
        ])
        .render(hint_area, buf);

        if !self.state.running {
            let overlay_area = center_rect(
                display,
                Size {
                    width: StopOverlay::WIDTH,
                    height: StopOverlay::HEIGHT,
                },
            );
            StopOverlay.render(overlay_area, buf);
        }
    }
}

/// Every cell of the board, in row-major order
fn board_positions() -> Positions {
    Rect::from((
        Position::ORIGIN,
        Size::new(consts::BOARD_SIZE, consts::BOARD_SIZE),
    ))
    .positions()
}

#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_cell(&mut self, pos: Position, symbol: char, style: Style) {
        let Some(x) = self.area.x.checked_add(pos.x) else {
            return;
        };
        let Some(y) = self.area.y.checked_add(pos.y) else {
            return;
        };
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_char(symbol);
            cell.set_style(Style::reset().patch(style));
        }
    }
}
