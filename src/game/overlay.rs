use crate::consts;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{
        block::{Block, Padding},
        Clear, Widget,
    },
};

/// Pop-up shown whenever the game is not running.
///
/// Pausing and game over share a single stopped state, so they share this
/// overlay too.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct StopOverlay;

impl StopOverlay {
    /// The height that should be used for the `Rect` passed to
    /// `StopOverlay::render()`
    pub(super) const HEIGHT: u16 = 5;

    /// The width that should be used for the `Rect` passed to
    /// `StopOverlay::render()`
    pub(super) const WIDTH: u16 = 19;
}

impl Widget for StopOverlay {
    /*
     * ┌──── STOPPED ────┐
     * │ Resume (Space)  │
     * │ Restart (r)     │
     * │ Quit (q)        │
     * └─────────────────┘
     */

    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let block = Block::bordered()
            .title(" STOPPED ")
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1))
            .style(Style::reset());
        let inner = block.inner(area);
        block.render(area, buf);
        let lines = [
            Line::from_iter([
                Span::raw("Resume ("),
                Span::styled("Space", consts::KEY_STYLE),
                Span::raw(")"),
            ]),
            Line::from_iter([
                Span::raw("Restart ("),
                Span::styled("r", consts::KEY_STYLE),
                Span::raw(")"),
            ]),
            Line::from_iter([
                Span::raw("Quit ("),
                Span::styled("q", consts::KEY_STYLE),
                Span::raw(")"),
            ]),
        ];
        for (line, row) in lines.into_iter().zip(inner.rows()) {
            line.render(row, buf);
        }
    }
}
