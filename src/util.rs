use crate::consts;
use ratatui::layout::{Flex, Layout, Rect, Size};

/// Everything is drawn inside a [`consts::DISPLAY_SIZE`] rectangle in the
/// center of the terminal window; this computes that rectangle.
pub(crate) fn get_display_area(buffer_area: Rect) -> Rect {
    center_rect(buffer_area, consts::DISPLAY_SIZE)
}

/// Center a `size`-dimensioned rectangle within `area`
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [area] = Layout::horizontal([size.width])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([size.height])
        .flex(Flex::Center)
        .areas(area);
    area
}
