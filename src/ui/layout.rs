use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Split the screen into the form body and a one-line hint bar.
pub fn layout_regions(area: Rect) -> (Rect, Rect) {
    let hint_height = 1.min(area.height);
    let body = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: area.height.saturating_sub(hint_height),
    };
    let hints = Rect {
        x: area.x,
        y: area.y + body.height,
        width: area.width,
        height: hint_height,
    };
    (body, hints)
}

/// Create a centered rect of given size, clamped to `area`.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vertical[1])[1]
}
