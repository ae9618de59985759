//! Paints a [`RenderTree`] with ratatui.

use ratatui::layout::Alignment;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::form::{
    CheckboxControl, Control, RenderTree, RenderedField, SelectControl, TextAreaControl,
    TextInputControl,
};
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::theme::Theme;

/// Widest the form panel gets.
const FORM_WIDTH: u16 = 72;

/// Minimum rows drawn for a text area.
const TEXT_AREA_ROWS: usize = 3;

const CURSOR: &str = "▏";

const HINTS: &str =
    " Tab/↑↓: Move │ Space: Toggle │ ←/→: Choose │ Enter: Next/Submit │ Ctrl+S: Submit │ Esc: Cancel";

pub fn draw_form(
    frame: &mut Frame<'_>,
    title: &str,
    tree: &RenderTree,
    focus: Option<usize>,
    theme: &Theme,
) {
    let (body, hints) = layout_regions(frame.area());
    let area = centered_rect_by_size(body, FORM_WIDTH, body.height);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(Span::styled(format!(" {title} "), Style::default().fg(theme.accent)))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));
    let inner_height = block.inner(area).height as usize;

    let (lines, focus_line) = form_lines(tree, focus, theme);
    let scroll = scroll_offset(focus_line, inner_height);
    let paragraph = Paragraph::new(lines).block(block).scroll((scroll, 0));
    frame.render_widget(paragraph, area);

    frame.render_widget(Paragraph::new(HINTS).style(theme.muted()), hints);
}

/// Lines for the whole form plus the line where the focused slot starts.
///
/// Slots are numbered like the container's focus: one per field in order,
/// then the submit button.
pub fn form_lines(
    tree: &RenderTree,
    focus: Option<usize>,
    theme: &Theme,
) -> (Vec<Line<'static>>, usize) {
    let mut lines = Vec::new();
    let mut focus_line = 0;

    if let Some(banner) = tree.error_banner {
        lines.push(Line::from(Span::styled(format!(" {banner}"), theme.error_text())));
        lines.push(Line::from(""));
    }

    for (index, field) in tree.fields.iter().enumerate() {
        let focused = focus == Some(index);
        if focused {
            focus_line = lines.len();
        }
        lines.extend(field_lines(field, focused, theme));
        lines.push(Line::from(""));
    }

    let submit_focused = focus == Some(tree.fields.len());
    if submit_focused {
        focus_line = lines.len();
    }
    lines.push(Line::from(vec![
        Span::raw(" "),
        Span::styled(format!(" {} ", tree.submit.label), theme.button(submit_focused)),
    ]));

    (lines, focus_line)
}

fn field_lines(field: &RenderedField, focused: bool, theme: &Theme) -> Vec<Line<'static>> {
    match field {
        RenderedField::Control(control) => control_lines(control, focused, theme),
        RenderedField::Failed { name, error } => vec![Line::from(Span::styled(
            format!(" ! {name}: {error}"),
            theme.error_text(),
        ))],
    }
}

pub fn control_lines(control: &Control, focused: bool, theme: &Theme) -> Vec<Line<'static>> {
    match control {
        Control::Input(input) => input_lines(input, focused, theme),
        Control::Select(select) => select_lines(select, focused, theme),
        Control::Checkbox(checkbox) => checkbox_lines(checkbox, focused, theme),
        Control::TextArea(area) => text_area_lines(area, focused, theme),
        Control::Note(note) => note
            .text
            .lines()
            .map(|line| Line::from(Span::styled(format!(" {line}"), theme.muted())))
            .collect(),
    }
}

fn label_line(label: Option<&str>, name: &str, focused: bool, theme: &Theme) -> Line<'static> {
    Line::from(Span::styled(
        format!(" {}", label.unwrap_or(name)),
        theme.label(focused),
    ))
}

fn input_lines(input: &TextInputControl, focused: bool, theme: &Theme) -> Vec<Line<'static>> {
    let mut header = label_line(input.label.as_deref(), &input.name, focused, theme);
    if input.input_type != "text" {
        header.push_span(Span::styled(format!(" ({})", input.input_type), theme.muted()));
    }
    if let Some(bounds) = bounds_hint(input.min, input.max) {
        header.push_span(Span::styled(format!(" {bounds}"), theme.muted()));
    }

    let style = theme.field(focused, input.error.is_some());
    let mut lines = vec![header];
    if input.multiline {
        let rows = input.rows.map(usize::from).unwrap_or(TEXT_AREA_ROWS);
        lines.extend(boxed_rows(&input.value, rows, focused, style));
    } else {
        let cursor = if focused { CURSOR } else { "" };
        lines.push(Line::from(vec![
            Span::raw(" "),
            Span::styled(format!(" {}{cursor} ", input.value), style),
        ]));
    }

    if let Some(error) = &input.error {
        lines.push(Line::from(Span::styled(format!(" * {error}"), theme.error_text())));
    }
    lines
}

fn bounds_hint(min: Option<f64>, max: Option<f64>) -> Option<String> {
    match (min, max) {
        (None, None) => None,
        (Some(min), None) => Some(format!("[≥ {min}]")),
        (None, Some(max)) => Some(format!("[≤ {max}]")),
        (Some(min), Some(max)) => Some(format!("[{min}..{max}]")),
    }
}

fn select_lines(select: &SelectControl, focused: bool, theme: &Theme) -> Vec<Line<'static>> {
    let current = select
        .selected_option()
        .map(|option| option.label.clone())
        .unwrap_or_default();
    let position = format!(" {}/{}", select.selected, select.options.len().saturating_sub(1));
    vec![
        label_line(select.label.as_deref(), &select.name, focused, theme),
        Line::from(vec![
            Span::raw(" "),
            Span::styled(format!(" ‹ {current} › "), theme.field(focused, select.has_error)),
            Span::styled(position, theme.muted()),
        ]),
    ]
}

fn checkbox_lines(checkbox: &CheckboxControl, focused: bool, theme: &Theme) -> Vec<Line<'static>> {
    let mark = if checkbox.checked { "[x]" } else { "[ ]" };
    let mark_style = if checkbox.checked {
        Style::default().fg(theme.ok)
    } else {
        theme.text()
    };
    vec![Line::from(vec![
        Span::raw(" "),
        Span::styled(mark, mark_style),
        Span::styled(
            format!(" {}", checkbox.label.as_deref().unwrap_or(&checkbox.name)),
            theme.label(focused),
        ),
    ])]
}

fn text_area_lines(area: &TextAreaControl, focused: bool, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![label_line(area.label.as_deref(), &area.name, focused, theme)];
    let style = theme.field(focused, area.has_error);
    lines.extend(boxed_rows(&area.value, TEXT_AREA_ROWS, focused, style));
    lines
}

/// Value split into rows, padded to at least `rows`, cursor on the last.
fn boxed_rows(value: &str, rows: usize, focused: bool, style: Style) -> Vec<Line<'static>> {
    let mut text: Vec<String> = value.split('\n').map(str::to_string).collect();
    if focused {
        if let Some(last) = text.last_mut() {
            last.push_str(CURSOR);
        }
    }
    while text.len() < rows {
        text.push(String::new());
    }
    text.into_iter()
        .map(|row| {
            Line::from(vec![
                Span::raw(" │"),
                Span::styled(format!(" {row} "), style),
            ])
        })
        .collect()
}

/// First visible line so the focused slot stays on screen.
fn scroll_offset(focus_line: usize, height: usize) -> u16 {
    if height == 0 {
        return 0;
    }
    let keep_below = 3;
    let target = (focus_line + keep_below).saturating_sub(height.saturating_sub(1));
    u16::try_from(target).unwrap_or(u16::MAX)
}
