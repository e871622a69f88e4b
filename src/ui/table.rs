//! Board table rendering
//!
//! Boards are printed once to stdout rather than drawn in an alternate
//! screen, so the table is laid out as styled ratatui [`Line`]s and written
//! with crossterm styling commands. Long boards are therefore not limited by
//! the size of a terminal buffer.

use std::io::{self, Write};

use crossterm::{
    queue,
    style::{self as ct, Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
};
use ratatui::{
    style::{Color, Modifier, Style, Stylize},
    symbols::line,
    text::{Line, Span},
};

use crate::data::{DelayClass, StatusKind};
use crate::view::{DisplayCell, Emphasis, Row};

/// Style used to render a cell with the given emphasis
pub fn emphasis_style(emphasis: Emphasis) -> Style {
    match emphasis {
        Emphasis::Plain => Style::default(),
        Emphasis::Delay(DelayClass::OnTime) => Style::default(),
        Emphasis::Delay(DelayClass::Moderate) => Style::default().fg(Color::Yellow),
        Emphasis::Delay(DelayClass::Severe) => Style::default().fg(Color::Red),
        Emphasis::Status(kind) => status_style(kind),
    }
}

fn status_style(kind: StatusKind) -> Style {
    match kind {
        StatusKind::Boarding => Style::default()
            .fg(Color::LightMagenta)
            .add_modifier(Modifier::BOLD),
        StatusKind::GoToGate => Style::default()
            .fg(Color::LightCyan)
            .add_modifier(Modifier::BOLD),
        StatusKind::Arrived => Style::default().fg(Color::Green),
        StatusKind::Departed => Style::default().fg(Color::Blue),
        StatusKind::Delayed => Style::default().fg(Color::Yellow),
        StatusKind::NextInfo => Style::default().fg(Color::White).bg(Color::Yellow),
        StatusKind::Cancelled => Style::default()
            .fg(Color::White)
            .bg(Color::Red)
            .add_modifier(Modifier::BOLD),
        StatusKind::Other => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    }
}

/// A board ready to be printed: caption, header and rows with column widths
#[derive(Debug, Clone)]
pub struct BoardTable {
    title: String,
    headers: Vec<String>,
    rows: Vec<Row>,
    widths: Vec<usize>,
}

impl BoardTable {
    pub fn new(title: impl Into<String>, headers: &[&str], rows: Vec<Row>) -> Self {
        let mut widths: Vec<usize> = headers.iter().map(|h| Span::raw(*h).width()).collect();
        for row in &rows {
            for (i, cell) in row.iter().enumerate() {
                let width = Span::raw(cell.text.as_str()).width();
                match widths.get_mut(i) {
                    Some(w) => *w = (*w).max(width),
                    None => widths.push(width),
                }
            }
        }

        Self {
            title: title.into(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows,
            widths,
        }
    }

    pub fn widths(&self) -> &[usize] {
        &self.widths
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn border(&self, left: &str, mid: &str, right: &str) -> Line<'static> {
        let segments: Vec<String> = self
            .widths
            .iter()
            .map(|w| line::NORMAL.horizontal.repeat(w + 2))
            .collect();
        Line::from(format!("{left}{}{right}", segments.join(mid)))
    }

    fn cells_line(&self, cells: Vec<Span<'static>>) -> Line<'static> {
        let mut spans = vec![Span::raw(format!("{} ", line::NORMAL.vertical))];
        for (i, width) in self.widths.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(format!(" {} ", line::NORMAL.vertical)));
            }
            let cell = cells.get(i).cloned().unwrap_or_else(|| Span::raw(""));
            let padding = width.saturating_sub(cell.width());
            spans.push(cell);
            if padding > 0 {
                spans.push(Span::raw(" ".repeat(padding)));
            }
        }
        spans.push(Span::raw(format!(" {}", line::NORMAL.vertical)));
        Line::from(spans)
    }

    fn cell_span(cell: &DisplayCell) -> Span<'static> {
        Span::styled(cell.text.clone(), emphasis_style(cell.emphasis))
    }

    /// Lays the table out line by line, caption last
    pub fn lines(&self) -> Vec<Line<'static>> {
        let set = line::NORMAL;
        let mut lines = Vec::with_capacity(self.rows.len() + 5);

        lines.push(self.border(set.top_left, set.horizontal_down, set.top_right));
        lines.push(self.cells_line(
            self.headers
                .iter()
                .map(|h| Span::raw(h.to_uppercase()).bold())
                .collect(),
        ));
        lines.push(self.border(set.vertical_right, set.cross, set.vertical_left));
        for row in &self.rows {
            lines.push(self.cells_line(row.iter().map(Self::cell_span).collect()));
        }
        lines.push(self.border(set.bottom_left, set.horizontal_up, set.bottom_right));
        lines.push(Line::from(self.title.clone()).centered());

        lines
    }

    /// Writes the table to `out`, with terminal styling when `styled` is set
    pub fn print<W: Write>(&self, out: &mut W, styled: bool) -> io::Result<()> {
        let lines = self.lines();
        let total_width = lines.first().map(Line::width).unwrap_or(0);
        for line in &lines {
            write_line(out, line, styled, total_width)?;
        }
        out.flush()
    }
}

/// Writes one line, centering it within `width` if it asks to be centered
fn write_line<W: Write>(out: &mut W, line: &Line<'_>, styled: bool, width: usize) -> io::Result<()> {
    if line.alignment == Some(ratatui::layout::Alignment::Center) {
        let indent = width.saturating_sub(line.width()) / 2;
        queue!(out, Print(" ".repeat(indent)))?;
    }

    for span in &line.spans {
        let style = line.style.patch(span.style);
        if !styled || style == Style::default() {
            queue!(out, Print(&*span.content))?;
            continue;
        }

        if let Some(fg) = style.fg {
            queue!(out, SetForegroundColor(to_crossterm(fg)))?;
        }
        if let Some(bg) = style.bg {
            queue!(out, SetBackgroundColor(to_crossterm(bg)))?;
        }
        for (modifier, attribute) in [
            (Modifier::BOLD, Attribute::Bold),
            (Modifier::DIM, Attribute::Dim),
            (Modifier::ITALIC, Attribute::Italic),
            (Modifier::UNDERLINED, Attribute::Underlined),
            (Modifier::SLOW_BLINK, Attribute::SlowBlink),
            (Modifier::REVERSED, Attribute::Reverse),
        ] {
            if style.add_modifier.contains(modifier) {
                queue!(out, SetAttribute(attribute))?;
            }
        }
        queue!(
            out,
            Print(&*span.content),
            SetAttribute(Attribute::Reset),
            ResetColor
        )?;
    }

    queue!(out, Print("\n"))
}

fn to_crossterm(color: Color) -> ct::Color {
    match color {
        Color::Reset => ct::Color::Reset,
        Color::Black => ct::Color::Black,
        Color::Red => ct::Color::DarkRed,
        Color::Green => ct::Color::DarkGreen,
        Color::Yellow => ct::Color::DarkYellow,
        Color::Blue => ct::Color::DarkBlue,
        Color::Magenta => ct::Color::DarkMagenta,
        Color::Cyan => ct::Color::DarkCyan,
        Color::Gray => ct::Color::Grey,
        Color::DarkGray => ct::Color::DarkGrey,
        Color::LightRed => ct::Color::Red,
        Color::LightGreen => ct::Color::Green,
        Color::LightYellow => ct::Color::Yellow,
        Color::LightBlue => ct::Color::Blue,
        Color::LightMagenta => ct::Color::Magenta,
        Color::LightCyan => ct::Color::Cyan,
        Color::White => ct::Color::White,
        Color::Rgb(r, g, b) => ct::Color::Rgb { r, g, b },
        Color::Indexed(i) => ct::Color::AnsiValue(i),
    }
}
