//! Track block view
//!
//! Renders one track's frame: title slot, completion badge slot, and the
//! fixed-capacity cell grid. Only `frame.visible_rows` rows are emitted; the
//! rest of the allocated cells stay hidden. Zero-row tracks render a "no
//! data" placeholder instead of a grid.
//!
//! This is a pure view over `Session` frames; it never feeds state back.

use iced::widget::{column, container, row, text, Row, Space};
use iced::{Border, Center, Element, Fill, Length};

use trellis_core::diff::CellChange;
use trellis_core::layout::GRID_COLUMNS;
use trellis_core::session::{Cell, TrackFrame};

use super::message::Message;
use super::theme::{self, CellPalette};

const CELL_WIDTH: f32 = 62.0;
const CELL_HEIGHT: f32 = 22.0;

/// Build the view for one track frame.
pub fn view(frame: &TrackFrame) -> Element<'_, Message> {
    let palette = theme::palette();

    let mut header = row![text(&frame.title).size(14)]
        .spacing(8)
        .align_y(Center);
    if let Some(done) = frame.done_step {
        header = header.push(badge(done, &palette));
    }
    header = header.push(Space::new().width(Fill));

    let body: Element<'_, Message> = if frame.placeholder {
        container(text("no data").size(12).color(palette.muted_text))
            .padding(12)
            .into()
    } else {
        grid(frame, &palette)
    };

    container(column![header, body].spacing(6))
        .padding(8)
        .width(Fill)
        .style(move |_theme| container::Style {
            background: Some(palette.cell.scale_alpha(0.35).into()),
            border: Border {
                color: palette.cell,
                width: 1.0,
                radius: 4.0.into(),
            },
            ..container::Style::default()
        })
        .into()
}

fn badge<'a>(done_step: usize, palette: &CellPalette) -> Element<'a, Message> {
    let accent = palette.badge;
    container(text(format!("done at step {done_step}")).size(11).color(accent))
        .padding([2, 6])
        .style(move |_theme| container::Style {
            border: Border {
                color: accent,
                width: 1.0,
                radius: 8.0.into(),
            },
            ..container::Style::default()
        })
        .into()
}

fn grid<'a>(frame: &'a TrackFrame, palette: &CellPalette) -> Element<'a, Message> {
    let mut rows = column![].spacing(2);
    for row_idx in 0..frame.visible_rows {
        let start = row_idx * GRID_COLUMNS;
        let mut cells: Row<'a, Message> = row![].spacing(2);
        for cell in frame.cells.iter().skip(start).take(GRID_COLUMNS) {
            cells = cells.push(cell_view(cell, palette));
        }
        rows = rows.push(cells);
    }
    rows.into()
}

fn cell_view<'a>(cell: &'a Cell, palette: &CellPalette) -> Element<'a, Message> {
    let background = match cell.class.change {
        CellChange::Changed => Some(palette.changed),
        CellChange::Removed => Some(palette.removed),
        CellChange::Empty => None,
        CellChange::Unchanged => Some(palette.cell),
    };
    let text_color = if cell.class.muted {
        palette.muted_text
    } else {
        palette.text
    };
    let border_color = palette.cell;

    container(text(&cell.text).size(11).color(text_color))
        .width(Length::Fixed(CELL_WIDTH))
        .height(Length::Fixed(CELL_HEIGHT))
        .align_x(Center)
        .align_y(Center)
        .clip(true)
        .style(move |_theme| container::Style {
            background: background.map(Into::into),
            border: Border {
                color: border_color,
                width: 1.0,
                radius: 2.0.into(),
            },
            ..container::Style::default()
        })
        .into()
}
