// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::{Color, Colorize};
use unicode_width::UnicodeWidthStr;

/// A column of a [`Table`], formatting one cell per row.
pub trait Column<T> {
    fn name(&self) -> Cow<'_, str>;
    fn format<'a>(&self, data: &'a T) -> Cow<'a, str>;
    fn padding_direction(&self) -> PaddingDirection;
    fn get_color(&self, data: &T) -> Option<Color>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingDirection {
    Left,
    Right,
}

/// A plain text table with aligned, optionally colored cells.
pub struct Table<'a, T, C: Column<T>> {
    columns: &'a [C],
    data: &'a [T],
    separator: &'a str,
}

impl<'a, T, C: Column<T>> Table<'a, T, C> {
    pub fn new(columns: &'a [C], data: &'a [T]) -> Self {
        Self {
            columns,
            data,
            separator: "  ",
        }
    }

    fn widths(&self, cells: &[Vec<Cow<'_, str>>]) -> Vec<usize> {
        let mut widths: Vec<usize> = self.columns.iter().map(|c| c.name().width()).collect();
        for row in cells {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.width());
            }
        }
        widths
    }

    fn write_row(
        &self,
        f: &mut fmt::Formatter<'_>,
        widths: &[usize],
        cells: impl Iterator<Item = (String, Option<Color>)>,
        bold: bool,
    ) -> fmt::Result {
        let last = self.columns.len().saturating_sub(1);
        for (i, (col, (cell, color))) in self.columns.iter().zip(cells).enumerate() {
            let padded = match col.padding_direction() {
                // Last column does not need padding if it's left-aligned
                PaddingDirection::Left if i == last => cell,
                PaddingDirection::Left => pad_end(cell, widths[i]),
                PaddingDirection::Right => pad_start(cell, widths[i]),
            };
            match (color, bold) {
                (Some(color), _) => write!(f, "{}", padded.color(color))?,
                (None, true) => write!(f, "{}", padded.bold())?,
                (None, false) => write!(f, "{padded}")?,
            }
            if i < last {
                write!(f, "{}", self.separator)?;
            }
        }
        writeln!(f)
    }
}

impl<T, C: Column<T>> fmt::Display for Table<'_, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<Vec<Cow<'_, str>>> = self
            .data
            .iter()
            .map(|row| self.columns.iter().map(|col| col.format(row)).collect())
            .collect();
        let widths = self.widths(&cells);

        let names = self.columns.iter().map(|col| (col.name().into_owned(), None));
        self.write_row(f, &widths, names, true)?;

        for (row, data) in cells.into_iter().zip(self.data) {
            let cells = self
                .columns
                .iter()
                .zip(row)
                .map(|(col, cell)| (cell.into_owned(), col.get_color(data)));
            self.write_row(f, &widths, cells, false)?;
        }
        Ok(())
    }
}

fn pad_end(cell: String, width: usize) -> String {
    let fill = width.saturating_sub(cell.width());
    format!("{cell}{}", " ".repeat(fill))
}

fn pad_start(cell: String, width: usize) -> String {
    let fill = width.saturating_sub(cell.width());
    format!("{}{cell}", " ".repeat(fill))
}
