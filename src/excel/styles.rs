//! Cell formats and conditional coloring rules for the issue sheet

use crate::types::Column;
use rust_xlsxwriter::{Color, Format, FormatAlign};

/// Background fills used by the coloring rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    Green,
    Orange,
    Red,
}

impl Fill {
    pub fn color(self) -> Color {
        match self {
            Fill::Green => Color::Green,
            Fill::Orange => Color::Orange,
            Fill::Red => Color::Red,
        }
    }
}

/// A (column, substring, fill) triple. Matching is case-sensitive containment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorRule {
    pub column: Column,
    pub needle: &'static str,
    pub fill: Fill,
}

impl ColorRule {
    pub fn matches(&self, column: Column, value: &str) -> bool {
        self.column == column && value.contains(self.needle)
    }
}

/// Coloring rules in priority order: the first rule that matches a cell wins.
/// Red rules come first within their column.
pub const COLOR_RULES: [ColorRule; 5] = [
    ColorRule {
        column: Column::Kind,
        needle: "bug",
        fill: Fill::Red,
    },
    ColorRule {
        column: Column::Kind,
        needle: "enhancement",
        fill: Fill::Green,
    },
    ColorRule {
        column: Column::Priority,
        needle: "critical",
        fill: Fill::Red,
    },
    ColorRule {
        column: Column::Priority,
        needle: "major",
        fill: Fill::Orange,
    },
    ColorRule {
        column: Column::Status,
        needle: "resolved",
        fill: Fill::Green,
    },
];

/// Fill for a cell, if any rule applies.
pub fn resolve_fill(column: Column, value: &str) -> Option<Fill> {
    COLOR_RULES
        .iter()
        .find(|rule| rule.matches(column, value))
        .map(|rule| rule.fill)
}

/// Bold white on navy, centered and wrapped.
pub fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(Color::Navy)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_text_wrap()
}

/// Alignment and wrapping shared by every cell of a data column.
pub fn column_format(column: Column) -> Format {
    let horizontal = if column.is_free_text() {
        FormatAlign::Left
    } else {
        FormatAlign::Center
    };

    Format::new()
        .set_align(horizontal)
        .set_align(FormatAlign::VerticalCenter)
        .set_text_wrap()
}

/// Column format plus the optional rule fill.
pub fn cell_format(column: Column, fill: Option<Fill>) -> Format {
    match fill {
        Some(fill) => column_format(column).set_background_color(fill.color()),
        None => column_format(column),
    }
}
