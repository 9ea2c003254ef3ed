// SPDX-License-Identifier: PMPL-1.0-or-later

//! Card formatting and output

use super::layout::center;
use crate::types::TermRecord;
use colored::{Color, ColoredString, Colorize};
use std::io::{self, Write};

/// Which part of the card a line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    Icon,
    Title,
    Subtitle,
    Etymology,
    Definition,
    Poetic,
    Separator,
}

/// A single centered, unstyled card line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLine {
    pub block: Block,
    pub text: String,
}

impl CardLine {
    fn separator() -> Self {
        Self {
            block: Block::Separator,
            text: String::new(),
        }
    }
}

/// Foreground color plus emphasis for one block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub color: Color,
    pub italic: bool,
}

impl Style {
    pub const fn plain(color: Color) -> Self {
        Self {
            color,
            italic: false,
        }
    }

    pub const fn italic(color: Color) -> Self {
        Self {
            color,
            italic: true,
        }
    }

    fn paint(&self, text: &str) -> ColoredString {
        let styled = text.color(self.color);
        if self.italic {
            styled.italic()
        } else {
            styled
        }
    }
}

/// Styles for each block of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub icon: Style,
    pub title: Style,
    pub subtitle: Style,
    /// Shared by etymology and definition.
    pub body: Style,
    pub poetic: Style,
}

impl Palette {
    pub fn style_for(&self, block: Block) -> Option<Style> {
        match block {
            Block::Icon => Some(self.icon),
            Block::Title => Some(self.title),
            Block::Subtitle => Some(self.subtitle),
            Block::Etymology | Block::Definition => Some(self.body),
            Block::Poetic => Some(self.poetic),
            Block::Separator => None,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            icon: Style::plain(Color::White),
            title: Style::plain(Color::BrightCyan),
            subtitle: Style::plain(Color::Cyan),
            body: Style::plain(Color::BrightRed),
            poetic: Style::italic(Color::Magenta),
        }
    }
}

pub struct CardFormatter {
    width: usize,
    palette: Palette,
}

impl CardFormatter {
    pub fn new(width: usize) -> Self {
        Self::with_palette(width, Palette::default())
    }

    pub fn with_palette(width: usize, palette: Palette) -> Self {
        Self { width, palette }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Card lines in emission order, centered but not yet styled.
    pub fn lines(&self, term: &TermRecord) -> Vec<CardLine> {
        let mut lines = Vec::new();

        self.push_block(&mut lines, Block::Icon, term.icon);

        self.push_block(&mut lines, Block::Title, &[term.name]);
        self.push_block(&mut lines, Block::Subtitle, &[term.localized_name]);
        lines.push(CardLine::separator());

        self.push_block(&mut lines, Block::Etymology, term.etymology);
        lines.push(CardLine::separator());

        self.push_block(&mut lines, Block::Definition, term.definition);
        lines.push(CardLine::separator());

        self.push_block(&mut lines, Block::Poetic, term.poetic);
        lines.push(CardLine::separator());

        lines
    }

    /// Write the styled card to `out`.
    pub fn write<W: Write>(&self, out: &mut W, term: &TermRecord) -> io::Result<()> {
        for line in self.lines(term) {
            match self.palette.style_for(line.block) {
                Some(style) => writeln!(out, "{}", style.paint(&line.text))?,
                None => writeln!(out)?,
            }
        }
        out.flush()
    }

    fn push_block(&self, lines: &mut Vec<CardLine>, block: Block, source: &[&str]) {
        lines.extend(source.iter().map(|text| CardLine {
            block,
            text: center(text, self.width),
        }));
    }
}
