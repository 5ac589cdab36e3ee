//! Plain-text rendering of the session for the command line.

use colored::Colorize;
use std::io::{self, Write};

use crate::services::color_classifier::Swatch;
use crate::services::session::DisplayState;
use crate::views::card::{ColorChip, ItemCard};

pub const GUIDANCE: &str = "Type what you are looking for, e.g. \"blue denim jacket\".";
pub const NO_RESULTS: &str = "No items matched your search.";
pub const LOADING: &str = "Searching...";

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Draw ANSI truecolor swatches next to color labels.
    pub color: bool,
}

/// Write whatever `state` calls for to `out`.
pub fn render<W: Write>(out: &mut W, state: DisplayState<'_>, options: RenderOptions) -> io::Result<()> {
    match state {
        DisplayState::Guidance => writeln!(out, "{GUIDANCE}"),
        DisplayState::Loading => writeln!(out, "{LOADING}"),
        DisplayState::NoResults => writeln!(out, "{NO_RESULTS}"),
        DisplayState::Error(message) => {
            if options.color {
                writeln!(out, "{}", message.red().bold())
            } else {
                writeln!(out, "{message}")
            }
        }
        DisplayState::Results(items) => {
            writeln!(out, "{} result(s)", items.len())?;
            for item in items {
                writeln!(out)?;
                render_card(out, &ItemCard::from_item(item), options)?;
            }
            Ok(())
        }
        DisplayState::Blank => Ok(()),
    }
}

pub fn render_card<W: Write>(out: &mut W, card: &ItemCard, options: RenderOptions) -> io::Result<()> {
    if options.color {
        writeln!(out, "{}", card.title.bold())?;
    } else {
        writeln!(out, "{}", card.title)?;
    }

    let subtitle: Vec<&str> = [card.brand.as_deref(), card.kind.as_deref()]
        .into_iter()
        .flatten()
        .collect();
    if !subtitle.is_empty() {
        writeln!(out, "  {}", subtitle.join(" · "))?;
    }

    if !card.sizes.is_empty() {
        writeln!(out, "  Sizes: {}", card.sizes.join(", "))?;
    }

    if !card.colors.is_empty() {
        let chips: Vec<String> = card.colors.iter().map(|chip| chip_text(chip, options)).collect();
        writeln!(out, "  Colors: {}", chips.join("  "))?;
    }

    if let Some(description) = card.description.as_deref() {
        writeln!(out, "  {description}")?;
    }

    Ok(())
}

fn chip_text(chip: &ColorChip, options: RenderOptions) -> String {
    if !options.color {
        return format!("{} [{}]", chip.label, chip.category);
    }

    let swatch = match chip.category.swatch() {
        Swatch::Solid((r, g, b)) => "■■".truecolor(r, g, b).to_string(),
        Swatch::TwoTone((r1, g1, b1), (r2, g2, b2)) => format!(
            "{}{}",
            "■".truecolor(r1, g1, b1),
            "■".truecolor(r2, g2, b2)
        ),
    };
    format!("{swatch} {}", chip.label)
}
