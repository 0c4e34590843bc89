use crate::gradient::gradient_line;
use crate::models::{Preset, Rgb};
use comfy_table::{Attribute, Cell, CellAlignment, Table};

const BAR_CELLS: usize = 16;

fn swatch(colour: Rgb) -> String {
    format!(
        "\x1b[38;2;{};{};{}m█\x1b[0m",
        colour.red, colour.green, colour.blue
    )
}

/// Sample the rasterized line so the bar shows what will be written.
fn colourbar(preset: &Preset, length: u32, flip: bool) -> Option<String> {
    let line = gradient_line(length, flip, &preset.stops).ok()?;
    if line.is_empty() {
        return None;
    }
    let n = BAR_CELLS.min(line.len());
    let bar = (0..n)
        .map(|i| {
            let idx = if n == 1 { 0 } else { i * (line.len() - 1) / (n - 1) };
            swatch(line[idx])
        })
        .collect();
    Some(bar)
}

/// Problems worth flagging before rendering.
pub fn preset_warnings(preset: &Preset) -> Vec<String> {
    let mut warnings = Vec::new();
    if preset.stops.len() < 2 {
        warnings.push(format!(
            "  ⚠️{}: only {} colour stop(s), output will be a flat colour",
            preset.filename,
            preset.stops.len()
        ));
    }
    let zero_stops = preset
        .stops
        .iter()
        .skip(1)
        .filter(|s| s.weight == 0.0)
        .count();
    if zero_stops > 0 {
        warnings.push(format!(
            "  ⚠️{}: {} stop(s) after the first have zero weight and collapse onto their neighbour",
            preset.filename, zero_stops
        ));
    }
    warnings
}

pub fn print_preset_summary(presets: &[Preset], length: u32, flip: bool) {
    let mut table = Table::new();
    table
        .set_header(vec![
            Cell::new("")
                .add_attribute(Attribute::Bold)
                .set_alignment(CellAlignment::Center),
            Cell::new("Preset")
                .add_attribute(Attribute::Bold)
                .set_alignment(CellAlignment::Center),
            Cell::new("Stops")
                .add_attribute(Attribute::Bold)
                .set_alignment(CellAlignment::Center),
            Cell::new("Weights")
                .add_attribute(Attribute::Bold)
                .set_alignment(CellAlignment::Center),
            Cell::new("Colourbar").add_attribute(Attribute::Bold),
        ])
        .load_preset(comfy_table::presets::ASCII_BORDERS_ONLY_CONDENSED);

    let mut warnings = Vec::new();
    for preset in presets {
        let weights = preset
            .stops
            .iter()
            .map(|s| format!("{:.2}", s.weight))
            .collect::<Vec<_>>()
            .join(", ");

        let notes = preset_warnings(preset);
        let (status, bar) = match colourbar(preset, length, flip) {
            Some(bar) if notes.is_empty() => ("✅", bar),
            Some(bar) => ("⚠️", bar),
            None => ("❌", "invalid stops".to_string()),
        };
        warnings.extend(notes);

        table.add_row(vec![
            Cell::new(status).set_alignment(CellAlignment::Center),
            Cell::new(&preset.filename),
            Cell::new(preset.stops.len()).set_alignment(CellAlignment::Center),
            Cell::new(weights).set_alignment(CellAlignment::Center),
            Cell::new(bar),
        ]);
    }

    println!("\nPreset summary:\n{}", table);

    if !warnings.is_empty() {
        println!("\nWarnings:");
        for warning in warnings {
            println!("{}", warning);
        }
    }

    println!();
}
