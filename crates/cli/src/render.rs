// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Reports text output.
use std::io::{self, Write};

use sixplus_outs::{Card, FlopReport, Outs, TurnReport, report::percent};

/// Formats a percentage with one decimal, without the decimal for whole
/// numbers.
pub fn pct(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded:.1}")
    }
}

/// Formats cards separated by spaces.
pub fn cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Writes the flop report.
pub fn write_flop<W: Write>(w: &mut W, flop: &[Card], report: &FlopReport) -> io::Result<()> {
    let outs = report.turn_outs();

    writeln!(w, "--- Flop ---")?;
    writeln!(w, "Board: {}", cards(flop))?;
    writeln!(w, "Made hand: {}", report.made_hand())?;
    writeln!(
        w,
        "Turn outs: {}/{} ({}%)",
        outs.count(),
        outs.total(),
        pct(report.turn_outs_pct())
    )?;
    write_outs(w, "Turn out cards", outs)?;

    writeln!(w, "Draw cards (excluded from turn outs):")?;
    write_draws(w, "  4/5 Straight", report.four_to_straight(), outs.total())?;
    write_draws(w, "  4/5 Flush", report.four_to_flush(), outs.total())?;
    writeln!(
        w,
        "Improve by river (2 cards): {}%",
        pct(report.improve_by_river_pct())
    )
}

/// Writes the turn report.
pub fn write_turn<W: Write>(
    w: &mut W,
    flop: &[Card],
    turn: Card,
    report: &TurnReport,
) -> io::Result<()> {
    let outs = report.river_outs();

    writeln!(w, "--- Turn ---")?;
    writeln!(w, "Board: {} {turn}", cards(flop))?;
    writeln!(w, "Made hand: {}", report.made_hand())?;
    writeln!(
        w,
        "River outs: {}/{} ({}%)",
        outs.count(),
        outs.total(),
        pct(report.river_outs_pct())
    )?;
    write_outs(w, "River out cards", outs)
}

fn write_outs<W: Write>(w: &mut W, title: &str, outs: &Outs) -> io::Result<()> {
    if outs.is_empty() {
        return writeln!(w, "{title}: none");
    }

    writeln!(w, "{title}:")?;
    for group in outs.groups() {
        writeln!(
            w,
            "  - {} ({}, {}%): {}",
            group.made_hand(),
            group.count(),
            pct(outs.group_pct(group)),
            cards(group.cards())
        )?;
    }

    Ok(())
}

fn write_draws<W: Write>(w: &mut W, title: &str, draws: &[Card], total: usize) -> io::Result<()> {
    if draws.is_empty() {
        return writeln!(w, "{title}: none");
    }

    writeln!(
        w,
        "{title} ({}, {}%): {}",
        draws.len(),
        pct(percent(draws.len(), total)),
        cards(draws)
    )
}
