// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tether and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Footer line helpers.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use super::Status;
use crate::route::SearchMode;

const FOOTER_LABEL_COLOR: Color = Color::Gray;
const FOOTER_KEY_COLOR: Color = Color::Cyan;
const FOOTER_WARN_COLOR: Color = Color::Yellow;
const FOOTER_BRAND: &str = "tether";

pub(super) fn footer_line(status: &Status) -> Line<'static> {
    let mut spans = vec![Span::styled(
        FOOTER_BRAND.to_owned(),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )];

    push_footer_entry(&mut spans, "ROUTE", status.strategy.as_str());
    push_footer_entry(&mut spans, "ZOOM", &format!("{:.1}", status.zoom));
    push_footer_entry(&mut spans, "POINTS", &status.route_points.to_string());
    push_footer_entry(&mut spans, "REROUTES", &status.reroutes.to_string());
    push_mode(&mut spans, status.mode, status.route_points);

    push_footer_entry(&mut spans, "GRID", if status.show_grid { "g on" } else { "g off" });
    push_footer_entry(
        &mut spans,
        "WAYPOINTS",
        if status.show_waypoints { "w on" } else { "w off" },
    );
    push_footer_entry(&mut spans, "STRATEGY", "s");
    push_footer_entry(&mut spans, "RESET", "r");
    push_footer_entry(&mut spans, "QUIT", "q");

    Line::from(spans)
}

fn push_mode(spans: &mut Vec<Span<'static>>, mode: SearchMode, points: usize) {
    spans.push(Span::styled(" | ", Style::default().fg(FOOTER_LABEL_COLOR)));
    let (text, color) = match (mode, points) {
        (_, 0) => ("no route", FOOTER_WARN_COLOR),
        (SearchMode::Strict, _) => ("strict", Color::LightGreen),
        (SearchMode::Relaxed, _) => ("relaxed", FOOTER_WARN_COLOR),
    };
    spans.push(Span::styled(text.to_owned(), Style::default().fg(color)));
}

fn push_footer_entry(spans: &mut Vec<Span<'static>>, label: &str, value: &str) {
    push_footer_entry_with_separator(spans, label, value, " | ");
}

fn push_footer_entry_with_separator(
    spans: &mut Vec<Span<'static>>,
    label: &str,
    value: &str,
    separator: &'static str,
) {
    if !spans.is_empty() {
        spans.push(Span::styled(
            separator.to_owned(),
            Style::default().fg(FOOTER_LABEL_COLOR),
        ));
    }
    spans.push(Span::styled(
        format!("{}:", footer_label_ucfirst(label)),
        Style::default().fg(FOOTER_LABEL_COLOR),
    ));
    spans.push(Span::styled(
        value.to_owned(),
        Style::default().fg(FOOTER_KEY_COLOR),
    ));
}

fn footer_label_ucfirst(label: &str) -> String {
    let lower = label.to_lowercase();
    let mut chars = lower.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut out = first.to_uppercase().collect::<String>();
    out.push_str(chars.as_str());
    out
}
