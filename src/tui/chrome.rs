// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Aislemap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Aislemap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

fn panel_block<'a>(app: &App<'_>, title: impl Into<Line<'a>>, focused: bool) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(app.theme.panel_border_style(focused))
        .title(title)
}

fn render_search_panel(frame: &mut Frame<'_>, app: &App<'_>, area: Rect) {
    let editing = app.search_mode == SearchMode::Editing;
    let line = if app.query.is_empty() && !editing {
        Line::from(vec![
            Span::styled("/ ", app.theme.key_style()),
            Span::styled("product ID or name", app.theme.dim_style()),
        ])
    } else {
        Line::from(vec![
            Span::styled("/ ", app.theme.key_style()),
            Span::raw(app.query.clone()),
        ])
    };
    let search = Paragraph::new(line).block(panel_block(app, " Search ", editing));
    frame.render_widget(search, area);
}

fn result_item<'a>(product: &Product) -> ListItem<'a> {
    ListItem::new(Line::from(vec![
        Span::styled(format!("{} ", product.id()), Style::default().fg(Color::LightYellow)),
        Span::raw(product.name().to_owned()),
        Span::styled(
            format!("  Aisle {}", product.location().aisle()),
            Style::default().fg(Color::DarkGray),
        ),
    ]))
}

fn render_results_panel(frame: &mut Frame<'_>, app: &mut App<'_>, area: Rect) {
    let focused = app.focus == Focus::Results;

    if app.too_short {
        let hint = Paragraph::new(format!(
            "Type at least {} characters",
            crate::query::search::MIN_QUERY_CHARS
        ))
        .style(app.theme.dim_style())
        .block(panel_block(app, " Results ", focused));
        frame.render_widget(hint, area);
        return;
    }

    if app.results.is_empty() && !app.suggestions.is_empty() {
        let items = app
            .suggestions
            .iter()
            .map(|product| result_item(product))
            .collect::<Vec<_>>();
        let list = List::new(items).block(panel_block(app, " Did you mean ", focused));
        frame.render_widget(list, area);
        return;
    }

    let title = if app.query.trim().is_empty() {
        " Results ".to_owned()
    } else {
        format!(" Results ({}) ", app.results.len())
    };
    let items = app
        .results
        .iter()
        .map(|product| result_item(product))
        .collect::<Vec<_>>();
    let list = List::new(items)
        .block(panel_block(app, title, focused))
        .highlight_style(app.theme.selection_style());
    frame.render_stateful_widget(list, area, &mut app.results_state);
}

fn render_details_panel(frame: &mut Frame<'_>, app: &App<'_>, area: Rect) {
    let dim = app.theme.dim_style();
    let lines = match app.map.selection() {
        Some(product) => {
            let stock = if product.in_stock() {
                Span::styled("In stock", app.theme.success_style())
            } else {
                Span::styled("Out of stock", app.theme.error_style())
            };
            let location = product.location();
            vec![
                Line::from(vec![
                    Span::styled("ID        ", dim),
                    Span::styled(product.id().to_string(), app.theme.accent_style()),
                ]),
                Line::from(vec![
                    Span::styled("Name      ", dim),
                    Span::raw(product.name().to_owned()),
                ]),
                Line::from(vec![
                    Span::styled("Category  ", dim),
                    Span::raw(product.category().to_owned()),
                ]),
                Line::from(vec![
                    Span::styled("Price     ", dim),
                    Span::raw(product.price().to_string()),
                    Span::raw("  "),
                    stock,
                ]),
                Line::from(vec![
                    Span::styled("Aisle ", dim),
                    Span::raw(location.aisle().to_string()),
                    Span::styled("  Section ", dim),
                    Span::raw(location.section().to_owned()),
                    Span::styled("  Shelf ", dim),
                    Span::raw(location.shelf().to_owned()),
                ]),
            ]
        }
        None => {
            let mut lines = vec![Line::from(Span::styled(
                "Search for a product by ID or name.",
                dim,
            ))];
            for (idx, product) in app.store.products().iter().take(QUICK_PICKS).enumerate() {
                lines.push(Line::from(vec![
                    Span::styled(format!("{} ", idx + 1), app.theme.key_style()),
                    Span::styled(format!("{} ", product.id()), Style::default().fg(Color::LightYellow)),
                    Span::raw(product.name().to_owned()),
                ]));
            }
            lines
        }
    };

    let details = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(panel_block(app, " Product Details ", false));
    frame.render_widget(details, area);
}

fn render_directions_panel(frame: &mut Frame<'_>, app: &App<'_>, area: Rect) {
    let steps = app.map.steps();
    let title = if steps.is_empty() {
        " Directions ".to_owned()
    } else {
        format!(" Directions · {}m ", total_distance_meters(steps))
    };

    let lines = if steps.is_empty() {
        vec![Line::from(Span::styled("No route", app.theme.dim_style()))]
    } else {
        steps
            .iter()
            .map(|step| {
                let mut spans = vec![
                    Span::styled(format!("{} ", step.direction.arrow()), app.theme.accent_style()),
                    Span::raw(step.instruction.clone()),
                ];
                if let Some(location) = step.location.as_ref() {
                    spans.push(Span::styled(format!(" ({location})"), app.theme.dim_style()));
                }
                Line::from(spans)
            })
            .collect()
    };

    let directions = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(panel_block(app, title, false));
    frame.render_widget(directions, area);
}

fn render_recent_panel(frame: &mut Frame<'_>, app: &mut App<'_>, area: Rect) {
    let recent = app.recently_viewed();
    let items = recent
        .iter()
        .map(|product| result_item(product))
        .collect::<Vec<_>>();
    let list = List::new(items)
        .block(panel_block(app, " Recently Viewed ", app.focus == Focus::Recent))
        .highlight_style(app.theme.selection_style());
    frame.render_stateful_widget(list, area, &mut app.recent_state);
}

fn push_footer_entry(spans: &mut Vec<Span<'static>>, app: &App<'_>, key: &str, label: &str) {
    if !spans.is_empty() {
        spans.push(Span::raw(" | "));
    }
    spans.push(Span::styled(key.to_owned(), app.theme.key_style()));
    spans.push(Span::raw(format!(" {label}")));
}

fn footer_line(app: &App<'_>) -> Line<'static> {
    let mut spans = Vec::<Span<'static>>::new();
    if app.search_mode == SearchMode::Editing {
        push_footer_entry(&mut spans, app, "Enter", "locate");
        push_footer_entry(&mut spans, app, "↑/↓", "pick");
        push_footer_entry(&mut spans, app, "Esc", "done");
    } else {
        push_footer_entry(&mut spans, app, "/", "search");
        push_footer_entry(&mut spans, app, "Tab", "focus");
        push_footer_entry(&mut spans, app, "c", "clear");
        let follow = if app.follow_agent { "agent◼" } else { "agent◻" };
        push_footer_entry(&mut spans, app, "a", follow);
        push_footer_entry(&mut spans, app, "?", "help");
        push_footer_entry(&mut spans, app, "q", "quit");
    }

    if let Some(toast) = app.toast.as_ref() {
        let style = match toast.kind {
            ToastKind::Info => app.theme.accent_style(),
            ToastKind::Error => app.theme.error_style(),
        };
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(toast.message.clone(), style));
    }
    Line::from(spans)
}

fn centered_rect(width_percent: u16, height_percent: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - height_percent) / 2),
            Constraint::Percentage(height_percent),
            Constraint::Percentage((100 - height_percent) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - width_percent) / 2),
            Constraint::Percentage(width_percent),
            Constraint::Percentage((100 - width_percent) / 2),
        ])
        .split(vertical[1])[1]
}

fn help_kv(key: &str, label: &str, key_style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{key:<14}"), key_style),
        Span::raw(label.to_owned()),
    ])
}

fn render_help(frame: &mut Frame<'_>, app: &App<'_>, main_area: Rect) {
    let area = centered_rect(60, 70, main_area);
    frame.render_widget(Clear, area);

    let key_style = app.theme.key_style();
    let header_style = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(Span::styled("--- Global ---", header_style)),
        help_kv("?, F1", "Help (toggle)", key_style),
        help_kv("q, Ctrl-C", "Quit", key_style),
        help_kv("/", "Search by product ID or name", key_style),
        help_kv("Tab", "Cycle focus: map, results, recent", key_style),
        help_kv("1-6", "Quick pick a product", key_style),
        help_kv("c", "Clear selection", key_style),
        help_kv("d", "Toggle directions panel", key_style),
        help_kv("a", "Follow agent selections", key_style),
        Line::raw(""),
        Line::from(Span::styled("--- Search ---", header_style)),
        help_kv("Enter", "Locate product", key_style),
        help_kv("↑/↓", "Pick a live result", key_style),
        help_kv("Esc", "Leave the search box", key_style),
        Line::raw(""),
        Line::from(Span::styled("--- Map ---", header_style)),
        help_kv("h/j/k/l, ←↓↑→", "Move your position", key_style),
    ];

    let help = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(panel_block(app, " Help ", true));
    frame.render_widget(help, area);
}
