use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::app::{App, PromptKind};

pub fn help_text(app: &App) -> &'static str {
    if app.prompt.is_some() {
        "type title  Backspace erase  Enter save  Esc cancel"
    } else {
        "h/l or ←/→ focus  j/k or ↑/↓ select  H/L move  Enter detail  a add  e edit  d delete  Esc close/quit  q quit"
    }
}

pub fn render(f: &mut Frame, app: &App) {
    let chunks = if app.banner.is_some() {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(2),
            ])
            .split(f.area())
    } else {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(2)])
            .split(f.area())
    };

    let (banner_area, main, help) = if app.banner.is_some() {
        (Some(chunks[0]), chunks[1], chunks[2])
    } else {
        (None, chunks[0], chunks[1])
    };

    if let (Some(a), Some(text)) = (banner_area, app.banner.as_deref()) {
        f.render_widget(
            Paragraph::new(Span::styled(text, Style::default().fg(Color::Yellow))),
            a,
        );
    }

    let columns = app.board.columns().len();
    let rects = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
        .split(main);

    for (i, r) in rects.iter().enumerate() {
        draw_col(f, app, i, *r);
    }

    f.render_widget(
        Paragraph::new(help_text(app)).block(Block::default().borders(Borders::TOP)),
        help,
    );

    if app.detail_open {
        draw_detail(f, app);
    }

    if app.prompt.is_some() {
        draw_prompt(f, app);
    }
}

fn draw_col(f: &mut Frame, app: &App, idx: usize, rect: Rect) {
    let col = &app.board.columns()[idx];
    let focused = idx == app.col;

    let border = if focused { Color::Cyan } else { Color::Gray };

    let items: Vec<ListItem> = col
        .cards()
        .iter()
        .map(|c| {
            ListItem::new(Line::from(vec![
                Span::styled(c.id.to_string(), Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" "),
                Span::raw(c.title.clone()),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(format!("{} ({})", col.title(), col.cards().len()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default();
    if focused && !col.cards().is_empty() {
        state.select(Some(app.row.min(col.cards().len() - 1)));
    }

    f.render_stateful_widget(list, rect, &mut state);
}

fn draw_detail(f: &mut Frame, app: &App) {
    let Some(card) = app.selected() else {
        return;
    };

    let area = centered(70, 45, f.area());
    f.render_widget(Clear, area);

    let lines = vec![
        Line::from(Span::styled(
            card.id.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(card.title.clone()),
        Line::from(""),
        // Edit is always listed before Delete.
        Line::from(Span::styled(
            "e Edit  d Delete",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    f.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(
            Block::default()
                .title(format!("Detail: {}", app.column()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        ),
        area,
    );
}

fn draw_prompt(f: &mut Frame, app: &App) {
    let Some(prompt) = app.prompt.as_ref() else {
        return;
    };

    let title = match prompt.kind {
        PromptKind::Add { column } => format!("Add card to {column}"),
        PromptKind::Edit { id, .. } => format!("Edit card {id}"),
    };

    let area = centered(60, 20, f.area());
    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::raw(prompt.buffer.as_str()),
            Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
        ]))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        ),
        area,
    );
}

fn centered(px: u16, py: u16, r: Rect) -> Rect {
    let v = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - py) / 2),
            Constraint::Percentage(py),
            Constraint::Percentage((100 - py) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - px) / 2),
            Constraint::Percentage(px),
            Constraint::Percentage((100 - px) / 2),
        ])
        .split(v[1])[1]
}
