use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::app::{App, Pane};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let is_active = app.pane == Pane::Detail;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            " Episode ",
            if is_active {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            },
        ))
        .border_style(if is_active {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        });

    let Some(episode) = &app.selected else {
        let hint = Paragraph::new("Select an episode to view its details")
            .block(block)
            .style(Style::default().fg(Color::Gray));
        frame.render_widget(hint, area);
        return;
    };

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(inner);

    let meta = Paragraph::new(vec![
        Line::from(Span::styled(
            episode.name.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(episode.episode.clone(), Style::default().fg(Color::Gray)),
            Span::raw("  "),
            Span::styled(
                format!("Aired: {}", episode.air_date),
                Style::default().fg(Color::Gray),
            ),
        ]),
    ]);
    frame.render_widget(meta, chunks[0]);

    render_cast(frame, app, chunks[1]);
}

fn render_cast(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Characters ({}) ", app.cast.characters.len()))
        .border_style(Style::default().fg(Color::DarkGray));

    if app.cast.loading {
        let loading = Paragraph::new("Loading characters...")
            .block(block)
            .style(Style::default().fg(Color::Yellow));
        frame.render_widget(loading, area);
        return;
    }

    if let Some(error) = &app.cast.error {
        let failed = Paragraph::new(error.to_string())
            .block(block)
            .style(Style::default().fg(Color::Red));
        frame.render_widget(failed, area);
        return;
    }

    if app.cast.characters.is_empty() {
        let empty = Paragraph::new("No characters listed")
            .block(block)
            .style(Style::default().fg(Color::Gray));
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app
        .cast
        .characters
        .iter()
        .map(|character| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("#{:<5}", character.id),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(format!("{:<24}", character.name)),
                Span::styled(character.image.clone(), Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();

    let list = List::new(items).block(block);

    let offset = app
        .detail_scroll
        .min(app.cast.characters.len().saturating_sub(1));
    let mut state = ListState::default().with_offset(offset);

    frame.render_stateful_widget(list, area, &mut state);
}
