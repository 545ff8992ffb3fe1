use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::app::{App, Pane};
use crate::feed::{FeedPhase, LOAD_FAILED};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let is_active = app.pane == Pane::Episodes;

    let title = match app.feed.total() {
        Some(total) => format!(" Episodes ({}/{}) ", app.feed.len(), total),
        None => " Episodes ".to_string(),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            title,
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

    if app.feed.is_empty() {
        let placeholder = match app.feed.phase() {
            FeedPhase::Errored => {
                Paragraph::new(app.feed.error().unwrap_or(LOAD_FAILED).to_string())
                    .style(Style::default().fg(Color::Red))
            }
            FeedPhase::Loading => {
                Paragraph::new("Loading episodes...").style(Style::default().fg(Color::Yellow))
            }
            _ => Paragraph::new("No episodes").style(Style::default().fg(Color::Gray)),
        };
        frame.render_widget(placeholder.block(block), area);
        return;
    }

    let selected_id = app.selected.as_ref().map(|episode| episode.id);

    let items: Vec<ListItem> = app
        .feed
        .episodes()
        .iter()
        .enumerate()
        .map(|(i, episode)| {
            let marker = if selected_id == Some(episode.id) {
                "> "
            } else {
                "  "
            };
            let (code_style, name_style) = if is_active && i == app.cursor {
                let style = Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD);
                (style, style)
            } else if selected_id == Some(episode.id) {
                let style = Style::default().fg(Color::Cyan);
                (style, style)
            } else {
                (Style::default().fg(Color::DarkGray), Style::default())
            };

            ListItem::new(Line::from(vec![
                Span::raw(marker),
                Span::styled(format!("{:<7}", episode.episode), code_style),
                Span::raw(" "),
                Span::styled(episode.name.clone(), name_style),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray));

    let mut state = ListState::default().with_offset(app.scroll_offset);
    state.select(Some(app.cursor));

    frame.render_stateful_widget(list, area, &mut state);
}
