mod detail;
mod episodes;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::App;
use crate::notify::NoticeKind;

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(34), Constraint::Min(0)])
        .split(chunks[1]);

    episodes::render(frame, app, panes[0]);
    detail::render(frame, app, panes[1]);

    render_status_bar(frame, app, chunks[2]);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let title = match &app.selected {
        Some(episode) => format!("squanch - {} {}", episode.episode, episode.name),
        None => "squanch - Episodes".to_string(),
    };

    let header = Paragraph::new(Line::from(vec![Span::styled(
        title,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )]))
    .style(Style::default().bg(Color::DarkGray));

    frame.render_widget(header, area);
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let status = if let Some(notice) = app.flash() {
        let color = match notice.kind {
            NoticeKind::Info => Color::Yellow,
            NoticeKind::Error => Color::Red,
        };
        Line::from(vec![Span::styled(
            notice.message.clone(),
            Style::default().fg(color),
        )])
    } else if let Some(error) = app.feed.error() {
        Line::from(vec![Span::styled(
            format!("Error: {}", error),
            Style::default().fg(Color::Red),
        )])
    } else if app.feed.is_loading() || app.cast.loading {
        Line::from(vec![Span::styled(
            "Loading...",
            Style::default().fg(Color::Yellow),
        )])
    } else {
        let help = if app.selected.is_some() {
            "j/k/g/G: nav | Ctrl+d/u: page | Tab: pane | Enter: deselect | r: refresh | q: back"
        } else {
            "j/k/g/G: nav | Ctrl+d/u: page | Enter: select | r: refresh | q: quit"
        };
        Line::from(vec![Span::styled(help, Style::default().fg(Color::Gray))])
    };

    let status_bar = Paragraph::new(status).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status_bar, area);
}
