use std::io;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    prelude::Span,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};

use crate::models::draft::Field;
use crate::models::Session;
use crate::views::toast::{Toast, ToastState};
use crate::views::widgets::FormState;

pub fn setup_terminal() -> io::Result<Terminal<ratatui::backend::CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

pub fn restore_terminal(
    terminal: &mut Terminal<ratatui::backend::CrosstermBackend<io::Stdout>>,
) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()
}

pub fn render_form<B: ratatui::backend::Backend>(
    f: &mut Frame<B>,
    form: &FormState,
    session: &Session,
) {
    let visible = form.visible_fields();
    let error_msgs = form.errors.messages();

    // One row per visible input, plus the author line, error lines, key
    // hints and the toast line
    let mut constraints = vec![Constraint::Length(1)];
    for _ in &visible {
        constraints.push(Constraint::Length(3));
    }
    if !error_msgs.is_empty() {
        constraints.push(Constraint::Length(error_msgs.len() as u16));
    }
    constraints.push(Constraint::Length(1));
    constraints.push(Constraint::Length(1));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(constraints)
        .split(f.size());

    let mut row = 0;
    render_author_line(f, chunks[row], session);
    row += 1;

    for field in &visible {
        render_field(f, chunks[row], *field, form, session);
        row += 1;
    }

    if !error_msgs.is_empty() {
        let lines: Vec<Line> = error_msgs
            .iter()
            .map(|msg| {
                Line::from(Span::styled(
                    format!("- {}", msg),
                    Style::default().fg(Color::Red),
                ))
            })
            .collect();
        f.render_widget(Paragraph::new(lines), chunks[row]);
        row += 1;
    }

    render_hints(f, chunks[row], form);
    row += 1;

    if let Some(toast) = &form.toast {
        render_toast(f, chunks[row], toast);
    }
}

fn render_author_line<B: ratatui::backend::Backend>(
    f: &mut Frame<B>,
    area: Rect,
    session: &Session,
) {
    let line = match session.display_name() {
        Some(name) => Line::from(Span::styled(
            format!("u/{}", name),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        None => Line::from(Span::styled(
            "signed out",
            Style::default().fg(Color::DarkGray),
        )),
    };
    f.render_widget(Paragraph::new(line), area);
}

fn render_field<B: ratatui::backend::Backend>(
    f: &mut Frame<B>,
    area: Rect,
    field: Field,
    form: &FormState,
    session: &Session,
) {
    let (label, value, placeholder) = match field {
        Field::Title => (
            "Title",
            form.draft.title.as_str(),
            if session.is_signed_in() {
                "Enter a title for your post"
            } else {
                "Sign in to post"
            },
        ),
        Field::Body => ("Body", form.draft.body.as_str(), "Text (optional)"),
        Field::Subreddit => ("Sub-Thread", form.draft.subreddit.as_str(), "i.e. next.js"),
        Field::Image => ("Image URL", form.draft.image.as_str(), "optional"),
    };

    let focused = form.focused() == field;
    let disabled = field == Field::Title && !session.is_signed_in();

    let border_style = if disabled {
        Style::default().fg(Color::DarkGray)
    } else if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let text = if value.is_empty() {
        Span::styled(placeholder, Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(value)
    };

    let input = Paragraph::new(Line::from(text)).block(
        Block::default()
            .title(label)
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    f.render_widget(input, area);
}

fn render_hints<B: ratatui::backend::Backend>(f: &mut Frame<B>, area: Rect, form: &FormState) {
    let dim = Style::default().fg(Color::DarkGray);
    let mut spans = vec![
        Span::styled("[Tab] next field  ", dim),
        Span::styled(
            "[F2] image box  ",
            if form.image_box_open {
                Style::default().fg(Color::Blue)
            } else {
                dim
            },
        ),
    ];
    // The submit affordance only exists once a title is present
    if !form.draft.title.is_empty() {
        spans.push(Span::styled(
            "[Enter] create post  ",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ));
    }
    spans.push(Span::styled("[Esc] quit", dim));
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_toast<B: ratatui::backend::Backend>(f: &mut Frame<B>, area: Rect, toast: &Toast) {
    let style = match toast.state() {
        ToastState::Loading => Style::default().fg(Color::Yellow),
        ToastState::Success => Style::default().fg(Color::Green),
        ToastState::Error => Style::default().fg(Color::Red),
    };
    let line = Line::from(Span::styled(toast.message(), style));
    f.render_widget(Paragraph::new(line), area);
}
