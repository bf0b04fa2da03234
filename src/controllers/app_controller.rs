use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use ratatui::Terminal;

use crate::controllers::post_controller;
use crate::error::ReddituiError;
use crate::models::{BoardService, Session};
use crate::views::{tui, FormState, Toast};

pub async fn start_app<S: BoardService>(
    service: S,
    session: Session,
) -> Result<(), ReddituiError> {
    // Setup terminal
    let mut terminal = tui::setup_terminal()?;

    let mut form = FormState::new();

    // Run the app
    let res = run_app(&mut terminal, &mut form, &service, &session).await;

    // Restore terminal
    tui::restore_terminal(&mut terminal)?;

    if let Err(err) = res {
        eprintln!("{:?}", err);
    }

    Ok(())
}

pub async fn run_app<B: ratatui::backend::Backend, S: BoardService>(
    terminal: &mut Terminal<B>,
    form: &mut FormState,
    service: &S,
    session: &Session,
) -> Result<(), ReddituiError> {
    let title_enabled = session.is_signed_in();

    loop {
        terminal.draw(|f| tui::render_form(f, form, session))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Esc => return Ok(()),
                KeyCode::Tab | KeyCode::Down => form.focus_next(),
                KeyCode::BackTab | KeyCode::Up => form.focus_previous(),
                KeyCode::F(2) => form.toggle_image_box(),
                KeyCode::Backspace => form.backspace(title_enabled),
                KeyCode::Enter => handle_submit(terminal, form, service, session).await?,
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(())
                }
                KeyCode::Char(c) => form.insert_char(c, title_enabled),
                _ => {}
            }
        }
    }
}

/// Validate the draft and, only when both required fields are present, run
/// the submission workflow. Invalid drafts surface inline messages and never
/// touch the remote service.
pub async fn handle_submit<B: ratatui::backend::Backend, S: BoardService>(
    terminal: &mut Terminal<B>,
    form: &mut FormState,
    service: &S,
    session: &Session,
) -> Result<(), ReddituiError> {
    form.errors = form.draft.validate();
    if !form.errors.is_empty() {
        return Ok(());
    }

    let author = session.display_name().unwrap_or_default().to_string();

    // Open the toast and draw the loading frame before the workflow
    // suspends on the first remote call
    form.toast = Some(Toast::loading(post_controller::TOAST_LOADING));
    terminal.draw(|f| tui::render_form(f, form, session))?;

    if let Some(toast) = form.toast.as_mut() {
        post_controller::submit_post(service, &author, &mut form.draft, toast).await;
    }
    form.sync_focus();

    Ok(())
}
