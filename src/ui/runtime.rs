use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use crossterm::event::{self, Event};

use crate::config::FormFile;
use crate::form::ValueMap;
use crate::ui::form::{FormHost, SubmitOutcome};
use crate::ui::input::{map_key, KeyAction};
use crate::ui::terminal_guard::TerminalGuard;
use crate::ui::theme::Theme;
use crate::ui::view::draw_form;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// How an interactive session ended.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    Submitted(ValueMap),
    Cancelled,
}

/// Show `form` until it is submitted or cancelled.
///
/// Single-threaded: each key event is reduced, validated and repainted
/// before the next one is read.
pub fn run(form: FormFile, theme: Theme) -> io::Result<RunOutcome> {
    let submitted: Rc<RefCell<Option<ValueMap>>> = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&submitted);
    let mut host = FormHost::mount(form.fields, form.rules, move |values: &ValueMap| {
        *sink.borrow_mut() = Some(values.clone());
    })
    .with_submit_label(form.submit_label)
    .with_policy(form.submit_policy);

    let mut terminal = TerminalGuard::enter()?;
    loop {
        let tree = host.render();
        terminal.draw(|frame| draw_form(frame, &form.title, &tree, host.focus_index(), &theme))?;

        if let Some(values) = submitted.borrow_mut().take() {
            return Ok(RunOutcome::Submitted(values));
        }

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            // Resize and other events only need a repaint.
            continue;
        };

        match map_key(key, host.focus()) {
            KeyAction::None => {}
            KeyAction::Dispatch(intent) => host.dispatch(intent),
            KeyAction::Submit => {
                if let SubmitOutcome::Blocked { errors } = host.submit() {
                    tracing::debug!(?errors, "submit blocked");
                }
            }
            KeyAction::Quit => {
                host.unmount();
                return Ok(RunOutcome::Cancelled);
            }
        }
    }
}
