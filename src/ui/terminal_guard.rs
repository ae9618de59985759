use crossterm::cursor::{Hide, Show};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::ops::{Deref, DerefMut};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub type FormTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Raw-mode, alternate-screen terminal that puts the screen back on drop.
///
/// A panic hook restores the screen too, before the default hook prints,
/// so panic messages stay readable. Once the guard is dropped the hook
/// leaves stdout alone.
pub struct TerminalGuard {
    terminal: FormTerminal,
    restore: RestoreSlot,
}

/// Shared one-shot flag: whoever takes it first restores the terminal.
#[derive(Debug, Clone)]
struct RestoreSlot(Arc<AtomicBool>);

impl RestoreSlot {
    fn armed() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    fn take(&self) -> bool {
        self.0.swap(false, Ordering::SeqCst)
    }
}

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(Hide)?;
        let restore = RestoreSlot::armed();
        install_panic_hook(restore.clone());

        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal, restore })
    }
}

impl Deref for TerminalGuard {
    type Target = FormTerminal;

    fn deref(&self) -> &Self::Target {
        &self.terminal
    }
}

impl DerefMut for TerminalGuard {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.restore.take() {
            restore_terminal();
        }
    }
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = stdout.execute(LeaveAlternateScreen);
    let _ = stdout.execute(Show);
}

fn install_panic_hook(restore: RestoreSlot) {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        if restore.take() {
            restore_terminal();
        }
        default_hook(info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restore_slot_fires_once_across_clones() {
        let guard_side = RestoreSlot::armed();
        let hook_side = guard_side.clone();

        assert!(guard_side.take());
        assert!(!hook_side.take());
        assert!(!guard_side.take());
    }
}
