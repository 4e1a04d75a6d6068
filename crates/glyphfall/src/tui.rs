//! Terminal setup and teardown.

use std::io;

use crossterm::{
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
};
use ratatui::DefaultTerminal;

/// Enter the alternate screen in raw mode, optionally reporting mouse motion.
///
/// Focus changes are reported along with the mouse so the cursor can be
/// forgotten when the terminal loses focus.
pub fn init(mouse: bool) -> io::Result<DefaultTerminal> {
    let terminal = ratatui::try_init()?;
    if mouse {
        install_panic_hook();
        if let Err(err) = execute!(io::stdout(), EnableMouseCapture, EnableFocusChange) {
            release_mouse();
            ratatui::restore();
            return Err(err);
        }
    }
    Ok(terminal)
}

/// Put the terminal back the way we found it.
pub fn restore(mouse: bool) {
    if mouse {
        release_mouse();
    }
    ratatui::restore();
}

fn release_mouse() {
    let _ = execute!(io::stdout(), DisableMouseCapture, DisableFocusChange);
}

/// Release mouse and focus reporting before the panic hook installed by
/// ratatui runs.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        release_mouse();
        original_hook(panic_info);
    }));
}
