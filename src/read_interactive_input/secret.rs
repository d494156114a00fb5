use std::io::Write;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use zeroize::Zeroizing;

use crate::errors::{MirrorError, Result};

// Sized up front so typing never reallocates and strands unwiped copies.
const SECRET_CAPACITY: usize = 256;

/// What a single key press does to the secret being typed
#[derive(Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    Continue,
    Submit,
    Cancel,
    TooLong,
}

/// Apply one key event to the buffer.
pub fn apply_key(secret: &mut String, key: &KeyEvent) -> KeyOutcome {
    if key.kind == KeyEventKind::Release {
        return KeyOutcome::Continue;
    }
    match key.code {
        KeyCode::Enter => KeyOutcome::Submit,
        KeyCode::Esc => KeyOutcome::Cancel,
        KeyCode::Backspace => {
            secret.pop();
            KeyOutcome::Continue
        }
        // Ctrl chords are editing keys, not text. Ctrl+Alt is AltGr on Windows.
        KeyCode::Char(c) if is_control_chord(key) => {
            if matches!(c, 'c' | 'd') {
                KeyOutcome::Cancel
            } else {
                KeyOutcome::Continue
            }
        }
        KeyCode::Char(c) if secret.len() + c.len_utf8() > SECRET_CAPACITY => KeyOutcome::TooLong,
        KeyCode::Char(c) => {
            secret.push(c);
            KeyOutcome::Continue
        }
        _ => KeyOutcome::Continue,
    }
}

fn is_control_chord(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && !key.modifiers.contains(KeyModifiers::ALT)
}

/// Prompt for a secret with echo disabled. Raw mode is always restored.
pub(super) fn read_secret_from_terminal(label: &str) -> Result<Zeroizing<String>> {
    let mut stdout = std::io::stdout();
    write!(stdout, "{label}")?;
    stdout.flush()?;

    enable_raw_mode()?;
    let result = read_keys();
    let restored = disable_raw_mode();
    writeln!(stdout)?;
    restored?;
    result
}

fn read_keys() -> Result<Zeroizing<String>> {
    let mut secret = Zeroizing::new(String::with_capacity(SECRET_CAPACITY));
    loop {
        if let Event::Key(key) = event::read()? {
            match apply_key(&mut secret, &key) {
                KeyOutcome::Continue => {}
                KeyOutcome::Submit => return Ok(secret),
                KeyOutcome::Cancel => return Err(MirrorError::PromptCancelled),
                KeyOutcome::TooLong => {
                    return Err(MirrorError::InvalidCredentials(
                        "password too long".to_string(),
                    ));
                }
            }
        }
    }
}
