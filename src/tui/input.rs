use std::io::BufRead;

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, read};

use crate::terminal::{RawModeGuard, flush, is_interactive, reset_terminal};

/// Source of answers for the interactive prompts.
pub trait LineSource {
    /// Show `prompt` and read one answer. `None` ends the session.
    fn read_answer(&mut self, prompt: &str) -> Option<String>;
}

/// Reads from the terminal: raw-mode line editing on a tty, plain lines otherwise.
pub struct Console;

impl LineSource for Console {
    fn read_answer(&mut self, prompt: &str) -> Option<String> {
        if is_interactive() {
            edit_line(prompt)
        } else {
            print!("{}: ", prompt);
            flush();
            let mut line = String::new();
            match std::io::stdin().lock().read_line(&mut line) {
                Ok(0) | Err(_) => None,
                Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
            }
        }
    }
}

/// Single-line editor with cursor movement. Esc or Ctrl+D cancels.
fn edit_line(prompt: &str) -> Option<String> {
    let mut input = String::new();
    let mut cursor_pos = 1; // 1-based: 1 = before first char
    let mut last_len = 0;
    let mut cancelled = false;

    let _guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(_) => return None,
    };

    print!("{}: ", prompt);
    flush();

    loop {
        match read() {
            Ok(Event::Key(key_event)) if key_event.kind != KeyEventKind::Release => {
                let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
                match key_event.code {
                    KeyCode::Char('c') if ctrl => {
                        // process::exit skips destructors
                        reset_terminal();
                        println!();
                        std::process::exit(130);
                    }
                    KeyCode::Char('d') if ctrl => {
                        cancelled = true;
                        break;
                    }
                    KeyCode::Char('u') if ctrl => {
                        input.clear();
                        cursor_pos = 1;
                    }
                    KeyCode::Esc => {
                        cancelled = true;
                        break;
                    }
                    KeyCode::Enter => break,
                    KeyCode::Backspace => {
                        if cursor_pos > 1 {
                            cursor_pos -= 1;
                            input.remove(cursor_pos - 1);
                        }
                    }
                    KeyCode::Delete => {
                        if cursor_pos <= input.len() {
                            input.remove(cursor_pos - 1);
                        }
                    }
                    KeyCode::Left => {
                        if cursor_pos > 1 {
                            cursor_pos -= 1;
                        }
                    }
                    KeyCode::Right => {
                        if cursor_pos <= input.len() {
                            cursor_pos += 1;
                        }
                    }
                    KeyCode::Home => cursor_pos = 1,
                    KeyCode::End => cursor_pos = input.len() + 1,
                    // Answers are numbers and y/n; ASCII keeps byte and cursor offsets aligned.
                    KeyCode::Char(c) if c.is_ascii() && !ctrl => {
                        input.insert(cursor_pos - 1, c);
                        cursor_pos += 1;
                    }
                    _ => {}
                }

                print!("\r{}: {}", prompt, " ".repeat(last_len + 1));
                print!("\r{}: {}", prompt, input);
                print!("\x1b[{}G", prompt.chars().count() + 2 + cursor_pos);
                flush();
                last_len = input.len();
            }
            Ok(_) => {}
            Err(_) => {
                cancelled = true;
                break;
            }
        }
    }

    // Leave raw mode before printing the newline.
    drop(_guard);
    println!();
    if cancelled { None } else { Some(input) }
}
