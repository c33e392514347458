#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod ir;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A 1-indexed source line and the file it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }

    /// Builds a position from a 0-indexed line number.
    pub fn from_index(line_index: usize, file: &Rc<String>) -> Self {
        Position(line_index as u32 + 1, Rc::clone(file))
    }

    pub fn is_null(&self) -> bool {
        self.0 == 0
    }
}

/// Returns the text of a 1-indexed line, if the source has that many lines.
pub fn get_line(source: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source.split('\n').nth(line as usize - 1)
}


/// Formats an error together with the offending source line.
pub fn render_error(error: &Error, source: &str) -> String {
    /*
        Error: UnexpectedToken (message)
        -> main.lagab
           |
        20 | let x: int 5
           |
    */

    let position = error.get_position();
    let mut rendered = String::new();

    if let ErrorTip::None = error.get_tip() {
        rendered.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error));
    } else {
        rendered.push_str(&format!(
            "Error: {} ({})\n  {}\n",
            error.get_error_name(),
            error,
            error.get_tip()
        ));
    }
    rendered.push_str(&format!("-> {}\n", position.1));

    if let Some(line_text) = get_line(source, position.0) {
        let line_string = position.0.to_string();
        let padding = line_string.len() + 2;

        rendered.push_str(&format!("{:>padding$}\n", "|"));
        rendered.push_str(&format!("{} | {}\n", line_string, line_text.trim_end()));
        rendered.push_str(&format!("{:>padding$}\n", "|"));
    }

    rendered
}

pub fn display_error(error: &Error, source: &str) {
    eprint!("{}", render_error(error, source));
}
