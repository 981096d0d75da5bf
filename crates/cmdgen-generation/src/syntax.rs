//! Structural check of composed Rust source
//!
//! Catches malformed expansion before anything reaches disk: every `(`, `[`
//! and `{` outside string literals, char literals and comments must be closed
//! by its matching delimiter, and every string literal and block comment must
//! be terminated.

use std::fmt;

/// A structural problem found in generated source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxIssue {
    /// 1-based line of the problem
    pub line: usize,
    /// 1-based column of the problem
    pub column: usize,
    /// Error message
    pub message: String,
    /// Error code (e.g., "E0001")
    pub code: &'static str,
}

impl fmt::Display for SyntaxIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at line {}, column {}: {}",
            self.code, self.line, self.column, self.message
        )
    }
}

#[derive(Debug, Clone, Copy)]
struct Position {
    line: usize,
    column: usize,
}

struct Scanner {
    chars: Vec<char>,
    index: usize,
    position: Position,
}

impl Scanner {
    fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            index: 0,
            position: Position { line: 1, column: 1 },
        }
    }

    fn peek(&self, offset: usize) -> Option<char> {
        self.chars.get(self.index + offset).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek(0)?;
        self.index += 1;
        if c == '\n' {
            self.position.line += 1;
            self.position.column = 1;
        } else {
            self.position.column += 1;
        }
        Some(c)
    }
}

fn issue(at: Position, code: &'static str, message: impl Into<String>) -> SyntaxIssue {
    SyntaxIssue {
        line: at.line,
        column: at.column,
        message: message.into(),
        code,
    }
}

/// Check delimiter balance and literal termination
pub fn check(source: &str) -> Result<(), SyntaxIssue> {
    let mut scanner = Scanner::new(source);
    let mut open: Vec<(char, Position)> = Vec::new();

    while let Some(c) = scanner.peek(0) {
        let at = scanner.position;
        match c {
            '/' if scanner.peek(1) == Some('/') => {
                while scanner.peek(0).is_some_and(|c| c != '\n') {
                    scanner.bump();
                }
            }
            '/' if scanner.peek(1) == Some('*') => {
                scanner.bump();
                scanner.bump();
                loop {
                    match scanner.bump() {
                        Some('*') if scanner.peek(0) == Some('/') => {
                            scanner.bump();
                            break;
                        }
                        Some(_) => {}
                        None => return Err(issue(at, "E0004", "unterminated block comment")),
                    }
                }
            }
            'r' if starts_raw_string(&scanner) => {
                skip_raw_string(&mut scanner, at)?;
            }
            '"' => {
                scanner.bump();
                loop {
                    match scanner.bump() {
                        Some('\\') => {
                            scanner.bump();
                        }
                        Some('"') => break,
                        Some(_) => {}
                        None => return Err(issue(at, "E0005", "unterminated string literal")),
                    }
                }
            }
            '\'' => skip_char_or_lifetime(&mut scanner),
            '(' | '[' | '{' => {
                open.push((c, at));
                scanner.bump();
            }
            ')' | ']' | '}' => {
                let expected = match c {
                    ')' => '(',
                    ']' => '[',
                    _ => '{',
                };
                match open.pop() {
                    Some((opener, _)) if opener == expected => {}
                    Some((opener, opened_at)) => {
                        return Err(issue(
                            at,
                            "E0002",
                            format!(
                                "`{c}` closes `{opener}` opened at line {}, column {}",
                                opened_at.line, opened_at.column
                            ),
                        ));
                    }
                    None => return Err(issue(at, "E0003", format!("unmatched `{c}`"))),
                }
                scanner.bump();
            }
            _ => {
                scanner.bump();
            }
        }
    }

    match open.pop() {
        Some((opener, opened_at)) => {
            Err(issue(opened_at, "E0001", format!("unclosed `{opener}`")))
        }
        None => Ok(()),
    }
}

fn starts_raw_string(scanner: &Scanner) -> bool {
    // `r` must not be the tail of an identifier such as `for`
    if scanner.index > 0 {
        let prev = scanner.chars[scanner.index - 1];
        if prev.is_ascii_alphanumeric() || prev == '_' {
            return false;
        }
    }
    let mut offset = 1;
    while scanner.peek(offset) == Some('#') {
        offset += 1;
    }
    scanner.peek(offset) == Some('"')
}

fn skip_raw_string(scanner: &mut Scanner, at: Position) -> Result<(), SyntaxIssue> {
    scanner.bump();
    let mut hashes = 0;
    while scanner.peek(0) == Some('#') {
        hashes += 1;
        scanner.bump();
    }
    scanner.bump();

    loop {
        match scanner.bump() {
            Some('"') if (0..hashes).all(|i| scanner.peek(i) == Some('#')) => {
                for _ in 0..hashes {
                    scanner.bump();
                }
                return Ok(());
            }
            Some(_) => {}
            None => return Err(issue(at, "E0005", "unterminated raw string literal")),
        }
    }
}

fn skip_char_or_lifetime(scanner: &mut Scanner) {
    scanner.bump();
    match (scanner.peek(0), scanner.peek(1)) {
        (Some('\\'), _) => {
            while let Some(c) = scanner.bump() {
                if c == '\'' {
                    break;
                }
            }
        }
        (Some(_), Some('\'')) => {
            scanner.bump();
            scanner.bump();
        }
        // lifetime or label; the name is consumed as ordinary text
        _ => {}
    }
}
