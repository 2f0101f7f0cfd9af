use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::fmt;

/// Lexical category of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    BraceOpen,
    BraceClose,
    BracketOpen,
    BracketClose,
    Colon,
    Comma,
    Str,
    Number,
    Keyword,
    Ident,
    Error,
}

impl TokenKind {
    /// Label used when reporting what the parser expected.
    pub fn label(self) -> &'static str {
        match self {
            TokenKind::BraceOpen => "'{'",
            TokenKind::BraceClose => "'}'",
            TokenKind::BracketOpen => "'['",
            TokenKind::BracketClose => "']'",
            TokenKind::Colon => "':'",
            TokenKind::Comma => "','",
            TokenKind::Str => "string",
            TokenKind::Number => "number",
            TokenKind::Keyword => "keyword",
            TokenKind::Ident => "identifier",
            TokenKind::Error => "invalid input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Reserved words of the tournament notation. Everything else that scans as
/// a letter-then-alphanumeric run is an identifier.
static KEYWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    let mut s = HashSet::with_capacity(32);
    s.insert("tournament");
    s.insert("teams");
    s.insert("team");
    s.insert("player");
    s.insert("players");
    s.insert("elimination");
    s.insert("match");
    s.insert("scorer");
    s.insert("scorers");
    s.insert("name");
    s.insert("position");
    s.insert("number");
    s.insert("age");
    s.insert("result");
    s.insert("minute");
    s.insert("venue");
    s.insert("vs");
    s.insert("quarterfinal");
    s.insert("semifinal");
    s.insert("final");
    s
});

/// One lexical unit with its raw text and 1-based source position.
///
/// `detail` is populated only for [`TokenKind::Error`] and carries the
/// human-readable cause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: u32,
    pub column: u32,
    pub detail: Option<String>,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
            column,
            detail: None,
        }
    }

    pub fn error(text: impl Into<String>, line: u32, column: u32, detail: &str) -> Self {
        Self {
            kind: TokenKind::Error,
            text: text.into(),
            line,
            column,
            detail: Some(detail.to_string()),
        }
    }

    /// Human-readable label for expect-failure messages.
    pub fn display_name(&self) -> String {
        match self.kind {
            TokenKind::Str => format!("string \"{}\"", self.text),
            TokenKind::Number => format!("number {}", self.text),
            TokenKind::Keyword => format!("keyword '{}'", self.text),
            TokenKind::Ident => format!("identifier '{}'", self.text),
            TokenKind::Error => format!("invalid input '{}'", self.text),
            _ => format!("'{}'", self.text),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            TokenKind::Str => write!(f, "\"{}\"", self.text),
            _ => write!(f, "{}", self.text),
        }
    }
}

/// Scans the whole document into an ordered token sequence.
///
/// The scan is total: unrecognized characters and unterminated strings are
/// emitted as [`TokenKind::Error`] tokens instead of aborting, so every
/// non-whitespace character of the input is accounted for exactly once.
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(input.len() / 4);
    let mut chars = input.chars().peekable();

    let mut line: u32 = 1;
    let mut col: u32 = 1;

    while let Some(&ch) = chars.peek() {
        let start_line = line;
        let start_col = col;

        match ch {
            '\n' => {
                chars.next();
                line += 1;
                col = 1;
            }

            ' ' | '\t' | '\r' => {
                chars.next();
                col += 1;
            }

            '{' | '}' | '[' | ']' | ':' | ',' => {
                chars.next();
                let kind = match ch {
                    '{' => TokenKind::BraceOpen,
                    '}' => TokenKind::BraceClose,
                    '[' => TokenKind::BracketOpen,
                    ']' => TokenKind::BracketClose,
                    ':' => TokenKind::Colon,
                    _ => TokenKind::Comma,
                };
                tokens.push(Token::new(kind, ch, start_line, start_col));
                col += 1;
            }

            '"' => {
                chars.next();
                col += 1;

                // Raw string: no escape processing, newlines are kept and
                // still advance the position counters.
                let mut text = String::new();
                let mut closed = false;

                while let Some(&ch) = chars.peek() {
                    if ch == '"' {
                        chars.next();
                        col += 1;
                        closed = true;
                        break;
                    }
                    if ch == '\n' {
                        line += 1;
                        col = 1;
                    } else {
                        col += 1;
                    }
                    text.push(ch);
                    chars.next();
                }

                if closed {
                    tokens.push(Token::new(TokenKind::Str, text, start_line, start_col));
                } else {
                    tokens.push(Token::error(
                        text,
                        start_line,
                        start_col,
                        "unterminated string",
                    ));
                    return tokens;
                }
            }

            '0'..='9' => {
                let mut text = String::new();
                while let Some(&ch) = chars.peek() {
                    if ch.is_ascii_digit() {
                        text.push(ch);
                        chars.next();
                        col += 1;
                    } else {
                        break;
                    }
                }
                // Numeric conversion happens in the parser; the token keeps
                // the literal digit run.
                tokens.push(Token::new(TokenKind::Number, text, start_line, start_col));
            }

            _ if ch.is_ascii_alphabetic() => {
                let mut text = String::with_capacity(16);
                while let Some(&ch) = chars.peek() {
                    if ch.is_ascii_alphanumeric() {
                        text.push(ch);
                        chars.next();
                        col += 1;
                    } else {
                        break;
                    }
                }

                let kind = if KEYWORDS.contains(text.as_str()) {
                    TokenKind::Keyword
                } else {
                    TokenKind::Ident
                };
                tokens.push(Token::new(kind, text, start_line, start_col));
            }

            _ => {
                chars.next();
                tokens.push(Token::error(
                    ch,
                    start_line,
                    start_col,
                    "unrecognized character",
                ));
                col += 1;
            }
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_symbols() {
        let tokens = tokenize("{ } [ ] : ,");

        assert_eq!(tokens[0].kind, TokenKind::BraceOpen);
        assert_eq!(tokens[1].kind, TokenKind::BraceClose);
        assert_eq!(tokens[2].kind, TokenKind::BracketOpen);
        assert_eq!(tokens[3].kind, TokenKind::BracketClose);
        assert_eq!(tokens[4].kind, TokenKind::Colon);
        assert_eq!(tokens[5].kind, TokenKind::Comma);
    }

    #[test]
    fn test_tokenize_keywords() {
        let tokens = tokenize("tournament teams team player elimination match scorer vs");

        assert!(tokens.iter().all(|t| t.kind == TokenKind::Keyword));
        assert_eq!(tokens[0].text, "tournament");
        assert_eq!(tokens[7].text, "vs");
    }

    #[test]
    fn test_tokenize_identifier() {
        let tokens = tokenize("firstround group8");

        assert_eq!(tokens[0].kind, TokenKind::Ident);
        assert_eq!(tokens[0].text, "firstround");
        assert_eq!(tokens[1].kind, TokenKind::Ident);
        assert_eq!(tokens[1].text, "group8");
    }

    #[test]
    fn test_tokenize_string_keeps_raw_text() {
        let tokens = tokenize(r#""Cobras FC""#);

        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Str);
        assert_eq!(tokens[0].text, "Cobras FC");
    }

    #[test]
    fn test_tokenize_string_no_escape_processing() {
        let tokens = tokenize(r#""a\nb""#);

        assert_eq!(tokens[0].text, "a\\nb");
    }

    #[test]
    fn test_tokenize_number_keeps_digit_run() {
        let tokens = tokenize("007 42");

        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[0].text, "007");
        assert_eq!(tokens[1].text, "42");
    }

    #[test]
    fn test_identifier_must_start_with_letter() {
        // "8teams" scans as a number followed by an identifier.
        let tokens = tokenize("8teams");

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[0].text, "8");
        assert_eq!(tokens[1].kind, TokenKind::Ident);
        assert_eq!(tokens[1].text, "teams");
    }

    #[test]
    fn test_unrecognized_character() {
        let tokens = tokenize("team @");

        assert_eq!(tokens[1].kind, TokenKind::Error);
        assert_eq!(tokens[1].text, "@");
        assert_eq!(tokens[1].detail.as_deref(), Some("unrecognized character"));
    }

    #[test]
    fn test_unterminated_string_halts_scan() {
        let tokens = tokenize("team \"Cobras { }");

        let last = tokens.last().unwrap();
        assert_eq!(last.kind, TokenKind::Error);
        assert_eq!(last.text, "Cobras { }");
        assert_eq!(last.detail.as_deref(), Some("unterminated string"));
        // Nothing after the open quote survives as a separate token.
        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn test_unterminated_string_position_is_opening_quote() {
        let tokens = tokenize("x \"abc");

        assert_eq!(tokens[1].line, 1);
        assert_eq!(tokens[1].column, 3);
    }

    #[test]
    fn test_line_column_tracking() {
        let tokens = tokenize("team\n  match");

        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[0].column, 1);
        assert_eq!(tokens[1].line, 2);
        assert_eq!(tokens[1].column, 3);
    }

    #[test]
    fn test_string_spanning_lines_advances_position() {
        let tokens = tokenize("\"a\nb\" team");

        assert_eq!(tokens[0].kind, TokenKind::Str);
        assert_eq!(tokens[0].text, "a\nb");
        assert_eq!(tokens[0].line, 1);
        // The token after the string sits on the second line.
        assert_eq!(tokens[1].line, 2);
        assert_eq!(tokens[1].column, 4);
    }

    #[test]
    fn test_scan_is_total() {
        let tokens = tokenize("team @ # $ \"x\" 1");

        let consumed: usize = tokens.iter().map(|t| t.text.chars().count()).sum();
        // team(4) + @(1) + #(1) + $(1) + x(1) + 1(1); quotes are structure,
        // not token text.
        assert_eq!(consumed, 9);
    }

    #[test]
    fn test_display_name() {
        let tokens = tokenize("team \"A\" 3 {");

        assert_eq!(tokens[0].display_name(), "keyword 'team'");
        assert_eq!(tokens[1].display_name(), "string \"A\"");
        assert_eq!(tokens[2].display_name(), "number 3");
        assert_eq!(tokens[3].display_name(), "'{'");
    }
}
