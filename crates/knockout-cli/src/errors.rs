use colored::*;
use std::fmt;

/// Enhanced error with source context and suggestions
pub struct EnhancedError {
    pub message: String,
    pub position: Option<(u32, u32)>,
    pub file: Option<String>,
    pub source: Option<String>,
    pub suggestion: Option<String>,
    pub help: Option<String>,
}

impl EnhancedError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            position: None,
            file: None,
            source: None,
            suggestion: None,
            help: None,
        }
    }

    pub fn with_position(mut self, line: u32, column: u32) -> Self {
        if line > 0 {
            self.position = Some((line, column));
        }
        self
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Display the error with colored output and context
    pub fn display(&self) {
        eprintln!("{} {}", "error:".red().bold(), self.message.bold());

        if let (Some(file), Some((line, column))) = (&self.file, self.position) {
            eprintln!("  {} {}:{}:{}", "-->".blue().bold(), file, line, column);
        }

        if let (Some(source), Some(position)) = (&self.source, self.position) {
            eprintln!();
            self.display_source_with_position(source, position);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!();
            eprintln!("{} {}", "suggestion:".green().bold(), suggestion);
        }

        if let Some(help) = &self.help {
            eprintln!();
            eprintln!("{} {}", "help:".cyan().bold(), help);
        }
    }

    fn display_source_with_position(&self, source: &str, (line, column): (u32, u32)) {
        let lines: Vec<&str> = source.lines().collect();

        let line = line as usize;
        let line_idx = line.saturating_sub(1);
        if line_idx >= lines.len() {
            return;
        }

        let max_line = (line + 2).min(lines.len());
        let line_num_width = max_line.to_string().len();

        // Show context: 2 lines before and after
        let start = line_idx.saturating_sub(2);
        let end = (line_idx + 3).min(lines.len());

        for i in start..end {
            let line_num = i + 1;
            let text = lines.get(i).unwrap_or(&"");

            if line_num == line {
                eprintln!(
                    "{:>width$} {} {}",
                    line_num.to_string().blue().bold(),
                    "|".blue().bold(),
                    text,
                    width = line_num_width
                );

                let spaces = " ".repeat((column as usize).saturating_sub(1));
                eprintln!(
                    "{:>width$} {} {}{}",
                    "",
                    "|".blue().bold(),
                    spaces,
                    "^".red().bold(),
                    width = line_num_width
                );
            } else {
                eprintln!(
                    "{:>width$} {} {}",
                    line_num.to_string().dimmed(),
                    "|".blue().bold(),
                    text,
                    width = line_num_width
                );
            }
        }
    }
}

impl fmt::Display for EnhancedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Debug for EnhancedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EnhancedError: {}", self.message)
    }
}

impl std::error::Error for EnhancedError {}

/// Attach contextual suggestions based on the message text
pub fn enhance_error(
    message: impl Into<String>,
    file: Option<String>,
    source: Option<String>,
) -> EnhancedError {
    let message = message.into();

    let mut enhanced = EnhancedError::new(message.clone());

    if let Some(file) = file {
        enhanced = enhanced.with_file(file);
    }

    if let Some(source) = source {
        enhanced = enhanced.with_source(source);
    }

    if message.contains("unterminated string") {
        enhanced = enhanced.with_suggestion("Close the string with a matching '\"'");
        enhanced = enhanced.with_help("Strings may span lines but must end with a double quote");
    } else if message.contains("unrecognized character") {
        enhanced = enhanced
            .with_suggestion("Remove the character or replace it with valid notation syntax");
        enhanced =
            enhanced.with_help("Valid punctuation: { } [ ] : , plus strings, numbers and words");
    } else if message.contains("expected keyword") {
        enhanced = enhanced.with_suggestion(
            "Check the section order: tournament, then teams, then elimination",
        );
    } else if message.contains("expected") {
        enhanced =
            enhanced.with_suggestion("Check syntax - missing bracket, colon, comma, or quote?");
    } else if message.contains("not a tournament attribute") {
        enhanced = enhanced.with_help("Known header attributes: name, venue, teams");
    } else if message.contains("end of input") {
        enhanced = enhanced.with_suggestion("The document ended early - is a section missing?");
        enhanced = enhanced
            .with_help("A document needs tournament { }, teams { } and elimination { } blocks");
    }

    enhanced
}
