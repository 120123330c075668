use crate::color::Rgb;
use owo_colors::OwoColorize;
use std::fmt::Write;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub color: Option<Rgb>,
}

/// A line of text made of colored spans.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledLine {
    spans: Vec<Span>,
}

impl StyledLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plain(text: impl Into<String>) -> Self {
        let mut line = Self::new();
        line.push(text, None);
        line
    }

    pub fn push(&mut self, text: impl Into<String>, color: Option<Rgb>) -> &mut Self {
        self.spans.push(Span {
            text: text.into(),
            color,
        });
        self
    }

    pub fn colored(&mut self, text: impl Into<String>, color: Rgb) -> &mut Self {
        self.push(text, Some(color))
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    /// Renders the line with 24-bit ANSI color escapes, or as plain text when
    /// `colors` is false.
    pub fn to_ansi(&self, colors: bool) -> String {
        let mut out = String::new();
        for span in &self.spans {
            match span.color {
                Some(Rgb(r, g, b)) if colors => {
                    let _ = write!(out, "{}", span.text.truecolor(r, g, b));
                }
                _ => out.push_str(&span.text),
            }
        }
        out
    }

    /// Renders the line as HTML spans for rich-text widgets.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for span in &self.spans {
            let text = escape_html(&span.text);
            match span.color {
                Some(Rgb(r, g, b)) => {
                    let _ = write!(out, "<span style='color:rgb({r},{g},{b});'>{text}</span>");
                }
                None => out.push_str(&text),
            }
        }
        out
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            ' ' => out.push_str("&nbsp;"),
            _ => out.push(c),
        }
    }
    out
}
