use colored::Colorize;

use crate::annotate::Annotated;
use crate::types::{Classification, Token};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Style {
    /// Terminal colors: violations on red, divergent tokens blinking.
    #[default]
    Color,
    /// `[violating]` and `{divergent}`, for output that is not a terminal.
    Brackets,
}

impl Style {
    pub fn token(&self, text: &str, class: Classification) -> String {
        match (self, class) {
            (_, Classification::Matching) => text.to_string(),
            (Style::Color, Classification::Violating) => format!("{}", text.on_red()),
            (Style::Color, Classification::Divergent) => format!("{}", text.blink()),
            (Style::Brackets, Classification::Violating) => format!("[{}]", text),
            (Style::Brackets, Classification::Divergent) => format!("{{{}}}", text),
        }
    }

    pub fn line<T: Token>(&self, annotated: &[Annotated<'_, T>]) -> String {
        annotated
            .iter()
            .map(|a| self.token(a.token.text(), a.class))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

pub fn plain_line<T: Token>(tokens: &[T]) -> String {
    tokens
        .iter()
        .map(|t| t.text())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::annotate_line;

    #[test]
    fn brackets_mark_each_class() {
        let candidate = ["ab", "c", "d"];
        let annotated = annotate_line(&["a", "bc", "d"], &candidate).unwrap();
        assert_eq!(Style::Brackets.line(&annotated), "[ab] {c} d");
    }

    #[test]
    fn color_wraps_only_mismatches() {
        colored::control::set_override(true);
        assert_eq!(Style::Color.token("ok", Classification::Matching), "ok");
        let violating = Style::Color.token("ab", Classification::Violating);
        assert!(violating.starts_with("\u{1b}[41m"));
        assert!(violating.contains("ab"));
        let divergent = Style::Color.token("c", Classification::Divergent);
        assert!(divergent.starts_with("\u{1b}[5m"));
    }

    #[test]
    fn plain_line_joins_with_spaces() {
        assert_eq!(plain_line(&["我", "爱", "北京"]), "我 爱 北京");
    }
}
