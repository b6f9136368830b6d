use crate::types::Token as TokenTrait;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    /// Text of the token
    pub text: &'a str,
}

impl<'a> TokenTrait for Token<'a> {
    fn text(&self) -> &str {
        self.text
    }
}

/// Splits a line of segmented text on whitespace.
#[derive(Debug)]
pub struct TokenParser<'a> {
    source: &'a str,
    position: usize,
}

impl<'a> TokenParser<'a> {
    pub fn parse(text: &'a str) -> TokenParser<'a> {
        TokenParser {
            source: text,
            position: 0,
        }
    }
}

impl<'a> Iterator for TokenParser<'a> {
    type Item = Token<'a>;
    fn next(&mut self) -> Option<Self::Item> {
        let rest_of_text = self.source.split_at(self.position).1;
        let skipped = rest_of_text
            .chars()
            .take_while(|x| x.is_whitespace())
            .map(|x| x.len_utf8())
            .sum::<usize>();
        self.position += skipped;
        let rest_of_text = &rest_of_text[skipped..];
        let len = rest_of_text
            .chars()
            .take_while(|x| !x.is_whitespace())
            .map(|x| x.len_utf8())
            .sum::<usize>();
        if len == 0 {
            return None;
        }
        self.position += len;
        Some(Token {
            text: &rest_of_text[..len],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(line: &str) -> Vec<&str> {
        TokenParser::parse(line).map(|t| t.text).collect()
    }

    #[test]
    fn splits_on_any_whitespace() {
        assert_eq!(texts("  我 爱\t北京 天安门 \r\n"), vec!["我", "爱", "北京", "天安门"]);
        assert_eq!(texts("a\u{3000}b"), vec!["a", "b"]);
    }

    #[test]
    fn blank_lines_have_no_tokens() {
        assert!(texts("").is_empty());
        assert!(texts(" \t ").is_empty());
    }

    #[test]
    fn resumes_after_multibyte_tokens() {
        assert_eq!(texts("北京 ab 天安门"), vec!["北京", "ab", "天安门"]);
    }
}
