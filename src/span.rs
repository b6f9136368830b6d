use crate::types::{Span, Token};

/// Lay tokens end to end, starting at offset 0, with nothing in between.
pub fn build_spans<T: Token>(tokens: &[T]) -> Vec<Span> {
    let mut offset = 0;
    tokens
        .iter()
        .map(|token| {
            let begin = offset;
            offset += token.char_len();
            Span::new(begin, offset)
        })
        .collect()
}

/// Total number of characters covered by `tokens`.
pub fn total_len<T: Token>(tokens: &[T]) -> usize {
    tokens.iter().map(|t| t.char_len()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spans_are_cumulative() {
        let spans = build_spans(&["ab", "c", "def"]);
        assert_eq!(
            spans,
            vec![Span::new(0, 2), Span::new(2, 3), Span::new(3, 6)]
        );
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        let spans = build_spans(&["中国", "人"]);
        assert_eq!(spans, vec![Span::new(0, 2), Span::new(2, 3)]);
        assert_eq!(total_len(&["中国", "人"]), 3);
    }

    #[test]
    fn no_tokens_no_spans() {
        let tokens: [&str; 0] = [];
        assert!(build_spans(&tokens).is_empty());
        assert_eq!(total_len(&tokens), 0);
    }
}
