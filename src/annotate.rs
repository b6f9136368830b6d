use std::collections::HashSet;

use crate::boundary::BoundaryIndex;
use crate::error::{Error, Result};
use crate::span::{build_spans, total_len};
use crate::types::{Classification, Span, Token};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotated<'a, T> {
    pub token: &'a T,
    pub span: Span,
    pub class: Classification,
}

/// Classify each candidate span against the reference spans of the same line.
///
/// Offsets are taken as given; nothing checks that both sides cover the same
/// characters.
pub fn annotate_spans(reference: &[Span], candidate: &[Span]) -> Result<Vec<Classification>> {
    let index = BoundaryIndex::new(reference);
    let exact: HashSet<&Span> = reference.iter().collect();
    candidate
        .iter()
        .map(|span| {
            Ok(if !index.is_consistent(*span)? {
                Classification::Violating
            } else if exact.contains(span) {
                Classification::Matching
            } else {
                Classification::Divergent
            })
        })
        .collect()
}

/// Classify the candidate tokens of one line against its reference tokens.
///
/// Both sequences must concatenate to the same number of characters,
/// otherwise their offsets mean different things and
/// [`Error::LengthMismatch`] is returned.
pub fn annotate_line<'a, R: Token, C: Token>(
    reference: &[R],
    candidate: &'a [C],
) -> Result<Vec<Annotated<'a, C>>> {
    let (reference_len, candidate_len) = (total_len(reference), total_len(candidate));
    if reference_len != candidate_len {
        return Err(Error::LengthMismatch {
            reference: reference_len,
            candidate: candidate_len,
        });
    }
    let candidate_spans = build_spans(candidate);
    let classes = annotate_spans(&build_spans(reference), &candidate_spans)?;
    Ok(candidate
        .iter()
        .zip(candidate_spans)
        .zip(classes)
        .map(|((token, span), class)| Annotated { token, span, class })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use crate::types::Classification::*;

    fn classes(reference: &[&str], candidate: &[&str]) -> Vec<Classification> {
        annotate_line(reference, candidate)
            .unwrap()
            .into_iter()
            .map(|a| a.class)
            .collect()
    }

    #[test]
    fn identical_segmentation_matches() {
        assert_eq!(classes(&["ab", "c"], &["ab", "c"]), vec![Matching, Matching]);
    }

    #[test]
    fn finer_split_is_divergent() {
        assert_eq!(classes(&["abc"], &["ab", "c"]), vec![Divergent, Divergent]);
    }

    #[test]
    fn coarser_merge_is_divergent() {
        assert_eq!(
            classes(&["a", "b", "c", "de"], &["abc", "de"]),
            vec![Divergent, Matching]
        );
    }

    #[test]
    fn crossing_a_boundary_is_violating() {
        assert_eq!(classes(&["a", "bc"], &["ab", "c"]), vec![Violating, Divergent]);
    }

    #[test]
    fn annotations_carry_token_and_span() {
        let candidate = ["中国", "人民"];
        let annotated = annotate_line(&["中", "国人", "民"], &candidate).unwrap();
        assert_eq!(annotated.len(), 2);
        assert_eq!(*annotated[0].token, "中国");
        assert_eq!(annotated[0].span, Span::new(0, 2));
        assert_eq!(annotated[0].class, Violating);
        assert_eq!(annotated[1].span, Span::new(2, 4));
        assert_eq!(annotated[1].class, Violating);
    }

    #[test]
    fn empty_reference_makes_everything_divergent() {
        let candidate = build_spans(&["ab", "c"]);
        assert_eq!(
            annotate_spans(&[], &candidate).unwrap(),
            vec![Divergent, Divergent]
        );
    }

    #[test]
    fn empty_line_pair_is_fine() {
        let none: [&str; 0] = [];
        assert!(annotate_line(&none, &none).unwrap().is_empty());
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let err = annotate_line(&["abc"], &["ab"]).unwrap_err();
        assert!(matches!(
            err,
            Error::LengthMismatch {
                reference: 3,
                candidate: 2
            }
        ));
    }

    #[test]
    fn empty_candidate_token_is_reported() {
        let err = annotate_line(&["ab"], &["ab", ""]).unwrap_err();
        assert!(matches!(err, Error::EmptySpan(s) if s == Span::new(2, 2)));
    }

    proptest! {
        #[test]
        fn repeated_runs_agree(
            (reference, candidate) in "[a-d]{1,30}".prop_flat_map(|text| {
                let n = text.chars().count();
                (Just(text), prop::collection::vec(any::<bool>(), n - 1), prop::collection::vec(any::<bool>(), n - 1))
            }).prop_map(|(text, r, c)| (split_at_cuts(&text, &r), split_at_cuts(&text, &c)))
        ) {
            let first = annotate_line(&reference, &candidate).unwrap();
            let second = annotate_line(&reference, &candidate).unwrap();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn same_segmentation_always_matches(text in "[a-z]{1,30}", cuts in prop::collection::vec(any::<bool>(), 29)) {
            let n = text.chars().count();
            let tokens = split_at_cuts(&text, &cuts[..n - 1]);
            for a in annotate_line(&tokens, &tokens).unwrap() {
                prop_assert_eq!(a.class, Matching);
            }
        }
    }

    fn split_at_cuts(text: &str, cuts: &[bool]) -> Vec<String> {
        let mut tokens = vec![];
        let mut current = String::new();
        for (i, c) in text.chars().enumerate() {
            current.push(c);
            if cuts.get(i).copied().unwrap_or(false) {
                tokens.push(std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            tokens.push(current);
        }
        tokens
    }
}
