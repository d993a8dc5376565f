//! Splitting patterns into literal text and `{{tag:selector|body}}` spans.
//!
//! Spans are delimited by `{{` and the matching `}}`; nested spans are
//! balanced by counting adjacent brace pairs. Single braces are ordinary
//! text.

/// Piece of a pattern produced by [`parse_segments`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Segment<'a> {
    /// Text copied to the output unchanged.
    Literal(&'a str),
    /// A well-formed choice span.
    Choice(Choice<'a>),
    /// A balanced span that is not a choice; it is dropped.
    Malformed {
        /// Text between the outer braces.
        span: &'a str,
        /// What is missing.
        problem: Problem,
    },
    /// A `{{` without a matching `}}`; nothing after it is produced.
    Unterminated,
}

/// Reason a balanced span could not be read as a choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Problem {
    /// No `:` separating the tag.
    MissingTag,
    /// No `|` after the selector.
    MissingChoices,
}

impl Problem {
    pub(super) const fn describe(self) -> &'static str {
        match self {
            Self::MissingTag => "choice span has no tag",
            Self::MissingChoices => "choice span has no branches",
        }
    }
}

/// `{{tag:selector|body}}` split at its first `:` and the first `|` after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Choice<'a> {
    pub(super) tag: &'a str,
    pub(super) selector: &'a str,
    pub(super) body: &'a str,
}

/// Splits `input` into literal runs and brace spans in order.
///
/// An unmatched `{{` ends the list with [`Segment::Unterminated`].
pub(super) fn parse_segments(input: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut rest = input;
    while let Some(open) = rest.find("{{") {
        let (literal, tail) = rest.split_at(open);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }
        let inner = tail.get(2..).unwrap_or_default();
        let Some(close) = find_matching_bracket(inner) else {
            segments.push(Segment::Unterminated);
            return segments;
        };
        let (span, after) = inner.split_at(close);
        segments.push(parse_span(span));
        rest = after.get(2..).unwrap_or_default();
    }
    if !rest.is_empty() {
        segments.push(Segment::Literal(rest));
    }
    segments
}

fn parse_span(span: &str) -> Segment<'_> {
    let Some((tag, rest)) = span.split_once(':') else {
        return Segment::Malformed {
            span,
            problem: Problem::MissingTag,
        };
    };
    let Some((selector, body)) = rest.split_once('|') else {
        return Segment::Malformed {
            span,
            problem: Problem::MissingChoices,
        };
    };
    Segment::Choice(Choice {
        tag,
        selector,
        body,
    })
}

/// Byte offset of the `}}` closing a span whose `{{` precedes `text`.
///
/// Nested `{{` raise the depth and each `}}` lowers it; only adjacent
/// braces form a pair.
pub(super) fn find_matching_bracket(text: &str) -> Option<usize> {
    let mut depth = 0_usize;
    let mut last = None;
    for (index, byte) in text.bytes().enumerate() {
        match (byte, last) {
            (b'{', Some(b'{')) => {
                depth += 1;
                last = None;
            }
            (b'}', Some(b'}')) => {
                if depth == 0 {
                    return Some(index - 1);
                }
                depth -= 1;
                last = None;
            }
            (b'{' | b'}', _) => last = Some(byte),
            _ => last = None,
        }
    }
    None
}

/// Text of the branch labelled by `selector` in `body`.
///
/// The label is found by substring search, so the first occurrence of
/// `selector` anywhere in `body` is taken as the label and the character
/// after it as the `=`. The branch runs to the next `|` outside nested
/// spans, or to the end of `body`.
pub(super) fn branch_text<'a>(body: &'a str, selector: &str) -> Option<&'a str> {
    let found = body.find(selector)?;
    let start = found + selector.len() + 1;
    let branch = body.get(start..)?;
    let mut offset = 0;
    loop {
        let tail = branch.get(offset..)?;
        let pipe = tail.find('|');
        match tail.find("{{") {
            Some(open) if pipe.is_none_or(|next| open < next) => {
                let nested = tail.get(open + 2..)?;
                let Some(close) = find_matching_bracket(nested) else {
                    return Some(branch);
                };
                offset += open + 2 + close + 2;
            }
            _ => {
                return Some(match pipe {
                    Some(end) => branch.get(..offset + end)?,
                    None => branch,
                });
            }
        }
    }
}

/// Value following `key=` in a raw pattern, ending at `|` or `}}`.
///
/// Nested spans are not skipped.
pub(super) fn choice_value<'a>(pattern: &'a str, key: &str) -> Option<&'a str> {
    let found = pattern.find(key)?;
    let rest = pattern.get(found + key.len() + 1..)?;
    let end = rest.find('|').or_else(|| rest.find("}}"))?;
    rest.get(..end)
}

/// Value of a literal `default=` branch in `body`, up to the next `|`.
pub(super) fn default_branch(body: &str) -> Option<&str> {
    let (_, rest) = body.split_once("default=")?;
    Some(rest.split_once('|').map_or(rest, |(value, _)| value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("a}}", Some(1))]
    #[case("a{{b}}c}}", Some(7))]
    #[case("{{x}}{{y}}}}", Some(10))]
    #[case("a} }", None)]
    #[case("a{ {b}}", Some(5))]
    #[case("never closed", None)]
    fn matching_bracket_counts_adjacent_pairs(#[case] text: &str, #[case] expected: Option<usize>) {
        assert_eq!(find_matching_bracket(text), expected);
    }

    #[rstest]
    fn segments_split_literals_and_choices() {
        let segments = parse_segments("a {{plural:%n%|one=x|other=y}} b");
        assert_eq!(
            segments,
            vec![
                Segment::Literal("a "),
                Segment::Choice(Choice {
                    tag: "plural",
                    selector: "%n%",
                    body: "one=x|other=y",
                }),
                Segment::Literal(" b"),
            ]
        );
    }

    #[rstest]
    fn nested_spans_stay_inside_the_outer_body() {
        let segments = parse_segments("{{t:|a={{u:|b=c}}|d=e}}");
        assert_eq!(
            segments,
            vec![Segment::Choice(Choice {
                tag: "t",
                selector: "",
                body: "a={{u:|b=c}}|d=e",
            })]
        );
    }

    #[rstest]
    #[case("{{nocolon}}", Problem::MissingTag)]
    #[case("{{tag:nopipe}}", Problem::MissingChoices)]
    fn malformed_spans_are_reported(#[case] input: &str, #[case] problem: Problem) {
        assert!(matches!(
            parse_segments(input).as_slice(),
            [Segment::Malformed { problem: found, .. }] if *found == problem
        ));
    }

    #[rstest]
    fn unterminated_span_ends_the_segments() {
        assert_eq!(
            parse_segments("before {{plural:1|one=x"),
            vec![Segment::Literal("before "), Segment::Unterminated]
        );
    }

    #[rstest]
    #[case("one=x|other=y", "one", Some("x"))]
    #[case("one=x|other=y", "other", Some("y"))]
    #[case("one={{t:|a=b|c=d}}|other=y", "one", Some("{{t:|a=b|c=d}}"))]
    #[case("one={{t:|a=b}}{{t:|c=d}}|other=y", "one", Some("{{t:|a=b}}{{t:|c=d}}"))]
    #[case("one=x|other=y", "few", None)]
    #[case("other", "other", None)]
    fn branch_text_skips_nested_spans(
        #[case] body: &str,
        #[case] selector: &str,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(branch_text(body, selector), expected);
    }

    #[rstest]
    #[case("{{plural:|one=colonist|other=colonists}}", "other", Some("colonists"))]
    #[case("{{plural:|one=colonist|other=colonists}}", "one", Some("colonist"))]
    #[case("{{plural:|one=colonist", "one", None)]
    #[case("plain text", "one", None)]
    fn choice_value_reads_raw_patterns(
        #[case] pattern: &str,
        #[case] key: &str,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(choice_value(pattern, key), expected);
    }

    #[rstest]
    #[case("acc=X|default=Y", Some("Y"))]
    #[case("default=Y|acc=X", Some("Y"))]
    #[case("acc=X", None)]
    fn default_branch_is_found_by_label(#[case] body: &str, #[case] expected: Option<&str>) {
        assert_eq!(default_branch(body), expected);
    }
}
