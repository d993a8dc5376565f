//! OR-of-AND combinations of relations.

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use super::Relation;
use crate::{MessagesError, MessagesResult};

/// A CLDR plural rule such as `n mod 10 is 1 and n mod 100 is not 11`.
///
/// The rule matches when any of its AND-groups has every relation matching.
/// A rule without relations matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rule {
    groups: Vec<Vec<Relation>>,
}

impl Rule {
    /// Parses a rule, splitting on the `or` and `and` keywords.
    ///
    /// Tokens are separated by whitespace and `.`, so `2..4` yields the two
    /// bounds of a range.
    ///
    /// # Errors
    ///
    /// Returns [`MessagesError::RuleSyntax`] when any relation is malformed or
    /// a relation is followed by tokens other than `and` or `or`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use freecol_messages::Rule;
    ///
    /// let rule = Rule::parse("n mod 10 is 1 and n mod 100 is not 11").expect("valid rule");
    /// assert!(rule.matches(21.0));
    /// assert!(!rule.matches(11.0));
    /// ```
    pub fn parse(text: &str) -> MessagesResult<Self> {
        let tokens: Vec<&str> = text
            .split(|ch: char| ch.is_whitespace() || ch == '.')
            .filter(|token| !token.is_empty())
            .collect();
        if tokens.is_empty() {
            return Ok(Self::default());
        }

        let mut groups = Vec::new();
        for or_group in tokens.split(|token| token.eq_ignore_ascii_case("or")) {
            let mut relations = Vec::new();
            for and_group in or_group.split(|token| token.eq_ignore_ascii_case("and")) {
                let mut queue: VecDeque<&str> = and_group.iter().copied().collect();
                let relation = Relation::parse(&mut queue).map_err(|err| err.with_rule(text))?;
                if let Some(extra) = queue.front() {
                    return Err(MessagesError::rule_syntax(
                        text,
                        format!("unexpected token '{extra}' after relation"),
                    ));
                }
                relations.push(relation);
            }
            groups.push(relations);
        }
        Ok(Self { groups })
    }

    /// Returns `true` when any AND-group matches `value` completely.
    #[must_use]
    pub fn matches(&self, value: f64) -> bool {
        self.groups
            .iter()
            .any(|group| group.iter().all(|relation| relation.matches(value)))
    }

    /// Returns `true` when the rule holds no relations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl FromStr for Rule {
    type Err = MessagesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (group_index, group) in self.groups.iter().enumerate() {
            if group_index > 0 {
                f.write_str(" or ")?;
            }
            for (relation_index, relation) in group.iter().enumerate() {
                if relation_index > 0 {
                    f.write_str(" and ")?;
                }
                write!(f, "{relation}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sweep(rule: &Rule, oracle: impl Fn(u32) -> bool) {
        for n in 0..=200_u32 {
            assert_eq!(
                rule.matches(f64::from(n)),
                oracle(n),
                "rule '{rule}' disagrees with the oracle at {n}"
            );
        }
    }

    #[rstest]
    fn is_one_matches_only_one() {
        let rule = Rule::parse("n is 1").expect("rule should parse");
        sweep(&rule, |n| n == 1);
    }

    #[rstest]
    fn is_not_one_matches_everything_else() {
        let rule = Rule::parse("n is not 1").expect("rule should parse");
        sweep(&rule, |n| n != 1);
    }

    #[rstest]
    fn slavic_singular_rule() {
        let rule = Rule::parse("n mod 10 is 1 and n mod 100 is not 11").expect("rule should parse");
        sweep(&rule, |n| n.rem_euclid(10) == 1 && n.rem_euclid(100) != 11);
    }

    #[rstest]
    fn within_range_rule() {
        let rule = Rule::parse("n within 2..4").expect("rule should parse");
        sweep(&rule, |n| (2..=4).contains(&n));
        assert!(rule.matches(2.5));
    }

    #[rstest]
    fn or_groups_combine() {
        let rule = Rule::parse("n is 0 or n is not 1 and n mod 100 in 1..19")
            .expect("rule should parse");
        sweep(&rule, |n| n == 0 || (n != 1 && (1..=19).contains(&n.rem_euclid(100))));
    }

    #[rstest]
    fn empty_rule_matches_nothing() {
        let rule = Rule::parse("   ").expect("blank rule should parse");
        assert!(rule.is_empty());
        sweep(&rule, |_| false);
    }

    #[rstest]
    #[case("n is 1")]
    #[case("n mod 10 is 1 and n mod 100 is not 11")]
    #[case("n is 0 or n is not 1 and n mod 100 in 1..19")]
    #[case("n mod 10 in 2..4 and n mod 100 not in 12..14")]
    #[case("n within 0..2 and n is not 2")]
    fn display_round_trips(#[case] text: &str) {
        let rule: Rule = text.parse().expect("rule should parse");
        assert_eq!(rule.to_string(), text);
        assert_eq!(rule.to_string().parse::<Rule>().expect("reparse"), rule);
    }

    #[rstest]
    fn rejects_trailing_tokens() {
        let err = Rule::parse("n is 1 2").expect_err("trailing token should fail");
        assert!(err.to_string().contains("unexpected token '2'"));
    }

    #[rstest]
    fn relation_errors_report_the_whole_rule() {
        let err = Rule::parse("n is 1 and x is 2").expect_err("bad relation should fail");
        match err {
            MessagesError::RuleSyntax { rule, .. } => assert_eq!(rule, "n is 1 and x is 2"),
            other => panic!("expected RuleSyntax, got {other:?}"),
        }
    }
}
