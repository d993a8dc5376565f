//! A single grammatical comparison such as `n mod 10 in 2..4`.

use std::collections::VecDeque;
use std::fmt;

use crate::{MessagesError, MessagesResult};

/// One test applied to a cardinal value.
///
/// Relations are parsed from the tokens of a CLDR rule:
///
/// ```text
/// relation := "n" ["mod" INT] ["not"] ("is" ["not"] INT | ("in" | "within") INT INT)
/// ```
///
/// `in` ranges only match whole numbers, `within` ranges match any value
/// between the bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relation {
    low: i32,
    high: i32,
    modulus: i32,
    negated: bool,
    integer: bool,
}

impl Relation {
    /// Consumes one relation from the front of `tokens`.
    ///
    /// Tokens after the relation are left in place for the caller.
    ///
    /// # Errors
    ///
    /// Returns [`MessagesError::RuleSyntax`] when the tokens do not start with
    /// `n`, use an unknown operator, or carry a missing or non-numeric bound.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::VecDeque;
    /// use freecol_messages::Relation;
    ///
    /// let mut tokens: VecDeque<&str> = ["n", "mod", "10", "is", "1"].into();
    /// let relation = Relation::parse(&mut tokens).expect("valid relation");
    /// assert!(relation.matches(21.0));
    /// assert!(!relation.matches(12.0));
    /// ```
    pub fn parse(tokens: &mut VecDeque<&str>) -> MessagesResult<Self> {
        let context = tokens.iter().copied().collect::<Vec<_>>().join(" ");
        if tokens.pop_front() != Some("n") {
            return Err(MessagesError::rule_syntax(
                context,
                "Relation must start with 'n'",
            ));
        }

        let mut relation = Self {
            low: 0,
            high: 0,
            modulus: 1,
            negated: false,
            integer: true,
        };
        let mut token = next_token(tokens, &context)?;
        if token == "mod" {
            relation.modulus = next_int(tokens, &context)?;
            if relation.modulus == 0 {
                return Err(MessagesError::rule_syntax(context, "modulus must not be zero"));
            }
            token = next_token(tokens, &context)?;
        }
        if token == "not" {
            relation.negated = true;
            token = next_token(tokens, &context)?;
        }

        match token {
            "is" => {
                let mut value = next_token(tokens, &context)?;
                if value == "not" {
                    relation.negated = true;
                    value = next_token(tokens, &context)?;
                }
                let bound = parse_int(value, &context)?;
                relation.low = bound;
                relation.high = bound;
            }
            "in" | "within" => {
                relation.integer = token == "in";
                relation.low = next_int(tokens, &context)?;
                relation.high = next_int(tokens, &context)?;
            }
            other => {
                return Err(MessagesError::rule_syntax(
                    context,
                    format!("unknown operator '{other}'"),
                ));
            }
        }
        Ok(relation)
    }

    /// Returns `true` when `value` satisfies the relation.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "CLDR operands are reduced with a floating-point modulus"
    )]
    pub fn matches(&self, value: f64) -> bool {
        let effective = if self.modulus == 1 {
            value
        } else {
            value % f64::from(self.modulus)
        };
        if self.integer && effective.fract() != 0.0 {
            return false;
        }
        let inside = effective >= f64::from(self.low) && effective <= f64::from(self.high);
        inside != self.negated
    }

    /// Lower bound, inclusive.
    #[must_use]
    pub const fn low(&self) -> i32 {
        self.low
    }

    /// Upper bound, inclusive.
    #[must_use]
    pub const fn high(&self) -> i32 {
        self.high
    }

    /// Modulus applied before comparing; `1` means none.
    #[must_use]
    pub const fn modulus(&self) -> i32 {
        self.modulus
    }

    /// Whether the comparison result is inverted.
    #[must_use]
    pub const fn is_negated(&self) -> bool {
        self.negated
    }

    /// Whether non-integral values fail the relation outright.
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        self.integer
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("n")?;
        if self.modulus != 1 {
            write!(f, " mod {}", self.modulus)?;
        }
        if self.integer && self.low == self.high {
            f.write_str(" is")?;
            if self.negated {
                f.write_str(" not")?;
            }
            return write!(f, " {}", self.low);
        }
        if self.negated {
            f.write_str(" not")?;
        }
        let operator = if self.integer { "in" } else { "within" };
        write!(f, " {operator} {}..{}", self.low, self.high)
    }
}

fn next_token<'a>(tokens: &mut VecDeque<&'a str>, context: &str) -> MessagesResult<&'a str> {
    tokens
        .pop_front()
        .ok_or_else(|| MessagesError::rule_syntax(context, "unexpected end of relation"))
}

fn next_int(tokens: &mut VecDeque<&str>, context: &str) -> MessagesResult<i32> {
    let token = next_token(tokens, context)?;
    parse_int(token, context)
}

fn parse_int(token: &str, context: &str) -> MessagesResult<i32> {
    token.parse().map_err(|_| {
        MessagesError::rule_syntax(context, format!("expected an integer, found '{token}'"))
    })
}
