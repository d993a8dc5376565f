//! CLDR grammatical-number rules.
//!
//! A [`Rule`] is an OR of AND-groups of [`Relation`]s parsed from the
//! classic CLDR syntax (`n mod 10 is 1 and n mod 100 is not 11`). A
//! [`NumberRule`] maps a cardinal value to a [`Category`]; most languages use
//! one of the canned shapes, the rest keep a [`DefaultNumberRule`] built
//! from their CLDR definition. The [`PluralRegistry`] reads the CLDR
//! `plurals.xml` document and answers which rule applies to a language.

mod category;
mod number;
mod registry;
mod relation;
mod rule;

pub use category::{Category, UnknownCategory};
pub use number::{DefaultNumberRule, NumberRule};
pub use registry::PluralRegistry;
pub use relation::Relation;
pub use rule::Rule;
