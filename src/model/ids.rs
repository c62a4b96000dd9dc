// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Aislemap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Aislemap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::Borrow;
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use smol_str::SmolStr;

static CATEGORY_SEPARATORS: OnceLock<Regex> = OnceLock::new();

/// A stable identifier used across the store model and protocol surfaces.
///
/// Ids are short, so they are kept inline in a [`SmolStr`]. The only structural rule is that an
/// id is non-empty and contains no whitespace; product-specific patterns are checked when a
/// [`Store`](super::Store) is built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id<T> {
    value: SmolStr,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    pub fn new(value: impl AsRef<str>) -> Result<Self, IdError> {
        let value = value.as_ref();
        validate_id(value)?;
        Ok(Self {
            value: SmolStr::new(value),
            _marker: PhantomData,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn into_string(self) -> String {
        self.value.to_string()
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl<T> AsRef<str> for Id<T> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl<T> Borrow<str> for Id<T> {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl<T> FromStr for Id<T> {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl<T> TryFrom<String> for Id<T> {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdError {
    Empty,
    ContainsWhitespace,
}

impl fmt::Display for IdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("id must not be empty"),
            Self::ContainsWhitespace => f.write_str("id must not contain whitespace"),
        }
    }
}

impl std::error::Error for IdError {}

fn validate_id(value: &str) -> Result<(), IdError> {
    if value.is_empty() {
        return Err(IdError::Empty);
    }
    if value.chars().any(char::is_whitespace) {
        return Err(IdError::ContainsWhitespace);
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionIdTag {}
pub type SectionId = Id<SectionIdTag>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProductIdTag {}
pub type ProductId = Id<ProductIdTag>;

/// Derives the section id a product category is filed under.
///
/// The category is lowercased, every whitespace run becomes `-` (a standalone `&` together with
/// the whitespace around it collapses into a single `-`), and the result is prefixed with
/// `section-`. `"Meat & Seafood"` becomes `section-meat-seafood`.
pub fn section_id(category: &str) -> SectionId {
    let separators = CATEGORY_SEPARATORS
        .get_or_init(|| Regex::new(r"\s+&\s+|\s+").expect("static pattern"));
    let slug = format!(
        "section-{}",
        separators.replace_all(&category.to_lowercase(), "-")
    );

    Id {
        value: SmolStr::new(slug),
        _marker: PhantomData,
    }
}

#[cfg(test)]
mod tests {
    use super::{section_id, Id, IdError};

    #[test]
    fn id_rejects_empty() {
        let result: Result<Id<()>, _> = Id::new("");
        assert_eq!(result, Err(IdError::Empty));
    }

    #[test]
    fn id_rejects_whitespace() {
        let result: Result<Id<()>, _> = Id::new("P 001");
        assert_eq!(result, Err(IdError::ContainsWhitespace));
    }

    #[test]
    fn section_id_slugs_plain_categories() {
        assert_eq!(section_id("Produce").as_str(), "section-produce");
        assert_eq!(section_id("Frozen Foods").as_str(), "section-frozen-foods");
    }

    #[test]
    fn section_id_collapses_spaced_ampersand() {
        assert_eq!(section_id("Meat & Seafood").as_str(), "section-meat-seafood");
        assert_eq!(section_id("Meat  &\tSeafood").as_str(), "section-meat-seafood");
    }

    #[test]
    fn section_id_keeps_unspaced_ampersand() {
        assert_eq!(section_id("Salt&Pepper").as_str(), "section-salt&pepper");
        assert_eq!(section_id("Salt &Pepper").as_str(), "section-salt-&pepper");
    }

    #[test]
    fn section_id_is_total_on_odd_input() {
        assert_eq!(section_id("").as_str(), "section-");
        assert_eq!(section_id(" Dairy ").as_str(), "section--dairy-");
    }
}
