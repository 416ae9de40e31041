//! Closed vocabularies for provider-defined string codes.
//!
//! Providers key several structures by free-form strings (performance windows,
//! link kinds). Those strings are mapped onto the enums below. Mapping from a
//! variant to its code is total; the reverse is partial and yields `None` for
//! codes we do not know, so callers drop the entry instead of failing.

use serde::{Deserialize, Serialize};

/// A closed enumeration with exactly one canonical provider code per variant.
pub trait ClosedCode: Copy + Eq + 'static {
    /// Every variant, in declaration order.
    const ALL: &'static [Self];

    /// Canonical code for this variant.
    fn code(self) -> &'static str;

    /// Resolves a provider code. Unknown codes are a modeled outcome, not an error.
    fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|variant| variant.code() == code)
    }
}

/// Time window used for performance tables and chart requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TimePeriod {
    #[serde(rename = "1d")]
    Day1,
    #[serde(rename = "1w")]
    Week1,
    #[serde(rename = "2w")]
    Week2,
    #[serde(rename = "1m")]
    Month1,
    #[serde(rename = "3m")]
    Month3,
    #[serde(rename = "6m")]
    Month6,
    #[serde(rename = "1y")]
    Year1,
}

impl ClosedCode for TimePeriod {
    const ALL: &'static [Self] = &[
        TimePeriod::Day1,
        TimePeriod::Week1,
        TimePeriod::Week2,
        TimePeriod::Month1,
        TimePeriod::Month3,
        TimePeriod::Month6,
        TimePeriod::Year1,
    ];

    fn code(self) -> &'static str {
        match self {
            TimePeriod::Day1 => "1d",
            TimePeriod::Week1 => "1w",
            TimePeriod::Week2 => "2w",
            TimePeriod::Month1 => "1m",
            TimePeriod::Month3 => "3m",
            TimePeriod::Month6 => "6m",
            TimePeriod::Year1 => "1y",
        }
    }
}

/// Kind of external link attached to a coin overview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkType {
    Guide,
    Website,
    Whitepaper,
    Twitter,
    Telegram,
    Reddit,
    Github,
}

impl ClosedCode for LinkType {
    const ALL: &'static [Self] = &[
        LinkType::Guide,
        LinkType::Website,
        LinkType::Whitepaper,
        LinkType::Twitter,
        LinkType::Telegram,
        LinkType::Reddit,
        LinkType::Github,
    ];

    fn code(self) -> &'static str {
        match self {
            LinkType::Guide => "guide",
            LinkType::Website => "website",
            LinkType::Whitepaper => "whitepaper",
            LinkType::Twitter => "twitter",
            LinkType::Telegram => "telegram",
            LinkType::Reddit => "reddit",
            LinkType::Github => "github",
        }
    }
}
