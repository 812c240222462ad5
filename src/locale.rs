//! Built-in plural rules for the CLI.
//!
//! A CLDR subset covering the most common language families. The core never
//! looks at locales; it only sees the [`PluralResolver`] these rules implement.

use crate::core::{PluralCategory, translate::PluralResolver};

/// Plural rule family of a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalePluralRules {
    /// `one` for 1, `other` otherwise (en, de, es, it, ...).
    English,
    /// `one` for 0 <= n < 2 (fr, hi, bn).
    French,
    /// `one`/`few`/`many` by last digits (ru, uk, be).
    EastSlavic,
    /// `one`/`few`/`other` by last digits of the integer or fraction (hr, sr, bs).
    SerboCroatian,
    /// `one` for 1, `few`/`many` by last digits (pl).
    Polish,
    /// All six categories (ar).
    Arabic,
    /// No plural distinction (zh, ja, ko, ...).
    NoPlural,
}

impl LocalePluralRules {
    /// Rules for a locale tag (`"en"`, `"pt-BR"`, `"zh_Hant"`).
    ///
    /// Unknown languages use English rules.
    pub fn for_locale(locale: &str) -> Self {
        let primary = locale.split(['-', '_']).next().unwrap_or(locale);

        match primary.to_ascii_lowercase().as_str() {
            "fr" | "hi" | "bn" => Self::French,
            "ru" | "uk" | "be" => Self::EastSlavic,
            "hr" | "sr" | "bs" | "sh" => Self::SerboCroatian,
            "pl" => Self::Polish,
            "ar" => Self::Arabic,
            "zh" | "ja" | "ko" | "th" | "vi" | "id" | "ms" => Self::NoPlural,
            _ => Self::English,
        }
    }
}

impl PluralResolver for LocalePluralRules {
    fn category_for(&self, value: f64) -> PluralCategory {
        let value = value.abs();
        if !value.is_finite() {
            return PluralCategory::Other;
        }

        // Fractions are `other` everywhere except French, which keys on the
        // integer part, and Serbo-Croatian, which keys on the fraction digits.
        let integral = value.fract() == 0.0;
        match self {
            Self::French => french_rule(value),
            Self::SerboCroatian if integral => serbo_croatian_rule(value as u64),
            Self::SerboCroatian => serbo_croatian_rule(fraction_tail(value)),
            Self::NoPlural => PluralCategory::Other,
            _ if !integral => PluralCategory::Other,
            Self::English => english_rule(value as u64),
            Self::EastSlavic => east_slavic_rule(value as u64),
            Self::Polish => polish_rule(value as u64),
            Self::Arabic => arabic_rule(value as u64),
        }
    }
}

fn english_rule(n: u64) -> PluralCategory {
    if n == 1 {
        PluralCategory::One
    } else {
        PluralCategory::Other
    }
}

fn french_rule(n: f64) -> PluralCategory {
    if n < 2.0 {
        PluralCategory::One
    } else {
        PluralCategory::Other
    }
}

fn east_slavic_rule(n: u64) -> PluralCategory {
    let mod10 = n % 10;
    let mod100 = n % 100;

    if mod10 == 1 && mod100 != 11 {
        PluralCategory::One
    } else if (2..=4).contains(&mod10) && !(12..=14).contains(&mod100) {
        PluralCategory::Few
    } else {
        PluralCategory::Many
    }
}

/// Integers and fraction digits share one rule: `one` for ..1, `few` for
/// ..2-..4, except the teens.
fn serbo_croatian_rule(n: u64) -> PluralCategory {
    let mod10 = n % 10;
    let mod100 = n % 100;

    if mod10 == 1 && mod100 != 11 {
        PluralCategory::One
    } else if (2..=4).contains(&mod10) && !(12..=14).contains(&mod100) {
        PluralCategory::Few
    } else {
        PluralCategory::Other
    }
}

/// Last two visible fraction digits of `value` (`2.13` -> 13, `0.5` -> 5).
fn fraction_tail(value: f64) -> u64 {
    let text = value.to_string();
    let fraction = text.split_once('.').map_or("", |(_, f)| f);
    let tail = &fraction[fraction.len().saturating_sub(2)..];
    tail.parse().unwrap_or(0)
}

fn polish_rule(n: u64) -> PluralCategory {
    let mod10 = n % 10;
    let mod100 = n % 100;

    if n == 1 {
        PluralCategory::One
    } else if (2..=4).contains(&mod10) && !(12..=14).contains(&mod100) {
        PluralCategory::Few
    } else {
        PluralCategory::Many
    }
}

fn arabic_rule(n: u64) -> PluralCategory {
    let mod100 = n % 100;
    match n {
        0 => PluralCategory::Zero,
        1 => PluralCategory::One,
        2 => PluralCategory::Two,
        _ if (3..=10).contains(&mod100) => PluralCategory::Few,
        _ if (11..=99).contains(&mod100) => PluralCategory::Many,
        _ => PluralCategory::Other,
    }
}
