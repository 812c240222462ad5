use crate::core::data::PluralCategory;

/// Maps a number to its plural category for one locale.
///
/// Locale sensitivity lives entirely here; the translator never inspects locales.
pub trait PluralResolver {
    fn category_for(&self, value: f64) -> PluralCategory;
}

impl<F> PluralResolver for F
where
    F: Fn(f64) -> PluralCategory,
{
    fn category_for(&self, value: f64) -> PluralCategory {
        self(value)
    }
}
