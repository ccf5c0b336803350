//! Rule-based pluralization for English nouns
//!
//! Words are checked against the uncountable and ambiguous lists first, then
//! against the irregular table, then against the ordered suffix rules. Words
//! that match nothing fall back to appending (or dropping) a trailing `s`,
//! unless they already look like the requested form.

use super::rule::RuleTable;
use super::tables::{AMBIGUOUS, IRREGULAR, PLURAL_RULES, SINGULAR_RULES, UNCOUNTABLE};
use std::sync::OnceLock;

/// Conversion between singular and plural noun forms
pub trait Inflect: Send + Sync {
    /// Plural form of `word` (e.g. `Author` → `Authors`)
    fn plural_form(&self, word: &str) -> String;

    /// Singular form of `word` (e.g. `Authors` → `Author`)
    fn singular_form(&self, word: &str) -> String;

    /// Whether `word` looks like a plural noun
    fn is_plural(&self, word: &str) -> bool;

    /// Whether `word` looks like a singular noun
    fn is_singular(&self, word: &str) -> bool;
}

/// English inflection engine backed by the built-in tables
///
/// The tables are compiled once in [`EnglishPluralizer::new`] and never
/// change afterwards, so a single instance can be shared freely between
/// threads. Most callers should use [`EnglishPluralizer::shared`] or the
/// [`Pluralizer`] shortcuts.
#[derive(Debug, Clone)]
pub struct EnglishPluralizer {
    plural: RuleTable,
    singular: RuleTable,
    irregular_plural: RuleTable,
    irregular_singular: RuleTable,
}

impl EnglishPluralizer {
    pub fn new() -> Self {
        let engine = Self {
            plural: compile(RuleTable::from_patterns(PLURAL_RULES)),
            singular: compile(RuleTable::from_patterns(SINGULAR_RULES)),
            irregular_plural: compile(RuleTable::from_literals(IRREGULAR)),
            irregular_singular: compile(RuleTable::from_literals_inverted(IRREGULAR)),
        };
        tracing::debug!(
            plural_rules = engine.plural.len(),
            singular_rules = engine.singular.len(),
            irregular = engine.irregular_plural.len(),
            "inflection tables compiled"
        );
        engine
    }

    /// Process-wide instance, built on first use
    pub fn shared() -> &'static Self {
        static ENGINE: OnceLock<EnglishPluralizer> = OnceLock::new();
        ENGINE.get_or_init(Self::new)
    }

    fn is_uncountable(word: &str) -> bool {
        UNCOUNTABLE.contains(&word.to_lowercase().as_str())
    }

    fn is_ambiguous(word: &str) -> bool {
        let lower = word.to_lowercase();
        AMBIGUOUS.iter().any(|suffix| lower.ends_with(suffix))
    }
}

impl Default for EnglishPluralizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Inflect for EnglishPluralizer {
    fn plural_form(&self, word: &str) -> String {
        if word.is_empty() || Self::is_uncountable(word) || Self::is_ambiguous(word) {
            return word.to_string();
        }

        if let Some(plural) = self.irregular_plural.rewrite(word) {
            return restore_initial_case(word, plural);
        }

        if let Some(plural) = self.plural.rewrite(word) {
            return restore_initial_case(word, plural);
        }

        if self.is_plural(word) {
            return word.to_string();
        }

        format!("{}s", word)
    }

    fn singular_form(&self, word: &str) -> String {
        if word.is_empty() || Self::is_uncountable(word) || Self::is_ambiguous(word) {
            return word.to_string();
        }

        if let Some(singular) = self.irregular_singular.rewrite(word) {
            return restore_initial_case(word, singular);
        }

        if let Some(singular) = self.singular.rewrite(word) {
            return restore_initial_case(word, singular);
        }

        if self.is_singular(word) {
            return word.to_string();
        }

        let mut singular = word.to_string();
        singular.pop();
        singular
    }

    fn is_plural(&self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        if Self::is_uncountable(word) || Self::is_ambiguous(word) {
            return true;
        }

        self.irregular_singular.matches(word)
            || self.singular.matches(word)
            || ends_with_s(word)
    }

    fn is_singular(&self, word: &str) -> bool {
        if word.is_empty() || Self::is_uncountable(word) {
            return true;
        }
        // Ambiguous words read as plural even when the suffix rules disagree
        if Self::is_ambiguous(word) {
            return false;
        }

        self.irregular_plural.matches(word) || self.plural.matches(word) || !ends_with_s(word)
    }
}

fn ends_with_s(word: &str) -> bool {
    word.ends_with(['s', 'S'])
}

/// Uppercase the first character of `result` when `original` started with an
/// ASCII capital. The rest of the casing is left alone.
fn restore_initial_case(original: &str, result: String) -> String {
    let capitalized = original
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_uppercase());
    if !capitalized {
        return result;
    }

    let mut chars = result.chars();
    match chars.next() {
        Some(first) => format!("{}{}", first.to_ascii_uppercase(), chars.as_str()),
        None => result,
    }
}

fn compile(table: Result<RuleTable, regex::Error>) -> RuleTable {
    table.expect("built-in inflection rules must be valid patterns")
}

/// Shortcuts over the shared [`EnglishPluralizer`]
pub struct Pluralizer;

impl Pluralizer {
    /// Convert a singular noun to its plural form
    ///
    /// # Examples
    ///
    /// ```
    /// use pluralizer::core::pluralize::Pluralizer;
    ///
    /// assert_eq!(Pluralizer::pluralize("user"), "users");
    /// assert_eq!(Pluralizer::pluralize("country"), "countries");
    /// assert_eq!(Pluralizer::pluralize("Vertex"), "Vertices");
    /// assert_eq!(Pluralizer::pluralize("wife"), "wives");
    /// ```
    pub fn pluralize(singular: &str) -> String {
        EnglishPluralizer::shared().plural_form(singular)
    }

    /// Convert a plural noun to its singular form
    ///
    /// # Examples
    ///
    /// ```
    /// use pluralizer::core::pluralize::Pluralizer;
    ///
    /// assert_eq!(Pluralizer::singularize("users"), "user");
    /// assert_eq!(Pluralizer::singularize("Men"), "Man");
    /// assert_eq!(Pluralizer::singularize("matrices"), "matrix");
    /// ```
    pub fn singularize(plural: &str) -> String {
        EnglishPluralizer::shared().singular_form(plural)
    }

    pub fn is_plural(word: &str) -> bool {
        EnglishPluralizer::shared().is_plural(word)
    }

    pub fn is_singular(word: &str) -> bool {
        EnglishPluralizer::shared().is_singular(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pluralize_regular() {
        assert_eq!(Pluralizer::pluralize("user"), "users");
        assert_eq!(Pluralizer::pluralize("User"), "Users");
        assert_eq!(Pluralizer::pluralize("apple"), "apples");
        assert_eq!(Pluralizer::pluralize("glove"), "gloves");
    }

    #[test]
    fn test_pluralize_y_ending() {
        assert_eq!(Pluralizer::pluralize("country"), "countries");
        assert_eq!(Pluralizer::pluralize("Country"), "Countries");

        // Vowel + y = just add s
        assert_eq!(Pluralizer::pluralize("day"), "days");
        assert_eq!(Pluralizer::pluralize("key"), "keys");
        assert_eq!(Pluralizer::pluralize("boy"), "boys");
    }

    #[test]
    fn test_pluralize_sibilants() {
        assert_eq!(Pluralizer::pluralize("address"), "addresses");
        assert_eq!(Pluralizer::pluralize("tax"), "taxes");
        assert_eq!(Pluralizer::pluralize("church"), "churches");
        assert_eq!(Pluralizer::pluralize("dish"), "dishes");
        assert_eq!(Pluralizer::pluralize("bus"), "buses");
    }

    #[test]
    fn test_pluralize_f_endings() {
        assert_eq!(Pluralizer::pluralize("knife"), "knives");
        assert_eq!(Pluralizer::pluralize("life"), "lives");
        assert_eq!(Pluralizer::pluralize("wolf"), "wolves");
        assert_eq!(Pluralizer::pluralize("half"), "halves");
        assert_eq!(Pluralizer::pluralize("dwarf"), "dwarves");
    }

    #[test]
    fn test_pluralize_o_endings() {
        assert_eq!(Pluralizer::pluralize("tomato"), "tomatoes");
        assert_eq!(Pluralizer::pluralize("buffalo"), "buffaloes");
        assert_eq!(Pluralizer::pluralize("video"), "videos");
        assert_eq!(Pluralizer::pluralize("photo"), "photos");
        assert_eq!(Pluralizer::pluralize("typo"), "typos");
    }

    #[test]
    fn test_pluralize_capture_groups() {
        assert_eq!(Pluralizer::pluralize("vertex"), "vertices");
        assert_eq!(Pluralizer::pluralize("Index"), "Indices");
        assert_eq!(Pluralizer::pluralize("cactus"), "cacti");
        assert_eq!(Pluralizer::pluralize("Alumnus"), "Alumni");
    }

    #[test]
    fn test_pluralize_suffix_precedence() {
        assert_eq!(Pluralizer::pluralize("crisis"), "crises");
        assert_eq!(Pluralizer::pluralize("axis"), "axes");
        assert_eq!(Pluralizer::pluralize("quiz"), "quizzes");
        assert_eq!(Pluralizer::pluralize("protozoon"), "protozoa");
    }

    #[test]
    fn test_pluralize_protected_suffixes() {
        assert_eq!(Pluralizer::pluralize("arthritis"), "arthritis");
        assert_eq!(Pluralizer::pluralize("Iroquois"), "Iroquois");
    }

    #[test]
    fn test_singularize_protected_suffixes() {
        assert_eq!(Pluralizer::singularize("arthritis"), "arthritis");
        assert_eq!(Pluralizer::singularize("Iroquois"), "Iroquois");
        assert_eq!(Pluralizer::singularize("smallpox"), "smallpox");
    }

    #[test]
    fn test_pluralize_irregular_compound() {
        assert_eq!(Pluralizer::pluralize("webman"), "webmen");
        assert_eq!(Pluralizer::pluralize("Woman"), "Women");
        assert_eq!(Pluralizer::pluralize("grandchild"), "grandchildren");
    }

    #[test]
    fn test_pluralize_already_plural() {
        assert_eq!(Pluralizer::pluralize("users"), "users");
        assert_eq!(Pluralizer::pluralize("Apples"), "Apples");
    }

    #[test]
    fn test_pluralize_ambiguous() {
        assert_eq!(Pluralizer::pluralize("data"), "data");
        assert_eq!(Pluralizer::pluralize("Metadata"), "Metadata");
        assert_eq!(Pluralizer::pluralize("criteria"), "criteria");
        assert_eq!(Pluralizer::pluralize("menu"), "menus");
    }

    #[test]
    fn test_singularize_regular() {
        assert_eq!(Pluralizer::singularize("users"), "user");
        assert_eq!(Pluralizer::singularize("Apples"), "Apple");
        assert_eq!(Pluralizer::singularize("gloves"), "glove");
    }

    #[test]
    fn test_singularize_rules() {
        assert_eq!(Pluralizer::singularize("countries"), "country");
        assert_eq!(Pluralizer::singularize("churches"), "church");
        assert_eq!(Pluralizer::singularize("addresses"), "address");
        assert_eq!(Pluralizer::singularize("buses"), "bus");
        assert_eq!(Pluralizer::singularize("crises"), "crisis");
        assert_eq!(Pluralizer::singularize("knives"), "knife");
        assert_eq!(Pluralizer::singularize("wolves"), "wolf");
    }

    #[test]
    fn test_singularize_xes_maps_to_x() {
        assert_eq!(Pluralizer::singularize("taxes"), "tax");
        assert_eq!(Pluralizer::singularize("boxes"), "box");
        assert_eq!(Pluralizer::singularize("axes"), "ax");
    }

    #[test]
    fn test_singularize_capture_groups() {
        assert_eq!(Pluralizer::singularize("vertices"), "vertex");
        assert_eq!(Pluralizer::singularize("Indices"), "Index");
        assert_eq!(Pluralizer::singularize("cacti"), "cactus");
        assert_eq!(Pluralizer::singularize("Tomatoes"), "Tomato");
    }

    #[test]
    fn test_singularize_irregular() {
        assert_eq!(Pluralizer::singularize("men"), "man");
        assert_eq!(Pluralizer::singularize("Men"), "Man");
        assert_eq!(Pluralizer::singularize("matrices"), "matrix");
        assert_eq!(Pluralizer::singularize("Feet"), "Foot");
        assert_eq!(Pluralizer::singularize("children"), "child");
    }

    #[test]
    fn test_singularize_us_plural() {
        assert_eq!(Pluralizer::singularize("food_menus"), "food_menu");
        assert_eq!(Pluralizer::singularize("Menus"), "Menu");
        assert!(Pluralizer::is_singular("food_menus"));
    }

    #[test]
    fn test_singularize_already_singular() {
        assert_eq!(Pluralizer::singularize("child"), "child");
        assert_eq!(Pluralizer::singularize("apple"), "apple");
        assert_eq!(Pluralizer::singularize("bus"), "bus");
    }

    #[test]
    fn test_uncountable_is_unchanged() {
        for word in ["sheep", "Sheep", "news", "NEWS", "people", "Equipment"] {
            assert_eq!(Pluralizer::pluralize(word), word);
            assert_eq!(Pluralizer::singularize(word), word);
        }
    }

    #[test]
    fn test_pluralize_empty_string() {
        assert_eq!(Pluralizer::pluralize(""), "");
    }

    #[test]
    fn test_singularize_empty_string() {
        assert_eq!(Pluralizer::singularize(""), "");
    }

    #[test]
    fn test_is_plural() {
        assert!(Pluralizer::is_plural("users"));
        assert!(Pluralizer::is_plural("men"));
        assert!(Pluralizer::is_plural("cacti"));
        assert!(Pluralizer::is_plural("sheep"));
        assert!(!Pluralizer::is_plural("user"));
        assert!(!Pluralizer::is_plural("man"));
        assert!(!Pluralizer::is_plural(""));
    }

    #[test]
    fn test_is_singular() {
        assert!(Pluralizer::is_singular("user"));
        assert!(Pluralizer::is_singular("bus"));
        assert!(Pluralizer::is_singular("crisis"));
        assert!(Pluralizer::is_singular("sheep"));
        assert!(Pluralizer::is_singular(""));
        assert!(!Pluralizer::is_singular("users"));
    }

    #[test]
    fn test_is_singular_rejects_ambiguous() {
        assert!(!Pluralizer::is_singular("data"));
        assert!(!Pluralizer::is_singular("Media"));
    }

    #[test]
    fn test_ambiguous_words_in_both_directions() {
        for word in AMBIGUOUS {
            assert_eq!(Pluralizer::pluralize(word), *word);
            assert_eq!(Pluralizer::singularize(word), *word);
            assert!(Pluralizer::is_plural(word), "is_plural({})", word);
        }
        assert_eq!(Pluralizer::singularize("Metadata"), "Metadata");
        assert_eq!(Pluralizer::singularize("MULTIMEDIA"), "MULTIMEDIA");
    }

    #[test]
    fn test_trailing_s_ignores_case() {
        assert_eq!(Pluralizer::pluralize("USERS"), "USERS");
        assert_eq!(Pluralizer::pluralize("APPLES"), "APPLES");
        assert_eq!(Pluralizer::singularize("USERS"), "USER");
        assert_eq!(Pluralizer::singularize("APPLES"), "APPLE");
        assert_eq!(Pluralizer::singularize("UsErS"), "UsEr");

        assert!(Pluralizer::is_plural("USERS"));
        assert!(!Pluralizer::is_singular("USERS"));
        assert!(Pluralizer::is_singular("BUS"));
        assert_eq!(Pluralizer::singularize("BUS"), "BUS");
    }

    #[test]
    fn test_restore_initial_case() {
        assert_eq!(restore_initial_case("Man", "men".to_string()), "Men");
        assert_eq!(restore_initial_case("man", "men".to_string()), "men");
        assert_eq!(restore_initial_case("MAN", "MEN".to_string()), "MEN");
        assert_eq!(restore_initial_case("X", "xes".to_string()), "Xes");
        assert_eq!(restore_initial_case("Über", "über".to_string()), "über");
    }

    #[test]
    fn test_shared_instance_is_reused() {
        assert!(std::ptr::eq(
            EnglishPluralizer::shared(),
            EnglishPluralizer::shared()
        ));
    }

    #[test]
    fn test_engine_is_usable_as_trait_object() {
        let engine: Box<dyn Inflect> = Box::new(EnglishPluralizer::new());
        assert_eq!(engine.plural_form("goose"), "geese");
        assert_eq!(engine.singular_form("geese"), "goose");
    }
}
