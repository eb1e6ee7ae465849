use chrono::{FixedOffset, TimeZone, Utc};
use skilltrack_core::{
    quote_for_day_key, quote_index, quote_of_day, QuoteEntry, QuoteError, QUOTES,
};

fn utc() -> FixedOffset {
    FixedOffset::east_opt(0).unwrap()
}

fn char_sum(day_key: &str) -> usize {
    day_key.chars().map(|c| c as usize).sum()
}

#[test]
fn explicit_days_select_char_sum_modulo_catalog_length() {
    for day_key in ["2024-01-01", "2024-01-02"] {
        let expected = &QUOTES[char_sum(day_key) % QUOTES.len()];
        assert_eq!(quote_for_day_key(day_key, QUOTES).unwrap(), expected);
    }
}

#[test]
fn builtin_catalog_indices_are_stable() {
    // 484 % 20 and 485 % 20
    assert_eq!(quote_index("2024-01-01", QUOTES.len()).unwrap(), 4);
    assert_eq!(quote_index("2024-01-02", QUOTES.len()).unwrap(), 5);

    let first = quote_for_day_key("2024-01-01", QUOTES).unwrap();
    assert_eq!(first.author, "Mahatma Gandhi");
    assert_eq!(first.text, "Be the change that you wish to see in the world.");
    assert_eq!(quote_for_day_key("2024-01-02", QUOTES).unwrap().author, "Aristotle");
}

#[test]
fn same_calendar_day_yields_same_quote_at_any_time() {
    let morning = Utc.with_ymd_and_hms(2025, 6, 3, 0, 0, 0).unwrap();
    let night = Utc.with_ymd_and_hms(2025, 6, 3, 23, 59, 59).unwrap();

    let first = quote_of_day(morning, utc(), QUOTES).unwrap();
    let second = quote_of_day(night, utc(), QUOTES).unwrap();
    let again = quote_of_day(night, utc(), QUOTES).unwrap();

    assert_eq!(first, second);
    assert_eq!(second, again);
    assert_eq!(first, quote_for_day_key("2025-06-03", QUOTES).unwrap());
}

#[test]
fn offset_decides_which_day_is_hashed() {
    let instant = Utc.with_ymd_and_hms(2024, 1, 1, 23, 0, 0).unwrap();
    let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();

    assert_eq!(
        quote_of_day(instant, plus_two, QUOTES).unwrap(),
        quote_for_day_key("2024-01-02", QUOTES).unwrap()
    );
}

#[test]
fn empty_catalog_is_an_error() {
    let empty: &[QuoteEntry] = &[];
    let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

    assert_eq!(quote_of_day(now, utc(), empty), Err(QuoteError::EmptyCatalog));
    assert_eq!(quote_index("2024-01-01", 0), Err(QuoteError::EmptyCatalog));
}

#[test]
fn single_entry_catalog_always_returns_that_entry() {
    static ONE: &[QuoteEntry] = &[QuoteEntry {
        text: "Keep going.",
        author: "Anonymous",
    }];
    assert_eq!(quote_for_day_key("2031-09-17", ONE).unwrap(), &ONE[0]);
}
