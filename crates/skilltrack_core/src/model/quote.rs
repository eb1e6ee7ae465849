//! Quote entries and the built-in catalog.
//!
//! The catalog order is part of the selection contract: reordering or
//! inserting entries changes which quote a given day maps to.

use serde::Serialize;

/// One catalog quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct QuoteEntry {
    pub text: &'static str,
    pub author: &'static str,
}

const fn quote(text: &'static str, author: &'static str) -> QuoteEntry {
    QuoteEntry { text, author }
}

/// Built-in ordered catalog.
pub static QUOTES: &[QuoteEntry] = &[
    quote(
        "Live as if you were to die tomorrow. Learn as if you were to live forever.",
        "Mahatma Gandhi",
    ),
    quote(
        "You have power over your mind - not outside events. Realize this, and you will find strength.",
        "Marcus Aurelius",
    ),
    quote(
        "Imagination is more important than knowledge. Knowledge is limited. Imagination encircles the world.",
        "Albert Einstein",
    ),
    quote("The unexamined life is not worth living.", "Socrates"),
    quote("Be the change that you wish to see in the world.", "Mahatma Gandhi"),
    quote(
        "We are what we repeatedly do. Excellence, then, is not an act, but a habit.",
        "Aristotle",
    ),
    quote(
        "If you want to find the secrets of the universe, think in terms of energy, frequency and vibration.",
        "Nikola Tesla",
    ),
    quote(
        "A man who has conquered himself is a man who has conquered the world.",
        "Zeno of Citium",
    ),
    quote("The only true wisdom is in knowing you know nothing.", "Socrates"),
    quote(
        "Knowing is not enough; we must apply. Willing is not enough; we must do.",
        "Leonardo da Vinci",
    ),
    quote(
        "It is not death that a man should fear, but he should fear never beginning to live.",
        "Marcus Aurelius",
    ),
    quote(
        "The happiness of your life depends upon the quality of your thoughts.",
        "Marcus Aurelius",
    ),
    quote("Veni, vidi, vici. (I came, I saw, I conquered.)", "Julius Caesar"),
    quote(
        "A wise man can learn more from a foolish question than a fool can learn from a wise answer.",
        "Bruce Lee",
    ),
    quote(
        "Courage is not having the strength to go on; it is going on when you don't have the strength.",
        "Napoleon Bonaparte",
    ),
    quote("The greatest wealth is to live content with little.", "Plato"),
    quote("It always seems impossible until it is done.", "Nelson Mandela"),
    quote("You become what you think about.", "Lao Tzu"),
    quote(
        "He who fears he will suffer, already suffers because he fears.",
        "Michel de Montaigne",
    ),
    quote(
        "Great spirits have always encountered violent opposition from mediocre minds.",
        "Albert Einstein",
    ),
];
