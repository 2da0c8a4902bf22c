//! Philosophy quote bank
//!
//! A fixed list; selection is uniform with no repeat avoidance.

use rand::Rng;

/// Number of quotes in the bank
pub const QUOTE_COUNT: usize = 10;

/// A single quote
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub text: &'static str,
    pub author: &'static str,
}

impl Quote {
    /// Body as shown on the page, wrapped in double quotes
    pub fn display_text(&self) -> String {
        format!("\"{}\"", self.text)
    }

    /// Attribution as shown on the page
    pub fn display_author(&self) -> String {
        format!("- {}", self.author)
    }
}

pub static QUOTES: [Quote; QUOTE_COUNT] = [
    Quote {
        text: "The unexamined life is not worth living.",
        author: "Socrates",
    },
    Quote {
        text: "I think, therefore I am.",
        author: "René Descartes",
    },
    Quote {
        text: "To be is to be perceived.",
        author: "George Berkeley",
    },
    Quote {
        text: "One cannot step twice in the same river.",
        author: "Heraclitus",
    },
    Quote {
        text: "Happiness depends upon ourselves.",
        author: "Aristotle",
    },
    Quote {
        text: "The only thing I know is that I know nothing.",
        author: "Socrates",
    },
    Quote {
        text: "Man is the measure of all things.",
        author: "Protagoras",
    },
    Quote {
        text: "God is dead.",
        author: "Friedrich Nietzsche",
    },
    Quote {
        text: "Life must be understood backward. But it must be lived forward.",
        author: "Søren Kierkegaard",
    },
    Quote {
        text: "The greatest happiness of the greatest number is the foundation of morals and legislation.",
        author: "Jeremy Bentham",
    },
];

/// Pick a quote index uniformly at random
pub fn random_index<R: Rng + ?Sized>(rng: &mut R) -> usize {
    rng.random_range(0..QUOTES.len())
}

/// The two text slots a quote is written into
pub trait QuoteDisplay {
    fn show_quote(&mut self, text: &str, author: &str);
}

/// Write a quote into the display slots
pub fn display<D: QuoteDisplay + ?Sized>(quote: &Quote, slots: &mut D) {
    slots.show_quote(&quote.display_text(), &quote.display_author());
}

/// In-memory text slots (headless runs and tests)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteSlots {
    pub text: String,
    pub author: String,
}

impl QuoteDisplay for QuoteSlots {
    fn show_quote(&mut self, text: &str, author: &str) {
        self.text = text.to_string();
        self.author = author.to_string();
    }
}
