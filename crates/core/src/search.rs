use crate::model::Lesson;

/// Anything shown as a topic card: a title plus a short body.
pub trait Searchable {
    fn title(&self) -> &str;
    fn body(&self) -> &str;
}

impl Searchable for Lesson {
    fn title(&self) -> &str {
        Lesson::title(self)
    }

    fn body(&self) -> &str {
        self.summary()
    }
}

/// A normalized (trimmed, lowercased) search query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Case-insensitive substring match against a card's title or body.
    #[must_use]
    pub fn matches(&self, title: &str, body: &str) -> bool {
        if self.0.is_empty() {
            return true;
        }
        title.to_lowercase().contains(&self.0) || body.to_lowercase().contains(&self.0)
    }

    #[must_use]
    pub fn matches_card<T: Searchable + ?Sized>(&self, card: &T) -> bool {
        self.matches(card.title(), card.body())
    }

    /// Visibility flag per card, in the order the cards were given.
    #[must_use]
    pub fn visibility<T: Searchable>(&self, cards: &[T]) -> Vec<bool> {
        cards.iter().map(|card| self.matches_card(card)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Card {
        title: &'static str,
        body: &'static str,
    }

    impl Searchable for Card {
        fn title(&self) -> &str {
            self.title
        }

        fn body(&self) -> &str {
            self.body
        }
    }

    const CARDS: [Card; 3] = [
        Card {
            title: "Cell Structure",
            body: "The Mitochondrion and friends",
        },
        Card {
            title: "Photosynthesis",
            body: "Chloroplasts",
        },
        Card {
            title: "Genetics",
            body: "DNA and heredity",
        },
    ];

    #[test]
    fn empty_query_shows_everything() {
        assert_eq!(SearchQuery::new("   ").visibility(&CARDS), vec![true, true, true]);
    }

    #[test]
    fn no_match_hides_everything() {
        assert_eq!(
            SearchQuery::new("quantum").visibility(&CARDS),
            vec![false, false, false]
        );
    }

    #[test]
    fn match_is_case_insensitive_on_body() {
        assert_eq!(SearchQuery::new("MITO").visibility(&CARDS), vec![true, false, false]);
    }

    #[test]
    fn match_on_title_and_trims() {
        let query = SearchQuery::new("  photo ");
        assert_eq!(query.as_str(), "photo");
        assert_eq!(query.visibility(&CARDS), vec![false, true, false]);
    }
}
