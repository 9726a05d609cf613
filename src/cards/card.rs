//! Playing cards from a standard 52-card deck.
//!
//! Rank and suit are immutable after construction. The face-up flag is the
//! only mutable state, and it can only be flipped from inside the crate:
//! face changes happen exclusively as recorded side effects of a move.

use serde::{Deserialize, Serialize};

/// The suit of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// All suits, in deck order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// True for hearts and diamonds.
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Suit::Diamonds | Suit::Hearts)
    }

    /// One-character abbreviation.
    #[must_use]
    pub const fn abbrev(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }
}

/// The rank of a card, Ace low.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All ranks, Ace through King.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Numeric value in `1..=13`.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Look up a rank by its value.
    #[must_use]
    pub fn from_value(value: u8) -> Option<Rank> {
        Rank::ALL.get(usize::from(value).checked_sub(1)?).copied()
    }

    /// One-character abbreviation (`T` for ten).
    #[must_use]
    pub const fn abbrev(self) -> char {
        match self {
            Rank::Ace => 'A',
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
        }
    }
}

/// A card with its face state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
    face_up: bool,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit,
            face_up: false,
        }
    }

    /// Create a card with an explicit face state.
    #[must_use]
    pub const fn with_face(rank: Rank, suit: Suit, face_up: bool) -> Self {
        Self { rank, suit, face_up }
    }

    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Value of the rank, `1..=13`.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.rank.value()
    }

    #[must_use]
    pub const fn is_red(&self) -> bool {
        self.suit.is_red()
    }

    #[must_use]
    pub const fn is_face_up(&self) -> bool {
        self.face_up
    }

    /// Rank and suit, ignoring face state.
    #[must_use]
    pub const fn identity(&self) -> (Rank, Suit) {
        (self.rank, self.suit)
    }

    /// Two-character abbreviation such as `"AS"` or `"TH"`.
    #[must_use]
    pub fn abbrev(&self) -> String {
        format!("{}{}", self.rank.abbrev(), self.suit.abbrev())
    }

    /// Turn the card over.
    pub(crate) fn flip(&mut self) {
        self.face_up = !self.face_up;
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank.abbrev(), self.suit.abbrev())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_values() {
        assert_eq!(Rank::Ace.value(), 1);
        assert_eq!(Rank::Ten.value(), 10);
        assert_eq!(Rank::King.value(), 13);

        for rank in Rank::ALL {
            assert_eq!(Rank::from_value(rank.value()), Some(rank));
        }
        assert_eq!(Rank::from_value(0), None);
        assert_eq!(Rank::from_value(14), None);
    }

    #[test]
    fn test_suit_colors() {
        assert!(Suit::Hearts.is_red());
        assert!(Suit::Diamonds.is_red());
        assert!(!Suit::Clubs.is_red());
        assert!(!Suit::Spades.is_red());
    }

    #[test]
    fn test_new_card_is_face_down() {
        let card = Card::new(Rank::Queen, Suit::Hearts);

        assert!(!card.is_face_up());
        assert_eq!(card.value(), 12);
        assert!(card.is_red());
        assert_eq!(card.abbrev(), "QH");
        assert_eq!(card.to_string(), "QH");
    }

    #[test]
    fn test_flip_toggles_face_only() {
        let mut card = Card::new(Rank::Ten, Suit::Spades);

        card.flip();
        assert!(card.is_face_up());
        assert_eq!(card.identity(), (Rank::Ten, Suit::Spades));

        card.flip();
        assert!(!card.is_face_up());
    }

    #[test]
    fn test_card_serialization() {
        let card = Card::with_face(Rank::Seven, Suit::Diamonds, true);
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();

        assert_eq!(card, deserialized);
    }
}
