//! Card pairing identifiers.
//!
//! Every pair of cards in a deck shares one `CardIdentifier`. Identifiers are
//! handed out by an `IdentifierFactory`, which counts upward and never reuses
//! a value. The engine owns its factory, so identifiers stay unique across
//! every game it deals without any process-wide state.
//!
//! ## Usage
//!
//! ```
//! use concentration::core::IdentifierFactory;
//!
//! let mut factory = IdentifierFactory::new();
//!
//! let first = factory.next_identifier();
//! let second = factory.next_identifier();
//!
//! assert_ne!(first, second);
//! assert!(second.raw() > first.raw());
//! ```

use serde::{Deserialize, Serialize};

/// Pairing key for a card.
///
/// Opaque to presentation layers: use it to look up a stable display symbol,
/// never to show the number itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardIdentifier(pub u32);

impl CardIdentifier {
    /// Get the raw identifier value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for CardIdentifier {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Monotonic source of fresh identifiers.
///
/// The first identifier issued is `1`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IdentifierFactory {
    issued: u32,
}

impl IdentifierFactory {
    /// Create a factory that has issued nothing yet.
    #[must_use]
    pub const fn new() -> Self {
        Self { issued: 0 }
    }

    /// Issue the next identifier.
    pub fn next_identifier(&mut self) -> CardIdentifier {
        self.issued += 1;
        CardIdentifier(self.issued)
    }

    /// Number of identifiers issued so far.
    #[must_use]
    pub const fn issued(&self) -> u32 {
        self.issued
    }
}
