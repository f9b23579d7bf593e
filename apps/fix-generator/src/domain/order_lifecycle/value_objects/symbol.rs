//! Instrument universe for synthesized orders.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ticker of a synthesized order (FIX tag 55).
///
/// The set is fixed; every order picks one uniformly at random.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Symbol {
    /// Apple.
    Aapl,
    /// Microsoft.
    Msft,
    /// Oracle.
    Orcl,
    /// VMware.
    Vmw,
    /// Alphabet.
    Goog,
    /// Amazon.
    Amzn,
    /// Facebook.
    Fb,
    /// Twitter.
    Twtr,
}

impl Symbol {
    /// Every symbol in the universe, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Aapl,
        Self::Msft,
        Self::Orcl,
        Self::Vmw,
        Self::Goog,
        Self::Amzn,
        Self::Fb,
        Self::Twtr,
    ];

    /// Pick a symbol uniformly at random.
    #[must_use]
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// Ticker text as written on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Aapl => "AAPL",
            Self::Msft => "MSFT",
            Self::Orcl => "ORCL",
            Self::Vmw => "VMW",
            Self::Goog => "GOOG",
            Self::Amzn => "AMZN",
            Self::Fb => "FB",
            Self::Twtr => "TWTR",
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
