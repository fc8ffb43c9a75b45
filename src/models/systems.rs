//! Sender system identities.

use serde::{Deserialize, Serialize};

/// Identifies the system that sent a feedback request.
///
/// The wire representation is the SCREAMING_SNAKE_CASE code,
/// e.g. `"FIRST_SERVICE"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Systems {
    /// The first upstream service.
    FirstService,
    /// The second upstream service.
    SecondService,
    /// The third upstream service.
    ThirdService,
}

impl Systems {
    /// Every known sender identity.
    pub const ALL: [Systems; 3] = [
        Systems::FirstService,
        Systems::SecondService,
        Systems::ThirdService,
    ];

    /// Returns the wire code for this system.
    pub fn code(self) -> &'static str {
        match self {
            Systems::FirstService => "FIRST_SERVICE",
            Systems::SecondService => "SECOND_SERVICE",
            Systems::ThirdService => "THIRD_SERVICE",
        }
    }

    /// Looks up a system by its wire code.
    ///
    /// Returns `None` when the code is outside the known set, which the
    /// validation layer classifies as an unsupported value.
    ///
    /// # Example
    ///
    /// ```
    /// use bonus_engine::models::Systems;
    ///
    /// assert_eq!(Systems::from_code("FIRST_SERVICE"), Some(Systems::FirstService));
    /// assert_eq!(Systems::from_code("FOURTH_SERVICE"), None);
    /// ```
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|system| system.code() == code)
    }
}

impl std::fmt::Display for Systems {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
