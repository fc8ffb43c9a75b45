//! Employee position codes.

use serde::{Deserialize, Serialize};

/// Role classification for an employee.
///
/// Each position is statically mapped to a manager flag; the bonus
/// coefficients attached to a position live in the configuration tables so
/// they can change without touching code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Positions {
    /// Software developer.
    Dev,
    /// Quality assurance engineer.
    Qa,
    /// Business analyst.
    Analyst,
    /// Infrastructure engineer.
    DevOps,
    /// Team lead; manages a delivery team.
    TeamLead,
    /// Project manager.
    Pm,
    /// Department director.
    Director,
}

impl Positions {
    /// Every known position code.
    pub const ALL: [Positions; 7] = [
        Positions::Dev,
        Positions::Qa,
        Positions::Analyst,
        Positions::DevOps,
        Positions::TeamLead,
        Positions::Pm,
        Positions::Director,
    ];

    /// Returns the wire code for this position.
    pub fn code(self) -> &'static str {
        match self {
            Positions::Dev => "DEV",
            Positions::Qa => "QA",
            Positions::Analyst => "ANALYST",
            Positions::DevOps => "DEV_OPS",
            Positions::TeamLead => "TEAM_LEAD",
            Positions::Pm => "PM",
            Positions::Director => "DIRECTOR",
        }
    }

    /// Looks up a position by its wire code.
    ///
    /// Returns `None` when the code is outside the known set, which the
    /// validation layer classifies as an unsupported value.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|position| position.code() == code)
    }

    /// Returns true for positions with managerial responsibility.
    ///
    /// Managerial positions additionally qualify for a quarterly bonus.
    ///
    /// # Example
    ///
    /// ```
    /// use bonus_engine::models::Positions;
    ///
    /// assert!(Positions::Pm.is_manager());
    /// assert!(!Positions::Dev.is_manager());
    /// ```
    pub fn is_manager(self) -> bool {
        matches!(
            self,
            Positions::TeamLead | Positions::Pm | Positions::Director
        )
    }
}

impl std::fmt::Display for Positions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
