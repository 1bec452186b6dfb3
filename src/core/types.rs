use serde::{Deserialize, Serialize};

/// Plain-vanilla option side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OptionType {
    /// Call option payoff profile.
    Call,
    /// Put option payoff profile.
    Put,
}

impl OptionType {
    /// Returns +1.0 for calls and -1.0 for puts.
    pub fn sign(self) -> f64 {
        match self {
            Self::Call => 1.0,
            Self::Put => -1.0,
        }
    }
}

/// Qualitative strike-versus-spot classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Moneyness {
    /// Exercising now would have positive payoff.
    InTheMoney,
    /// Spot within [`ATM_REL_TOL`] of the strike.
    AtTheMoney,
    /// Exercising now would pay nothing.
    OutOfTheMoney,
}

/// Relative band around the strike treated as at-the-money.
pub const ATM_REL_TOL: f64 = 1e-4;

impl Moneyness {
    /// Classifies a contract given its side, the current spot, and the strike.
    ///
    /// # Examples
    /// ```
    /// use vegakit::core::{Moneyness, OptionType};
    ///
    /// let m = Moneyness::classify(OptionType::Call, 22547.95, 22500.0);
    /// assert_eq!(m, Moneyness::InTheMoney);
    ///
    /// let m = Moneyness::classify(OptionType::Put, 22547.95, 22500.0);
    /// assert_eq!(m, Moneyness::OutOfTheMoney);
    /// ```
    pub fn classify(option_type: OptionType, spot: f64, strike: f64) -> Self {
        if (spot - strike).abs() <= ATM_REL_TOL * strike {
            return Self::AtTheMoney;
        }
        let itm = match option_type {
            OptionType::Call => spot > strike,
            OptionType::Put => spot < strike,
        };
        if itm {
            Self::InTheMoney
        } else {
            Self::OutOfTheMoney
        }
    }
}
