//! Aggregate statistics over the stored users.

use std::fmt;

use super::User;

/// Reporting bracket for user ages.
///
/// Boundaries are inclusive. Ages below 18, zero and negative ones included,
/// belong to no bracket but still count toward [`UserStats::total_users`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgeBracket {
    /// 18 to 25 inclusive.
    EighteenToTwentyFive,
    /// 26 to 35 inclusive.
    TwentySixToThirtyFive,
    /// 36 to 50 inclusive.
    ThirtySixToFifty,
    /// Older than 50.
    OverFifty,
}

impl AgeBracket {
    /// Bracket containing `age`, or `None` for ages under 18.
    #[must_use]
    pub const fn for_age(age: i64) -> Option<Self> {
        match age {
            ..=17 => None,
            18..=25 => Some(Self::EighteenToTwentyFive),
            26..=35 => Some(Self::TwentySixToThirtyFive),
            36..=50 => Some(Self::ThirtySixToFifty),
            51.. => Some(Self::OverFifty),
        }
    }

    /// Label used as the bracket key on the wire.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::EighteenToTwentyFive => "18-25",
            Self::TwentySixToThirtyFive => "26-35",
            Self::ThirtySixToFifty => "36-50",
            Self::OverFifty => "50+",
        }
    }
}

impl fmt::Display for AgeBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Number of users per [`AgeBracket`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AgeGroupCounts {
    pub eighteen_to_twenty_five: usize,
    pub twenty_six_to_thirty_five: usize,
    pub thirty_six_to_fifty: usize,
    pub over_fifty: usize,
}

impl AgeGroupCounts {
    /// Count stored in `bracket`.
    #[must_use]
    pub const fn get(&self, bracket: AgeBracket) -> usize {
        match bracket {
            AgeBracket::EighteenToTwentyFive => self.eighteen_to_twenty_five,
            AgeBracket::TwentySixToThirtyFive => self.twenty_six_to_thirty_five,
            AgeBracket::ThirtySixToFifty => self.thirty_six_to_fifty,
            AgeBracket::OverFifty => self.over_fifty,
        }
    }

    /// Sum across all brackets.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.eighteen_to_twenty_five
            + self.twenty_six_to_thirty_five
            + self.thirty_six_to_fifty
            + self.over_fifty
    }

    fn record(&mut self, bracket: AgeBracket) {
        let slot = match bracket {
            AgeBracket::EighteenToTwentyFive => &mut self.eighteen_to_twenty_five,
            AgeBracket::TwentySixToThirtyFive => &mut self.twenty_six_to_thirty_five,
            AgeBracket::ThirtySixToFifty => &mut self.thirty_six_to_fifty,
            AgeBracket::OverFifty => &mut self.over_fifty,
        };
        *slot += 1;
    }
}

/// Snapshot statistics over the store.
#[derive(Debug, Clone, PartialEq)]
pub struct UserStats {
    pub total_users: usize,
    /// Mean age rounded to two decimal places; `0.0` when there are no users.
    pub average_age: f64,
    pub users_by_age_group: AgeGroupCounts,
}

impl UserStats {
    /// Compute statistics over `users`.
    ///
    /// # Examples
    /// ```
    /// use backend_api::domain::{UserDraft, UserStats, UserStore};
    ///
    /// let store = UserStore::new();
    /// store.create(UserDraft::new("Alice", "alice@x.com", 22)).expect("create");
    /// store.create(UserDraft::new("Bob", "bob@x.com", 36)).expect("create");
    ///
    /// let stats = UserStats::from_users(&store.list());
    /// assert_eq!(stats.total_users, 2);
    /// assert!((stats.average_age - 29.0).abs() < f64::EPSILON);
    /// ```
    #[must_use]
    pub fn from_users(users: &[User]) -> Self {
        let mut users_by_age_group = AgeGroupCounts::default();
        // Widened so that extreme ages cannot overflow the running sum.
        let mut age_sum: i128 = 0;
        for user in users {
            age_sum += i128::from(user.age());
            if let Some(bracket) = AgeBracket::for_age(user.age()) {
                users_by_age_group.record(bracket);
            }
        }

        Self {
            total_users: users.len(),
            average_age: rounded_mean(age_sum, users.len()),
            users_by_age_group,
        }
    }
}

#[expect(
    clippy::cast_precision_loss,
    reason = "the mean is reported to two decimal places"
)]
fn rounded_mean(sum: i128, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    let mean = sum as f64 / count as f64;
    (mean * 100.0).round() / 100.0
}
