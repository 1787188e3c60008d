use serde::{Deserialize, Serialize};
use std::fmt;

/// A calendar month, January through December.
///
/// Revenue series, peak-month reporting, and repayment calendars all
/// index by calendar month. Serializes as the three-letter label
/// (`"Jan"`, `"Feb"`, ...).
///
/// # Examples
///
/// ```
/// use credit_engine::core::month::Month;
///
/// assert_eq!(Month::Oct.index(), 9);
/// assert_eq!(Month::Oct.label(), "Oct");
/// assert!(Month::Jan < Month::Dec);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    /// All twelve months in calendar order.
    pub const ALL: [Month; 12] = [
        Month::Jan,
        Month::Feb,
        Month::Mar,
        Month::Apr,
        Month::May,
        Month::Jun,
        Month::Jul,
        Month::Aug,
        Month::Sep,
        Month::Oct,
        Month::Nov,
        Month::Dec,
    ];

    /// The three-letter label for this month.
    pub fn label(&self) -> &'static str {
        match self {
            Month::Jan => "Jan",
            Month::Feb => "Feb",
            Month::Mar => "Mar",
            Month::Apr => "Apr",
            Month::May => "May",
            Month::Jun => "Jun",
            Month::Jul => "Jul",
            Month::Aug => "Aug",
            Month::Sep => "Sep",
            Month::Oct => "Oct",
            Month::Nov => "Nov",
            Month::Dec => "Dec",
        }
    }

    /// Zero-based calendar index (Jan = 0 ... Dec = 11).
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Month at the given zero-based index, if in range.
    pub fn from_index(index: usize) -> Option<Month> {
        Month::ALL.get(index).copied()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
