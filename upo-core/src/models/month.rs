use std::fmt;

/// A calendar month.
///
/// Everything in this system that names a month — table columns, average
/// vectors, result breakdowns — uses the full English month names in the
/// fixed order January through December. This enum is the single source of
/// both the order and the labels.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Month {
    /// The first calendar month
    January,
    /// The second calendar month
    February,
    /// The third calendar month
    March,
    /// The fourth calendar month
    April,
    /// The fifth calendar month
    May,
    /// The sixth calendar month
    June,
    /// The seventh calendar month
    July,
    /// The eighth calendar month
    August,
    /// The ninth calendar month
    September,
    /// The tenth calendar month
    October,
    /// The eleventh calendar month
    November,
    /// The twelfth calendar month
    December,
}

impl Month {
    /// All twelve months, in calendar order.
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// The full English name; also the expected table column name.
    pub fn name(self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }

    /// Zero-based position within the calendar year.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
