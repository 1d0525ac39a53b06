//! Hijri months and dates.

use std::fmt::{Display, Formatter};

use crate::error::HijriError;
use crate::tabular::tabular_month_days;

/// A month of the Hijri calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HijriMonth {
    Muharram,
    Safar,
    RabiAlAwwal,
    RabiAlThani,
    JumadaAlUla,
    JumadaAlThani,
    Rajab,
    Shaban,
    Ramadan,
    Shawwal,
    DhulQidah,
    DhulHijjah,
}

impl HijriMonth {
    /// All twelve months in calendar order.
    pub const ALL: [HijriMonth; 12] = [
        Self::Muharram,
        Self::Safar,
        Self::RabiAlAwwal,
        Self::RabiAlThani,
        Self::JumadaAlUla,
        Self::JumadaAlThani,
        Self::Rajab,
        Self::Shaban,
        Self::Ramadan,
        Self::Shawwal,
        Self::DhulQidah,
        Self::DhulHijjah,
    ];

    /// 1-based month number.
    pub fn number(self) -> u32 {
        Self::ALL.iter().position(|&m| m == self).unwrap_or(0) as u32 + 1
    }

    /// Month from its 1-based number.
    pub fn from_number(n: u32) -> Result<Self, HijriError> {
        match n {
            1..=12 => Ok(Self::ALL[(n - 1) as usize]),
            other => Err(HijriError::InvalidMonth(other)),
        }
    }

    /// English transliteration.
    pub fn name(self) -> &'static str {
        match self {
            Self::Muharram => "Muharram",
            Self::Safar => "Safar",
            Self::RabiAlAwwal => "Rabi al-Awwal",
            Self::RabiAlThani => "Rabi al-Thani",
            Self::JumadaAlUla => "Jumada al-Ula",
            Self::JumadaAlThani => "Jumada al-Thani",
            Self::Rajab => "Rajab",
            Self::Shaban => "Sha'ban",
            Self::Ramadan => "Ramadan",
            Self::Shawwal => "Shawwal",
            Self::DhulQidah => "Dhul Qi'dah",
            Self::DhulHijjah => "Dhul Hijjah",
        }
    }

    /// Arabic name.
    pub fn arabic(self) -> &'static str {
        match self {
            Self::Muharram => "\u{645}\u{62D}\u{631}\u{645}",
            Self::Safar => "\u{635}\u{641}\u{631}",
            Self::RabiAlAwwal => "\u{631}\u{628}\u{64A}\u{639} \u{627}\u{644}\u{623}\u{648}\u{644}",
            Self::RabiAlThani => {
                "\u{631}\u{628}\u{64A}\u{639} \u{627}\u{644}\u{62B}\u{627}\u{646}\u{64A}"
            }
            Self::JumadaAlUla => {
                "\u{62C}\u{645}\u{627}\u{62F}\u{649} \u{627}\u{644}\u{623}\u{648}\u{644}\u{649}"
            }
            Self::JumadaAlThani => {
                "\u{62C}\u{645}\u{627}\u{62F}\u{649} \u{627}\u{644}\u{62B}\u{627}\u{646}\u{64A}\u{629}"
            }
            Self::Rajab => "\u{631}\u{62C}\u{628}",
            Self::Shaban => "\u{634}\u{639}\u{628}\u{627}\u{646}",
            Self::Ramadan => "\u{631}\u{645}\u{636}\u{627}\u{646}",
            Self::Shawwal => "\u{634}\u{648}\u{627}\u{644}",
            Self::DhulQidah => "\u{630}\u{648} \u{627}\u{644}\u{642}\u{639}\u{62F}\u{629}",
            Self::DhulHijjah => "\u{630}\u{648} \u{627}\u{644}\u{62D}\u{62C}\u{629}",
        }
    }

    /// Three-letter English abbreviation.
    pub fn short(self) -> &'static str {
        match self {
            Self::Muharram => "Muh",
            Self::Safar => "Saf",
            Self::RabiAlAwwal => "Rb1",
            Self::RabiAlThani => "Rb2",
            Self::JumadaAlUla => "Jm1",
            Self::JumadaAlThani => "Jm2",
            Self::Rajab => "Raj",
            Self::Shaban => "Sha",
            Self::Ramadan => "Ram",
            Self::Shawwal => "Shw",
            Self::DhulQidah => "DhQ",
            Self::DhulHijjah => "DhH",
        }
    }

    /// The month after this one, wrapping Dhul Hijjah to Muharram.
    pub fn next(self) -> Self {
        match self {
            Self::DhulHijjah => Self::Muharram,
            other => Self::ALL[other.number() as usize],
        }
    }
}

impl Display for HijriMonth {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A date of the Hijri calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HijriDate {
    /// Hijri year (AH).
    pub year: i32,
    /// Hijri month.
    pub month: HijriMonth,
    /// Day of month, 1-30.
    pub day: u32,
}

impl HijriDate {
    /// Construct a date validated against the tabular month lengths.
    ///
    /// Day 30 of a 29-day month is accepted: sighting-based months may
    /// run a day longer than their tabular counterpart.
    pub fn new(year: i32, month: HijriMonth, day: u32) -> Result<Self, HijriError> {
        if day < 1 || day > 30 {
            return Err(HijriError::InvalidDay { year, month: month.number(), day });
        }
        Ok(Self { year, month, day })
    }

    /// Strict constructor: the day must fit the tabular month length.
    pub fn new_tabular(year: i32, month: HijriMonth, day: u32) -> Result<Self, HijriError> {
        if day < 1 || day > tabular_month_days(year, month) {
            return Err(HijriError::InvalidDay { year, month: month.number(), day });
        }
        Ok(Self { year, month, day })
    }
}

impl Display for HijriDate {
    /// `14 Ramadan 1446 AH`.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} AH", self.day, self.month.name(), self.year)
    }
}
