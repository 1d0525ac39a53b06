//! Islamic festival rules and indexed lookup.
//!
//! Festivals map to fixed Hijri dates, so the whole engine is a static
//! rule table plus a `(month, day)` index built once. Multi-day events
//! (Eid al-Fitr, Eid al-Adha) are indexed under every day they span.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::month::{HijriDate, HijriMonth};

/// Significance level of a festival.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Importance {
    Major,
    Significant,
    Observance,
}

/// Thematic category of a festival.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Eid,
    Fasting,
    Hajj,
    Remembrance,
    NightWorship,
    SacredMonth,
}

/// Whether observance is daytime, nighttime (starting the previous
/// evening), or both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Observance {
    Day,
    Night,
    Both,
}

/// One festival rule, anchored to a fixed Hijri date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FestivalRule {
    /// Stable identifier, e.g. `"eid_al_fitr"`.
    pub id: &'static str,
    /// English display name.
    pub name: &'static str,
    /// Hijri month of the first day.
    pub month: HijriMonth,
    /// Hijri day of the first day, 1-30.
    pub day: u32,
    /// Days the event spans.
    pub duration_days: u32,
    pub importance: Importance,
    pub categories: &'static [Category],
    pub observance: Observance,
    pub description: &'static str,
    pub traditions: Option<&'static str>,
}

/// A rule matching a particular Hijri date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FestivalMatch {
    pub rule: &'static FestivalRule,
    /// 1-based day within a multi-day event.
    pub day_of_event: u32,
    pub hijri_year: i32,
}

/// The full rule table, grouped by theme.
pub static FESTIVAL_RULES: [FestivalRule; 28] = [
    FestivalRule {
        id: "eid_al_fitr",
        name: "Eid al-Fitr",
        month: HijriMonth::Shawwal,
        day: 1,
        duration_days: 3,
        importance: Importance::Major,
        categories: &[Category::Eid],
        observance: Observance::Day,
        description: "Festival of Breaking the Fast. Marks the end of Ramadan.",
        traditions: Some("Eid prayer, Zakat al-Fitr, family gatherings, new clothes, feasting."),
    },
    FestivalRule {
        id: "eid_al_adha",
        name: "Eid al-Adha",
        month: HijriMonth::DhulHijjah,
        day: 10,
        duration_days: 3,
        importance: Importance::Major,
        categories: &[Category::Eid, Category::Hajj],
        observance: Observance::Day,
        description: "Festival of Sacrifice. Commemorates Ibrahim's willingness to sacrifice his son.",
        traditions: Some("Eid prayer, Qurbani (animal sacrifice), distributing meat to the poor."),
    },
    FestivalRule {
        id: "ramadan_start",
        name: "Start of Ramadan",
        month: HijriMonth::Ramadan,
        day: 1,
        duration_days: 1,
        importance: Importance::Major,
        categories: &[Category::Fasting],
        observance: Observance::Both,
        description: "First day of the month of fasting.",
        traditions: Some("Pre-dawn meal (Suhoor), fasting from dawn to sunset, Taraweeh prayers."),
    },
    FestivalRule {
        id: "ramadan_end",
        name: "Last Day of Ramadan",
        month: HijriMonth::Ramadan,
        day: 29,
        duration_days: 1,
        importance: Importance::Significant,
        categories: &[Category::Fasting],
        observance: Observance::Day,
        description: "Last possible day of Ramadan (29th or 30th depending on moon sighting).",
        traditions: None,
    },
    FestivalRule {
        id: "ashura_eve",
        name: "9th Muharram (Tasu'a)",
        month: HijriMonth::Muharram,
        day: 9,
        duration_days: 1,
        importance: Importance::Significant,
        categories: &[Category::Fasting, Category::Remembrance],
        observance: Observance::Day,
        description: "Day before Ashura. Recommended fasting day.",
        traditions: Some("Voluntary fasting, paired with 10th Muharram."),
    },
    FestivalRule {
        id: "ashura",
        name: "Day of Ashura",
        month: HijriMonth::Muharram,
        day: 10,
        duration_days: 1,
        importance: Importance::Major,
        categories: &[Category::Fasting, Category::Remembrance],
        observance: Observance::Day,
        description: "10th Muharram. Day of fasting and remembrance.",
        traditions: Some("Voluntary fasting (Sunni), mourning of Hussain (Shia), charity."),
    },
    FestivalRule {
        id: "day_of_arafah",
        name: "Day of Arafah",
        month: HijriMonth::DhulHijjah,
        day: 9,
        duration_days: 1,
        importance: Importance::Major,
        categories: &[Category::Fasting, Category::Hajj],
        observance: Observance::Day,
        description: "Day of standing at Arafah. Fasting recommended for non-pilgrims.",
        traditions: Some("Fasting (non-pilgrims), du'a, Hajj pilgrims stand at Arafah."),
    },
    FestivalRule {
        id: "shawwal_fasting_start",
        name: "Six Days of Shawwal (Start)",
        month: HijriMonth::Shawwal,
        day: 4,
        duration_days: 1,
        importance: Importance::Observance,
        categories: &[Category::Fasting],
        observance: Observance::Day,
        description: "Start of the recommended six days of voluntary fasting in Shawwal.",
        traditions: Some("Fasting six days after Eid al-Fitr for reward of fasting the whole year."),
    },
    FestivalRule {
        id: "laylat_al_qadr_21",
        name: "Laylat al-Qadr (21st)",
        month: HijriMonth::Ramadan,
        day: 21,
        duration_days: 1,
        importance: Importance::Observance,
        categories: &[Category::NightWorship],
        observance: Observance::Night,
        description: "Night of Power candidate (odd night of last 10 days of Ramadan).",
        traditions: None,
    },
    FestivalRule {
        id: "laylat_al_qadr_23",
        name: "Laylat al-Qadr (23rd)",
        month: HijriMonth::Ramadan,
        day: 23,
        duration_days: 1,
        importance: Importance::Observance,
        categories: &[Category::NightWorship],
        observance: Observance::Night,
        description: "Night of Power candidate (odd night of last 10 days of Ramadan).",
        traditions: None,
    },
    FestivalRule {
        id: "laylat_al_qadr_25",
        name: "Laylat al-Qadr (25th)",
        month: HijriMonth::Ramadan,
        day: 25,
        duration_days: 1,
        importance: Importance::Observance,
        categories: &[Category::NightWorship],
        observance: Observance::Night,
        description: "Night of Power candidate (odd night of last 10 days of Ramadan).",
        traditions: None,
    },
    FestivalRule {
        id: "laylat_al_qadr_27",
        name: "Laylat al-Qadr (27th)",
        month: HijriMonth::Ramadan,
        day: 27,
        duration_days: 1,
        importance: Importance::Major,
        categories: &[Category::NightWorship],
        observance: Observance::Night,
        description: "Night of Power (most widely observed). Better than a thousand months.",
        traditions: Some("Night prayer, Quran recitation, I'tikaf, du'a."),
    },
    FestivalRule {
        id: "laylat_al_qadr_29",
        name: "Laylat al-Qadr (29th)",
        month: HijriMonth::Ramadan,
        day: 29,
        duration_days: 1,
        importance: Importance::Observance,
        categories: &[Category::NightWorship],
        observance: Observance::Night,
        description: "Night of Power candidate (odd night of last 10 days of Ramadan).",
        traditions: None,
    },
    FestivalRule {
        id: "shab_e_barat",
        name: "Shab-e-Barat",
        month: HijriMonth::Shaban,
        day: 15,
        duration_days: 1,
        importance: Importance::Significant,
        categories: &[Category::NightWorship],
        observance: Observance::Night,
        description: "Night of Fortune / Mid-Sha'ban. Night of forgiveness and prayer.",
        traditions: Some("Night prayer, visiting graves, asking forgiveness."),
    },
    FestivalRule {
        id: "laylat_al_raghaib",
        name: "Laylat al-Raghaib",
        month: HijriMonth::Rajab,
        day: 1,
        duration_days: 1,
        importance: Importance::Observance,
        categories: &[Category::NightWorship],
        observance: Observance::Night,
        description: "Night of Wishes. First Friday night of Rajab (approximated as 1 Rajab).",
        traditions: None,
    },
    FestivalRule {
        id: "hijri_new_year",
        name: "Islamic New Year",
        month: HijriMonth::Muharram,
        day: 1,
        duration_days: 1,
        importance: Importance::Major,
        categories: &[Category::Remembrance],
        observance: Observance::Day,
        description: "First day of Muharram. Start of the Islamic calendar year.",
        traditions: Some("Reflection, recounting the Hijrah of the Prophet."),
    },
    FestivalRule {
        id: "mawlid",
        name: "Mawlid al-Nabi",
        month: HijriMonth::RabiAlAwwal,
        day: 12,
        duration_days: 1,
        importance: Importance::Major,
        categories: &[Category::Remembrance],
        observance: Observance::Both,
        description: "Birthday of Prophet Muhammad (PBUH). 12th Rabi al-Awwal.",
        traditions: Some("Recitation of the Seerah, nasheed, community gatherings, charity."),
    },
    FestivalRule {
        id: "isra_miraj",
        name: "Isra and Mi'raj",
        month: HijriMonth::Rajab,
        day: 27,
        duration_days: 1,
        importance: Importance::Major,
        categories: &[Category::Remembrance, Category::NightWorship],
        observance: Observance::Night,
        description: "Night Journey and Ascension of the Prophet. 27th Rajab.",
        traditions: Some("Night prayer, recounting the journey, reflection on the five daily prayers."),
    },
    FestivalRule {
        id: "wafat_al_nabi",
        name: "Wafat al-Nabi",
        month: HijriMonth::RabiAlAwwal,
        day: 17,
        duration_days: 1,
        importance: Importance::Significant,
        categories: &[Category::Remembrance],
        observance: Observance::Day,
        description: "Passing of Prophet Muhammad (PBUH). 17th Rabi al-Awwal (Shia date: 28th Safar).",
        traditions: None,
    },
    FestivalRule {
        id: "hajj_begins",
        name: "Hajj Begins",
        month: HijriMonth::DhulHijjah,
        day: 8,
        duration_days: 1,
        importance: Importance::Significant,
        categories: &[Category::Hajj],
        observance: Observance::Day,
        description: "Day of Tarwiyah. Pilgrims proceed to Mina. 8th Dhul Hijjah.",
        traditions: None,
    },
    FestivalRule {
        id: "days_of_tashreeq_1",
        name: "Days of Tashreeq (Day 1)",
        month: HijriMonth::DhulHijjah,
        day: 11,
        duration_days: 1,
        importance: Importance::Significant,
        categories: &[Category::Hajj],
        observance: Observance::Day,
        description: "11th Dhul Hijjah. Pilgrims stone the Jamarat. Fasting prohibited.",
        traditions: Some("Stoning of Jamarat, Takbeer after prayers."),
    },
    FestivalRule {
        id: "days_of_tashreeq_2",
        name: "Days of Tashreeq (Day 2)",
        month: HijriMonth::DhulHijjah,
        day: 12,
        duration_days: 1,
        importance: Importance::Significant,
        categories: &[Category::Hajj],
        observance: Observance::Day,
        description: "12th Dhul Hijjah. Second day of Tashreeq. Fasting prohibited.",
        traditions: Some("Stoning of Jamarat, some pilgrims depart Mina."),
    },
    FestivalRule {
        id: "days_of_tashreeq_3",
        name: "Days of Tashreeq (Day 3)",
        month: HijriMonth::DhulHijjah,
        day: 13,
        duration_days: 1,
        importance: Importance::Significant,
        categories: &[Category::Hajj],
        observance: Observance::Day,
        description: "13th Dhul Hijjah. Last day of Tashreeq. Fasting prohibited.",
        traditions: Some("Final stoning of Jamarat, pilgrims depart Mina."),
    },
    FestivalRule {
        id: "rajab_start",
        name: "Start of Rajab",
        month: HijriMonth::Rajab,
        day: 1,
        duration_days: 1,
        importance: Importance::Observance,
        categories: &[Category::SacredMonth],
        observance: Observance::Day,
        description: "Beginning of the sacred month of Rajab.",
        traditions: Some("Increased worship, voluntary fasting."),
    },
    FestivalRule {
        id: "shaban_start",
        name: "Start of Sha'ban",
        month: HijriMonth::Shaban,
        day: 1,
        duration_days: 1,
        importance: Importance::Observance,
        categories: &[Category::SacredMonth],
        observance: Observance::Day,
        description: "Beginning of Sha'ban, month before Ramadan.",
        traditions: Some("Increased fasting, preparation for Ramadan."),
    },
    FestivalRule {
        id: "dhul_qidah_start",
        name: "Start of Dhul Qi'dah",
        month: HijriMonth::DhulQidah,
        day: 1,
        duration_days: 1,
        importance: Importance::Observance,
        categories: &[Category::SacredMonth],
        observance: Observance::Day,
        description: "Beginning of the sacred month of Dhul Qi'dah.",
        traditions: None,
    },
    FestivalRule {
        id: "dhul_hijjah_start",
        name: "Start of Dhul Hijjah",
        month: HijriMonth::DhulHijjah,
        day: 1,
        duration_days: 1,
        importance: Importance::Observance,
        categories: &[Category::SacredMonth],
        observance: Observance::Day,
        description: "Beginning of the month of Hajj pilgrimage.",
        traditions: Some("First 10 days are most virtuous; recommended fasting on days 1-9."),
    },
    FestivalRule {
        id: "muharram_start",
        name: "Start of Muharram",
        month: HijriMonth::Muharram,
        day: 1,
        duration_days: 1,
        importance: Importance::Observance,
        categories: &[Category::SacredMonth],
        observance: Observance::Day,
        description: "Beginning of the sacred month of Muharram (overlaps Islamic New Year).",
        traditions: None,
    },
];

/// Hijri months never exceed 30 days; multi-day events wrap past it.
const MAX_HIJRI_DAY: u32 = 30;

fn festival_index() -> &'static HashMap<(u32, u32), Vec<&'static FestivalRule>> {
    static INDEX: OnceLock<HashMap<(u32, u32), Vec<&'static FestivalRule>>> = OnceLock::new();
    INDEX.get_or_init(|| {
        let mut index: HashMap<(u32, u32), Vec<&'static FestivalRule>> = HashMap::new();
        for rule in &FESTIVAL_RULES {
            for d in 0..rule.duration_days {
                let mut day = rule.day + d;
                let mut month = rule.month;
                if day > MAX_HIJRI_DAY {
                    day -= MAX_HIJRI_DAY;
                    month = month.next();
                }
                index.entry((month.number(), day)).or_default().push(rule);
            }
        }
        index
    })
}

/// All festivals falling on a Hijri date.
pub fn festivals_on(month: HijriMonth, day: u32, hijri_year: i32) -> Vec<FestivalMatch> {
    let Some(rules) = festival_index().get(&(month.number(), day)) else {
        return Vec::new();
    };

    rules
        .iter()
        .map(|&rule| {
            let day_of_event = if rule.duration_days > 1 {
                let mut diff = day as i64 - rule.day as i64;
                if diff < 0 {
                    diff += MAX_HIJRI_DAY as i64;
                }
                diff as u32 + 1
            } else {
                1
            };
            FestivalMatch { rule, day_of_event, hijri_year }
        })
        .collect()
}

/// Rules whose first day lies in a Hijri month.
pub fn rules_for_month(month: HijriMonth) -> Vec<&'static FestivalRule> {
    FESTIVAL_RULES.iter().filter(|r| r.month == month).collect()
}

/// The rule table, optionally filtered by category and importance.
pub fn all_rules(
    category: Option<Category>,
    importance: Option<Importance>,
) -> Vec<&'static FestivalRule> {
    FESTIVAL_RULES
        .iter()
        .filter(|r| category.is_none_or(|c| r.categories.contains(&c)))
        .filter(|r| importance.is_none_or(|i| r.importance == i))
        .collect()
}

/// Whether a Hijri date falls in Ramadan.
pub fn is_ramadan(date: HijriDate) -> bool {
    date.month == HijriMonth::Ramadan
}

/// Whether a Hijri date falls in the last ten days of Ramadan.
pub fn is_last_ten(date: HijriDate) -> bool {
    is_ramadan(date) && date.day >= 21
}

/// Whether a Hijri date is an odd night of the last ten of Ramadan,
/// the Laylat al-Qadr candidates.
pub fn is_odd_night(date: HijriDate) -> bool {
    is_last_ten(date) && date.day % 2 == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eid_al_fitr_spans_three_days() {
        for day in 1..=3 {
            let matches = festivals_on(HijriMonth::Shawwal, day, 1446);
            let eid = matches.iter().find(|m| m.rule.id == "eid_al_fitr").unwrap();
            assert_eq!(eid.day_of_event, day);
        }
        assert!(
            festivals_on(HijriMonth::Shawwal, 5, 1446)
                .iter()
                .all(|m| m.rule.id != "eid_al_fitr")
        );
    }

    #[test]
    fn eid_al_adha_overlaps_tashreeq() {
        let matches = festivals_on(HijriMonth::DhulHijjah, 11, 1446);
        let ids: Vec<&str> = matches.iter().map(|m| m.rule.id).collect();
        assert!(ids.contains(&"eid_al_adha"));
        assert!(ids.contains(&"days_of_tashreeq_1"));
        let eid = matches.iter().find(|m| m.rule.id == "eid_al_adha").unwrap();
        assert_eq!(eid.day_of_event, 2);
    }

    #[test]
    fn muharram_first_has_two_rules() {
        let ids: Vec<&str> = festivals_on(HijriMonth::Muharram, 1, 1447)
            .iter()
            .map(|m| m.rule.id)
            .collect();
        assert!(ids.contains(&"hijri_new_year"));
        assert!(ids.contains(&"muharram_start"));
    }

    #[test]
    fn quiet_day_matches_nothing() {
        assert!(festivals_on(HijriMonth::Safar, 14, 1446).is_empty());
    }

    #[test]
    fn filters_compose() {
        let majors = all_rules(None, Some(Importance::Major));
        assert!(majors.iter().all(|r| r.importance == Importance::Major));
        assert!(majors.iter().any(|r| r.id == "laylat_al_qadr_27"));

        let hajj = all_rules(Some(Category::Hajj), None);
        assert!(hajj.iter().all(|r| r.categories.contains(&Category::Hajj)));
        assert!(hajj.iter().any(|r| r.id == "eid_al_adha"));

        assert_eq!(all_rules(None, None).len(), FESTIVAL_RULES.len());
    }

    #[test]
    fn ramadan_month_rules() {
        let rules = rules_for_month(HijriMonth::Ramadan);
        // Start, end, and five Qadr candidates.
        assert_eq!(rules.len(), 7);
    }

    #[test]
    fn ramadan_helpers() {
        let d = |day| HijriDate { year: 1446, month: HijriMonth::Ramadan, day };
        assert!(is_ramadan(d(1)));
        assert!(!is_last_ten(d(20)));
        assert!(is_last_ten(d(21)));
        assert!(is_odd_night(d(27)));
        assert!(!is_odd_night(d(28)));
        let shawwal = HijriDate { year: 1446, month: HijriMonth::Shawwal, day: 27 };
        assert!(!is_ramadan(shawwal));
    }
}
