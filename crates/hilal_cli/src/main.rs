use clap::{Parser, Subcommand};
use hilal_crescent::{CriterionId, CriterionResult, evaluate, evaluate_all};
use hilal_hijri::{
    HijriDate, HijriMonth, MonthStartCache, festivals_on, gregorian_to_hijri,
    gregorian_to_hijri_tabular, hijri_month_range, hijri_to_gregorian_tabular, rules_for_month,
};
use hilal_prayer::{AsrMethod, ConventionId, prayer_times, qibla};
use hilal_time::{CivilDate, ISLAMIC_WEEKDAY_NAMES, tt_to_ut};

mod new_moons;

use new_moons::{all_conjunctions, new_moon_table};

#[derive(Parser)]
#[command(name = "hilal", about = "Islamic calendar and prayer time CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the daily prayer times for a date and location
    Pray {
        /// Gregorian date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Latitude in degrees (north positive)
        #[arg(long)]
        lat: f64,
        /// Longitude in degrees (east positive)
        #[arg(long)]
        lon: f64,
        /// IANA timezone for display (e.g. Asia/Riyadh)
        #[arg(long, default_value = "UTC")]
        tz: String,
        /// Calculation convention: mwl, isna, egypt, makkah, karachi, tehran, jafari
        #[arg(long, default_value = "mwl")]
        convention: String,
        /// Asr shadow method: shafii or hanafi
        #[arg(long, default_value = "shafii")]
        asr: String,
    },
    /// Qibla direction and distance from a location
    Qibla {
        /// Latitude in degrees (north positive)
        #[arg(long)]
        lat: f64,
        /// Longitude in degrees (east positive)
        #[arg(long)]
        lon: f64,
    },
    /// Resolve a Gregorian date to the Hijri calendar
    Hijri {
        /// Gregorian date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Month-start criterion
        #[arg(long, default_value = "umm_al_qura")]
        criterion: String,
        /// Observer latitude (ignored by fixed-location criteria)
        #[arg(long, default_value = "21.4225")]
        lat: f64,
        /// Observer longitude
        #[arg(long, default_value = "39.8262")]
        lon: f64,
    },
    /// Convert between Gregorian and tabular Hijri dates
    Convert {
        /// Gregorian date (YYYY-MM-DD) to convert to Hijri
        #[arg(long)]
        date: Option<String>,
        /// Hijri year (use with --month and --day) to convert to Gregorian
        #[arg(long)]
        year: Option<i32>,
        /// Hijri month (1-12)
        #[arg(long)]
        month: Option<u32>,
        /// Hijri day (1-30)
        #[arg(long)]
        day: Option<u32>,
    },
    /// Evaluate sighting criteria for the evening of a date
    Evaluate {
        /// Gregorian date of the evening (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Single criterion to evaluate (default: all eight)
        #[arg(long)]
        criterion: Option<String>,
        /// Observer latitude
        #[arg(long, default_value = "21.4225")]
        lat: f64,
        /// Observer longitude
        #[arg(long, default_value = "39.8262")]
        lon: f64,
    },
    /// List a Gregorian year's Hijri month starts
    Months {
        /// Gregorian year
        #[arg(long)]
        year: i32,
        /// Month-start criterion
        #[arg(long, default_value = "umm_al_qura")]
        criterion: String,
        /// Observer latitude
        #[arg(long, default_value = "21.4225")]
        lat: f64,
        /// Observer longitude
        #[arg(long, default_value = "39.8262")]
        lon: f64,
    },
    /// Islamic festivals for a Hijri date or month
    Festivals {
        /// Hijri month (1-12)
        #[arg(long)]
        month: u32,
        /// Hijri day (omit to list the whole month)
        #[arg(long)]
        day: Option<u32>,
        /// Hijri year, for the match record
        #[arg(long, default_value = "1446")]
        year: i32,
    },
}

fn parse_date(s: &str) -> CivilDate {
    s.parse().unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    })
}

fn parse_criterion(s: &str) -> CriterionId {
    s.parse().unwrap_or_else(|e| {
        eprintln!("{e}");
        eprintln!(
            "Valid: umm_al_qura, isna, mabims, yallop, odeh, pakistan, turkey, tabular"
        );
        std::process::exit(1);
    })
}

fn parse_convention(s: &str) -> ConventionId {
    s.parse().unwrap_or_else(|e| {
        eprintln!("{e}");
        eprintln!("Valid: mwl, isna, egypt, makkah, karachi, tehran, jafari");
        std::process::exit(1);
    })
}

fn parse_asr(s: &str) -> AsrMethod {
    s.parse().unwrap_or_else(|e| {
        eprintln!("{e}");
        eprintln!("Valid: shafii, hanafi");
        std::process::exit(1);
    })
}

fn require_month(n: u32) -> HijriMonth {
    HijriMonth::from_number(n).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    })
}

/// Latest embedded conjunction whose UT instant falls before the end of
/// the evening's civil day.
fn conjunction_for(date: CivilDate) -> f64 {
    let day_end = date.jd0() + 1.0;
    all_conjunctions()
        .into_iter()
        .filter(|&jd_tt| tt_to_ut(jd_tt) < day_end)
        .next_back()
        .unwrap_or_else(|| {
            eprintln!("No embedded conjunction data before {date} (2024-2026 covered)");
            std::process::exit(1);
        })
}

fn print_result(result: &CriterionResult) {
    let verdict = if result.month_starts { "month starts" } else { "no new month" };
    println!("{:<12} {:<13} {}", result.criterion.to_string(), verdict, result.reason);
    println!(
        "             confidence: {}{}",
        result.confidence.as_str(),
        result
            .zone
            .map(|z| format!(", zone {}", z.letter()))
            .unwrap_or_default()
    );
    if let Some(v) = &result.visibility {
        println!(
            "             ARCL {:.2} deg  ARCV {:.2} deg  DAZ {:.2} deg  W {:.3}'  lag {:.1} min  age {:.1} h",
            v.arcl_deg, v.arcv_deg, v.daz_deg, v.width_arcmin, v.lag_minutes, v.moon_age_hours
        );
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Pray { date, lat, lon, tz, convention, asr } => {
            let date = parse_date(&date);
            let convention = parse_convention(&convention);
            let asr = parse_asr(&asr);
            let times = prayer_times(date, lat, lon, &tz, convention, asr).unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                std::process::exit(1);
            });

            let row = |name: &str, t: &Option<String>| {
                println!("{name:<9} {}", t.as_deref().unwrap_or("--:--"));
            };
            println!("Prayer times for {date} ({tz}, {})", convention.as_str());
            row("Fajr", &times.fajr);
            row("Sunrise", &times.sunrise);
            row("Dhuhr", &times.dhuhr);
            row("Asr", &times.asr);
            row("Maghrib", &times.maghrib);
            row("Isha", &times.isha);
            row("Midnight", &times.midnight);
        }

        Commands::Qibla { lat, lon } => {
            let info = qibla(lat, lon);
            println!("Qibla direction: {:.2} deg from North", info.direction_deg);
            println!("Distance to Kaaba: {:.0} km", info.distance_km);
        }

        Commands::Hijri { date, criterion, lat, lon } => {
            let date = parse_date(&date);
            let criterion = parse_criterion(&criterion);
            let table = new_moon_table();
            let cache = MonthStartCache::new();

            let starts = cache.month_starts(date.year, criterion, lat, lon, &table);
            let resolved = gregorian_to_hijri(date, &starts);
            let h = resolved.date;

            println!(
                "{date} = {h} ({}, {} calendar)",
                ISLAMIC_WEEKDAY_NAMES[date.weekday()],
                resolved.source.as_str()
            );
            for m in festivals_on(h.month, h.day, h.year) {
                let day_note = if m.rule.duration_days > 1 {
                    format!(" (day {} of {})", m.day_of_event, m.rule.duration_days)
                } else {
                    String::new()
                };
                println!("  {}{day_note}: {}", m.rule.name, m.rule.description);
            }
        }

        Commands::Convert { date, year, month, day } => match (date, year, month, day) {
            (Some(date), None, None, None) => {
                let g = parse_date(&date);
                let h = gregorian_to_hijri_tabular(g);
                println!("{g} = {h} (tabular)");
            }
            (None, Some(year), Some(month), Some(day)) => {
                let month = require_month(month);
                let h = HijriDate::new_tabular(year, month, day).unwrap_or_else(|e| {
                    eprintln!("{e}");
                    std::process::exit(1);
                });
                println!("{h} = {} (tabular)", hijri_to_gregorian_tabular(h));
            }
            _ => {
                eprintln!("Use either --date, or --year with --month and --day");
                std::process::exit(1);
            }
        },

        Commands::Evaluate { date, criterion, lat, lon } => {
            let date = parse_date(&date);
            let conj_tt = conjunction_for(date);
            println!(
                "Evening of {date}, conjunction JD {conj_tt:.5} TT ({:.1} h before 0h UT)",
                (date.jd0() - tt_to_ut(conj_tt)) * 24.0
            );
            match criterion {
                Some(c) => print_result(&evaluate(parse_criterion(&c), date, lat, lon, conj_tt)),
                None => {
                    for result in evaluate_all(date, lat, lon, conj_tt) {
                        print_result(&result);
                    }
                }
            }
        }

        Commands::Months { year, criterion, lat, lon } => {
            let criterion = parse_criterion(&criterion);
            let table = new_moon_table();
            let cache = MonthStartCache::new();
            let starts = cache.month_starts(year, criterion, lat, lon, &table);

            println!("Hijri month starts around {year} ({})", criterion.as_str());
            for s in starts.iter() {
                let days = hijri_month_range(s.hijri_year, s.hijri_month, &starts)
                    .map(|r| format!("{} days", r.days))
                    .unwrap_or_else(|| "open".to_string());
                let conj = s
                    .conjunction_jd_tt
                    .map(|jd| format!("conjunction JD {jd:.5}"))
                    .unwrap_or_else(|| "tabular".to_string());
                println!(
                    "  {} {} {} starts {} ({days}, {conj})",
                    s.hijri_month.short(),
                    s.hijri_month.name(),
                    s.hijri_year,
                    s.gregorian_start
                );
            }
        }

        Commands::Festivals { month, day, year } => {
            let month = require_month(month);
            match day {
                Some(day) => {
                    let matches = festivals_on(month, day, year);
                    if matches.is_empty() {
                        println!("No festivals on {day} {month} {year} AH");
                    }
                    for m in matches {
                        let day_note = if m.rule.duration_days > 1 {
                            format!(" (day {} of {})", m.day_of_event, m.rule.duration_days)
                        } else {
                            String::new()
                        };
                        println!("{}{day_note} [{:?}]", m.rule.name, m.rule.importance);
                        println!("  {}", m.rule.description);
                        if let Some(t) = m.rule.traditions {
                            println!("  {t}");
                        }
                    }
                }
                None => {
                    println!("Festivals in {month}:");
                    for rule in rules_for_month(month) {
                        println!("  {:>2} {month}: {} [{:?}]", rule.day, rule.name, rule.importance);
                    }
                }
            }
        }
    }
}
