//! Crescent-visibility physics and month-start criteria.
//!
//! This crate provides:
//! - Sunset crescent geometry (ARCL, ARCV, DAZ, width, semidiameter,
//!   age, lag, Yallop q, illumination, best observation time)
//! - Eight month-start criteria (Umm al-Qura, ISNA, MABIMS, Yallop,
//!   Odeh, Pakistan, Turkey, tabular) with explained verdicts
//! - First-sighting search over the evenings after a conjunction

pub mod astronomy;
pub mod criteria;
pub mod error;

pub use astronomy::{
    Crescent, CrescentParams, CrescentVisibility, best_observation_jd, compute_crescent,
    compute_crescent_params, compute_visibility, crescent_width_arcmin, elongation_deg,
    illuminated_fraction, moon_age_hours, moon_semidiameter_arcmin, yallop_q,
};
pub use criteria::{
    ANKARA, CRITERIA, Confidence, CriterionId, CriterionKind, CriterionMeta, CriterionResult,
    FixedLocation, MECCA, Zone, evaluate, evaluate_all, first_sighting, yallop_zone,
};
pub use error::CrescentError;
