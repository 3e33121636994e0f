//! Scripted historical-event adjustments.
//!
//! Explicit `(year list, month range, delta)` rules layered onto the
//! seasonal baseline: drought years depress vegetation in the expected wet
//! season, the 2022 floods first depress and then briefly boost vegetation,
//! and the 2020 pandemic months depress combustion-linked pollutants. Year
//! ranges outside these tables still synthesize; they simply lose the
//! scripted adjustments.
//!
//! The year lists and deltas are illustrative configuration constants.
//! Preserve them exactly; any change is a behavior change.

use crate::params::Parameter;

/// One scripted adjustment: applies in the listed years, for months in the
/// inclusive range, as a signed fraction of the regional base level.
#[derive(Debug, Clone, Copy)]
pub struct EventRule {
    pub name: &'static str,
    pub years: &'static [i32],
    pub first_month: u32,
    pub last_month: u32,
    pub delta_frac: f64,
}

impl EventRule {
    pub fn applies(&self, year: i32, month: u32) -> bool {
        self.years.contains(&year) && month >= self.first_month && month <= self.last_month
    }
}

const NDVI_EVENTS: &[EventRule] = &[
    EventRule { name: "drought", years: &[2019, 2021], first_month: 6, last_month: 9, delta_frac: -0.12 },
    EventRule { name: "flood-inundation", years: &[2022], first_month: 7, last_month: 9, delta_frac: -0.18 },
    EventRule { name: "flood-recovery", years: &[2022], first_month: 10, last_month: 12, delta_frac: 0.08 },
];

const AEROSOL_EVENTS: &[EventRule] = &[
    EventRule { name: "pandemic-slowdown", years: &[2020], first_month: 3, last_month: 8, delta_frac: -0.10 },
];

const NO2_EVENTS: &[EventRule] = &[
    EventRule { name: "pandemic-slowdown", years: &[2020], first_month: 3, last_month: 8, delta_frac: -0.18 },
];

const SO2_EVENTS: &[EventRule] = &[
    EventRule { name: "pandemic-slowdown", years: &[2020], first_month: 3, last_month: 8, delta_frac: -0.12 },
];

const CO_EVENTS: &[EventRule] = &[
    EventRule { name: "pandemic-slowdown", years: &[2020], first_month: 3, last_month: 8, delta_frac: -0.10 },
];

/// Scripted rules for one parameter, applied in order.
pub fn event_rules(param: Parameter) -> &'static [EventRule] {
    match param {
        Parameter::Ndvi => NDVI_EVENTS,
        Parameter::Aerosol => AEROSOL_EVENTS,
        Parameter::No2 => NO2_EVENTS,
        Parameter::So2 => SO2_EVENTS,
        Parameter::Co => CO_EVENTS,
    }
}
