// form.rs
use crate::client::MeasurementSet;

pub const DEFAULT_HEIGHT: f64 = 170.0;

// The value silently submitted while a group stays hidden is not the value
// the widget starts from once the user opts in (55 vs 65 for weight).
pub const SILENT_WEIGHT: f64 = 55.0;
pub const WEIGHT_PREFILL: f64 = 65.0;
pub const SILENT_CHEST: f64 = 95.0;
pub const CHEST_PREFILL: f64 = 100.0;
pub const SILENT_WAIST: f64 = 80.0;
pub const WAIST_PREFILL: f64 = 80.0;

pub const MEASUREMENT_MAX: f64 = 200.0;

/// One optional input group. Revealing is one-way for the session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Disclosure {
    #[default]
    Hidden,
    Revealed,
}

impl Disclosure {
    pub fn reveal(&mut self) { *self = Disclosure::Revealed; }
    pub fn is_revealed(self) -> bool { self == Disclosure::Revealed }
}

/// Everything the user can touch on the form. Owned by the session
/// controller and threaded through each render pass; widget ranges keep the
/// numbers in bounds, so no validation happens here.
#[derive(Clone, Debug, PartialEq)]
pub struct FormState {
    pub height: f64,
    pub weight: f64,
    pub chest:  f64,
    pub waist:  f64,
    pub weight_disclosure:       Disclosure,
    pub measurements_disclosure: Disclosure,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            height: DEFAULT_HEIGHT,
            weight: WEIGHT_PREFILL,
            chest:  CHEST_PREFILL,
            waist:  WAIST_PREFILL,
            weight_disclosure:       Disclosure::Hidden,
            measurements_disclosure: Disclosure::Hidden,
        }
    }
}

impl FormState {
    pub fn reveal_weight(&mut self)       { self.weight_disclosure.reveal(); }
    pub fn reveal_measurements(&mut self) { self.measurements_disclosure.reveal(); }

    /// Weight to submit: the entered value once revealed, else 55.0.
    pub fn resolved_weight(&self) -> f64 {
        if self.weight_disclosure.is_revealed() { self.weight } else { SILENT_WEIGHT }
    }

    /// Chest and waist to submit: the entered pair once revealed, else (95, 80).
    pub fn resolved_chest_waist(&self) -> (f64, f64) {
        if self.measurements_disclosure.is_revealed() { (self.chest, self.waist) }
        else                                          { (SILENT_CHEST, SILENT_WAIST) }
    }

    /// Resolve defaults once, at submission time, into the wire payload.
    pub fn resolve(&self) -> MeasurementSet {
        let (chest, waist) = self.resolved_chest_waist();
        MeasurementSet {
            chest_cms:  chest,
            waist_cms:  waist,
            height_cms: self.height,
            weight_kgs: self.resolved_weight(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn hidden_weight_ignores_widget_value() {
        let mut form = FormState::default();
        form.weight = 120.0;
        assert_eq!(form.resolved_weight(), SILENT_WEIGHT);
    }

    #[test]
    fn revealed_weight_is_passed_through() {
        let mut form = FormState::default();
        form.reveal_weight();
        form.weight = 80.0;
        assert_eq!(form.resolved_weight(), 80.0);
    }

    #[test]
    fn hidden_measurements_use_silent_defaults() {
        let mut form = FormState::default();
        form.chest = 150.0;
        form.waist = 150.0;
        assert_eq!(form.resolved_chest_waist(), (SILENT_CHEST, SILENT_WAIST));
    }

    #[test]
    fn revealed_measurements_are_passed_through() {
        let mut form = FormState::default();
        form.reveal_measurements();
        form.chest = 110.0;
        form.waist = 90.0;
        assert_eq!(form.resolved_chest_waist(), (110.0, 90.0));
    }

    #[test]
    fn reveal_is_one_way_and_idempotent() {
        let mut d = Disclosure::default();
        assert!(!d.is_revealed());
        d.reveal();
        assert!(d.is_revealed());
        d.reveal();
        assert!(d.is_revealed());
    }

    #[test]
    fn default_form_resolves_to_the_silent_payload() {
        let set = FormState::default().resolve();
        assert_eq!(set.chest_cms, 95.0);
        assert_eq!(set.waist_cms, 80.0);
        assert_eq!(set.height_cms, 170.0);
        assert_eq!(set.weight_kgs, 55.0);
    }

    #[test]
    fn fully_revealed_form_resolves_to_entered_values() {
        let mut form = FormState::default();
        form.height = 180.0;
        form.reveal_weight();
        form.weight = 80.0;
        form.reveal_measurements();
        form.chest = 110.0;
        form.waist = 90.0;
        let set = form.resolve();
        assert_eq!(set.chest_cms, 110.0);
        assert_eq!(set.waist_cms, 90.0);
        assert_eq!(set.height_cms, 180.0);
        assert_eq!(set.weight_kgs, 80.0);
    }
}
