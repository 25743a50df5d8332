//! Pot legality rules.
//!
//! Rules are pure checks over a [`GameState`]. They never change state;
//! the reducer consults them and absorbs illegal pots as no-ops.
//!
//! Checks are accumulated with stillwater's `Validation`, so a caller that
//! wants to explain a rejection gets every broken rule at once rather than
//! only the first.
//!
//! # Example
//!
//! ```rust
//! use snooker_ledger::core::{ColorName, GameState};
//! use snooker_ledger::rules::{check_pot, validate_pot};
//!
//! let state = GameState::initial();
//! assert!(validate_pot(&state, ColorName::Red));
//! assert!(!validate_pot(&state, ColorName::Pink));
//! assert!(check_pot(&state, ColorName::Pink).is_failure());
//! ```

pub mod violations;

pub use violations::PotViolation;

use crate::core::{ColorName, GameState};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::debug;

/// Outcome of checking a pot: success, or every rule it breaks.
pub type PotCheck = Validation<(), NonEmptyVec<PotViolation>>;

/// Check a proposed pot against every sequencing rule.
///
/// - a red is illegal while a colour is on
/// - a colour is illegal while a red is on
/// - in the end phase, outside a free ball, only the next colour in order
///   is legal, and nothing is legal once the colours are gone
pub fn check_pot(state: &GameState, color: ColorName) -> PotCheck {
    let mut checks: Vec<PotCheck> = Vec::new();

    let phase = if !state.on_red && color.is_red() {
        Validation::fail(PotViolation::ColorOn { got: color })
    } else if state.on_red && !color.is_red() {
        Validation::fail(PotViolation::RedOn { got: color })
    } else {
        Validation::success(())
    };
    checks.push(phase);

    let sequence = if state.is_end_phase() && !state.is_free_ball {
        match ColorName::next_required(state.colors_remaining) {
            Some(wanted) if wanted == color => Validation::success(()),
            Some(wanted) => Validation::fail(PotViolation::OutOfOrder { wanted, got: color }),
            None => Validation::fail(PotViolation::TableCleared),
        }
    } else {
        Validation::success(())
    };
    checks.push(sequence);

    Validation::all_vec(checks).map(|_| ())
}

/// Whether potting `color` is legal in `state`.
///
/// Rejections are logged at debug level with the broken rules.
pub fn validate_pot(state: &GameState, color: ColorName) -> bool {
    match check_pot(state, color) {
        Validation::Success(_) => true,
        Validation::Failure(violations) => {
            let reasons: Vec<String> = violations.iter().map(|v| v.to_string()).collect();
            debug!(
                %color,
                on_red = state.on_red,
                reds_remaining = state.reds_remaining,
                colors_remaining = state.colors_remaining,
                ?reasons,
                "invalid pot"
            );
            false
        }
    }
}

/// Every rule broken by a proposed pot; empty when the pot is legal.
pub fn pot_violations(state: &GameState, color: ColorName) -> Vec<PotViolation> {
    match check_pot(state, color) {
        Validation::Success(_) => Vec::new(),
        Validation::Failure(violations) => violations.iter().copied().collect(),
    }
}
