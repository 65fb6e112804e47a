//! Construction-time invariants.
//!
//! Each validated entity owns a static table of [`Rule`]s. A rule is a pure
//! predicate over the complete candidate record; all rules of a table are
//! evaluated and every violation is reported. A later revision of the
//! standard adds rows to a table without touching any caller.

use std::collections::HashSet;

use super::class::{Class, ClassRef, Leg};
use super::course::Control;
use super::error::{IofError, ValidationError};
use super::fee::Fee;

/// One invariant of an entity type.
pub struct Rule<T> {
    /// Stable rule identifier, e.g. "FEE-1".
    pub id: &'static str,
    /// Field the violation is reported on.
    pub field: &'static str,
    pub message: &'static str,
    /// Returns `true` when the record satisfies the rule.
    pub holds: fn(&T) -> bool,
}

/// An entity with cross-field invariants.
pub trait Validate: Sized + 'static {
    fn rules() -> &'static [Rule<Self>];

    /// Every rule the record violates, in table order.
    fn violations(&self) -> Vec<ValidationError> {
        Self::rules()
            .iter()
            .filter(|rule| !(rule.holds)(self))
            .map(|rule| ValidationError::with_rule(rule.field, rule.message, rule.id))
            .collect()
    }

    fn validate(&self) -> Result<(), IofError> {
        let errors = self.violations();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(IofError::Validation(errors))
        }
    }
}

/// Hand out `candidate` only if it satisfies all of its rules.
pub(crate) fn checked<T: Validate>(candidate: T) -> Result<T, IofError> {
    candidate.validate()?;
    Ok(candidate)
}

// ---------------------------------------------------------------------------
// Fee
// ---------------------------------------------------------------------------

static FEE_RULES: &[Rule<Fee>] = &[
    Rule {
        id: "FEE-1",
        field: "percentage",
        message: "amount and percentage are mutually exclusive",
        holds: fee_amount_xor_percentage,
    },
    Rule {
        id: "FEE-2",
        field: "taxable_amount",
        message: "taxable amount is only applicable if amount is set",
        holds: fee_taxable_amount_needs_amount,
    },
    Rule {
        id: "FEE-3",
        field: "taxable_percentage",
        message: "taxable percentage is only applicable if percentage is set",
        holds: fee_taxable_percentage_needs_percentage,
    },
    Rule {
        id: "FEE-4",
        field: "from_date_of_birth",
        message: "birth date range starts after it ends",
        holds: fee_birth_dates_ordered,
    },
];

fn fee_amount_xor_percentage(fee: &Fee) -> bool {
    !(fee.amount.is_some() && fee.percentage.is_some())
}

fn fee_taxable_amount_needs_amount(fee: &Fee) -> bool {
    fee.taxable_amount.is_none() || fee.amount.is_some()
}

fn fee_taxable_percentage_needs_percentage(fee: &Fee) -> bool {
    fee.taxable_percentage.is_none() || fee.percentage.is_some()
}

fn fee_birth_dates_ordered(fee: &Fee) -> bool {
    ordered(fee.from_date_of_birth, fee.to_date_of_birth)
}

impl Validate for Fee {
    fn rules() -> &'static [Rule<Self>] {
        FEE_RULES
    }
}

// ---------------------------------------------------------------------------
// Leg
// ---------------------------------------------------------------------------

static LEG_RULES: &[Rule<Leg>] = &[Rule {
    id: "LEG-1",
    field: "min_number_of_competitors",
    message: "minimum number of parallel competitors exceeds the maximum",
    holds: leg_competitors_ordered,
}];

fn leg_competitors_ordered(leg: &Leg) -> bool {
    leg.min_number_of_competitors <= leg.max_number_of_competitors
}

impl Validate for Leg {
    fn rules() -> &'static [Rule<Self>] {
        LEG_RULES
    }
}

// ---------------------------------------------------------------------------
// Class
// ---------------------------------------------------------------------------

static CLASS_RULES: &[Rule<Class>] = &[
    Rule {
        id: "CLASS-1",
        field: "min_age",
        message: "minimum age exceeds maximum age",
        holds: class_ages_ordered,
    },
    Rule {
        id: "CLASS-2",
        field: "min_number_of_team_members",
        message: "minimum number of team members exceeds the maximum",
        holds: class_team_members_ordered,
    },
    Rule {
        id: "CLASS-3",
        field: "min_team_age",
        message: "minimum team age exceeds maximum team age",
        holds: class_team_ages_ordered,
    },
    Rule {
        id: "CLASS-4",
        field: "too_few_entries_substitute_class",
        message: "a class cannot be its own substitute class",
        holds: class_too_few_not_self,
    },
    Rule {
        id: "CLASS-5",
        field: "too_many_entries_substitute_class",
        message: "a class cannot be its own substitute class",
        holds: class_too_many_not_self,
    },
];

fn class_ages_ordered(class: &Class) -> bool {
    ordered(class.min_age, class.max_age)
}

fn class_team_members_ordered(class: &Class) -> bool {
    ordered(
        class.min_number_of_team_members,
        class.max_number_of_team_members,
    )
}

fn class_team_ages_ordered(class: &Class) -> bool {
    ordered(class.min_team_age, class.max_team_age)
}

fn class_too_few_not_self(class: &Class) -> bool {
    !refers_to_self(class, class.too_few_entries_substitute_class.as_ref())
}

fn class_too_many_not_self(class: &Class) -> bool {
    !refers_to_self(class, class.too_many_entries_substitute_class.as_ref())
}

fn refers_to_self(class: &Class, target: Option<&ClassRef>) -> bool {
    target.is_some_and(|r| r.matches(class))
}

impl Validate for Class {
    fn rules() -> &'static [Rule<Self>] {
        CLASS_RULES
    }
}

// ---------------------------------------------------------------------------
// Control
// ---------------------------------------------------------------------------

static CONTROL_RULES: &[Rule<Control>] = &[
    Rule {
        id: "CONTROL-1",
        field: "punching_unit_ids",
        message: "punching unit ids must be unique",
        holds: control_punching_units_unique,
    },
    Rule {
        id: "CONTROL-2",
        field: "names",
        message: "control names must be unique",
        holds: control_names_unique,
    },
];

fn control_punching_units_unique(control: &Control) -> bool {
    all_unique(&control.punching_unit_ids)
}

fn control_names_unique(control: &Control) -> bool {
    all_unique(&control.names)
}

impl Validate for Control {
    fn rules() -> &'static [Rule<Self>] {
        CONTROL_RULES
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// An open bound never violates the ordering.
fn ordered<T: PartialOrd>(low: Option<T>, high: Option<T>) -> bool {
    match (low, high) {
        (Some(low), Some(high)) => low <= high,
        _ => true,
    }
}

fn all_unique<T: Eq + std::hash::Hash>(items: &[T]) -> bool {
    let mut seen = HashSet::with_capacity(items.len());
    items.iter().all(|item| seen.insert(item))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Amount, FeeBuilder, LanguageString};
    use rust_decimal::Decimal;

    fn fee() -> FeeBuilder {
        FeeBuilder::new(LanguageString::new("Entry"))
    }

    #[test]
    fn every_violation_is_reported() {
        let err = fee()
            .percentage(10.0)
            .amount(Amount::new(Decimal::ONE))
            .taxable_percentage(5.0)
            .taxable_amount(Amount::new(Decimal::ONE))
            .build()
            .unwrap_err();
        assert_eq!(err.rule_ids(), vec!["FEE-1"]);

        let err = fee()
            .taxable_amount(Amount::new(Decimal::ONE))
            .taxable_percentage(5.0)
            .build()
            .unwrap_err();
        assert_eq!(err.rule_ids(), vec!["FEE-2", "FEE-3"]);
    }

    fn table_ids<T: Validate>() -> Vec<&'static str> {
        T::rules().iter().map(|rule| rule.id).collect()
    }

    #[test]
    fn rule_tables() {
        assert_eq!(table_ids::<Fee>(), vec!["FEE-1", "FEE-2", "FEE-3", "FEE-4"]);
        assert_eq!(table_ids::<Leg>(), vec!["LEG-1"]);
        assert_eq!(
            table_ids::<Class>(),
            vec!["CLASS-1", "CLASS-2", "CLASS-3", "CLASS-4", "CLASS-5"]
        );
        assert_eq!(table_ids::<Control>(), vec!["CONTROL-1", "CONTROL-2"]);
    }

    #[test]
    fn open_bounds_are_ordered() {
        assert!(ordered(None, Some(3)));
        assert!(ordered(Some(3), None));
        assert!(ordered(Some(3), Some(3)));
        assert!(!ordered(Some(4), Some(3)));
    }

    #[test]
    fn uniqueness() {
        assert!(all_unique(&[1, 2, 3]));
        assert!(!all_unique(&["a", "b", "a"]));
    }
}
