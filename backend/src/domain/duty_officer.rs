//! Fair-rotation duty officer selection.
//!
//! Picks one person from the eligible set, preferring whoever has carried the
//! duty least often and, among equals, whoever has waited longest since their
//! last duty. Someone who has never served goes before anyone with a history.
//!
//! Selection is a pure read of the candidates. Crediting the chosen person
//! (incrementing `duty_count`, stamping `last_duty_date`) happens only when a
//! selection is confirmed, see `DutyService::confirm_duty_officer`.

use std::cmp::Ordering;

use crate::domain::models::Person;

/// Rotation priority between two candidates; `Less` means `a` serves first.
///
/// Two candidates with the same count who have both never served compare
/// `Equal`; which of them gets picked is left to input order.
pub fn rotation_order(a: &Person, b: &Person) -> Ordering {
    a.duty_count
        .cmp(&b.duty_count)
        .then_with(|| match (a.last_duty_date, b.last_duty_date) {
            (Some(a_date), Some(b_date)) => a_date.cmp(&b_date),
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
}

/// Select today's duty officer from the eligible candidates.
///
/// Returns `None` only when `eligible` is empty. Runs as a single pass that
/// keeps the best candidate so far; on a full tie the earlier candidate stays.
pub fn select_duty_officer<'a, I>(eligible: I) -> Option<&'a Person>
where
    I: IntoIterator<Item = &'a Person>,
{
    eligible.into_iter().reduce(|best, candidate| {
        if rotation_order(candidate, best) == Ordering::Less {
            candidate
        } else {
            best
        }
    })
}
