//! Structural "exactly one flagged" validation.

use planroute_core::{DomainError, DomainResult};

/// Check that exactly one item of `items` satisfies `is_flagged`.
///
/// An empty collection is exempt: the invariant only binds once lines or
/// candidates exist. Any other flag count fails with a validation error
/// built from `message`, which should read as a user-facing sentence.
pub fn exactly_one_flagged<T>(
    items: &[T],
    is_flagged: impl Fn(&T) -> bool,
    message: &str,
) -> DomainResult<()> {
    if items.is_empty() {
        return Ok(());
    }

    let flagged = items.iter().filter(|item| is_flagged(item)).count();
    if flagged == 1 {
        Ok(())
    } else {
        Err(DomainError::validation(format!("{message} (found {flagged})")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MSG: &str = "there must be one and only one item flagged";

    #[test]
    fn empty_collection_is_exempt() {
        let items: Vec<bool> = Vec::new();
        assert!(exactly_one_flagged(&items, |b| *b, MSG).is_ok());
    }

    #[test]
    fn single_flag_passes() {
        assert!(exactly_one_flagged(&[false, true, false], |b| *b, MSG).is_ok());
    }

    #[test]
    fn zero_flags_fail_once_items_exist() {
        let err = exactly_one_flagged(&[false, false], |b| *b, MSG).unwrap_err();
        match err {
            DomainError::Validation(msg) => assert!(msg.contains("found 0")),
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn multiple_flags_fail() {
        let err = exactly_one_flagged(&[true, true], |b| *b, MSG).unwrap_err();
        match err {
            DomainError::Validation(msg) => assert!(msg.contains("found 2")),
            other => panic!("expected Validation, got {other:?}"),
        }
    }
}
