use crate::domain::PathEntry;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Outcome {
    Success,
    Failure,
}

/// A hop counts as successful when it proved activity itself or its immediate
/// successor did. The hop's marker and its outgoing line share the outcome.
pub fn entry_outcome(path: &[PathEntry], index: usize) -> Outcome {
    let proven = path.get(index).is_some_and(PathEntry::has_proof) || path.get(index + 1).is_some_and(PathEntry::has_proof);
    if proven { Outcome::Success } else { Outcome::Failure }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Receipt, WitnessReport};
    use rstest::rstest;

    fn entry(receipt: bool, witness_count: usize) -> PathEntry {
        PathEntry {
            challengee: "hotspot".to_string(),
            challengee_lon: 0.0,
            challengee_lat: 0.0,
            receipt: receipt.then(|| Receipt {
                timestamp: None,
                signal: None,
                origin: None,
                data: None,
            }),
            witnesses: (0..witness_count)
                .map(|i| WitnessReport {
                    gateway: format!("witness-{i}"),
                    location: None,
                    is_valid: false,
                })
                .collect(),
        }
    }

    #[rstest]
    #[case::receipt_and_no_witnesses(true, 0)]
    #[case::receipt_and_witnesses(true, 3)]
    #[case::witnesses_only(false, 1)]
    fn an_entry_with_proof_is_successful(#[case] receipt: bool, #[case] witness_count: usize) {
        let path = vec![entry(receipt, witness_count)];

        assert_eq!(entry_outcome(&path, 0), Outcome::Success);
    }

    #[test]
    fn a_bare_entry_with_a_proven_successor_is_successful() {
        let path = vec![entry(false, 0), entry(true, 0)];

        assert_eq!(entry_outcome(&path, 0), Outcome::Success);
    }

    #[test]
    fn a_bare_entry_with_a_bare_successor_is_a_failure() {
        let path = vec![entry(false, 0), entry(false, 0)];

        assert_eq!(entry_outcome(&path, 0), Outcome::Failure);
    }

    #[test]
    fn a_bare_last_entry_is_a_failure() {
        let path = vec![entry(true, 0), entry(false, 0)];

        assert_eq!(entry_outcome(&path, 1), Outcome::Failure);
    }

    #[test]
    fn proof_two_hops_ahead_does_not_count() {
        let path = vec![entry(false, 0), entry(false, 0), entry(true, 0)];

        assert_eq!(entry_outcome(&path, 0), Outcome::Failure);
    }
}
