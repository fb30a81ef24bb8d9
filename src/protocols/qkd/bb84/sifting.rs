//! Basis reconciliation over the public channel.

use crate::Basis;
use crate::errors::ProtocolError;

/// Keeps, in order, the rounds where Alice and Bob used the same basis.
///
/// Both outputs have equal length and stay aligned by round. No matches is a
/// valid outcome and yields empty vectors.
pub fn sift(
    alice_bits: &[bool],
    alice_bases: &[Basis],
    bob_bits: &[bool],
    bob_bases: &[Basis],
) -> Result<(Vec<bool>, Vec<bool>), ProtocolError> {
    let n = alice_bits.len();
    ProtocolError::check_len("alice bases", n, alice_bases.len())?;
    ProtocolError::check_len("bob bits", n, bob_bits.len())?;
    ProtocolError::check_len("bob bases", n, bob_bases.len())?;

    Ok((0..n)
        .filter(|&i| alice_bases[i] == bob_bases[i])
        .map(|i| (alice_bits[i], bob_bits[i]))
        .unzip())
}

#[cfg(test)]
mod tests {
    use super::*;
    use Basis::{Diagonal as X, Rectilinear as Z};

    #[test]
    fn keeps_matching_positions_in_order() {
        let alice_bits = [true, false, true, true, false];
        let alice_bases = [Z, X, X, Z, Z];
        // Bob disagrees with Alice only at rounds 1 and 3, which sifting drops.
        let bob_bits = [true, true, true, false, false];
        let bob_bases = [Z, Z, X, X, Z];

        let (a, b) = sift(&alice_bits, &alice_bases, &bob_bits, &bob_bases).unwrap();
        assert_eq!(a, vec![true, true, false]);
        assert_eq!(b, vec![true, true, false]);
    }

    #[test]
    fn keeps_disagreements_in_matching_rounds() {
        let (a, b) = sift(&[true, false], &[X, Z], &[false, false], &[X, Z]).unwrap();
        assert_eq!(a, vec![true, false]);
        assert_eq!(b, vec![false, false]);
    }

    #[test]
    fn no_matching_basis_yields_empty_keys() {
        let (a, b) = sift(&[true, false], &[Z, X], &[false, false], &[X, Z]).unwrap();
        assert!(a.is_empty() && b.is_empty());
    }

    #[test]
    fn empty_input_is_fine() {
        let (a, b) = sift(&[], &[], &[], &[]).unwrap();
        assert!(a.is_empty() && b.is_empty());
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let err = sift(&[true], &[Z], &[true, false], &[Z, Z]).unwrap_err();
        assert!(matches!(
            err,
            ProtocolError::LengthMismatch {
                what: "bob bits",
                ..
            }
        ));
    }
}
