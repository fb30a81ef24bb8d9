use crate::errors::ProtocolError;
use std::collections::HashSet;

/// Drops the publicly disclosed positions from a sifted key.
///
/// The remaining bits keep their relative order. Both parties must apply
/// the same `sample_indices` to their own sifted key.
pub fn finalize(sifted_key: &[bool], sample_indices: &[usize]) -> Result<Vec<bool>, ProtocolError> {
    let len = sifted_key.len();
    if let Some(&index) = sample_indices.iter().find(|&&i| i >= len) {
        return Err(ProtocolError::SampleIndexOutOfRange { index, len });
    }

    let disclosed: HashSet<usize> = sample_indices.iter().copied().collect();

    Ok(sifted_key
        .iter()
        .enumerate()
        .filter(|(i, _)| !disclosed.contains(i))
        .map(|(_, &bit)| bit)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_exactly_the_sampled_positions() {
        let key = [true, false, false, true, true, false];
        let final_key = finalize(&key, &[4, 1]).unwrap();
        assert_eq!(final_key, vec![true, false, true, false]);
        assert_eq!(final_key.len(), key.len() - 2);
    }

    #[test]
    fn no_sample_keeps_everything() {
        let key = [true, false];
        assert_eq!(finalize(&key, &[]).unwrap(), key.to_vec());
    }

    #[test]
    fn sampling_everything_leaves_nothing() {
        let key = [true, false, true];
        assert!(finalize(&key, &[2, 0, 1]).unwrap().is_empty());
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        assert!(matches!(
            finalize(&[true], &[3]),
            Err(ProtocolError::SampleIndexOutOfRange { index: 3, len: 1 })
        ));
    }
}
