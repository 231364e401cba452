//! Nibble packing for save images
//!
//! Peg codes fit in four bits, so two consecutive codes share one byte:
//! the first code in the low nibble, the second in the high nibble.

/// Pack pairs of nibble-sized values into single bytes
///
/// An odd-length input is padded with one trailing zero first. Only the
/// low four bits of each input byte are kept.
///
/// # Examples
/// ```
/// use mastermind::core::codec::squeeze;
///
/// assert_eq!(squeeze(&[1, 2, 3]), vec![0x21, 0x03]);
/// ```
#[must_use]
pub fn squeeze(data: &[u8]) -> Vec<u8> {
    data.chunks(2)
        .map(|pair| {
            let low = pair[0] & 0x0F;
            let high = pair.get(1).map_or(0, |&b| (b << 4) & 0xF0);
            low | high
        })
        .collect()
}

/// Reverse [`squeeze`]
///
/// Always yields twice as many bytes as it is given; a trailing pad zero
/// is left for the caller to trim against its expected count.
///
/// # Examples
/// ```
/// use mastermind::core::codec::unsqueeze;
///
/// assert_eq!(unsqueeze(&[0x21, 0x03]), vec![1, 2, 3, 0]);
/// ```
#[must_use]
pub fn unsqueeze(data: &[u8]) -> Vec<u8> {
    data.iter()
        .flat_map(|&byte| [byte & 0x0F, (byte >> 4) & 0x0F])
        .collect()
}

/// Number of packed bytes needed for `count` nibbles
#[inline]
#[must_use]
pub const fn squeezed_len(count: usize) -> usize {
    count.div_ceil(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squeeze_odd_input_pads() {
        assert_eq!(squeeze(&[1, 2, 3]), vec![0x21, 0x03]);
        assert_eq!(unsqueeze(&[0x21, 0x03]), vec![1, 2, 3, 0]);
    }

    #[test]
    fn squeeze_empty() {
        assert!(squeeze(&[]).is_empty());
        assert!(unsqueeze(&[]).is_empty());
    }

    #[test]
    fn squeeze_drops_high_bits() {
        assert_eq!(squeeze(&[0xF1, 0x12]), vec![0x21]);
    }

    #[test]
    fn unsqueeze_restores_padded_input() {
        let inputs: [&[u8]; 5] = [
            &[],
            &[5],
            &[0, 8],
            &[8, 7, 6, 5, 4, 3, 2, 1, 0],
            &[15, 15, 15, 15],
        ];

        for input in inputs {
            let mut expected = input.to_vec();
            if expected.len() % 2 == 1 {
                expected.push(0);
            }
            assert_eq!(unsqueeze(&squeeze(input)), expected, "input {input:?}");
        }
    }

    #[test]
    fn squeezed_len_rounds_up() {
        assert_eq!(squeezed_len(0), 0);
        assert_eq!(squeezed_len(1), 1);
        assert_eq!(squeezed_len(36), 18);
        assert_eq!(squeezed_len(37), 19);
        assert_eq!(squeeze(&[1; 37]).len(), squeezed_len(37));
    }
}
