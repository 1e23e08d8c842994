/// Counting sort over the value range `min..=max`.
///
/// The count table holds `max - min + 1` entries, so memory grows with the
/// value range rather than the input length. Inputs with a huge spread (say
/// `i64::MIN` next to `i64::MAX`) will exhaust memory. The driver only bounds
/// this through `max_input_size`; the value range is left unchecked.
pub fn counting_sort(data: &mut [i64]) {
    let (Some(&min), Some(&max)) = (data.iter().min(), data.iter().max()) else {
        return;
    };

    let range = max.abs_diff(min) as usize + 1;
    let mut count = vec![0usize; range];

    for &value in data.iter() {
        count[value.abs_diff(min) as usize] += 1;
    }

    // Cumulative counts give each value's end position in the output
    for i in 1..count.len() {
        count[i] += count[i - 1];
    }

    let mut output = vec![0i64; data.len()];
    for &value in data.iter().rev() {
        let slot = &mut count[value.abs_diff(min) as usize];
        *slot -= 1;
        output[*slot] = value;
    }

    data.copy_from_slice(&output);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counting_sort_negative_range() {
        let mut data = vec![-2, 5, -7, 0, 5, -2, 3];
        counting_sort(&mut data);
        assert_eq!(data, vec![-7, -2, -2, 0, 3, 5, 5]);
    }

    #[test]
    fn test_counting_sort_single_value() {
        let mut data = vec![42; 16];
        counting_sort(&mut data);
        assert_eq!(data, vec![42; 16]);
    }

    #[test]
    fn test_counting_sort_empty() {
        let mut data: Vec<i64> = vec![];
        counting_sort(&mut data);
        assert!(data.is_empty());
    }
}
