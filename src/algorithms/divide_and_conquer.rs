/// Top-down merge sort. Allocates one scratch buffer the size of the input
/// and reuses it for every merge.
pub fn merge_sort(data: &mut [i64]) {
    if data.len() <= 1 {
        return;
    }
    let mut scratch = data.to_vec();
    merge_sort_into(data, &mut scratch);
}

fn merge_sort_into(data: &mut [i64], scratch: &mut [i64]) {
    let len = data.len();
    if len <= 1 {
        return;
    }

    let mid = len / 2;
    {
        let (left, right) = data.split_at_mut(mid);
        let (left_scratch, right_scratch) = scratch.split_at_mut(mid);
        merge_sort_into(left, left_scratch);
        merge_sort_into(right, right_scratch);
    }

    scratch[..len].copy_from_slice(data);
    merge(&scratch[..mid], &scratch[mid..len], data);
}

// Stable merge of two sorted halves into `out`
fn merge(left: &[i64], right: &[i64], out: &mut [i64]) {
    let (mut i, mut j, mut k) = (0, 0, 0);

    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            out[k] = left[i];
            i += 1;
        } else {
            out[k] = right[j];
            j += 1;
        }
        k += 1;
    }

    out[k..k + left.len() - i].copy_from_slice(&left[i..]);
    k += left.len() - i;
    out[k..].copy_from_slice(&right[j..]);
}

/// Quicksort with Lomuto partitioning around the last element.
///
/// Recurses into the smaller partition and loops on the larger one, so the
/// stack depth stays logarithmic even on already-sorted input.
pub fn quick_sort(mut data: &mut [i64]) {
    while data.len() > 1 {
        let pivot_idx = partition(data);
        let (left, right) = std::mem::take(&mut data).split_at_mut(pivot_idx);
        let right = &mut right[1..];
        if left.len() < right.len() {
            quick_sort(left);
            data = right;
        } else {
            quick_sort(right);
            data = left;
        }
    }
}

fn partition(data: &mut [i64]) -> usize {
    let high = data.len() - 1;
    let pivot = data[high];

    let mut i = 0;
    for j in 0..high {
        if data[j] < pivot {
            data.swap(i, j);
            i += 1;
        }
    }
    data.swap(i, high);
    i
}
