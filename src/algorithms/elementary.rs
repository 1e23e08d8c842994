// Quadratic and gap-based insertion sorts

pub fn selection_sort(data: &mut [i64]) {
    let n = data.len();
    for i in 0..n.saturating_sub(1) {
        let mut min_idx = i;
        for j in i + 1..n {
            if data[j] < data[min_idx] {
                min_idx = j;
            }
        }
        if min_idx != i {
            data.swap(i, min_idx);
        }
    }
}

/// Bubble sort with early exit once a full pass makes no swap.
pub fn bubble_sort(data: &mut [i64]) {
    let n = data.len();
    for i in 0..n.saturating_sub(1) {
        let mut swapped = false;
        for j in 0..n - i - 1 {
            if data[j] > data[j + 1] {
                data.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

pub fn insertion_sort(data: &mut [i64]) {
    for i in 1..data.len() {
        let key = data[i];
        let mut j = i;
        // Shift larger elements right instead of swapping pairwise
        while j > 0 && data[j - 1] > key {
            data[j] = data[j - 1];
            j -= 1;
        }
        data[j] = key;
    }
}

/// Shell sort using the halving gap sequence n/2, n/4, ..., 1.
pub fn shell_sort(data: &mut [i64]) {
    let n = data.len();
    let mut gap = n / 2;

    while gap > 0 {
        for i in gap..n {
            let temp = data[i];
            let mut j = i;
            while j >= gap && data[j - gap] > temp {
                data[j] = data[j - gap];
                j -= gap;
            }
            data[j] = temp;
        }
        gap /= 2;
    }
}
