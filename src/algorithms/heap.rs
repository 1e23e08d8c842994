/// Heap sort - O(n log n) worst case, in-place
pub fn heap_sort(data: &mut [i64]) {
    let n = data.len();
    if n <= 1 {
        return;
    }

    // Build max heap
    for i in (0..n / 2).rev() {
        sift_down(data, n, i);
    }

    // Extract elements from heap
    for end in (1..n).rev() {
        data.swap(0, end);
        sift_down(data, end, 0);
    }
}

#[inline]
fn sift_down(data: &mut [i64], n: usize, mut i: usize) {
    loop {
        let mut largest = i;
        let left = 2 * i + 1;
        let right = 2 * i + 2;

        if left < n && data[left] > data[largest] {
            largest = left;
        }
        if right < n && data[right] > data[largest] {
            largest = right;
        }
        if largest == i {
            return;
        }

        data.swap(i, largest);
        i = largest;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heap_sort() {
        let mut data = vec![12, -4, 0, 33, 12, 5, -100];
        heap_sort(&mut data);
        assert_eq!(data, vec![-100, -4, 0, 5, 12, 12, 33]);
    }

    #[test]
    fn test_sift_down_restores_heap() {
        let mut data = vec![1, 9, 8, 7, 6];
        sift_down(&mut data, 5, 0);
        assert_eq!(data[0], 9);
        for i in 0..data.len() / 2 {
            for child in [2 * i + 1, 2 * i + 2] {
                if child < data.len() {
                    assert!(data[i] >= data[child]);
                }
            }
        }
    }
}
