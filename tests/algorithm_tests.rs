use sortbench::catalog;
use sortbench::rand::{random_array, set_seed};

mod common;
use common::is_sorted;

fn assert_sorts(input: &[i64]) {
    let mut expected = input.to_vec();
    expected.sort();

    for spec in catalog() {
        let mut data = input.to_vec();
        (spec.sort)(&mut data);
        assert!(is_sorted(&data), "{} left data unsorted", spec.name);
        // Same multiset as the input
        assert_eq!(data, expected, "{} is not a permutation", spec.name);
    }
}

#[test]
fn test_empty_and_single() {
    assert_sorts(&[]);
    assert_sorts(&[7]);
    assert_sorts(&[-7]);
}

#[test]
fn test_random_inputs() {
    set_seed(1234);
    for len in [2, 3, 10, 31, 64, 500, 1000] {
        let data = random_array(len, 10_000);
        assert_sorts(&data);
    }
}

#[test]
fn test_heavy_duplicates() {
    set_seed(99);
    let data = random_array(2000, 4);
    assert_sorts(&data);
    assert_sorts(&[5; 100]);
}

#[test]
fn test_negative_values() {
    let data: Vec<i64> = (0..300).map(|i| (i * 7919 % 601) - 300).collect();
    assert_sorts(&data);
    assert_sorts(&[0, -1, -1_000_000, 3, -1, 1_000_000]);
}

#[test]
fn test_sorted_and_reversed() {
    let sorted: Vec<i64> = (0..1500).collect();
    let reversed: Vec<i64> = sorted.iter().rev().copied().collect();

    for spec in catalog() {
        let mut a = sorted.clone();
        let mut b = reversed.clone();
        (spec.sort)(&mut a);
        (spec.sort)(&mut b);
        assert_eq!(a, sorted, "{} broke sorted input", spec.name);
        assert_eq!(b, sorted, "{} failed on reversed input", spec.name);
    }
}

#[test]
fn test_deterministic() {
    set_seed(5);
    let data = random_array(777, 10_000);
    for spec in catalog() {
        let mut first = data.clone();
        let mut second = data.clone();
        (spec.sort)(&mut first);
        (spec.sort)(&mut second);
        assert_eq!(first, second, "{} is not deterministic", spec.name);
    }
}
