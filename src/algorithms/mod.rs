//! Fixed catalog of the sorting algorithms the driver can benchmark.
//!
//! Every entry is a plain `fn(&mut [i64])` that sorts in place, tagged with the
//! largest input size it is allowed to run at. The catalog is closed: it is
//! defined once here and never mutated.

pub mod counting;
pub mod divide_and_conquer;
pub mod elementary;
pub mod heap;

pub use counting::counting_sort;
pub use divide_and_conquer::{merge_sort, quick_sort};
pub use elementary::{bubble_sort, insertion_sort, selection_sort, shell_sort};
pub use heap::heap_sort;

/// In-place ascending sort over a slice of integers.
pub type SortFn = fn(&mut [i64]);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Quadratic,
    SubQuadratic,
    Linearithmic,
    Linear,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Quadratic => "Quadratic",
            Category::SubQuadratic => "Sub-quadratic",
            Category::Linearithmic => "Linearithmic",
            Category::Linear => "Linear",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Immutable description of one benchmarkable algorithm.
#[derive(Clone, Copy)]
pub struct AlgorithmSpec {
    pub name: &'static str,
    pub sort: SortFn,
    pub color_hint: &'static str,
    /// Largest input size the driver will run this algorithm at.
    pub max_input_size: usize,
    pub complexity_label: &'static str,
    pub category: Category,
    pub description: &'static str,
}

impl AlgorithmSpec {
    pub fn supports(&self, size: usize) -> bool {
        size <= self.max_input_size
    }
}

impl std::fmt::Debug for AlgorithmSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlgorithmSpec")
            .field("name", &self.name)
            .field("max_input_size", &self.max_input_size)
            .field("complexity_label", &self.complexity_label)
            .field("category", &self.category)
            .finish()
    }
}

impl std::fmt::Display for AlgorithmSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}]: {} ({}), max n = {}, {}",
            self.name, self.complexity_label, self.category, self.max_input_size, self.description
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AlgorithmKind {
    SelectionSort,
    BubbleSort,
    InsertionSort,
    ShellSort,
    MergeSort,
    QuickSort,
    HeapSort,
    CountingSort,
}

static CATALOG: [AlgorithmSpec; 8] = [
    AlgorithmSpec {
        name: "Selection Sort",
        sort: selection_sort,
        color_hint: "#ef4444",
        max_input_size: 10_000,
        complexity_label: "O(n²)",
        category: Category::Quadratic,
        description: "Repeatedly finds minimum element",
    },
    AlgorithmSpec {
        name: "Bubble Sort",
        sort: bubble_sort,
        color_hint: "#f97316",
        max_input_size: 10_000,
        complexity_label: "O(n²)",
        category: Category::Quadratic,
        description: "Swaps adjacent elements",
    },
    AlgorithmSpec {
        name: "Insertion Sort",
        sort: insertion_sort,
        color_hint: "#f59e0b",
        max_input_size: 10_000,
        complexity_label: "O(n²)",
        category: Category::Quadratic,
        description: "Builds sorted array incrementally",
    },
    AlgorithmSpec {
        name: "Shell Sort",
        sort: shell_sort,
        color_hint: "#84cc16",
        max_input_size: 100_000,
        complexity_label: "O(n log² n)",
        category: Category::SubQuadratic,
        description: "Gap-based insertion sort",
    },
    AlgorithmSpec {
        name: "Merge Sort",
        sort: merge_sort,
        color_hint: "#10b981",
        max_input_size: 100_000,
        complexity_label: "O(n log n)",
        category: Category::Linearithmic,
        description: "Divide and conquer",
    },
    AlgorithmSpec {
        name: "Quick Sort",
        sort: quick_sort,
        color_hint: "#3b82f6",
        max_input_size: 100_000,
        complexity_label: "O(n log n)",
        category: Category::Linearithmic,
        description: "Partition-based sorting",
    },
    AlgorithmSpec {
        name: "Heap Sort",
        sort: heap_sort,
        color_hint: "#8b5cf6",
        max_input_size: 100_000,
        complexity_label: "O(n log n)",
        category: Category::Linearithmic,
        description: "Binary heap structure",
    },
    // The count table is sized by the value range, not the input length.
    AlgorithmSpec {
        name: "Counting Sort",
        sort: counting_sort,
        color_hint: "#ec4899",
        max_input_size: 1_000_000,
        complexity_label: "O(n + k)",
        category: Category::Linear,
        description: "Non-comparison based",
    },
];

impl AlgorithmKind {
    /// All algorithms in catalog order.
    pub fn all() -> Vec<AlgorithmKind> {
        vec![
            AlgorithmKind::SelectionSort,
            AlgorithmKind::BubbleSort,
            AlgorithmKind::InsertionSort,
            AlgorithmKind::ShellSort,
            AlgorithmKind::MergeSort,
            AlgorithmKind::QuickSort,
            AlgorithmKind::HeapSort,
            AlgorithmKind::CountingSort,
        ]
    }

    pub fn spec(&self) -> &'static AlgorithmSpec {
        &CATALOG[*self as usize]
    }

    pub fn name(&self) -> &'static str {
        self.spec().name
    }
}

/// The full catalog, in display order.
pub fn catalog() -> &'static [AlgorithmSpec] {
    &CATALOG
}

pub fn find_by_name(name: &str) -> Option<&'static AlgorithmSpec> {
    CATALOG.iter().find(|spec| spec.name == name)
}

/// Case-insensitive lookup that also accepts a short form like `quick` or
/// `counting-sort` for command-line use.
pub fn find_by_alias(alias: &str) -> Option<&'static AlgorithmSpec> {
    let wanted = normalize(alias);
    CATALOG.iter().find(|spec| {
        let name = normalize(spec.name);
        name == wanted || name.strip_suffix("sort") == Some(wanted.as_str())
    })
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

pub fn by_category(category: Category) -> Vec<&'static AlgorithmSpec> {
    CATALOG
        .iter()
        .filter(|spec| spec.category == category)
        .collect()
}

/// Pretty print the catalog
pub fn print_catalog() {
    println!(
        "{:<16} {:>10} {:>14} {:>15}  {}",
        "Algorithm", "Max n", "Complexity", "Category", "Description"
    );
    println!("{}", "=".repeat(90));
    for spec in catalog() {
        println!(
            "{:<16} {:>10} {:>14} {:>15}  {}",
            spec.name,
            spec.max_input_size,
            spec.complexity_label,
            spec.category,
            spec.description
        );
    }
}
