use std::collections::HashMap;

use crate::algorithms::{self, AlgorithmSpec};
use crate::error::{BenchError, Result};

/// Which catalog algorithms the next run should measure, keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    chosen: HashMap<&'static str, bool>,
}

impl Selection {
    /// Empty selection; nothing will run until something is chosen.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all() -> Self {
        let mut selection = Self::new();
        selection.select_all();
        selection
    }

    /// Build a selection from catalog names or command-line aliases.
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut selection = Self::new();
        for name in names {
            let name = name.as_ref();
            let spec = algorithms::find_by_name(name)
                .or_else(|| algorithms::find_by_alias(name))
                .ok_or_else(|| BenchError::UnknownAlgorithm(name.to_string()))?;
            selection.chosen.insert(spec.name, true);
        }
        Ok(selection)
    }

    pub fn set(&mut self, name: &str, selected: bool) -> Result<()> {
        let spec = lookup(name)?;
        self.chosen.insert(spec.name, selected);
        Ok(())
    }

    /// Flip one algorithm and return its new state.
    pub fn toggle(&mut self, name: &str) -> Result<bool> {
        let spec = lookup(name)?;
        let entry = self.chosen.entry(spec.name).or_insert(false);
        *entry = !*entry;
        Ok(*entry)
    }

    pub fn select_all(&mut self) {
        for spec in algorithms::catalog() {
            self.chosen.insert(spec.name, true);
        }
    }

    pub fn deselect_all(&mut self) {
        self.chosen.clear();
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.chosen.get(name).copied().unwrap_or(false)
    }

    /// Selected algorithms in catalog order.
    pub fn active(&self) -> Vec<AlgorithmSpec> {
        algorithms::catalog()
            .iter()
            .filter(|spec| self.is_selected(spec.name))
            .copied()
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        !self.chosen.values().any(|&selected| selected)
    }
}

fn lookup(name: &str) -> Result<&'static AlgorithmSpec> {
    algorithms::find_by_name(name).ok_or_else(|| BenchError::UnknownAlgorithm(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_follows_catalog_order() {
        let mut selection = Selection::new();
        selection.set("Counting Sort", true).unwrap();
        selection.set("Bubble Sort", true).unwrap();
        let names: Vec<_> = selection.active().iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["Bubble Sort", "Counting Sort"]);
    }

    #[test]
    fn test_toggle() {
        let mut selection = Selection::new();
        assert!(selection.toggle("Merge Sort").unwrap());
        assert!(selection.is_selected("Merge Sort"));
        assert!(!selection.toggle("Merge Sort").unwrap());
        assert!(selection.is_empty());
    }

    #[test]
    fn test_select_and_deselect_all() {
        let mut selection = Selection::new();
        assert!(selection.is_empty());
        selection.select_all();
        assert_eq!(selection.active().len(), algorithms::catalog().len());
        selection.deselect_all();
        assert!(selection.active().is_empty());
    }

    #[test]
    fn test_unknown_names() {
        let mut selection = Selection::new();
        assert!(matches!(
            selection.set("Bogo Sort", true),
            Err(BenchError::UnknownAlgorithm(_))
        ));
        assert!(Selection::from_names(["quick", "Heap Sort"]).is_ok());
        assert!(Selection::from_names(["sleep"]).is_err());
    }
}
