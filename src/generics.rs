use std::any::{self, Any};

use crate::error::CollectionError;

/// A type-safe single-value container.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Container<T> {
    item: T,
}

impl<T> Container<T> {
    pub fn new(item: T) -> Self {
        Self { item }
    }

    pub fn get(&self) -> &T {
        &self.item
    }

    pub fn set(&mut self, item: T) {
        self.item = item;
    }

    pub fn into_inner(self) -> T {
        self.item
    }
}

/// Exchange two positions in place.
pub fn swap_positions<T>(items: &mut [T], i: usize, j: usize) -> Result<(), CollectionError> {
    let len = items.len();
    for (name, index) in [("i", i), ("j", j)] {
        if index >= len {
            return Err(CollectionError::invalid_argument(
                name,
                index,
                format!("index out of range for length {len}"),
            ));
        }
    }
    items.swap(i, j);
    Ok(())
}

/// Positional accessors that read better than raw indexing.
pub trait ListExt<T> {
    fn second(&self) -> Option<&T>;
    fn penultimate(&self) -> Option<&T>;
}

impl<T> ListExt<T> for [T] {
    fn second(&self) -> Option<&T> {
        self.get(1)
    }

    fn penultimate(&self) -> Option<&T> {
        self.len().checked_sub(2).and_then(|i| self.get(i))
    }
}

pub fn is_of_type<T: Any>(value: &dyn Any) -> bool {
    value.is::<T>()
}

/// The unqualified name of `T`, without generic arguments:
/// `alloc::vec::Vec<alloc::string::String>` becomes `Vec`.
pub fn type_name_of<T: ?Sized>() -> &'static str {
    let full = any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
