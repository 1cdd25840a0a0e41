//!
//! Runtime List Type
//!
//! A growable list of cowl values. The list owns every element: deleting or
//! replacing a slot drops the outgoing value, and `get` hands out clones.
//!
//! Indices arrive as `Any` values and are resolved the way the language
//! addresses lists:
//! - the string `last` (any case) names the final element
//! - anything else is coerced to a number, truncated toward zero and read as
//!   a 1-based position
//!
//! An index that resolves to no element is a soft failure: `get` returns the
//! empty string, `delete` and `replace` leave the list untouched. A string
//! index other than `last` cannot be coerced to a number and is fatal.
//!

use cowl_std_core::{
    Any, RuntimeError, coerce_to_double, double_to_saturating_u64, fatal, u64_to_double,
};

/// Index keyword naming the final element
pub const LAST_KEYWORD: &str = "last";

#[derive(Debug, Default, PartialEq)]
pub struct List {
    items: Vec<Any>,
    capacity: usize,
}

impl List {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let mut items = Vec::new();
        reserve_slots(&mut items, capacity);
        Self { items, capacity }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of allocated slots; grows as 0, 1, 3, 7, 15, ...
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Length as a number (the `length` builtin)
    pub fn length(&self) -> f64 {
        u64_to_double(self.items.len() as u64)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Any> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Any] {
        &self.items
    }

    /// Grow to `2 * capacity + 1` slots if every slot is in use
    pub fn ensure_capacity(&mut self) {
        if self.items.len() < self.capacity {
            return;
        }
        let new_capacity = 2 * self.capacity + 1;
        reserve_slots(&mut self.items, new_capacity);
        tracing::debug!(old = self.capacity, new = new_capacity, "list grow");
        self.capacity = new_capacity;
    }

    pub fn append(&mut self, value: Any) {
        self.ensure_capacity();
        self.items.push(value);
    }

    /// Clone of the element at `index`, or the empty string if there is none
    pub fn get(&self, index: Any) -> Any {
        match self.resolve(index) {
            Some(slot) => self.items[slot].clone(),
            None => Any::empty_str(),
        }
    }

    /// Remove the element at `index`, shifting later elements down
    pub fn delete(&mut self, index: Any) {
        if let Some(slot) = self.resolve(index) {
            drop(self.items.remove(slot));
        }
    }

    /// Drop every element, last to first. Capacity is kept.
    pub fn delete_all(&mut self) {
        while let Some(value) = self.items.pop() {
            drop(value);
        }
    }

    /// Overwrite the element at `index` with `value`.
    ///
    /// If `index` names no element, `value` is dropped instead.
    pub fn replace(&mut self, index: Any, value: Any) {
        match self.resolve(index) {
            Some(slot) => {
                let old = std::mem::replace(&mut self.items[slot], value);
                drop(old);
            }
            None => drop(value),
        }
    }

    /// Map an index value to a slot, consuming it
    fn resolve(&self, index: Any) -> Option<usize> {
        let slot = if index.is_keyword(LAST_KEYWORD) {
            self.items.len().checked_sub(1)
        } else {
            let position = double_to_saturating_u64(coerce_to_double(index));
            position.checked_sub(1).and_then(|slot| usize::try_from(slot).ok())
        };

        let slot = slot.filter(|&slot| slot < self.items.len());
        if slot.is_none() {
            tracing::trace!(len = self.items.len(), "list index out of range");
        }
        slot
    }
}

impl Clone for List {
    fn clone(&self) -> Self {
        let mut items = Vec::new();
        reserve_slots(&mut items, self.capacity);
        items.extend(self.items.iter().cloned());
        Self { items, capacity: self.capacity }
    }
}

impl FromIterator<Any> for List {
    fn from_iter<I: IntoIterator<Item = Any>>(iter: I) -> Self {
        let mut list = List::new();
        list.extend(iter);
        list
    }
}

impl Extend<Any> for List {
    fn extend<I: IntoIterator<Item = Any>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl IntoIterator for List {
    type Item = Any;
    type IntoIter = std::vec::IntoIter<Any>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Any;
    type IntoIter = std::slice::Iter<'a, Any>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Make room for `slots` elements in total; allocation failure is fatal
fn reserve_slots(items: &mut Vec<Any>, slots: usize) {
    let additional = slots.saturating_sub(items.len());
    if items.try_reserve_exact(additional).is_err() {
        let bytes = slots.saturating_mul(std::mem::size_of::<Any>());
        fatal(RuntimeError::AllocationFailed { bytes });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three() -> List {
        [Any::static_str("a"), Any::owned_str(b"b".to_vec()), Any::Num(3.0)]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_list_creation() {
        let list = List::new();
        assert_eq!(list.len(), 0);
        assert_eq!(list.capacity(), 0);
        assert!(list.is_empty());

        let list = List::with_capacity(10);
        assert_eq!(list.capacity(), 10);
    }

    #[test]
    fn test_capacity_growth_sequence() {
        let mut list = List::new();
        let mut seen = vec![list.capacity()];
        for i in 0..16 {
            list.append(Any::Num(i as f64));
            if seen.last() != Some(&list.capacity()) {
                seen.push(list.capacity());
            }
        }
        assert_eq!(list.len(), 16);
        assert_eq!(seen, vec![0, 1, 3, 7, 15, 31]);
    }

    #[test]
    fn test_append_get() {
        let list = three();
        assert_eq!(list.len(), 3);
        assert_eq!(list.get(Any::Num(1.0)), Any::static_str("a"));
        assert_eq!(list.get(Any::Num(2.9)), Any::owned_str(b"b".to_vec()));
        assert_eq!(list.get(Any::Bool(true)), Any::static_str("a"));
        assert_eq!(list.get(Any::static_str("LAST")), list.get(Any::Num(3.0)));
    }

    #[test]
    fn test_get_returns_clone() {
        let list = three();
        let got = list.get(Any::Num(2.0));
        let slot = list.as_slice()[1].as_str().unwrap();
        let got = got.as_str().unwrap();
        assert!(got.is_owned());
        assert_ne!(got.as_bytes().as_ptr(), slot.as_bytes().as_ptr());
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_get_out_of_range() {
        let list = three();
        for index in [
            Any::Num(0.0),
            Any::Num(4.0),
            Any::Num(-1.0),
            Any::Num(f64::NAN),
            Any::Bool(false),
        ] {
            assert_eq!(list.get(index), Any::empty_str());
        }
        assert_eq!(List::new().get(Any::static_str("last")), Any::empty_str());
    }

    #[test]
    fn test_delete() {
        let mut list = three();
        list.delete(Any::Num(4.0));
        assert_eq!(list.len(), 3);

        list.delete(Any::static_str("Last"));
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(Any::static_str("last")), Any::owned_str(b"b".to_vec()));

        list.delete(Any::Num(1.0));
        assert_eq!(list.as_slice(), &[Any::owned_str(b"b".to_vec())]);
    }

    #[test]
    fn test_delete_preserves_order() {
        let mut list: List = (1..=5).map(|i| Any::Num(i as f64)).collect();
        list.delete(Any::Num(2.0));
        let rest: Vec<f64> = list
            .iter()
            .map(|v| match v {
                Any::Num(x) => *x,
                other => panic!("unexpected {other:?}"),
            })
            .collect();
        assert_eq!(rest, vec![1.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_delete_last_on_empty_is_noop() {
        let mut list = List::new();
        list.delete(Any::static_str("LAST"));
        assert!(list.is_empty());
    }

    #[test]
    fn test_delete_all_keeps_capacity() {
        let mut list = three();
        let capacity = list.capacity();
        list.delete_all();
        assert_eq!(list.len(), 0);
        assert_eq!(list.capacity(), capacity);
        list.delete_all();
        assert!(list.is_empty());
    }

    #[test]
    fn test_replace() {
        let mut list = three();
        list.replace(Any::Num(2.0), Any::Bool(true));
        assert_eq!(list.get(Any::Num(2.0)), Any::Bool(true));

        list.replace(Any::static_str("LAST"), Any::static_str("z"));
        assert_eq!(list.get(Any::Num(3.0)), Any::static_str("z"));

        let before = list.clone();
        list.replace(Any::Num(9.0), Any::owned_str(b"lost".to_vec()));
        assert_eq!(list, before);
    }

    #[test]
    fn test_clone_allocates_full_capacity() {
        let list: List = (1..=4).map(|i| Any::Num(i as f64)).collect();
        assert_eq!(list.capacity(), 7);

        let mut copy = list.clone();
        assert_eq!(copy.capacity(), 7);
        assert!(copy.items.capacity() >= 7);
        assert_eq!(copy, list);

        let before = copy.items.as_ptr();
        for i in 5..=7 {
            copy.append(Any::Num(i as f64));
        }
        assert_eq!(copy.items.as_ptr(), before);
        assert_eq!(copy.capacity(), 7);
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn test_length_as_number() {
        assert_eq!(three().length(), 3.0);
        assert_eq!(List::new().length(), 0.0);
    }
}
