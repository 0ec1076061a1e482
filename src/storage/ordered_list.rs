use crate::error::{ChainError, Result};

/// Anything that can be ranked by the pending queue.
///
/// Larger keys sort towards the front.
pub trait PriorityKey {
    type Key: Ord;

    fn priority_key(&self) -> Self::Key;
}

macro_rules! impl_priority_key_for_int {
    ($($t:ty),*) => {
        $(
            impl PriorityKey for $t {
                type Key = $t;

                fn priority_key(&self) -> $t {
                    *self
                }
            }
        )*
    };
}

impl_priority_key_for_int!(i32, i64, u32, u64, usize);

/// Array-backed sequence kept in non-increasing key order.
///
/// An inserted value lands just before the first element whose key is
/// strictly smaller, so equal keys stay in insertion order.
#[derive(Debug, Clone)]
pub struct OrderedList<T> {
    items: Vec<T>,
}

impl<T> Default for OrderedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> OrderedList<T> {
    pub fn new() -> OrderedList<T> {
        OrderedList { items: Vec::new() }
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        self.items.get(index).ok_or(ChainError::IndexOutOfRange {
            index,
            size: self.items.len(),
        })
    }

    pub fn remove(&mut self, index: usize) -> Result<T> {
        if index >= self.items.len() {
            return Err(ChainError::IndexOutOfRange {
                index,
                size: self.items.len(),
            });
        }
        Ok(self.items.remove(index))
    }

    pub fn remove_front(&mut self) -> Result<T> {
        if self.items.is_empty() {
            return Err(ChainError::EmptyContainer);
        }
        Ok(self.items.remove(0))
    }

    pub fn peek_front(&self) -> Result<&T> {
        self.items.first().ok_or(ChainError::EmptyContainer)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        self.items.as_slice()
    }
}

impl<T: PriorityKey> OrderedList<T> {
    pub fn insert(&mut self, value: T) {
        let key = value.priority_key();
        // Keys are non-increasing, so "not strictly smaller" holds on a prefix
        let position = self
            .items
            .partition_point(|existing| existing.priority_key() >= key);
        self.items.insert(position, value);
    }
}

impl<'a, T> IntoIterator for &'a OrderedList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> IntoIterator for OrderedList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[derive(Debug, Clone, PartialEq)]
    struct Tagged {
        key: i64,
        tag: usize,
    }

    impl PriorityKey for Tagged {
        type Key = i64;

        fn priority_key(&self) -> i64 {
            self.key
        }
    }

    #[test]
    fn test_insert_keeps_descending_order() {
        let mut list = OrderedList::new();
        for value in [3, 9, 1, 5, 7] {
            list.insert(value);
        }
        assert_eq!(list.as_slice(), &[9, 7, 5, 3, 1]);
    }

    #[test]
    fn test_equal_keys_keep_insertion_order() {
        let mut list = OrderedList::new();
        list.insert(Tagged { key: 5, tag: 0 });
        list.insert(Tagged { key: 9, tag: 1 });
        list.insert(Tagged { key: 5, tag: 2 });
        list.insert(Tagged { key: 1, tag: 3 });
        list.insert(Tagged { key: 5, tag: 4 });

        let tags: Vec<usize> = list.iter().map(|t| t.tag).collect();
        assert_eq!(tags, vec![1, 0, 2, 4, 3]);
    }

    #[test]
    fn test_random_inserts_stay_sorted_and_stable() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let mut list = OrderedList::new();
            let count = rng.gen_range(1..40);
            for tag in 0..count {
                list.insert(Tagged {
                    key: rng.gen_range(-5..10),
                    tag,
                });
            }

            for pair in list.as_slice().windows(2) {
                assert!(pair[0].key >= pair[1].key);
                if pair[0].key == pair[1].key {
                    assert!(pair[0].tag < pair[1].tag);
                }
            }

            let max = list.iter().map(|t| t.key).max().unwrap();
            assert_eq!(list.peek_front().unwrap().key, max);
            assert_eq!(list.remove_front().unwrap().key, max);
        }
    }

    #[test]
    fn test_empty_front_access_fails() {
        let mut list: OrderedList<i64> = OrderedList::new();
        assert_eq!(list.peek_front(), Err(ChainError::EmptyContainer));
        assert_eq!(list.remove_front(), Err(ChainError::EmptyContainer));
    }

    #[test]
    fn test_positional_access() {
        let mut list = OrderedList::new();
        list.insert(2);
        list.insert(8);
        list.insert(4);

        assert_eq!(*list.get(1).unwrap(), 4);
        assert_eq!(
            list.get(3),
            Err(ChainError::IndexOutOfRange { index: 3, size: 3 })
        );
        assert_eq!(list.remove(1).unwrap(), 4);
        assert_eq!(list.len(), 2);
        assert_eq!(
            list.remove(2),
            Err(ChainError::IndexOutOfRange { index: 2, size: 2 })
        );
    }
}
