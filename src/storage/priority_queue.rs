use crate::error::Result;
use crate::storage::ordered_list::{OrderedList, PriorityKey};

/// Pending transactions, highest priority key first.
///
/// Entries with the same key come out in the order they were enqueued.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T> {
    inner: OrderedList<T>,
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PriorityQueue<T> {
    pub fn new() -> PriorityQueue<T> {
        PriorityQueue {
            inner: OrderedList::new(),
        }
    }

    pub fn dequeue(&mut self) -> Result<T> {
        self.inner.remove_front()
    }

    pub fn peek(&self) -> Result<&T> {
        self.inner.peek_front()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Walk the queue in dequeue order without consuming it
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.inner.iter()
    }
}

impl<T: PriorityKey> PriorityQueue<T> {
    pub fn enqueue(&mut self, element: T) {
        self.inner.insert(element);
    }
}

impl<T: PriorityKey> FromIterator<T> for PriorityQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = PriorityQueue::new();
        queue.extend(iter);
        queue
    }
}

impl<T: PriorityKey> Extend<T> for PriorityQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.enqueue(element);
        }
    }
}

impl<'a, T> IntoIterator for &'a PriorityQueue<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Transaction;
    use crate::error::ChainError;

    #[test]
    fn test_dequeue_highest_fee_first() {
        let mut queue: PriorityQueue<Transaction> = vec![
            Transaction::new("A", "B", 100, 5),
            Transaction::new("C", "D", 200, 3),
            Transaction::new("E", "F", 50, 9),
        ]
        .into_iter()
        .collect();

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.peek().unwrap().get_fee(), 9);
        let fees: Vec<i64> = std::iter::from_fn(|| queue.dequeue().ok())
            .map(|tx| tx.get_fee())
            .collect();
        assert_eq!(fees, vec![9, 5, 3]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_equal_fees_are_fifo() {
        let mut queue = PriorityQueue::new();
        queue.enqueue(Transaction::new("first", "x", 1, 4));
        queue.enqueue(Transaction::new("second", "x", 1, 4));
        queue.enqueue(Transaction::new("third", "x", 1, 4));

        assert_eq!(queue.dequeue().unwrap().get_sender(), "first");
        assert_eq!(queue.dequeue().unwrap().get_sender(), "second");
        assert_eq!(queue.dequeue().unwrap().get_sender(), "third");
    }

    #[test]
    fn test_iter_does_not_consume() {
        let queue: PriorityQueue<i64> = [1, 3, 2].into_iter().collect();
        let seen: Vec<i64> = queue.iter().copied().collect();
        assert_eq!(seen, vec![3, 2, 1]);
        assert_eq!(queue.len(), 3);
    }

    #[test]
    fn test_empty_queue_errors() {
        let mut queue: PriorityQueue<Transaction> = PriorityQueue::new();
        assert_eq!(queue.peek().unwrap_err(), ChainError::EmptyContainer);
        assert_eq!(queue.dequeue().unwrap_err(), ChainError::EmptyContainer);
    }
}
