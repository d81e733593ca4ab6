use std::collections::VecDeque;
use std::fmt;

/// Fixed-capacity trail; pushing into a full trail drops the oldest entry.
pub struct History<T> {
    deque: VecDeque<T>,
    capacity: usize,
}

impl<T: Clone> Clone for History<T> {
    fn clone(&self) -> Self {
        Self {
            deque: self.deque.clone(),
            capacity: self.capacity,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for History<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.deque.fmt(f)
    }
}

impl<T> History<T> {
    /// `cap` of zero is bumped to one so the latest entry is always kept.
    #[inline]
    pub fn with_capacity(cap: usize) -> Self {
        let capacity = cap.max(1);

        Self {
            deque: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    #[inline]
    pub fn push(&mut self, item: T) -> Option<T> {
        let evicted = if self.is_full() {
            self.deque.pop_front()
        } else {
            None
        };

        self.deque.push_back(item);

        evicted
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.deque.len()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.deque.len() == self.capacity
    }

    /// Oldest to newest.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &'_ T> {
        self.deque.iter()
    }
}

impl<T: Clone> History<T> {
    #[inline]
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evicts_oldest_when_full() {
        let mut h = History::with_capacity(3);

        assert_eq!(h.push(1), None);
        assert_eq!(h.push(2), None);
        assert_eq!(h.push(3), None);
        assert!(h.is_full());
        assert_eq!(h.push(4), Some(1));

        assert_eq!(h.to_vec(), vec![2, 3, 4]);
        assert_eq!(h.len(), 3);
    }

    #[test]
    fn zero_capacity_keeps_latest() {
        let mut h = History::with_capacity(0);
        h.push('a');
        h.push('b');

        assert!(h.is_full());
        assert_eq!(h.to_vec(), vec!['b']);
    }
}
