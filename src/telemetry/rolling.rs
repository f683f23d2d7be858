use std::fmt;

/// Fixed-capacity FIFO window. Once full, every push evicts the oldest item.
#[derive(Clone)]
pub struct RollingSeries<T> {
    buffer: Vec<T>,
    write_pos: usize,
    capacity: usize,
}

impl<T> RollingSeries<T> {
    /// Creates an empty series. A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            buffer: Vec::with_capacity(capacity),
            write_pos: 0,
            capacity,
        }
    }

    /// Appends `item` at the tail and returns the evicted head, if any.
    pub fn push(&mut self, item: T) -> Option<T> {
        let evicted = if self.buffer.len() < self.capacity {
            self.buffer.push(item);
            None
        } else {
            Some(std::mem::replace(&mut self.buffer[self.write_pos], item))
        };
        self.write_pos = (self.write_pos + 1) % self.capacity;
        evicted
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.buffer.len() == self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Oldest-first iteration.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        let head = if self.is_full() { self.write_pos } else { 0 };
        self.buffer[head..].iter().chain(&self.buffer[..head])
    }

    pub fn last(&self) -> Option<&T> {
        if self.buffer.is_empty() {
            return None;
        }
        let idx = (self.write_pos + self.capacity - 1) % self.capacity;
        self.buffer.get(idx)
    }

    /// Removes every item, yielding them oldest-first.
    pub fn drain(&mut self) -> Vec<T> {
        let head = if self.is_full() { self.write_pos } else { 0 };
        let mut items = std::mem::take(&mut self.buffer);
        items.rotate_left(head);
        self.write_pos = 0;
        items
    }

    /// Changes the bound, keeping only the most recent items that still fit.
    pub fn set_capacity(&mut self, capacity: usize) {
        let capacity = capacity.max(1);
        if capacity == self.capacity {
            return;
        }
        let mut items = self.drain();
        let excess = items.len().saturating_sub(capacity);
        items.drain(..excess);
        self.capacity = capacity;
        self.buffer = Vec::with_capacity(capacity);
        for item in items {
            self.push(item);
        }
    }

    pub fn as_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for RollingSeries<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
