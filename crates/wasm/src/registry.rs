/// Slot table behind the tracker handles. Disposed slots are reused by the
/// next insert, so handles stay small for pages that mount and unmount often.
#[derive(Debug)]
pub struct Registry<T> {
    slots: Vec<Option<T>>,
}

impl<T> Registry<T> {
    pub const fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Store `value`, returning its handle.
    pub fn insert(&mut self, value: T) -> usize {
        if let Some(slot) = self.slots.iter().position(Option::is_none) {
            self.slots[slot] = Some(value);
            slot
        } else {
            self.slots.push(Some(value));
            self.slots.len() - 1
        }
    }

    pub fn get_mut(&mut self, handle: usize) -> Option<&mut T> {
        self.slots.get_mut(handle).and_then(Option::as_mut)
    }

    /// Free a handle. Returns the value, or `None` for an unknown or already
    /// freed handle.
    pub fn remove(&mut self, handle: usize) -> Option<T> {
        self.slots.get_mut(handle).and_then(Option::take)
    }
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}
