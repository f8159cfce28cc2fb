//! Fixed-capacity event ring shown in the scrolling log panel.

/// Circular buffer of event lines.
///
/// `pos` always points at the oldest surviving slot, which is also the next
/// slot to be overwritten. Slots that were never written hold an empty string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventLog {
    slots: Vec<String>,
    pos: usize,
}

impl EventLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![String::new(); capacity.max(1)],
            pos: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Cursor of the oldest slot; the read walk starts and ends here.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Writes `event` over the oldest slot and advances the cursor.
    pub fn push(&mut self, event: impl Into<String>) {
        self.slots[self.pos] = event.into();
        self.pos = (self.pos + 1) % self.slots.len();
    }

    /// Walks the ring once, oldest to newest, skipping never-written slots.
    pub fn iter(&self) -> EventWalk<'_> {
        EventWalk {
            log: self,
            index: self.pos,
            started: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(String::is_empty)
    }
}

/// Iterator over a single lap of an [`EventLog`].
pub struct EventWalk<'a> {
    log: &'a EventLog,
    index: usize,
    started: bool,
}

impl<'a> Iterator for EventWalk<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let len = self.log.slots.len();
        loop {
            if self.started && self.index == self.log.pos {
                return None;
            }
            self.started = true;

            let slot = &self.log.slots[self.index];
            self.index = (self.index + 1) % len;
            if !slot.is_empty() {
                return Some(slot.as_str());
            }
        }
    }
}
