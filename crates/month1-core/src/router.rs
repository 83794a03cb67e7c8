use month1_types::Destination;

/// Current screen plus a back-stack of previously visited screens
#[derive(Debug, Clone)]
pub struct Router {
    current: Destination,
    back_stack: Vec<Destination>,
}

impl Router {
    pub fn new(start: Destination) -> Self {
        Self {
            current: start,
            back_stack: Vec::new(),
        }
    }

    pub fn current(&self) -> Destination {
        self.current
    }

    pub fn can_navigate_back(&self) -> bool {
        !self.back_stack.is_empty()
    }

    /// Oldest entry first
    pub fn back_stack(&self) -> &[Destination] {
        &self.back_stack
    }

    /// Always pushes, even when `destination` is already current
    pub fn navigate(&mut self, destination: Destination) {
        tracing::debug!(from = %self.current, to = %destination, "navigate");
        self.back_stack.push(self.current);
        self.current = destination;
    }

    /// Pop the back-stack. Returns false, leaving state untouched, when empty.
    pub fn navigate_back(&mut self) -> bool {
        match self.back_stack.pop() {
            Some(previous) => {
                tracing::debug!(from = %self.current, to = %previous, "navigate back");
                self.current = previous;
                true
            }
            None => {
                tracing::debug!(at = %self.current, "cannot navigate back");
                false
            }
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(Destination::default())
    }
}
