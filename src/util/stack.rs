/// A last-in-first-out container over elements of type `T`.
///
/// The default value is an empty stack ready to use. Storage grows as needed.
///
/// # Example
/// ```
/// use calculus::util::stack::Stack;
///
/// let mut stack = Stack::new();
/// stack.push(1);
/// stack.push(2);
///
/// assert_eq!(stack.peek(), &2);
/// assert_eq!(stack.pop(), 2);
/// assert_eq!(stack.len(), 1);
/// assert!(!stack.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    data: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self { data: Vec::new() }
    }
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Adds `value` to the top of the stack.
    pub fn push(&mut self, value: T) {
        self.data.push(value);
    }

    /// Removes and returns the top element of the stack.
    ///
    /// # Panics
    /// Panics if the stack is empty.
    pub fn pop(&mut self) -> T {
        match self.data.pop() {
            Some(value) => value,
            None => panic!("pop called on an empty stack"),
        }
    }

    /// Returns a reference to the top element of the stack.
    ///
    /// # Panics
    /// Panics if the stack is empty.
    #[must_use]
    pub fn peek(&self) -> &T {
        match self.data.last() {
            Some(value) => value,
            None => panic!("peek called on an empty stack"),
        }
    }

    /// Returns the number of elements in the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the stack holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
