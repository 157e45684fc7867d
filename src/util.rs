/// A last-in-first-out container.
///
/// `Stack<T>` backs the operator stack of the infix-to-postfix converter, the
/// operand stack of the evaluator and the work list of the tree flattening. Popping or peeking an empty stack
/// is a programming error; callers check `len()` or `is_empty()` first.
pub mod stack;
