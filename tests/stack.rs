use calculus::util::stack::Stack;

#[test]
fn pops_in_reverse_push_order() {
    let mut stack = Stack::new();
    for i in 0..5 {
        stack.push(i);
    }
    assert_eq!(stack.len(), 5);

    let popped: Vec<_> = (0..5).map(|_| stack.pop()).collect();
    assert_eq!(popped, vec![4, 3, 2, 1, 0]);
    assert!(stack.is_empty());
}

#[test]
fn peek_does_not_remove() {
    let mut stack = Stack::default();
    stack.push("a");
    stack.push("b");

    assert_eq!(*stack.peek(), "b");
    assert_eq!(*stack.peek(), "b");
    assert_eq!(stack.len(), 2);
}

#[test]
#[should_panic(expected = "pop called on an empty stack")]
fn pop_on_empty_stack_panics() {
    let mut stack: Stack<f64> = Stack::new();
    stack.pop();
}

#[test]
#[should_panic(expected = "peek called on an empty stack")]
fn peek_on_empty_stack_panics() {
    let stack: Stack<f64> = Stack::new();
    let _ = stack.peek();
}
