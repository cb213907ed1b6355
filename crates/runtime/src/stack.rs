// Host stack headroom for the recursive evaluator. Every user call nests
// `invoke -> execute_block -> resolve` on the native stack, so the stack is
// grown on demand to let the call depth limit fire before it overflows.

// Grow when less than this is left
const RED_ZONE: usize = 100 * 1024;

// Size of each new stack segment
const STACK_PER_RECURSION: usize = 1024 * 1024;

#[inline]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}
