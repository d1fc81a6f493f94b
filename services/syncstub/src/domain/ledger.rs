/// Hands out submission sequence numbers.
///
/// `next` must read the current value and advance it as one atomic step: the
/// value it returns is the pre-increment count, and no two callers may ever
/// observe the same value.
pub trait SubmissionLedger: Send + Sync {
    fn next(&self) -> u64;
}

impl<L: SubmissionLedger + ?Sized> SubmissionLedger for std::sync::Arc<L> {
    fn next(&self) -> u64 {
        (**self).next()
    }
}
