/// Conditional-independence oracle.
///
/// Implementations must be pure and deterministic given the dataset:
/// `p_value(x, y, s) == p_value(y, x, s)` for every call, repeatable in
/// any order. `Send + Sync` so a stable-mode depth pass can fan out
/// across pairs.
///
/// Returns a p-value in `[0, 1]`, or NaN on ill-posed input. The engine
/// validates every returned value and aborts on NaN or out-of-range;
/// an oracle failure is never coerced into an independence decision.
pub trait IndependenceOracle: Send + Sync {
    /// p-value for the independence of variables `x` and `y` given the
    /// conditioning set `s` (ascending, no duplicates, excludes x and y).
    fn p_value(&self, x: usize, y: usize, s: &[usize]) -> f64;

    /// Number of variables the oracle was built over.
    fn variable_count(&self) -> usize;
}
