//! Common utilities used across the crate.
//!
//! Parallelism configuration and thread pool setup shared by training and
//! prediction.

use rayon::prelude::*;

use crate::error::Result;

// =============================================================================
// Parallelism Configuration
// =============================================================================

/// Whether parallel execution is allowed.
///
/// Components receive this flag and pick a rayon or a plain iterator path.
/// The thread pool itself is set up once at the model API level via
/// [`run_with_threads`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Parallelism {
    #[default]
    Sequential,
    Parallel,
}

impl Parallelism {
    /// Create from thread count semantics.
    ///
    /// - 0 = auto (parallel if rayon pool has multiple threads, sequential otherwise)
    /// - 1 = sequential
    /// - >1 = parallel
    #[inline]
    pub fn from_threads(n_threads: usize) -> Self {
        if n_threads == 1 || (n_threads == 0 && rayon::current_num_threads() == 1) {
            Parallelism::Sequential
        } else {
            Parallelism::Parallel
        }
    }

    /// Returns `true` if parallel execution is allowed.
    #[inline]
    pub fn is_parallel(self) -> bool {
        matches!(self, Parallelism::Parallel)
    }

    /// Map every item, in parallel when allowed. Output order matches input order.
    #[inline]
    pub fn maybe_par_map<T, B, I, F>(self, iter: I, f: F) -> Vec<B>
    where
        T: Send,
        B: Send,
        I: IntoIterator<Item = T> + IntoParallelIterator<Item = T>,
        <I as IntoParallelIterator>::Iter: IndexedParallelIterator,
        F: Fn(T) -> B + Sync + Send,
    {
        if self.is_parallel() {
            iter.into_par_iter().map(f).collect()
        } else {
            iter.into_iter().map(f).collect()
        }
    }
}

// =============================================================================
// Thread Pool Setup
// =============================================================================

/// Run a closure with the appropriate thread pool.
///
/// Thread count semantics:
/// - `0` = auto (use all available cores)
/// - `1` = sequential (no thread pool)
/// - `n > 1` = use exactly `n` threads
///
/// # Example
///
/// ```
/// use ridgers::run_with_threads;
///
/// let sum = run_with_threads(1, |_parallelism| 1 + 1).unwrap();
/// assert_eq!(sum, 2);
/// ```
pub fn run_with_threads<T: Send>(
    n_threads: usize,
    f: impl FnOnce(Parallelism) -> T + Send,
) -> Result<T> {
    match Parallelism::from_threads(n_threads) {
        Parallelism::Sequential => Ok(f(Parallelism::Sequential)),
        Parallelism::Parallel => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(n_threads)
                .build()?;
            Ok(pool.install(|| f(Parallelism::Parallel)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_threads_one_is_sequential() {
        assert_eq!(Parallelism::from_threads(1), Parallelism::Sequential);
        assert!(!Parallelism::from_threads(1).is_parallel());
    }

    #[test]
    fn from_threads_many_is_parallel() {
        assert_eq!(Parallelism::from_threads(4), Parallelism::Parallel);
    }

    #[test]
    fn maybe_par_map_preserves_order() {
        let items: Vec<usize> = (0..1000).collect();
        let seq = Parallelism::Sequential.maybe_par_map(items.clone(), |x| x * 2);
        let par = Parallelism::Parallel.maybe_par_map(items, |x| x * 2);
        assert_eq!(seq, par);
        assert_eq!(seq[999], 1998);
    }

    #[test]
    fn run_with_threads_passes_parallelism() {
        let p = run_with_threads(1, |p| p).unwrap();
        assert_eq!(p, Parallelism::Sequential);

        let p = run_with_threads(2, |p| p).unwrap();
        assert_eq!(p, Parallelism::Parallel);
    }
}
