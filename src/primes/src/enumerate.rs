use {
    crate::{is_prime, Count, Error},
    std::iter::Take,
};

/// Every prime in ascending order, found by testing successive candidates
/// starting at 2.
#[derive(Debug, Clone)]
pub struct Primes {
    candidate: u64,
    tested: u64,
}

impl Primes {
    pub fn new() -> Self {
        Primes {
            candidate: 2,
            tested: 0,
        }
    }

    /// Number of candidates run through the primality test so far.
    pub fn tested(&self) -> u64 {
        self.tested
    }
}

impl Default for Primes {
    fn default() -> Self {
        Primes::new()
    }
}

impl Iterator for Primes {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        loop {
            let candidate = self.candidate;
            self.candidate = candidate.checked_add(1)?;
            self.tested += 1;
            if is_prime(candidate) {
                return Some(candidate);
            }
        }
    }
}

// `Primes` has no size hint, so collecting grows the result as primes are found.
fn first(count: Count) -> Take<Primes> {
    Primes::new().take(count.get())
}

/// The first `count` primes.
pub fn enumerate(count: Count) -> Vec<u64> {
    first(count).collect()
}

/// The first `n` primes, rejecting negative `n`.
pub fn enumerate_primes(n: i64) -> Result<Vec<u64>, Error> {
    Ok(enumerate(Count::try_from(n)?))
}
