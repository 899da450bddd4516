mod count;
mod enumerate;
mod error;
mod primality;

pub use {
    count::Count,
    enumerate::{enumerate, enumerate_primes, Primes},
    error::Error,
    primality::is_prime,
};
