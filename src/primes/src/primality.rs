/// Trial division by every `d` in `2..=sqrt(k)`.
pub fn is_prime(k: u64) -> bool {
    if k < 2 {
        return false;
    }
    let mut divisor = 2;
    while divisor <= k / divisor {
        if k % divisor == 0 {
            return false;
        }
        divisor += 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use {super::is_prime, rstest::rstest};

    #[rstest]
    #[case(2)]
    #[case(3)]
    #[case(5)]
    #[case(29)]
    #[case(7919)]
    #[case(4_294_967_291)]
    fn primes_are_prime(#[case] k: u64) {
        assert!(is_prime(k));
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(4)]
    #[case(9)]
    #[case(25)]
    #[case(7917)]
    #[case(4_294_967_297)]
    fn non_primes_are_not_prime(#[case] k: u64) {
        assert!(!is_prime(k));
    }

    #[test]
    fn largest_u64_does_not_overflow() {
        assert!(!is_prime(u64::MAX));
    }
}
