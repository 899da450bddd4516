use {
    crate::Error,
    derive_more::Display,
    std::str::FromStr,
};

/// How many primes to enumerate. Only non-negative integers get this far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display)]
pub struct Count(usize);

impl Count {
    pub const DEFAULT: Count = Count(10);

    pub const fn new(count: usize) -> Self {
        Count(count)
    }

    pub const fn get(self) -> usize {
        self.0
    }
}

impl Default for Count {
    fn default() -> Self {
        Count::DEFAULT
    }
}

impl TryFrom<i64> for Count {
    type Error = Error;

    fn try_from(n: i64) -> Result<Self, Self::Error> {
        usize::try_from(n)
            .map(Count)
            .map_err(|_| Error::InvalidArgument {
                input: n.to_string(),
            })
    }
}

impl FromStr for Count {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<usize>()
            .map(Count)
            .map_err(|_| Error::InvalidArgument {
                input: s.to_owned(),
            })
    }
}
