use derive_more::Display;

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum Error {
    #[display("invalid argument {input:?}: expected a non-negative integer count")]
    InvalidArgument { input: String },
}

impl std::error::Error for Error {}
