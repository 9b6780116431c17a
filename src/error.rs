// Copyright (C) 2020-2026 Andy Kurnia.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    // rack/board/move input that cannot describe a real position.
    InvalidInput,
    // word list could not be turned into a dictionary.
    Lexicon,
    // worker pool was used after (or shut down twice).
    PoolClosed,
    // a job panicked, so the moves it would have found are missing.
    JobFailed,
}

impl Kind {
    fn label(self) -> &'static str {
        match self {
            Kind::InvalidInput => "invalid input",
            Kind::Lexicon => "lexicon",
            Kind::PoolClosed => "pool closed",
            Kind::JobFailed => "job failed",
        }
    }
}

pub struct MyError {
    kind: Kind,
    s: String,
}

impl MyError {
    #[inline(always)]
    pub fn kind(&self) -> Kind {
        self.kind
    }
}

impl std::fmt::Display for MyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind.label(), self.s)
    }
}

impl std::fmt::Debug for MyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        (self as &dyn std::fmt::Display).fmt(f)
    }
}

impl std::error::Error for MyError {}

pub fn new(kind: Kind, s: String) -> MyError {
    MyError { kind, s }
}

// None for errors that did not originate here (io, serde, ...).
pub fn kind_of(err: &BoxAnyError) -> Option<Kind> {
    err.downcast_ref::<MyError>().map(MyError::kind)
}

pub type BoxAnyError = Box<dyn std::error::Error>;
pub type Returns<T> = Result<T, BoxAnyError>;

#[macro_export]
macro_rules! return_error {
    ($kind:ident, $error:expr) => {
        return Err($crate::error::new($crate::error::Kind::$kind, $error).into());
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fails() -> Returns<()> {
        return_error!(Lexicon, "bad word".into());
    }

    #[test]
    fn kind_survives_boxing() {
        let err = fails().unwrap_err();
        assert_eq!(kind_of(&err), Some(Kind::Lexicon));
        assert_eq!(err.to_string(), "lexicon: bad word");
    }

    #[test]
    fn foreign_errors_have_no_kind() {
        let err: BoxAnyError = "plain".into();
        assert_eq!(kind_of(&err), None);
    }
}
