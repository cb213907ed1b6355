use std::fmt::Display;

// An error kind tagged with the (0-based) source line it was raised on
#[derive(Debug, PartialEq)]
pub struct CodeErr<E> {
    line: u64,
    kind: E,
}

impl<E> CodeErr<E> {
    pub fn new(kind: E, line: u64) -> Self {
        Self { line, kind }
    }

    pub fn line(&self) -> u64 {
        self.line
    }

    pub fn kind(&self) -> &E {
        &self.kind
    }

    pub fn into_kind(self) -> E {
        self.kind
    }
}

impl<E: Display> Display for CodeErr<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Line: {}\n{}", self.line + 1, self.kind)
    }
}

pub trait ReportCodeErr: Sized {
    fn to_glob_err(self, line: u64) -> CodeErr<Self>
    where
        Self: Display,
    {
        CodeErr::new(self, line)
    }
}
