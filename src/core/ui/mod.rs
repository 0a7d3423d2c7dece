//! Core domain: full-screen UI owned by the run flow.

pub(crate) mod results;
