//! Repository hygiene checks live in `tests/`; this crate has no runtime code.
