// vim: tw=80
//! A walkthrough of mocking static methods with Mockall.
//!
//! # Overview
//!
//! Some code is normally regarded as hard to unit test because it calls
//! associated functions that take no receiver (static methods) instead of
//! methods on an injected object.  Rewriting such code just for testability
//! isn't always desirable: the functions may belong to a third-party or legacy
//! API, or a static call may have been chosen on purpose.
//!
//! [Mockall](https://docs.rs/mockall) can mock static methods directly, and
//! [`mockall_double`](https://docs.rs/mockall_double) swaps the mock in at the
//! call sites while in test mode.  Neither requires changing the signature of
//! the code under test.
//!
//! # Usage
//!
//! 1. Put the type with the static methods in its own module and annotate its
//!    `impl` block with `#[cfg_attr(test, automock)]`.  That creates a
//!    `MockXXX` type in test builds.
//! 2. Import the type with `#[double]` wherever it is called.  In test builds
//!    that import resolves to `MockXXX` instead.
//! 3. In a test, obtain the function's context with `MockXXX::foo_context()`
//!    and set expectations on it with `ctx.expect()`.
//!
//! ```ignore
//! let ctx = SomeObjectWithStaticMethods::do_something_context();
//! ctx.expect().return_const("Some Special Result".to_owned());
//! ```
//!
//! ## Verifying behavior
//!
//! Call counts are part of each expectation, and they are checked when the
//! context is dropped or when [`checkpoint`] is called on it.
//!
//! ```ignore
//! ctx.expect().times(1);      // exactly once
//! ctx.expect().times(3);      // exactly three times
//! ctx.expect().times(1..);    // at least once
//! ctx.expect().never();
//! ```
//!
//! ## Argument matchers
//!
//! Expectations can match on arguments, with anything from
//! [`predicate`](https://docs.rs/mockall/latest/mockall/predicate/index.html)
//! or with a closure via `withf`.  Matchers apply to stubbing and verification
//! at the same time, because both are properties of a single expectation.
//!
//! ```ignore
//! let ctx = SomeObjectWithStaticMethods::do_something_with_context();
//! ctx.expect()
//!     .with(predicate::always())
//!     .times(3)
//!     .return_const("Some Special Result".to_owned());
//! ```
//!
//! # Limitations
//!
//! Static expectations are global.  Tests that mock the same static method
//! must be serialized, for example with a shared `static Mutex<()>`, or they
//! will overwrite each other's expectations.
//!
//! The [`walkthrough`] module contains the call sites and, in its tests, one
//! scenario for each feature above.  Run `cargo run --example walkthrough` to
//! see the unmocked output.
//!
//! [`checkpoint`]: https://docs.rs/mockall/latest/mockall/#checkpoints
#![cfg_attr(test, deny(warnings))]

pub mod some_object;
pub mod walkthrough;

pub use some_object::{SomeObjectWithStaticMethods, SOME_RESULT};
