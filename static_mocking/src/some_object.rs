// vim: tw=80
//! A stateless type whose associated functions serve as a mocking target.
//!
//! In test builds `#[automock]` adds `MockSomeObjectWithStaticMethods`, whose
//! expectations are global and reached through one context per function, e.g.
//! `MockSomeObjectWithStaticMethods::do_something_context()`.

#[cfg(test)]
use mockall::automock;

/// The value returned by every unmocked call.
pub const SOME_RESULT: &str = "Some Result";

const TYPE_NAME: &str = "SomeObjectWithStaticMethods";

/// A fieldless utility exposing three static operations.
///
/// None of them can fail.  Each one prints a single line to stdout describing
/// the call, so the effect of mocking is visible when running the walkthrough.
#[derive(Clone, Copy, Debug, Default)]
pub struct SomeObjectWithStaticMethods;

#[cfg_attr(test, automock)]
impl SomeObjectWithStaticMethods {
    /// Returns [`SOME_RESULT`].
    #[tracing::instrument(level = "debug")]
    pub fn do_something() -> String {
        println!("Executing the {}::do_something() method...", TYPE_NAME);
        SOME_RESULT.to_owned()
    }

    /// Returns [`SOME_RESULT`], whatever `some_parameter` is.
    #[tracing::instrument(level = "debug")]
    pub fn do_something_with(some_parameter: i32) -> String {
        println!(
            "Executing the {}::do_something_with(some_parameter: i32) method... ({})",
            TYPE_NAME, some_parameter
        );
        SOME_RESULT.to_owned()
    }

    #[tracing::instrument(level = "debug")]
    pub fn do_something_without_return() {
        println!(
            "Executing the {}::do_something_without_return() method...",
            TYPE_NAME
        );
    }
}
