// vim: tw=80
//! The call sites exercised by the walkthrough.
//!
//! `SomeObjectWithStaticMethods` is imported with [`#[double]`](double), so a
//! regular build calls the real functions while unit tests call
//! `MockSomeObjectWithStaticMethods` instead.  Nothing else changes at the call
//! sites.

use std::io::{self, Write};

use mockall_double::double;
use tracing::info;

#[double]
use crate::some_object::SomeObjectWithStaticMethods;

/// Printed before and after `do_something_without_return`, so its own output
/// (or the lack of it, when mocked) stands out.
pub const SEPARATOR: &str = "================================";

/// Arguments passed to `do_something_with` by [`run`].
pub const DEMO_PARAMETERS: [i32; 3] = [123, 456, 789];

/// Call `do_something` and describe the result.
pub fn describe_do_something() -> String {
    format!("SomeObjectWithStaticMethods::do_something(): {}",
            SomeObjectWithStaticMethods::do_something())
}

/// Call `do_something_with(some_parameter)` and describe the result.
pub fn describe_do_something_with(some_parameter: i32) -> String {
    format!("SomeObjectWithStaticMethods::do_something_with({}): {}",
            some_parameter,
            SomeObjectWithStaticMethods::do_something_with(some_parameter))
}

/// Call `do_something_with` once per parameter, in order.
pub fn describe_each(params: &[i32]) -> Vec<String> {
    params.iter()
        .map(|&n| describe_do_something_with(n))
        .collect()
}

/// Call `do_something_without_return` between two separator lines.
pub fn framed_do_something_without_return<W: Write>(out: &mut W)
    -> io::Result<()>
{
    writeln!(out, "{}", SEPARATOR)?;
    SomeObjectWithStaticMethods::do_something_without_return();
    writeln!(out, "{}", SEPARATOR)
}

/// Narrate every operation once, with a blank line between sections.
///
/// Whatever the functions print themselves goes to stdout; the descriptions
/// go to `out`.  Each description is written as soon as its call returns, so
/// the two stay paired on the console.
pub fn run<W: Write>(out: &mut W) -> io::Result<()> {
    info!("do_something()");
    writeln!(out, "{}", describe_do_something())?;
    writeln!(out)?;

    info!(params = ?DEMO_PARAMETERS, "do_something_with(..)");
    for n in DEMO_PARAMETERS {
        writeln!(out, "{}", describe_do_something_with(n))?;
    }
    writeln!(out)?;

    info!("do_something_without_return()");
    framed_do_something_without_return(out)
}
