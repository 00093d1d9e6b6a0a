use diagnostics::{DiagnosticFlags, Diagnostics, ErrorDiagnostic};
use domain::{DomainType, Value};
use driver::{Driver, DriverError, DriverSettings, Invocation, InvocationError};
use schema::Signature;
use std::process::ExitCode;

fn main() -> ExitCode {
    let settings = DriverSettings {
        program_name: "sample_program".into(),
        version: env!("CARGO_PKG_VERSION").into(),
        ..Default::default()
    };

    let driver = match Driver::new(signature(), summarize_range, settings) {
        Ok(driver) => driver,
        Err(error) => {
            let error = DriverError::from(error);
            Diagnostics::new(DiagnosticFlags::default()).push(ErrorDiagnostic::plain(&error));
            return error.exit_status().into();
        }
    };

    driver.run(std::env::args().skip(1)).emit()
}

fn signature() -> Signature {
    Signature::new("SummarizeRange", DomainType::String)
        .with_summary("Sums the integers in a range and reports the total under a label.")
        .documented_param("numbers", DomainType::Range, "The integers to add up.")
        .documented_param("label", DomainType::String, "Text printed before the total.")
        .documented_param(
            "simulator",
            DomainType::String,
            "Name recorded alongside the total.\nThis parameter takes '--simulator' from the driver.",
        )
}

fn summarize_range(invocation: Invocation<'_>) -> Result<Value, InvocationError> {
    let arguments = invocation.arguments;

    let numbers = arguments
        .require("numbers")?
        .as_range()
        .ok_or_else(|| InvocationError::new("'numbers' must be a range"))?;

    let total = numbers.iter().try_fold(0i64, i64::checked_add).ok_or_else(|| {
        InvocationError::new(format!("The sum of {} does not fit in 64 bits", numbers))
    })?;

    let label = arguments.require("label")?;
    let recorded = arguments.require("simulator")?;

    Ok(Value::String(format!(
        "{}: {} (recorded as {}, ran on {})",
        label, total, recorded, invocation.simulator
    )))
}
