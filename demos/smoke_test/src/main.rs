use anyhow::{ensure, Context, Result};
use clap::Parser;
use libdummy::prelude::*;
use tracing_subscriber::EnvFilter;

/// Exercise every libdummy operation and fail on the first mismatch
///
/// Intended as a post-link check: if this binary runs to completion, the
/// library was built and linked correctly.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Log at debug level (overridden by RUST_LOG)
    #[arg(long, short)]
    verbose: bool,

    /// Run the checks without calling init/cleanup
    #[arg(long, default_value_t = false)]
    skip_lifecycle: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn check_math() -> Result<()> {
    ensure!(add(5, 3) == 8, "add(5, 3)");
    ensure!(subtract(10, 4) == 6, "subtract(10, 4)");
    ensure!(multiply(6, 7) == 42, "multiply(6, 7)");
    println!("✓ Basic math operations passed");

    ensure!(divide(15, 3).context("divide(15, 3)")? == 5, "divide(15, 3)");
    ensure!(
        divide(10, 0).map_err(|e| e.code()) == Err(ErrorCode::DivisionByZero),
        "divide(10, 0) must report division by zero"
    );
    println!("✓ Division tests passed");

    ensure!(factorial(5).context("factorial(5)")? == 120, "factorial(5)");
    ensure!(
        factorial(-1).map_err(|e| e.code()) == Err(ErrorCode::InvalidParam),
        "factorial(-1) must be rejected"
    );
    println!("✓ Factorial tests passed");
    Ok(())
}

fn check_strings() -> Result<()> {
    ensure!(string_length(b"hello\0") == 5, "string_length(\"hello\")");
    ensure!(string_length(b"\0") == 0, "string_length(\"\")");

    let mut buffer = [0u8; 20];
    string_copy(&mut buffer, b"test\0").context("string_copy into 20 bytes")?;
    ensure!(&buffer[..5] == b"test\0", "string_copy contents");

    let mut upper = *b"hello world\0";
    let len = upper.len();
    to_upper_inplace(&mut upper, len);
    ensure!(&upper == b"HELLO WORLD\0", "to_upper_inplace");
    println!("✓ String operations passed");
    Ok(())
}

fn check_arrays() -> Result<()> {
    let values = [5, 2, 8, 1, 9];
    ensure!(array_sum(&values) == 25, "array_sum");
    ensure!(array_max(&values).context("array_max")? == 9, "array_max");

    let mut sorted = values;
    array_sort(&mut sorted);
    ensure!(sorted == [1, 2, 5, 8, 9], "array_sort produced {:?}", sorted);
    println!("✓ Array operations passed");
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    tracing::debug!(?args, "parsed arguments");

    println!("Testing libdummy v{}", get_version());

    if !args.skip_lifecycle {
        init().context("init")?;
    }

    println!("\n=== Testing Basic Math Operations ===");
    check_math()?;

    println!("\n=== Testing String Operations ===");
    check_strings()?;

    println!("\n=== Testing Array Operations ===");
    check_arrays()?;

    if !args.skip_lifecycle {
        cleanup();
    }

    println!("\nAll checks passed! libdummy is working correctly.");
    Ok(())
}
