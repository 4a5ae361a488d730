// ============================================================================
// Basic Usage Example
// ============================================================================

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use numeric_kernel::prelude::*;

fn main() {
    println!("=== Numeric Kernel Example ===\n");

    // Square roots at the default context (128 significant digits)
    println!("=== Square-Root Solver ===");
    let ctx = SquareRootContext::default();
    for n in [2u32, 10, 144] {
        let root = sqrt(&BigDecimal::from(n), &ctx).unwrap();
        println!("sqrt({}) = {}", n, root);
    }

    // Per-iteration visibility through a trace sink
    struct StdoutSink;
    impl TraceSink for StdoutSink {
        fn on_iteration(&self, trace: &IterationTrace) {
            println!(
                "  iteration {}: {} (delta {})",
                trace.iteration, trace.successor, trace.delta
            );
        }
    }
    println!("\nIterations for sqrt(2):");
    sqrt_with_sink(&BigDecimal::from(2), &ctx, &StdoutSink).unwrap();

    let exact = sqrt_of_perfect_square(&BigInt::from(10_000u32)).unwrap();
    println!("sqrt_of_perfect_square(10000) = {} (exact)", exact);

    // Complex arithmetic over exact integer coordinates
    println!("\n=== Complex Numbers ===");
    let z = ComplexInt::new(BigInt::from(3), BigInt::from(4));
    println!("z           = {}", z);
    println!("conjugate   = {}", z.conjugate());
    println!("abs_pow2    = {}", z.abs_pow2());
    println!("abs         = {}", z.abs(&ctx).unwrap());
    println!("z^2         = {}", z.pow(2));

    let polar = z.polar_form(&ctx).unwrap();
    println!("polar form  = {}", polar);

    // Round-trip through polar coordinates at decimal precision
    let decimal = ComplexDecimal::from(z);
    let back = decimal
        .polar_form(&ctx)
        .unwrap()
        .complex_number(ctx.math())
        .unwrap();
    println!("round trip  = {}", back);

    // Builder-validated matrices
    println!("\n=== Matrix Engine ===");
    let mut builder = MatrixBuilder::new(3, 3).unwrap();
    builder.put(1, 1, BigInt::from(2)).unwrap();
    builder.put(2, 2, BigInt::from(5)).unwrap();
    builder.put(3, 3, BigInt::from(7)).unwrap();
    builder.put_all(BigInt::from(0));
    let diagonal = builder.build().unwrap();

    println!("diagonal    = {}", diagonal.is_diagonal());
    println!("symmetric   = {}", diagonal.is_symmetric());
    println!("det         = {}", diagonal.det().unwrap());
    println!("trace       = {}", diagonal.trace().unwrap());

    // Decimal matrix inversion at the default math context
    let rows = vec![
        vec![BigDecimal::from(4), BigDecimal::from(7)],
        vec![BigDecimal::from(2), BigDecimal::from(6)],
    ];
    let matrix = Matrix::from_rows(rows).unwrap();
    let inverse = matrix.inverse(&MathContext::DEFAULT).unwrap();
    println!("\nA^-1[1,1]   = {}", inverse.get(1, 1).unwrap());
    let product = matrix.mul(&inverse).unwrap();
    println!("A * A^-1    = identity? {}", product.is_identity());

    // Validation errors carry the offending values
    println!("\n=== Validation ===");
    let err = sqrt(&BigDecimal::from(-4), &ctx).unwrap_err();
    println!("sqrt(-4): {}", err);
    let err = MatrixBuilder::<BigInt>::new(0, 3).unwrap_err();
    println!("0x3 builder: {}", err);
}
