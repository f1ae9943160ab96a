use pebble::EvaluationContext;

fn main() {
    let program = vec![
        "total = 0",
        "for (n = 1; n < 6; n = n + 1) total = total + n * n",
        "print total / 2",
        "total % 4",
        "total / (n - 6)",
    ];

    let mut context = EvaluationContext::new();
    for source in program {
        match context.evaluate_str(source) {
            Ok(Some(value)) => println!("{}: {}", source, pebble::format_number(value)),
            Ok(None) => {}
            Err(err) => println!("{}: Error: {}", source, err)
        }
    }
}
