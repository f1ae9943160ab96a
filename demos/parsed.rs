use pebble::{parse, Ast, EvaluationContext, SyntaxError};

fn main() {
    let statements = vec![
        "x = 3",
        "if (x > 2) { y = x * 1.5; print y } else print 0",
        "{ a = 1; for (i = 0; i < 10; i = i + 1) a = a * 2 }",
        "a",
    ].into_iter()
        .map(|line| parse(line).map(|ast| (line, ast)))
        .collect::<Result<Vec<(&str, Vec<Ast>)>, SyntaxError>>()
        .unwrap();

    // The trees are parsed once up front and can be evaluated independently of their source
    let mut context = EvaluationContext::new();
    for (source, asts) in &statements {
        for ast in asts {
            match context.evaluate_statement(ast) {
                Ok(Some(value)) => println!("{}: {}", source, pebble::DisplayNumber(value)),
                Ok(None) => {}
                Err(err) => println!("{}: Error: {}", source, err)
            }
        }
    }
}
