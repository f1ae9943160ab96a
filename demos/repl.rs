use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt};
use pebble::{DisplayNumber, EvaluationContext, StatementBuffer};

async fn query(stdout: &mut io::Stdout, lines: &mut io::Lines<io::BufReader<io::Stdin>>, buffer: &StatementBuffer) -> io::Result<Option<String>> {
    let prompt = if buffer.is_empty() { "> " } else { ". " };
    stdout.write_all(prompt.as_bytes()).await?;
    stdout.flush().await?;
    lines.next_line().await
}

fn run(context: &mut EvaluationContext, statement: &str) {
    match context.evaluate_str(statement) {
        Ok(Some(value)) => println!("{}", DisplayNumber(value)),
        Ok(None) => {}
        Err(err) => eprintln!("Error: {}", err),
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let mut context = EvaluationContext::new();
    let mut lines = io::BufReader::new(io::stdin()).lines();
    let mut stdout = io::stdout();

    // Lines are collected until a statement is complete
    let mut buffer = StatementBuffer::new();

    while let Some(line) = query(&mut stdout, &mut lines, &buffer).await? {
        if let Some(statement) = buffer.push_line(&line) {
            run(&mut context, &statement);
        }
    }

    if let Some(statement) = buffer.flush() {
        run(&mut context, &statement);
    }
    Ok(())
}
