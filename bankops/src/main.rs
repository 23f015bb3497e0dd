use bankopslib::report::{write_report, DEFAULT_COUNT};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tracing::error;

#[derive(Parser, Debug)]
#[command(name = "bankops", version, about = "Последние операции по выписке")]
struct Cli {
    /// Файл с операциями в формате JSON
    #[arg(short = 'i', long = "input", default_value = "operations.json")]
    input: PathBuf,

    /// Сколько последних выполненных операций показать
    #[arg(short = 'n', long = "count", default_value_t = DEFAULT_COUNT)]
    count: usize,
}

fn main() {
    // Журнал уходит в stderr, stdout остаётся чистым потоком отчёта.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = write_report(&mut out, &cli.input, cli.count) {
        error!("cannot build report from {}: {e}", cli.input.display());
        std::process::exit(1);
    }
    let _ = out.flush();
}
