/// Where the scanner and parser send their diagnostics.
///
/// Each failure is reported exactly once, as a single formatted message,
/// before the failing stage returns. This is the only side effect of the
/// two stages.
pub trait Report {
    fn report(&mut self, message: &str);
}

/// Prints every diagnostic to stderr.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl Report for ConsoleReporter {
    fn report(&mut self, message: &str) {
        eprintln!("{message}");
    }
}

/// Collects diagnostics in memory, for tests and embedding.
#[derive(Debug, Default)]
pub struct BufferedReporter {
    pub messages: Vec<String>,
}

impl Report for BufferedReporter {
    fn report(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
