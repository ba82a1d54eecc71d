//! Destinations of progress output
//!
//! The solver never writes to a global stream. When diagnostics are enabled it
//! formats one line per sample and hands it to the [`Sink`] supplied by the caller.

/// Receiver of formatted progress lines
pub trait Sink {
    /// Consumes one line of output (without trailing newline).
    fn write_line(&mut self, line: &str);
}

/// Writes progress lines to standard output.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdoutSink;

impl Sink for StdoutSink {
    fn write_line(&mut self, line: &str) {
        println!("{}", line);
    }
}

/// Forwards progress lines to the `log` facade at info level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl Sink for LogSink {
    fn write_line(&mut self, line: &str) {
        log::info!("{}", line);
    }
}

#[cfg(feature = "wasm")]
mod console {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(js_namespace = console)]
        pub fn log(value: &str);
    }
}

/// Writes progress lines to the browser console.
#[cfg(feature = "wasm")]
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink;

#[cfg(feature = "wasm")]
impl Sink for ConsoleSink {
    fn write_line(&mut self, line: &str) {
        console::log(line);
    }
}

/// Collects progress lines in memory.
impl Sink for Vec<String> {
    fn write_line(&mut self, line: &str) {
        self.push(line.to_string());
    }
}

pub(crate) fn header() -> String {
    format!(
        "{:>10} {:>15} {:>12} {:>12}",
        "iter", "dual obj", "|dxi|", "|dbeta|"
    )
}

pub(crate) fn progress(iter: usize, obj: f64, xi_diff: f64, beta_diff: f64) -> String {
    format!(
        "{:10} {:15.6e} {:12.3e} {:12.3e}",
        iter, obj, xi_diff, beta_diff
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_lines_align_with_header() {
        let mut lines: Vec<String> = Vec::new();
        lines.write_line(&header());
        lines.write_line(&progress(10, -1.25, 0.5, 1e-3));
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].len(), lines[1].len());
        assert!(lines[1].trim_start().starts_with("10 "));
    }

    #[test]
    fn stream_sinks_accept_lines() {
        let mut sinks: Vec<Box<dyn Sink>> = vec![Box::new(StdoutSink), Box::new(LogSink)];
        for sink in sinks.iter_mut() {
            sink.write_line(&header());
            sink.write_line(&progress(0, 0.5, 1.0, 1.0));
        }
    }
}
