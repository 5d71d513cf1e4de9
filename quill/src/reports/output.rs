//! Output trait for rendering reports to different formats.

use std::io::Write;

/// Target output for reports.
///
/// Reports describe *what* to output using these semantic methods.
/// Implementations decide *how* to render.
pub trait Output {
    /// Render an indented key-value pair.
    fn key_value_indented(&mut self, key: &str, value: &str);

    /// Render a separator/divider with a label.
    fn divider(&mut self, label: &str);

    /// Render a line of preformatted text.
    fn preformatted(&mut self, text: &str);

    /// Write text exactly as given, without adding a newline.
    fn raw(&mut self, text: &str);

    /// Render a blank line.
    fn newline(&mut self);
}

/// A report that can render itself to an output.
pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Terminal output implementation.
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for TerminalOutput {
    fn key_value_indented(&mut self, key: &str, value: &str) {
        println!("  {}: {}", key, value);
    }

    fn divider(&mut self, label: &str) {
        println!("── {} ──", label);
    }

    fn preformatted(&mut self, text: &str) {
        println!("{}", text);
    }

    fn raw(&mut self, text: &str) {
        print!("{}", text);
        if let Err(err) = std::io::stdout().flush() {
            tracing::warn!(%err, "failed to flush stdout");
        }
    }

    fn newline(&mut self) {
        println!();
    }
}

/// Collects output in memory for tests.
#[cfg(test)]
#[derive(Default)]
pub struct BufferOutput(pub String);

#[cfg(test)]
impl Output for BufferOutput {
    fn key_value_indented(&mut self, key: &str, value: &str) {
        self.0.push_str(&format!("  {key}: {value}\n"));
    }

    fn divider(&mut self, label: &str) {
        self.0.push_str(&format!("── {label} ──\n"));
    }

    fn preformatted(&mut self, text: &str) {
        self.0.push_str(text);
        self.0.push('\n');
    }

    fn raw(&mut self, text: &str) {
        self.0.push_str(text);
    }

    fn newline(&mut self) {
        self.0.push('\n');
    }
}
