// Diagnostic sink boundary and resolution messages

use weft_module::ModuleReference;

/// Receives resolver diagnostics. Hosts plug in their own sink; [`LogSink`]
/// forwards to the `log` facade.
pub trait DiagnosticSink {
    fn debug(&self, message: &str);
}

/// Default sink: forwards debug diagnostics to `log::debug!`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn debug(&self, message: &str) {
        log::debug!("{}", message);
    }
}

/// The single message emitted when a reference cannot be located anywhere
/// known: the reference's full identity plus the alphabetically sorted list
/// of references that were considered.
pub fn unresolved_message(reference: &ModuleReference, display_references: &[String]) -> String {
    let mut tried: Vec<&str> = display_references.iter().map(String::as_str).collect();
    tried.sort_unstable();
    format!("cannot find '{}'.\nTried:\n{}", reference, tried.join("\n"))
}
