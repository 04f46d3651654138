/// Logging port used by the application layer.
///
/// `error` takes a label (the failing step) next to the message so adapters
/// can emit it as a structured field.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, label: &str, message: &str);
    fn debug(&self, message: &str);
}
