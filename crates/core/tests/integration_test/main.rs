/// Integration tests for the expiration quantizer covering bucket batching,
/// urgency ordering across classes, and the checked quantizer entry point.

mod batching;
mod checked;
mod ordering;
