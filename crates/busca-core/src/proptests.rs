//! Property-based tests for escaping and toggles.
