//! Serialization tests for `olap-axis`; see `tests/`.
