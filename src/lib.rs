//! Test host package for workspace-level integration tests (see `tests/`).
