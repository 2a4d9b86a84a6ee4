//! Property-based tests

mod codec_proptest;
