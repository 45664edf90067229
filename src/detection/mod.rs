//! 입력 검증 모듈

pub mod validator;

pub use validator::{is_compatibility_jamo, is_only_korean};
