//! 변환 엔진: 음절 분해 → 음운 규칙 → 글자별 로마자 → 후처리

pub mod graphemics;
pub mod phonology;
pub mod postprocess;
pub mod romanizer;
pub mod rules;
pub mod unicode;
