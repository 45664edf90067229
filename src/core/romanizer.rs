//! 한글 → 로마자 통합 변환기

use serde::{Deserialize, Serialize};

use crate::core::graphemics::transcribe;
use crate::core::phonology::apply_phonology_with;
use crate::core::postprocess::finish;
use crate::core::rules::{phonological_rules, Rule};
use crate::core::unicode::decompose_str;

/// 출력 형식
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// 음절마다 붙임표로 구분 (an-nyeong)
    #[default]
    Hyphenated,
    /// 구분 없이 이어 씀 (annyeong)
    Compact,
}

/// 한글 로마자 변환기
#[derive(Debug, Clone, Copy, Default)]
pub struct Romanizer {
    style: Style,
}

impl Romanizer {
    /// 새 변환기 생성
    pub fn new(style: Style) -> Self {
        Self { style }
    }

    /// 출력 형식
    pub fn style(&self) -> Style {
        self.style
    }

    /// 문자열을 로마자 표기로 변환
    /// 한글이 아닌 문자(숫자, 영문, 문장부호)는 그대로 유지
    pub fn romanize(&self, input: &str) -> String {
        self.romanize_with(input, phonological_rules())
    }

    /// 주어진 음운 규칙 목록으로 변환
    pub fn romanize_with(&self, input: &str, rules: &[Rule]) -> String {
        if input.is_empty() {
            return String::new();
        }

        let jamo = decompose_str(input);
        let pronounced = apply_phonology_with(&jamo, rules);
        let fragments = transcribe(&pronounced);
        log::debug!("'{}' 발음: '{}', 조각 {}개", input, pronounced, fragments.len());

        match self.style {
            Style::Hyphenated => finish(&fragments),
            Style::Compact => fragments.concat(),
        }
    }
}

/// 한글 문자열을 붙임표 구분 로마자 표기로 변환 (안녕 → an-nyeong)
///
/// 붙임표 없는 표기(annyeong)가 필요하면 [`romanize_compact`]를 쓴다.
pub fn romanize(input: &str) -> String {
    Romanizer::new(Style::Hyphenated).romanize(input)
}

/// 한글 문자열을 구분 없는 로마자 표기로 변환
pub fn romanize_compact(input: &str) -> String {
    Romanizer::new(Style::Compact).romanize(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_words() {
        assert_eq!(romanize("안녕"), "an-nyeong");
        assert_eq!(romanize("한글"), "han-geul");
        assert_eq!(romanize_compact("안녕"), "annyeong");
        assert_eq!(romanize_compact("한글"), "hangeul");
    }

    #[test]
    fn test_hieut_elision() {
        assert_eq!(romanize("좋아"), "jo-a");
        assert_eq!(romanize_compact("좋아"), "joa");
    }

    #[test]
    fn test_nasal_assimilation() {
        assert_eq!(romanize("감사합니다"), "gam-sa-ham-ni-da");
        assert_eq!(romanize_compact("감사합니다"), "gamsahamnida");
    }

    #[test]
    fn test_liquid() {
        assert_eq!(romanize("신라"), "sil-la");
        assert_eq!(romanize_compact("신라"), "silla");
    }

    #[test]
    fn test_sentence() {
        assert_eq!(romanize("안녕 하세요"), "an-nyeong ha-se-yo");
        assert_eq!(romanize_compact("안녕 하세요"), "annyeong haseyo");
    }

    #[test]
    fn test_punctuation() {
        assert_eq!(romanize("안녕!"), "an-nyeong!");
        assert_eq!(romanize("123!?"), "1-2-3-!?");
    }

    #[test]
    fn test_empty() {
        assert_eq!(romanize(""), "");
        assert_eq!(romanize_compact(""), "");
    }

    #[test]
    fn test_non_hangul_composes_canonically() {
        // か + 결합 탁점 → が, 옴 기호 → 그리스 오메가
        assert_eq!(romanize("가\u{304B}\u{3099}"), "ga-\u{304C}");
        assert_eq!(romanize("가\u{2126}"), "ga-\u{03A9}");
        assert_eq!(romanize_compact("e\u{0301}"), "\u{00E9}");
    }

    #[test]
    fn test_style_serde() {
        assert_eq!(serde_json::to_string(&Style::Compact).unwrap(), "\"compact\"");
        let style: Style = serde_json::from_str("\"hyphenated\"").unwrap();
        assert_eq!(style, Style::Hyphenated);
    }
}
