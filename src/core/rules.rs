//! 로마자 변환 규칙 표
//!
//! 규칙은 두 목록으로 나뉜다.
//!
//! - **음운 규칙**: 자모 → 자모 치환. 이웃 음절의 자모를 보고 동화·탈락·연음을
//!   처리하므로 문자열 전체에 적용한다. 라틴 문자를 만들지 않는다.
//! - **문자 규칙**: 자모 하나 → 라틴 문자. 문맥이 필요 없어 글자 단위로 적용한다.
//!
//! 각 목록 안에서 순서가 결과를 좌우한다. 예를 들어 겹받침 풀기는 비음화 뒤에
//! 와야 한다 (값만 → 감만, 순서가 바뀌면 갑만).

use regex::Regex;

/// 규칙 묶음 (순서대로 적용)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleGroup {
    /// 종성 없음 채움 문자 제거
    EmptyBatchim,
    /// 비음화 (받침 + ㄴ/ㅁ)
    NasalAssimilation,
    /// ㄴ/ㄹ 첨가
    Epenthesis,
    /// 자음 동화 (유음화 포함)
    ConsonantAssimilation,
    /// 같은 계열 자음이 겹칠 때 붙임표 삽입
    Hyphenation,
    /// 겹받침 풀기
    ComplexBatchim,
    /// 구개음화
    Palatalization,
    /// 연음 (받침 + ㅇ)
    Liaison,
    /// 거센소리되기 (ㅎ 축약)
    Aspiration,
    /// 남은 ㅎ 받침 탈락
    HieutElision,
    /// 이어진 받침 중 뒤 받침 제거
    BatchimSimplification,
    /// 초성 → 라틴 문자
    Initial,
    /// 중성 → 라틴 문자
    Medial,
    /// 종성 → 라틴 문자
    Final,
}

/// 치환 규칙 하나
#[derive(Debug, Clone)]
pub struct Rule {
    /// 규칙 묶음
    pub group: RuleGroup,
    /// 찾을 패턴
    pub pattern: Regex,
    /// 바꿀 문자열 (`${1}` 형식으로 캡처 참조 가능)
    pub replacement: &'static str,
}

impl Rule {
    fn new(group: RuleGroup, pattern: &str, replacement: &'static str) -> Self {
        let pattern = Regex::new(pattern)
            .unwrap_or_else(|e| panic!("규칙 패턴 컴파일 실패 '{}': {}", pattern, e));
        Self {
            group,
            pattern,
            replacement,
        }
    }

    /// 문자열 전체에 규칙을 한 번 적용 (겹치지 않는 모든 일치를 왼쪽부터 치환)
    pub fn apply(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, self.replacement)
            .into_owned()
    }

    /// 패턴이 정확히 한 글자에만 일치하는 규칙인지 확인
    #[cfg(test)]
    fn is_single_char(&self) -> bool {
        let source = self.pattern.as_str();
        let mut chars = source.chars();
        matches!((chars.next(), chars.next()), (Some(c), None) if !c.is_ascii_punctuation())
    }
}

/// 규칙 목록을 순서대로 적용
///
/// 각 규칙은 바로 앞 규칙이 만든 문자열 전체를 다시 훑는다.
pub fn apply_rules(text: &str, rules: &[Rule]) -> String {
    let mut working = text.to_string();
    for rule in rules {
        if rule.pattern.is_match(&working) {
            working = rule.apply(&working);
        }
    }
    working
}

/// 받침 자음 (이어진 받침 정리에 쓰는 문자 집합)
const BATCHIM_CLASS: &str = "[ᆨᆩᆫᆮᆯᆷᆸᆺᆻᆼᆽᆾᆿᇀᇁᇂ]";

fn build_phonological_rules() -> Vec<Rule> {
    use RuleGroup::*;

    let simplification = format!("({}){}", BATCHIM_CLASS, BATCHIM_CLASS);

    let mut rules = vec![
        Rule::new(EmptyBatchim, "ᆧ", ""),
        // 비음화: 뒤따르는 ㄴ/ㅁ은 캡처로 보존
        Rule::new(NasalAssimilation, "[ᆸᇁᆹᆲᆵ]([ᄂᄆ])", "ᆷ${1}"),
        Rule::new(NasalAssimilation, "[ᆮᇀᆽᆾᆺᆻᇂ]([ᄂᄆ])", "ᆫ${1}"),
        Rule::new(NasalAssimilation, "[ᆨᆩᆿᆪᆰ]([ᄂᄆ])", "ᆼ${1}"),
        // ㄴ/ㄹ 첨가 (이중모음 ㅑㅒㅕㅖㅛㅠ 앞)
        Rule::new(Epenthesis, "ᆨᄋ([ᅣᅤᅧᅨᅭᅲ])", "ᆼᄂ${1}"),
        Rule::new(Epenthesis, "ᆯᄋ([ᅣᅤᅧᅨᅭᅲ])", "ᆯᄅ${1}"),
        Rule::new(ConsonantAssimilation, "[ᆨᆼ]ᄅ", "ᆼᄂ"),
        Rule::new(ConsonantAssimilation, "ᆫᄅ(ᅩ)", "ᆫᄂ${1}"),
        Rule::new(ConsonantAssimilation, "ᆯᄂ|ᆫᄅ", "ᆯᄅ"),
        Rule::new(ConsonantAssimilation, "[ᆷᆸ]ᄅ", "ᆷᄂ"),
        Rule::new(ConsonantAssimilation, "ᆰᄅ", "ᆨᄅ"),
        Rule::new(Hyphenation, "ᆨᄏ", "ᆨ-ᄏ"),
        Rule::new(Hyphenation, "ᆸᄑ", "ᆸ-ᄑ"),
        Rule::new(Hyphenation, "ᆮᄐ", "ᆮ-ᄐ"),
        Rule::new(ComplexBatchim, "ᆪ", "ᆨᆺ"),
        Rule::new(ComplexBatchim, "ᆬ", "ᆫᆽ"),
        Rule::new(ComplexBatchim, "ᆭ", "ᆫᇂ"),
        Rule::new(ComplexBatchim, "ᆰ", "ᆯᆨ"),
        Rule::new(ComplexBatchim, "ᆱ", "ᆯᆷ"),
        Rule::new(ComplexBatchim, "ᆲ", "ᆯᆸ"),
        Rule::new(ComplexBatchim, "ᆳ", "ᆯᆺ"),
        Rule::new(ComplexBatchim, "ᆴ", "ᆯᇀ"),
        Rule::new(ComplexBatchim, "ᆵ", "ᆯᇁ"),
        Rule::new(ComplexBatchim, "ᆶ", "ᆯᇂ"),
        Rule::new(ComplexBatchim, "ᆹ", "ᆸᆺ"),
        // ㄷ/ㅌ 받침 + 이 (채움 문자는 이미 지워진 상태)
        Rule::new(Palatalization, "ᆮ이", "지"),
        Rule::new(Palatalization, "ᇀ이", "치"),
        Rule::new(Liaison, "ᆨᄋ", "ᄀ"),
        Rule::new(Liaison, "ᆩᄋ", "ᄁ"),
        Rule::new(Liaison, "ᆮᄋ", "ᄃ"),
        Rule::new(Liaison, "ᆯᄋ", "ᄅ"),
        Rule::new(Liaison, "ᆸᄋ", "ᄇ"),
        Rule::new(Liaison, "ᆺᄋ", "ᄉ"),
        Rule::new(Liaison, "ᆻᄋ", "ᄊ"),
        Rule::new(Liaison, "ᆽᄋ", "ᄌ"),
        Rule::new(Liaison, "ᆾᄋ", "ᄎ"),
        Rule::new(Liaison, "ᇂᄋ", ""),
        Rule::new(Aspiration, "ᇂᄀ|ᆨᄒ", "ᄏ"),
        Rule::new(Aspiration, "ᇂᄃ|ᆮᄒ", "ᄐ"),
        Rule::new(Aspiration, "ᇂᄌ|ᆽᄒ", "ᄎ"),
        Rule::new(Aspiration, "ᇂᄇ", "ᄇ"),
        Rule::new(Aspiration, "ᆸᄒ", "ᄑ"),
        // 공백이나 문자열 끝 앞의 ㅎ 받침은 남긴다 (연속된 ㅎ은 마지막 것만 판단)
        Rule::new(HieutElision, r"ᇂ+(\S)", "${1}"),
    ];
    rules.push(Rule::new(BatchimSimplification, &simplification, "${1}"));
    rules
}

fn build_graphemic_rules() -> Vec<Rule> {
    use RuleGroup::*;

    vec![
        Rule::new(EmptyBatchim, "ᆧ", ""),
        Rule::new(Initial, "ᄀ", "g"),
        Rule::new(Initial, "ᄁ", "kk"),
        Rule::new(Initial, "ᄂ", "n"),
        Rule::new(Initial, "ᄃ", "d"),
        Rule::new(Initial, "ᄄ", "tt"),
        Rule::new(Initial, "ᄅ", "r"),
        Rule::new(Initial, "ᄆ", "m"),
        Rule::new(Initial, "ᄇ", "b"),
        Rule::new(Initial, "ᄈ", "pp"),
        Rule::new(Initial, "ᄉ", "s"),
        Rule::new(Initial, "ᄊ", "ss"),
        Rule::new(Initial, "ᄋ", ""),
        Rule::new(Initial, "ᄌ", "j"),
        Rule::new(Initial, "ᄍ", "jj"),
        Rule::new(Initial, "ᄎ", "ch"),
        Rule::new(Initial, "ᄏ", "k"),
        Rule::new(Initial, "ᄐ", "t"),
        Rule::new(Initial, "ᄑ", "p"),
        Rule::new(Initial, "ᄒ", "h"),
        Rule::new(Medial, "ᅡ", "a"),
        Rule::new(Medial, "ᅢ", "ae"),
        Rule::new(Medial, "ᅣ", "ya"),
        Rule::new(Medial, "ᅤ", "yae"),
        Rule::new(Medial, "ᅥ", "eo"),
        Rule::new(Medial, "ᅦ", "e"),
        Rule::new(Medial, "ᅧ", "yeo"),
        Rule::new(Medial, "ᅨ", "ye"),
        Rule::new(Medial, "ᅩ", "o"),
        Rule::new(Medial, "ᅪ", "wa"),
        Rule::new(Medial, "ᅫ", "wae"),
        Rule::new(Medial, "ᅬ", "oe"),
        Rule::new(Medial, "ᅭ", "yo"),
        Rule::new(Medial, "ᅮ", "u"),
        Rule::new(Medial, "ᅯ", "wo"),
        Rule::new(Medial, "ᅰ", "we"),
        Rule::new(Medial, "ᅱ", "wi"),
        Rule::new(Medial, "ᅲ", "yu"),
        Rule::new(Medial, "ᅳ", "eu"),
        Rule::new(Medial, "ᅴ", "ui"),
        Rule::new(Medial, "ᅵ", "i"),
        Rule::new(Final, "ᆨ", "k"),
        Rule::new(Final, "ᆩ", "k"),
        Rule::new(Final, "ᆪ", "k"),
        Rule::new(Final, "ᆫ", "n"),
        Rule::new(Final, "ᆮ", "t"),
        Rule::new(Final, "ᆯ", "l"),
        Rule::new(Final, "ᆷ", "m"),
        Rule::new(Final, "ᆸ", "p"),
        Rule::new(Final, "ᆺ", "t"),
        Rule::new(Final, "ᆻ", "t"),
        Rule::new(Final, "ᆼ", "ng"),
        Rule::new(Final, "ᆽ", "t"),
        Rule::new(Final, "ᆾ", "t"),
        Rule::new(Final, "ᆿ", "k"),
        Rule::new(Final, "ᇀ", "t"),
        Rule::new(Final, "ᇁ", "p"),
        Rule::new(Final, "ᇂ", "t"),
    ]
}

lazy_static::lazy_static! {
    static ref PHONOLOGICAL_RULES: Vec<Rule> = build_phonological_rules();
    static ref GRAPHEMIC_RULES: Vec<Rule> = build_graphemic_rules();
}

/// 음운 규칙 목록 (문자열 전체에 적용)
pub fn phonological_rules() -> &'static [Rule] {
    &PHONOLOGICAL_RULES
}

/// 문자 규칙 목록 (글자 단위로 적용)
pub fn graphemic_rules() -> &'static [Rule] {
    &GRAPHEMIC_RULES
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::unicode::decompose_str;
    use unicode_normalization::UnicodeNormalization;

    fn compose(jamo: &str) -> String {
        jamo.nfc().collect()
    }

    fn has_latin(text: &str) -> bool {
        text.chars().any(|c| c.is_ascii_alphabetic())
    }

    #[test]
    fn test_tables_compile() {
        assert_eq!(phonological_rules().len(), 44);
        assert_eq!(graphemic_rules().len(), 58);
    }

    #[test]
    fn test_phonological_rules_never_emit_latin() {
        for rule in phonological_rules() {
            assert!(
                !has_latin(rule.replacement),
                "{:?} 규칙이 라틴 문자를 만든다: {}",
                rule.group,
                rule.replacement
            );
        }
    }

    #[test]
    fn test_graphemic_rules_are_single_char() {
        for rule in graphemic_rules() {
            assert!(rule.is_single_char(), "{}", rule.pattern.as_str());
        }
    }

    #[test]
    fn test_graphemic_rules_emit_only_latin() {
        for rule in graphemic_rules() {
            assert!(rule.replacement.chars().all(|c| c.is_ascii_lowercase()));
        }
    }

    #[test]
    fn test_rule_apply_replaces_every_match() {
        let rule = Rule::new(RuleGroup::Liaison, "ᆨᄋ", "ᄀ");
        assert_eq!(rule.apply("ᆨᄋᆨᄋ"), "ᄀᄀ");
        assert_eq!(rule.apply("abc"), "abc");
    }

    #[test]
    fn test_capture_keeps_following_consonant() {
        let nasal = &phonological_rules()[1];
        assert_eq!(nasal.group, RuleGroup::NasalAssimilation);
        // 값만 → 감만: 뒤 음절의 ㅁ은 그대로 남는다
        let input = decompose_str("값만");
        assert_eq!(compose(&nasal.apply(&input)), "감만");
    }

    #[test]
    fn test_hieut_kept_before_space_and_end() {
        let elision = phonological_rules()
            .iter()
            .find(|r| r.group == RuleGroup::HieutElision)
            .unwrap();
        let kept = "\u{110C}\u{1169}\u{11C2} \u{110C}\u{1169}\u{11C2}";
        assert_eq!(elision.apply(kept), kept);
        assert_eq!(
            elision.apply("\u{110C}\u{1169}\u{11C2}\u{1109}"),
            "\u{110C}\u{1169}\u{1109}"
        );
    }

    #[test]
    fn test_hieut_run_elided_before_letter() {
        let elision = phonological_rules()
            .iter()
            .find(|r| r.group == RuleGroup::HieutElision)
            .unwrap();
        assert_eq!(elision.apply("\u{11C2}\u{11C2}\u{1100}\u{1161}"), "\u{1100}\u{1161}");
        // 공백이나 끝 앞에서는 마지막 ㅎ 하나만 남는다
        assert_eq!(elision.apply("\u{11C2}\u{11C2} a"), "\u{11C2} a");
        assert_eq!(elision.apply("\u{11C2}\u{11C2}\u{11C2}"), "\u{11C2}");
    }

    #[test]
    fn test_batchim_simplification_keeps_first() {
        let simplification = phonological_rules().last().unwrap();
        assert_eq!(simplification.group, RuleGroup::BatchimSimplification);
        // ᆯᆨ → ᆯ
        assert_eq!(
            simplification.apply("\u{1103}\u{1161}\u{11AF}\u{11A8}"),
            "\u{1103}\u{1161}\u{11AF}"
        );
    }

    #[test]
    fn test_apply_rules_in_order() {
        // 않아: 겹받침 풀기 → ㅎ 연음 탈락
        let input = decompose_str("않아");
        assert_eq!(
            apply_rules(&input, phonological_rules()),
            "\u{110B}\u{1161}\u{11AB}\u{1161}"
        );
    }

    #[test]
    fn test_palatalization() {
        let input = decompose_str("같이");
        assert_eq!(compose(&apply_rules(&input, phonological_rules())), "가치");
        let input = decompose_str("굳이");
        assert_eq!(compose(&apply_rules(&input, phonological_rules())), "구지");
    }
}
