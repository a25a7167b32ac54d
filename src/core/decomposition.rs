//! 코드포인트 분해 공식
//!
//! 문자 하나를 공식에 따라 하나 이상의 구성 문자로 분해합니다.
//!
//! ```text
//! value  = codepoint + Σ(results[j] * prev_factors[j]) + offset
//! result = (modulus == 1 ? value : value % modulus) / divisor + intercept
//! ```
//!
//! 예: 한글 음절 '한'(U+D55C)은 초성/중성/종성 자모 세 개로 분해됩니다.

use std::cmp::Ordering;
use std::collections::BTreeMap;

/// 문자 분해 공식
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecompositionRule {
    offset: i64,
    modulus: i64,
    divisor: i64,
    intercept: i64,
    /// 데이터에는 존재하지만 결과 정렬에 사용되지 않음 (결과는 값 기준 정렬)
    order: i64,
    range_min: i64,
    range_max: i64,
    /// 같은 문자의 이전 결과 인덱스 -> 곱할 계수
    prev_factors: BTreeMap<usize, i64>,
}

impl DecompositionRule {
    /// 분해 공식 생성
    /// - range_min/range_max: 적용 대상 코드포인트 범위 (양 끝 포함)
    pub fn new(
        offset: i64,
        modulus: i64,
        divisor: i64,
        intercept: i64,
        order: i64,
        range_min: i64,
        range_max: i64,
    ) -> Self {
        Self {
            offset,
            modulus,
            divisor,
            intercept,
            order,
            range_min,
            range_max,
            prev_factors: BTreeMap::new(),
        }
    }

    /// 이전 결과 계수 추가
    pub fn with_prev_factor(mut self, index: usize, multiply_by: i64) -> Self {
        self.prev_factors.insert(index, multiply_by);
        self
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }

    pub fn modulus(&self) -> i64 {
        self.modulus
    }

    pub fn divisor(&self) -> i64 {
        self.divisor
    }

    pub fn intercept(&self) -> i64 {
        self.intercept
    }

    pub fn order(&self) -> i64 {
        self.order
    }

    pub fn range_min(&self) -> i64 {
        self.range_min
    }

    pub fn range_max(&self) -> i64 {
        self.range_max
    }

    pub fn prev_factors(&self) -> &BTreeMap<usize, i64> {
        &self.prev_factors
    }

    /// `order` 필드 기준 비교
    pub fn cmp_order(&self, other: &Self) -> Ordering {
        self.order.cmp(&other.order)
    }

    /// 코드포인트가 적용 범위 안에 있는지 확인
    pub fn covers(&self, codepoint: i64) -> bool {
        (self.range_min..=self.range_max).contains(&codepoint)
    }

    /// 공식 적용
    /// - previous: 같은 문자에 대해 앞서 계산된 결과들 (계산 실패는 None)
    ///
    /// 중간 계산이 i64 범위를 넘거나 계산 실패한 이전 결과를 참조하면 None
    pub fn apply(&self, codepoint: i64, previous: &[Option<i64>]) -> Option<i64> {
        let mut weighted: i64 = 0;
        for (&index, &factor) in &self.prev_factors {
            if let Some(result) = previous.get(index) {
                weighted = weighted.checked_add(result.as_ref()?.checked_mul(factor)?)?;
            }
        }
        let value = codepoint.checked_add(weighted)?.checked_add(self.offset)?;
        // modulus 0은 로더에서 거부됨
        let reduced = match self.modulus {
            0 | 1 => value,
            m => value.checked_rem(m)?,
        };
        // 정수 나눗셈은 0 방향으로 버림
        let quotient = match self.divisor {
            0 => reduced,
            d => reduced.checked_div(d)?,
        };
        quotient.checked_add(self.intercept)
    }
}

/// 문자열의 각 문자를 분해 공식으로 변환
///
/// 적용되는 공식이 없는 문자는 그대로 통과합니다. 공식이 하나 이상 적용되면
/// 결과 코드포인트를 값 오름차순으로 정렬해 출력합니다. 계산할 수 없거나
/// 유효한 코드포인트가 아닌 결과는 U+FFFD로 출력합니다.
pub fn decompose(text: &str, rules: &[DecompositionRule]) -> String {
    if rules.is_empty() {
        return text.to_string();
    }

    let mut output = String::with_capacity(text.len());
    let mut results: Vec<Option<i64>> = Vec::new();

    for c in text.chars() {
        let codepoint = c as i64;
        results.clear();

        for rule in rules.iter().filter(|r| r.covers(codepoint)) {
            let result = rule.apply(codepoint, &results);
            if result.is_none() {
                log::warn!("분해 공식 계산 범위 초과 ('{}')", c);
            }
            results.push(result);
        }

        if results.is_empty() {
            output.push(c);
            continue;
        }

        // 계산 실패(None)는 앞쪽으로 정렬
        results.sort_unstable();
        for &result in &results {
            match result
                .and_then(|r| u32::try_from(r).ok())
                .and_then(char::from_u32)
            {
                Some(ch) => output.push(ch),
                None => {
                    if let Some(r) = result {
                        log::warn!("분해 결과가 유효한 코드포인트가 아님: {} ('{}')", r, c);
                    }
                    output.push(char::REPLACEMENT_CHARACTER);
                }
            }
        }
    }

    output
}
