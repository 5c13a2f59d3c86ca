//! 인증 코드 문자열 생성

use rand::Rng;

/// `length` 자리의 숫자 코드를 생성합니다.
///
/// 앞자리 0도 유효한 자리로 취급하므로 결과 길이는 항상 `length`입니다.
pub fn generate_numeric_code(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect()
}
