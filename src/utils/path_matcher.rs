//! Ant 스타일 경로 매칭
//!
//! Spring의 `AntPathMatcher`와 같은 문법으로 요청 경로를 패턴과 비교합니다.
//!
//! | 패턴 | 의미 | 예제 |
//! |------|------|------|
//! | `?` | 세그먼트 안의 문자 1개 | `/code/???` |
//! | `*` | 세그먼트 안의 문자 0개 이상 | `/auth/sms/*` |
//! | `**` | 세그먼트 0개 이상 | `/user/**` |
//! | `{name}` | 세그먼트 1개 전체 | `/code/{kind}` |
//!
//! `*`와 `?`는 `/`를 넘지 않습니다.

const SEPARATOR: char = '/';

/// 경로가 패턴에 매칭되는지 확인합니다.
///
/// 패턴과 경로는 모두 `/`로 시작하는지 여부가 같아야 하며,
/// 패턴이 `**`로 끝나지 않는 한 끝의 `/` 여부도 같아야 합니다.
///
/// # Examples
///
/// ```rust,ignore
/// assert!(matches("/auth/sms/*", "/auth/sms/login"));
/// assert!(matches("/user/**", "/user"));
/// assert!(!matches("/auth/sms/*", "/auth/sms/login/extra"));
/// ```
pub fn matches(pattern: &str, path: &str) -> bool {
    if pattern.starts_with(SEPARATOR) != path.starts_with(SEPARATOR) {
        return false;
    }

    let pattern_segments = tokenize(pattern);
    let path_segments = tokenize(path);

    if !match_segments(&pattern_segments, &path_segments) {
        return false;
    }

    let ends_with_wildcard = pattern_segments.last() == Some(&"**");
    ends_with_wildcard || pattern.ends_with(SEPARATOR) == path.ends_with(SEPARATOR)
}

fn tokenize(value: &str) -> Vec<&str> {
    value
        .split(SEPARATOR)
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// `**`는 0개 이상의 세그먼트를 소비하므로 백트래킹으로 처리합니다.
fn match_segments(pattern: &[&str], path: &[&str]) -> bool {
    match pattern.split_first() {
        None => path.is_empty(),
        Some((&"**", rest)) => {
            // 연속된 `**`는 하나와 같음
            let rest = skip_double_wildcards(rest);
            if rest.is_empty() {
                return true;
            }
            (0..=path.len()).any(|skip| match_segments(rest, &path[skip..]))
        }
        Some((segment, rest)) => match path.split_first() {
            Some((head, tail)) => match_segment(segment, head) && match_segments(rest, tail),
            None => false,
        },
    }
}

fn skip_double_wildcards<'a, 'b>(pattern: &'a [&'b str]) -> &'a [&'b str] {
    let start = pattern.iter().take_while(|segment| **segment == "**").count();
    &pattern[start..]
}

/// 세그먼트 하나를 `*`, `?`, `{name}` 규칙으로 비교합니다.
fn match_segment(pattern: &str, segment: &str) -> bool {
    if is_template_variable(pattern) {
        return !segment.is_empty();
    }

    let pattern: Vec<char> = pattern.chars().collect();
    let text: Vec<char> = segment.chars().collect();

    let (mut p, mut t) = (0, 0);
    let mut star: Option<usize> = None;
    let mut star_text = 0;

    while t < text.len() {
        if p < pattern.len() && (pattern[p] == '?' || pattern[p] == text[t]) {
            p += 1;
            t += 1;
        } else if p < pattern.len() && pattern[p] == '*' {
            star = Some(p);
            star_text = t;
            p += 1;
        } else if let Some(star_pos) = star {
            p = star_pos + 1;
            star_text += 1;
            t = star_text;
        } else {
            return false;
        }
    }

    pattern[p..].iter().all(|c| *c == '*')
}

fn is_template_variable(pattern: &str) -> bool {
    pattern.len() > 2 && pattern.starts_with('{') && pattern.ends_with('}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        assert!(matches("/authentication/form", "/authentication/form"));
        assert!(!matches("/authentication/form", "/authentication/mobile"));
        assert!(!matches("/authentication/form", "/authentication/form/extra"));
    }

    #[test]
    fn test_single_segment_wildcard() {
        assert!(matches("/auth/sms/*", "/auth/sms/login"));
        assert!(!matches("/auth/sms/*", "/auth/sms/login/extra"));
        assert!(!matches("/auth/sms/*", "/auth/image/login"));
        assert!(matches("/code/*.png", "/code/captcha.png"));
        assert!(!matches("/code/*.png", "/code/captcha.jpg"));
    }

    #[test]
    fn test_multi_segment_wildcard() {
        assert!(matches("/user/**", "/user"));
        assert!(matches("/user/**", "/user/password"));
        assert!(matches("/user/**", "/user/password/reset"));
        assert!(matches("/**/login", "/api/v1/login"));
        assert!(matches("/**/login", "/login"));
        assert!(matches("/api/**/reset", "/api/user/password/reset"));
        assert!(!matches("/api/**/reset", "/api/user/password"));
        assert!(matches("/**", "/anything/at/all"));
    }

    #[test]
    fn test_question_mark() {
        assert!(matches("/code/???", "/code/sms"));
        assert!(!matches("/code/???", "/code/image"));
    }

    #[test]
    fn test_template_variable() {
        assert!(matches("/code/{kind}", "/code/image"));
        assert!(!matches("/code/{kind}", "/code"));
        assert!(!matches("/code/{kind}", "/code/image/extra"));
    }

    #[test]
    fn test_leading_and_trailing_separator() {
        assert!(!matches("/login", "login"));
        assert!(!matches("/login", "/login/"));
        assert!(matches("/login/", "/login/"));
        assert!(matches("/user/**", "/user/"));
    }

    #[test]
    fn test_star_matches_empty_within_segment() {
        assert!(matches("/auth/*login", "/auth/login"));
        assert!(matches("/auth/*login", "/auth/smslogin"));
        assert!(!matches("/auth/*login", "/auth/logout"));
    }
}
