//! 보호된 엔드포인트 테이블
//!
//! 어떤 경로가 어떤 종류의 인증 코드를 요구하는지를 나타내는
//! 불변의 순서 있는 (패턴, 종류) 목록입니다.

use crate::domain::verification::CodeKind;
use crate::utils::path_matcher;

/// 인증 코드를 요구하는 경로 패턴
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtectedEndpoint {
    /// Ant 스타일 경로 패턴 (`*`, `**`, `?`, `{name}` 지원)
    pub pattern: String,
    /// 이 패턴에 매칭되는 요청이 제출해야 하는 코드 종류
    pub kind: CodeKind,
}

impl ProtectedEndpoint {
    /// 요청 경로가 이 엔드포인트 패턴에 매칭되는지 확인합니다.
    pub fn matches(&self, path: &str) -> bool {
        path_matcher::matches(&self.pattern, path)
    }
}

/// 시작 시점에 한 번 구성되는 보호 경로 테이블
///
/// 구성 후에는 변경할 수 없으며 `Arc`로 공유됩니다.
/// 분류는 등록 순서대로 패턴을 검사해 처음 매칭된 종류를 반환합니다.
///
/// # Examples
///
/// ```rust,ignore
/// let table = EndpointTable::builder()
///     .register("/authentication/form", CodeKind::Image)
///     .register("/auth/sms/*", CodeKind::Sms)
///     .build();
///
/// assert_eq!(table.classify("/auth/sms/login"), Some(CodeKind::Sms));
/// assert_eq!(table.classify("/health"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EndpointTable {
    endpoints: Vec<ProtectedEndpoint>,
}

impl EndpointTable {
    pub fn builder() -> EndpointTableBuilder {
        EndpointTableBuilder::default()
    }

    /// 요청 경로를 분류합니다.
    ///
    /// # Returns
    ///
    /// * `Some(kind)` - 처음 매칭된 패턴의 코드 종류
    /// * `None` - 어떤 패턴에도 매칭되지 않음 (게이트 통과)
    pub fn classify(&self, path: &str) -> Option<CodeKind> {
        self.endpoints
            .iter()
            .find(|endpoint| endpoint.matches(path))
            .map(|endpoint| endpoint.kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProtectedEndpoint> {
        self.endpoints.iter()
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }
}

/// [`EndpointTable`] 빌더
///
/// 같은 패턴을 다시 등록하면 처음 위치를 유지한 채 종류만 바뀝니다.
/// 빈 패턴은 무시합니다.
#[derive(Debug, Default)]
pub struct EndpointTableBuilder {
    endpoints: Vec<ProtectedEndpoint>,
}

impl EndpointTableBuilder {
    pub fn register(mut self, pattern: &str, kind: CodeKind) -> Self {
        let pattern = pattern.trim();
        if pattern.is_empty() {
            return self;
        }

        match self.endpoints.iter_mut().find(|e| e.pattern == pattern) {
            Some(existing) => {
                log::debug!("보호 경로 재등록: {} ({} -> {})", pattern, existing.kind, kind);
                existing.kind = kind;
            }
            None => self.endpoints.push(ProtectedEndpoint {
                pattern: pattern.to_string(),
                kind,
            }),
        }
        self
    }

    pub fn register_all<S: AsRef<str>>(self, patterns: &[S], kind: CodeKind) -> Self {
        patterns
            .iter()
            .fold(self, |builder, pattern| builder.register(pattern.as_ref(), kind))
    }

    pub fn build(self) -> EndpointTable {
        EndpointTable {
            endpoints: self.endpoints,
        }
    }
}
