//! App Source - `add` 명령의 식별자 분류

use std::path::PathBuf;

/// 애플리케이션 식별자 종류
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppSource {
    /// 로컬 경로 (`/`, `.`, `~`로 시작)
    Local(PathBuf),
    /// HTTP URL
    Url(String),
    /// 패키지 이름
    Package(String),
}

impl AppSource {
    /// 식별자 파싱
    pub fn parse(identifier: &str) -> Self {
        let identifier = identifier.trim();
        if identifier.starts_with('/') || identifier.starts_with('.') || identifier.starts_with('~') {
            AppSource::Local(PathBuf::from(identifier))
        } else if identifier.starts_with("http://") || identifier.starts_with("https://") {
            AppSource::Url(identifier.to_string())
        } else {
            AppSource::Package(identifier.to_string())
        }
    }

    /// apps.json에 기록할 패키지 이름
    ///
    /// 패키지는 그대로, 경로/URL은 마지막 세그먼트에서 `.git`을 뗀 이름
    pub fn package_name(&self) -> String {
        match self {
            AppSource::Package(name) => name.clone(),
            AppSource::Local(path) => last_segment(&path.to_string_lossy()),
            AppSource::Url(url) => last_segment(url),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            AppSource::Local(_) => "local",
            AppSource::Url(_) => "url",
            AppSource::Package(_) => "package",
        }
    }
}

fn last_segment(source: &str) -> String {
    let segment = source
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or(source);
    segment.strip_suffix(".git").unwrap_or(segment).to_string()
}

impl std::fmt::Display for AppSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppSource::Local(path) => write!(f, "{}", path.display()),
            AppSource::Url(url) => write!(f, "{}", url),
            AppSource::Package(name) => write!(f, "{}", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_package() {
        let source = AppSource::parse("@appdock/auth.app");
        assert_eq!(source, AppSource::Package("@appdock/auth.app".into()));
        assert_eq!(source.package_name(), "@appdock/auth.app");
        assert_eq!(source.kind(), "package");
    }

    #[test]
    fn test_parse_local() {
        for id in ["./apps/blog.app", "/srv/apps/blog.app/", "~/code/blog.app.git"] {
            let source = AppSource::parse(id);
            assert_eq!(source.kind(), "local");
            assert_eq!(source.package_name(), "blog.app");
        }
    }

    #[test]
    fn test_parse_url() {
        let source = AppSource::parse("https://github.com/acme/shop.app.git");
        assert_eq!(source.kind(), "url");
        assert_eq!(source.package_name(), "shop.app");
        assert_eq!(source.to_string(), "https://github.com/acme/shop.app.git");
    }
}
