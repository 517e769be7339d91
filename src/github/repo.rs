use super::FetchError;
use std::fmt;
use std::str::FromStr;

/// Repository owner/name pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl RepoRef {
    /// Parse from a URL-shaped identifier such as
    /// `https://github.com/owner/name` or `owner/name`.
    ///
    /// The last two path segments are taken as owner and name.
    pub fn parse(locator: &str) -> Result<Self, FetchError> {
        let segments: Vec<&str> = locator
            .trim()
            .trim_end_matches('/')
            .split('/')
            .collect();

        match segments.as_slice() {
            [.., owner, name] if !owner.is_empty() && !name.is_empty() => {
                let name = name.strip_suffix(".git").unwrap_or(*name);
                if name.is_empty() {
                    return Err(FetchError::InvalidRepository(locator.to_string()));
                }
                Ok(Self {
                    owner: owner.to_string(),
                    name: name.to_string(),
                })
            }
            _ => Err(FetchError::InvalidRepository(locator.to_string())),
        }
    }
}

impl FromStr for RepoRef {
    type Err = FetchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_https_url() {
        let repo = RepoRef::parse("https://github.com/acme/widgets").unwrap();
        assert_eq!(repo.owner, "acme");
        assert_eq!(repo.name, "widgets");
    }

    #[test]
    fn test_parse_trailing_slash_and_git_suffix() {
        let repo = RepoRef::parse("https://github.com/acme/widgets.git/").unwrap();
        assert_eq!(repo.to_string(), "acme/widgets");
    }

    #[test]
    fn test_parse_short_form() {
        let repo: RepoRef = "acme/widgets".parse().unwrap();
        assert_eq!(repo.to_string(), "acme/widgets");
    }

    #[test]
    fn test_parse_single_segment_fails() {
        let err = RepoRef::parse("widgets").unwrap_err();
        assert!(matches!(err, FetchError::InvalidRepository(_)));
    }

    #[test]
    fn test_parse_empty_fails() {
        assert!(RepoRef::parse("").is_err());
        assert!(RepoRef::parse("/").is_err());
        assert!(RepoRef::parse("acme/.git").is_err());
    }
}
