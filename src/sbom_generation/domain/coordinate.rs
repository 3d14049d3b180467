use std::fmt;

/// Why a coordinate string could not be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedCoordinate {
    /// Fewer than two colon-delimited fields
    TooFewFields(usize),
    /// More fields than `group:artifact:type:classifier:version:scope`
    TooManyFields(usize),
    /// The group or artifact field is blank
    EmptyIdentity,
}

impl fmt::Display for MalformedCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedCoordinate::TooFewFields(n) => {
                write!(f, "expected at least 2 colon-delimited fields, found {}", n)
            }
            MalformedCoordinate::TooManyFields(n) => {
                write!(f, "expected at most 6 colon-delimited fields, found {}", n)
            }
            MalformedCoordinate::EmptyIdentity => write!(f, "group or artifact is empty"),
        }
    }
}

impl std::error::Error for MalformedCoordinate {}

/// A Maven coordinate as rendered by the dependency plugin
///
/// Accepted shapes, after any tree glyphs or log prefix are removed:
///
/// ```text
/// group:artifact
/// group:artifact:type
/// group:artifact:type:version
/// group:artifact:type:version:scope
/// group:artifact:type:classifier:version:scope
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coordinate {
    group: String,
    artifact: String,
    packaging: Option<String>,
    classifier: Option<String>,
    version: Option<String>,
    scope: Option<String>,
}

impl Coordinate {
    /// Parses a bare coordinate token.
    ///
    /// Trailing annotations the plugin appends after whitespace
    /// (`(optional)`, `-- module foo [auto]`) are ignored.
    pub fn parse(text: &str) -> Result<Self, MalformedCoordinate> {
        let token = text.split_whitespace().next().unwrap_or("");
        let fields: Vec<&str> = token.split(':').collect();

        if token.is_empty() || fields.len() < 2 {
            let count = if token.is_empty() { 0 } else { fields.len() };
            return Err(MalformedCoordinate::TooFewFields(count));
        }
        if fields.len() > 6 {
            return Err(MalformedCoordinate::TooManyFields(fields.len()));
        }
        if fields[0].is_empty() || fields[1].is_empty() {
            return Err(MalformedCoordinate::EmptyIdentity);
        }

        let field = |i: usize| {
            fields
                .get(i)
                .filter(|f| !f.is_empty())
                .map(|f| f.to_string())
        };

        let (classifier, version, scope) = if fields.len() == 6 {
            (field(3), field(4), field(5))
        } else {
            (None, field(3), field(4))
        };

        Ok(Self {
            group: fields[0].to_string(),
            artifact: fields[1].to_string(),
            packaging: field(2),
            classifier,
            version,
            scope,
        })
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn artifact(&self) -> &str {
        &self.artifact
    }

    pub fn packaging(&self) -> Option<&str> {
        self.packaging.as_deref()
    }

    pub fn classifier(&self) -> Option<&str> {
        self.classifier.as_deref()
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group, self.artifact)?;
        for part in [
            &self.packaging,
            &self.classifier,
            &self.version,
            &self.scope,
        ]
        .into_iter()
        .flatten()
        {
            write!(f, ":{}", part)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_coordinate_with_scope() {
        let coord = Coordinate::parse("org.slf4j:slf4j-api:jar:1.7.36:compile").unwrap();
        assert_eq!(coord.group(), "org.slf4j");
        assert_eq!(coord.artifact(), "slf4j-api");
        assert_eq!(coord.packaging(), Some("jar"));
        assert_eq!(coord.classifier(), None);
        assert_eq!(coord.version(), Some("1.7.36"));
        assert_eq!(coord.scope(), Some("compile"));
    }

    #[test]
    fn test_parse_tree_root_without_scope() {
        let coord = Coordinate::parse("com.a:root:jar:1.0").unwrap();
        assert_eq!(coord.artifact(), "root");
        assert_eq!(coord.version(), Some("1.0"));
        assert_eq!(coord.scope(), None);
    }

    #[test]
    fn test_parse_with_classifier() {
        let coord = Coordinate::parse("io.netty:netty-transport-native-epoll:jar:linux-x86_64:4.1.100.Final:runtime")
            .unwrap();
        assert_eq!(coord.artifact(), "netty-transport-native-epoll");
        assert_eq!(coord.classifier(), Some("linux-x86_64"));
        assert_eq!(coord.version(), Some("4.1.100.Final"));
        assert_eq!(coord.scope(), Some("runtime"));
    }

    #[test]
    fn test_parse_ignores_trailing_annotations() {
        let coord =
            Coordinate::parse("org.slf4j:slf4j-api:jar:2.0.9:compile -- module org.slf4j [auto]")
                .unwrap();
        assert_eq!(coord.scope(), Some("compile"));

        let coord = Coordinate::parse("com.a:opt:jar:1.0:compile (optional)").unwrap();
        assert_eq!(coord.artifact(), "opt");
    }

    #[test]
    fn test_parse_two_fields_is_enough_for_identity() {
        let coord = Coordinate::parse("com.a:child").unwrap();
        assert_eq!(coord.artifact(), "child");
        assert_eq!(coord.version(), None);
    }

    #[test]
    fn test_parse_rejects_single_field() {
        assert_eq!(
            Coordinate::parse("BUILD SUCCESS"),
            Err(MalformedCoordinate::TooFewFields(1))
        );
    }

    #[test]
    fn test_parse_rejects_blank() {
        assert_eq!(
            Coordinate::parse("   "),
            Err(MalformedCoordinate::TooFewFields(0))
        );
    }

    #[test]
    fn test_parse_rejects_empty_artifact() {
        assert_eq!(
            Coordinate::parse("com.a::jar:1.0"),
            Err(MalformedCoordinate::EmptyIdentity)
        );
    }

    #[test]
    fn test_parse_rejects_too_many_fields() {
        assert_eq!(
            Coordinate::parse("a:b:c:d:e:f:g"),
            Err(MalformedCoordinate::TooManyFields(7))
        );
    }

    #[test]
    fn test_display_round_trips_parsed_fields() {
        let coord = Coordinate::parse("com.a:child1:jar:1.0:test").unwrap();
        assert_eq!(coord.to_string(), "com.a:child1:jar:1.0:test");
    }
}
