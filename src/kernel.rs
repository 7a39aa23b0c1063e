use std::fmt;

use serde::{Deserialize, Serialize};

/// Kernel release normalized to four numeric components.
///
/// The all-zero version is the sentinel for "unparsable": callers compare
/// against [`KernelVersion::ZERO`] instead of handling an error.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct KernelVersion {
    pub major: u32,
    pub minor: u32,
    pub build: u32,
    pub revision: u32,
}

impl KernelVersion {
    pub const ZERO: KernelVersion = KernelVersion::new(0, 0, 0, 0);

    pub const fn new(major: u32, minor: u32, build: u32, revision: u32) -> Self {
        KernelVersion { major, minor, build, revision }
    }

    /// Parses a raw kernel release string, e.g. `"5.13.0.194-generic x86_64"`.
    ///
    /// Only the substring before the first space is considered. A single
    /// left-to-right scan accepts digits and dots, collapses consecutive
    /// dots, and stops at the first other character. At most four numeric
    /// components are kept; missing or unparsable trailing components are 0.
    ///
    /// Never fails: any malformed input degrades to [`KernelVersion::ZERO`].
    pub fn parse(raw: &str) -> KernelVersion {
        let head = raw.trim().split(' ').next().unwrap_or("");

        let mut buf = String::new();
        let mut dots = 0;
        let mut prev_dot = false;
        for c in head.chars() {
            if c.is_ascii_digit() {
                buf.push(c);
                prev_dot = false;
            } else if c == '.' {
                // collapse ".."
                if prev_dot {
                    continue;
                }
                dots += 1;
                // a 5th group would follow, stop here
                if dots == 5 {
                    break;
                }
                buf.push('.');
                prev_dot = true;
            } else {
                break;
            }
        }

        let mut parts = [0u32; 4];
        for (slot, segment) in parts.iter_mut().zip(buf.split('.')) {
            match segment.parse::<u32>() {
                Ok(n) => *slot = n,
                // this component and everything after it stay zero
                Err(_) => break,
            }
        }

        let [major, minor, build, revision] = parts;
        KernelVersion { major, minor, build, revision }
    }
}

impl fmt::Display for KernelVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}.{}", self.major, self.minor, self.build, self.revision)
    }
}

#[cfg(test)]
mod tests {
    use super::KernelVersion;

    #[test]
    fn test_parse_full_version() {
        let v = KernelVersion::parse("5.13.0.194 foo");
        assert_eq!(v, KernelVersion::new(5, 13, 0, 194));
    }

    #[test]
    fn test_parse_short_version() {
        assert_eq!(KernelVersion::parse("5.13"), KernelVersion::new(5, 13, 0, 0));
        assert_eq!(KernelVersion::parse("5"), KernelVersion::new(5, 0, 0, 0));
    }

    #[test]
    fn test_parse_excess_groups_discarded() {
        let v = KernelVersion::parse("5.13.0.194.99");
        assert_eq!(v, KernelVersion::new(5, 13, 0, 194));
    }

    #[test]
    fn test_parse_collapses_double_dots() {
        assert_eq!(KernelVersion::parse("5..13"), KernelVersion::new(5, 13, 0, 0));
        assert_eq!(KernelVersion::parse("5...13"), KernelVersion::new(5, 13, 0, 0));
    }

    #[test]
    fn test_parse_stops_at_suffix() {
        let v = KernelVersion::parse("5.13.0.194-generic x86_64");
        assert_eq!(v, KernelVersion::new(5, 13, 0, 194));
        let v = KernelVersion::parse("5.13.0.194-generic");
        assert_eq!(v, KernelVersion::new(5, 13, 0, 194));
        let v = KernelVersion::parse("5.15.167.4-microsoft-standard-WSL2");
        assert_eq!(v, KernelVersion::new(5, 15, 167, 4));
    }

    #[test]
    fn test_parse_ignores_text_after_space() {
        let v = KernelVersion::parse("  5.13.0.0-generic x86_64 extra ");
        assert_eq!(v, KernelVersion::new(5, 13, 0, 0));
    }

    #[test]
    fn test_parse_unparsable_is_zero() {
        assert_eq!(KernelVersion::parse(""), KernelVersion::ZERO);
        assert_eq!(KernelVersion::parse("abc"), KernelVersion::ZERO);
        assert_eq!(KernelVersion::parse("   "), KernelVersion::ZERO);
        assert_eq!(KernelVersion::parse(".5.13"), KernelVersion::ZERO);
    }

    #[test]
    fn test_parse_overflow_truncates_remainder() {
        // 2^32 overflows a component, so it and the rest stay zero
        let v = KernelVersion::parse("5.4294967296.3.4");
        assert_eq!(v, KernelVersion::new(5, 0, 0, 0));
    }

    #[test]
    fn test_parse_trailing_dot() {
        assert_eq!(KernelVersion::parse("5.13."), KernelVersion::new(5, 13, 0, 0));
    }

    #[test]
    fn test_parse_is_idempotent() {
        let v = KernelVersion::parse("5.13.0.194");
        assert_eq!(KernelVersion::parse(&v.to_string()), v);
        let zero = KernelVersion::parse("not-a-version");
        assert_eq!(KernelVersion::parse(&zero.to_string()), zero);
    }

    #[test]
    fn test_ordering() {
        assert!(KernelVersion::new(5, 13, 0, 194) > KernelVersion::new(5, 13, 0, 0));
        assert!(KernelVersion::new(10, 0, 10240, 0) > KernelVersion::new(6, 3, 0, 0));
        assert!(KernelVersion::new(5, 0, 0, 0) > KernelVersion::new(4, 90, 0, 0));
    }

    #[test]
    fn test_display() {
        assert_eq!(KernelVersion::new(5, 13, 0, 194).to_string(), "5.13.0.194");
        assert_eq!(KernelVersion::ZERO.to_string(), "0.0.0.0");
    }
}
