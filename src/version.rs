use std::cmp::Ordering;
use std::fmt;

/// Value a lower component is reset to when a pre-release borrows from the
/// component above it. `1.0.0-pre` is treated as `0.999.999`.
const BORROW_CEILING: u64 = 999;

/// A dotted version as reported by the managed binary.
///
/// Only the numeric triple and the presence of a fourth token are kept. The
/// fourth token marks a pre-release; its text is never compared, so
/// `1.0.0-pre1` and `1.0.0-pre2` are the same version here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub prerelease: bool,
    known: bool,
}

impl Version {
    /// Nothing installed, or nothing we could read a version from.
    pub const UNKNOWN: Version = Version {
        major: 0,
        minor: 0,
        patch: 0,
        prerelease: false,
        known: false,
    };

    /// Parses `raw` leniently. Never fails.
    ///
    /// Of the first three tokens, non-numeric ones count as 0 and numbers too
    /// large for `u64` saturate. Only input where none of them is numeric
    /// (empty output, an error message) yields [`Version::UNKNOWN`].
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        let raw = raw.strip_prefix('v').unwrap_or(raw);

        let tokens: Vec<&str> = raw
            .split(['.', '-', '+'])
            .filter(|token| !token.is_empty())
            .collect();

        let components: Vec<Option<u64>> = (0..3)
            .map(|index| tokens.get(index).and_then(|t| numeric(t)))
            .collect();

        if components.iter().all(Option::is_none) {
            return Self::UNKNOWN;
        }

        Self {
            major: components[0].unwrap_or(0),
            minor: components[1].unwrap_or(0),
            patch: components[2].unwrap_or(0),
            prerelease: tokens.len() > 3,
            known: true,
        }
    }

    pub fn is_unknown(&self) -> bool {
        !self.known
    }

    fn triple(&self) -> (u64, u64, u64) {
        (self.major, self.minor, self.patch)
    }

    /// The triple one patch level below this one, borrowing across minor and
    /// major. `None` for `0.0.0`, which has nothing to borrow from.
    fn step_back(&self) -> Option<(u64, u64, u64)> {
        match self.triple() {
            (major, minor, patch) if patch > 0 => Some((major, minor, patch - 1)),
            (major, minor, _) if minor > 0 => Some((major, minor - 1, BORROW_CEILING)),
            (major, _, _) if major > 0 => Some((major - 1, BORROW_CEILING, BORROW_CEILING)),
            _ => None,
        }
    }
}

fn numeric(token: &str) -> Option<u64> {
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(token.parse().unwrap_or(u64::MAX))
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unknown() {
            return write!(f, "(none)");
        }
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if self.prerelease {
            write!(f, "-pre")?;
        }
        Ok(())
    }
}

/// Decides whether `candidate` should replace `installed`.
///
/// This is deliberately not semver precedence:
/// - anything replaces an unknown install;
/// - a pre-release never replaces a stable install;
/// - a pre-release counts as one patch level behind its own number, so
///   `0.5.0-pre` sits between `0.4.999` and `0.5.0`;
/// - an installed `0.0.0-pre` is always replaced, a candidate `0.0.0-pre`
///   never is.
pub fn needs_update(installed: &Version, candidate: &Version) -> bool {
    if installed.is_unknown() {
        return true;
    }

    if candidate.prerelease && !installed.prerelease {
        return false;
    }

    let old = if installed.prerelease {
        match installed.step_back() {
            Some(triple) => triple,
            None => return true,
        }
    } else {
        installed.triple()
    };

    let new = if candidate.prerelease {
        match candidate.step_back() {
            Some(triple) => triple,
            None => return false,
        }
    } else {
        candidate.triple()
    };

    match old.cmp(&new) {
        Ordering::Less => true,
        Ordering::Greater => false,
        Ordering::Equal => installed.prerelease && !candidate.prerelease,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn update(installed: &str, candidate: &str) -> bool {
        needs_update(&Version::parse(installed), &Version::parse(candidate))
    }

    #[test]
    fn parses_plain_and_prefixed_versions() {
        let v = Version::parse("v1.2.3");
        assert_eq!((v.major, v.minor, v.patch), (1, 2, 3));
        assert!(!v.prerelease);
        assert!(!v.is_unknown());

        let v = Version::parse("0.5.3-pre+dirty");
        assert_eq!((v.major, v.minor, v.patch), (0, 5, 3));
        assert!(v.prerelease);
    }

    #[test]
    fn missing_components_default_to_zero() {
        let v = Version::parse("2");
        assert_eq!((v.major, v.minor, v.patch), (2, 0, 0));
        assert!(!v.prerelease);
    }

    #[test]
    fn empty_tokens_are_dropped() {
        let v = Version::parse("1..2.3.");
        assert_eq!((v.major, v.minor, v.patch), (1, 2, 3));
        assert!(!v.prerelease);
    }

    #[test]
    fn unreadable_input_is_unknown() {
        assert!(Version::parse("").is_unknown());
        assert!(Version::parse("   ").is_unknown());
        assert!(Version::parse("v").is_unknown());
        assert!(Version::parse("serviceman:").is_unknown());
        assert_eq!(Version::parse("...").to_string(), "(none)");
    }

    #[test]
    fn any_numeric_component_makes_a_version() {
        let v = Version::parse("x.5.0");
        assert!(!v.is_unknown());
        assert_eq!((v.major, v.minor, v.patch), (0, 5, 0));
        assert!(!update("x.5.0", "0.5.0"));
    }

    #[test]
    fn oversized_components_saturate() {
        let v = Version::parse("18446744073709551616.0.0");
        assert!(!v.is_unknown());
        assert_eq!(v.major, u64::MAX);
        assert!(!update("18446744073709551616.0.0", "1.0.0"));
    }

    #[test]
    fn unknown_install_always_updates() {
        assert!(update("", "0.5.1"));
        assert!(update("", "0.5.1-pre1"));
        assert!(update("", "0.0.0-pre"));
        assert!(needs_update(&Version::UNKNOWN, &Version::UNKNOWN));
    }

    #[test]
    fn same_version_is_not_reinstalled() {
        assert!(!update("0.5.0", "0.5.0"));
        assert!(!update("v0.5.0", "0.5.0"));
        assert!(!update("0.5.0-pre1", "0.5.0-pre1"));
    }

    #[test]
    fn patch_ordering_is_monotonic() {
        assert!(update("0.5.0", "0.5.1"));
        assert!(!update("0.5.1", "0.5.0"));
        assert!(update("0.9.0", "0.10.0"));
        assert!(update("1.999.999", "2.0.0"));
    }

    #[test]
    fn stable_is_never_replaced_by_prerelease() {
        assert!(!update("0.5.0", "0.5.0-pre1"));
        assert!(!update("0.5.0", "0.6.0-pre1"));
        assert!(!update("0.5.0", "9.0.0-pre1"));
    }

    #[test]
    fn prerelease_is_behind_its_stable_release() {
        assert!(update("0.5.0-pre1", "0.5.0"));
        assert!(!update("0.5.0-pre1", "0.4.9"));
        assert!(update("0.5.1-pre1", "0.5.0"));
    }

    #[test]
    fn prerelease_ordering_crosses_boundaries() {
        assert!(update("0.4.999-pre1", "0.5.0-pre1"));
        assert!(!update("0.5.0-pre1", "0.4.999-pre1"));
        assert!(update("0.9.999-pre1", "1.0.0-pre1"));
    }

    #[test]
    fn prerelease_label_is_not_compared() {
        assert!(!update("0.5.0-pre1", "0.5.0-pre2"));
        assert!(!update("0.5.0-pre2", "0.5.0-pre1"));
    }

    #[test]
    fn zero_prerelease_is_asymmetric() {
        assert!(update("0.0.0-pre", "0.0.0-pre"));
        assert!(update("0.0.0-pre", "0.0.1"));
        assert!(!update("0.0.1-pre", "0.0.0-pre"));
    }

    #[test]
    fn step_back_borrows_with_ceiling() {
        assert_eq!(Version::parse("1.2.3").step_back(), Some((1, 2, 2)));
        assert_eq!(Version::parse("1.2.0").step_back(), Some((1, 1, 999)));
        assert_eq!(Version::parse("1.0.0").step_back(), Some((0, 999, 999)));
        assert_eq!(Version::parse("0.0.0").step_back(), None);
    }
}
