use crate::parser::CLAIM_SEPARATOR;

/// How the results of several permission checks are combined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum CheckMode {
    /// Every permission must be granted (AND)
    #[default]
    All,
    /// At least one permission must be granted (OR)
    Any,
}

/// Input accepted wherever a claim or permission list is expected.
///
/// A single string is a space separated list (`"store:view store:edit:1234"`);
/// slices, arrays and vectors are taken element by element without further
/// splitting.
pub trait IntoClaims {
    /// Normalize into an ordered list of claim strings
    fn into_claims(self) -> Vec<String>;
}

impl IntoClaims for &str {
    fn into_claims(self) -> Vec<String> {
        self.split(CLAIM_SEPARATOR).map(str::to_string).collect()
    }
}

impl IntoClaims for String {
    fn into_claims(self) -> Vec<String> {
        self.as_str().into_claims()
    }
}

impl IntoClaims for &String {
    fn into_claims(self) -> Vec<String> {
        self.as_str().into_claims()
    }
}

impl<S: AsRef<str>> IntoClaims for Vec<S> {
    fn into_claims(self) -> Vec<String> {
        self.iter().map(|s| s.as_ref().to_string()).collect()
    }
}

impl<S: AsRef<str>> IntoClaims for &Vec<S> {
    fn into_claims(self) -> Vec<String> {
        self.as_slice().into_claims()
    }
}

impl<S: AsRef<str>> IntoClaims for &[S] {
    fn into_claims(self) -> Vec<String> {
        self.iter().map(|s| s.as_ref().to_string()).collect()
    }
}

impl<S: AsRef<str>, const N: usize> IntoClaims for [S; N] {
    fn into_claims(self) -> Vec<String> {
        self.iter().map(|s| s.as_ref().to_string()).collect()
    }
}

impl<S: AsRef<str>, const N: usize> IntoClaims for &[S; N] {
    fn into_claims(self) -> Vec<String> {
        self.as_slice().into_claims()
    }
}
