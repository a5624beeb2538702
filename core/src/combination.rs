use std::fmt;

/// A finished combination: distinct digits in strictly increasing order.
///
/// Only the enumerator builds these, so every value upholds that ordering.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Combination(Vec<u8>);

impl Combination {
    pub(crate) fn from_path(path: &[u8]) -> Self {
        Self(path.to_vec())
    }

    pub fn digits(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn sum(&self) -> u64 {
        self.0.iter().map(|&d| u64::from(d)).sum()
    }

    pub fn into_digits(self) -> Vec<u8> {
        self.0
    }
}

/// Formats as `[1 2 3]`.
impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, digit) in self.0.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{digit}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Combination::from_path(&[1, 2, 3]).to_string(), "[1 2 3]");
        assert_eq!(Combination::from_path(&[9]).to_string(), "[9]");
        assert_eq!(Combination::from_path(&[]).to_string(), "[]");
    }

    #[test]
    fn test_sum_and_len() {
        let combination = Combination::from_path(&[2, 7, 9]);
        assert_eq!(combination.len(), 3);
        assert_eq!(combination.sum(), 18);
        assert_eq!(combination.into_digits(), vec![2, 7, 9]);
    }

    #[test]
    fn test_copy_is_detached_from_path() {
        let mut path: Vec<u8> = vec![1, 2];
        let combination = Combination::from_path(&path);
        path.push(3);
        path[0] = 4;
        assert_eq!(combination.digits(), &[1, 2]);
    }
}
