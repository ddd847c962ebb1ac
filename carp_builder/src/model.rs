use std::cmp::Ordering;
use std::str::FromStr;

/// The cardinality (count of values) an argument may receive.
///
/// Either bound may be absent, in which case the range is unbounded in that direction.
/// Inspired by argparse: <https://docs.python.org/3/library/argparse.html#nargs>
///
/// ### Example
/// ```
/// # use carp_builder as carp;
/// use carp::Range;
/// use std::cmp::Ordering;
///
/// let range = Range::at_least(2);
/// assert_eq!(range.compare(1), Ordering::Less);
/// assert_eq!(range.compare(2), Ordering::Equal);
/// assert_eq!(range.compare(200), Ordering::Equal);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    lower: Option<usize>,
    upper: Option<usize>,
}

impl Default for Range {
    /// The exact range `[1, 1]`.
    fn default() -> Self {
        Range::exactly(1)
    }
}

impl Range {
    /// `[n, n]`: precisely `n` values.
    pub fn exactly(n: usize) -> Self {
        Self {
            lower: Some(n),
            upper: Some(n),
        }
    }

    /// `[lower, upper]`: between `lower` and `upper` values (inclusive).
    ///
    /// ### Panics
    /// If `lower > upper`.
    pub fn between(lower: usize, upper: usize) -> Self {
        assert!(
            lower <= upper,
            "range lower bound {lower} exceeds upper bound {upper}"
        );
        Self {
            lower: Some(lower),
            upper: Some(upper),
        }
    }

    /// `[n, ∞)`: at least `n` values.
    pub fn at_least(n: usize) -> Self {
        Self {
            lower: Some(n),
            upper: None,
        }
    }

    /// `[n + 1, ∞)`: more than `n` values.
    pub fn more_than(n: usize) -> Self {
        Self {
            lower: Some(n + 1),
            upper: None,
        }
    }

    /// `[0, n - 1]`: fewer than `n` values.
    ///
    /// ### Panics
    /// If `n == 0`, since no count is fewer than zero.
    pub fn less_than(n: usize) -> Self {
        let upper = n
            .checked_sub(1)
            .expect("range 'less_than(0)' admits no value count");
        Self {
            lower: None,
            upper: Some(upper),
        }
    }

    /// `[0, n]`: up to `n` values.
    pub fn up_to(n: usize) -> Self {
        Self {
            lower: None,
            upper: Some(n),
        }
    }

    /// `[0, ∞)`: any number of values, including `0`.
    pub fn any() -> Self {
        Self {
            lower: None,
            upper: None,
        }
    }

    /// The lower bound, if any.
    pub fn lower(&self) -> Option<usize> {
        self.lower
    }

    /// The upper bound, if any.
    pub fn upper(&self) -> Option<usize> {
        self.upper
    }

    /// Order the value `count` against this range:
    /// * `Less` when `count` is below the lower bound,
    /// * `Greater` when `count` is above the upper bound,
    /// * `Equal` otherwise.
    pub fn compare(&self, count: usize) -> Ordering {
        match (self.lower, self.upper) {
            (Some(lower), _) if count < lower => Ordering::Less,
            (_, Some(upper)) if count > upper => Ordering::Greater,
            _ => Ordering::Equal,
        }
    }

    /// Whether one more value may be received on top of `count` values.
    pub fn accepts_more(&self, count: usize) -> bool {
        self.compare(count + 1) != Ordering::Greater
    }
}

impl From<usize> for Range {
    fn from(value: usize) -> Self {
        Range::exactly(value)
    }
}

impl From<(usize, usize)> for Range {
    fn from((lower, upper): (usize, usize)) -> Self {
        Range::between(lower, upper)
    }
}

impl std::fmt::Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let lower = self.lower.unwrap_or(0);
        match self.upper {
            Some(upper) => write!(f, "[{lower}, {upper}]"),
            None => write!(f, "[{lower}, ∞)"),
        }
    }
}

/// The value type of an argument which never holds data.
///
/// Arguments of this type are only ever *used* (ex: `--help`); offering them a value always fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NoneType;

impl FromStr for NoneType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Err(format!("none-type cannot hold '{value}'"))
    }
}

impl std::fmt::Display for NoneType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "none")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{distributions::Standard, prelude::Distribution, thread_rng, Rng};
    use rstest::rstest;

    impl Distribution<Range> for Standard {
        fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Range {
            let n: usize = rng.gen_range(0..16);

            match rng.gen_range(0..7) {
                0 => Range::exactly(n),
                1 => Range::between(n, n + rng.gen_range(0..8)),
                2 => Range::at_least(n),
                3 => Range::more_than(n),
                4 => Range::less_than(n + 1),
                5 => Range::up_to(n),
                6 => Range::any(),
                _ => unreachable!("internal error - impossible gen_range()"),
            }
        }
    }

    #[test]
    fn default_range() {
        assert_eq!(Range::default(), Range::exactly(1));
        assert_eq!(Range::default().lower(), Some(1));
        assert_eq!(Range::default().upper(), Some(1));
    }

    #[rstest]
    #[case(Range::exactly(0), Some(0), Some(0))]
    #[case(Range::exactly(3), Some(3), Some(3))]
    #[case(Range::between(1, 4), Some(1), Some(4))]
    #[case(Range::at_least(2), Some(2), None)]
    #[case(Range::more_than(2), Some(3), None)]
    #[case(Range::less_than(5), None, Some(4))]
    #[case(Range::up_to(5), None, Some(5))]
    #[case(Range::any(), None, None)]
    #[case(Range::from(2usize), Some(2), Some(2))]
    #[case(Range::from((0usize, 5usize)), Some(0), Some(5))]
    fn builders(
        #[case] range: Range,
        #[case] expected_lower: Option<usize>,
        #[case] expected_upper: Option<usize>,
    ) {
        assert_eq!(range.lower(), expected_lower);
        assert_eq!(range.upper(), expected_upper);
    }

    #[test]
    #[should_panic]
    fn between_inverted() {
        Range::between(3, 2);
    }

    #[test]
    #[should_panic]
    fn less_than_zero() {
        Range::less_than(0);
    }

    #[rstest]
    #[case(Range::exactly(0), 0, Ordering::Equal)]
    #[case(Range::exactly(0), 1, Ordering::Greater)]
    #[case(Range::exactly(2), 1, Ordering::Less)]
    #[case(Range::exactly(2), 2, Ordering::Equal)]
    #[case(Range::exactly(2), 3, Ordering::Greater)]
    #[case(Range::between(1, 3), 0, Ordering::Less)]
    #[case(Range::between(1, 3), 1, Ordering::Equal)]
    #[case(Range::between(1, 3), 3, Ordering::Equal)]
    #[case(Range::between(1, 3), 4, Ordering::Greater)]
    #[case(Range::up_to(5), 0, Ordering::Equal)]
    #[case(Range::up_to(5), 6, Ordering::Greater)]
    #[case(Range::less_than(5), 4, Ordering::Equal)]
    #[case(Range::less_than(5), 5, Ordering::Greater)]
    #[case(Range::more_than(1), 1, Ordering::Less)]
    #[case(Range::more_than(1), 2, Ordering::Equal)]
    fn compare(#[case] range: Range, #[case] count: usize, #[case] expected: Ordering) {
        assert_eq!(range.compare(count), expected);
    }

    #[test]
    fn at_least_law() {
        for _ in 0..100 {
            let k: usize = thread_rng().gen_range(0..64);
            let range = Range::at_least(k);

            for n in 0..128 {
                let expected = if n < k {
                    Ordering::Less
                } else {
                    Ordering::Equal
                };
                assert_eq!(range.compare(n), expected, "{range} against {n}");
            }
        }
    }

    #[test]
    fn up_to_law() {
        for _ in 0..100 {
            let k: usize = thread_rng().gen_range(0..64);
            let range = Range::up_to(k);

            for n in 0..128 {
                let expected = if n > k {
                    Ordering::Greater
                } else {
                    Ordering::Equal
                };
                assert_eq!(range.compare(n), expected, "{range} against {n}");
            }
        }
    }

    #[test]
    fn any_is_always_equal() {
        for n in 0..1000 {
            assert_eq!(Range::any().compare(n), Ordering::Equal);
        }
    }

    #[test]
    fn accepts_more_agrees_with_compare() {
        for _ in 0..100 {
            let range: Range = thread_rng().gen();

            for count in 0..32 {
                assert_eq!(
                    range.accepts_more(count),
                    range.compare(count + 1) != Ordering::Greater,
                    "{range} against {count}"
                );
            }
        }
    }

    #[rstest]
    #[case(Range::exactly(1), "[1, 1]")]
    #[case(Range::at_least(2), "[2, ∞)")]
    #[case(Range::up_to(5), "[0, 5]")]
    #[case(Range::any(), "[0, ∞)")]
    fn display(#[case] range: Range, #[case] expected: &str) {
        assert_eq!(range.to_string(), expected);
    }

    #[test]
    fn none_type() {
        assert!(NoneType::from_str("").is_err());
        assert!(NoneType::from_str("abc").is_err());
        assert_eq!(NoneType.to_string(), "none");
    }
}
