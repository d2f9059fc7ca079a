//! Transforming the values of a [`Dict`] while keeping its keys.

use super::Dict;

/// Transforms every value of a dictionary, keeping keys and their order.
///
/// `transformation` is called exactly once per entry, in enumeration order.
/// The input is only borrowed and is never modified. If `transformation`
/// panics, the partially built result is dropped during unwinding and never
/// reaches the caller.
///
/// # Complexity
///
/// `O(n)` where `n` is the number of entries.
///
/// # Examples
///
/// ```rust
/// use plainfn::object::{Dict, map_values};
///
/// let prices = Dict::from([("a", 1), ("b", 2)]);
/// let scaled = map_values(&prices, |price| price * 10);
///
/// assert_eq!(scaled, Dict::from([("a", 10), ("b", 20)]));
/// assert_eq!(prices, Dict::from([("a", 1), ("b", 2)]));
/// ```
pub fn map_values<A, B, F>(object: &Dict<A>, mut transformation: F) -> Dict<B>
where
    F: FnMut(&A) -> B,
{
    let mut result = Dict::with_capacity(object.len());
    for (key, value) in object {
        result.insert(key.clone(), transformation(value));
    }
    result
}

/// Transforms every value with a fallible function.
///
/// Stops at the first `Err`: the entries transformed so far are discarded,
/// later entries are never visited, and the error is returned as is.
///
/// # Errors
///
/// Returns the first error produced by `transformation`.
///
/// # Examples
///
/// ```rust
/// use plainfn::object::{Dict, try_map_values};
///
/// let raw = Dict::from([("width", "640"), ("height", "480")]);
/// let parsed = try_map_values(&raw, |text| text.parse::<u32>());
/// assert_eq!(parsed, Ok(Dict::from([("width", 640), ("height", 480)])));
///
/// let broken = Dict::from([("width", "640"), ("height", "tall")]);
/// assert!(try_map_values(&broken, |text| text.parse::<u32>()).is_err());
/// ```
pub fn try_map_values<A, B, E, F>(object: &Dict<A>, mut transformation: F) -> Result<Dict<B>, E>
where
    F: FnMut(&A) -> Result<B, E>,
{
    let mut result = Dict::with_capacity(object.len());
    for (key, value) in object {
        result.insert(key.clone(), transformation(value)?);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::keys;
    use rstest::{fixture, rstest};

    #[fixture]
    fn sample() -> Dict<i32> {
        Dict::from([("a", 1), ("b", 2), ("c", 3)])
    }

    #[rstest]
    fn map_values_transforms_each_value(sample: Dict<i32>) {
        let scaled = map_values(&sample, |value| value * 10);
        assert_eq!(scaled, Dict::from([("a", 10), ("b", 20), ("c", 30)]));
    }

    #[rstest]
    fn map_values_keeps_key_order(sample: Dict<i32>) {
        let labelled = map_values(&sample, |value| format!("#{value}"));
        assert_eq!(keys(&labelled), keys(&sample));
        assert_eq!(format!("{labelled}"), "{a: #1, b: #2, c: #3}");
    }

    #[rstest]
    fn map_values_calls_transformation_once_per_key_in_order(sample: Dict<i32>) {
        let mut seen = Vec::new();
        let _ = map_values(&sample, |value| seen.push(*value));
        assert_eq!(seen, vec![1, 2, 3]);
    }

    #[rstest]
    fn map_values_on_empty_dict_never_calls_transformation() {
        let empty: Dict<i32> = Dict::new();
        let mut calls = 0;
        let mapped: Dict<i32> = map_values(&empty, |value| {
            calls += 1;
            *value
        });
        assert!(mapped.is_empty());
        assert_eq!(calls, 0);
    }

    #[rstest]
    fn try_map_values_succeeds_when_every_value_does(sample: Dict<i32>) {
        let halved: Result<Dict<i32>, String> = try_map_values(&sample, |value| Ok(value * 2));
        assert_eq!(halved, Ok(Dict::from([("a", 2), ("b", 4), ("c", 6)])));
    }

    #[rstest]
    fn try_map_values_stops_at_first_error(sample: Dict<i32>) {
        let mut visited = Vec::new();
        let outcome: Result<Dict<i32>, String> = try_map_values(&sample, |value| {
            visited.push(*value);
            if *value == 2 {
                Err(format!("rejected {value}"))
            } else {
                Ok(*value)
            }
        });

        assert_eq!(outcome, Err(String::from("rejected 2")));
        assert_eq!(visited, vec![1, 2]);
    }

    #[rstest]
    fn map_values_panic_unwinds_to_caller(sample: Dict<i32>) {
        let outcome = std::panic::catch_unwind(|| {
            map_values(&sample, |value| {
                assert!(*value < 3, "value too large");
                *value
            })
        });
        assert!(outcome.is_err());
        assert_eq!(sample, Dict::from([("a", 1), ("b", 2), ("c", 3)]));
    }
}
