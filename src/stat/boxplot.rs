//! Boxplot statistic: five-number summaries per `(x, color)` group.

use crate::aes::{Aesthetics, Channel, ChannelValue};
use crate::error::{Error, Result};
use std::collections::HashMap;

/// Group key over the optional `x` and `color` channels. An absent channel
/// contributes the `None` sentinel so every observation lands in exactly
/// one group; `x` is keyed by bit pattern so the key stays hashable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct GroupKey {
    x_bits: Option<u32>,
    color: Option<ChannelValue>,
}

/// Group `y` by `(x, color)` with shorter channels cycled, then compute
/// hinges, fences, and outliers per group. The per-observation `x` and
/// `color` channels are rewritten to per-group key values.
///
/// Every observation of a group is retained, including the one that
/// creates the group.
pub(crate) fn apply(aes: &mut Aesthetics) -> Result<()> {
    let y = aes
        .y
        .as_deref()
        .ok_or(Error::MissingAesthetic { channel: Channel::Y })?;
    let x = aes.x.as_deref().filter(|v| !v.is_empty());
    let color = aes.color.as_deref().filter(|v| !v.is_empty());

    // Groups keep first-insertion order so output is deterministic
    let mut order: Vec<GroupKey> = Vec::new();
    let mut groups: HashMap<GroupKey, Vec<f32>> = HashMap::new();
    for (i, &value) in y.iter().enumerate() {
        if !value.is_finite() {
            continue;
        }
        let key = GroupKey {
            x_bits: x.map(|xs| xs[i % xs.len()].to_bits()),
            color: color.map(|cs| cs[i % cs.len()].clone()),
        };
        groups
            .entry(key.clone())
            .or_insert_with(|| {
                order.push(key);
                Vec::new()
            })
            .push(value);
    }
    if order.is_empty() {
        return Err(Error::EmptyData);
    }

    let n = order.len();
    let mut middle = Vec::with_capacity(n);
    let mut lower_hinge = Vec::with_capacity(n);
    let mut upper_hinge = Vec::with_capacity(n);
    let mut lower_fence = Vec::with_capacity(n);
    let mut upper_fence = Vec::with_capacity(n);
    let mut outliers = Vec::with_capacity(n);
    for key in &order {
        let mut sorted = groups[key].clone();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let q1 = percentile(&sorted, 25.0);
        let q2 = percentile(&sorted, 50.0);
        let q3 = percentile(&sorted, 75.0);
        let iqr = q3 - q1;
        let lo = 1.5f32.mul_add(-iqr, q1);
        let hi = 1.5f32.mul_add(iqr, q3);

        lower_hinge.push(q1);
        middle.push(q2);
        upper_hinge.push(q3);
        lower_fence.push(lo);
        upper_fence.push(hi);
        outliers.push(sorted.iter().copied().filter(|&v| v < lo || v > hi).collect());
    }

    // Rewrite grouping channels to one entry per group
    if x.is_some() {
        aes.x = Some(
            order
                .iter()
                .map(|k| f32::from_bits(k.x_bits.unwrap_or(0)))
                .collect(),
        );
    }
    if color.is_some() {
        aes.color = Some(
            order
                .iter()
                .filter_map(|k| k.color.clone())
                .collect(),
        );
    }
    aes.middle = Some(middle);
    aes.lower_hinge = Some(lower_hinge);
    aes.upper_hinge = Some(upper_hinge);
    aes.lower_fence = Some(lower_fence);
    aes.upper_fence = Some(upper_fence);
    aes.outliers = Some(outliers);
    Ok(())
}

/// Percentile over sorted values using linear interpolation.
fn percentile(sorted: &[f32], p: f32) -> f32 {
    if sorted.is_empty() {
        return 0.0;
    }
    if sorted.len() == 1 {
        return sorted[0];
    }

    let k = (p / 100.0) * (sorted.len() - 1) as f32;
    let f = k.floor() as usize;
    let c = k.ceil() as usize;

    if f == c || c >= sorted.len() {
        sorted[f.min(sorted.len() - 1)]
    } else {
        let d = k - f as f32;
        sorted[f] * (1.0 - d) + sorted[c] * d
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_single_group_reference_values() {
        let mut aes = Aesthetics::new().with_y((1..=10).map(|v| v as f32).collect());
        apply(&mut aes).expect("boxplot succeeds");

        assert_relative_eq!(aes.lower_hinge.expect("lower_hinge")[0], 3.25);
        assert_relative_eq!(aes.middle.expect("middle")[0], 5.5);
        assert_relative_eq!(aes.upper_hinge.expect("upper_hinge")[0], 7.75);
        assert_relative_eq!(aes.lower_fence.expect("lower_fence")[0], -3.5);
        assert_relative_eq!(aes.upper_fence.expect("upper_fence")[0], 14.5);
        assert!(aes.outliers.expect("outliers")[0].is_empty());
    }

    #[test]
    fn test_hinge_ordering_invariant() {
        let mut aes = Aesthetics::new().with_y(vec![7.0, 1.0, 4.0, 4.0, 9.0, 2.0, 8.0]);
        apply(&mut aes).expect("boxplot succeeds");
        let q1 = aes.lower_hinge.expect("lower_hinge")[0];
        let q2 = aes.middle.expect("middle")[0];
        let q3 = aes.upper_hinge.expect("upper_hinge")[0];
        assert!(q1 <= q2 && q2 <= q3);
    }

    #[test]
    fn test_outlier_detection() {
        let mut y: Vec<f32> = (1..=10).map(|v| v as f32).collect();
        y.push(100.0);
        let mut aes = Aesthetics::new().with_y(y);
        apply(&mut aes).expect("boxplot succeeds");
        let outliers = aes.outliers.expect("outliers");
        assert_eq!(outliers[0], vec![100.0]);
    }

    #[test]
    fn test_groups_by_x() {
        let mut aes = Aesthetics::new()
            .with_x(vec![0.0, 1.0]) // cycled over the 8 observations
            .with_y(vec![1.0, 10.0, 2.0, 20.0, 3.0, 30.0, 4.0, 40.0]);
        apply(&mut aes).expect("boxplot succeeds");

        let x = aes.x.expect("x rewritten to group keys");
        assert_eq!(x, vec![0.0, 1.0]);
        let middle = aes.middle.expect("middle");
        assert_relative_eq!(middle[0], 2.5); // median of 1,2,3,4
        assert_relative_eq!(middle[1], 25.0); // median of 10,20,30,40
    }

    #[test]
    fn test_groups_by_color() {
        let mut aes = Aesthetics::new()
            .with_color(vec!["a".into(), "b".into()])
            .with_y(vec![1.0, 10.0, 3.0, 30.0]);
        apply(&mut aes).expect("boxplot succeeds");

        let color = aes.color.expect("color rewritten to group keys");
        assert_eq!(color, vec![ChannelValue::from("a"), ChannelValue::from("b")]);
        let middle = aes.middle.expect("middle");
        assert_relative_eq!(middle[0], 2.0);
        assert_relative_eq!(middle[1], 20.0);
    }

    #[test]
    fn test_first_observation_retained() {
        // A group of one observation must still summarize that observation
        let mut aes = Aesthetics::new().with_x(vec![0.0, 1.0]).with_y(vec![5.0, 7.0]);
        apply(&mut aes).expect("boxplot succeeds");
        let middle = aes.middle.expect("middle");
        assert_relative_eq!(middle[0], 5.0);
        assert_relative_eq!(middle[1], 7.0);
    }

    #[test]
    fn test_missing_y_errors() {
        let mut aes = Aesthetics::new().with_x(vec![1.0]);
        assert_eq!(
            apply(&mut aes),
            Err(Error::MissingAesthetic { channel: Channel::Y })
        );
    }

    #[test]
    fn test_only_y_yields_one_group() {
        let mut aes = Aesthetics::new().with_y(vec![1.0, 2.0, 3.0]);
        apply(&mut aes).expect("boxplot succeeds");
        assert_eq!(aes.middle.as_ref().map(Vec::len), Some(1));
        assert!(aes.x.is_none());
        assert!(aes.color.is_none());
    }

    #[test]
    fn test_fences_may_exceed_data_range() {
        let mut aes = Aesthetics::new().with_y((1..=10).map(|v| v as f32).collect());
        apply(&mut aes).expect("boxplot succeeds");
        assert!(aes.lower_fence.expect("lower_fence")[0] < 1.0);
        assert!(aes.upper_fence.expect("upper_fence")[0] > 10.0);
    }

    #[test]
    fn test_non_finite_y_skipped() {
        let mut aes = Aesthetics::new().with_y(vec![f32::NAN, 1.0, 2.0, 3.0]);
        apply(&mut aes).expect("boxplot succeeds");
        assert_relative_eq!(aes.middle.expect("middle")[0], 2.0);
    }

    #[test]
    fn test_percentile_linear_interpolation() {
        let sorted: Vec<f32> = (1..=10).map(|v| v as f32).collect();
        assert_relative_eq!(percentile(&sorted, 25.0), 3.25);
        assert_relative_eq!(percentile(&sorted, 50.0), 5.5);
        assert_relative_eq!(percentile(&sorted, 75.0), 7.75);
        assert_relative_eq!(percentile(&sorted, 0.0), 1.0);
        assert_relative_eq!(percentile(&sorted, 100.0), 10.0);
    }
}
