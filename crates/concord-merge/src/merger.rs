use tracing::debug;

use concord_types::{MeasurementModel, MergedEstimate, Method};

use crate::config::MergeConfig;
use crate::error::{MergeError, MergeResult};

/// Separation of two measurements in units of their combined uncertainty.
///
/// Symmetric in its arguments and zero when the central values coincide.
pub fn epistemic_distance(a: &MeasurementModel, b: &MeasurementModel) -> f64 {
    (a.value() - b.value()).abs() / a.combined_sigma(b)
}

/// Pairwise merger of measurements with heterogeneous uncertainty and
/// acquisition method.
///
/// Holds only its configuration, so it is `Copy` and can be shared across
/// threads freely.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EpistemicMerger {
    config: MergeConfig,
}

impl EpistemicMerger {
    /// Create a merger from a configuration the caller already trusts.
    ///
    /// Use [`Self::try_new`] for configuration that came from outside.
    pub fn new(config: MergeConfig) -> Self {
        Self { config }
    }

    /// Create a merger after validating the configuration.
    pub fn try_new(config: MergeConfig) -> MergeResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration.
    pub fn config(&self) -> &MergeConfig {
        &self.config
    }

    /// Merge two measurements into a single reconciled estimate.
    ///
    /// The central value is the inverse-variance weighted mean, moved toward
    /// the `direct` input by `bias_fraction` of the remaining gap when the
    /// methods differ. The uncertainty is the weighted-mean uncertainty
    /// scaled by `max(1, delta_T / inflation_threshold)`.
    ///
    /// `delta_T` is symmetric in `(a, b)`; `h0_merged` is too unless the
    /// bias correction applies.
    ///
    /// # Errors
    ///
    /// [`MergeError::DegenerateInput`] if either input has a non-positive or
    /// non-finite sigma.
    pub fn merge(
        &self,
        a: &MeasurementModel,
        b: &MeasurementModel,
    ) -> MergeResult<MergedEstimate> {
        ensure_usable(a.name(), a.sigma())?;
        ensure_usable(b.name(), b.sigma())?;

        let combined = a.combined_sigma(b);
        let delta_t = (a.value() - b.value()).abs() / combined;

        // Normalized inverse-variance weights: w_a / (w_a + w_b) = sb² / (sa² + sb²).
        let w_a = (b.sigma() / combined).powi(2);
        let w_b = (a.sigma() / combined).powi(2);
        let weighted_mean = (w_a * a.value() + w_b * b.value()) / (w_a + w_b);
        let h0_merged = self.correct_method_bias(weighted_mean, a, b);

        // sqrt(1 / (1/sa² + 1/sb²)) = sa·sb / combined, without squaring.
        let (lo, hi) = if a.sigma() <= b.sigma() {
            (a.sigma(), b.sigma())
        } else {
            (b.sigma(), a.sigma())
        };
        let naive_sigma = lo * (hi / combined);
        let inflation = self.inflation_factor(delta_t);
        let u_merged = inflation * naive_sigma;

        debug!(
            first = a.name(),
            second = b.name(),
            delta_t,
            weighted_mean,
            h0_merged,
            naive_sigma,
            inflation,
            u_merged,
            "merged measurement pair"
        );

        Ok(MergedEstimate {
            h0_merged,
            u_merged,
            delta_t,
            naive_sigma,
            inflation,
        })
    }

    /// Birge-ratio-style scale factor. Never below 1.
    pub fn inflation_factor(&self, delta_t: f64) -> f64 {
        (delta_t / self.config.inflation_threshold).max(1.0)
    }

    fn correct_method_bias(
        &self,
        weighted_mean: f64,
        a: &MeasurementModel,
        b: &MeasurementModel,
    ) -> f64 {
        let direct = match (a.method(), b.method()) {
            (Method::Direct, Method::Indirect) => a,
            (Method::Indirect, Method::Direct) => b,
            _ => return weighted_mean,
        };
        weighted_mean + self.config.bias_fraction * (direct.value() - weighted_mean)
    }
}

fn ensure_usable(name: &str, sigma: f64) -> MergeResult<()> {
    if sigma.is_finite() && sigma > 0.0 {
        Ok(())
    } else {
        Err(MergeError::DegenerateInput {
            name: name.to_string(),
            sigma,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn planck() -> MeasurementModel {
        MeasurementModel::create("Planck 2018 CMB", 67.4, 0.5, 1090.0, 0.315, "indirect").unwrap()
    }

    fn shoes() -> MeasurementModel {
        MeasurementModel::create("SH0ES Distance Ladder", 73.47, 0.14, 0.01, 0.300, "direct")
            .unwrap()
    }

    fn measurement(value: f64, sigma: f64, method: Method) -> MeasurementModel {
        MeasurementModel::new("m", value, sigma, 0.1, 0.3, method).unwrap()
    }

    fn naive(a: &MeasurementModel, b: &MeasurementModel) -> f64 {
        let (sa, sb) = (a.sigma(), b.sigma());
        sa.min(sb) * (sa.max(sb) / sa.hypot(sb))
    }

    // -----------------------------------------------------------------------
    // Published pair
    // -----------------------------------------------------------------------

    #[test]
    fn hubble_pair_distance() {
        let merged = EpistemicMerger::default().merge(&planck(), &shoes()).unwrap();
        let expected = 6.07 / (0.5f64 * 0.5 + 0.14 * 0.14).sqrt();
        assert!((merged.delta_t - expected).abs() < 1e-9);
        assert!((merged.delta_t - 11.6904).abs() < 1e-3);
    }

    #[test]
    fn hubble_pair_is_inflated() {
        let merged = EpistemicMerger::default().merge(&planck(), &shoes()).unwrap();
        assert!((merged.naive_sigma - 0.13481).abs() < 1e-4);
        assert!((merged.inflation - merged.delta_t).abs() < 1e-12);
        assert!((merged.u_merged - 1.5760).abs() < 1e-3);
        assert!(merged.u_merged > 10.0 * merged.naive_sigma);
    }

    #[test]
    fn hubble_pair_leans_toward_direct() {
        let merged = EpistemicMerger::default().merge(&planck(), &shoes()).unwrap();
        let unbiased = EpistemicMerger::new(MergeConfig::unbiased())
            .merge(&planck(), &shoes())
            .unwrap();
        assert!((unbiased.h0_merged - 73.0287).abs() < 1e-3);
        assert!((merged.h0_merged - 73.2494).abs() < 1e-3);
        assert!(merged.h0_merged > unbiased.h0_merged);
        assert!(merged.h0_merged < shoes().value());
    }

    // -----------------------------------------------------------------------
    // Bias correction
    // -----------------------------------------------------------------------

    #[test]
    fn same_method_is_plain_weighted_mean() {
        let a = measurement(10.0, 1.0, Method::Direct);
        let b = measurement(20.0, 1.0, Method::Direct);
        let merged = EpistemicMerger::default().merge(&a, &b).unwrap();
        assert!((merged.h0_merged - 15.0).abs() < 1e-12);
    }

    #[test]
    fn bias_direction_follows_direct_input_in_either_order() {
        let direct = measurement(20.0, 1.0, Method::Direct);
        let indirect = measurement(10.0, 1.0, Method::Indirect);
        let merger = EpistemicMerger::default();
        let ab = merger.merge(&direct, &indirect).unwrap();
        let ba = merger.merge(&indirect, &direct).unwrap();
        assert!((ab.h0_merged - 17.5).abs() < 1e-12);
        assert!((ba.h0_merged - 17.5).abs() < 1e-12);
    }

    #[test]
    fn zero_fraction_recovers_weighted_mean() {
        let a = measurement(10.0, 1.0, Method::Direct);
        let b = measurement(20.0, 1.0, Method::Indirect);
        let merged = EpistemicMerger::new(MergeConfig::unbiased()).merge(&a, &b).unwrap();
        assert!((merged.h0_merged - 15.0).abs() < 1e-12);
    }

    // -----------------------------------------------------------------------
    // Inflation
    // -----------------------------------------------------------------------

    #[test]
    fn agreeing_pair_is_not_inflated() {
        let a = measurement(70.0, 1.0, Method::Direct);
        let b = measurement(70.5, 1.0, Method::Indirect);
        let merged = EpistemicMerger::default().merge(&a, &b).unwrap();
        assert_eq!(merged.inflation, 1.0);
        assert!((merged.u_merged - naive(&a, &b)).abs() < 1e-12);
    }

    #[test]
    fn higher_threshold_inflates_less() {
        let merger = EpistemicMerger::new(MergeConfig {
            inflation_threshold: 4.0,
            ..Default::default()
        });
        let merged = merger.merge(&planck(), &shoes()).unwrap();
        assert!((merged.inflation - merged.delta_t / 4.0).abs() < 1e-12);
    }

    #[test]
    fn identical_values_have_zero_distance() {
        let a = measurement(70.0, 0.3, Method::Direct);
        let b = measurement(70.0, 2.0, Method::Indirect);
        let merged = EpistemicMerger::default().merge(&a, &b).unwrap();
        assert_eq!(merged.delta_t, 0.0);
        assert!((merged.h0_merged - 70.0).abs() < 1e-12);
    }

    // -----------------------------------------------------------------------
    // Configuration
    // -----------------------------------------------------------------------

    #[test]
    fn try_new_rejects_invalid_config() {
        let err = EpistemicMerger::try_new(MergeConfig {
            bias_fraction: 0.9,
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(err, MergeError::Config(_)));
    }

    // -----------------------------------------------------------------------
    // Degenerate inputs
    // -----------------------------------------------------------------------

    #[test]
    fn unusable_sigmas_are_degenerate() {
        for sigma in [0.0, -0.5, f64::NAN, f64::INFINITY] {
            let err = ensure_usable("Planck", sigma).unwrap_err();
            assert!(matches!(
                &err,
                MergeError::DegenerateInput { name, .. } if name == "Planck"
            ));
            assert!(err.to_string().contains("Planck"));
        }
    }

    #[test]
    fn positive_sigmas_are_usable() {
        for sigma in [1e-300, 0.14, 1e300] {
            assert!(ensure_usable("SH0ES", sigma).is_ok());
        }
    }

    // -----------------------------------------------------------------------
    // Extreme scales
    // -----------------------------------------------------------------------

    #[test]
    fn tiny_equal_sigmas_stay_well_defined() {
        let a = measurement(70.0, 1e-200, Method::Indirect);
        let b = measurement(70.0, 1e-200, Method::Direct);
        let merged = EpistemicMerger::default().merge(&a, &b).unwrap();
        assert_eq!(merged.delta_t, 0.0);
        assert!((merged.h0_merged - 70.0).abs() < 1e-12);
        assert!(merged.u_merged > 0.0 && merged.u_merged.is_finite());
        assert!((merged.naive_sigma / 1e-200 - 0.5f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn huge_sigmas_stay_finite() {
        let a = measurement(70.0, 1e200, Method::Indirect);
        let b = measurement(71.0, 1e200, Method::Direct);
        let merged = EpistemicMerger::default().merge(&a, &b).unwrap();
        assert!(merged.h0_merged >= 70.0 && merged.h0_merged <= 71.0);
        assert!(merged.u_merged.is_finite() && merged.u_merged > 0.0);
        assert_eq!(merged.inflation, 1.0);
    }

    #[test]
    fn mismatched_scales_follow_the_precise_input() {
        let loose = measurement(10.0, 1e200, Method::Direct);
        let tight = measurement(20.0, 1e-200, Method::Direct);
        let merged = EpistemicMerger::default().merge(&loose, &tight).unwrap();
        assert_eq!(merged.h0_merged, 20.0);
        assert!(merged.delta_t.is_finite());
        assert!(merged.u_merged.is_finite() && merged.u_merged > 0.0);
    }

    // -----------------------------------------------------------------------
    // Properties
    // -----------------------------------------------------------------------

    fn arb_method() -> impl Strategy<Value = Method> {
        prop_oneof![Just(Method::Direct), Just(Method::Indirect)]
    }

    /// Sigmas spread log-uniformly over 1e-200..1e200.
    fn arb_sigma() -> impl Strategy<Value = f64> {
        (-200.0f64..200.0).prop_map(|exp| 10f64.powf(exp))
    }

    fn arb_measurement() -> impl Strategy<Value = MeasurementModel> {
        (-1.0e3f64..1.0e3, arb_sigma(), arb_method())
            .prop_map(|(value, sigma, method)| measurement(value, sigma, method))
    }

    proptest! {
        #[test]
        fn never_tighter_than_naive(a in arb_measurement(), b in arb_measurement()) {
            let merged = EpistemicMerger::default().merge(&a, &b).unwrap();
            prop_assert!(merged.u_merged >= naive(&a, &b) * (1.0 - 1e-12));
            prop_assert!(merged.u_merged > 0.0);
            prop_assert!(merged.h0_merged.is_finite() && merged.delta_t.is_finite());
            prop_assert!(merged.inflation >= 1.0);
        }

        #[test]
        fn distance_is_symmetric(a in arb_measurement(), b in arb_measurement()) {
            let merger = EpistemicMerger::default();
            let ab = merger.merge(&a, &b).unwrap();
            let ba = merger.merge(&b, &a).unwrap();
            prop_assert_eq!(ab.delta_t, ba.delta_t);
        }

        #[test]
        fn equal_values_give_zero_distance(
            value in -1.0e3f64..1.0e3,
            s1 in arb_sigma(),
            s2 in arb_sigma(),
        ) {
            let a = measurement(value, s1, Method::Direct);
            let b = measurement(value, s2, Method::Indirect);
            prop_assert_eq!(EpistemicMerger::default().merge(&a, &b).unwrap().delta_t, 0.0);
        }

        #[test]
        fn wider_gap_never_tightens(
            base in -1.0e3f64..1.0e3,
            gap in 0.0f64..50.0,
            extra in 0.0f64..50.0,
            s1 in 1.0e-2f64..10.0,
            s2 in 1.0e-2f64..10.0,
        ) {
            let merger = EpistemicMerger::default();
            let a = measurement(base, s1, Method::Indirect);
            let near = merger.merge(&a, &measurement(base + gap, s2, Method::Direct)).unwrap();
            let far = merger.merge(&a, &measurement(base + gap + extra, s2, Method::Direct)).unwrap();
            prop_assert!(far.u_merged >= near.u_merged);
            prop_assert!(far.delta_t >= near.delta_t);
        }

        #[test]
        fn merged_value_stays_between_inputs(a in arb_measurement(), b in arb_measurement()) {
            let merged = EpistemicMerger::default().merge(&a, &b).unwrap();
            let lo = a.value().min(b.value());
            let hi = a.value().max(b.value());
            let slack = 1e-9 * (1.0 + lo.abs().max(hi.abs()));
            prop_assert!(merged.h0_merged >= lo - slack && merged.h0_merged <= hi + slack);
        }
    }
}
