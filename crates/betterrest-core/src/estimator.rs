//! Bedtime estimation.
//!
//! One synchronous call: turn the wake time into seconds since midnight, ask
//! the model how much sleep is actually needed, and step back that far from
//! the wake time. There is no state between calls.

use crate::error::{EstimationError, ModelError};
use crate::model::{SleepFeatures, SleepModel};
use crate::recommendation::BedtimeRecommendation;
use crate::time::{TimeOfDay, TimeStyle};

/// Computes bedtimes from a loaded [`SleepModel`].
#[derive(Debug, Clone)]
pub struct BedtimeEstimator<M> {
    model: M,
}

impl<M: SleepModel> BedtimeEstimator<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Recommended bedtime for the given inputs.
    ///
    /// Inputs are handed to the model as is; range checks belong to the
    /// caller (see [`crate::inputs`]).
    ///
    /// # Errors
    ///
    /// `EstimationError::ModelFailure` if the model fails or returns a value
    /// that is not a usable duration.
    pub fn estimate(
        &self,
        wake_time: TimeOfDay,
        sleep_goal_hours: f64,
        caffeine_count: u32,
    ) -> Result<TimeOfDay, EstimationError> {
        let features = SleepFeatures {
            wake: f64::from(wake_time.hour() * 3600 + wake_time.minute() * 60),
            estimated_sleep: sleep_goal_hours,
            coffee: f64::from(caffeine_count),
        };
        tracing::debug!(?features, "predicting sleep need");

        let prediction = self.model.predict(&features).map_err(|e| {
            tracing::warn!(error = %e, "sleep model failed");
            EstimationError::ModelFailure(e)
        })?;

        let bedtime = wake_time
            .wrapping_sub_secs(prediction.actual_sleep)
            .ok_or_else(|| {
                tracing::warn!(
                    actual_sleep = prediction.actual_sleep,
                    "prediction is not a usable duration"
                );
                EstimationError::ModelFailure(ModelError::Inference(format!(
                    "unusable prediction: {}",
                    prediction.actual_sleep
                )))
            })?;

        tracing::debug!(
            actual_sleep = prediction.actual_sleep,
            %wake_time,
            %bedtime,
            "estimated bedtime"
        );
        Ok(bedtime)
    }

    /// Like [`estimate`](Self::estimate), but resolved into what the user sees.
    pub fn recommend(
        &self,
        wake_time: TimeOfDay,
        sleep_goal_hours: f64,
        caffeine_count: u32,
        style: TimeStyle,
    ) -> BedtimeRecommendation {
        BedtimeRecommendation::from_result(
            self.estimate(wake_time, sleep_goal_hours, caffeine_count),
            style,
        )
    }
}

/// Load a model and estimate in one go.
///
/// A loader error counts as a model failure, so an unavailable or broken
/// artifact produces the error recommendation rather than an `Err`.
pub fn recommend_with<M, F>(
    load: F,
    wake_time: TimeOfDay,
    sleep_goal_hours: f64,
    caffeine_count: u32,
    style: TimeStyle,
) -> BedtimeRecommendation
where
    M: SleepModel,
    F: FnOnce() -> Result<M, ModelError>,
{
    match load() {
        Ok(model) => BedtimeEstimator::new(model).recommend(
            wake_time,
            sleep_goal_hours,
            caffeine_count,
            style,
        ),
        Err(e) => {
            tracing::warn!(error = %e, "could not load sleep model");
            BedtimeRecommendation::model_failure()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Coefficients, LinearSleepModel, SleepPrediction};
    use proptest::prelude::*;
    use std::sync::Mutex;

    /// Always predicts the same duration.
    struct FixedModel(f64);

    impl SleepModel for FixedModel {
        fn predict(&self, _features: &SleepFeatures) -> Result<SleepPrediction, ModelError> {
            Ok(SleepPrediction {
                actual_sleep: self.0,
            })
        }
    }

    struct FailingModel;

    impl SleepModel for FailingModel {
        fn predict(&self, _features: &SleepFeatures) -> Result<SleepPrediction, ModelError> {
            Err(ModelError::Inference("stub failure".into()))
        }
    }

    /// Records every feature row it sees.
    #[derive(Default)]
    struct RecordingModel {
        seen: Mutex<Vec<SleepFeatures>>,
    }

    impl SleepModel for RecordingModel {
        fn predict(&self, features: &SleepFeatures) -> Result<SleepPrediction, ModelError> {
            self.seen.lock().unwrap().push(*features);
            Ok(SleepPrediction {
                actual_sleep: features.estimated_sleep * 3600.0,
            })
        }
    }

    fn t(hour: u32, minute: u32) -> TimeOfDay {
        TimeOfDay::from_hm(hour, minute).unwrap()
    }

    #[test]
    fn seven_am_with_eight_hours_is_eleven_pm() {
        let estimator = BedtimeEstimator::new(FixedModel(28_800.0));
        let bedtime = estimator.estimate(t(7, 0), 8.0, 1).unwrap();
        assert_eq!(bedtime, t(23, 0));
        assert_eq!(bedtime.format(TimeStyle::TwelveHour), "11:00 PM");
        assert_eq!(bedtime.format(TimeStyle::TwentyFourHour), "23:00");
    }

    #[test]
    fn model_failure_never_yields_a_time() {
        let estimator = BedtimeEstimator::new(FailingModel);
        let err = estimator.estimate(t(7, 0), 8.0, 1).unwrap_err();
        assert!(matches!(err, EstimationError::ModelFailure(_)));

        let rec = estimator.recommend(t(7, 0), 8.0, 1, TimeStyle::TwelveHour);
        assert_eq!(
            rec.message(),
            "Sorry, there was a problem calculating your bedtime."
        );
    }

    #[test]
    fn non_finite_prediction_is_model_failure() {
        let estimator = BedtimeEstimator::new(FixedModel(f64::NAN));
        assert!(estimator.estimate(t(7, 0), 8.0, 1).is_err());
    }

    #[test]
    fn features_are_passed_through_unmodified() {
        let estimator = BedtimeEstimator::new(RecordingModel::default());
        estimator.estimate(t(6, 30), 4.0, 1).unwrap();
        estimator.estimate(t(6, 30), 12.0, 19).unwrap();
        estimator.estimate(t(6, 30), 20.0, 0).unwrap();

        let seen = estimator.model().seen.lock().unwrap();
        assert_eq!(seen[0].wake, 23_400.0);
        assert_eq!(seen[0].estimated_sleep, 4.0);
        assert_eq!(seen[1].estimated_sleep, 12.0);
        assert_eq!(seen[1].coffee, 19.0);
        assert_eq!(seen[2].estimated_sleep, 20.0);
        assert_eq!(seen[2].coffee, 0.0);
    }

    #[test]
    fn repeated_estimates_agree() {
        let model = LinearSleepModel::new(
            0.0,
            Coefficients {
                wake: 0.01,
                estimated_sleep: 3600.0,
                coffee: 420.0,
            },
        );
        let estimator = BedtimeEstimator::new(&model);
        let first = estimator.estimate(t(7, 15), 7.5, 3).unwrap();
        let second = estimator.estimate(t(7, 15), 7.5, 3).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn boxed_models_work() {
        let model: Box<dyn SleepModel> = Box::new(FixedModel(3_600.0));
        let estimator = BedtimeEstimator::new(model);
        assert_eq!(estimator.estimate(t(0, 30), 8.0, 1).unwrap(), t(23, 30));
    }

    #[test]
    fn loader_failure_yields_error_recommendation() {
        let rec = recommend_with::<FixedModel, _>(
            || Err(ModelError::NotConfigured),
            t(7, 0),
            8.0,
            1,
            TimeStyle::TwelveHour,
        );
        assert!(rec.is_error());
    }

    #[test]
    fn loader_success_yields_bedtime() {
        let rec = recommend_with(
            || Ok(FixedModel(28_800.0)),
            t(7, 0),
            8.0,
            1,
            TimeStyle::TwentyFourHour,
        );
        assert_eq!(rec.message(), "23:00");
    }

    proptest! {
        #[test]
        fn bedtime_is_wake_minus_prediction_mod_day(
            hour in 0u32..24,
            minute in 0u32..60,
            predicted in 0u32..86_400,
        ) {
            let estimator = BedtimeEstimator::new(FixedModel(f64::from(predicted)));
            let bedtime = estimator.estimate(t(hour, minute), 8.0, 1).unwrap();

            let wake = i64::from(hour * 3600 + minute * 60);
            let expected = (wake - i64::from(predicted)).rem_euclid(86_400);
            prop_assert_eq!(i64::from(bedtime.seconds_since_midnight()), expected);
        }
    }
}
