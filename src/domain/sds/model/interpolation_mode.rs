coded_enum! {
    /// How values between two stored events are calculated.
    pub enum InterpolationMode("interpolation mode") {
        Continuous = 0,
        StepwiseContinuousLeading = 1,
        StepwiseContinuousTrailing = 2,
        /// No calculation; the type's default value is returned.
        Discrete = 3,
        ContinuousNullableLeading = 4,
        ContinuousNullableTrailing = 5,
    }
}

impl Default for InterpolationMode {
    fn default() -> Self {
        InterpolationMode::Continuous
    }
}
