/// Declares a value filter that renders resolved numbers through one of the
/// `PhoneNumberValue` rendering methods.
///
/// Every filter shares the same shape: a fixed country used as region hint,
/// resolution of scalar input, and the input handed back untouched whenever
/// it cannot be resolved. Only the rendering differs.
macro_rules! rendering_filter {
    ($(#[$meta:meta])* $name:ident => $render:ident) => {
        $(#[$meta])*
        pub struct $name<
            P: $crate::interfaces::NumberingPlan = $crate::engine::LibPhoneNumberPlan,
        > {
            inner: $crate::formatter::filters::FilterBase<P>,
        }

        impl $name<$crate::engine::LibPhoneNumberPlan> {
            pub fn new(country_code: $crate::country_code::CountryCode) -> Self {
                Self::with_plan($crate::engine::LibPhoneNumberPlan::shared(), country_code)
            }

            /// Builds the filter around the configured default country.
            pub fn from_configuration(
                config: &$crate::config::Configuration,
            ) -> $crate::phonenumbervalue::Result<Self> {
                Ok(Self::new(config.default_country_code()?))
            }
        }

        impl<P: $crate::interfaces::NumberingPlan> $name<P> {
            pub fn with_plan(
                plan: std::sync::Arc<P>,
                country_code: $crate::country_code::CountryCode,
            ) -> Self {
                Self {
                    inner: $crate::formatter::filters::FilterBase::new(plan, country_code),
                }
            }

            pub fn country_code(&self) -> $crate::country_code::CountryCode {
                self.inner.country_code()
            }

            /// Renders an already resolved number.
            pub fn filter_number(
                &self,
                number: &$crate::phonenumbervalue::PhoneNumberValue<P>,
            ) -> String {
                number.$render()
            }
        }

        impl<P: $crate::interfaces::NumberingPlan> $crate::formatter::filters::PhoneNumberFilter
            for $name<P>
        {
            fn filter(&self, value: serde_json::Value) -> serde_json::Value {
                match self.inner.resolve(&value) {
                    Some(number) => serde_json::Value::String(number.$render()),
                    None => value,
                }
            }
        }
    };
}

pub(crate) use rendering_filter;
