//! Helpers for string-backed GraphQL scalars.

use std::{fmt, marker::PhantomData, str::FromStr};

use juniper::{
    GraphQLType, InputValue, ParseScalarResult, ParseScalarValue, ScalarToken,
    ScalarValue, Value,
};

/// Adapter for `#[graphql(with = ..)]` attribute, representing a scalar
/// wrapping the `Inner` domain value as its string form.
#[derive(Debug)]
pub struct Via<Inner>(PhantomData<Inner>);

impl<Inner> Via<Inner> {
    /// Outputs the scalar as a string of its `Inner` value.
    pub fn to_output<T, S>(value: &T) -> Value<S>
    where
        Inner: fmt::Display,
        T: AsRef<Inner>,
        S: ScalarValue,
    {
        Value::scalar(value.as_ref().to_string())
    }

    /// Parses the scalar from a string of its `Inner` value.
    ///
    /// # Errors
    ///
    /// If the input is not a string, or doesn't represent a valid `Inner`
    /// value.
    pub fn from_input<T, S>(input: &InputValue<S>) -> Result<T, String>
    where
        Inner: FromStr,
        Inner::Err: fmt::Display,
        T: From<Inner> + GraphQLType<S, TypeInfo = ()>,
        S: ScalarValue,
    {
        let name = T::name(&()).unwrap_or_default();
        input
            .as_string_value()
            .ok_or_else(|| {
                format!("`{name}` scalar expects a string, found: {input}")
            })?
            .parse()
            .map(T::from)
            .map_err(|e| format!("invalid `{name}` scalar: {e}"))
    }

    /// Parses the provided [`ScalarToken`] as a [`String`].
    ///
    /// # Errors
    ///
    /// If the token is not a string literal.
    pub fn parse_token<S: ScalarValue>(
        token: ScalarToken<'_>,
    ) -> ParseScalarResult<S> {
        <String as ParseScalarValue<S>>::from_str(token)
    }
}
