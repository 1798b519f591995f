/// Construct a [`Value`](crate::Value) from record-like literal syntax.
///
/// Object keys must be string literals. Anything that is not a literal
/// keyword, array or object is converted with [`From`].
///
/// ```
/// use jstp::record;
///
/// let retries = 3;
/// let v = record!({
///     "name": "jstp",
///     "retries": retries,
///     "offset": -1.5,
///     "tags": ["a", null, undefined],
///     "nested": { "ok": true }
/// });
///
/// assert_eq!(v["retries"].number_value(), 3.0);
/// assert!(v["tags"][2].is_undefined());
/// assert_eq!(
///     v.dump(),
///     r#"{"name":"jstp","nested":{"ok":true},"offset":-1.5,"retries":3,"tags":["a",null,undefined]}"#
/// );
/// ```
#[macro_export]
macro_rules! record {
    ($($tt:tt)+) => {
        $crate::__record_internal!($($tt)+)
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! __record_internal {
    // Arrays: finished elements accumulate inside the brackets.

    (@array [$($elems:expr,)*]) => {
        $crate::Value::array(::std::vec![$($elems,)*])
    };

    (@array [$($elems:expr),*]) => {
        $crate::Value::array(::std::vec![$($elems),*])
    };

    (@array [$($elems:expr,)*] undefined $($rest:tt)*) => {
        $crate::__record_internal!(@array [$($elems,)* $crate::Value::UNDEFINED] $($rest)*)
    };

    (@array [$($elems:expr,)*] null $($rest:tt)*) => {
        $crate::__record_internal!(@array [$($elems,)* $crate::Value::NULL] $($rest)*)
    };

    (@array [$($elems:expr,)*] true $($rest:tt)*) => {
        $crate::__record_internal!(@array [$($elems,)* $crate::Value::TRUE] $($rest)*)
    };

    (@array [$($elems:expr,)*] false $($rest:tt)*) => {
        $crate::__record_internal!(@array [$($elems,)* $crate::Value::FALSE] $($rest)*)
    };

    (@array [$($elems:expr,)*] [$($array:tt)*] $($rest:tt)*) => {
        $crate::__record_internal!(@array [$($elems,)* $crate::__record_internal!([$($array)*])] $($rest)*)
    };

    (@array [$($elems:expr,)*] {$($map:tt)*} $($rest:tt)*) => {
        $crate::__record_internal!(@array [$($elems,)* $crate::__record_internal!({$($map)*})] $($rest)*)
    };

    (@array [$($elems:expr,)*] $next:expr, $($rest:tt)*) => {
        $crate::__record_internal!(@array [$($elems,)* $crate::Value::from($next),] $($rest)*)
    };

    (@array [$($elems:expr,)*] $last:expr) => {
        $crate::__record_internal!(@array [$($elems,)* $crate::Value::from($last)])
    };

    (@array [$($elems:expr),*] , $($rest:tt)*) => {
        $crate::__record_internal!(@array [$($elems,)*] $($rest)*)
    };

    // Objects: insert one entry, then recurse on what follows its comma.

    (@object $object:ident) => {};

    (@object $object:ident $key:literal : undefined $(, $($rest:tt)*)?) => {
        $object.insert(::std::string::String::from($key), $crate::Value::UNDEFINED);
        $crate::__record_internal!(@object $object $($($rest)*)?);
    };

    (@object $object:ident $key:literal : null $(, $($rest:tt)*)?) => {
        $object.insert(::std::string::String::from($key), $crate::Value::NULL);
        $crate::__record_internal!(@object $object $($($rest)*)?);
    };

    (@object $object:ident $key:literal : true $(, $($rest:tt)*)?) => {
        $object.insert(::std::string::String::from($key), $crate::Value::TRUE);
        $crate::__record_internal!(@object $object $($($rest)*)?);
    };

    (@object $object:ident $key:literal : false $(, $($rest:tt)*)?) => {
        $object.insert(::std::string::String::from($key), $crate::Value::FALSE);
        $crate::__record_internal!(@object $object $($($rest)*)?);
    };

    (@object $object:ident $key:literal : [$($array:tt)*] $(, $($rest:tt)*)?) => {
        $object.insert(
            ::std::string::String::from($key),
            $crate::__record_internal!([$($array)*]),
        );
        $crate::__record_internal!(@object $object $($($rest)*)?);
    };

    (@object $object:ident $key:literal : {$($map:tt)*} $(, $($rest:tt)*)?) => {
        $object.insert(
            ::std::string::String::from($key),
            $crate::__record_internal!({$($map)*}),
        );
        $crate::__record_internal!(@object $object $($($rest)*)?);
    };

    (@object $object:ident $key:literal : $value:expr , $($rest:tt)*) => {
        $object.insert(::std::string::String::from($key), $crate::Value::from($value));
        $crate::__record_internal!(@object $object $($rest)*);
    };

    (@object $object:ident $key:literal : $value:expr) => {
        $object.insert(::std::string::String::from($key), $crate::Value::from($value));
    };

    // Entry points.

    (undefined) => {
        $crate::Value::UNDEFINED
    };

    (null) => {
        $crate::Value::NULL
    };

    (true) => {
        $crate::Value::TRUE
    };

    (false) => {
        $crate::Value::FALSE
    };

    ([]) => {
        $crate::Value::array(::std::vec::Vec::new())
    };

    ([ $($tt:tt)+ ]) => {
        $crate::__record_internal!(@array [] $($tt)+)
    };

    ({}) => {
        $crate::Value::object($crate::Object::new())
    };

    ({ $($tt:tt)+ }) => {{
        let mut object = $crate::Object::new();
        $crate::__record_internal!(@object object $($tt)+);
        $crate::Value::object(object)
    }};

    ($other:expr) => {
        $crate::Value::from($other)
    };
}
