/// `From<module::Variant>` for every listed variant of a wrapping enum.
#[macro_export]
macro_rules! impl_wrap_from_many {
    ($t:ident, $m:ident, [$($var:ident),* $(,)?]) => {
        $(impl From<$m::$var> for $t {
            fn from(inner: $m::$var) -> Self {
                $t::$var(inner)
            }
        })*
    };
}
