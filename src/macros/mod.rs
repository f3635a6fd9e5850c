/// Declares a lazily compiled, built-in [`PrefixTable`] from an ordered list
/// of `(pattern, label)` pairs.
///
/// [`PrefixTable`]: crate::regex_based_matcher::PrefixTable
macro_rules! prefix_table {
    (
        $(#[$meta:meta])*
        $vis:vis static $name:ident = [
            $(($pattern:expr, $label:expr)),* $(,)?
        ];
    ) => {
        $(#[$meta])*
        $vis static $name: std::sync::LazyLock<crate::regex_based_matcher::PrefixTable> =
            std::sync::LazyLock::new(|| {
                crate::regex_based_matcher::PrefixTable::compiled_in(
                    stringify!($name),
                    &[$(($pattern, $label)),*],
                )
            });
    };
}

pub(crate) use prefix_table;
