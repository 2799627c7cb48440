mod natural;
mod sort;

pub use natural::{
    Digits, SortKey, Token, decimal_value, is_decimal_digit, natural_cmp, natural_sort_key,
};
pub use sort::{sort_naturally, sorted_names};
