// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression — works for literals, consts, or vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! record {
    // Ordered field map shorthand: record! { "Name" => name, "Bio" => bio }
    () => {
        $crate::model::Record::new()
    };
    ($($key:expr => $val:expr),+ $(,)?) => {{
        let mut r = $crate::model::Record::new();
        $(
            r.insert($key, $val);
        )+
        r
    }};
}
