macro_rules! nutype_string {
    ($ident:ident($($arg:ident($($inner:tt)*)),* $(,)?)) => {
        #[::nutype::nutype(
            $($arg($($inner)*),)*
            derive(
                Debug,
                Clone,
                PartialEq,
                Eq,
                Hash,
                Deref,
                TryFrom,
                Serialize,
                Deserialize,
            )
        )]
        pub struct $ident(String);
    };
}

macro_rules! entity_id {
    ($ident:ident) => {
        #[::nutype::nutype(derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            Display,
            Deref,
            From,
            Serialize,
            Deserialize,
        ))]
        pub struct $ident(i32);
    };
}

pub(crate) use entity_id;
pub(crate) use nutype_string;
