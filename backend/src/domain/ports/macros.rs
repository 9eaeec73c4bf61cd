//! Helper macro for generating domain port error enums.

/// Generate a `thiserror` enum whose variants all carry a `message: String`
/// field, plus a snake_case convenience constructor per variant accepting
/// `impl Into<String>`.
macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant { message: String },
            )*
        }

        impl $name {
            ::paste::paste! {
                $(
                    pub fn [<$variant:snake>](message: impl Into<String>) -> Self {
                        Self::$variant { message: message.into() }
                    }
                )*
            }
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    //! Regression coverage for the generated constructors and messages.
    define_port_error! {
        pub enum ExamplePortError {
            Connection => "connect: {message}",
            Query => "query: {message}",
        }
    }

    #[test]
    fn constructors_accept_str() {
        let err = ExamplePortError::connection("refused");
        assert_eq!(err.to_string(), "connect: refused");
    }

    #[test]
    fn variants_compare_by_message() {
        assert_eq!(
            ExamplePortError::query("boom"),
            ExamplePortError::Query {
                message: "boom".to_owned()
            }
        );
    }
}
