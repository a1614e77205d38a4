use std::fmt;

/// A single call through a transactional proxy: the operation name and its
/// arguments, formatted once for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub operation: &'static str,
    pub arguments: String,
}

impl Invocation {
    pub fn new(operation: &'static str, arguments: &dyn fmt::Debug) -> Self {
        Self {
            operation,
            arguments: format!("{:?}", arguments),
        }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.operation, self.arguments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_arguments_as_tuple() {
        let invocation = Invocation::new("transfer", &("aaa", "bbb", 100));
        assert_eq!(invocation.operation, "transfer");
        assert_eq!(invocation.to_string(), r#"transfer("aaa", "bbb", 100)"#);
    }

    #[test]
    fn no_arguments_formats_as_unit() {
        assert_eq!(
            Invocation::new("find_all_accounts", &()).to_string(),
            "find_all_accounts()"
        );
    }
}
