/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub command: String,
    pub url: String,
}

impl Invocation {
    /// Interpret operands (program name excluded).
    ///
    /// Two operands are `<method> <url>`. Any other non-zero count takes the
    /// first operand as the URL and uses GET. No operands yields `None`.
    pub fn from_args(args: &[String]) -> Option<Self> {
        match args {
            [] => None,
            [command, url] => Some(Self {
                command: command.clone(),
                url: url.clone(),
            }),
            [url, ..] => Some(Self {
                command: "GET".to_string(),
                url: url.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_operands() {
        assert_eq!(Invocation::from_args(&[]), None);
    }

    #[test]
    fn url_only_defaults_to_get() {
        let inv = Invocation::from_args(&args(&["http://example.com"])).unwrap();
        assert_eq!(inv.command, "GET");
        assert_eq!(inv.url, "http://example.com");
    }

    #[test]
    fn method_and_url() {
        let inv = Invocation::from_args(&args(&["POST", "http://example.com"])).unwrap();
        assert_eq!(inv.command, "POST");
        assert_eq!(inv.url, "http://example.com");
    }

    #[test]
    fn extra_operands_use_first_as_url() {
        let inv = Invocation::from_args(&args(&["http://a", "POST", "x"])).unwrap();
        assert_eq!(inv.command, "GET");
        assert_eq!(inv.url, "http://a");
    }
}
