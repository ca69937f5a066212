use std::ffi::OsString;

pub use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// HTTP method
    /// Required in practice. One of GET, POST or DELETE (case-insensitive).
    /// If omitted, the usage advisory is printed instead of sending anything.
    #[clap(help = "HTTP method (GET, POST or DELETE)")]
    method: Option<String>,

    /// Target resource
    /// The resource name, optionally followed by /<id>,
    /// e.g. "products" or "products/3".
    #[clap(help = "resource name, optionally with /<id>")]
    resource: Option<String>,

    /// Extra arguments
    /// POST products expects the triple <title> <price> <category>.
    #[clap(help = "extra arguments for the method")]
    extra: Vec<String>,

    /// Verbose mode
    /// Optional. Echo the request line and the raw response body.
    #[clap(
        short = 'v',
        long,
        help = "Print verbose message",
        default_value = "false"
    )]
    verbose: bool,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    method: Option<String>,
    resource: Option<String>,
    extra: Vec<String>,
    verbose: bool,
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        let args = ClapArgs::parse();
        Self {
            method: args.method,
            resource: args.resource,
            extra: args.extra,
            verbose: args.verbose,
        }
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args = ClapArgs::parse_from(itr);
        Self {
            method: args.method,
            resource: args.resource,
            extra: args.extra,
            verbose: args.verbose,
        }
    }

    pub fn method(&self) -> Option<&String> {
        self.method.as_ref()
    }

    pub fn resource(&self) -> Option<&String> {
        self.resource.as_ref()
    }

    pub fn extra(&self) -> &[String] {
        &self.extra
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_args_method_and_resource() {
        let args = CommandLineArgs::parse_from(["program", "GET", "products"]);
        assert_eq!(args.method(), Some(&"GET".to_string()));
        assert_eq!(args.resource(), Some(&"products".to_string()));
        assert!(args.extra().is_empty());
        assert!(!args.verbose());
    }

    #[test]
    fn test_parse_args_collects_extra() {
        let args =
            CommandLineArgs::parse_from(["program", "POST", "products", "Shirt", "19.99", "men"]);
        assert_eq!(args.method(), Some(&"POST".to_string()));
        assert_eq!(args.extra(), ["Shirt", "19.99", "men"]);
    }

    #[test]
    fn test_parse_args_verbose() {
        let args = CommandLineArgs::parse_from(["program", "--verbose", "GET", "products"]);
        assert!(args.verbose());
    }

    #[test]
    fn test_parse_args_short_flags() {
        let args = CommandLineArgs::parse_from(["program", "-v", "DELETE", "products/5"]);
        assert!(args.verbose());
        assert_eq!(args.resource(), Some(&"products/5".to_string()));
    }

    #[test]
    fn test_default_values() {
        let args = CommandLineArgs::parse_from(["program"]);
        assert_eq!(args.method(), None);
        assert_eq!(args.resource(), None);
        assert!(args.extra().is_empty());
        assert!(!args.verbose());
    }
}
